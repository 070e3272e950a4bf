use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{app_dir, CONFIG_FILE_NAME};
use crate::errors::{HookmenuError, HookmenuResult};
use crate::services::template_engine::TemplateEngine;
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {
    pub fn default_config_path() -> PathBuf {
        app_dir().join(CONFIG_FILE_NAME)
    }

    /// Reads the configuration file, or the defaults when it does not exist.
    pub fn load(path: Option<&Path>) -> HookmenuResult<(Config, PathBuf)> {
        let config_path = path.map_or_else(Self::default_config_path, Path::to_path_buf);

        if config_path.exists() {
            log::debug!("📋 Loading config from: {}", config_path.display());
            let content = fs::read_to_string(&config_path).map_err(|e| HookmenuError::ConfigurationFileError {
                path: config_path.display().to_string(),
                reason: e.to_string(),
            })?;
            let config: Config = toml::from_str(&content)?;
            return Ok((config, config_path));
        }

        log::debug!("📋 No config at {}, using defaults", config_path.display());
        Ok((Config::default(), config_path))
    }

    pub fn create_sample_config(path: &Path) -> HookmenuResult<()> {
        let storage_path = path
            .parent()
            .map_or_else(|| PathBuf::from("storage.json"), |dir| dir.join("storage.json"));

        let sample_config = format!(
            r#"# Hookmenu Configuration

[storage]
# JSON file holding the webhook list; shared by every hookmenu process
path = "{}"
# Pick up edits made by other processes while `hookmenu serve` runs
watch = true

[dispatch]
# How long the success badge stays before the indicator clears (ms)
success_reset_ms = 750
# chrono format used for {{{{localDateTime}}}}
local_datetime_format = "%-m/%-d/%Y, %-I:%M:%S %p"

[editor]
# Quiet period before queued saves are written (ms)
save_debounce_ms = 500
# How long "Options saved." stays visible (ms)
save_status_ms = 750

[server]
# Address of the local bridge used by the browser shim
host = "127.0.0.1"
port = 8765
"#,
            storage_path.display().to_string().replace('\\', "\\\\")
        );

        if path.exists() {
            return Err(HookmenuError::config_error(
                &format!("{} already exists", path.display()),
                None,
                Some("Edit the existing file or remove it first"),
            ));
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, sample_config)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !TemplateEngine::is_valid_format(&config.dispatch.local_datetime_format) {
            errors.push(format!(
                "dispatch.local_datetime_format '{}' is not a valid chrono format",
                config.dispatch.local_datetime_format
            ));
        }

        if config.server.port == 0 {
            errors.push("server.port must not be 0".to_string());
        }

        if config.server.host.trim().is_empty() {
            errors.push("server.host must not be empty".to_string());
        }

        if config.storage.path.as_os_str().is_empty() {
            errors.push("storage.path must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let (config, path) = ConfigManager::load(Some(&dir.path().join("config.toml"))).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.dispatch.success_reset_ms, 750);
        assert_eq!(config.editor.save_debounce_ms, 500);
        assert!(path.ends_with("config.toml"));
    }

    #[test]
    fn sample_config_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hookmenu").join("config.toml");
        ConfigManager::create_sample_config(&path).unwrap();

        let (config, _) = ConfigManager::load(Some(&path)).unwrap();
        assert_eq!(config.storage.path, dir.path().join("hookmenu").join("storage.json"));
        assert_eq!(config.server.port, 8765);
        assert!(ConfigManager::validate_config(&config).is_ok());
        assert!(ConfigManager::create_sample_config(&path).is_err());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[dispatch]\nsuccess_reset_ms = 10\n").unwrap();

        let (config, _) = ConfigManager::load(Some(&path)).unwrap();
        assert_eq!(config.dispatch.success_reset_ms, 10);
        assert_eq!(config.dispatch.local_datetime_format, "%-m/%-d/%Y, %-I:%M:%S %p");
        assert_eq!(config.server.port, 8765);
    }

    #[test]
    fn rejects_bad_values() {
        let mut config = Config::default();
        config.server.port = 0;
        config.dispatch.local_datetime_format = "%Q".to_string();
        assert_eq!(ConfigManager::validate_config(&config).unwrap_err().len(), 2);
    }
}
