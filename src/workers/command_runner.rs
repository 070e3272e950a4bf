use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use serde_json::Value;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::dispatch_outcome::DispatchOutcome;
use crate::enums::dispatch_status::StatusKind;
use crate::enums::extension_message::ExtensionMessage;
use crate::enums::http_method::HttpMethod;
use crate::errors::{HookmenuError, HookmenuResult};
use crate::services::editor_session::EditorSession;
use crate::services::webhook_validator::WebhookValidator;
use crate::structs::config::config::Config;
use crate::structs::menu::menu_click::MenuClick;
use crate::structs::webhook::http_action_template::HttpActionTemplate;
use crate::structs::webhook::webhook_definition::WebhookDefinition;
use crate::ui::bridge_server::BridgeServer;
use crate::workers::background::Background;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub const fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> HookmenuResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::List => self.list_command().await,
            Commands::Menus => self.menus_command().await,
            Commands::Validate => self.validate_command().await,
            Commands::Send { name, selection, link, src } => self.send_command(name, selection, link, src).await,
            Commands::Add { name, url, method, payload, headers, document_patterns, target_patterns } => {
                self.add_command(name, url, &method, payload, headers, document_patterns, target_patterns).await
            }
            Commands::Remove { name } => self.remove_command(&name).await,
            Commands::Serve { port } => self.serve_command(port).await,
            Commands::Icon { status, title } => self.icon_command(&status, title).await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::debug!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn load_config(&self) -> HookmenuResult<(Config, PathBuf)> {
        ConfigManager::load(self.config_path.as_deref())
    }

    fn open_background(&self, watch_storage: bool) -> HookmenuResult<Background> {
        let (config, config_path) = self.load_config()?;
        if let Err(errors) = ConfigManager::validate_config(&config) {
            for error in &errors {
                log::error!("❌ {error}");
            }
            return Err(HookmenuError::config_error(
                &format!("{} problem(s) in {}", errors.len(), config_path.display()),
                None,
                Some("Run 'hookmenu validate' for details"),
            ));
        }
        Background::open(config, config_path, watch_storage)
    }

    fn init_command(&self) -> HookmenuResult<()> {
        log::info!("🚀 Initializing hookmenu configuration...");

        let path = self.config_path.clone().unwrap_or_else(ConfigManager::default_config_path);
        match ConfigManager::create_sample_config(&path) {
            Ok(()) => {
                log::info!("✅ Configuration file created successfully!");
                log::info!("📝 Add webhooks with 'hookmenu add <name> <url>'.");
                log::info!("🔧 Run 'hookmenu validate' to check your configuration.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {e}");
                Err(e)
            }
        }
    }

    async fn list_command(&self) -> HookmenuResult<()> {
        log::info!("📋 Loading webhooks...");
        let background = self.open_background(false)?;
        let definitions = background.store.load().await?;

        log::info!("\n📋 Configured Webhooks:");
        log::info!("{}", "=".repeat(50));

        if definitions.is_empty() {
            log::info!("⚠️ No webhooks configured.");
            log::info!("💡 Run 'hookmenu add <name> <url>' to create one.");
            return Ok(());
        }

        for (i, definition) in definitions.iter().enumerate() {
            log::info!("{}. ✅ {}", i + 1, definition.name);
            log::info!("   🔗 {} {}", definition.action.method, definition.action.url);
            log::info!("   🎯 Triggered by: {}", definition.trigger_scope());
            if !definition.document_url_patterns.is_empty() {
                log::info!("   📄 Pages: {}", definition.document_url_patterns.join(", "));
            }
            if !definition.target_url_patterns.is_empty() {
                log::info!("   🖼️ Targets: {}", definition.target_url_patterns.join(", "));
            }
            if !definition.action.headers.is_empty() {
                log::info!("   📨 Headers: {}", definition.action.headers.len());
            }
        }

        log::info!("\n📊 Total webhooks: {}", definitions.len());
        Ok(())
    }

    async fn menus_command(&self) -> HookmenuResult<()> {
        let background = self.open_background(false)?;
        let count = background.menu_sync.sync().await?;

        log::info!("\n🧭 Context menu ({count} entries):");
        for entry in background.menus.entries().await {
            let contexts: Vec<String> = entry.contexts.iter().map(ToString::to_string).collect();
            log::info!("   • {} [{}]", entry.title, contexts.join(", "));
        }
        Ok(())
    }

    async fn validate_command(&self) -> HookmenuResult<()> {
        log::info!("🔍 Validating hookmenu configuration...");

        let (config, config_path) = match self.load_config() {
            Ok(loaded) => {
                log::info!("✅ Configuration file loaded successfully");
                loaded
            }
            Err(e) => {
                log::error!("❌ Configuration file has errors: {e}");
                return Err(e);
            }
        };

        if let Err(errors) = ConfigManager::validate_config(&config) {
            log::error!("❌ Configuration validation failed:");
            for error in &errors {
                log::error!("   • {error}");
            }
            return Err(HookmenuError::config_error(
                &format!("{} problem(s) in {}", errors.len(), config_path.display()),
                None,
                None,
            ));
        }
        log::info!("✅ Configuration is valid");

        let background = Background::open(config, config_path, false)?;
        let definitions = background.store.load().await?;
        log::info!("📊 Found {} stored webhooks", definitions.len());

        let result = WebhookValidator::validate(&definitions);
        result.print_summary();

        if result.is_valid {
            Ok(())
        } else {
            Err(HookmenuError::validation_error(
                "webhooks",
                &format!("{} error(s)", result.errors.len()),
                "every webhook needs a name and an endpoint URL",
                Some("Fix the listed webhooks with 'hookmenu remove' and 'hookmenu add'"),
            ))
        }
    }

    async fn send_command(
        &self,
        name: String,
        selection: Option<String>,
        link: Option<String>,
        src: Option<String>,
    ) -> HookmenuResult<()> {
        let background = self.open_background(false)?;
        let click = MenuClick {
            menu_item_id: name,
            selection_text: selection,
            link_url: link,
            src_url: src,
        };

        match background.engine.dispatch_by_name(&click.menu_item_id, &click.resolve_content()).await? {
            DispatchOutcome::Sent { status_code } => {
                log::info!("✅ Sent '{}' ({})", click.menu_item_id, status_code.map_or_else(|| "opaque".to_string(), |c| c.to_string()));
                Ok(())
            }
            DispatchOutcome::Failed { message } => Err(HookmenuError::NetworkError {
                operation: format!("dispatch of '{}'", click.menu_item_id),
                url: None,
                status_code: None,
                reason: message,
            }),
        }
    }

    #[allow(clippy::too_many_arguments)]
    async fn add_command(
        &self,
        name: String,
        url: String,
        method: &str,
        payload: Option<String>,
        headers: Vec<String>,
        document_patterns: Vec<String>,
        target_patterns: Vec<String>,
    ) -> HookmenuResult<()> {
        let method: HttpMethod = method.parse()?;
        let mut action = HttpActionTemplate::new(method, url);

        if let Some(payload) = payload {
            let value: Value = serde_json::from_str(&payload)?;
            action = action.with_payload(value);
        }
        for header in &headers {
            let (header_name, header_value) = parse_header(header)?;
            action = action.with_header(header_name, header_value);
        }

        let definition = WebhookDefinition::new(name, action)
            .with_document_patterns(document_patterns)
            .with_target_patterns(target_patterns);

        let background = self.open_background(false)?;
        let session = EditorSession::open(background.store.clone(), background.config.editor).await?;

        if session.position(&definition.name).is_some() {
            log::warn!("⚠️ '{}' already exists; the new definition takes precedence", definition.name);
        }
        let index = session.push_webhook(definition);
        session.save_now().await?;

        log::info!("✅ Saved {}", session.heading(index)?);
        Ok(())
    }

    async fn remove_command(&self, name: &str) -> HookmenuResult<()> {
        let background = self.open_background(false)?;
        let session = EditorSession::open(background.store.clone(), background.config.editor).await?;

        let Some(index) = session.position(name) else {
            return Err(HookmenuError::WebhookNotFound {
                name: name.to_string(),
                available: session.webhooks().into_iter().map(|d| d.name).collect(),
            });
        };

        session.remove_webhook(index)?;
        session.save_now().await?;
        log::info!("🗑️ Removed '{name}'");
        Ok(())
    }

    async fn serve_command(&self, port: Option<u16>) -> HookmenuResult<()> {
        log::info!("🌐 Starting hookmenu bridge...");

        let background = Arc::new(self.open_background(true)?);
        let host = background.config.server.host.clone();
        let port = port.unwrap_or(background.config.server.port);

        if let Err(e) = background.menu_sync.on_startup().await {
            log::warn!("⚠️ Could not build context menus: {e}");
        }
        let sync_task = background.menu_sync.clone().spawn();

        let mut server = BridgeServer::new(Arc::clone(&background));
        server.start(&host, port).await?;
        log::info!("⏹️ Press Ctrl+C to stop the bridge");

        tokio::signal::ctrl_c()
            .await
            .map_err(|e| HookmenuError::system_error("waiting for Ctrl+C", &e.to_string()))?;

        sync_task.abort();
        server.shutdown().await
    }

    async fn icon_command(&self, status: &str, title: Option<String>) -> HookmenuResult<()> {
        let status: StatusKind = status.parse()?;
        let (config, _) = self.load_config()?;
        let url = format!("http://{}:{}/messages", config.server.host, config.server.port);

        let message = ExtensionMessage::SetBrowserIcon { status, title };
        let response = reqwest::Client::new().post(&url).json(&message).send().await?;

        if !response.status().is_success() {
            return Err(HookmenuError::NetworkError {
                operation: "icon update".to_string(),
                url: Some(url),
                status_code: Some(response.status().as_u16()),
                reason: "bridge rejected the message".to_string(),
            });
        }

        log::info!("🔖 Indicator set to {status}");
        Ok(())
    }
}

/// Splits a `Name: value` header argument.
pub fn parse_header(raw: &str) -> HookmenuResult<(String, String)> {
    match raw.split_once(':') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim().to_string(), value.trim().to_string())),
        _ => Err(HookmenuError::user_input_error(
            raw,
            "a header as `Name: value`",
            "Example: -H 'Content-Type: application/json'",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_arguments_are_split_on_first_colon() {
        assert_eq!(
            parse_header("Authorization: Bearer a:b").unwrap(),
            ("Authorization".to_string(), "Bearer a:b".to_string())
        );
        assert_eq!(parse_header("X-Empty:").unwrap(), ("X-Empty".to_string(), String::new()));
    }

    #[test]
    fn header_without_name_is_rejected() {
        assert!(matches!(parse_header(": value"), Err(HookmenuError::UserInputError { .. })));
        assert!(parse_header("no-colon").is_err());
    }
}
