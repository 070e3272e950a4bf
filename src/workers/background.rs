use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::OnceCell;
use crate::config::constants::sleep_duration_millis;
use crate::errors::HookmenuResult;
use crate::services::console_indicator::ConsoleIndicator;
use crate::services::dispatch_engine::DispatchEngine;
use crate::services::editor_session::EditorSession;
use crate::services::http_transport::HttpTransport;
use crate::services::json_file_storage::JsonFileStorage;
use crate::services::menu_registrar::MenuRegistrar;
use crate::services::menu_registry::MenuRegistry;
use crate::services::status_reporter::StatusReporter;
use crate::services::template_engine::TemplateEngine;
use crate::services::webhook_store::WebhookStore;
use crate::structs::config::config::Config;
use crate::traits::storage_port::StoragePort;
use crate::traits::transport::Transport;
use crate::workers::menu_sync::MenuSync;

/// Everything the background side owns: storage, the visible menu, the
/// indicator and the dispatcher, wired from one configuration.
pub struct Background {
    pub config: Config,
    pub config_path: PathBuf,
    pub store: WebhookStore,
    pub menus: Arc<MenuRegistry>,
    pub menu_sync: MenuSync,
    pub indicator: Arc<ConsoleIndicator>,
    pub engine: DispatchEngine,
    editor: OnceCell<EditorSession>,
}

impl Background {
    /// Opens the configured storage file and an HTTP transport.
    pub fn open(config: Config, config_path: PathBuf, watch_storage: bool) -> HookmenuResult<Self> {
        let storage = JsonFileStorage::open(&config.storage.path)?;
        if watch_storage && config.storage.watch {
            storage.start_watching()?;
        }
        let transport = HttpTransport::new(&config.dispatch.user_agent)?;

        Ok(Self::with_ports(config, config_path, Arc::new(storage), Arc::new(transport)))
    }

    pub fn with_ports(
        config: Config,
        config_path: PathBuf,
        storage: Arc<dyn StoragePort>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let store = WebhookStore::new(storage);
        let menus = Arc::new(MenuRegistry::new());
        let menu_sync = MenuSync::new(store.clone(), MenuRegistrar::new(menus.clone()));
        let indicator = Arc::new(ConsoleIndicator::new());
        let reporter = Arc::new(StatusReporter::new(indicator.clone()));
        let engine = DispatchEngine::new(
            store.clone(),
            TemplateEngine::new(&config.dispatch.local_datetime_format),
            transport,
            reporter,
            sleep_duration_millis(config.dispatch.success_reset_ms),
        );

        Self {
            config,
            config_path,
            store,
            menus,
            menu_sync,
            indicator,
            engine,
            editor: OnceCell::new(),
        }
    }

    /// The options page's editing session, opened on first use.
    pub async fn editor(&self) -> HookmenuResult<&EditorSession> {
        self.editor
            .get_or_try_init(|| EditorSession::open(self.store.clone(), self.config.editor))
            .await
    }

    pub fn reporter(&self) -> Arc<StatusReporter> {
        self.engine.reporter()
    }
}
