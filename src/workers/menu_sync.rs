use futures::StreamExt;
use tokio::task::JoinHandle;
use crate::errors::HookmenuResult;
use crate::services::menu_registrar::MenuRegistrar;
use crate::services::webhook_store::WebhookStore;

/// Rebuilds the context menu from storage on lifecycle events and whenever
/// the stored webhooks change.
#[derive(Clone)]
pub struct MenuSync {
    store: WebhookStore,
    registrar: MenuRegistrar,
}

impl MenuSync {
    pub const fn new(store: WebhookStore, registrar: MenuRegistrar) -> Self {
        Self { store, registrar }
    }

    pub async fn sync(&self) -> HookmenuResult<usize> {
        let definitions = self.store.load().await?;
        self.registrar.rebuild(&definitions).await
    }

    pub async fn on_installed(&self) -> HookmenuResult<usize> {
        log::info!("📦 Installed, building context menus");
        self.sync().await
    }

    pub async fn on_startup(&self) -> HookmenuResult<usize> {
        log::info!("🌅 Startup, building context menus");
        self.sync().await
    }

    /// Follows storage changes until the storage goes away. A list that fails
    /// to parse keeps the previous menu.
    pub fn spawn(self) -> JoinHandle<()> {
        let changes = self.store.subscribe().into_stream();

        tokio::spawn(async move {
            futures::pin_mut!(changes);
            while changes.next().await.is_some() {
                log::info!("🔄 Webhooks changed, updating context menus");
                if let Err(e) = self.sync().await {
                    log::warn!("⚠️ Keeping previous context menus: {e}");
                }
            }
            log::debug!("Storage notifications closed, menu sync stopped");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;
    use crate::config::constants::WEBHOOKS_KEY;
    use crate::enums::http_method::HttpMethod;
    use crate::enums::storage_area::StorageArea;
    use crate::services::memory_storage::MemoryStorage;
    use crate::services::menu_registry::MenuRegistry;
    use crate::structs::webhook::http_action_template::HttpActionTemplate;
    use crate::structs::webhook::webhook_definition::WebhookDefinition;
    use crate::traits::storage_port::StoragePort;

    async fn wait_for_entries(registry: &MenuRegistry, expected: usize) {
        for _ in 0..50 {
            if registry.entries().await.len() == expected {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("menu never reached {expected} entries");
    }

    #[tokio::test]
    async fn storage_changes_rebuild_the_menu() {
        let storage = Arc::new(MemoryStorage::new());
        let store = WebhookStore::new(storage.clone());
        let registry = Arc::new(MenuRegistry::new());
        let sync = MenuSync::new(store.clone(), MenuRegistrar::new(registry.clone()));

        assert_eq!(sync.on_startup().await.unwrap(), 0);
        let handle = sync.spawn();

        store
            .save(&[WebhookDefinition::new("a", HttpActionTemplate::new(HttpMethod::Post, "https://a"))])
            .await
            .unwrap();
        wait_for_entries(&registry, 1).await;

        storage.set(StorageArea::Sync, WEBHOOKS_KEY, "not json".to_string()).await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(registry.entries().await.len(), 1);

        handle.abort();
    }
}
