use std::sync::Arc;
use futures::stream::{self, Stream};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use crate::config::constants::{DEFAULT_WEBHOOKS_VALUE, WEBHOOKS_KEY};
use crate::enums::storage_area::StorageArea;
use crate::errors::{HookmenuError, HookmenuResult};
use crate::structs::storage::storage_change::StorageChange;
use crate::structs::webhook::webhook_definition::WebhookDefinition;
use crate::traits::storage_port::StoragePort;

/// Reads and writes the webhook list kept under one key of the sync area.
#[derive(Clone)]
pub struct WebhookStore {
    storage: Arc<dyn StoragePort>,
}

impl WebhookStore {
    pub fn new(storage: Arc<dyn StoragePort>) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> Arc<dyn StoragePort> {
        Arc::clone(&self.storage)
    }

    /// Loads every stored webhook, with missing method, headers, URL and
    /// patterns filled in. No stored value means no webhooks.
    pub async fn load(&self) -> HookmenuResult<Vec<WebhookDefinition>> {
        let raw = self
            .storage
            .get(StorageArea::Sync, WEBHOOKS_KEY)
            .await?
            .unwrap_or_else(|| DEFAULT_WEBHOOKS_VALUE.to_string());

        parse_definitions(&raw)
    }

    pub async fn save(&self, definitions: &[WebhookDefinition]) -> HookmenuResult<()> {
        let serialized = serde_json::to_string(definitions)?;
        self.storage.set(StorageArea::Sync, WEBHOOKS_KEY, serialized).await?;
        log::info!("💾 Saved {} webhook(s)", definitions.len());
        Ok(())
    }

    pub async fn find(&self, name: &str) -> HookmenuResult<Option<WebhookDefinition>> {
        let definitions = self.load().await?;
        Ok(find_definition(&definitions, name).cloned())
    }

    /// Stream of notifications for the webhook key in the sync area.
    pub fn subscribe(&self) -> ConfigChanges {
        ConfigChanges {
            receiver: self.storage.subscribe(),
        }
    }
}

/// Looks a webhook up by name. With duplicate names the last one wins.
pub fn find_definition<'a>(definitions: &'a [WebhookDefinition], name: &str) -> Option<&'a WebhookDefinition> {
    definitions.iter().rev().find(|definition| definition.name == name)
}

pub fn parse_definitions(raw: &str) -> HookmenuResult<Vec<WebhookDefinition>> {
    serde_json::from_str(raw).map_err(|e| {
        HookmenuError::parse_error("stored webhooks", Some(e.line()), &e.to_string(), Some(WEBHOOKS_KEY))
    })
}

pub struct ConfigChanges {
    receiver: broadcast::Receiver<StorageChange>,
}

impl ConfigChanges {
    /// Waits for the next change of the webhook key. Returns `false` once the
    /// storage stops publishing.
    ///
    /// A lagging receiver counts as a change since a skipped event may have
    /// been one.
    pub async fn changed(&mut self) -> bool {
        loop {
            match self.receiver.recv().await {
                Ok(change) if change.touches(StorageArea::Sync, WEBHOOKS_KEY) => return true,
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    log::warn!("⚠️ Missed {skipped} storage notifications, reloading webhooks");
                    return true;
                }
                Err(RecvError::Closed) => return false,
            }
        }
    }

    /// The same notifications as a stream that ends with the storage.
    pub fn into_stream(self) -> impl Stream<Item = ()> + Send {
        stream::unfold(self, |mut changes| async move {
            changes.changed().await.then_some(((), changes))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::http_method::HttpMethod;
    use crate::services::memory_storage::MemoryStorage;
    use crate::structs::webhook::http_action_template::HttpActionTemplate;

    fn store() -> WebhookStore {
        WebhookStore::new(Arc::new(MemoryStorage::new()))
    }

    #[tokio::test]
    async fn empty_storage_loads_no_webhooks() {
        assert!(store().load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_then_load_keeps_order() {
        let store = store();
        let definitions = vec![
            WebhookDefinition::new("b", HttpActionTemplate::new(HttpMethod::Get, "https://b.example")),
            WebhookDefinition::new("a", HttpActionTemplate::new(HttpMethod::Post, "https://a.example")),
        ];
        store.save(&definitions).await.unwrap();
        assert_eq!(store.load().await.unwrap(), definitions);
    }

    #[tokio::test]
    async fn malformed_json_is_a_parse_error() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(StorageArea::Sync, WEBHOOKS_KEY, "[{".to_string()).await.unwrap();
        let err = WebhookStore::new(storage).load().await.unwrap_err();
        assert!(matches!(err, HookmenuError::ParseError { .. }));
    }

    #[tokio::test]
    async fn loose_methods_and_header_values_still_load() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .set(
                StorageArea::Sync,
                WEBHOOKS_KEY,
                r#"[{"name":"a","action":{"method":"","url":"https://e.x"}},
                    {"name":"b","action":{"method":"get","url":"https://e.x","headers":{"X-N":1}}}]"#
                    .to_string(),
            )
            .await
            .unwrap();

        let definitions = WebhookStore::new(storage).load().await.unwrap();
        assert_eq!(definitions.len(), 2);
        assert_eq!(definitions[0].action.method, HttpMethod::Post);
        assert_eq!(definitions[1].action.method, HttpMethod::Get);
        assert_eq!(definitions[1].action.headers.get("X-N"), Some("1"));
    }

    #[tokio::test]
    async fn find_prefers_the_last_duplicate() {
        let store = store();
        store
            .save(&[
                WebhookDefinition::new("dup", HttpActionTemplate::new(HttpMethod::Post, "https://first")),
                WebhookDefinition::new("dup", HttpActionTemplate::new(HttpMethod::Post, "https://second")),
            ])
            .await
            .unwrap();
        let found = store.find("dup").await.unwrap().unwrap();
        assert_eq!(found.action.url, "https://second");
        assert!(store.find("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn changes_ignore_other_keys_and_areas() {
        let storage = Arc::new(MemoryStorage::new());
        let store = WebhookStore::new(storage.clone());
        let mut changes = store.subscribe();

        storage.set(StorageArea::Local, WEBHOOKS_KEY, "[]".to_string()).await.unwrap();
        storage.set(StorageArea::Sync, "theme", "dark".to_string()).await.unwrap();
        store.save(&[]).await.unwrap();

        assert!(changes.changed().await);
        assert!(changes.receiver.try_recv().is_err());
    }
}
