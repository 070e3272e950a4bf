use std::collections::HashMap;
use async_trait::async_trait;
use tokio::sync::{broadcast, RwLock};
use crate::config::constants::STORAGE_EVENT_CAPACITY;
use crate::enums::storage_area::StorageArea;
use crate::errors::HookmenuResult;
use crate::structs::storage::storage_change::StorageChange;
use crate::traits::storage_port::StoragePort;

/// Process-local storage. Used by tests and as a scratch backend.
pub struct MemoryStorage {
    values: RwLock<HashMap<(StorageArea, String), String>>,
    events: broadcast::Sender<StorageChange>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(STORAGE_EVENT_CAPACITY);
        Self {
            values: RwLock::new(HashMap::new()),
            events,
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StoragePort for MemoryStorage {
    async fn get(&self, area: StorageArea, key: &str) -> HookmenuResult<Option<String>> {
        Ok(self.values.read().await.get(&(area, key.to_string())).cloned())
    }

    async fn set(&self, area: StorageArea, key: &str, value: String) -> HookmenuResult<()> {
        let previous = self.values.write().await.insert((area, key.to_string()), value.clone());
        if previous.as_deref() != Some(value.as_str()) {
            let _ = self.events.send(StorageChange::new(area, vec![key.to_string()]));
        }
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<StorageChange> {
        self.events.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn announces_only_real_changes() {
        let storage = MemoryStorage::new();
        let mut changes = storage.subscribe();

        storage.set(StorageArea::Sync, "webhooks", "[]".to_string()).await.unwrap();
        storage.set(StorageArea::Sync, "webhooks", "[]".to_string()).await.unwrap();
        storage.set(StorageArea::Local, "other", "1".to_string()).await.unwrap();

        assert_eq!(changes.recv().await.unwrap(), StorageChange::new(StorageArea::Sync, vec!["webhooks".to_string()]));
        assert_eq!(changes.recv().await.unwrap(), StorageChange::new(StorageArea::Local, vec!["other".to_string()]));
        assert!(changes.try_recv().is_err());
        assert_eq!(storage.get(StorageArea::Sync, "webhooks").await.unwrap().as_deref(), Some("[]"));
        assert_eq!(storage.get(StorageArea::Local, "webhooks").await.unwrap(), None);
    }
}
