use async_trait::async_trait;
use tokio::sync::broadcast;
use crate::enums::storage_area::StorageArea;
use crate::errors::HookmenuResult;
use crate::structs::storage::storage_change::StorageChange;

/// Key-value store with change notifications, split into areas.
#[async_trait]
pub trait StoragePort: Send + Sync {
    async fn get(&self, area: StorageArea, key: &str) -> HookmenuResult<Option<String>>;

    async fn set(&self, area: StorageArea, key: &str, value: String) -> HookmenuResult<()>;

    /// Every write that changes a value is announced to all subscribers,
    /// including writes made by other processes when the backend can see them.
    fn subscribe(&self) -> broadcast::Receiver<StorageChange>;
}
