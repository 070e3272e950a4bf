use serde::{Deserialize, Serialize};
use crate::enums::storage_area::StorageArea;

/// Notification that one or more keys changed in a storage area.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct StorageChange {
    pub area: StorageArea,
    pub keys: Vec<String>,
}

impl StorageChange {
    pub fn new(area: StorageArea, keys: Vec<String>) -> Self {
        Self { area, keys }
    }

    pub fn touches(&self, area: StorageArea, key: &str) -> bool {
        self.area == area && self.keys.iter().any(|k| k == key)
    }
}
