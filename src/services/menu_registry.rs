use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::errors::{HookmenuError, HookmenuResult};
use crate::structs::menu::menu_entry::MenuEntry;
use crate::traits::menu_port::MenuPort;

/// The set of context-menu entries currently visible, in registration order.
#[derive(Default)]
pub struct MenuRegistry {
    entries: RwLock<Vec<MenuEntry>>,
}

impl MenuRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn entries(&self) -> Vec<MenuEntry> {
        self.entries.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Option<MenuEntry> {
        self.entries.read().await.iter().find(|entry| entry.id == id).cloned()
    }
}

#[async_trait]
impl MenuPort for MenuRegistry {
    async fn remove_all(&self) -> HookmenuResult<()> {
        self.entries.write().await.clear();
        Ok(())
    }

    async fn create(&self, entry: MenuEntry) -> HookmenuResult<()> {
        let mut entries = self.entries.write().await;
        if entries.iter().any(|existing| existing.id == entry.id) {
            return Err(HookmenuError::menu_error(&entry.id, "an entry with this id already exists"));
        }
        entries.push(entry);
        Ok(())
    }
}
