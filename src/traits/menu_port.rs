use async_trait::async_trait;
use crate::errors::HookmenuResult;
use crate::structs::menu::menu_entry::MenuEntry;

#[async_trait]
pub trait MenuPort: Send + Sync {
    async fn remove_all(&self) -> HookmenuResult<()>;

    async fn create(&self, entry: MenuEntry) -> HookmenuResult<()>;
}
