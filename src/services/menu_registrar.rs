use std::sync::Arc;
use crate::errors::HookmenuResult;
use crate::structs::menu::menu_entry::MenuEntry;
use crate::structs::webhook::webhook_definition::WebhookDefinition;
use crate::traits::menu_port::MenuPort;

/// Keeps the context menu in line with the configured webhooks.
#[derive(Clone)]
pub struct MenuRegistrar {
    menus: Arc<dyn MenuPort>,
}

impl MenuRegistrar {
    pub fn new(menus: Arc<dyn MenuPort>) -> Self {
        Self { menus }
    }

    /// Clears every entry and registers one per webhook, in order.
    ///
    /// Entries are never diffed, so repeated calls with the same input leave
    /// the same menu. An entry the menu subsystem rejects is skipped. Returns
    /// how many entries were registered.
    pub async fn rebuild(&self, definitions: &[WebhookDefinition]) -> HookmenuResult<usize> {
        self.menus.remove_all().await?;

        let mut registered = 0;
        for definition in definitions {
            match self.menus.create(menu_entry_for(definition)).await {
                Ok(()) => registered += 1,
                Err(e) => log::warn!("⚠️ Skipping menu entry '{}': {}", definition.name, e),
            }
        }

        log::info!("📋 Registered {registered} context menu entries");
        Ok(registered)
    }
}

pub fn menu_entry_for(definition: &WebhookDefinition) -> MenuEntry {
    let non_empty = |patterns: &Vec<String>| (!patterns.is_empty()).then(|| patterns.clone());

    MenuEntry {
        id: definition.name.clone(),
        title: definition.name.clone(),
        contexts: definition.trigger_scope().contexts(),
        document_url_patterns: non_empty(&definition.document_url_patterns),
        target_url_patterns: non_empty(&definition.target_url_patterns),
    }
}
