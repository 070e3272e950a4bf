use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};
use crate::config::constants::{NEW_HEADER_PREFIX, NEW_WEBHOOK_LABEL, SAVE_SUCCEEDED_STATUS};
use crate::enums::editor_command::EditorCommand;
use crate::enums::http_method::HttpMethod;
use crate::errors::{HookmenuError, HookmenuResult};
use crate::helpers::debouncer::Debouncer;
use crate::services::webhook_store::WebhookStore;
use crate::structs::config::editor_config::EditorConfig;
use crate::structs::webhook::http_action_template::HttpActionTemplate;
use crate::structs::webhook::webhook_definition::WebhookDefinition;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SaveStatus {
    pub message: String,
    pub error: bool,
}

/// Working copy of the webhook list while the user edits it.
///
/// Only one session is expected to be open at a time; nothing enforces it.
/// Edits stay in memory until a save writes the whole list back.
pub struct EditorSession {
    store: WebhookStore,
    webhooks: Arc<Mutex<Vec<WebhookDefinition>>>,
    save_status: Arc<Mutex<SaveStatus>>,
    debouncer: Debouncer,
    status_clear: Duration,
}

impl EditorSession {
    pub async fn open(store: WebhookStore, config: EditorConfig) -> HookmenuResult<Self> {
        let webhooks = store.load().await?;
        log::debug!("📝 Editing {} webhook(s)", webhooks.len());

        Ok(Self {
            store,
            webhooks: Arc::new(Mutex::new(webhooks)),
            save_status: Arc::new(Mutex::new(SaveStatus::default())),
            debouncer: Debouncer::new(Duration::from_millis(config.save_debounce_ms)),
            status_clear: Duration::from_millis(config.save_status_ms),
        })
    }

    pub fn webhooks(&self) -> Vec<WebhookDefinition> {
        self.lock_webhooks().clone()
    }

    pub fn len(&self) -> usize {
        self.lock_webhooks().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn save_status(&self) -> SaveStatus {
        self.save_status.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Appends a blank POST webhook and returns its index.
    pub fn add_webhook(&self) -> usize {
        let mut webhooks = self.lock_webhooks();
        webhooks.push(WebhookDefinition::new("", HttpActionTemplate::new(HttpMethod::Post, "")));
        webhooks.len() - 1
    }

    /// Appends a fully built webhook and returns its index.
    pub fn push_webhook(&self, definition: WebhookDefinition) -> usize {
        let mut webhooks = self.lock_webhooks();
        webhooks.push(definition);
        webhooks.len() - 1
    }

    pub fn remove_webhook(&self, index: usize) -> HookmenuResult<WebhookDefinition> {
        let mut webhooks = self.lock_webhooks();
        if index >= webhooks.len() {
            return Err(out_of_range(index, webhooks.len()));
        }
        Ok(webhooks.remove(index))
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.lock_webhooks().iter().rposition(|definition| definition.name == name)
    }

    /// Title shown above a webhook's form, e.g. `Webhook 2: Slack`.
    pub fn heading(&self, index: usize) -> HookmenuResult<String> {
        self.with_webhook(index, |definition| heading_text(index, definition))
    }

    /// Everything the options page renders: each webhook under its heading,
    /// plus the save status line.
    pub fn view(&self) -> Value {
        let webhooks: Vec<Value> = self
            .webhooks()
            .iter()
            .enumerate()
            .map(|(index, definition)| json!({ "heading": heading_text(index, definition), "webhook": definition }))
            .collect();
        json!({ "webhooks": webhooks, "status": self.save_status() })
    }

    /// Applies one edit from the options page. The returned value carries
    /// whatever the page needs next, such as a new index or header name.
    pub fn apply(&self, command: EditorCommand) -> HookmenuResult<Value> {
        let result = match command {
            EditorCommand::AddWebhook => json!({ "index": self.add_webhook() }),
            EditorCommand::RemoveWebhook { index } => json!({ "removed": self.remove_webhook(index)?.name }),
            EditorCommand::SetName { index, name } => {
                self.set_name(index, &name)?;
                Value::Null
            }
            EditorCommand::SetMethod { index, method } => {
                self.set_method(index, method.parse()?)?;
                Value::Null
            }
            EditorCommand::SetUrl { index, url } => {
                self.set_url(index, &url)?;
                Value::Null
            }
            EditorCommand::SetDocumentPatterns { index, text } => {
                self.set_document_patterns(index, &text)?;
                Value::Null
            }
            EditorCommand::SetTargetPatterns { index, text } => {
                self.set_target_patterns(index, &text)?;
                Value::Null
            }
            EditorCommand::SetPayloadText { index, text } => json!({ "accepted": self.set_payload_text(index, &text)? }),
            EditorCommand::AddHeader { index } => json!({ "header": self.add_header(index)? }),
            EditorCommand::RenameHeader { index, from, to } => json!({ "renamed": self.rename_header(index, &from, &to)? }),
            EditorCommand::SetHeaderValue { index, name, value } => {
                self.set_header_value(index, &name, &value)?;
                Value::Null
            }
            EditorCommand::RemoveHeader { index, name } => json!({ "removed": self.remove_header(index, &name)? }),
        };
        Ok(result)
    }

    pub fn set_name(&self, index: usize, name: &str) -> HookmenuResult<()> {
        self.with_webhook(index, |definition| definition.name = name.to_string())
    }

    pub fn set_method(&self, index: usize, method: HttpMethod) -> HookmenuResult<()> {
        self.with_webhook(index, |definition| definition.action.method = method)
    }

    pub fn set_url(&self, index: usize, url: &str) -> HookmenuResult<()> {
        self.with_webhook(index, |definition| definition.action.url = url.to_string())
    }

    /// One pattern per line; blank lines are dropped.
    pub fn set_document_patterns(&self, index: usize, text: &str) -> HookmenuResult<()> {
        self.with_webhook(index, |definition| definition.document_url_patterns = split_patterns(text))
    }

    pub fn set_target_patterns(&self, index: usize, text: &str) -> HookmenuResult<()> {
        self.with_webhook(index, |definition| definition.target_url_patterns = split_patterns(text))
    }

    /// Replaces the payload with the parsed `text`. Empty text removes it.
    ///
    /// Text that is not valid JSON leaves the payload untouched and returns
    /// `Ok(false)`; the user is usually midway through typing.
    pub fn set_payload_text(&self, index: usize, text: &str) -> HookmenuResult<bool> {
        let payload = if text.is_empty() {
            None
        } else {
            match serde_json::from_str::<Value>(text) {
                Ok(value) => Some(value),
                Err(e) => {
                    log::warn!("⚠️ Invalid JSON payload during input: {e}");
                    self.with_webhook(index, |_| ())?;
                    return Ok(false);
                }
            }
        };

        self.with_webhook(index, |definition| definition.action.payload = payload)?;
        Ok(true)
    }

    /// Payload as the editor shows it: pretty-printed, or empty when unset.
    pub fn payload_text(&self, index: usize) -> HookmenuResult<String> {
        self.with_webhook(index, |definition| {
            definition
                .action
                .payload
                .as_ref()
                .and_then(|payload| serde_json::to_string_pretty(payload).ok())
                .unwrap_or_default()
        })
    }

    /// Adds an empty header under a placeholder name and returns that name.
    pub fn add_header(&self, index: usize) -> HookmenuResult<String> {
        self.with_webhook(index, |definition| {
            let mut stamp = Utc::now().timestamp_millis();
            let mut key = format!("{NEW_HEADER_PREFIX}{stamp}");
            while definition.action.headers.contains(&key) {
                stamp += 1;
                key = format!("{NEW_HEADER_PREFIX}{stamp}");
            }
            definition.action.headers.insert(key.clone(), "");
            key
        })
    }

    pub fn rename_header(&self, index: usize, from: &str, to: &str) -> HookmenuResult<bool> {
        self.with_webhook(index, |definition| definition.action.headers.rename(from, to))
    }

    pub fn set_header_value(&self, index: usize, name: &str, value: &str) -> HookmenuResult<()> {
        self.with_webhook(index, |definition| definition.action.headers.insert(name, value))
    }

    pub fn remove_header(&self, index: usize, name: &str) -> HookmenuResult<Option<String>> {
        self.with_webhook(index, |definition| definition.action.headers.remove(name))
    }

    /// Saves the working copy once no further request arrives within the
    /// debounce window. The list is read when the save runs, so later edits
    /// are included.
    pub fn request_save(&self) {
        let store = self.store.clone();
        let webhooks = Arc::clone(&self.webhooks);
        let save_status = Arc::clone(&self.save_status);
        let status_clear = self.status_clear;

        self.debouncer.call(move || async move {
            let snapshot = webhooks.lock().unwrap_or_else(PoisonError::into_inner).clone();
            let result = store.save(&snapshot).await;
            finish_save(&save_status, result, status_clear).await;
        });
    }

    /// Saves right away, bypassing the debounce.
    pub async fn save_now(&self) -> HookmenuResult<()> {
        let snapshot = self.webhooks();
        self.store.save(&snapshot).await?;
        set_status(&self.save_status, SAVE_SUCCEEDED_STATUS, false);
        Ok(())
    }

    pub fn is_save_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    fn lock_webhooks(&self) -> std::sync::MutexGuard<'_, Vec<WebhookDefinition>> {
        self.webhooks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn with_webhook<R>(&self, index: usize, edit: impl FnOnce(&mut WebhookDefinition) -> R) -> HookmenuResult<R> {
        let mut webhooks = self.lock_webhooks();
        let len = webhooks.len();
        webhooks.get_mut(index).map(edit).ok_or_else(|| out_of_range(index, len))
    }
}

async fn finish_save(save_status: &Mutex<SaveStatus>, result: HookmenuResult<()>, status_clear: Duration) {
    match result {
        Ok(()) => {
            set_status(save_status, SAVE_SUCCEEDED_STATUS, false);
            tokio::time::sleep(status_clear).await;
            set_status(save_status, "", false);
        }
        Err(e) => {
            log::error!("❌ Saving webhooks failed: {}", e.technical_details());
            set_status(save_status, &e.user_message(), true);
        }
    }
}

fn set_status(save_status: &Mutex<SaveStatus>, message: &str, error: bool) {
    *save_status.lock().unwrap_or_else(PoisonError::into_inner) = SaveStatus {
        message: message.to_string(),
        error,
    };
}

fn heading_text(index: usize, definition: &WebhookDefinition) -> String {
    let name = if definition.name.is_empty() { NEW_WEBHOOK_LABEL } else { definition.name.as_str() };
    format!("Webhook {}: {}", index + 1, name)
}

fn split_patterns(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|pattern| !pattern.is_empty())
        .map(String::from)
        .collect()
}

fn out_of_range(index: usize, len: usize) -> HookmenuError {
    HookmenuError::user_input_error(
        &index.to_string(),
        &format!("a webhook index below {len}"),
        "List the webhooks to see valid positions",
    )
}
