use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;
use crate::enums::dispatch_outcome::DispatchOutcome;
use crate::enums::dispatch_status::StatusKind;
use crate::errors::{HookmenuError, HookmenuResult};
use crate::services::status_reporter::StatusReporter;
use crate::services::template_engine::TemplateEngine;
use crate::services::webhook_store::{find_definition, WebhookStore};
use crate::structs::menu::action_click::ActionClick;
use crate::structs::menu::menu_click::MenuClick;
use crate::structs::transport::http_request::HttpRequest;
use crate::structs::webhook::http_action_template::HttpActionTemplate;
use crate::structs::webhook::webhook_definition::WebhookDefinition;
use crate::traits::transport::Transport;

/// Turns triggered webhooks into HTTP requests and reports how they went.
///
/// Dispatches are neither queued nor retried, and one in flight cannot be
/// cancelled. Concurrent dispatches share the single indicator.
pub struct DispatchEngine {
    store: WebhookStore,
    templates: TemplateEngine,
    transport: Arc<dyn Transport>,
    reporter: Arc<StatusReporter>,
    success_reset: Duration,
}

impl DispatchEngine {
    pub fn new(
        store: WebhookStore,
        templates: TemplateEngine,
        transport: Arc<dyn Transport>,
        reporter: Arc<StatusReporter>,
        success_reset: Duration,
    ) -> Self {
        Self {
            store,
            templates,
            transport,
            reporter,
            success_reset,
        }
    }

    pub fn reporter(&self) -> Arc<StatusReporter> {
        Arc::clone(&self.reporter)
    }

    pub fn build_request(&self, action: &HttpActionTemplate, content: &str) -> HttpRequest {
        HttpRequest {
            method: action.method,
            url: action.url.clone(),
            headers: action.headers.clone(),
            body: action
                .payload
                .as_ref()
                .map(|payload| self.templates.render(payload, Some(content))),
        }
    }

    /// Sends one webhook. The indicator goes to Sending, then to Error, or to
    /// OK and back to Default once the success delay has passed.
    pub async fn dispatch(&self, definition: &WebhookDefinition, content: &str) -> DispatchOutcome {
        let dispatch_id = Uuid::new_v4();
        let request = self.build_request(&definition.action, content);

        log::info!(
            "🚀 [{}] Sending '{}' ({} {})",
            dispatch_id, definition.name, request.method, request.url
        );
        self.reporter.report(StatusKind::Sending, None).await;

        match self.transport.send(request).await {
            Ok(response) if response.is_error() => {
                let message = format!("Error: {}", response.status.unwrap_or_default());
                log::warn!("❌ [{dispatch_id}] '{}' failed: {message}", definition.name);
                self.reporter.report(StatusKind::Error, Some(&message)).await;
                DispatchOutcome::Failed { message }
            }
            Ok(response) => {
                match response.status {
                    Some(code) => log::info!("✅ [{dispatch_id}] '{}' sent ({code})", definition.name),
                    None => log::info!("✅ [{dispatch_id}] '{}' sent", definition.name),
                }
                self.reporter.report(StatusKind::Ok, None).await;
                tokio::time::sleep(self.success_reset).await;
                self.reporter.report(StatusKind::Default, None).await;
                DispatchOutcome::Sent { status_code: response.status }
            }
            Err(e) => {
                let message = format!("Error: {e}");
                log::warn!("❌ [{dispatch_id}] '{}' failed: {message}", definition.name);
                self.reporter.report(StatusKind::Error, Some(&message)).await;
                DispatchOutcome::Failed { message }
            }
        }
    }

    /// Dispatches the webhook behind a clicked menu entry. Clicks on unknown
    /// entries are logged and yield `None`.
    pub async fn handle_menu_click(&self, click: &MenuClick) -> HookmenuResult<Option<DispatchOutcome>> {
        let definitions = self.store.load().await?;

        let Some(definition) = find_definition(&definitions, &click.menu_item_id) else {
            log::warn!("⚠️ No webhook named '{}' for menu click", click.menu_item_id);
            return Ok(None);
        };

        Ok(Some(self.dispatch(definition, &click.resolve_content()).await))
    }

    /// Icon clicks naming a webhook dispatch it. Without one there is nothing
    /// to send and `None` is returned.
    pub async fn handle_action_click(&self, click: &ActionClick) -> HookmenuResult<Option<DispatchOutcome>> {
        match &click.webhook {
            Some(name) => {
                let content = click.content.clone().unwrap_or_default();
                self.dispatch_by_name(name, &content).await.map(Some)
            }
            None => Ok(None),
        }
    }

    pub async fn dispatch_by_name(&self, name: &str, content: &str) -> HookmenuResult<DispatchOutcome> {
        let definitions = self.store.load().await?;

        match find_definition(&definitions, name) {
            Some(definition) => Ok(self.dispatch(definition, content).await),
            None => Err(HookmenuError::WebhookNotFound {
                name: name.to_string(),
                available: definitions.iter().map(|d| d.name.clone()).collect(),
            }),
        }
    }
}
