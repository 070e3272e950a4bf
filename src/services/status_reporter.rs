use std::sync::{Arc, Mutex, PoisonError};
use crate::config::constants::{
    BADGE_ERROR_COLOR, BADGE_ERROR_TEXT, BADGE_ERROR_TITLE, BADGE_OK_COLOR, BADGE_OK_TEXT,
    BADGE_OK_TITLE, BADGE_SENDING_COLOR, BADGE_SENDING_TEXT, BADGE_SENDING_TITLE,
};
use crate::enums::dispatch_status::{DispatchStatus, StatusKind};
use crate::enums::extension_message::ExtensionMessage;
use crate::traits::indicator_port::IndicatorPort;

/// Single writer of the icon indicator.
///
/// Holds no request identity: whichever dispatch reports last decides what
/// the user sees.
pub struct StatusReporter {
    indicator: Arc<dyn IndicatorPort>,
    current: Mutex<DispatchStatus>,
}

impl StatusReporter {
    pub fn new(indicator: Arc<dyn IndicatorPort>) -> Self {
        Self {
            indicator,
            current: Mutex::new(DispatchStatus::Default),
        }
    }

    pub fn current(&self) -> DispatchStatus {
        self.current.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub async fn apply(&self, status: &DispatchStatus) {
        self.report(status.kind(), status.detail()).await;
    }

    /// Shows `status` on the icon. `detail` replaces the default tooltip of
    /// the Sending, OK and Error states.
    pub async fn report(&self, status: StatusKind, detail: Option<&str>) {
        log::debug!("🔖 Indicator -> {status} {}", detail.unwrap_or_default());

        match status {
            StatusKind::Ok => {
                self.show(BADGE_OK_TEXT, BADGE_OK_COLOR, detail.unwrap_or(BADGE_OK_TITLE)).await;
            }
            StatusKind::Error => {
                self.show(BADGE_ERROR_TEXT, BADGE_ERROR_COLOR, detail.unwrap_or(BADGE_ERROR_TITLE)).await;
            }
            StatusKind::Sending => {
                self.show(BADGE_SENDING_TEXT, BADGE_SENDING_COLOR, detail.unwrap_or(BADGE_SENDING_TITLE)).await;
            }
            StatusKind::Default => {
                self.indicator.set_badge_text("").await;
                self.indicator.set_title("").await;
            }
        }

        let next = match status {
            StatusKind::Default => DispatchStatus::Default,
            StatusKind::Sending => DispatchStatus::Sending,
            StatusKind::Ok => DispatchStatus::Ok,
            StatusKind::Error => DispatchStatus::Error(detail.unwrap_or(BADGE_ERROR_TITLE).to_string()),
        };
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = next;
    }

    /// Applies an icon request coming from another surface. Returns whether
    /// the message was one this reporter handles.
    pub async fn handle_message(&self, message: &ExtensionMessage) -> bool {
        match message {
            ExtensionMessage::SetBrowserIcon { status, title } => {
                self.report(*status, title.as_deref()).await;
                true
            }
            ExtensionMessage::Unknown => false,
        }
    }

    async fn show(&self, text: &str, color: &str, title: &str) {
        self.indicator.set_badge_text(text).await;
        self.indicator.set_badge_background_color(color).await;
        self.indicator.set_title(title).await;
    }
}
