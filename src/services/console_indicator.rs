use std::sync::{Mutex, PoisonError};
use async_trait::async_trait;
use crate::structs::indicator::indicator_state::IndicatorState;
use crate::traits::indicator_port::IndicatorPort;

/// Indicator for headless runs: keeps the badge in memory and logs each
/// change.
#[derive(Default)]
pub struct ConsoleIndicator {
    state: Mutex<IndicatorState>,
}

impl ConsoleIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> IndicatorState {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn update(&self, change: impl FnOnce(&mut IndicatorState)) -> IndicatorState {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        change(&mut state);
        state.clone()
    }
}

#[async_trait]
impl IndicatorPort for ConsoleIndicator {
    async fn set_badge_text(&self, text: &str) {
        self.update(|state| state.badge_text = text.to_string());
    }

    async fn set_badge_background_color(&self, color: &str) {
        self.update(|state| state.badge_color = Some(color.to_string()));
    }

    async fn set_title(&self, title: &str) {
        let state = self.update(|state| state.title = title.to_string());
        if state.badge_text.is_empty() && state.title.is_empty() {
            log::info!("🔖 Indicator cleared");
        } else {
            log::info!("🔖 [{}] {}", state.badge_text, state.title);
        }
    }
}
