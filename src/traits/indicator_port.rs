use async_trait::async_trait;

/// The icon badge and tooltip.
#[async_trait]
pub trait IndicatorPort: Send + Sync {
    async fn set_badge_text(&self, text: &str);

    async fn set_badge_background_color(&self, color: &str);

    async fn set_title(&self, title: &str);
}
