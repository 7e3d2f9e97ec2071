use crate::navigation::{Alert, Route};

/// Presentation boundary: screen changes and one-shot notifications.
#[async_trait::async_trait]
pub trait UiPort: Send + Sync {
    /// Replace the current screen with `route`.
    async fn navigate(&self, route: Route);

    /// Show a single notification to the user.
    async fn alert(&self, alert: Alert);
}
