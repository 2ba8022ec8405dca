//! Page object trait shared by every admin screen

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::driver::UiDriver;
use crate::route::Route;

/// A screen reachable under a route
#[async_trait]
pub trait Page: Send + Sync + std::fmt::Debug {
    /// Name used in logs and resolution errors
    fn name(&self) -> &str;

    fn route(&self) -> &Route;

    fn driver(&self) -> &Arc<dyn UiDriver>;

    /// Navigate to this page
    async fn open(&self, params: &[(&str, &str)]) -> crate::Result<()> {
        let path = self.route().path(params)?;
        debug!("Opening {} at {}", self.name(), path);
        self.driver().visit(&path).await
    }

    /// Whether the screen currently rendered is this page
    async fn is_open(&self) -> crate::Result<bool> {
        let path = self.driver().current_path().await?;
        Ok(self.route().matches(&path))
    }
}
