//! Checks on the flash notification shown after an action

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::driver::UiDriver;
use crate::error::AdminUiError;
use crate::locator::Locator;

/// Severity of a flash notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    Success,
    Failure,
}

impl NotificationType {
    /// CSS class the admin theme puts on a message of this severity
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationType::Success => "positive",
            NotificationType::Failure => "negative",
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationType::Success => write!(f, "success"),
            NotificationType::Failure => write!(f, "failure"),
        }
    }
}

/// Verifies the most recent flash notification, then dismisses it
#[derive(Debug, Clone)]
pub struct NotificationChecker {
    driver: Arc<dyn UiDriver>,
}

impl NotificationChecker {
    pub fn new(driver: Arc<dyn UiDriver>) -> Self {
        Self { driver }
    }

    pub async fn check_notification(
        &self,
        message: &str,
        kind: NotificationType,
    ) -> crate::Result<()> {
        if !self.driver.is_present(&Locator::FlashMessage).await? {
            return Err(AdminUiError::NotificationMismatch(format!(
                "expected {} notification \"{}\" but none was shown",
                kind, message
            )));
        }

        let text = self.driver.text(&Locator::FlashMessage).await?;
        if !text.contains(message) {
            return Err(AdminUiError::NotificationMismatch(format!(
                "expected {} notification \"{}\", found \"{}\"",
                kind,
                message,
                text.trim()
            )));
        }

        if !self
            .driver
            .has_class(&Locator::FlashMessage, kind.css_class())
            .await?
        {
            return Err(AdminUiError::NotificationMismatch(format!(
                "notification \"{}\" is not a {} notification",
                message, kind
            )));
        }

        debug!("Notification \"{}\" ({}) verified", message, kind);
        self.driver.click(&Locator::FlashClose).await
    }
}
