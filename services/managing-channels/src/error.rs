//! Error types for the channel step layer

use std::fmt::Debug;

use admin_ui::AdminUiError;

/// Errors a channel step can fail with
#[derive(Debug, thiserror::Error)]
pub enum StepError {
    #[error("Assertion failed: {0}")]
    Assertion(String),

    #[error("Page resolution failed: {0}")]
    Resolution(String),

    #[error("Notification check failed: {0}")]
    Notification(String),

    #[error("UI error: {0}")]
    Ui(AdminUiError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<AdminUiError> for StepError {
    fn from(err: AdminUiError) -> Self {
        match err {
            AdminUiError::UnresolvablePage(msg) | AdminUiError::AmbiguousPage(msg) => {
                StepError::Resolution(msg)
            }
            AdminUiError::NotificationMismatch(msg) => StepError::Notification(msg),
            other => StepError::Ui(other),
        }
    }
}

/// Result type alias for channel steps
pub type Result<T> = std::result::Result<T, StepError>;

/// Fail with an assertion error unless `condition` holds
pub fn assert_true(condition: bool, message: impl Into<String>) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(StepError::Assertion(message.into()))
    }
}

/// Fail with an assertion error unless `actual == expected`
pub fn assert_same<T>(actual: T, expected: T) -> Result<()>
where
    T: PartialEq + Debug,
{
    if actual == expected {
        Ok(())
    } else {
        Err(StepError::Assertion(format!(
            "expected {:?}, got {:?}",
            expected, actual
        )))
    }
}
