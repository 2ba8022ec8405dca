//! Error types for admin UI automation

/// Errors raised while driving or inspecting an admin screen
#[derive(Debug, thiserror::Error)]
pub enum AdminUiError {
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Element not interactable: {0}")]
    NotInteractable(String),

    #[error("Could not resolve the current page: {0}")]
    UnresolvablePage(String),

    #[error("More than one page is open at once: {0}")]
    AmbiguousPage(String),

    #[error("Notification mismatch: {0}")]
    NotificationMismatch(String),

    #[error("WebDriver command failed: {0}")]
    WebDriver(String),

    #[error("WebDriver session error: {0}")]
    Session(String),

    #[error("Invalid route: {0}")]
    InvalidRoute(String),
}

/// Result type alias for admin UI operations
pub type Result<T> = std::result::Result<T, AdminUiError>;
