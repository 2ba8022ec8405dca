//! UI driver abstraction for testability

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::locator::Locator;

/// One option of a select box
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Whether `needle` names this option by value or by visible label
    pub fn matches(&self, needle: &str) -> bool {
        self.value == needle || self.label == needle
    }
}

/// One body row of the resource grid, keyed by column
pub type GridRow = BTreeMap<String, String>;

/// Abstraction over the mechanism that renders and drives admin screens
///
/// Every read goes to the screen as it is rendered right now; implementations
/// must not cache anything between calls.
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait UiDriver: Send + Sync + std::fmt::Debug {
    /// Navigate to a path relative to the admin base URL
    async fn visit(&self, path: &str) -> crate::Result<()>;

    /// Path of the page currently rendered
    async fn current_path(&self) -> crate::Result<String>;

    /// Replace the content of a text-like control
    async fn fill(&self, locator: &Locator, value: &str) -> crate::Result<()>;

    /// Select exactly one option (by value or label), dropping any other selection.
    /// An empty `option` selects the placeholder.
    async fn select_option(&self, locator: &Locator, option: &str) -> crate::Result<()>;

    /// Add an option to the selection of a multi-select
    async fn add_option(&self, locator: &Locator, option: &str) -> crate::Result<()>;

    async fn set_checked(&self, locator: &Locator, checked: bool) -> crate::Result<()>;

    async fn click(&self, locator: &Locator) -> crate::Result<()>;

    async fn is_present(&self, locator: &Locator) -> crate::Result<bool>;

    async fn is_disabled(&self, locator: &Locator) -> crate::Result<bool>;

    /// Current value of a control; the selected option's value for a select box
    async fn value(&self, locator: &Locator) -> crate::Result<String>;

    async fn selected_options(&self, locator: &Locator) -> crate::Result<Vec<SelectOption>>;

    /// Visible text of an element
    async fn text(&self, locator: &Locator) -> crate::Result<String>;

    async fn has_class(&self, locator: &Locator, class: &str) -> crate::Result<bool>;

    /// Body rows of the resource grid currently rendered
    async fn grid_rows(&self) -> crate::Result<Vec<GridRow>>;

    /// End the session behind this driver
    async fn close(&self) -> crate::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_option_matches_value_or_label() {
        let option = SelectOption::new("USD", "US Dollar");
        assert!(option.matches("USD"));
        assert!(option.matches("US Dollar"));
        assert!(!option.matches("usd"));
        assert!(!option.matches(""));
    }
}
