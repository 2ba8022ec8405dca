//! Typed locators for the elements an admin screen exposes
//!
//! Page objects never build selectors by hand; they name the element they
//! want and each [`UiDriver`](crate::driver::UiDriver) decides how to find it.

use std::fmt;

/// An element on an admin screen
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Locator {
    /// Form control by DOM id
    Field(String),
    /// Validation error rendered for the form control with this id
    ValidationError(String),
    /// Button by its visible label
    Button(String),
    /// Checkbox that selects the nth grid row (0-based) for a bulk action
    RowCheckbox(usize),
    /// Button inside the nth grid row (0-based)
    RowButton { row: usize, label: String },
    /// Bulk action button above the grid
    BulkAction(String),
    /// Confirmation button of the "are you sure" modal
    ConfirmButton,
    /// Flash message area
    FlashMessage,
    /// Close control of the flash message
    FlashClose,
}

impl Locator {
    pub fn field(id: impl Into<String>) -> Self {
        Locator::Field(id.into())
    }

    pub fn button(label: impl Into<String>) -> Self {
        Locator::Button(label.into())
    }

    pub fn row_button(row: usize, label: impl Into<String>) -> Self {
        Locator::RowButton {
            row,
            label: label.into(),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Field(id) => write!(f, "field #{}", id),
            Locator::ValidationError(id) => write!(f, "validation error of #{}", id),
            Locator::Button(label) => write!(f, "button \"{}\"", label),
            Locator::RowCheckbox(row) => write!(f, "bulk checkbox of row {}", row),
            Locator::RowButton { row, label } => write!(f, "button \"{}\" of row {}", label, row),
            Locator::BulkAction(label) => write!(f, "bulk action \"{}\"", label),
            Locator::ConfirmButton => write!(f, "confirmation button"),
            Locator::FlashMessage => write!(f, "flash message"),
            Locator::FlashClose => write!(f, "flash message close button"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_element() {
        assert_eq!(
            Locator::field("sylius_channel_code").to_string(),
            "field #sylius_channel_code"
        );
        assert_eq!(
            Locator::row_button(2, "Delete").to_string(),
            "button \"Delete\" of row 2"
        );
        assert_eq!(Locator::FlashMessage.to_string(), "flash message");
    }
}
