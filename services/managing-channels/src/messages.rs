//! User-facing texts rendered by the channel screens

pub const CODE_NOT_UNIQUE: &str = "Channel code has to be unique.";

pub const CODE_INVALID: &str =
    "Channel code can only be comprised of letters, numbers, dashes and underscores.";

pub const AT_LEAST_ONE_ENABLED: &str = "Must have at least one enabled entity";

pub const DEFAULT_LOCALE_NOT_ENABLED: &str = "Default locale has to be enabled.";

pub const CANNOT_DELETE: &str =
    "The channel cannot be deleted. At least one enabled channel is required.";

pub const CREATED: &str = "Channel has been successfully created.";

pub const UPDATED: &str = "Channel has been successfully updated.";

pub const DELETED: &str = "Channel has been successfully deleted.";

pub const BULK_DELETED: &str = "Channels have been successfully deleted.";

/// "Please enter channel {element}."
pub fn required(element: &str) -> String {
    format!("Please enter channel {}.", element)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_message_names_the_element() {
        assert_eq!(required("code"), "Please enter channel code.");
        assert_eq!(required("base currency"), "Please enter channel base currency.");
    }
}
