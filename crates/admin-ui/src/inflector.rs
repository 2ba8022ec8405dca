//! Conversions from human names to codes

/// "base currency" -> "base_currency"
pub fn name_to_code(value: &str) -> String {
    value.trim().replace([' ', '-'], "_")
}

/// "Mobile store" -> "MOBILE_STORE"
pub fn name_to_uppercase_code(value: &str) -> String {
    name_to_code(value).to_uppercase()
}
