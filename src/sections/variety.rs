//! Character variety sections - uppercase, lowercase, digits, special chars.

use super::SectionResult;

/// Punctuation recognised by [`special_section`].
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

pub fn uppercase_section(password: &str) -> SectionResult {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn lowercase_section(password: &str) -> SectionResult {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub fn digit_section(password: &str) -> SectionResult {
    password.chars().any(|c| c.is_ascii_digit())
}

/// Passes when the password contains one of [`SPECIAL_CHARS`].
pub fn special_section(password: &str) -> SectionResult {
    password.chars().any(|c| SPECIAL_CHARS.contains(c))
}
