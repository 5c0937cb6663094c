//! Length section - checks password minimum length.

use super::SectionResult;

pub const MIN_LENGTH: usize = 8;

/// Passes when the password has at least [`MIN_LENGTH`] characters.
///
/// Counts `char`s, so multi-byte characters count once.
pub fn length_section(password: &str) -> SectionResult {
    password.chars().count() >= MIN_LENGTH
}
