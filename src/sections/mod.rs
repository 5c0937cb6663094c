//! Password criteria sections
//!
//! Each section checks one aspect of a password. The evaluator runs them in
//! the order of [`CRITERIA`].

mod length;
mod variety;

pub use length::length_section;
pub use variety::{
    digit_section, lowercase_section, special_section, uppercase_section, SPECIAL_CHARS,
};

/// Result type for section functions: `true` when the password satisfies it.
pub type SectionResult = bool;

/// A named check plus the alphabet it adds to the keyspace when satisfied.
#[derive(Debug, Clone, Copy)]
pub struct Criterion {
    pub name: &'static str,
    pub check: fn(&str) -> SectionResult,
    /// Characters contributed to the keyspace when this criterion passes.
    pub pool_size: u32,
}

/// All criteria, in display order.
pub static CRITERIA: [Criterion; 5] = [
    Criterion { name: "Length (8+)", check: length_section, pool_size: 0 },
    Criterion { name: "Uppercase", check: uppercase_section, pool_size: 26 },
    Criterion { name: "Lowercase", check: lowercase_section, pool_size: 26 },
    Criterion { name: "Numbers", check: digit_section, pool_size: 10 },
    Criterion { name: "Special chars", check: special_section, pool_size: 32 },
];
