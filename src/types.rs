//! Assessment types: score, strength category, colours and the final record.

use std::fmt;

use crate::crack_time::CrackTime;

/// A 24-bit RGB colour, displayed as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a colour from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Number of criteria a password satisfied, from 0 to [`PasswordScore::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub const MAX: u8 = 5;

    /// Creates a score, saturating at [`PasswordScore::MAX`].
    pub fn new(passed: usize) -> Self {
        Self(passed.min(Self::MAX as usize) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Score scaled to 0..=100 for progress indicators.
    pub fn percent(&self) -> u8 {
        self.0 * 20
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Coarse strength classification derived from a [`PasswordScore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    const STRONG_THRESHOLD: u8 = 4;
    const MEDIUM_THRESHOLD: u8 = 2;

    pub fn from_score(score: PasswordScore) -> Self {
        match score.value() {
            s if s >= Self::STRONG_THRESHOLD => PasswordStrength::Strong,
            s if s >= Self::MEDIUM_THRESHOLD => PasswordStrength::Medium,
            _ => PasswordStrength::Weak,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
        }
    }

    /// Display colour: green, orange or red.
    pub fn color(&self) -> Rgb {
        match self {
            PasswordStrength::Weak => Rgb::from_hex(0xF44336),
            PasswordStrength::Medium => Rgb::from_hex(0xFF9800),
            PasswordStrength::Strong => Rgb::from_hex(0x4CAF50),
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a single criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CriterionResult {
    pub name: &'static str,
    pub passed: bool,
}

/// Ordered outcomes of every criterion, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CriteriaResult(Vec<CriterionResult>);

impl CriteriaResult {
    pub fn new(results: Vec<CriterionResult>) -> Self {
        Self(results)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CriterionResult> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn passed_count(&self) -> usize {
        self.0.iter().filter(|c| c.passed).count()
    }

    /// Looks up a criterion by name. `None` if no criterion has that name.
    pub fn passed(&self, name: &str) -> Option<bool> {
        self.0.iter().find(|c| c.name == name).map(|c| c.passed)
    }
}

impl<'a> IntoIterator for &'a CriteriaResult {
    type Item = &'a CriterionResult;
    type IntoIter = std::slice::Iter<'a, CriterionResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Full assessment of one password.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordAssessment {
    pub criteria: CriteriaResult,
    pub score: PasswordScore,
    pub strength: PasswordStrength,
    pub color: Rgb,
    pub keyspace: u32,
    pub crack_time: CrackTime,
}

impl PasswordAssessment {
    /// Human-readable crack-time estimate, e.g. `"854 years"`.
    pub fn crack_time_label(&self) -> String {
        self.crack_time.to_string()
    }
}
