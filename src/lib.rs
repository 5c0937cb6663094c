//! Password strength assessment library
//!
//! Checks a password against five character-class criteria, derives a
//! 0-5 score and a Weak/Medium/Strong rating, and estimates how long a
//! brute-force search would take.
//!
//! The crack-time figure assumes an attacker at 10^9 guesses per second who
//! finds the password after half the keyspace on average. Treat it as a
//! rough indicator, not a security guarantee.
//!
//! # Features
//!
//! - `gui` (default): Enables the [`gui`] report window and the `pwd-gauge` binary
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_gauge::{assess_password, PasswordStrength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Password1!".to_string().into());
//! let assessment = assess_password(&password);
//!
//! assert_eq!(assessment.score.value(), 5);
//! assert_eq!(assessment.strength, PasswordStrength::Strong);
//! println!("Time to crack: {}", assessment.crack_time);
//! ```

// Internal modules
mod crack_time;
mod evaluator;
mod sections;
mod types;

#[cfg(feature = "gui")]
pub mod gui;

// Public API
pub use crack_time::{estimate, keyspace_size, CrackTime, TimeUnit, GUESSES_PER_SECOND};
pub use evaluator::assess_password;
pub use sections::{Criterion, CRITERIA, SPECIAL_CHARS};
pub use types::{
    CriteriaResult, CriterionResult, PasswordAssessment, PasswordScore, PasswordStrength, Rgb,
};
