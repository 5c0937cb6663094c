//! Password strength evaluator - main assessment logic.

use secrecy::{ExposeSecret, SecretString};

use crate::crack_time::{estimate, keyspace_size};
use crate::sections::CRITERIA;
use crate::types::{
    CriteriaResult, CriterionResult, PasswordAssessment, PasswordScore, PasswordStrength,
};

/// Assesses a password against every criterion and estimates its crack time.
///
/// Deterministic and side-effect free apart from `tracing` events, which
/// never include the password.
///
/// # Arguments
/// * `password` - The password to assess
///
/// # Returns
/// A `PasswordAssessment` with per-criterion results, score and crack time.
pub fn assess_password(password: &SecretString) -> PasswordAssessment {
    let pwd = password.expose_secret();
    let pwd_len = pwd.chars().count();

    let mut results = Vec::with_capacity(CRITERIA.len());
    let mut passed = Vec::with_capacity(CRITERIA.len());

    // Orchestrator: run every criterion in display order
    for criterion in &CRITERIA {
        let ok = (criterion.check)(pwd);

        #[cfg(feature = "tracing")]
        {
            if !ok {
                tracing::debug!("criterion not met: {}", criterion.name);
            }
        }

        if ok {
            passed.push(criterion);
        }
        results.push(CriterionResult {
            name: criterion.name,
            passed: ok,
        });
    }

    let keyspace = keyspace_size(passed.iter().copied());
    let crack_time = estimate(keyspace, pwd_len);

    let score = PasswordScore::new(passed.len());
    let strength = PasswordStrength::from_score(score);

    #[cfg(feature = "tracing")]
    tracing::info!(
        "password assessed: score {}, strength {}, keyspace {}",
        score,
        strength,
        keyspace
    );

    PasswordAssessment {
        criteria: CriteriaResult::new(results),
        score,
        strength,
        color: strength.color(),
        keyspace,
        crack_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crack_time::CrackTime;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[test]
    fn test_assess_all_criteria_met() {
        let assessment = assess_password(&secret("Password1!"));

        assert!(assessment.criteria.iter().all(|c| c.passed));
        assert_eq!(assessment.score.value(), 5);
        assert_eq!(assessment.strength, PasswordStrength::Strong);
        assert_eq!(assessment.color.to_string(), "#4CAF50");
        assert_eq!(assessment.keyspace, 94);
        assert_eq!(assessment.crack_time_label(), "854 years");
    }

    #[test]
    fn test_assess_empty_password() {
        let assessment = assess_password(&secret(""));

        assert_eq!(assessment.score.value(), 0);
        assert_eq!(assessment.strength, PasswordStrength::Weak);
        assert_eq!(assessment.keyspace, 0);
        assert_eq!(assessment.crack_time, CrackTime::Instantly);
        assert_eq!(assessment.crack_time_label(), "Instantly");
    }

    #[test]
    fn test_assess_short_lowercase() {
        let assessment = assess_password(&secret("abc"));

        assert_eq!(assessment.criteria.passed("Lowercase"), Some(true));
        assert_eq!(assessment.criteria.passed("Length (8+)"), Some(false));
        assert_eq!(assessment.score.value(), 1);
        assert_eq!(assessment.strength, PasswordStrength::Weak);
        assert_eq!(assessment.color.to_string(), "#F44336");
        assert_eq!(assessment.crack_time_label(), "< 1 second");
    }

    #[test]
    fn test_assess_medium_password() {
        let assessment = assess_password(&secret("abcdefgh"));

        assert_eq!(assessment.criteria.passed("Length (8+)"), Some(true));
        assert_eq!(assessment.criteria.passed("Lowercase"), Some(true));
        assert_eq!(assessment.score.value(), 2);
        assert_eq!(assessment.strength, PasswordStrength::Medium);
        assert_eq!(assessment.color.to_string(), "#FF9800");
        assert_eq!(assessment.crack_time_label(), "2 minutes");
    }

    #[test]
    fn test_assess_strong_when_every_class_present() {
        for pwd in ["Aa1!aaaa", "zZ9@long-enough", "<>Qq00000000", "x{Y}2...:::"] {
            let assessment = assess_password(&secret(pwd));
            assert_eq!(assessment.score.value(), 5, "score for {pwd:?}");
            assert_eq!(assessment.strength, PasswordStrength::Strong, "strength for {pwd:?}");
        }
    }

    #[test]
    fn test_assess_classless_password_is_instant() {
        // Long enough, but no recognised class
        let assessment = assess_password(&secret("éééééééé ~"));

        assert_eq!(assessment.score.value(), 1);
        assert_eq!(assessment.keyspace, 0);
        assert_eq!(assessment.crack_time_label(), "Instantly");
    }

    #[test]
    fn test_assess_preserves_criteria_order() {
        let assessment = assess_password(&secret("Password1!"));
        let names: Vec<_> = assessment.criteria.iter().map(|c| c.name).collect();

        assert_eq!(
            names,
            ["Length (8+)", "Uppercase", "Lowercase", "Numbers", "Special chars"]
        );
    }

    #[test]
    fn test_assess_very_long_password() {
        let assessment = assess_password(&secret(&"a".repeat(300)));

        assert_eq!(assessment.strength, PasswordStrength::Medium);
        assert_eq!(assessment.crack_time_label(), "5e+407 years");
    }

    #[test]
    fn test_assess_mixed_case_scientific_crack_time() {
        let assessment = assess_password(&secret("AAAAAAAAAAAAa"));

        assert_eq!(assessment.keyspace, 52);
        assert_eq!(assessment.strength, PasswordStrength::Medium);
        assert_eq!(assessment.crack_time_label(), "3e+05 years");
    }

    #[test]
    fn test_assess_is_idempotent() {
        for pwd in ["", "abc", "abcdefgh", "Password1!", "Ж-ß-Ω"] {
            let password = secret(pwd);
            assert_eq!(assess_password(&password), assess_password(&password));
        }
    }
}
