//! Length rule - checks password minimum length.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use super::{Rule, RuleResult, Verdict};

pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Valid when the password has at least `min_length` characters.
///
/// Length is counted in characters, so non-ASCII input is not penalised for
/// its UTF-8 width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRule {
    min_length: usize,
}

impl LengthRule {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub(crate) fn check(&self, password: &str) -> Verdict {
        if password.chars().count() < self.min_length {
            return Verdict::invalid(format!("text shorter than {}", self.min_length));
        }
        Verdict::Valid
    }
}

impl Default for LengthRule {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LENGTH)
    }
}

#[async_trait]
impl Rule for LengthRule {
    fn name(&self) -> &'static str {
        "length"
    }

    async fn evaluate(&self, password: &SecretString) -> RuleResult {
        Ok(self.check(password.expose_secret()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_rule_too_short() {
        let rule = LengthRule::default();
        assert_eq!(
            rule.check("test"),
            Verdict::invalid("text shorter than 8")
        );
    }

    #[test]
    fn test_length_rule_exactly_minimum() {
        assert_eq!(LengthRule::new(8).check("testtest"), Verdict::Valid);
    }

    #[test]
    fn test_length_rule_longer_than_minimum() {
        assert_eq!(LengthRule::new(8).check("testtesttest"), Verdict::Valid);
    }

    #[test]
    fn test_length_rule_empty_input() {
        assert!(!LengthRule::new(1).check("").is_valid());
        assert!(LengthRule::new(0).check("").is_valid());
    }

    #[test]
    fn test_length_rule_counts_characters_not_bytes() {
        // 4 characters, 8 bytes
        let pwd = "ÄÖÜß";
        assert_eq!(pwd.len(), 8);
        assert!(!LengthRule::new(5).check(pwd).is_valid());
        assert!(LengthRule::new(4).check(pwd).is_valid());
    }

    #[test]
    fn test_length_rule_boundary_sweep() {
        let rule = LengthRule::new(6);
        for n in 0..12 {
            let pwd = "x".repeat(n);
            assert_eq!(rule.check(&pwd).is_valid(), n >= 6, "length {}", n);
        }
    }

    #[tokio::test]
    async fn test_length_rule_evaluate() {
        let pwd = SecretString::new("Short1!".to_string().into());
        let result = LengthRule::default().evaluate(&pwd).await;
        assert_eq!(result.ok(), Some(Verdict::invalid("text shorter than 8")));
    }
}
