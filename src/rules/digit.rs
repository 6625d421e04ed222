//! Digit rule - requires at least one decimal digit.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use super::{Rule, RuleResult, Verdict};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigitRule;

impl DigitRule {
    pub(crate) fn check(&self, password: &str) -> Verdict {
        if password.chars().any(|c| c.is_ascii_digit()) {
            return Verdict::Valid;
        }
        Verdict::invalid("text must contain at least one digit")
    }
}

#[async_trait]
impl Rule for DigitRule {
    fn name(&self) -> &'static str {
        "digit"
    }

    async fn evaluate(&self, password: &SecretString) -> RuleResult {
        Ok(self.check(password.expose_secret()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_rule_missing() {
        let result = DigitRule.check("abc");
        assert!(matches!(result, Verdict::Invalid { .. }));
        if let Verdict::Invalid { reason } = result {
            assert!(reason.contains("digit"));
        }
    }

    #[test]
    fn test_digit_rule_present() {
        assert_eq!(DigitRule.check("abc1"), Verdict::Valid);
        assert_eq!(DigitRule.check("0"), Verdict::Valid);
    }

    #[test]
    fn test_digit_rule_ignores_non_ascii_digits() {
        // Arabic-Indic and fullwidth digits are not 0-9
        assert!(!DigitRule.check("٣٤").is_valid());
        assert!(!DigitRule.check("１２").is_valid());
    }

    #[test]
    fn test_digit_rule_empty() {
        assert!(!DigitRule.check("").is_valid());
    }
}
