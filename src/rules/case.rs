//! Case rules - require ASCII uppercase / lowercase letters.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use super::{Rule, RuleResult, Verdict};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpperCaseRule;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LowerCaseRule;

impl UpperCaseRule {
    pub(crate) fn check(&self, password: &str) -> Verdict {
        if password.chars().any(|c| c.is_ascii_uppercase()) {
            return Verdict::Valid;
        }
        Verdict::invalid("text must contain at least one uppercase letter")
    }
}

impl LowerCaseRule {
    pub(crate) fn check(&self, password: &str) -> Verdict {
        if password.chars().any(|c| c.is_ascii_lowercase()) {
            return Verdict::Valid;
        }
        Verdict::invalid("text must contain at least one lowercase letter")
    }
}

#[async_trait]
impl Rule for UpperCaseRule {
    fn name(&self) -> &'static str {
        "uppercase"
    }

    async fn evaluate(&self, password: &SecretString) -> RuleResult {
        Ok(self.check(password.expose_secret()))
    }
}

#[async_trait]
impl Rule for LowerCaseRule {
    fn name(&self) -> &'static str {
        "lowercase"
    }

    async fn evaluate(&self, password: &SecretString) -> RuleResult {
        Ok(self.check(password.expose_secret()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_rule_all_lower() {
        let result = UpperCaseRule.check("test");
        assert!(matches!(result, Verdict::Invalid { .. }));
        if let Verdict::Invalid { reason } = result {
            assert!(reason.contains("uppercase"));
        }
    }

    #[test]
    fn test_upper_rule_positive() {
        assert_eq!(UpperCaseRule.check("Test"), Verdict::Valid);
        assert_eq!(UpperCaseRule.check("teSt"), Verdict::Valid);
    }

    #[test]
    fn test_upper_rule_digits_and_punctuation() {
        assert!(!UpperCaseRule.check("1234").is_valid());
        assert!(!UpperCaseRule.check("!@#$%").is_valid());
    }

    #[test]
    fn test_upper_rule_ignores_non_ascii_uppercase() {
        assert!(!UpperCaseRule.check("ÄÖÜ").is_valid());
    }

    #[test]
    fn test_lower_rule_all_upper() {
        let result = LowerCaseRule.check("TEST");
        assert!(matches!(result, Verdict::Invalid { .. }));
        if let Verdict::Invalid { reason } = result {
            assert!(reason.contains("lowercase"));
        }
    }

    #[test]
    fn test_lower_rule_positive() {
        assert_eq!(LowerCaseRule.check("TEsT"), Verdict::Valid);
    }

    #[test]
    fn test_lower_rule_digits_and_punctuation() {
        assert!(!LowerCaseRule.check("1234").is_valid());
        assert!(!LowerCaseRule.check("!@#$%").is_valid());
    }

    #[test]
    fn test_lower_rule_ignores_non_ascii_lowercase() {
        assert!(!LowerCaseRule.check("äöüß").is_valid());
    }
}
