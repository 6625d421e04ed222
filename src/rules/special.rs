//! Special character rule - requires ASCII punctuation.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use super::{Rule, RuleResult, Verdict};

/// Valid when the password contains one of the 32 printable ASCII
/// punctuation characters (``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpecialCharRule;

impl SpecialCharRule {
    pub(crate) fn check(&self, password: &str) -> Verdict {
        if password.chars().any(|c| c.is_ascii_punctuation()) {
            return Verdict::Valid;
        }
        Verdict::invalid("text must contain at least one special character")
    }
}

#[async_trait]
impl Rule for SpecialCharRule {
    fn name(&self) -> &'static str {
        "special"
    }

    async fn evaluate(&self, password: &SecretString) -> RuleResult {
        Ok(self.check(password.expose_secret()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

    #[test]
    fn test_special_rule_missing() {
        assert_eq!(
            SpecialCharRule.check("test1"),
            Verdict::invalid("text must contain at least one special character")
        );
    }

    #[test]
    fn test_special_rule_present() {
        assert_eq!(SpecialCharRule.check("@test"), Verdict::Valid);
    }

    #[test]
    fn test_special_rule_accepts_every_ascii_punctuation() {
        assert_eq!(PUNCTUATION.chars().count(), 32);
        for c in PUNCTUATION.chars() {
            assert!(SpecialCharRule.check(&c.to_string()).is_valid(), "{:?}", c);
        }
    }

    #[test]
    fn test_special_rule_rejects_space_and_non_ascii_symbols() {
        assert!(!SpecialCharRule.check("pass word").is_valid());
        assert!(!SpecialCharRule.check("€£§").is_valid());
        assert!(!SpecialCharRule.check("\t\n").is_valid());
    }
}
