//! Password validation rules
//!
//! Each rule checks one independent property of the password.

mod breach;
mod case;
mod digit;
mod length;
mod special;

pub use breach::{digest_parts, BreachRule};
pub use case::{LowerCaseRule, UpperCaseRule};
pub use digit::DigitRule;
pub use length::{LengthRule, DEFAULT_MIN_LENGTH};
pub use special::SpecialCharRule;

use async_trait::async_trait;
use secrecy::SecretString;

use crate::error::TransportError;

/// Outcome of a single rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid { reason: String },
}

impl Verdict {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Result type for rule evaluation.
/// - `Ok(Verdict::Valid)` - Rule passed
/// - `Ok(Verdict::Invalid { reason })` - Rule failed with reason
/// - `Err(TransportError)` - Outcome could not be determined (breach lookup only)
pub type RuleResult = Result<Verdict, TransportError>;

/// A single, independently testable password check.
///
/// Rules hold only their configuration and never mutate the password, so
/// evaluating the same input twice yields the same outcome.
#[async_trait]
pub trait Rule: Send + Sync {
    /// Short identifier reported with failures.
    fn name(&self) -> &'static str;

    async fn evaluate(&self, password: &SecretString) -> RuleResult;
}
