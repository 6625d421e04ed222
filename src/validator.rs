//! Composite validator - runs rules in order and stops at the first failure.

use std::fmt;

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::error::ValidationError;
use crate::range::{HttpRangeClient, RangeClient, RangeConfig};
use crate::rules::{
    BreachRule, DigitRule, LengthRule, LowerCaseRule, Rule, SpecialCharRule, UpperCaseRule,
    Verdict,
};

/// Ordered chain of rules.
///
/// Insertion order is evaluation order. Evaluation is sequential and
/// fail-fast: the first `Invalid` verdict or transport error is returned
/// as-is and later rules are not run.
#[derive(Default)]
pub struct CompositeValidator {
    rules: Vec<Box<dyn Rule>>,
}

impl CompositeValidator {
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Appends a rule at the end of the chain.
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// The full chain: length, digit, special, uppercase, lowercase, breach.
    pub fn standard<C: RangeClient + 'static>(min_length: usize, client: C) -> Self {
        Self::default()
            .with_rule(LengthRule::new(min_length))
            .with_rule(DigitRule)
            .with_rule(SpecialCharRule)
            .with_rule(UpperCaseRule)
            .with_rule(LowerCaseRule)
            .with_rule(BreachRule::new(client))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Validates `password` against every rule in order.
    ///
    /// # Arguments
    /// * `password` - The password to validate
    /// * `token` - Optional cancellation token (async feature only)
    ///
    /// # Errors
    /// - `ValidationError::Violation` for the first rule that rejects the password
    /// - `ValidationError::Transport` if the breach lookup could not complete
    /// - `ValidationError::Cancelled` if the token fires first
    pub async fn validate(
        &self,
        password: &SecretString,
        #[cfg(feature = "async")] token: Option<CancellationToken>,
    ) -> Result<(), ValidationError> {
        for rule in &self.rules {
            #[cfg(feature = "async")]
            let outcome = match token.as_ref() {
                Some(t) => tokio::select! {
                    // A token cancelled before the rule starts wins.
                    biased;
                    _ = t.cancelled() => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(rule = rule.name(), "Validation cancelled");
                        return Err(ValidationError::Cancelled);
                    }
                    outcome = rule.evaluate(password) => outcome,
                },
                None => rule.evaluate(password).await,
            };

            #[cfg(not(feature = "async"))]
            let outcome = rule.evaluate(password).await;

            match outcome {
                Ok(Verdict::Valid) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(rule = rule.name(), "Rule passed");
                }
                Ok(Verdict::Invalid { reason }) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(rule = rule.name(), %reason, "Rule failed");
                    return Err(ValidationError::Violation {
                        rule: rule.name(),
                        reason,
                    });
                }
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(rule = rule.name(), error = %e, "Rule could not be evaluated");
                    return Err(e.into());
                }
            }
        }

        Ok(())
    }
}

impl fmt::Debug for CompositeValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeValidator")
            .field("rules", &self.rule_names())
            .finish()
    }
}

/// Validates a password against the standard rule chain.
///
/// Minimum length is 8 and the breach endpoint is configured from the
/// environment (see [`RangeConfig::from_env`]).
///
/// # Arguments
/// * `password` - The password to validate
/// * `token` - Optional cancellation token (async feature only)
pub async fn validate_password(
    password: &SecretString,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> Result<(), ValidationError> {
    let client = HttpRangeClient::new(RangeConfig::from_env()?)?;
    let validator = CompositeValidator::standard(crate::rules::DEFAULT_MIN_LENGTH, client);

    #[cfg(feature = "async")]
    return validator.validate(password, token).await;

    #[cfg(not(feature = "async"))]
    return validator.validate(password).await;
}

/// Async version that sends the validation outcome via channel.
#[cfg(feature = "async")]
pub async fn validate_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Result<(), ValidationError>>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("validation is about to start...");

    let outcome = validate_password(password, Some(token)).await;

    if let Err(_e) = tx.send(outcome).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password validation result: {}", _e);
    }
}
