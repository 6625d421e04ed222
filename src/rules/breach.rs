//! Breach rule - checks the password against a breached-password range endpoint.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};

use super::{Rule, RuleResult, Verdict};
use crate::range::{parse_range, HttpRangeClient, RangeClient, PREFIX_LEN};

/// Splits the uppercase SHA-1 hex digest of `text` into the 5-character
/// prefix sent to the endpoint and the 35-character suffix kept local.
pub fn digest_parts(text: &str) -> (String, String) {
    let mut hash = hex::encode_upper(Sha1::digest(text.as_bytes()));
    let suffix = hash.split_off(PREFIX_LEN);
    (hash, suffix)
}

/// Invalid when the password appears in the breach corpus.
///
/// Transport failures are returned as `Err` and never folded into a verdict.
#[derive(Debug, Clone)]
pub struct BreachRule<C = HttpRangeClient> {
    client: C,
}

impl<C: RangeClient> BreachRule<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: RangeClient> Rule for BreachRule<C> {
    fn name(&self) -> &'static str {
        "breach"
    }

    async fn evaluate(&self, password: &SecretString) -> RuleResult {
        let (prefix, suffix) = digest_parts(password.expose_secret());

        let body = self.client.fetch_range(&prefix).await?;
        let entries = parse_range(&body)?;

        // The count never affects membership
        let hit = entries
            .iter()
            .find(|e| e.suffix.eq_ignore_ascii_case(&suffix));

        match hit {
            Some(_entry) => {
                #[cfg(feature = "tracing")]
                tracing::info!(occurrences = _entry.count, "Password found in breach corpus");
                Ok(Verdict::invalid("password has been exposed in a known breach"))
            }
            None => Ok(Verdict::Valid),
        }
    }
}
