//! Password validation library
//!
//! This library validates candidate passwords against an ordered chain of
//! independent rules, stopping at the first failure. The breach rule checks
//! the password against a k-anonymity range endpoint, so only a 5-character
//! SHA-1 prefix ever leaves the process.
//!
//! # Features
//!
//! - `async` (default): Enables cancellation support and channel delivery
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BREACH_ENDPOINT`: Custom breach range endpoint
//!   (default: `https://api.pwnedpasswords.com/range/`)
//! - `PWD_BREACH_TIMEOUT_MS`: Breach lookup timeout in milliseconds (default: 5000)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_rules::{validate_password, ValidationError};
//! use secrecy::SecretString;
//!
//! # async fn run() {
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! #[cfg(feature = "async")]
//! let outcome = validate_password(&password, None).await;
//!
//! #[cfg(not(feature = "async"))]
//! let outcome = validate_password(&password).await;
//!
//! match outcome {
//!     Ok(()) => println!("valid"),
//!     Err(ValidationError::Violation { reason, .. }) => println!("rejected: {reason}"),
//!     Err(e) => println!("could not validate: {e}"),
//! }
//! # }
//! ```

// Internal modules
mod error;
mod range;
mod rules;
mod validator;

// Public API
pub use error::{ConfigError, TransportError, ValidationError};
pub use range::{
    parse_range, HttpRangeClient, RangeClient, RangeConfig, RangeEntry, DEFAULT_ENDPOINT,
    DEFAULT_TIMEOUT,
};
pub use rules::{
    digest_parts, BreachRule, DigitRule, LengthRule, LowerCaseRule, Rule, RuleResult,
    SpecialCharRule, UpperCaseRule, Verdict, DEFAULT_MIN_LENGTH,
};
pub use validator::{validate_password, CompositeValidator};

#[cfg(feature = "async")]
pub use validator::validate_password_tx;

// Re-exported so downstream crates can implement `Rule` and `RangeClient`.
pub use async_trait::async_trait;
