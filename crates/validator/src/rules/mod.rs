//! Declared rule sets
//!
//! A rule set is the configuration of one constrained type plus the ordered
//! chain of rules built from it. Every category has a builder; `declare()`
//! runs the declaration-time guard and either yields the rule set or the
//! error explaining why the configuration is inconsistent.
//!
//! ```
//! use wlss_validator::rules::IntRules;
//!
//! let error = IntRules::builder("Broken")
//!     .value_min(42)
//!     .value_max(0)
//!     .declare()
//!     .unwrap_err();
//! assert_eq!(error.message(), "VALUE_MAX should not be less than VALUE_MIN.");
//! ```

pub mod datetime;
pub mod int;
pub mod string;

pub use datetime::{AwareDatetimeRules, DatetimeRules, DatetimeRulesBuilder, NaiveDatetimeRules};
pub use int::{IntRules, IntRulesBuilder};
pub use string::{StrRules, StrRulesBuilder};

use crate::foundation::ValidationError;

/// Logs the outcome of a declaration.
fn declared<R>(name: &str, result: Result<R, ValidationError>) -> Result<R, ValidationError> {
    match &result {
        Ok(_) => tracing::debug!(type_name = name, "declared constrained type"),
        Err(error) => tracing::debug!(
            type_name = name,
            code = error.code(),
            error = %error,
            "rejected constrained type declaration"
        ),
    }
    result
}
