//! # wlss-validator
//!
//! Constrained value types: a raw value wrapped together with the proof that
//! it satisfies a declared set of rules.
//!
//! ## Quick Start
//!
//! ```
//! use wlss_validator::constrained;
//!
//! constrained! {
//!     MyStr: Str { length_min: 10 }
//! }
//!
//! let error = MyStr::new("foo").unwrap_err();
//! assert_eq!(error.message(), "MyStr value length should not be less than 10.");
//! ```
//!
//! ## Categories
//!
//! - **Integer** ([`rules::IntRules`]): `value_min`, `value_max`
//! - **String** ([`rules::StrRules`]): `length_min`, `length_max`, `regexp`
//! - **Datetime** ([`rules::NaiveDatetimeRules`], [`rules::AwareDatetimeRules`]):
//!   `value_min`, `value_max`, and `timezone` for the aware flavour
//!
//! A declaration with inconsistent bounds is rejected once, before any value
//! of the type can be built. See [`report`] for how unhandled failures are
//! printed.

mod macros;

pub mod foundation;
pub mod prelude;
pub mod report;
pub mod rules;
pub mod timestamp;
pub mod types;
pub mod validators;

pub use foundation::{
    Candidate, Constrained, Frame, Raw, Rules, Validate, ValidationError, ValidationResult, Value,
};
pub use timestamp::{Timestamp, utc};
pub use types::{AwareDatetime, Int, NaiveDatetime, PositiveInt, Str};
