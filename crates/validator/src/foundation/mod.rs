//! Core validation types and traits
//!
//! This module contains the building blocks every constrained type is made
//! of:
//!
//! - **Traits**: [`Validate`] (one rule), [`Rules`] (a declared chain),
//!   [`Constrained`] (a named type bound to its rules), [`Candidate`]
//!   (construction input)
//! - **Errors**: [`ValidationError`], [`Frame`]
//! - **Values**: [`Value`]
//!
//! # Architecture
//!
//! ## 1. Declaration before construction
//!
//! A rule set is built and checked for internal consistency once. A bad
//! configuration (say `VALUE_MIN > VALUE_MAX`) is rejected before any value
//! of the type can exist.
//!
//! ## 2. Ordered chains
//!
//! Each category runs its rules in a fixed order and reports the first
//! violation only.
//!
//! ## 3. Type-scoped identity
//!
//! `Value<C>` is generic over the declared type, so values of two different
//! constrained types never compare equal: they do not even type-check
//! against each other.
//!
//! # Examples
//!
//! ```
//! use wlss_validator::constrained;
//!
//! constrained! {
//!     MyInt: Int { value_min: 0 }
//! }
//!
//! let error = MyInt::new(-42).unwrap_err();
//! assert_eq!(error.message(), "MyInt value should not be less than 0.");
//! assert_eq!(*MyInt::new(5).unwrap().value(), 5);
//! ```

pub mod candidate;
pub mod error;
pub mod traits;
pub mod value;

pub use candidate::Candidate;
pub use error::{Frame, ValidationError};
pub use traits::{Constrained, Raw, Rules, Validate};
pub use value::Value;

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
