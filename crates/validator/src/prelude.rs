//! Prelude module for convenient imports.
//!
//! Provides a single `use wlss_validator::prelude::*;` import that brings in
//! the macro, the base types and everything needed to handle a failure.
//!
//! # Examples
//!
//! ```
//! use wlss_validator::prelude::*;
//!
//! constrained! {
//!     Age: Int extends PositiveInt { value_max: 150 }
//! }
//!
//! assert!(Age::new(200).is_err());
//! ```

// ============================================================================
// FOUNDATION: Traits, errors, the value wrapper
// ============================================================================

pub use crate::foundation::{
    Candidate, Constrained, Rules, Validate, ValidationError, ValidationResult, Value,
};

// ============================================================================
// TYPES: Base constrained types and the datetime raw value
// ============================================================================

pub use crate::timestamp::{Timestamp, utc};
pub use crate::types::{AwareDatetime, Int, NaiveDatetime, PositiveInt, Str};

// ============================================================================
// REPORTING
// ============================================================================

pub use crate::report::{Report, TracebackMode};

pub use crate::constrained;
