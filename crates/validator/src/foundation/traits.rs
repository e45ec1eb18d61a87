//! Core traits for the validation system
//!
//! [`Validate`] is a single check over a borrowed input. [`Rules`] is the
//! ordered chain of checks a constrained type declares, and [`Constrained`]
//! binds a named type to its declared rules.

use std::fmt;

use crate::foundation::ValidationError;

// ============================================================================
// SINGLE RULE
// ============================================================================

/// A single validation rule.
///
/// # Examples
///
/// ```
/// use wlss_validator::foundation::{Validate, ValidationError};
///
/// struct Even;
///
/// impl Validate for Even {
///     type Input = i64;
///
///     fn validate(&self, input: &i64) -> Result<(), ValidationError> {
///         if input % 2 == 0 {
///             Ok(())
///         } else {
///             Err(ValidationError::new("even", "value should be even."))
///         }
///     }
/// }
///
/// assert!(Even.validate(&4).is_ok());
/// assert!(Even.validate(&3).is_err());
/// ```
pub trait Validate {
    /// The type being validated.
    type Input: ?Sized;

    /// Returns `Ok(())` when the input satisfies the rule.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

/// An undeclared rule never rejects anything.
impl<V: Validate> Validate for Option<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self {
            Some(rule) => rule.validate(input),
            None => Ok(()),
        }
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// The declared, consistency-checked rule set of one constrained type.
///
/// Implementations run their checks in a fixed order and stop at the first
/// violation, so the surfaced message is deterministic when several rules
/// would reject the same value.
pub trait Rules: fmt::Debug + Send + Sync + 'static {
    /// The raw value category (`i64`, `String`, `Timestamp`).
    type Raw: Clone + fmt::Debug + Send + Sync + 'static;

    /// Declared name of the constrained type, used in every message.
    fn name(&self) -> &str;

    /// Runs the validation chain over a candidate raw value.
    fn validate(&self, raw: &Self::Raw) -> Result<(), ValidationError>;
}

// ============================================================================
// CONSTRAINED TYPE
// ============================================================================

/// A named constrained type.
///
/// Usually implemented through [`constrained!`](crate::constrained), which
/// declares the rule set lazily, once per process, and caches a failed
/// declaration so every later use reports the same error.
pub trait Constrained: 'static {
    /// The rule-set category of this type.
    type Rules: Rules;

    /// The declared rule set, or the error that rejected the declaration.
    fn declaration() -> Result<&'static Self::Rules, ValidationError>;
}

/// Raw value category of a constrained type.
pub type Raw<C> = <<C as Constrained>::Rules as Rules>::Raw;

// ============================================================================
// TESTS
// ============================================================================
