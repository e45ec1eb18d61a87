//! Conversion of construction inputs into raw values.
//!
//! A constrained value accepts either a raw value of its category or an
//! already constructed value of the same category. The latter is unwrapped
//! and validated again against the target type's rules.

use std::borrow::Cow;

use crate::foundation::{Constrained, Raw, Value};

/// Anything that can be offered as the raw value `T` of a constrained type.
pub trait Candidate<T> {
    /// Unwraps the candidate into the raw value to validate.
    fn into_raw(self) -> T;
}

impl<C: Constrained> Candidate<Raw<C>> for Value<C> {
    fn into_raw(self) -> Raw<C> {
        self.into_inner()
    }
}

impl<C: Constrained> Candidate<Raw<C>> for &Value<C> {
    fn into_raw(self) -> Raw<C> {
        self.value().clone()
    }
}

// ============================================================================
// INTEGERS
// ============================================================================

macro_rules! lossless_int_candidate {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Candidate<i64> for $ty {
                fn into_raw(self) -> i64 {
                    i64::from(self)
                }
            }
        )+
    };
}

lossless_int_candidate!(i8, i16, i32, i64, u8, u16, u32);

// ============================================================================
// STRINGS
// ============================================================================

impl Candidate<String> for String {
    fn into_raw(self) -> String {
        self
    }
}

impl Candidate<String> for &str {
    fn into_raw(self) -> String {
        self.to_owned()
    }
}

impl Candidate<String> for &String {
    fn into_raw(self) -> String {
        self.clone()
    }
}

impl Candidate<String> for Cow<'_, str> {
    fn into_raw(self) -> String {
        self.into_owned()
    }
}

impl Candidate<String> for Box<str> {
    fn into_raw(self) -> String {
        self.into_string()
    }
}
