//! Value bound rules
//!
//! Shared by the integer and datetime categories. Comparison goes through
//! `PartialOrd`, so a value that is not comparable with the bound (a naive
//! timestamp against an aware one) is never rejected here; the timezone
//! rules run earlier in the chain and handle that case.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt::Display;

use crate::foundation::ValidationError;

crate::validator! {
    /// Rejects values greater than `max`.
    pub ValueMax<T: PartialOrd + Display> { name: Cow<'static, str>, max: T } for T;
    rule(self, input) { input.partial_cmp(&self.max) != Some(Ordering::Greater) }
    error(self, input) { ValidationError::value_max(&self.name, &self.max) }
}

crate::validator! {
    /// Rejects values less than `min`.
    pub ValueMin<T: PartialOrd + Display> { name: Cow<'static, str>, min: T } for T;
    rule(self, input) { input.partial_cmp(&self.min) != Some(Ordering::Less) }
    error(self, input) { ValidationError::value_min(&self.name, &self.min) }
}

// ============================================================================
// TESTS
// ============================================================================
