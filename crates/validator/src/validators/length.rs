//! String length rules
//!
//! Length is measured in Unicode scalar values (chars), never bytes.

use std::borrow::Cow;

use crate::foundation::ValidationError;

crate::validator! {
    /// Rejects strings longer than `max` chars.
    #[derive(PartialEq, Eq)]
    pub LengthMax { name: Cow<'static, str>, max: usize } for str;
    rule(self, input) { input.chars().count() <= self.max }
    error(self, input) { ValidationError::length_max(&self.name, self.max, input.chars().count()) }
}

crate::validator! {
    /// Rejects strings shorter than `min` chars.
    #[derive(PartialEq, Eq)]
    pub LengthMin { name: Cow<'static, str>, min: usize } for str;
    rule(self, input) { input.chars().count() >= self.min }
    error(self, input) { ValidationError::length_min(&self.name, self.min, input.chars().count()) }
}
