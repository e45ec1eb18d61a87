//! String rule set

use std::borrow::Cow;

use crate::foundation::{Rules, Validate, ValidationError};
use crate::validators::{FullMatch, LengthMax, LengthMin};

/// Declared rules of a string constrained type.
///
/// Chain: `LENGTH_MAX`, then `LENGTH_MIN`, then `REGEXP`.
#[derive(Debug, Clone)]
pub struct StrRules {
    name: Cow<'static, str>,
    length_max: Option<LengthMax>,
    length_min: LengthMin,
    regexp: Option<FullMatch>,
}

impl StrRules {
    /// Starts a declaration with `LENGTH_MIN = 0` and nothing else.
    pub fn builder(name: impl Into<Cow<'static, str>>) -> StrRulesBuilder {
        StrRulesBuilder {
            name: name.into(),
            length_max: None,
            length_min: 0,
            regexp: None,
        }
    }

    /// Starts a declaration of `name` that inherits this configuration.
    pub fn extend(&self, name: impl Into<Cow<'static, str>>) -> StrRulesBuilder {
        StrRulesBuilder {
            name: name.into(),
            length_max: self.length_max(),
            length_min: self.length_min(),
            regexp: self.regexp.as_ref().map(|rule| Cow::Owned(rule.pattern().to_owned())),
        }
    }

    /// Maximum length in chars, inclusive.
    pub fn length_max(&self) -> Option<usize> {
        self.length_max.as_ref().map(|rule| rule.max)
    }

    /// Minimum length in chars, inclusive.
    pub fn length_min(&self) -> usize {
        self.length_min.min
    }

    /// The full-match pattern.
    pub fn regexp(&self) -> Option<&str> {
        self.regexp.as_ref().map(FullMatch::pattern)
    }
}

impl Rules for StrRules {
    type Raw = String;

    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, raw: &String) -> Result<(), ValidationError> {
        self.length_max.validate(raw)?;
        self.length_min.validate(raw)?;
        self.regexp.validate(raw)
    }
}

/// Builder for [`StrRules`].
#[derive(Debug, Clone)]
#[must_use = "builder methods must be chained or built"]
pub struct StrRulesBuilder {
    name: Cow<'static, str>,
    length_max: Option<usize>,
    length_min: usize,
    regexp: Option<Cow<'static, str>>,
}

impl StrRulesBuilder {
    /// Sets `LENGTH_MAX`.
    pub fn length_max(mut self, max: usize) -> Self {
        self.length_max = Some(max);
        self
    }

    /// Sets `LENGTH_MIN`.
    pub fn length_min(mut self, min: usize) -> Self {
        self.length_min = min;
        self
    }

    /// Sets `REGEXP`, matched against the whole value.
    pub fn regexp(mut self, pattern: impl Into<Cow<'static, str>>) -> Self {
        self.regexp = Some(pattern.into());
        self
    }

    /// Checks the configuration and builds the rule set.
    ///
    /// # Errors
    ///
    /// - `bounds_order` if `LENGTH_MIN > LENGTH_MAX`
    /// - `regexp_invalid` if `REGEXP` does not compile
    pub fn declare(self) -> Result<StrRules, ValidationError> {
        let result = self.check();
        super::declared(&self.name, result)
    }

    fn check(&self) -> Result<StrRules, ValidationError> {
        if let Some(max) = self.length_max
            && self.length_min > max
        {
            return Err(ValidationError::bounds_order("LENGTH_MAX", "LENGTH_MIN"));
        }
        let regexp = self
            .regexp
            .clone()
            .map(|pattern| FullMatch::new(self.name.clone(), pattern))
            .transpose()?;

        Ok(StrRules {
            name: self.name.clone(),
            length_max: self
                .length_max
                .map(|max| LengthMax::new(self.name.clone(), max)),
            length_min: LengthMin::new(self.name.clone(), self.length_min),
            regexp,
        })
    }
}
