//! Integer rule set

use std::borrow::Cow;

use crate::foundation::{Candidate, Rules, Validate, ValidationError};
use crate::validators::{ValueMax, ValueMin};

/// Declared rules of an integer constrained type.
///
/// Chain: `VALUE_MAX`, then `VALUE_MIN`.
#[derive(Debug, Clone)]
pub struct IntRules {
    name: Cow<'static, str>,
    value_max: Option<ValueMax<i64>>,
    value_min: Option<ValueMin<i64>>,
}

impl IntRules {
    /// Starts a declaration with no bounds.
    pub fn builder(name: impl Into<Cow<'static, str>>) -> IntRulesBuilder {
        IntRulesBuilder {
            name: name.into(),
            value_max: None,
            value_min: None,
        }
    }

    /// Starts a declaration of `name` that inherits this configuration.
    pub fn extend(&self, name: impl Into<Cow<'static, str>>) -> IntRulesBuilder {
        IntRulesBuilder {
            name: name.into(),
            value_max: self.value_max(),
            value_min: self.value_min(),
        }
    }

    /// Upper bound, inclusive.
    pub fn value_max(&self) -> Option<i64> {
        self.value_max.as_ref().map(|rule| rule.max)
    }

    /// Lower bound, inclusive.
    pub fn value_min(&self) -> Option<i64> {
        self.value_min.as_ref().map(|rule| rule.min)
    }
}

impl Rules for IntRules {
    type Raw = i64;

    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, raw: &i64) -> Result<(), ValidationError> {
        self.value_max.validate(raw)?;
        self.value_min.validate(raw)
    }
}

/// Builder for [`IntRules`].
#[derive(Debug, Clone)]
#[must_use = "builder methods must be chained or built"]
pub struct IntRulesBuilder {
    name: Cow<'static, str>,
    value_max: Option<i64>,
    value_min: Option<i64>,
}

impl IntRulesBuilder {
    /// Sets `VALUE_MAX`.
    pub fn value_max(mut self, max: impl Candidate<i64>) -> Self {
        self.value_max = Some(max.into_raw());
        self
    }

    /// Sets `VALUE_MIN`.
    pub fn value_min(mut self, min: impl Candidate<i64>) -> Self {
        self.value_min = Some(min.into_raw());
        self
    }

    /// Checks the configuration and builds the rule set.
    ///
    /// # Errors
    ///
    /// `bounds_order` if both bounds are set and `VALUE_MIN > VALUE_MAX`.
    pub fn declare(self) -> Result<IntRules, ValidationError> {
        let result = match (self.value_min, self.value_max) {
            (Some(min), Some(max)) if min > max => {
                Err(ValidationError::bounds_order("VALUE_MAX", "VALUE_MIN"))
            }
            _ => Ok(IntRules {
                value_max: self
                    .value_max
                    .map(|max| ValueMax::new(self.name.clone(), max)),
                value_min: self
                    .value_min
                    .map(|min| ValueMin::new(self.name.clone(), min)),
                name: self.name.clone(),
            }),
        };
        super::declared(&self.name, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn percent() -> IntRules {
        IntRules::builder("Percent")
            .value_min(0)
            .value_max(100)
            .declare()
            .unwrap()
    }

    #[rstest]
    #[case(0)]
    #[case(42)]
    #[case(100)]
    fn accepts_values_within_bounds(#[case] value: i64) {
        assert!(percent().validate(&value).is_ok());
    }

    #[test]
    fn max_is_checked_before_min() {
        let error = percent().validate(&101).unwrap_err();
        assert_eq!(error.message(), "Percent value should not be greater than 100.");

        let error = percent().validate(&-1).unwrap_err();
        assert_eq!(error.message(), "Percent value should not be less than 0.");
    }

    #[test]
    fn unbounded_accepts_anything() {
        let rules = IntRules::builder("Int").declare().unwrap();
        assert!(rules.validate(&i64::MIN).is_ok());
        assert!(rules.validate(&i64::MAX).is_ok());
        assert_eq!(rules.value_min(), None);
    }

    #[test]
    fn equal_bounds_are_allowed() {
        let rules = IntRules::builder("Answer")
            .value_min(42)
            .value_max(42)
            .declare()
            .unwrap();
        assert!(rules.validate(&42).is_ok());
        assert!(rules.validate(&43).is_err());
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let error = IntRules::builder("Broken")
            .value_min(42)
            .value_max(0)
            .declare()
            .unwrap_err();
        assert_eq!(error.code(), "bounds_order");
        assert_eq!(error.message(), "VALUE_MAX should not be less than VALUE_MIN.");
    }

    #[test]
    fn extend_inherits_and_overrides() {
        let small = percent().extend("Small").value_max(10).declare().unwrap();
        assert_eq!(small.name(), "Small");
        assert_eq!(small.value_min(), Some(0));
        assert_eq!(small.value_max(), Some(10));
        assert_eq!(
            small.validate(&11).unwrap_err().message(),
            "Small value should not be greater than 10."
        );
    }

    #[test]
    fn extend_rechecks_ordering() {
        let error = percent().extend("Broken").value_max(-1).declare().unwrap_err();
        assert_eq!(error.code(), "bounds_order");
    }
}
