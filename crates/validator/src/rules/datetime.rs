//! Datetime rule sets
//!
//! [`NaiveDatetimeRules`] and [`AwareDatetimeRules`] share bounds and differ
//! only in their [`TimezonePolicy`]. The policy runs first, so bounds are
//! only ever compared against timestamps of the right kind.

use std::borrow::Cow;
use std::cmp::Ordering;

use chrono::FixedOffset;

use crate::foundation::{Candidate, Rules, Validate, ValidationError};
use crate::timestamp::Timestamp;
use crate::validators::{Aware, Naive, TimezonePolicy, ValueMax, ValueMin};

/// Rules of a timezone-naive datetime type.
pub type NaiveDatetimeRules = DatetimeRules<Naive>;

/// Rules of a timezone-aware datetime type.
pub type AwareDatetimeRules = DatetimeRules<Aware>;

/// Declared rules of a datetime constrained type.
///
/// Chain: timezone, then `VALUE_MAX`, then `VALUE_MIN`.
#[derive(Debug, Clone)]
pub struct DatetimeRules<P> {
    name: Cow<'static, str>,
    policy: P,
    value_max: Option<ValueMax<Timestamp>>,
    value_min: Option<ValueMin<Timestamp>>,
}

impl<P: TimezonePolicy> DatetimeRules<P> {
    /// Starts a declaration with no bounds and the policy's defaults.
    pub fn builder(name: impl Into<Cow<'static, str>>) -> DatetimeRulesBuilder<P> {
        DatetimeRulesBuilder {
            name: name.into(),
            policy: P::default(),
            value_max: None,
            value_min: None,
        }
    }

    /// Starts a declaration of `name` that inherits this configuration.
    pub fn extend(&self, name: impl Into<Cow<'static, str>>) -> DatetimeRulesBuilder<P> {
        DatetimeRulesBuilder {
            name: name.into(),
            policy: self.policy.clone(),
            value_max: self.value_max(),
            value_min: self.value_min(),
        }
    }

    /// Upper bound, inclusive.
    pub fn value_max(&self) -> Option<Timestamp> {
        self.value_max.as_ref().map(|rule| rule.max)
    }

    /// Lower bound, inclusive.
    pub fn value_min(&self) -> Option<Timestamp> {
        self.value_min.as_ref().map(|rule| rule.min)
    }
}

impl DatetimeRules<Aware> {
    /// The pinned offset, if any.
    pub fn timezone(&self) -> Option<FixedOffset> {
        self.policy.timezone
    }
}

impl<P: TimezonePolicy> Rules for DatetimeRules<P> {
    type Raw = Timestamp;

    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, raw: &Timestamp) -> Result<(), ValidationError> {
        self.policy.check(&self.name, raw)?;
        self.value_max.validate(raw)?;
        self.value_min.validate(raw)
    }
}

/// Builder for [`DatetimeRules`].
#[derive(Debug, Clone)]
#[must_use = "builder methods must be chained or built"]
pub struct DatetimeRulesBuilder<P> {
    name: Cow<'static, str>,
    policy: P,
    value_max: Option<Timestamp>,
    value_min: Option<Timestamp>,
}

impl<P: TimezonePolicy> DatetimeRulesBuilder<P> {
    /// Sets `VALUE_MAX`.
    pub fn value_max(mut self, max: impl Candidate<Timestamp>) -> Self {
        self.value_max = Some(max.into_raw());
        self
    }

    /// Sets `VALUE_MIN`.
    pub fn value_min(mut self, min: impl Candidate<Timestamp>) -> Self {
        self.value_min = Some(min.into_raw());
        self
    }

    /// Checks the configuration and builds the rule set.
    ///
    /// Each bound must be a valid value of the base type of this flavour
    /// (`NaiveDatetime` or `AwareDatetime`).
    ///
    /// # Errors
    ///
    /// - `timezone_naive` / `timezone_aware` if a bound has the wrong kind
    /// - `bounds_order` if `VALUE_MAX < VALUE_MIN`
    pub fn declare(self) -> Result<DatetimeRules<P>, ValidationError> {
        let result = self.check();
        super::declared(&self.name, result)
    }

    fn check(&self) -> Result<DatetimeRules<P>, ValidationError> {
        let base = P::default();
        for bound in self.value_max.iter().chain(&self.value_min) {
            base.check(P::BASE_NAME, bound)?;
        }
        if let (Some(max), Some(min)) = (self.value_max, self.value_min)
            && max.partial_cmp(&min) == Some(Ordering::Less)
        {
            return Err(ValidationError::bounds_order("VALUE_MAX", "VALUE_MIN"));
        }

        Ok(DatetimeRules {
            name: self.name.clone(),
            policy: self.policy.clone(),
            value_max: self
                .value_max
                .map(|max| ValueMax::new(self.name.clone(), max)),
            value_min: self
                .value_min
                .map(|min| ValueMin::new(self.name.clone(), min)),
        })
    }
}

impl DatetimeRulesBuilder<Aware> {
    /// Pins `TIMEZONE`: values must carry exactly this offset.
    pub fn timezone(mut self, offset: FixedOffset) -> Self {
        self.policy.timezone = Some(offset);
        self
    }
}
