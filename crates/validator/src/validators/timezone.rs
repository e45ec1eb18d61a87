//! Timezone awareness rules
//!
//! The datetime category comes in two flavours that share bounds but differ
//! in what they demand of the offset. Each flavour is a [`TimezonePolicy`].

use std::fmt;

use chrono::FixedOffset;

use crate::foundation::ValidationError;
use crate::timestamp::{Timestamp, timezone_label};

/// The offset requirement of a datetime rule set.
pub trait TimezonePolicy: fmt::Debug + Clone + Default + Send + Sync + 'static {
    /// Name of the base constrained type of this flavour. Bounds are checked
    /// against the base type, so errors about a bad bound carry this name.
    const BASE_NAME: &'static str;

    /// Checks `value` against the policy; `name` goes into the message.
    fn check(&self, name: &str, value: &Timestamp) -> Result<(), ValidationError>;
}

// ============================================================================
// NAIVE
// ============================================================================

/// Rejects any offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Naive;

impl TimezonePolicy for Naive {
    const BASE_NAME: &'static str = "NaiveDatetime";

    fn check(&self, name: &str, value: &Timestamp) -> Result<(), ValidationError> {
        match value.offset() {
            None => Ok(()),
            Some(offset) => Err(ValidationError::new(
                "timezone_naive",
                format!("{name} value should be timezone-naive."),
            )
            .with_param("offset", offset.to_string())),
        }
    }
}

// ============================================================================
// AWARE
// ============================================================================

/// Requires an offset, optionally a specific one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Aware {
    /// The pinned offset, if any.
    pub timezone: Option<FixedOffset>,
}

impl TimezonePolicy for Aware {
    const BASE_NAME: &'static str = "AwareDatetime";

    fn check(&self, name: &str, value: &Timestamp) -> Result<(), ValidationError> {
        let Some(offset) = value.offset() else {
            return Err(ValidationError::new(
                "timezone_aware",
                format!("{name} value should be timezone-aware datetime."),
            ));
        };
        match self.timezone {
            Some(pinned) if pinned != offset => {
                let label = timezone_label(pinned);
                Err(ValidationError::new(
                    "timezone_mismatch",
                    format!("{name} value should be timezone-aware datetime in {label} timezone."),
                )
                .with_param("timezone", label)
                .with_param("actual", timezone_label(offset)))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestamp::utc;
    use chrono::{NaiveDate, NaiveDateTime, TimeZone};
    use pretty_assertions::assert_eq;

    fn naive() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 17)
            .and_then(|date| date.and_hms_opt(10, 30, 0))
            .unwrap()
    }

    fn aware(offset_seconds: i32) -> Timestamp {
        let offset = FixedOffset::east_opt(offset_seconds).unwrap();
        Timestamp::from(offset.from_local_datetime(&naive()).unwrap())
    }

    #[test]
    fn naive_rejects_offsets() {
        assert!(Naive.check("MyDatetime", &Timestamp::from(naive())).is_ok());

        let error = Naive.check("MyDatetime", &aware(0)).unwrap_err();
        assert_eq!(error.code(), "timezone_naive");
        assert_eq!(error.message(), "MyDatetime value should be timezone-naive.");
    }

    #[test]
    fn aware_requires_offset() {
        let policy = Aware::default();
        assert!(policy.check("MyDatetime", &aware(3600)).is_ok());

        let error = policy.check("MyDatetime", &Timestamp::from(naive())).unwrap_err();
        assert_eq!(error.code(), "timezone_aware");
        assert_eq!(
            error.message(),
            "MyDatetime value should be timezone-aware datetime."
        );
    }

    #[test]
    fn aware_pinned_offset() {
        let policy = Aware { timezone: Some(utc()) };
        assert!(policy.check("MyDatetime", &aware(0)).is_ok());

        let error = policy.check("MyDatetime", &aware(3 * 3600)).unwrap_err();
        assert_eq!(error.code(), "timezone_mismatch");
        assert_eq!(
            error.message(),
            "MyDatetime value should be timezone-aware datetime in UTC timezone."
        );
        assert_eq!(error.param("actual"), Some("UTC+03:00"));
    }
}
