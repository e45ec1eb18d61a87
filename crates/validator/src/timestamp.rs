//! Raw value of the datetime category.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone, Timelike, Utc};

use crate::foundation::Candidate;

/// A point in time, with or without a UTC offset.
///
/// Aware timestamps compare by instant, so `12:00+00:00` equals
/// `15:00+03:00`. Naive and aware timestamps are never ordered against each
/// other: `partial_cmp` returns `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timestamp {
    /// Wall-clock time without an offset.
    Naive(NaiveDateTime),
    /// An instant with the offset it was observed in.
    Aware(DateTime<FixedOffset>),
}

impl Timestamp {
    /// Whether an offset is attached.
    pub fn is_aware(&self) -> bool {
        matches!(self, Self::Aware(_))
    }

    /// The attached offset, if any.
    pub fn offset(&self) -> Option<FixedOffset> {
        match self {
            Self::Naive(_) => None,
            Self::Aware(datetime) => Some(*datetime.offset()),
        }
    }
}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Naive(a), Self::Naive(b)) => Some(a.cmp(b)),
            (Self::Aware(a), Self::Aware(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Fractions print as microseconds, and not at all when whole.
        match self {
            Self::Naive(datetime) => {
                let pattern = if datetime.nanosecond() == 0 {
                    "%Y-%m-%d %H:%M:%S"
                } else {
                    "%Y-%m-%d %H:%M:%S%.6f"
                };
                write!(f, "{}", datetime.format(pattern))
            }
            Self::Aware(datetime) => {
                let pattern = if datetime.nanosecond() == 0 {
                    "%Y-%m-%d %H:%M:%S%:z"
                } else {
                    "%Y-%m-%d %H:%M:%S%.6f%:z"
                };
                write!(f, "{}", datetime.format(pattern))
            }
        }
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::Naive(datetime)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(datetime: DateTime<Tz>) -> Self {
        Self::Aware(datetime.fixed_offset())
    }
}

impl Candidate<Timestamp> for Timestamp {
    fn into_raw(self) -> Timestamp {
        self
    }
}

impl Candidate<Timestamp> for NaiveDateTime {
    fn into_raw(self) -> Timestamp {
        Timestamp::Naive(self)
    }
}

impl<Tz: TimeZone> Candidate<Timestamp> for DateTime<Tz> {
    fn into_raw(self) -> Timestamp {
        Timestamp::Aware(self.fixed_offset())
    }
}

/// The zero offset.
pub fn utc() -> FixedOffset {
    Utc.fix()
}

/// `UTC` for the zero offset, `UTC+03:00` style otherwise.
pub fn timezone_label(offset: FixedOffset) -> String {
    if offset.local_minus_utc() == 0 {
        "UTC".to_owned()
    } else {
        format!("UTC{offset}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn naive(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|date| date.and_hms_opt(hour, 0, 0))
            .unwrap()
    }

    fn aware(hour: u32, offset_hours: i32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(offset_hours * 3600)
            .unwrap()
            .from_local_datetime(&naive(hour))
            .unwrap()
    }

    #[test]
    fn aware_compares_by_instant() {
        let a = Timestamp::from(aware(12, 0));
        let b = Timestamp::from(aware(15, 3));
        assert_eq!(a, b);
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Equal));
    }

    #[test]
    fn kinds_are_not_ordered_against_each_other() {
        let a = Timestamp::from(naive(12));
        let b = Timestamp::from(aware(12, 0));
        assert_ne!(a, b);
        assert_eq!(a.partial_cmp(&b), None);
    }

    #[test]
    fn display() {
        assert_eq!(Timestamp::from(naive(8)).to_string(), "2024-01-01 08:00:00");
        assert_eq!(
            Timestamp::from(aware(8, 3)).to_string(),
            "2024-01-01 08:00:00+03:00"
        );
    }

    #[rstest]
    #[case(500_000_000, "2024-01-01 08:00:00.500000")]
    #[case(1_000, "2024-01-01 08:00:00.000001")]
    #[case(123_456_789, "2024-01-01 08:00:00.123456")]
    fn display_fraction_as_microseconds(#[case] nanos: u32, #[case] expected: &str) {
        let naive = naive(8).with_nanosecond(nanos).unwrap();
        assert_eq!(Timestamp::from(naive).to_string(), expected);
        let aware = aware(8, 3).with_nanosecond(nanos).unwrap();
        assert_eq!(Timestamp::from(aware).to_string(), format!("{expected}+03:00"));
    }

    #[test]
    fn labels() {
        assert_eq!(timezone_label(utc()), "UTC");
        assert_eq!(
            timezone_label(FixedOffset::east_opt(3 * 3600).unwrap()),
            "UTC+03:00"
        );
        assert_eq!(
            timezone_label(FixedOffset::west_opt(5 * 3600 + 1800).unwrap()),
            "UTC-05:30"
        );
    }

    #[test]
    fn utc_datetime_converts_to_fixed_offset() {
        let now = Utc::now();
        let timestamp = Candidate::<Timestamp>::into_raw(now);
        assert_eq!(timestamp.offset(), Some(utc()));
        assert!(timestamp.is_aware());
    }
}
