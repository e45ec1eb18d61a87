//! Types shared by every domain.

use wlss_validator::{PositiveInt, constrained, utc};

constrained! {
    /// Primary key of a stored entity.
    pub Id: Int extends PositiveInt {}
}

constrained! {
    /// A timestamp stored in UTC.
    pub UtcDatetime: AwareDatetime { timezone: utc() }
}
