//! Wishlist entries.

use wlss_validator::constrained;

constrained! {
    pub WishDescription: Str { length_min: 1, length_max: 10_000, regexp: r"(?s).*" }
}

constrained! {
    /// Same alphabet as [`ProfileName`](crate::profile::ProfileName).
    pub WishTitle: Str { length_min: 1, length_max: 100, regexp: r"[A-Za-zА-яЁё'-.() ]*" }
}
