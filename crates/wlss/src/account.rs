//! Account credentials.

use wlss_validator::constrained;

constrained! {
    /// Email address an account signs in with.
    pub AccountEmail: Str { length_min: 5, length_max: 200, regexp: r".+@.+\..+" }
}

constrained! {
    /// Public login name.
    pub AccountLogin: Str { length_min: 1, length_max: 50, regexp: r"[A-Za-z0-9\-_]*" }
}

constrained! {
    /// Plain-text password as entered, before hashing.
    pub AccountPassword: Str { length_min: 8, length_max: 500 }
}
