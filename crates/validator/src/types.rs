//! Base constrained types, one per category.
//!
//! Domain types either extend one of these or declare their own rules over
//! the same category.

crate::constrained! {
    /// Any integer.
    pub Int: Int {}
}

crate::constrained! {
    /// A non-negative integer.
    pub PositiveInt: Int extends Int { value_min: 0 }
}

crate::constrained! {
    /// Any string.
    pub Str: Str {}
}

crate::constrained! {
    /// A datetime without an offset.
    pub NaiveDatetime: NaiveDatetime {}
}

crate::constrained! {
    /// A datetime with any offset.
    pub AwareDatetime: AwareDatetime {}
}
