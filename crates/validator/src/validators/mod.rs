//! Single-check rules
//!
//! Every rule set is an ordered chain of these. Each carries the declared
//! name of the constrained type so its error message can name the offender.
//!
//! # Categories
//!
//! - **Bounds**: [`ValueMax`], [`ValueMin`] (integers and timestamps)
//! - **Length**: [`LengthMax`], [`LengthMin`] (strings, counted in chars)
//! - **Pattern**: [`FullMatch`]
//! - **Timezone**: [`Naive`], [`Aware`]

pub mod length;
pub mod pattern;
pub mod range;
pub mod timezone;

pub use length::{LengthMax, LengthMin};
pub use pattern::FullMatch;
pub use range::{ValueMax, ValueMin};
pub use timezone::{Aware, Naive, TimezonePolicy};
