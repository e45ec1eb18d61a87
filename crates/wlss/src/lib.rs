//! # wlss
//!
//! Domain value types of the wishlist service. Every type here is a
//! declaration only; validation lives in [`wlss_validator`].
//!
//! ```
//! use wlss::account::AccountLogin;
//!
//! assert!(AccountLogin::new("alice_01").is_ok());
//! assert_eq!(
//!     AccountLogin::new("").unwrap_err().message(),
//!     "AccountLogin value length should not be less than 1."
//! );
//! ```

pub mod account;
pub mod file;
pub mod profile;
pub mod shared;
pub mod wish;

pub use wlss_validator::{ValidationError, Value, report};
