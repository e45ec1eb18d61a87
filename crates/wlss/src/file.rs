//! Uploaded files.

use wlss_validator::constrained;

/// One byte.
pub const BYTE: i64 = 1;
/// 1024 bytes.
pub const KILOBYTE: i64 = 1024 * BYTE;
/// 1024 kilobytes.
pub const MEGABYTE: i64 = 1024 * KILOBYTE;

constrained! {
    /// Size of an uploaded file in bytes.
    pub FileSize: Int { value_min: BYTE, value_max: 10 * MEGABYTE }
}
