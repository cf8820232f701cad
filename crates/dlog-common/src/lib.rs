//! Correctness-focused primitives that are easy to get subtly wrong when
//! rewritten ad hoc:
//!
//! - [`down_cast`]: integer narrowing that refuses to lose information.
//! - [`format()`] / [`safe_format!`]: formatting into a `String` that is never
//!   truncated, in at most two passes.
//! - [`is_printable`] and friends: whether a NUL-terminated byte buffer is
//!   safe to show on one line of diagnostic output.
//! - [`replace_all`]: in-place substring replacement that never re-scans
//!   its own replacements.
//!
//! Everything here is stateless and performs no I/O.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod cast;
mod collections;
mod error;
mod format;
mod printable;
mod replace;

#[cfg(test)]
mod tests;

pub use cast::{down_cast, size_of_u32, size_of_val_u32, try_down_cast};
pub use collections::{has_only, items, keys, sorted, unique, values};
pub use error::{CastError, FormatError};
pub use format::{DEFAULT_INITIAL_CAPACITY, FormatOptions, format, format_with};
pub use printable::{
    PrintableOptions, escape_for_display, is_printable, is_printable_byte, is_printable_cstr,
    is_printable_until_nul, is_printable_until_nul_with,
};
pub use replace::{replace_all, replace_all_bytes};

/// Formats arguments into an owned `String` without truncation.
///
/// Takes the same arguments as [`alloc::format!`] and returns
/// `Result<String, FormatError>`.
///
/// ```rust
/// use dlog_common::safe_format;
///
/// assert_eq!(safe_format!("{}-{}", 5, "x").unwrap(), "5-x");
///
/// let long = "ab".repeat(5_000);
/// assert_eq!(safe_format!("{long}").unwrap().len(), 10_000);
/// ```
#[macro_export]
macro_rules! safe_format {
    ($($arg:tt)*) => {
        $crate::format(::core::format_args!($($arg)*))
    };
}
