//! Formatting into an owned `String` without truncation.
//!
//! The formatter starts with a modest guessed buffer. The first pass writes
//! through a [`BoundedWriter`], which keeps only the bytes that fit but counts
//! every byte the fully expanded output needs. When the guess was large
//! enough the first pass already holds the result. Otherwise exactly one more
//! pass runs into a buffer allocated to the measured length.

use alloc::string::String;
use core::fmt::{self, Write};

use crate::error::FormatError;

/// Default size of the first-pass buffer, in bytes.
pub const DEFAULT_INITIAL_CAPACITY: usize = 256;

/// Configuration for [`format_with`].
///
/// ```rust
/// use dlog_common::{FormatOptions, format_with};
///
/// let options = FormatOptions {
///     initial_capacity: 16,
///     ..Default::default()
/// };
/// let s = format_with(options, format_args!("{:>20}", "right")).unwrap();
/// assert_eq!(s.len(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatOptions {
    /// Capacity of the first-pass buffer. Output longer than this triggers a
    /// second pass into an exactly sized buffer.
    ///
    /// # Default
    ///
    /// [`DEFAULT_INITIAL_CAPACITY`]
    pub initial_capacity: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}

/// Writes into a fixed-capacity buffer, dropping whatever does not fit while
/// still counting the full length of everything written.
struct BoundedWriter {
    buf: String,
    capacity: usize,
    required: usize,
}

impl BoundedWriter {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
            capacity,
            required: 0,
        }
    }

    fn fits(&self) -> bool {
        self.required <= self.capacity
    }
}

impl Write for BoundedWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = self.capacity - self.buf.len();
        let mut end = s.len().min(room);
        // Keep the buffer valid UTF-8 by cutting at a character boundary.
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        self.buf.push_str(&s[..end]);
        self.required = self.required.saturating_add(s.len());
        Ok(())
    }
}

/// Runs one interpolation pass into a buffer of `capacity` bytes.
fn interpolate(capacity: usize, args: fmt::Arguments<'_>) -> Result<BoundedWriter, FormatError> {
    let mut writer = BoundedWriter::with_capacity(capacity);
    writer.write_fmt(args)?;
    Ok(writer)
}

/// Formats `args` with the default [`FormatOptions`].
///
/// Prefer the [`safe_format!`](crate::safe_format) macro, which builds the
/// `Arguments` for you.
///
/// # Errors
///
/// See [`format_with`].
pub fn format(args: fmt::Arguments<'_>) -> Result<String, FormatError> {
    format_with(FormatOptions::default(), args)
}

/// Formats `args` into an owned string, however long the result is.
///
/// At most two formatting passes run, and when the second one does, its
/// buffer is allocated to exactly the measured length.
///
/// # Errors
///
/// - [`FormatError::Fmt`] if a formatting trait implementation fails.
/// - [`FormatError::LengthMismatch`] if an argument formats to a different
///   length on the second pass than on the first.
pub fn format_with(options: FormatOptions, args: fmt::Arguments<'_>) -> Result<String, FormatError> {
    let first = interpolate(options.initial_capacity, args)?;
    if first.fits() {
        return Ok(first.buf);
    }

    let expected = first.required;
    log::trace!(
        "format: {expected} bytes exceed initial capacity of {}, retrying",
        options.initial_capacity
    );
    let second = interpolate(expected, args)?;
    if second.required != expected {
        return Err(FormatError::LengthMismatch {
            expected,
            actual: second.required,
        });
    }
    Ok(second.buf)
}

#[cfg(test)]
mod tests {
    use alloc::{format, string::ToString};
    use core::cell::Cell;

    use rstest::rstest;

    use super::*;

    #[test]
    fn interpolates_positional_arguments() {
        assert_eq!(format(format_args!("{}-{}", 5, "x")).unwrap(), "5-x");
    }

    #[test]
    fn empty_template() {
        assert_eq!(format(format_args!("")).unwrap(), "");
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(255)]
    #[case(256)]
    #[case(257)]
    #[case(10_000)]
    fn never_truncates(#[case] len: usize) {
        let long = "x".repeat(len);
        let s = format(format_args!("{long}")).unwrap();
        assert_eq!(s.len(), len);
        assert_eq!(s, long);
    }

    #[test]
    fn retry_allocates_exactly() {
        let long = "y".repeat(1_000);
        let s = format(format_args!("<{long}>")).unwrap();
        assert_eq!(s.len(), 1_002);
        assert_eq!(s.capacity(), 1_002);
    }

    #[test]
    fn multibyte_characters_across_the_boundary() {
        let options = FormatOptions { initial_capacity: 3 };
        let s = format_with(options, format_args!("a{}", "ßß")).unwrap();
        assert_eq!(s, "aßß");
    }

    #[test]
    fn bounded_writer_cuts_at_char_boundary() {
        let mut writer = BoundedWriter::with_capacity(2);
        writer.write_str("a").unwrap();
        writer.write_str("ßß").unwrap();
        assert_eq!(writer.buf, "a");
        assert_eq!(writer.required, 5);
        assert!(!writer.fits());

        let options = FormatOptions { initial_capacity: 2 };
        assert_eq!(format_with(options, format_args!("a{}", "ßß")).unwrap(), "aßß");
    }

    #[test]
    fn zero_initial_capacity() {
        let options = FormatOptions { initial_capacity: 0 };
        assert_eq!(format_with(options, format_args!("{:04}", 7)).unwrap(), "0007");
        assert_eq!(format_with(options, format_args!("")).unwrap(), "");
    }

    struct Failing;

    impl fmt::Display for Failing {
        fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn display_error_surfaces() {
        let err = format(format_args!("ok {Failing}")).unwrap_err();
        assert_eq!(err, FormatError::Fmt(fmt::Error));
    }

    /// Formats longer on every call.
    struct Growing(Cell<usize>);

    impl fmt::Display for Growing {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let n = self.0.get();
            self.0.set(n + 1);
            f.write_str(&"z".repeat(300 + n))
        }
    }

    #[test]
    fn unstable_display_is_reported() {
        let growing = Growing(Cell::new(0));
        let err = format(format_args!("{growing}")).unwrap_err();
        assert_eq!(
            err,
            FormatError::LengthMismatch {
                expected: 300,
                actual: 301
            }
        );
        assert_eq!(
            err.to_string(),
            "formatted length changed between passes: expected 300 bytes, got 301"
        );
    }

    #[test]
    fn matches_core_formatting() {
        let expected = format!("{:?} {:>8.3} {:#x}", ["a", "b"], 1.5f64, 255);
        let actual = super::format(format_args!("{:?} {:>8.3} {:#x}", ["a", "b"], 1.5f64, 255)).unwrap();
        assert_eq!(actual, expected);
    }
}
