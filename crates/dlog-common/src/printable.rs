//! Printability checks for NUL-terminated byte buffers.
//!
//! A byte is printable when it is visible ASCII or the space character
//! (`0x20..=0x7E`). Everything else, tab and newline included, would break a
//! single line of diagnostic output. None of these checks fail: malformed
//! input (no terminator, empty buffer) is simply not printable.

use alloc::string::String;
use core::ffi::CStr;

/// Returns whether `byte` is visible ASCII or a space.
#[inline]
#[must_use]
pub const fn is_printable_byte(byte: u8) -> bool {
    matches!(byte, 0x20..=0x7E)
}

/// Returns whether `data` is a printable, NUL-terminated string.
///
/// The last byte of `data` must be `0x00`, and every byte before it must be
/// printable. An empty slice is not printable; `b"\0"` (the empty string) is.
///
/// ```rust
/// use dlog_common::is_printable;
///
/// assert!(is_printable(b"hello\0"));
/// assert!(is_printable(b"\0"));
/// assert!(!is_printable(b"hel\nlo\0"));
/// assert!(!is_printable(b"hello"));
/// assert!(!is_printable(b""));
/// ```
#[must_use]
pub fn is_printable(data: &[u8]) -> bool {
    match data.split_last() {
        Some((0, text)) => text.iter().copied().all(is_printable_byte),
        _ => false,
    }
}

/// Limits for [`is_printable_until_nul_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrintableOptions {
    /// Maximum number of bytes to examine looking for the terminator,
    /// terminator included. If no `0x00` is found within this many bytes the
    /// buffer is reported as not printable.
    ///
    /// # Default
    ///
    /// `None`: the scan is bounded only by the slice length.
    pub max_scan_len: Option<usize>,
}

/// Returns whether every byte of `data` before its first `0x00` is printable.
///
/// Bytes after the terminator are not examined. A slice with no terminator at
/// all is not printable.
///
/// ```rust
/// use dlog_common::is_printable_until_nul;
///
/// assert!(is_printable_until_nul(b"ok\0\x01\x02"));
/// assert!(!is_printable_until_nul(b"tab\there\0"));
/// assert!(!is_printable_until_nul(b"unterminated"));
/// ```
#[must_use]
pub fn is_printable_until_nul(data: &[u8]) -> bool {
    is_printable_until_nul_with(PrintableOptions::default(), data)
}

/// Like [`is_printable_until_nul`], giving up after
/// [`PrintableOptions::max_scan_len`] bytes.
#[must_use]
pub fn is_printable_until_nul_with(options: PrintableOptions, data: &[u8]) -> bool {
    let window = match options.max_scan_len {
        Some(max) => &data[..data.len().min(max)],
        None => data,
    };
    for &byte in window {
        if byte == 0 {
            return true;
        }
        if !is_printable_byte(byte) {
            return false;
        }
    }
    false
}

/// Returns whether every byte of `s` before its terminator is printable.
#[must_use]
pub fn is_printable_cstr(s: &CStr) -> bool {
    s.to_bytes().iter().copied().all(is_printable_byte)
}

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Renders possibly-binary `data` as a single printable line.
///
/// A single trailing `0x00` is dropped. Printable text without a backslash
/// is returned as-is. Otherwise a backslash is doubled and every byte outside
/// the printable range is escaped: `\n`, `\r`, `\t` and `\0` as in Rust
/// string literals, other ASCII control bytes and bytes of invalid UTF-8 as
/// `\xNN`, and non-ASCII characters as `\u{...}`. Apart from the dropped
/// terminator, distinct inputs never render the same.
///
/// ```rust
/// use dlog_common::escape_for_display;
///
/// assert_eq!(escape_for_display(b"plain text\0"), "plain text");
/// assert_eq!(escape_for_display(b"two\nlines"), r"two\nlines");
/// assert_eq!(escape_for_display(br"two\nlines"), r"two\\nlines");
/// assert_eq!(escape_for_display(b"\xff\x00\x00"), r"\xFF\0");
/// ```
#[must_use]
pub fn escape_for_display(data: &[u8]) -> String {
    let text = data.strip_suffix(&[0u8]).unwrap_or(data);
    if text.iter().all(|&b| is_printable_byte(b) && b != b'\\') {
        return text.iter().copied().map(char::from).collect();
    }
    let mut out = String::with_capacity(text.len() + text.len() / 2);
    for chunk in text.utf8_chunks() {
        for ch in chunk.valid().chars() {
            push_escaped(&mut out, ch);
        }
        for &byte in chunk.invalid() {
            push_hex(&mut out, byte);
        }
    }
    out
}

fn push_escaped(out: &mut String, ch: char) {
    match ch {
        '\0' => out.push_str("\\0"),
        '\n' | '\r' | '\t' | '\\' => out.extend(ch.escape_default()),
        ' '..='~' => out.push(ch),
        // Remaining ASCII is control bytes and DEL.
        _ if ch.is_ascii() => push_hex(out, ch as u8),
        _ => out.extend(ch.escape_unicode()),
    }
}

fn push_hex(out: &mut String, byte: u8) {
    out.push_str("\\x");
    out.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
    out.push(char::from(HEX_DIGITS[usize::from(byte & 0x0F)]));
}
