//! In-place substring replacement.
//!
//! The scan resumes just past each inserted replacement, so text produced by
//! a replacement is never matched again. Replacing `"a"` with `"aa"` doubles
//! every original `a` once and stops.

use alloc::{string::String, vec::Vec};

use bstr::ByteSlice;

/// Replaces every non-overlapping occurrence of `needle` in `haystack` with
/// `replacement`, scanning left to right.
///
/// An empty `needle` matches nothing and leaves `haystack` unchanged.
///
/// ```rust
/// use dlog_common::replace_all;
///
/// let mut s = String::from("aaa");
/// replace_all(&mut s, "a", "aa");
/// assert_eq!(s, "aaaaaa");
///
/// let mut s = String::from("banana");
/// replace_all(&mut s, "", "X");
/// assert_eq!(s, "banana");
/// ```
pub fn replace_all(haystack: &mut String, needle: &str, replacement: &str) {
    if needle.is_empty() {
        return;
    }
    let mut pos = 0;
    while let Some(offset) = haystack.as_bytes()[pos..].find(needle) {
        let start = pos + offset;
        haystack.replace_range(start..start + needle.len(), replacement);
        pos = start + replacement.len();
    }
}

/// Byte-string counterpart of [`replace_all`], for data that need not be
/// UTF-8.
pub fn replace_all_bytes(haystack: &mut Vec<u8>, needle: &[u8], replacement: &[u8]) {
    if needle.is_empty() {
        return;
    }
    let mut pos = 0;
    while let Some(offset) = haystack[pos..].find(needle) {
        let start = pos + offset;
        haystack.splice(start..start + needle.len(), replacement.iter().copied());
        pos = start + replacement.len();
    }
}
