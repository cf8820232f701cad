use alloc::{string::String, vec::Vec};

use quickcheck::{QuickCheck, TestResult};

use super::test_count;
use crate::{replace_all, replace_all_bytes};

/// Property: for a non-empty needle, in-place replacement agrees with
/// `str::replace`.
#[test]
fn agrees_with_str_replace() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(haystack: String, needle: String, replacement: String) -> TestResult {
        if needle.is_empty() {
            return TestResult::discard();
        }
        let expected = haystack.replace(&needle, &replacement);
        let mut actual = haystack;
        replace_all(&mut actual, &needle, &replacement);
        TestResult::from_bool(actual == expected)
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(String, String, String) -> TestResult);
}

/// Property: quickcheck's random strings rarely contain the needle, so build
/// haystacks from a tiny alphabet where matches are dense.
#[test]
fn dense_matches_agree_with_str_replace() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(picks: Vec<bool>, needle_len: u8, replacement: String) -> bool {
        let haystack: String = picks.iter().map(|&b| if b { 'a' } else { 'b' }).collect();
        let needle: String = "ab".chars().cycle().take(1 + usize::from(needle_len % 3)).collect();
        let expected = haystack.replace(&needle, &replacement);
        let mut actual = haystack;
        replace_all(&mut actual, &needle, &replacement);
        actual == expected
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<bool>, u8, String) -> bool);
}

/// Property: a replacement that contains the needle grows the haystack by a
/// fixed amount per original occurrence.
#[test]
fn self_containing_replacement_terminates() {
    fn prop(count: u8) -> bool {
        let count = usize::from(count);
        let mut s = "a".repeat(count);
        replace_all(&mut s, "a", "aa");
        s.len() == 2 * count
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(u8) -> bool);
}

/// Property: byte and string replacement agree on UTF-8 input.
#[test]
fn bytes_agree_with_strings() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(haystack: String, needle: String, replacement: String) -> bool {
        let mut text = haystack.clone();
        replace_all(&mut text, &needle, &replacement);
        let mut bytes: Vec<u8> = haystack.into_bytes();
        replace_all_bytes(&mut bytes, needle.as_bytes(), replacement.as_bytes());
        bytes == text.into_bytes()
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(String, String, String) -> bool);
}
