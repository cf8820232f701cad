#![no_main]

use arbitrary::Arbitrary;
use dlog_common::{
    FormatOptions, PrintableOptions, down_cast, escape_for_display, format_with, is_printable,
    is_printable_until_nul, is_printable_until_nul_with, replace_all, replace_all_bytes,
    try_down_cast,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    haystack: &'a str,
    needle: &'a str,
    replacement: &'a str,
    bytes: &'a [u8],
    scan_limit: Option<u8>,
    capacity: u8,
    wide: i64,
}

fuzz_target!(|input: Input<'_>| {
    // Non-empty needles agree with the standard library, empty ones are a no-op.
    let mut text = input.haystack.to_owned();
    replace_all(&mut text, input.needle, input.replacement);
    if input.needle.is_empty() {
        assert_eq!(text, input.haystack);
    } else {
        assert_eq!(text, input.haystack.replace(input.needle, input.replacement));
    }

    let mut bytes = input.haystack.as_bytes().to_vec();
    replace_all_bytes(&mut bytes, input.needle.as_bytes(), input.replacement.as_bytes());
    assert_eq!(bytes, text.as_bytes());

    // A scan limit can only turn a `true` into `false`.
    let data = input.bytes;
    if is_printable(data) {
        assert!(is_printable_until_nul(data));
    }
    let limited = is_printable_until_nul_with(
        PrintableOptions {
            max_scan_len: input.scan_limit.map(usize::from),
        },
        data,
    );
    assert!(!limited || is_printable_until_nul(data));

    let mut shown = escape_for_display(data).into_bytes();
    shown.push(0);
    assert!(is_printable(&shown));

    let options = FormatOptions {
        initial_capacity: usize::from(input.capacity),
    };
    let formatted = format_with(options, format_args!("{}|{:?}", input.haystack, data))
        .expect("formatting into a String cannot fail");
    assert_eq!(formatted, format!("{}|{:?}", input.haystack, data));

    match try_down_cast::<i16, i64>(input.wide) {
        Ok(small) => assert_eq!(down_cast::<i16, i64>(input.wide), small),
        Err(err) => assert_eq!(err.value(), input.wide.to_string()),
    }
});
