use alloc::string::ToString;

use crate::{Signedness, decode_fixed, decode_str, decode_string, decode_unsigned, decode_var};

#[test]
fn snapshot_truncation_messages() {
    insta::assert_snapshot!(decode_unsigned(&[], 0).unwrap_err().to_string(), @"data truncated at offset 0");
    insta::assert_snapshot!(
        decode_var(&[0xd9], 0, Signedness::Signed).unwrap_err().to_string(),
        @"truncated data, need 2 bytes but 1 remain at offset 0"
    );
    insta::assert_snapshot!(decode_fixed(&[0xee, 0x81], 0, 16).unwrap_err().to_string(), @"data truncated at offset 0");
    insta::assert_snapshot!(decode_fixed(&[0xee, 0x81], 0, 2).unwrap_err().to_string(), @"data truncated at offset 1");
    insta::assert_snapshot!(decode_fixed(&[], 0, 16).unwrap_err().to_string(), @"data truncated at offset 0");
}

#[test]
fn snapshot_string_messages() {
    insta::assert_snapshot!(decode_string(&[], 0).unwrap_err().to_string(), @"string truncated, expected at least one byte at offset 0");
    insta::assert_snapshot!(decode_string(&[0x18], 0).unwrap_err().to_string(), @"string truncated, expected length at offset 0");
    insta::assert_snapshot!(
        decode_string(b"\x18abcdefg", 0).unwrap_err().to_string(),
        @"string truncated, need 12 bytes but 7 remain at offset 0"
    );
    insta::assert_snapshot!(
        decode_str(&[0x06, b'a', 0xff, b'c'], 0).unwrap_err().to_string(),
        @"invalid utf-8 in string: invalid utf-8 sequence of 1 bytes from index 1 at offset 2"
    );
}

#[test]
fn snapshot_unknown_encoding_message() {
    let input = [0xee, 0x81, 0x04];
    insta::assert_snapshot!(decode_fixed(&input, 0, 2).unwrap_err().to_string(), @"unknown decoding for 0x120 at offset 1");
}
