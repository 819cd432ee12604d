#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mysql_serialization::{
    Decoder, ErrorKind, Signedness, decode_fixed, decode_str, decode_string, decode_var,
    encode_fixed, encode_signed, encode_string, encode_unsigned, encoded_len,
};

/// One read against the buffer, mirroring how an event parser walks fields.
#[derive(Arbitrary, Debug)]
enum Read {
    Signed,
    Unsigned,
    Fixed(u8),
    String,
    Str,
}

#[derive(Arbitrary, Debug)]
struct Input {
    offset: u8,
    reads: Vec<Read>,
    data: Vec<u8>,
}

fn check_free_functions(data: &[u8], offset: usize) {
    for signedness in [Signedness::Signed, Signedness::Unsigned] {
        if let Ok((_, next)) = decode_var(data, offset, signedness) {
            assert!(next > offset && next <= data.len());
        }
    }

    if let Ok((text, next)) = decode_string(data, offset) {
        assert_eq!(&data[next - text.len()..next], text);
        if let Ok((utf8, utf8_next)) = decode_str(data, offset) {
            assert_eq!(utf8, text);
            assert_eq!(utf8_next, next);
        }
    }

    match decode_fixed(data, offset, data.len()) {
        Ok((bytes, next)) => assert!(bytes.len() == data.len() && next <= data.len()),
        Err(err) => {
            if let ErrorKind::UnknownEncoding { value } = err.kind() {
                assert!(*value > 0xff);
            }
        }
    }
}

fn check_reads(data: &[u8], offset: usize, reads: &[Read]) {
    let mut decoder = Decoder::at(data, offset);
    let mut out = Vec::new();

    for read in reads {
        let before = decoder.offset();
        let result = match read {
            Read::Signed => decoder.read_signed().map(|n| {
                encode_signed(n, &mut out);
            }),
            Read::Unsigned => decoder.read_unsigned().map(|u| {
                assert!(encoded_len(u) <= decoder.offset() - before);
                encode_unsigned(u, &mut out);
            }),
            Read::Fixed(len) => decoder.read_fixed(usize::from(*len)).map(|bytes| {
                encode_fixed(&bytes, &mut out);
            }),
            Read::String => decoder.read_string().map(|s| {
                encode_string(s, &mut out);
            }),
            Read::Str => decoder.read_str().map(|s| {
                encode_string(s.as_bytes(), &mut out);
            }),
        };
        if result.is_err() {
            assert_eq!(decoder.offset(), before);
            break;
        }
    }

    // Re-encoding never takes more room than the input it came from.
    assert!(out.len() <= decoder.offset() - offset);
}

fuzz_target!(|input: Input| {
    let offset = usize::from(input.offset);
    check_free_functions(&input.data, offset);
    check_reads(&input.data, offset, &input.reads);
});
