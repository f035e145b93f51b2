use hexflate::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_known_vector() {
    // Raw deflate of the byte 0x41 ("A"), produced externally at
    // window-bits -15.
    assert_eq!(decompress_hex("730400").unwrap(), "41");
}

#[test]
fn test_spaced_lowercase_input() {
    assert_eq!(decompress_hex("73 04 00").unwrap(), "41");
    assert_eq!(decompress_hex("  73 04 00  ").unwrap(), "41");
}

#[test]
fn test_multi_byte_payload() {
    // Raw deflate of b"hello"; output is uppercase and space-joined.
    assert_eq!(
        decompress_hex("CB 48 CD C9 C9 07 00").unwrap(),
        "68 65 6C 6C 6F"
    );
}

#[test]
fn test_blank_input_is_invalid() {
    let err = decompress_hex("   ").unwrap_err();
    assert_eq!(err.to_string(), "empty input cannot be decompressed");
}

#[test]
fn test_odd_length_input() {
    assert!(matches!(
        decompress_hex("ABC"),
        Err(Error::InvalidHexLength { length: 3 })
    ));
}

#[test]
fn test_non_hex_input() {
    assert!(matches!(
        decompress_hex("GG"),
        Err(Error::InvalidHexDigit { .. })
    ));
}

#[test]
fn test_garbage_is_a_decompression_error() {
    assert!(matches!(
        decompress_hex("FFFF"),
        Err(Error::InflateFailed { .. })
    ));
}

#[test]
fn test_empty_stream_is_empty_result() {
    // A valid raw-deflate stream whose only content is the end marker.
    assert!(matches!(decompress_hex("0300"), Err(Error::EmptyResult)));
}

#[test]
fn test_sessions_are_independent() {
    // A corrupt request must not poison the next one.
    assert!(decompress_hex("FFFF").is_err());
    assert_eq!(decompress_hex("730400").unwrap(), "41");

    let session = InflateSession::new().unwrap();
    let out = session.inflate_once(&hex::decode("730400").unwrap()).unwrap();
    assert!(out.len() <= OUTPUT_CAPACITY);
}
