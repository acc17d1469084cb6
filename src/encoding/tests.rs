use super::*;

#[test]
fn test_bom_bytes() {
    assert_eq!(TextEncoding::Utf8.bom(), &[0xEF, 0xBB, 0xBF]);
    assert_eq!(TextEncoding::Utf16Le.bom(), &[0xFF, 0xFE]);
    assert_eq!(TextEncoding::Utf16Be.bom(), &[0xFE, 0xFF]);
}

#[test]
fn test_utf8_encode_is_identity() {
    let encoded = TextEncoding::Utf8.encode("Hello World!");
    assert_eq!(encoded, b"Hello World!");
}

#[test]
fn test_utf16le_encode_ascii() {
    let encoded = TextEncoding::Utf16Le.encode("A");
    assert_eq!(encoded, vec![0x41, 0x00]);
}

#[test]
fn test_utf16be_encode_ascii() {
    let encoded = TextEncoding::Utf16Be.encode("A");
    assert_eq!(encoded, vec![0x00, 0x41]);
}

#[test]
fn test_encode_decode_round_trip_all_encodings() {
    let text = "The end";
    for encoding in [
        TextEncoding::Utf8,
        TextEncoding::Utf16Le,
        TextEncoding::Utf16Be,
    ] {
        let bytes = encoding.encode(text);
        assert_eq!(encoding.decode(&bytes), text, "{:?}", encoding);
    }
}

#[test]
fn test_utf16_surrogate_pair_round_trip() {
    // U+1F600 sits outside the BMP and needs a surrogate pair in UTF-16
    let text = "ok \u{1F600}";
    let bytes = TextEncoding::Utf16Le.encode(text);
    assert_eq!(bytes.len(), 3 * 2 + 4);
    assert_eq!(TextEncoding::Utf16Le.decode(&bytes), text);
}

#[test]
fn test_utf8_decode_malformed_is_lossy() {
    let decoded = TextEncoding::Utf8.decode(&[b'o', b'k', 0xFF]);
    assert_eq!(decoded, "ok\u{FFFD}");
}

#[test]
fn test_utf16_decode_odd_length_is_lossy() {
    let mut bytes = TextEncoding::Utf16Le.encode("hi");
    bytes.push(0x41);
    let decoded = TextEncoding::Utf16Le.decode(&bytes);
    assert_eq!(decoded, "hi\u{FFFD}");
}

#[test]
fn test_mismatched_encodings_garble_silently() {
    // The producer/consumer agreement the crate documents: reading UTF-16
    // bytes as UTF-8 succeeds but yields garbage, not an error.
    let bytes = TextEncoding::Utf16Le.encode("Hello");
    let garbled = TextEncoding::Utf8.decode(&bytes);
    assert_ne!(garbled, "Hello");
    assert!(garbled.contains('\u{0}'));
}

#[test]
fn test_line_ending_as_str() {
    assert_eq!(LineEnding::Lf.as_str(), "\n");
    assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
}

#[test]
fn test_native_line_ending_matches_platform() {
    let native = LineEnding::native();
    if cfg!(windows) {
        assert_eq!(native, LineEnding::CrLf);
    } else {
        assert_eq!(native, LineEnding::Lf);
    }
}

#[test]
fn test_encoding_serde_names() {
    let json = serde_json::to_string(&TextEncoding::Utf16Le).unwrap();
    assert_eq!(json, "\"utf16le\"");
    let back: TextEncoding = serde_json::from_str("\"utf8\"").unwrap();
    assert_eq!(back, TextEncoding::Utf8);
}
