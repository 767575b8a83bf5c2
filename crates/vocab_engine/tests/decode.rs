use pretty_assertions::assert_eq;
use vocab_engine::decode_text;

#[test]
fn utf8_bom_is_stripped() {
    let decoded = decode_text(b"\xEF\xBB\xBFhello");
    assert_eq!(decoded.text, "hello");
    assert_eq!(decoded.encoding_label, "UTF-8");
    assert!(!decoded.had_replacements);
}

#[test]
fn legacy_single_byte_text_decodes_without_error() {
    // "café" in iso-8859-1 / windows-1252.
    let decoded = decode_text(b"caf\xe9 au lait");
    assert_eq!(decoded.text, "café au lait");
    assert!(!decoded.had_replacements);
}

#[test]
fn invalid_bytes_are_replaced_not_fatal() {
    // BOM forces UTF-8, then a stray 0xFF cannot decode.
    let decoded = decode_text(b"\xEF\xBB\xBFabc\xFFdef");
    assert_eq!(decoded.encoding_label, "UTF-8");
    assert!(decoded.had_replacements);
    assert!(decoded.text.starts_with("abc"));
    assert!(decoded.text.ends_with("def"));
}

#[test]
fn empty_input_decodes_to_empty_text() {
    let decoded = decode_text(b"");
    assert!(decoded.text.is_empty());
    assert!(!decoded.had_replacements);
}
