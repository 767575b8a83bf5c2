use chardetng::EncodingDetector;
use encoding_rs::Encoding;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding_label: String,
    /// True if any bytes could not be represented and were replaced.
    pub had_replacements: bool,
}

/// Decode raw file bytes into UTF-8 using: BOM -> chardetng fallback.
///
/// Decoding never fails; undecodable bytes become replacement characters
/// and are reported through `had_replacements`.
pub fn decode_text(bytes: &[u8]) -> DecodedText {
    let encoding = match Encoding::for_bom(bytes) {
        Some((encoding, _)) => encoding,
        None => {
            let mut detector = EncodingDetector::new();
            detector.feed(bytes, true);
            detector.guess(None, true)
        }
    };

    // `decode` strips the BOM itself and may settle on a related encoding.
    let (text, actual, had_replacements) = encoding.decode(bytes);
    DecodedText {
        text: text.into_owned(),
        encoding_label: actual.name().to_string(),
        had_replacements,
    }
}
