use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use once_cell::sync::Lazy;
use regex::bytes::Regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSvg {
    pub text: String,
    pub encoding_label: String,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("failed to decode bytes with {encoding}: {message}")]
    DecodeFailure { encoding: String, message: String },
}

static XML_DECL_ENCODING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)^\s*<\?xml[^>]*?encoding\s*=\s*["']([^"']+)["']"#).expect("encoding regex")
});

/// Decode raw file bytes into UTF-8 using: BOM -> XML declaration encoding
/// -> chardetng fallback.
pub fn decode_svg(bytes: &[u8]) -> Result<DecodedSvg, DecodeError> {
    // 1) BOM aware decode using encoding_rs helper
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    // 2) Encoding declared in the XML prolog, if any
    if let Some(label) = declared_encoding(bytes) {
        if let Some(enc) = Encoding::for_label(label.as_bytes()) {
            return decode_with(bytes, enc);
        }
    }

    // 3) chardetng detection over the whole file
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let enc = detector.guess(None, true);
    decode_with(bytes, enc)
}

fn declared_encoding(bytes: &[u8]) -> Option<String> {
    let capture = XML_DECL_ENCODING.captures(bytes)?;
    let label = capture.get(1)?;
    std::str::from_utf8(label.as_bytes())
        .ok()
        .map(|s| s.to_string())
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> Result<DecodedSvg, DecodeError> {
    let (text, _, had_errors) = enc.decode(bytes);
    if had_errors {
        return Err(DecodeError::DecodeFailure {
            encoding: enc.name().to_string(),
            message: "decoding error".into(),
        });
    }
    Ok(DecodedSvg {
        text: text.into_owned(),
        encoding_label: enc.name().to_string(),
    })
}
