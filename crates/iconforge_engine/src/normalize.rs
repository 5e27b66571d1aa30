use forge_logging::forge_warn;
use once_cell::sync::Lazy;
use regex::Regex;

/// ViewBox used when the source SVG declares no usable geometry.
pub const DEFAULT_VIEW_BOX: &str = "0 0 24 24";

/// Result of [`normalize`]: the minified inner markup plus the viewBox
/// pulled out of (or synthesized from) the raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedSvg {
    pub content: String,
    pub view_box: Option<String>,
}

static VIEW_BOX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"viewBox=["']([^"']*)["']"#).expect("viewBox regex"));
static WIDTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?:^|\s)width=["']([^"']*)["']"#).expect("width regex"));
static HEIGHT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?:^|\s)height=["']([^"']*)["']"#).expect("height regex"));

static XML_DECL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<\?xml.*?\?>").expect("decl regex"));
static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment regex"));
static SVG_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<svg.*?>").expect("svg open regex"));
static SVG_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"</svg>").expect("svg close regex"));

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("ws regex"));
static BETWEEN_TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r">\s+<").expect("tag gap regex"));
static BEFORE_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+>").expect("close regex"));
static AFTER_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<\s+").expect("open regex"));
static BEFORE_SELF_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+/>").expect("self-close regex"));
static AROUND_EQUALS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*=\s*").expect("equals regex"));
static AROUND_COLON: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*:\s*").expect("colon regex"));
static AROUND_SEMICOLON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*;\s*").expect("semicolon regex"));
static AROUND_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*,\s*").expect("comma regex"));

/// Pulls the declared viewBox out of the raw text, or synthesizes
/// `"0 0 {width} {height}"` from the width/height attributes.
pub fn extract_view_box(raw: &str) -> Option<String> {
    if let Some(capture) = VIEW_BOX.captures(raw) {
        return Some(capture[1].to_string());
    }
    let width = WIDTH.captures(raw)?;
    let height = HEIGHT.captures(raw)?;
    Some(format!("0 0 {} {}", &width[1], &height[1]))
}

/// Reduces arbitrary SVG markup to a single-line, minified fragment without
/// the outer `<svg>` wrapper.
///
/// This is a textual transform, not a structural parse: malformed input or
/// attribute values containing the stripped substrings can come out wrong.
/// When stripping would reduce a non-empty input to nothing, the original
/// text is returned unmodified and a warning is logged, so the degradation
/// stays observable; normalization is never fatal.
pub fn normalize(raw: &str) -> NormalizedSvg {
    let view_box = extract_view_box(raw);
    match minify(raw) {
        Ok(content) => NormalizedSvg { content, view_box },
        Err(err) => {
            forge_warn!("svg normalization fell back to the raw input: {err}");
            NormalizedSvg {
                content: raw.to_string(),
                view_box,
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum NormalizeError {
    #[error("stripping reduced a non-empty input to nothing")]
    EmptiedInput,
}

fn minify(raw: &str) -> Result<String, NormalizeError> {
    let mut text = XML_DECL.replace_all(raw, "").into_owned();
    text = COMMENT.replace_all(&text, "").into_owned();
    text = SVG_OPEN.replace_all(&text, "").into_owned();
    text = SVG_CLOSE.replace_all(&text, "").into_owned();

    text = WHITESPACE_RUN.replace_all(&text, " ").into_owned();
    text = BETWEEN_TAGS.replace_all(&text, "><").into_owned();
    text = BEFORE_CLOSE.replace_all(&text, ">").into_owned();
    text = AFTER_OPEN.replace_all(&text, "<").into_owned();
    text = BEFORE_SELF_CLOSE.replace_all(&text, "/>").into_owned();
    text = AROUND_EQUALS.replace_all(&text, "=").into_owned();
    text = AROUND_COLON.replace_all(&text, ":").into_owned();
    text = AROUND_SEMICOLON.replace_all(&text, ";").into_owned();
    text = AROUND_COMMA.replace_all(&text, ",").into_owned();

    let trimmed = text.trim();
    if trimmed.is_empty() && !raw.trim().is_empty() {
        return Err(NormalizeError::EmptiedInput);
    }
    Ok(trimmed.to_string())
}

/// Wraps normalized inner markup back into a one-line `<svg>` element.
pub fn svg_markup(content: &str, view_box: Option<&str>) -> String {
    format!(
        r#"<svg viewBox="{}">{}</svg>"#,
        view_box.unwrap_or(DEFAULT_VIEW_BOX),
        content
    )
}

#[cfg(test)]
mod tests {
    use super::{extract_view_box, normalize, svg_markup};

    #[test]
    fn wrapper_and_prolog_are_stripped() {
        let raw = "<?xml version=\"1.0\"?>\n<!-- a comment -->\n<svg viewBox=\"0 0 24 24\">\n  <path d=\"M1 2\"/>\n</svg>\n";
        let normalized = normalize(raw);
        assert_eq!(normalized.content, r#"<path d="M1 2"/>"#);
        assert_eq!(normalized.view_box.as_deref(), Some("0 0 24 24"));
    }

    #[test]
    fn stroke_width_does_not_masquerade_as_width() {
        let raw = r#"<svg stroke-width="2" width="16" height="16"><path d="M0 0"/></svg>"#;
        assert_eq!(extract_view_box(raw).as_deref(), Some("0 0 16 16"));
    }

    #[test]
    fn wrapping_defaults_the_view_box() {
        assert_eq!(
            svg_markup("<path/>", None),
            r#"<svg viewBox="0 0 24 24"><path/></svg>"#
        );
        assert_eq!(
            svg_markup("<path/>", Some("0 0 16 16")),
            r#"<svg viewBox="0 0 16 16"><path/></svg>"#
        );
    }

    #[test]
    fn pathological_input_falls_back_to_the_original_text() {
        // Nothing but a wrapper: stripping leaves an empty fragment.
        let raw = "<svg></svg>";
        let normalized = normalize(raw);
        assert_eq!(normalized.content, raw);
        assert_eq!(normalized.view_box, None);
    }
}
