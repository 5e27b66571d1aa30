/// Derives the canonical display name for an icon from its filename.
///
/// Policy: drop the `.svg` extension (case-insensitive), treat every
/// non-alphanumeric character other than `_` as a word separator, and join
/// the words in camelCase. Names that would start with a digit (or come out
/// empty) get an `icon` prefix so the result is always identifier-safe for
/// the generated module.
pub fn normalize_name(filename: &str) -> String {
    let stem = strip_svg_extension(filename);

    let mut name = String::with_capacity(stem.len());
    let mut first_word = true;
    for word in stem
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|word| !word.is_empty())
    {
        if first_word {
            name.extend(word.chars().flat_map(char::to_lowercase));
            first_word = false;
        } else {
            let mut chars = word.chars();
            if let Some(head) = chars.next() {
                name.extend(head.to_uppercase());
            }
            name.extend(chars.flat_map(char::to_lowercase));
        }
    }

    if name.is_empty() {
        return "icon".to_string();
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return format!("icon{name}");
    }
    name
}

fn strip_svg_extension(filename: &str) -> &str {
    let bytes = filename.as_bytes();
    if bytes.len() >= 4 && bytes[bytes.len() - 4..].eq_ignore_ascii_case(b".svg") {
        // ASCII suffix, so the cut is always on a char boundary.
        &filename[..filename.len() - 4]
    } else {
        filename
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_name;

    #[test]
    fn extension_and_separators_become_camel_case() {
        assert_eq!(normalize_name("arrow-left.svg"), "arrowLeft");
        assert_eq!(normalize_name("Arrow Left.SVG"), "arrowLeft");
        assert_eq!(normalize_name("chat.bubble.svg"), "chatBubble");
    }

    #[test]
    fn underscores_survive_inside_words() {
        assert_eq!(normalize_name("my_icon.svg"), "my_icon");
    }

    #[test]
    fn leading_digit_gets_an_icon_prefix() {
        assert_eq!(normalize_name("2fast.svg"), "icon2fast");
    }

    #[test]
    fn degenerate_names_fall_back_to_icon() {
        assert_eq!(normalize_name(".svg"), "icon");
        assert_eq!(normalize_name("!!!.svg"), "icon");
    }
}
