use sha2::{Digest, Sha256};

/// Windows-safe, deterministic pack filename.
///
/// A full export is always `icon-pack.ts`; a collection export becomes
/// `icon-pack-{sanitized}--{short_hash(id)}.ts` so two collections sharing a
/// display name cannot clobber each other's output.
pub fn pack_filename(collection: Option<(&str, u64)>) -> String {
    match collection {
        None => "icon-pack.ts".to_string(),
        Some((name, id)) => {
            let sanitized = sanitize_collection_name(name);
            let hash = short_hash(&id.to_string());
            format!("icon-pack-{sanitized}--{hash}.ts")
        }
    }
}

fn sanitize_collection_name(input: &str) -> String {
    let mut cleaned: String = input
        .chars()
        .flat_map(|c| {
            let mapped = if is_forbidden(c) {
                '_'
            } else if c.is_whitespace() {
                '-'
            } else {
                c
            };
            mapped.to_lowercase()
        })
        .collect();
    cleaned = cleaned.trim_matches(&['_', '-', '.'][..]).to_string();
    if cleaned.is_empty() {
        cleaned = "collection".to_string();
    }
    // Collapse runs of the replacement characters
    let mut compacted = String::with_capacity(cleaned.len());
    let mut prev_filler = false;
    for c in cleaned.chars() {
        let filler = c == '_' || c == '-';
        if !filler || !prev_filler {
            compacted.push(c);
        }
        prev_filler = filler;
    }
    let mut final_name = compacted;
    if final_name.len() > 60 {
        final_name.truncate(60);
    }
    if is_reserved_windows_name(&final_name) {
        final_name.push('_');
    }
    final_name
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}

fn is_reserved_windows_name(name: &str) -> bool {
    const RESERVED: &[&str] = &[
        "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
        "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
    ];
    RESERVED.iter().any(|r| r.eq_ignore_ascii_case(name))
}

fn short_hash(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let digest = hasher.finalize();
    let mut hex = String::with_capacity(8);
    for byte in digest.iter().take(4) {
        use std::fmt::Write;
        let _ = write!(&mut hex, "{byte:02x}");
    }
    hex
}
