//! Extraction of `#tag` tokens from note text.

/// Split `#`-prefixed tokens out of free text.
///
/// Returns the tags in discovery order (marker kept, trailing commas
/// stripped) and the remaining tokens rejoined with single spaces. Original
/// inter-token spacing is not preserved.
pub fn extract_tags(text: &str) -> (Vec<String>, String) {
    let mut tags = Vec::new();
    let mut remaining = Vec::new();

    for token in text.split_whitespace() {
        if token.starts_with('#') {
            tags.push(token.trim_end_matches(',').to_string());
        } else {
            remaining.push(token);
        }
    }

    (tags, remaining.join(" "))
}
