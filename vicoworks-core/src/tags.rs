//! Semicolon-delimited tag fields (`core`, `skill`, `category`).

/// Split a tag field on `;`, trimming each tag and dropping empty ones.
///
/// `None` and the empty string both yield no tags.
pub fn split_tags(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(';')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_owned)
            .collect()
    })
    .unwrap_or_default()
}
