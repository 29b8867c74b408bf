//! Video link normalization for embedded players.

const YOUTUBE_EMBED: &str = "https://www.youtube.com/embed/";

/// Turn a YouTube watch or short link into an embeddable URL.
///
/// `…watch?v=ID&…` and `youtu.be/ID?…` become `https://www.youtube.com/embed/ID`.
/// Any other URL is returned unchanged; `None` stays `None`.
pub fn embed_url(video_url: Option<&str>) -> Option<String> {
    let url = video_url?;

    let video_id = if let Some((_, rest)) = url.split_once("watch?v=") {
        Some(cut_at(rest, &['&', '?']))
    } else if let Some((_, rest)) = url.split_once("youtu.be/") {
        Some(cut_at(rest, &['?']))
    } else {
        None
    };

    match video_id {
        Some(id) if !id.is_empty() => Some(format!("{}{}", YOUTUBE_EMBED, id)),
        _ => Some(url.to_string()),
    }
}

fn cut_at<'a>(s: &'a str, stops: &[char]) -> &'a str {
    s.split(stops).next().unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_links() {
        assert_eq!(
            embed_url(Some("https://www.youtube.com/watch?v=abc123&t=42s")).as_deref(),
            Some("https://www.youtube.com/embed/abc123")
        );
    }

    #[test]
    fn short_links() {
        assert_eq!(
            embed_url(Some("https://youtu.be/xyz789?si=share")).as_deref(),
            Some("https://www.youtube.com/embed/xyz789")
        );
    }

    #[test]
    fn other_urls_pass_through() {
        assert_eq!(
            embed_url(Some("https://vimeo.com/12345")).as_deref(),
            Some("https://vimeo.com/12345")
        );
        assert_eq!(
            embed_url(Some("https://youtu.be/")).as_deref(),
            Some("https://youtu.be/")
        );
        assert_eq!(embed_url(None), None);
    }
}
