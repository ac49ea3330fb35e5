//! Meme image URLs for memegen.link.
//!
//! The rendering happens on their side when the URL is fetched, so there
//! is no request to make here, just the URL to build.

const BASE_URL: &str = "https://api.memegen.link/images";

/// Builds the image URL for a captioned meme template.
#[must_use]
pub fn image_url(template: &str, top: &str, bottom: &str) -> String {
    format!(
        "{BASE_URL}/{}/{}/{}.png",
        urlencoding::encode(template),
        escape_text(top),
        escape_text(bottom),
    )
}

/// Escapes caption text into a memegen path segment.
///
/// Characters that are meaningful in URLs or in the template syntax get
/// the tilde escapes the service defines; an empty caption becomes the
/// placeholder `_`.
fn escape_text(text: &str) -> String {
    if text.is_empty() {
        return "_".to_owned();
    }

    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            ' ' => escaped.push('_'),
            '_' => escaped.push_str("__"),
            '-' => escaped.push_str("--"),
            '?' => escaped.push_str("~q"),
            '%' => escaped.push_str("~p"),
            '#' => escaped.push_str("~h"),
            '/' => escaped.push_str("~s"),
            '"' => escaped.push_str("''"),
            c => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_reserved_characters() {
        assert_eq!(escape_text("hello world"), "hello_world");
        assert_eq!(escape_text("what?"), "what~q");
        assert_eq!(escape_text("50% off"), "50~p_off");
        assert_eq!(escape_text("a/b #1"), "a~sb_~h1");
        assert_eq!(escape_text("so \"cool\""), "so_''cool''");
        assert_eq!(escape_text("under_score-dash"), "under__score--dash");
    }

    #[test]
    fn empty_caption_becomes_placeholder() {
        assert_eq!(escape_text(""), "_");
    }

    #[test]
    fn builds_full_url() {
        assert_eq!(
            image_url("drake", "old thing", "new thing"),
            "https://api.memegen.link/images/drake/old_thing/new_thing.png",
        );
    }
}
