//! Text helpers for values captured out of page script

use crate::utils::error::{Result, ScrapeError};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// An escaped backslash, a surrogate pair, or a lone surrogate escape
static SURROGATE_ESCAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\\\|\\u[dD][89abAB][0-9a-fA-F]{2}(?:\\u[dD][c-fC-F][0-9a-fA-F]{2})?|\\u[dD][c-fC-F][0-9a-fA-F]{2}")
        .expect("Failed to compile surrogate escape regex")
});

/// Resolve backslash escapes (`\"`, `\\`, `\/`, `\n`, `\uXXXX` ...) in a value
/// captured from inside a JSON string literal.
///
/// A lone UTF-16 surrogate escape (an emoji cut in half) decodes to U+FFFD.
pub fn unescape_js(raw: &str) -> Result<String> {
    if !raw.contains('\\') {
        return Ok(raw.to_string());
    }

    let repaired = SURROGATE_ESCAPE.replace_all(raw, |caps: &Captures| {
        let escape = &caps[0];
        // 2 chars is `\\`, 12 is a full pair
        if escape.len() == 2 || escape.len() == 12 {
            escape.to_string()
        } else {
            r"\uFFFD".to_string()
        }
    });

    serde_json::from_str::<String>(&format!("\"{}\"", repaired)).map_err(|source| {
        ScrapeError::InvalidEscape {
            value: raw.to_string(),
            source,
        }
    })
}

/// Last non-empty path segment of a URL, or `""` when the path is bare.
pub fn last_path_segment(url: &url::Url) -> &str {
    url.path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape_plain_text_untouched() {
        assert_eq!(unescape_js("Devil - Ironmouse").unwrap(), "Devil - Ironmouse");
    }

    #[test]
    fn test_unescape_resolves_sequences() {
        assert_eq!(
            unescape_js(r#"Rock & Roll \"live\" AC\/DC"#).unwrap(),
            r#"Rock & Roll "live" AC/DC"#
        );
        assert_eq!(unescape_js(r"Ironmouse \u0026 Bubi").unwrap(), "Ironmouse & Bubi");
    }

    #[test]
    fn test_unescape_rejects_dangling_backslash() {
        assert!(matches!(
            unescape_js(r"broken \"),
            Err(ScrapeError::InvalidEscape { .. })
        ));
    }

    #[test]
    fn test_unescape_keeps_surrogate_pairs() {
        assert_eq!(unescape_js(r"mouse \uD83D\uDC2D").unwrap(), "mouse \u{1F42D}");
    }

    #[test]
    fn test_unescape_replaces_lone_surrogates() {
        assert_eq!(unescape_js(r"cut \uD83D").unwrap(), "cut \u{FFFD}");
        assert_eq!(unescape_js(r"\uDC2D tail").unwrap(), "\u{FFFD} tail");
        // An escaped backslash before `u` is not an escape
        assert_eq!(unescape_js(r"C:\\uD83D").unwrap(), r"C:\uD83D");
    }

    #[test]
    fn test_last_path_segment() {
        let url = url::Url::parse("https://www.youtube.com/channel/UC123/").unwrap();
        assert_eq!(last_path_segment(&url), "UC123");

        let bare = url::Url::parse("https://www.youtube.com").unwrap();
        assert_eq!(last_path_segment(&bare), "");
    }
}
