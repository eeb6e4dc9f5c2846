//! Pattern tables for the channel, playlist and video pages
//!
//! Each resource owns a fixed, ordered table of `(field, pattern, default)`
//! rules. Patterns anchor on literal key names inside the page's script
//! payload (or on a meta tag) and carry exactly one capture group. The payload
//! is a script blob holding many JSON fragments, so nothing here parses JSON;
//! when the site renames a key only the table below has to change.

use crate::extractor::collect::collect;
use regex::Regex;
use std::fmt::Debug;
use std::sync::LazyLock;
use tracing::trace;

/// One extraction rule
#[derive(Debug)]
pub struct Rule<F> {
    pub field: F,
    pub pattern: &'static str,
    /// Value used when the pattern finds nothing. `None` means the field is
    /// optional (or a list) and stays absent.
    pub default: Option<&'static str>,
}

/// A compiled rule table for one resource kind
pub struct PatternTable<F: 'static> {
    resource: &'static str,
    entries: Vec<(&'static Rule<F>, Regex)>,
}

impl<F: Copy + PartialEq + Debug + 'static> PatternTable<F> {
    fn compile(resource: &'static str, rules: &'static [Rule<F>]) -> Self {
        let entries = rules
            .iter()
            .map(|rule| {
                let regex = Regex::new(rule.pattern).unwrap_or_else(|e| {
                    panic!("invalid {} pattern for {:?}: {}", resource, rule.field, e)
                });
                (rule, regex)
            })
            .collect();

        Self { resource, entries }
    }

    fn entry(&self, field: F) -> Option<&(&'static Rule<F>, Regex)> {
        self.entries.iter().find(|(rule, _)| rule.field == field)
    }

    /// Rules in table order
    pub fn rules(&self) -> impl Iterator<Item = &'static Rule<F>> + '_ {
        self.entries.iter().map(|(rule, _)| *rule)
    }

    /// Every distinct capture for `field`, in order of first appearance
    pub fn collect(&self, field: F, text: &str) -> Vec<String> {
        match self.entry(field) {
            Some((_, regex)) => collect(text, regex),
            None => Vec::new(),
        }
    }

    /// First capture for `field`, falling back to the rule's default
    pub fn first(&self, field: F, text: &str) -> Option<String> {
        let (rule, regex) = self.entry(field)?;

        match regex.captures(text).and_then(|caps| caps.get(1)) {
            Some(m) => Some(m.as_str().to_string()),
            None => {
                trace!(
                    "{} field {:?} not found, default {:?}",
                    self.resource,
                    field,
                    rule.default
                );
                rule.default.map(str::to_string)
            }
        }
    }

    /// First capture for `field`, or `""` when the field has no default
    pub fn first_or_empty(&self, field: F, text: &str) -> String {
        self.first(field, text).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelField {
    /// Canonical `/channel/...` URL; its last segment is the channel or uploads id
    ChannelUrl,
    Uploader,
    UploaderUrl,
    Thumbnail,
    Keywords,
    ExternalLinkTitles,
    ExternalLinkUrls,
}

impl ChannelField {
    pub const ALL: [ChannelField; 7] = [
        ChannelField::ChannelUrl,
        ChannelField::Uploader,
        ChannelField::UploaderUrl,
        ChannelField::Thumbnail,
        ChannelField::Keywords,
        ChannelField::ExternalLinkTitles,
        ChannelField::ExternalLinkUrls,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistField {
    Name,
    VideoCount,
    VideoIds,
    Thumbnail,
}

impl PlaylistField {
    pub const ALL: [PlaylistField; 4] = [
        PlaylistField::Name,
        PlaylistField::VideoCount,
        PlaylistField::VideoIds,
        PlaylistField::Thumbnail,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoField {
    DisplayId,
    FullTitle,
    Duration,
    Timestamp,
    ChannelId,
    Keywords,
    Thumbnail,
}

impl VideoField {
    pub const ALL: [VideoField; 7] = [
        VideoField::DisplayId,
        VideoField::FullTitle,
        VideoField::Duration,
        VideoField::Timestamp,
        VideoField::ChannelId,
        VideoField::Keywords,
        VideoField::Thumbnail,
    ];
}

const META_KEYWORDS: &str = r#"<meta name="keywords" content="(.*?)">"#;

static CHANNEL_RULES: &[Rule<ChannelField>] = &[
    Rule {
        field: ChannelField::ChannelUrl,
        pattern: r#"channelUrl":"(.*?)""#,
        default: Some(""),
    },
    Rule {
        field: ChannelField::Uploader,
        pattern: r#"channelMetadataRenderer":\{"title":"(.*?)""#,
        default: Some(""),
    },
    Rule {
        field: ChannelField::UploaderUrl,
        pattern: r#"canonicalChannelUrl":"(.*?)""#,
        default: Some(""),
    },
    Rule {
        field: ChannelField::Thumbnail,
        pattern: r#"avatar":\{"thumbnails":\[\{"url":"(.*?)""#,
        default: Some(""),
    },
    Rule {
        field: ChannelField::Keywords,
        pattern: META_KEYWORDS,
        default: Some(""),
    },
    Rule {
        field: ChannelField::ExternalLinkTitles,
        pattern: r#"channelExternalLinkViewModel":\{"title":\{"content":"(.*?)"\}"#,
        default: None,
    },
    Rule {
        field: ChannelField::ExternalLinkUrls,
        pattern: r#"link":\{"content":"(.*?)""#,
        default: None,
    },
];

static PLAYLIST_RULES: &[Rule<PlaylistField>] = &[
    Rule {
        field: PlaylistField::Name,
        pattern: r#"ownerText":\{"runs":\[\{"text":"(.*?)""#,
        default: Some(""),
    },
    Rule {
        field: PlaylistField::VideoCount,
        pattern: r#"stats":\[\{"runs":\[\{"text":"(.*?)""#,
        default: Some("0"),
    },
    Rule {
        field: PlaylistField::VideoIds,
        pattern: r#"videoId":"(.*?)""#,
        default: None,
    },
    // Stops at the query string so size/signature parameters are dropped
    Rule {
        field: PlaylistField::Thumbnail,
        pattern: r#"og:image" content="(.*?)\?"#,
        default: None,
    },
];

static VIDEO_RULES: &[Rule<VideoField>] = &[
    Rule {
        field: VideoField::DisplayId,
        pattern: r#"videoId":"(.*?)""#,
        default: Some(""),
    },
    // Escape-aware so a title containing \" is captured whole
    Rule {
        field: VideoField::FullTitle,
        pattern: r#"title":"((?:[^"\\]|\\.)*)""#,
        default: Some(""),
    },
    Rule {
        field: VideoField::Duration,
        pattern: r#"approxDurationMs":"(.*?)""#,
        default: Some("0"),
    },
    Rule {
        field: VideoField::Timestamp,
        pattern: r#"uploadDate":"(.*?)""#,
        default: Some(""),
    },
    Rule {
        field: VideoField::ChannelId,
        pattern: r#"channelIds":\["(.*?)""#,
        default: Some(""),
    },
    Rule {
        field: VideoField::Keywords,
        pattern: META_KEYWORDS,
        default: Some(""),
    },
    Rule {
        field: VideoField::Thumbnail,
        pattern: r#"playerMicroformatRenderer":\{"thumbnail":\{"thumbnails":\[\{"url":"(.*?)""#,
        default: Some(""),
    },
];

pub static CHANNEL_PATTERNS: LazyLock<PatternTable<ChannelField>> =
    LazyLock::new(|| PatternTable::compile("channel", CHANNEL_RULES));

pub static PLAYLIST_PATTERNS: LazyLock<PatternTable<PlaylistField>> =
    LazyLock::new(|| PatternTable::compile("playlist", PLAYLIST_RULES));

pub static VIDEO_PATTERNS: LazyLock<PatternTable<VideoField>> =
    LazyLock::new(|| PatternTable::compile("video", VIDEO_RULES));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_has_exactly_one_rule() {
        for field in ChannelField::ALL {
            assert_eq!(CHANNEL_PATTERNS.rules().filter(|r| r.field == field).count(), 1);
        }
        for field in PlaylistField::ALL {
            assert_eq!(PLAYLIST_PATTERNS.rules().filter(|r| r.field == field).count(), 1);
        }
        for field in VideoField::ALL {
            assert_eq!(VIDEO_PATTERNS.rules().filter(|r| r.field == field).count(), 1);
        }
    }

    #[test]
    fn test_every_pattern_has_one_capture_group() {
        let patterns = CHANNEL_RULES
            .iter()
            .map(|r| r.pattern)
            .chain(PLAYLIST_RULES.iter().map(|r| r.pattern))
            .chain(VIDEO_RULES.iter().map(|r| r.pattern));

        for pattern in patterns {
            let regex = Regex::new(pattern).unwrap();
            // captures_len counts the implicit whole-match group
            assert_eq!(regex.captures_len(), 2, "pattern {}", pattern);
        }
    }

    #[test]
    fn test_first_uses_default_when_absent() {
        assert_eq!(
            VIDEO_PATTERNS.first(VideoField::Duration, "nothing here"),
            Some("0".to_string())
        );
        assert_eq!(
            PLAYLIST_PATTERNS.first(PlaylistField::Thumbnail, "nothing here"),
            None
        );
        assert_eq!(
            CHANNEL_PATTERNS.first_or_empty(ChannelField::Uploader, "nothing here"),
            ""
        );
    }

    #[test]
    fn test_first_takes_first_match() {
        let text = r#"{"approxDurationMs":"200000"},{"approxDurationMs":"5000"}"#;
        assert_eq!(
            VIDEO_PATTERNS.first(VideoField::Duration, text),
            Some("200000".to_string())
        );
    }

    #[test]
    fn test_channel_url_pattern_ignores_canonical_url() {
        let text = r#""canonicalChannelUrl":"http://www.youtube.com/@mouse","channelUrl":"https://www.youtube.com/channel/UC1""#;
        assert_eq!(
            CHANNEL_PATTERNS.first_or_empty(ChannelField::ChannelUrl, text),
            "https://www.youtube.com/channel/UC1"
        );
        assert_eq!(
            CHANNEL_PATTERNS.first_or_empty(ChannelField::UploaderUrl, text),
            "http://www.youtube.com/@mouse"
        );
    }

    #[test]
    fn test_title_pattern_keeps_escaped_quotes() {
        let text = r#""title":"She said \"hi\"","lengthSeconds":"1""#;
        assert_eq!(
            VIDEO_PATTERNS.first_or_empty(VideoField::FullTitle, text),
            r#"She said \"hi\""#
        );
    }

    #[test]
    fn test_playlist_thumbnail_stops_at_query() {
        let text = r#"<meta property="og:image" content="https://i.ytimg.com/vi/abc/hqdefault.jpg?sqp=x&amp;rs=y">"#;
        assert_eq!(
            PLAYLIST_PATTERNS.first(PlaylistField::Thumbnail, text),
            Some("https://i.ytimg.com/vi/abc/hqdefault.jpg".to_string())
        );
    }
}
