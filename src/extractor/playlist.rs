//! Playlist page extraction

use crate::extractor::models::Playlist;
use crate::extractor::patterns::{PlaylistField, PLAYLIST_PATTERNS};
use crate::utils::error::{parse_url, Result, ScrapeError};
use tracing::debug;
use url::Url;

/// `https://www.youtube.com/playlist?list={playlist_id}`
pub fn playlist_url(playlist_id: &str) -> Result<Url> {
    Url::parse_with_params("https://www.youtube.com/playlist", &[("list", playlist_id)]).map_err(
        |source| ScrapeError::InvalidUrl {
            url: playlist_id.to_string(),
            source,
        },
    )
}

impl Playlist {
    /// Build a playlist record from the raw text of its page.
    pub fn build(playlist_id: &str, page: &str) -> Result<Self> {
        debug!("Building playlist record for {}", playlist_id);
        let patterns = &*PLAYLIST_PATTERNS;

        let name = patterns.first_or_empty(PlaylistField::Name, page);

        let count = patterns
            .first(PlaylistField::VideoCount, page)
            .unwrap_or_else(|| "0".to_string());
        let video_count = count
            .trim()
            .parse::<u32>()
            .map_err(|source| ScrapeError::InvalidNumber {
                field: "video count",
                value: count.clone(),
                source,
            })?;

        let thumbnail = match patterns.first(PlaylistField::Thumbnail, page) {
            Some(raw) if !raw.is_empty() => Some(parse_url(&raw)?),
            _ => None,
        };

        let video_ids = patterns.collect(PlaylistField::VideoIds, page);
        debug!(
            "Playlist {} lists {} of {} videos",
            playlist_id,
            video_ids.len(),
            video_count
        );

        Ok(Self {
            id: playlist_id.to_string(),
            url: playlist_url(playlist_id)?,
            name,
            video_count,
            thumbnail,
            video_ids,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = concat!(
        r#"<meta property="og:image" content="https://i.ytimg.com/vi/YqUL7qCyQug/hqdefault.jpg?sqp=-oay&amp;rs=AOn4">"#,
        r#"{"ownerText":{"runs":[{"text":"ironmouse","navigationEndpoint":{}}]},"#,
        r#""stats":[{"runs":[{"text":"625"},{"text":" videos"}]}],"#,
        r#""videoId":"YqUL7qCyQug","videoId":"4823qX6REz4","videoId":"YqUL7qCyQug"}"#,
    );

    #[test]
    fn test_build_playlist() {
        let playlist = Playlist::build("UUhgPVLjqugDQpRLWvC7zzig", PAGE).unwrap();

        assert_eq!(playlist.id, "UUhgPVLjqugDQpRLWvC7zzig");
        assert_eq!(
            playlist.url.as_str(),
            "https://www.youtube.com/playlist?list=UUhgPVLjqugDQpRLWvC7zzig"
        );
        assert_eq!(playlist.name, "ironmouse");
        assert_eq!(playlist.video_count, 625);
        assert_eq!(
            playlist.thumbnail.as_ref().map(Url::as_str),
            Some("https://i.ytimg.com/vi/YqUL7qCyQug/hqdefault.jpg")
        );
        assert_eq!(playlist.video_ids, vec!["YqUL7qCyQug", "4823qX6REz4"]);
    }

    #[test]
    fn test_empty_page_uses_defaults() {
        let playlist = Playlist::build("PLempty", "<html></html>").unwrap();

        assert_eq!(playlist.name, "");
        assert_eq!(playlist.video_count, 0);
        assert!(playlist.thumbnail.is_none());
        assert!(playlist.video_ids.is_empty());
    }

    #[test]
    fn test_non_numeric_count_is_an_error() {
        let page = r#""stats":[{"runs":[{"text":"No videos"}]}]"#;
        assert!(matches!(
            Playlist::build("PLx", page),
            Err(ScrapeError::InvalidNumber { field: "video count", .. })
        ));
    }
}
