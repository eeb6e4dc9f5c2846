//! Watch page extraction

use crate::extractor::channel::channel_url;
use crate::extractor::duration::{
    milliseconds_to_seconds, seconds_to_human_string, seconds_to_machine_string,
};
use crate::extractor::models::Video;
use crate::extractor::patterns::{VideoField, VIDEO_PATTERNS};
use crate::utils::error::{parse_url, Result, ScrapeError};
use crate::utils::text::unescape_js;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::{debug, warn};
use url::Url;

const TAG_SEPARATOR: &str = ", ";

/// `https://www.youtube.com/watch?v={video_id}`
pub fn watch_url(video_id: &str) -> Result<Url> {
    Url::parse_with_params("https://www.youtube.com/watch", &[("v", video_id)]).map_err(
        |source| ScrapeError::InvalidUrl {
            url: video_id.to_string(),
            source,
        },
    )
}

/// Parse an upload date. The page gives RFC 3339 with an offset
/// (`2024-06-15T16:00:15-07:00`); older pages give a bare date or a naive
/// date-time, both read as UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    let rfc3339_err = match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => return Ok(dt.with_timezone(&Utc)),
        Err(e) => e,
    };

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(naive.and_utc());
    }

    if let Some(midnight) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight.and_utc());
    }

    Err(ScrapeError::InvalidDate {
        value: raw.to_string(),
        source: rfc3339_err,
    })
}

/// Split the comma-separated keywords string. An absent string yields a
/// single empty tag, which callers rely on.
pub fn split_tags(keywords: &str) -> Vec<String> {
    keywords.split(TAG_SEPARATOR).map(str::to_string).collect()
}

impl Video {
    /// Build a video record from the raw text of its watch page.
    pub fn build(video_id: &str, page: &str) -> Result<Self> {
        debug!("Building video record for {}", video_id);
        let patterns = &*VIDEO_PATTERNS;

        let display_id = patterns.first_or_empty(VideoField::DisplayId, page);
        if display_id != video_id {
            debug!("Watch page for {} reports id {:?}", video_id, display_id);
        }

        let full_title = unescape_js(&patterns.first_or_empty(VideoField::FullTitle, page))?;

        let millis = patterns
            .first(VideoField::Duration, page)
            .unwrap_or_else(|| "0".to_string());
        let duration = milliseconds_to_seconds(&millis)?;

        let timestamp = parse_timestamp(&patterns.first_or_empty(VideoField::Timestamp, page))?;

        let channel_id = patterns.first_or_empty(VideoField::ChannelId, page);
        let channel_url = channel_url(&channel_id)?;

        let keywords = patterns.first_or_empty(VideoField::Keywords, page);
        if keywords.is_empty() {
            warn!("No keywords on watch page for {}", video_id);
        }
        let tags = split_tags(&keywords);

        let thumbnail = parse_url(&patterns.first_or_empty(VideoField::Thumbnail, page))?;
        let original_url = watch_url(&display_id)?;

        Ok(Self {
            duration_string: seconds_to_human_string(duration),
            machine_readable_duration_string: seconds_to_machine_string(duration),
            display_id,
            full_title,
            duration,
            timestamp,
            channel_id,
            channel_url,
            tags,
            thumbnail,
            original_url,
        })
    }
}
