//! Channel "about" page extraction

use crate::extractor::models::{Channel, ExternalLink};
use crate::extractor::patterns::{ChannelField, CHANNEL_PATTERNS};
use crate::utils::error::{parse_url, Result, ScrapeError};
use crate::utils::text::last_path_segment;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::{debug, warn};

pub const CHANNEL_PREFIX: &str = "UC";
pub const UPLOADS_PREFIX: &str = "UU";

/// A double-quoted phrase, or a run of non-whitespace
static TAG_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"".+?"|\S+"#).expect("Failed to compile tag token regex"));

/// A channel id and its uploads playlist id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelIds {
    pub channel_id: String,
    pub playlist_id: String,
}

impl ChannelIds {
    /// Derive both ids from whichever one the page gave us. A `UC` id is the
    /// channel id; anything else is taken as the uploads playlist id. The two
    /// share everything after their two-character prefix.
    pub fn derive(id: &str) -> Result<Self> {
        let suffix = id
            .get(CHANNEL_PREFIX.len()..)
            .ok_or_else(|| ScrapeError::InvalidChannelId(id.to_string()))?;

        if id.starts_with(CHANNEL_PREFIX) {
            Ok(Self {
                channel_id: id.to_string(),
                playlist_id: format!("{}{}", UPLOADS_PREFIX, suffix),
            })
        } else {
            Ok(Self {
                channel_id: format!("{}{}", CHANNEL_PREFIX, suffix),
                playlist_id: id.to_string(),
            })
        }
    }
}

/// `https://www.youtube.com/channel/{channel_id}`
pub fn channel_url(channel_id: &str) -> Result<url::Url> {
    parse_url(&format!("https://www.youtube.com/channel/{}", channel_id))
}

impl Channel {
    /// Build a channel record from the raw text of its "about" page.
    ///
    /// The requested id (a `UC...` id or a handle) only labels log output;
    /// every field comes from the page itself.
    pub fn build(channel_id: &str, page: &str) -> Result<Self> {
        debug!("Building channel record for {}", channel_id);
        let patterns = &*CHANNEL_PATTERNS;

        let canonical = parse_url(&patterns.first_or_empty(ChannelField::ChannelUrl, page))?;
        let ids = ChannelIds::derive(last_path_segment(&canonical))?;

        let uploader = patterns.first_or_empty(ChannelField::Uploader, page);

        let uploader_url = parse_url(
            &patterns
                .first_or_empty(ChannelField::UploaderUrl, page)
                .replace("http://", "https://"),
        )?;
        let uploader_id = last_path_segment(&uploader_url).to_string();

        let thumbnail = parse_url(&patterns.first_or_empty(ChannelField::Thumbnail, page))?;

        let channel_url = channel_url(&ids.channel_id)?;

        let keywords = patterns.first_or_empty(ChannelField::Keywords, page);
        let tags = tokenize_keywords(&html_escape::decode_html_entities(&keywords));

        let external_links = pair_external_links(
            &patterns.collect(ChannelField::ExternalLinkTitles, page),
            &patterns.collect(ChannelField::ExternalLinkUrls, page),
        )?;

        Ok(Self {
            playlist_id: ids.playlist_id,
            uploader,
            uploader_id,
            uploader_url,
            thumbnail,
            channel_id: ids.channel_id,
            channel_url,
            tags,
            external_links,
        })
    }
}

/// Split a meta keywords string into tags. Quoted phrases stay one tag with
/// their quotes stripped: `a "b c" d` gives `["a", "b c", "d"]`. A repeated
/// tag is kept only where it first appears.
pub fn tokenize_keywords(keywords: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    TAG_TOKEN
        .find_iter(keywords)
        .map(|m| {
            let token = m.as_str();
            token
                .strip_prefix('"')
                .and_then(|t| t.strip_suffix('"'))
                .unwrap_or(token)
                .to_string()
        })
        .filter(|tag| seen.insert(tag.clone()))
        .collect()
}

/// Pair link titles with link targets by position. Targets are scheme-less
/// on the page and get `https://` prepended. Pairing stops at the shorter
/// list; a repeated title keeps its first target.
pub fn pair_external_links(titles: &[String], urls: &[String]) -> Result<Vec<ExternalLink>> {
    if titles.len() != urls.len() {
        warn!(
            "External link lists differ in length ({} titles, {} urls), pairing the first {}",
            titles.len(),
            urls.len(),
            titles.len().min(urls.len())
        );
    }

    let count = titles.len().min(urls.len());
    let mut links: Vec<ExternalLink> = Vec::with_capacity(count);

    for (title, url) in titles.iter().take(count).zip(urls) {
        if links.iter().any(|link| &link.title == title) {
            continue;
        }
        links.push(ExternalLink {
            title: title.clone(),
            url: parse_url(&format!("https://{}", url))?,
        });
    }

    Ok(links)
}
