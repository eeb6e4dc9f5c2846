//! Records produced by the channel, playlist and video builders

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use url::Url;

/// Channel "about" page metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Channel {
    /// Uploads playlist (`UU...`)
    pub playlist_id: String,
    pub uploader: String,
    /// Handle or legacy name, e.g. `@IronMouseParty`
    pub uploader_id: String,
    pub uploader_url: Url,
    pub thumbnail: Url,
    /// Opaque channel id (`UC...`)
    pub channel_id: String,
    pub channel_url: Url,
    pub tags: Vec<String>,
    /// Title/URL pairs in the order the page lists them; titles are unique.
    /// Serialized as a `{title: url}` object in the same order.
    #[serde(serialize_with = "serialize_links")]
    pub external_links: Vec<ExternalLink>,
}

/// A link from the channel's "links" section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalLink {
    pub title: String,
    pub url: Url,
}

fn serialize_links<S>(links: &[ExternalLink], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(links.iter().map(|link| (&link.title, &link.url)))
}

impl Channel {
    /// Look up an external link by its title
    pub fn external_link(&self, title: &str) -> Option<&Url> {
        self.external_links
            .iter()
            .find(|link| link.title == title)
            .map(|link| &link.url)
    }
}

/// Playlist page metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Playlist {
    pub id: String,
    pub url: Url,
    /// Owner display name
    pub name: String,
    /// Total entries, including streams and upcoming videos
    pub video_count: u32,
    pub thumbnail: Option<Url>,
    /// Ids rendered on the first page load, in page order
    pub video_ids: Vec<String>,
}

/// Watch page metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Video {
    pub display_id: String,
    pub full_title: String,
    /// Whole seconds
    pub duration: u64,
    pub timestamp: DateTime<Utc>,
    pub channel_id: String,
    pub channel_url: Url,
    pub tags: Vec<String>,
    pub thumbnail: Url,
    pub original_url: Url,
    /// `3:20`
    pub duration_string: String,
    /// `PT3M20S`
    pub machine_readable_duration_string: String,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Channel:")?;
        writeln!(f, "\tPlaylistId: {}", self.playlist_id)?;
        writeln!(f, "\tUploader: {}", self.uploader)?;
        writeln!(f, "\tUploaderId: {}", self.uploader_id)?;
        writeln!(f, "\tUploaderUrl: {}", self.uploader_url)?;
        writeln!(f, "\tThumbnail: {}", self.thumbnail)?;
        writeln!(f, "\tChannelId: {}", self.channel_id)?;
        writeln!(f, "\tChannelUrl: {}", self.channel_url)?;
        writeln!(f, "\tTags:")?;
        for tag in &self.tags {
            writeln!(f, "\t\t{}", tag)?;
        }
        writeln!(f, "\tExternalLinks:")?;
        for link in &self.external_links {
            writeln!(f, "\t\t{}: {}", link.title, link.url)?;
        }
        Ok(())
    }
}

impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Playlist:")?;
        writeln!(f, "\tName: {}", self.name)?;
        writeln!(f, "\tUrl: {}", self.url)?;
        match &self.thumbnail {
            Some(thumbnail) => writeln!(f, "\tThumbnail: {}", thumbnail)?,
            None => writeln!(f, "\tThumbnail:")?,
        }
        writeln!(f, "\tVideoCount: {}", self.video_count)?;
        writeln!(f, "\tId: {}", self.id)?;
        writeln!(f, "\tFirst 5 videoIds:")?;
        for id in self.video_ids.iter().take(5) {
            writeln!(f, "\t\t{}", id)?;
        }
        Ok(())
    }
}

impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Video:")?;
        writeln!(f, "\tDisplayId: {}", self.display_id)?;
        writeln!(f, "\tFullTitle: {}", self.full_title)?;
        writeln!(f, "\tDuration: {}", self.duration)?;
        writeln!(f, "\tDurationString: {}", self.duration_string)?;
        writeln!(
            f,
            "\tMachineReadableDurationString: {}",
            self.machine_readable_duration_string
        )?;
        writeln!(
            f,
            "\tTimestamp: {} ({})",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.timestamp.timestamp()
        )?;
        writeln!(f, "\tChannelId: {}", self.channel_id)?;
        writeln!(f, "\tChannelUrl: {}", self.channel_url)?;
        writeln!(f, "\tFirst 3 tags:")?;
        for tag in self.tags.iter().take(3) {
            writeln!(f, "\t\t{}", tag)?;
        }
        writeln!(f, "\tThumbnail: {}", self.thumbnail)?;
        writeln!(f, "\tOriginalUrl: {}", self.original_url)?;
        Ok(())
    }
}
