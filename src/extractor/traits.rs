use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of raw page text for the record builders
///
/// This trait isolates extraction from transport: builders only ever see the
/// text, never how it was obtained. Implementations must surface a failed
/// response status as an error instead of handing back an error page.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Returns a unique identifier for this fetcher (e.g., "youtube-http")
    fn id(&self) -> &'static str;

    /// Channel "about" page for a `UC...` id, a handle (`@name`) or a legacy name
    async fn fetch_channel_page(&self, channel_id: &str) -> Result<String>;

    /// Playlist page (first page load only)
    async fn fetch_playlist_page(&self, playlist_id: &str) -> Result<String>;

    /// Watch page for a single video
    async fn fetch_video_page(&self, video_id: &str) -> Result<String>;
}

/// Site path of a channel's "about" page: `channel/{id}/about` for opaque
/// `UC` ids, `{handle}/about` for anything else.
pub fn channel_about_path(channel_id: &str) -> String {
    if channel_id.starts_with("UC") {
        format!("channel/{}/about", channel_id)
    } else {
        format!("{}/about", channel_id.trim_start_matches('/'))
    }
}
