use crate::extractor::models::{Channel, Playlist, Video};
use crate::extractor::traits::PageFetcher;
use crate::utils::error::Result;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Caller-facing retrieval: fetch a page, then build its record
///
/// Transport errors from the fetcher are returned as-is; nothing is retried.
#[derive(Clone)]
pub struct Scraper {
    fetcher: Arc<dyn PageFetcher>,
}

/// A channel, its uploads playlist and the newest upload
#[derive(Debug, Clone, Serialize)]
pub struct Uploads {
    pub channel: Channel,
    pub playlist: Playlist,
    pub latest: Option<Video>,
}

impl Scraper {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    pub async fn channel(&self, channel_id: &str) -> Result<Channel> {
        debug!("Fetching channel {} via {}", channel_id, self.fetcher.id());
        let page = self.fetcher.fetch_channel_page(channel_id).await?;
        Channel::build(channel_id, &page)
    }

    pub async fn playlist(&self, playlist_id: &str) -> Result<Playlist> {
        debug!("Fetching playlist {} via {}", playlist_id, self.fetcher.id());
        let page = self.fetcher.fetch_playlist_page(playlist_id).await?;
        Playlist::build(playlist_id, &page)
    }

    pub async fn video(&self, video_id: &str) -> Result<Video> {
        debug!("Fetching video {} via {}", video_id, self.fetcher.id());
        let page = self.fetcher.fetch_video_page(video_id).await?;
        Video::build(video_id, &page)
    }

    /// Walk channel -> uploads playlist -> first listed video
    pub async fn uploads(&self, channel_id: &str) -> Result<Uploads> {
        let channel = self.channel(channel_id).await?;
        let playlist = self.playlist(&channel.playlist_id).await?;

        let latest = match playlist.video_ids.first() {
            Some(video_id) => Some(self.video(video_id).await?),
            None => {
                info!("Uploads playlist {} is empty", playlist.id);
                None
            }
        };

        Ok(Uploads {
            channel,
            playlist,
            latest,
        })
    }
}
