//! tubescrape library
//!
//! Reads channel, playlist and video metadata out of public YouTube pages by
//! matching literal keys in the embedded script payload.

pub mod extractor;
pub mod utils;

// Re-export main types for easier use
pub use extractor::{
    milliseconds_to_seconds, seconds_to_human_string, seconds_to_machine_string, Channel,
    ExternalLink, PageFetcher, Playlist, Scraper, Uploads, Video, YoutubeClient,
};
pub use utils::{Result, ScrapeError, ScraperSettings};
