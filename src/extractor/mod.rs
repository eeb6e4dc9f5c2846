pub mod channel;
pub mod collect;
pub mod duration;
pub mod models;
pub mod native;
pub mod patterns;
pub mod playlist;
pub mod scraper;
pub mod traits;
pub mod video;

pub use collect::collect;
pub use duration::{milliseconds_to_seconds, seconds_to_human_string, seconds_to_machine_string};
pub use models::{Channel, ExternalLink, Playlist, Video};
pub use native::YoutubeClient;
pub use scraper::{Scraper, Uploads};
pub use traits::PageFetcher;
