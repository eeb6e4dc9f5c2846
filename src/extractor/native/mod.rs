pub mod youtube;

pub use youtube::YoutubeClient;
