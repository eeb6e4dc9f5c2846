//! Error handling, configuration and text helpers

pub mod config;
pub mod error;
pub mod text;

// Re-export for convenience
pub use config::ScraperSettings;
pub use error::{Result, ScrapeError};
