//! Error handling for tubescrape

use thiserror::Error;

/// Main error type for tubescrape
///
/// Absent fields never show up here: a pattern with no match falls back to its
/// table default. Only values that are present but unusable, and transport
/// failures, become errors.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Invalid date {value:?}: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid escape sequence in {value:?}: {source}")]
    InvalidEscape {
        value: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid channel id: {0:?}")]
    InvalidChannelId(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Parse `raw` as an absolute URL, keeping the offending text on failure.
pub fn parse_url(raw: &str) -> Result<url::Url> {
    url::Url::parse(raw).map_err(|source| ScrapeError::InvalidUrl {
        url: raw.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_keeps_input_on_error() {
        let err = parse_url("").unwrap_err();
        match err {
            ScrapeError::InvalidUrl { url, .. } => assert_eq!(url, ""),
            other => panic!("Wrong error type: {:?}", other),
        }
    }

    #[test]
    fn test_parse_url_accepts_absolute() {
        let url = parse_url("https://www.youtube.com/@IronMouseParty").unwrap();
        assert_eq!(url.host_str(), Some("www.youtube.com"));
    }
}
