//! Scraper configuration

use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const MIN_TIMEOUT_SECS: u64 = 1;

/// Scraper settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperSettings {
    /// Site root every page path is resolved against
    pub base_url: String,

    /// Host that receives the consent form
    pub consent_url: String,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Request timeout (seconds)
    pub timeout_secs: u64,

    /// Interface language (`hl`) sent with the consent form
    pub language: String,

    /// Region (`gl`) sent with the consent form
    pub region: String,

    /// Run the consent cookie handshake before the first fetch
    pub accept_consent: bool,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            base_url: "https://www.youtube.com".to_string(),
            consent_url: "https://consent.youtube.com".to_string(),
            user_agent: "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0"
                .to_string(),
            timeout_secs: 30,
            language: "en".to_string(),
            region: "HU".to_string(),
            accept_consent: true,
        }
    }
}

impl ScraperSettings {
    /// Default settings file: `<config dir>/tubescrape/settings.json`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tubescrape")
            .join("settings.json")
    }

    /// Load settings from a JSON file. A missing file yields the defaults,
    /// unknown keys are ignored and missing keys take their default value.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&json)?;
        debug!("Loaded settings from {}", path.display());
        Ok(settings.validate())
    }

    /// Enforce sane minimums
    pub fn validate(mut self) -> Self {
        if self.timeout_secs < MIN_TIMEOUT_SECS {
            self.timeout_secs = MIN_TIMEOUT_SECS;
        }
        if self.base_url.ends_with('/') {
            self.base_url.pop();
        }
        if self.consent_url.ends_with('/') {
            self.consent_url.pop();
        }
        self
    }
}
