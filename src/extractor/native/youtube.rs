use crate::extractor::traits::{channel_about_path, PageFetcher};
use crate::utils::config::ScraperSettings;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Build id of the consent form the site currently serves
const CONSENT_BUILD: &str = "657587456";

/// HTTP page fetcher backed by a cookie-keeping `reqwest` client
pub struct YoutubeClient {
    client: Client,
    settings: ScraperSettings,
}

impl YoutubeClient {
    pub fn new(settings: ScraperSettings) -> Result<Self> {
        let settings = settings.validate();
        let client = Client::builder()
            .cookie_store(true)
            .user_agent(settings.user_agent.clone())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &ScraperSettings {
        &self.settings
    }

    /// Collect the visitor and consent cookies so later page loads get the
    /// real page instead of the consent interstitial. Cookies live in this
    /// client's jar.
    pub async fn init_cookies(&self) -> Result<()> {
        info!("Initializing consent cookies");

        let visitor = self
            .client
            .post(format!("{}/upgrade_visitor_cookie", self.settings.base_url))
            .query(&[("eom", "1")])
            .send()
            .await?;
        debug!("Visitor cookie upgrade returned {}", visitor.status());

        let continue_url = format!("{}/", self.settings.base_url);
        let consent = self
            .client
            .post(format!("{}/save", self.settings.consent_url))
            .query(&[
                ("continue", continue_url.as_str()),
                ("gl", self.settings.region.as_str()),
                ("m", "0"),
                ("pc", "yt"),
                ("x", "5"),
                ("src", "2"),
                ("hl", self.settings.language.as_str()),
                ("bl", CONSENT_BUILD),
                ("cm", "2"),
                ("set_eom", "false"),
                ("set_apyt", "true"),
                ("set_ytc", "true"),
            ])
            .send()
            .await?;
        debug!("Consent form returned {}", consent.status());

        Ok(())
    }

    async fn get_page(&self, path: &str, query: &[(&str, &str)]) -> Result<String> {
        let url = format!("{}/{}", self.settings.base_url, path);
        debug!("GET {} {:?}", url, query);

        let text = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        debug!("Fetched {} bytes from {}", text.len(), url);
        Ok(text)
    }
}

#[async_trait]
impl PageFetcher for YoutubeClient {
    fn id(&self) -> &'static str {
        "youtube-http"
    }

    async fn fetch_channel_page(&self, channel_id: &str) -> Result<String> {
        self.get_page(&channel_about_path(channel_id), &[]).await
    }

    async fn fetch_playlist_page(&self, playlist_id: &str) -> Result<String> {
        self.get_page("playlist", &[("list", playlist_id)]).await
    }

    async fn fetch_video_page(&self, video_id: &str) -> Result<String> {
        self.get_page("watch", &[("v", video_id)]).await
    }
}
