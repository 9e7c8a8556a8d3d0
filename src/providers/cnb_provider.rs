use anyhow::{Result, anyhow};
use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::core::feed::FeedProvider;

/// Path of the English daily fixing feed, relative to the CNB site root.
pub const DAILY_FEED_PATH: &str = "/en/financial-markets/foreign-exchange-market/central-bank-exchange-rate-fixing/central-bank-exchange-rate-fixing/daily.txt";

const USER_AGENT: &str = concat!("cnbx/", env!("CARGO_PKG_VERSION"));

pub struct CnbFeedProvider {
    base_url: String,
}

impl CnbFeedProvider {
    pub fn new(base_url: &str) -> Self {
        CnbFeedProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn feed_url(&self) -> String {
        format!("{}{}", self.base_url, DAILY_FEED_PATH)
    }
}

#[async_trait]
impl FeedProvider for CnbFeedProvider {
    #[instrument(name = "CnbFeedFetch", skip(self))]
    async fn fetch_feed(&self) -> Result<String> {
        let url = self.feed_url();
        debug!("Requesting exchange rates from {}", url);

        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for feed: {}", e, url))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for feed: {}",
                response.status(),
                url
            ));
        }

        let text = response
            .text()
            .await
            .map_err(|e| anyhow!("Failed to read feed body from {}: {}", url, e))?;
        debug!(bytes = text.len(), "Received CNB feed");
        Ok(text)
    }
}
