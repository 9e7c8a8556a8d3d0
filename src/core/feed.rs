//! Feed retrieval abstraction

use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait FeedProvider: Send + Sync {
    /// Returns the raw text of the current daily feed.
    async fn fetch_feed(&self) -> Result<String>;
}
