use async_trait::async_trait;

use crate::error::ScraperError;
use crate::listing::RawListing;

#[async_trait]
pub trait Scraper: Send + Sync {
    /// Browser init
    async fn initialize(&mut self) -> Result<(), ScraperError>;

    /// Fetch the raw listing fragments from the rendered page
    async fn fetch(&mut self) -> Result<Vec<RawListing>, ScraperError>;

    /// Release resources
    async fn close(&mut self) -> Result<(), ScraperError>;

    /// One-shot run (initialize → fetch → close)
    ///
    /// The browser session is released even when the fetch fails.
    async fn execute(&mut self) -> Result<Vec<RawListing>, ScraperError> {
        self.initialize().await?;
        let listings = self.fetch().await;
        self.close().await?;
        listings
    }
}
