//! OLX page fetcher
//!
//! Renders the listing page in headless Chrome and collects the raw
//! text fragments of every listing card.

mod scraper;

pub use scraper::OlxScraper;
