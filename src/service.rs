use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::task::{Context, Poll};

use tower::Service;
use tracing::{info, warn};

use crate::config::{self, ScrapeConfig};
use crate::error::ScraperError;
use crate::listing::{CarRecord, ListingAssembler};
use crate::olx::OlxScraper;
use crate::sink::CsvSink;
use crate::traits::Scraper;

/// Scrape request
#[derive(Debug, Clone)]
pub struct ScrapeRequest {
    pub url: String,
    pub output_path: PathBuf,
    pub headless: bool,
    pub debug: bool,
}

impl ScrapeRequest {
    pub fn new() -> Self {
        Self {
            url: config::SCRAPE_URL.to_string(),
            output_path: PathBuf::from(config::OUTPUT_FILE),
            headless: true,
            debug: false,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

impl Default for ScrapeRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ScrapeRequest> for ScrapeConfig {
    fn from(req: ScrapeRequest) -> Self {
        ScrapeConfig::new(req.url)
            .with_output_path(req.output_path)
            .with_headless(req.headless)
            .with_debug(req.debug)
    }
}

/// Scrape result
///
/// `csv_path` is `None` when no listing survived extraction; the sink
/// is not invoked in that case.
#[derive(Debug)]
pub struct ScrapeResult {
    pub records: Vec<CarRecord>,
    pub csv_path: Option<PathBuf>,
}

/// Scraper service implementing tower::Service
#[derive(Debug, Clone, Default)]
pub struct ScraperService {
    // Room for future extensions (rate limiting, caching, ...)
}

impl ScraperService {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Service<ScrapeRequest> for ScraperService {
    type Response = ScrapeResult;
    type Error = ScraperError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: ScrapeRequest) -> Self::Future {
        info!("Scrape request received: url={}", req.url);

        Box::pin(async move {
            let config: ScrapeConfig = req.into();

            let mut scraper = OlxScraper::new(config.clone());
            // A fetch failure is no different from an empty results
            // page; both end as "no data to save"
            let listings = match scraper.execute().await {
                Ok(listings) => listings,
                Err(e) => {
                    warn!("Fetch failed, continuing with empty batch: {}", e);
                    Vec::new()
                }
            };

            let assembler = ListingAssembler::new(config.clone());
            let records = assembler.assemble_batch(&listings);

            if records.is_empty() {
                info!("No data to save");
                return Ok(ScrapeResult {
                    records,
                    csv_path: None,
                });
            }

            let csv_path = CsvSink::new(&config).write(&records)?;

            info!(
                "Scrape complete: {} records, path={}",
                records.len(),
                csv_path.display()
            );

            Ok(ScrapeResult {
                records,
                csv_path: Some(csv_path),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrape_request_builder() {
        let req = ScrapeRequest::new()
            .with_url("https://www.olx.pt/carros-motos-e-barcos/carros/")
            .with_output_path("/tmp/cars.csv")
            .with_headless(false)
            .with_debug(true);

        assert_eq!(req.url, "https://www.olx.pt/carros-motos-e-barcos/carros/");
        assert_eq!(req.output_path, PathBuf::from("/tmp/cars.csv"));
        assert!(!req.headless);
        assert!(req.debug);
    }

    #[test]
    fn test_scrape_request_defaults() {
        let req = ScrapeRequest::new();
        assert_eq!(req.url, config::SCRAPE_URL);
        assert_eq!(req.output_path, PathBuf::from(config::OUTPUT_FILE));
        assert!(req.headless);
    }

    #[test]
    fn test_scrape_request_to_config() {
        let req = ScrapeRequest::new().with_output_path("/tmp/out.csv");
        let config: ScrapeConfig = req.into();

        assert_eq!(config.url, crate::config::SCRAPE_URL);
        assert_eq!(config.output_path, PathBuf::from("/tmp/out.csv"));
        assert_eq!(config.brand, "Audi");
        assert!(!config.noise_phrases.is_empty());
    }
}
