//! OLX car listing scraper
//!
//! - Renders the OLX results page and collects raw listing text
//! - Extracts normalized fields (model, year, price, kilometers)
//! - Writes the batch to a fixed-schema CSV file
//!
//! # Service usage
//!
//! ```rust,ignore
//! use olx_scraper::{ScraperService, ScrapeRequest};
//! use tower::Service;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut service = ScraperService::new();
//!
//!     let request = ScrapeRequest::new()
//!         .with_output_path("./audi_cars.csv")
//!         .with_headless(true);
//!
//!     let result = service.call(request).await.unwrap();
//!     match result.csv_path {
//!         Some(path) => println!("Data saved to {}", path.display()),
//!         None => println!("No data to save."),
//!     }
//! }
//! ```
//!
//! # Direct extraction usage
//!
//! ```rust,ignore
//! use olx_scraper::{ListingAssembler, RawListing, ScrapeConfig};
//!
//! let assembler = ListingAssembler::new(ScrapeConfig::default());
//! let raw = RawListing {
//!     title: Some("Audi A4 Avant".to_string()),
//!     price: Some("15 500 €\nNegociável".to_string()),
//!     year_km: Some("2015 - 250.000 km".to_string()),
//! };
//! let record = assembler.assemble(&raw).unwrap();
//! println!("{} {} {}", record.model, record.year, record.kilometers);
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod listing;
pub mod olx;
pub mod service;
pub mod sink;
pub mod traits;

// Re-export the main types
pub use config::ScrapeConfig;
pub use error::ScraperError;
pub use listing::{CarRecord, ListingAssembler, RawListing};
pub use olx::OlxScraper;
pub use service::{ScrapeRequest, ScrapeResult, ScraperService};
pub use sink::CsvSink;
pub use traits::Scraper;
