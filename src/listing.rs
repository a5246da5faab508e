//! Listing assembly
//!
//! Builds one [`CarRecord`] from the raw text fragments of one rendered
//! listing. One bad listing never aborts the batch.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::ScrapeConfig;
use crate::error::ScraperError;
use crate::extract::{clean_model, clean_price, extract_year, extract_year_and_km, NOT_AVAILABLE};

/// Raw text fragments of one rendered listing.
///
/// Any fragment may be absent when the corresponding element was not
/// rendered. Discarded once the record is built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawListing {
    pub title: Option<String>,
    pub price: Option<String>,
    pub year_km: Option<String>,
}

/// One extracted car listing. Missing data carries the `N/A` sentinel,
/// never an absent field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarRecord {
    pub brand: String,
    pub model: String,
    pub year: String,
    pub price: String,
    pub kilometers: String,
}

/// Turns raw listings into records using the configured brand and
/// noise-phrase list.
pub struct ListingAssembler {
    config: ScrapeConfig,
}

impl ListingAssembler {
    pub fn new(config: ScrapeConfig) -> Self {
        Self { config }
    }

    /// Assemble one record.
    ///
    /// A listing with no usable fragment at all is malformed and yields
    /// an error; the caller drops it and continues.
    pub fn assemble(&self, raw: &RawListing) -> Result<CarRecord, ScraperError> {
        if raw.title.is_none() && raw.price.is_none() && raw.year_km.is_none() {
            return Err(ScraperError::Extraction(
                "listing has no usable fragments".to_string(),
            ));
        }

        let price = match &raw.price {
            Some(p) => clean_price(p),
            None => NOT_AVAILABLE.to_string(),
        };

        let (mut year, kilometers) = match &raw.year_km {
            Some(text) => extract_year_and_km(text),
            None => (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string()),
        };

        let title = raw.title.as_deref().unwrap_or(NOT_AVAILABLE);

        // Fallback: some sellers only put the year in the title
        if year == NOT_AVAILABLE {
            year = extract_year(title);
        }

        let mut model_source = title.replace(&self.config.brand, "");
        if year != NOT_AVAILABLE {
            model_source = model_source.replace(&year, "");
        }
        let model = clean_model(model_source.trim(), &self.config.noise_phrases);

        Ok(CarRecord {
            brand: self.config.brand.clone(),
            model,
            year,
            price,
            kilometers,
        })
    }

    /// Assemble a whole batch, in encounter order.
    ///
    /// Failures are logged per listing and dropped; the result holds
    /// only the successfully assembled records.
    pub fn assemble_batch(&self, listings: &[RawListing]) -> Vec<CarRecord> {
        let records: Vec<CarRecord> = listings
            .iter()
            .enumerate()
            .filter_map(|(index, raw)| match self.assemble(raw) {
                Ok(record) => {
                    debug!("Processed listing {}: {:?}", index + 1, record);
                    Some(record)
                }
                Err(e) => {
                    warn!("Skipping listing {}: {}", index + 1, e);
                    None
                }
            })
            .collect();

        if records.is_empty() {
            warn!("No car listings were successfully processed");
        } else {
            info!("Successfully processed {} car listings", records.len());
        }

        records
    }
}
