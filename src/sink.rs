//! CSV record sink

use std::path::PathBuf;

use tracing::info;

use crate::config::ScrapeConfig;
use crate::error::ScraperError;
use crate::listing::CarRecord;

/// Writes a batch of records to a fixed-schema CSV file.
///
/// The field order comes from the configuration, not from the data.
/// Any existing file at the target path is overwritten.
pub struct CsvSink {
    path: PathBuf,
    fields: Vec<String>,
}

impl CsvSink {
    pub fn new(config: &ScrapeConfig) -> Self {
        Self {
            path: config.output_path.clone(),
            fields: config.csv_fields.clone(),
        }
    }

    /// Write the header row and one row per record, in input order.
    ///
    /// Succeeds with zero records (header-only file); the caller decides
    /// whether an empty batch is worth writing at all.
    pub fn write(&self, records: &[CarRecord]) -> Result<PathBuf, ScraperError> {
        let mut writer = csv::Writer::from_path(&self.path)?;

        writer.write_record(&self.fields)?;
        for record in records {
            writer.write_record([
                &record.brand,
                &record.model,
                &record.year,
                &record.price,
                &record.kilometers,
            ])?;
        }
        writer.flush()?;

        info!("Data saved to {}", self.path.display());
        Ok(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_output(tag: &str) -> PathBuf {
        let unique_id = format!(
            "{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        );
        std::env::temp_dir().join(format!("olx_sink_{}_{}.csv", tag, unique_id))
    }

    fn sample_records() -> Vec<CarRecord> {
        vec![
            CarRecord {
                brand: "Audi".to_string(),
                model: "A4 Avant".to_string(),
                year: "2015".to_string(),
                price: "15 500 €".to_string(),
                kilometers: "250000".to_string(),
            },
            CarRecord {
                brand: "Audi".to_string(),
                model: "Q5 Negociável".to_string(),
                year: "N/A".to_string(),
                price: "N/A".to_string(),
                kilometers: "N/A".to_string(),
            },
        ]
    }

    #[test]
    fn test_write_and_read_back() {
        let path = temp_output("roundtrip");
        let config = ScrapeConfig::default().with_output_path(&path);
        let records = sample_records();

        let written = CsvSink::new(&config).write(&records).unwrap();
        assert_eq!(written, path);

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec!["Brand", "Model", "Year", "Price", "Kilometers"]
        );

        let rows: Vec<csv::StringRecord> =
            reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), records.len());
        for (row, record) in rows.iter().zip(&records) {
            assert_eq!(&row[0], record.brand);
            assert_eq!(&row[1], record.model);
            assert_eq!(&row[2], record.year);
            assert_eq!(&row[3], record.price);
            assert_eq!(&row[4], record.kilometers);
        }

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_empty_batch_is_header_only() {
        let path = temp_output("empty");
        let config = ScrapeConfig::default().with_output_path(&path);

        CsvSink::new(&config).write(&[]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim_end(), "Brand,Model,Year,Price,Kilometers");

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let path = temp_output("overwrite");
        std::fs::write(&path, "stale content").unwrap();

        let config = ScrapeConfig::default().with_output_path(&path);
        CsvSink::new(&config).write(&sample_records()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Brand,Model,Year,Price,Kilometers"));
        assert!(!content.contains("stale content"));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_quotes_embedded_delimiters() {
        let path = temp_output("quoting");
        let config = ScrapeConfig::default().with_output_path(&path);
        let records = vec![CarRecord {
            brand: "Audi".to_string(),
            model: "A4, pack S-line".to_string(),
            year: "2016".to_string(),
            price: "17 900 €".to_string(),
            kilometers: "120000".to_string(),
        }];

        CsvSink::new(&config).write(&records).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[1], "A4, pack S-line");

        std::fs::remove_file(&path).unwrap();
    }
}
