//! Offline extraction demo
//!
//! Runs the assembler and sink over canned listing fragments, no
//! browser required.

use olx_scraper::{CsvSink, ListingAssembler, RawListing, ScrapeConfig};

fn main() {
    // Log setup
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let samples = vec![
        RawListing {
            title: Some("Audi A4 Avant aceito trocas".to_string()),
            price: Some("15 500 €\nNegociável".to_string()),
            year_km: Some("2015 - 250.000 km".to_string()),
        },
        RawListing {
            title: Some("Audi A1 Sportback (nacional) Unico Dono".to_string()),
            price: Some("12 900 €".to_string()),
            year_km: Some("2019 - 45.000 km".to_string()),
        },
        RawListing {
            title: Some("Audi Q5 2020".to_string()),
            price: None,
            year_km: None,
        },
        // malformed: skipped with a warning
        RawListing {
            title: None,
            price: None,
            year_km: None,
        },
    ];

    let config = ScrapeConfig::default().with_output_path("./sample_cars.csv");

    let assembler = ListingAssembler::new(config.clone());
    let records = assembler.assemble_batch(&samples);

    for record in &records {
        println!(
            "{} | {} | {} | {} | {} km",
            record.brand, record.model, record.year, record.price, record.kilometers
        );
    }

    if records.is_empty() {
        println!("No data to save.");
        return;
    }

    match CsvSink::new(&config).write(&records) {
        Ok(path) => println!("Data saved to {}", path.display()),
        Err(e) => eprintln!("Error: {}", e),
    }
}
