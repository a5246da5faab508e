use olx_scraper::{ScrapeRequest, ScraperService};
use tower::Service;

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut service = ScraperService::new();

    let request = ScrapeRequest::new().with_headless(true);

    println!("=== OLX Audi Scraper ===");

    match service.call(request).await {
        Ok(result) => match result.csv_path {
            Some(path) => println!("Data saved to {}", path.display()),
            None => println!("No data to save."),
        },
        Err(e) => {
            eprintln!("Error: {}", e);
        }
    }
}
