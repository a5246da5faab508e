use std::path::PathBuf;
use std::time::Duration;

/// OLX listing page for Audi cars
pub const SCRAPE_URL: &str = "https://www.olx.pt/carros-motos-e-barcos/carros/audi/";

/// Brand constant written into every record
pub const TARGET_BRAND: &str = "Audi";

/// Default output file
pub const OUTPUT_FILE: &str = "audi_cars.csv";

/// CSV header, fixed field order
pub const CSV_FIELDS: [&str; 5] = ["Brand", "Model", "Year", "Price", "Kilometers"];

/// Bounded wait for the listing cards to appear
pub const ELEMENT_WAIT: Duration = Duration::from_secs(10);

/// Additional settle delay after the cards are present
pub const SETTLE_WAIT: Duration = Duration::from_secs(5);

/// Seller boilerplate stripped from model text, applied in order as
/// case-sensitive literal substrings
pub const NOISE_PHRASES: [&str; 14] = [
    "aceito trocas",
    "muito estimado",
    "Aceita-se Retoma",
    "Negociavel",
    "Venda de Carro Usado em Excelente Estado!",
    "nacional estimado troco",
    "ano",
    "c/Garantia",
    "Com alguma mecanica eletronica",
    "Desde",
    "FULL EXTRAS",
    "Unico Dono",
    "Vendido com garantia",
    "Vendo",
];

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub url: String,
    pub brand: String,
    pub output_path: PathBuf,
    pub csv_fields: Vec<String>,
    pub noise_phrases: Vec<String>,
    pub element_wait: Duration,
    pub settle_wait: Duration,
    pub headless: bool,
    pub debug: bool,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            url: SCRAPE_URL.to_string(),
            brand: TARGET_BRAND.to_string(),
            output_path: PathBuf::from(OUTPUT_FILE),
            csv_fields: CSV_FIELDS.iter().map(|f| f.to_string()).collect(),
            noise_phrases: NOISE_PHRASES.iter().map(|p| p.to_string()).collect(),
            element_wait: ELEMENT_WAIT,
            settle_wait: SETTLE_WAIT,
            headless: true,
            debug: false,
        }
    }
}

impl ScrapeConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
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

    pub fn with_element_wait(mut self, wait: Duration) -> Self {
        self.element_wait = wait;
        self
    }

    pub fn with_settle_wait(mut self, wait: Duration) -> Self {
        self.settle_wait = wait;
        self
    }
}
