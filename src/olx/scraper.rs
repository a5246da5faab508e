//! OLX scraper implementation

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::ScreenshotParams;
use chromiumoxide::Page;
use futures::StreamExt;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::config::ScrapeConfig;
use crate::error::ScraperError;
use crate::listing::RawListing;
use crate::traits::Scraper;

/// One listing card on the results page
const LISTING_SELECTOR: &str = ".css-1sw7q4x";
/// Title element inside a card
const TITLE_SELECTOR: &str = ".css-1wxaaza";
/// Price block inside a card
const PRICE_SELECTOR: &str = ".css-13afqrm";
/// Combined year/mileage block inside a card
const YEAR_KM_SELECTOR: &str = ".css-efx9z5";

/// Poll interval while waiting for the listing cards
const ELEMENT_POLL_INTERVAL: Duration = Duration::from_secs(1);

pub struct OlxScraper {
    config: ScrapeConfig,
    browser: Option<Browser>,
    page: Option<Arc<Page>>,
}

impl OlxScraper {
    pub fn new(config: ScrapeConfig) -> Self {
        Self {
            config,
            browser: None,
            page: None,
        }
    }

    fn get_page(&self) -> Result<&Arc<Page>, ScraperError> {
        self.page
            .as_ref()
            .ok_or_else(|| ScraperError::BrowserInit("browser not initialized".into()))
    }

    /// Wait until at least one listing card is present, bounded by the
    /// configured element wait.
    async fn wait_for_listings(&self, page: &Page) -> Result<(), ScraperError> {
        let check_script = format!(
            "document.querySelector('{}') !== null",
            LISTING_SELECTOR
        );
        let attempts = self.config.element_wait.as_secs().max(1);

        for i in 0..attempts {
            let present = page
                .evaluate(check_script.as_str())
                .await
                .map_err(|e| ScraperError::JavaScript(e.to_string()))?;

            if present.into_value::<bool>().unwrap_or(false) {
                debug!("Listing cards present after {}s", i + 1);
                return Ok(());
            }

            debug!("Waiting for listing cards... ({}/{})", i + 1, attempts);
            sleep(ELEMENT_POLL_INTERVAL).await;
        }

        Err(ScraperError::Timeout(format!(
            "listing cards did not appear within {}s",
            attempts
        )))
    }

    /// Collect the raw fragments of every listing card in one JS pass.
    ///
    /// Absent elements come back as null so a partially rendered card
    /// still yields a listing.
    async fn collect_listings(&self, page: &Page) -> Result<Vec<RawListing>, ScraperError> {
        let collect_script = format!(
            r#"
            (function() {{
                var cards = document.querySelectorAll('{listing}');
                var items = [];
                for (var i = 0; i < cards.length; i++) {{
                    var title = cards[i].querySelector('{title}');
                    var price = cards[i].querySelector('{price}');
                    var yearKm = cards[i].querySelector('{year_km}');
                    items.push({{
                        title: title ? title.innerText.trim() : null,
                        price: price ? price.innerText.trim() : null,
                        year_km: yearKm ? yearKm.innerText.trim() : null
                    }});
                }}
                return JSON.stringify(items);
            }})()
            "#,
            listing = LISTING_SELECTOR,
            title = TITLE_SELECTOR,
            price = PRICE_SELECTOR,
            year_km = YEAR_KM_SELECTOR,
        );

        let result = page
            .evaluate(collect_script.as_str())
            .await
            .map_err(|e| ScraperError::JavaScript(e.to_string()))?;

        let json_str = result
            .into_value::<String>()
            .map_err(|e| ScraperError::Json(e.to_string()))?;

        serde_json::from_str(&json_str).map_err(|e| ScraperError::Json(e.to_string()))
    }

    /// Full-page screenshot logged base64-encoded, for diagnosing empty
    /// result pages in headless runs.
    async fn log_debug_screenshot(&self, page: &Page) {
        if let Ok(screenshot) = page
            .screenshot(ScreenshotParams::builder().full_page(true).build())
            .await
        {
            use base64::Engine;
            let encoded = base64::engine::general_purpose::STANDARD.encode(&screenshot);
            debug!("Results page screenshot: data:image/png;base64,{}", encoded);
        }
    }
}

#[async_trait]
impl Scraper for OlxScraper {
    async fn initialize(&mut self) -> Result<(), ScraperError> {
        info!("Initializing browser...");

        // Unique user data dir so parallel runs do not collide
        let unique_id = format!(
            "{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        );
        let user_data_dir = std::env::temp_dir().join(format!("olx-scraper-{}", unique_id));

        let chrome_path = std::env::var("CHROME_PATH")
            .or_else(|_| std::env::var("CHROMIUM_PATH"))
            .unwrap_or_else(|_| "chromium".to_string());

        let mut builder = BrowserConfig::builder()
            .chrome_executable(chrome_path)
            .user_data_dir(&user_data_dir)
            .window_size(1280, 800);

        if !self.config.headless {
            builder = builder.with_head();
        }

        builder = builder
            .no_sandbox()
            .request_timeout(Duration::from_secs(60))
            .arg("--disable-blink-features=AutomationControlled")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-gpu");

        if self.config.debug {
            builder = builder.arg("--enable-logging=stderr").arg("--v=1");
        }

        let browser_config = builder
            .build()
            .map_err(|e| ScraperError::BrowserInit(e.to_string()))?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| ScraperError::BrowserInit(e.to_string()))?;

        // Browser event handler runs in the background
        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                debug!("Browser event: {:?}", event);
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| ScraperError::BrowserInit(e.to_string()))?;

        self.browser = Some(browser);
        self.page = Some(Arc::new(page));

        info!("Browser initialized");
        Ok(())
    }

    async fn fetch(&mut self) -> Result<Vec<RawListing>, ScraperError> {
        let page = self.get_page()?.clone();
        info!("Navigating to {}", self.config.url);

        page.goto(self.config.url.as_str())
            .await
            .map_err(|e| ScraperError::Navigation(e.to_string()))?;

        page.wait_for_navigation()
            .await
            .map_err(|e| ScraperError::Navigation(e.to_string()))?;

        self.wait_for_listings(&page).await?;

        // Give the page a moment to finish rendering
        sleep(self.config.settle_wait).await;

        let listings = self.collect_listings(&page).await?;
        info!("Found {} car listings", listings.len());

        if listings.is_empty() {
            warn!("Listing selector matched nothing after settle wait");
            if self.config.debug {
                self.log_debug_screenshot(&page).await;
            }
        }

        Ok(listings)
    }

    async fn close(&mut self) -> Result<(), ScraperError> {
        info!("Closing browser...");

        self.page = None;
        self.browser = None;

        info!("Browser closed");
        Ok(())
    }
}
