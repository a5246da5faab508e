use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("browser init error: {0}")]
    BrowserInit(String),

    #[error("navigation error: {0}")]
    Navigation(String),

    #[error("javascript error: {0}")]
    JavaScript(String),

    #[error("timeout: {0}")]
    Timeout(String),

    #[error("json error: {0}")]
    Json(String),

    #[error("extraction error: {0}")]
    Extraction(String),

    #[error("file error: {0}")]
    FileIO(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
