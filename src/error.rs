use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
    #[error("Catalog error: {0}")]
    CatalogError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    /// Holds the id as requested, which may not be a valid `ProductId`.
    #[error("Product {0} not found")]
    ProductNotFound(String),
    #[error("Invalid order intent: {0}")]
    InvalidOrderIntent(String),
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("Method not allowed")]
    MethodNotAllowed,
    /// Carries the underlying cause for logging; never rendered to HTTP callers.
    #[error("Upstream relay failed: {0}")]
    UpstreamRelay(String),
    #[error("Select Size and Pickup Location")]
    IncompleteSelection,
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
