//! Error types for storecheck

use thiserror::Error;

/// Result type alias using the storecheck Error
pub type Result<T> = std::result::Result<T, Error>;

/// Storecheck error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("API unavailable at {url}: {reason}")]
    ApiUnavailable { url: String, reason: String },

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Navigation failed for {url}: {reason}")]
    Navigation { url: String, reason: String },

    #[error("Element not found: {selector}")]
    ElementNotFound { selector: String },

    #[error("Schema validation failed: {0}")]
    SchemaValidation(String),

    #[error("Current screenshot not found: {0}")]
    ScreenshotNotFound(String),

    #[error("Visual regression detected for '{name}': {diff_pixels} pixels differ ({diff_percent:.2}%)")]
    VisualMismatch {
        name: String,
        diff_pixels: u64,
        diff_percent: f64,
    },

    #[error("Assertion failed: {0}")]
    AssertionFailed(String),

    #[error("Operation timeout after {seconds}s")]
    Timeout { seconds: u64 },
}

impl Error {
    /// Classify a reqwest failure during the availability probe into a
    /// clearer message, preserving the probed URL.
    pub fn from_probe(url: &str, e: reqwest::Error) -> Self {
        let reason = if e.is_connect() {
            format!("not reachable: {}", e)
        } else if e.is_timeout() {
            "request timed out".to_string()
        } else {
            format!("request failed: {}", e)
        };
        Error::ApiUnavailable {
            url: url.to_string(),
            reason,
        }
    }
}
