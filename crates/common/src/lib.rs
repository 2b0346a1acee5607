//! Storecheck Common Library
//!
//! Shared types, configuration, and error handling for the storecheck
//! acceptance suite.

pub mod config;
pub mod context;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{ApiConfig, SuiteConfig, UiConfig, VisualConfig};
pub use context::{RecordedResponse, ScenarioContext};
pub use error::{Error, Result};
pub use types::{CheckoutDetails, Product, Rating};

/// Storecheck version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default snapshots directory
pub fn default_snapshots_dir() -> std::path::PathBuf {
    std::path::PathBuf::from("snapshots")
}

/// Default schemas directory
pub fn default_schemas_dir() -> std::path::PathBuf {
    std::path::PathBuf::from("schemas")
}
