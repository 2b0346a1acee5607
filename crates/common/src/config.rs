//! Suite configuration
//!
//! Defaults target the public demo services the suite was written against.
//! Every knob can be overridden through `STORECHECK_*` environment variables
//! or a TOML file, in that order of precedence (env wins).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Top-level configuration for the acceptance suite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Catalog API configuration
    pub api: ApiConfig,

    /// Storefront UI configuration
    pub ui: UiConfig,

    /// Visual regression configuration
    pub visual: VisualConfig,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            ui: UiConfig::default(),
            visual: VisualConfig::default(),
        }
    }
}

/// Catalog API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Primary base URL for the product catalog
    pub base_url: String,

    /// Fallback API with a looser schema; schema validation is skipped there
    pub fallback_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://fakestoreapi.com".to_string(),
            fallback_url: "https://jsonplaceholder.typicode.com".to_string(),
            timeout_secs: 5,
            user_agent: "storecheck-ci-client".to_string(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Storefront UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Base URL of the demo storefront
    pub base_url: String,

    /// Run the browser headless
    pub headless: bool,

    /// Viewport width
    pub viewport_width: u32,

    /// Viewport height
    pub viewport_height: u32,

    /// Navigation / element wait timeout in seconds
    pub timeout_secs: u64,

    /// Fixed delay after load before capturing screenshots, in milliseconds.
    /// Pages with late-settling layout need this; there is no readiness
    /// signal tied to it.
    pub settle_delay_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.saucedemo.com".to_string(),
            headless: true,
            viewport_width: 1280,
            viewport_height: 720,
            timeout_secs: 30,
            settle_delay_ms: 2000,
        }
    }
}

impl UiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

/// Visual regression configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualConfig {
    /// Directory holding the baseline/current/diff triples
    pub snapshots_dir: PathBuf,

    /// Per-channel tolerance when comparing pixels. 0 means byte-for-byte.
    pub pixel_tolerance: u8,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            snapshots_dir: crate::default_snapshots_dir(),
            pixel_tolerance: 0,
        }
    }
}

impl SuiteConfig {
    /// Load configuration from a TOML file, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply `STORECHECK_*` environment overrides on top of this config.
    pub fn apply_env(mut self) -> Self {
        if let Ok(url) = std::env::var("STORECHECK_API_URL") {
            self.api.base_url = url;
        }
        if let Ok(url) = std::env::var("STORECHECK_API_FALLBACK_URL") {
            self.api.fallback_url = url;
        }
        if let Ok(url) = std::env::var("STORECHECK_UI_URL") {
            self.ui.base_url = url;
        }
        if let Ok(v) = std::env::var("STORECHECK_HEADLESS") {
            self.ui.headless = v != "0" && !v.eq_ignore_ascii_case("false");
        }
        if let Ok(dir) = std::env::var("STORECHECK_SNAPSHOTS_DIR") {
            self.visual.snapshots_dir = PathBuf::from(dir);
        }
        self
    }

    /// Defaults plus environment overrides
    pub fn from_env() -> Self {
        Self::default().apply_env()
    }
}
