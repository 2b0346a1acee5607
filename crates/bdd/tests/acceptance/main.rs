//! Acceptance suite entry point
//!
//! Runs the catalog API features and the storefront UI features in order,
//! one scenario at a time. The UI scenarios share the snapshots directory,
//! so concurrency stays at one.
//!
//! The suite talks to live third-party services and needs a Chrome binary;
//! it is a no-op unless `STORECHECK_E2E=1` is set:
//!
//! ```bash
//! STORECHECK_E2E=1 cargo test -p storecheck-bdd --test acceptance
//! ```

// Test code: panics and unwraps are how steps fail.
#![allow(clippy::expect_used, clippy::unwrap_used)]

mod steps;
mod world;

use std::path::Path;

use cucumber::World;
use tracing_subscriber::EnvFilter;

use storecheck_bdd::e2e_enabled;
use world::{ApiWorld, UiWorld};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .init();

    if !e2e_enabled() {
        eprintln!(
            "acceptance suite skipped: set {}=1 to run against the live services",
            storecheck_bdd::E2E_ENV
        );
        return;
    }

    let features = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/features");

    ApiWorld::cucumber()
        .max_concurrent_scenarios(1)
        .run_and_exit(features.join("catalog_api.feature"))
        .await;

    UiWorld::cucumber()
        .max_concurrent_scenarios(1)
        .run_and_exit(features.join("storefront.feature"))
        .await;
}
