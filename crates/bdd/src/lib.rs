//! Support helpers for the acceptance suite
//!
//! The suite itself lives in `tests/acceptance` (a `harness = false` binary);
//! this library only holds path and gating helpers the runner needs before
//! any scenario starts.

use std::path::PathBuf;

/// Environment variable that opts the acceptance suite in. The scenarios
/// need network access and a Chrome binary, so they do nothing unless this
/// is set to a truthy value.
pub const E2E_ENV: &str = "STORECHECK_E2E";

/// Whether the end-to-end scenarios should run
pub fn e2e_enabled() -> bool {
    matches!(
        std::env::var(E2E_ENV).as_deref(),
        Ok("1") | Ok("true") | Ok("yes")
    )
}

/// Workspace root, resolved from this crate's manifest directory. The
/// `schemas/` and `snapshots/` directories live there, not in the package.
pub fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("crate sits two levels below the workspace root")
        .to_path_buf()
}

/// Anchor a possibly-relative configured path at the workspace root
pub fn anchored(path: &std::path::Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        workspace_root().join(path)
    }
}
