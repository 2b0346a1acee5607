//! Storecheck test harness
//!
//! The library the acceptance suite calls into. It owns the three surfaces
//! the suite exercises:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     storecheck-harness                       │
//! ├──────────────────────────────────────────────────────────────┤
//! │  catalog     GET {base}/products, {base}/products/{id},      │
//! │              availability probe with error classification    │
//! │  schema      JSON Schema validation of product responses     │
//! │  browser     headless Chrome session (CDP): navigate, fill,  │
//! │              click, text queries, full-page screenshots      │
//! │  storefront  page object for the demo shop's login, cart     │
//! │              and checkout forms                              │
//! │  visual      baseline/current/diff triple per snapshot name, │
//! │              pixel comparison, first-run baseline bootstrap  │
//! │  data        checkout form data generation                   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each scenario gets its own browser session and scenario context; nothing
//! is shared across scenarios except the snapshots directory.

pub mod browser;
pub mod catalog;
pub mod data;
pub mod schema;
pub mod storefront;
pub mod visual;

pub use browser::BrowserSession;
pub use catalog::CatalogClient;
pub use schema::ProductSchema;
pub use storefront::Storefront;
pub use visual::{assert_visual_match, Comparison, Outcome, SnapshotStore, VisualComparator};

pub use storecheck_common::{Error, Result};
