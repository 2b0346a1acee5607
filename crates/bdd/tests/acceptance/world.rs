//! Scenario worlds
//!
//! One world instance is built per scenario and dropped with it, which is
//! what scopes the browser session and the recorded-response context to a
//! single scenario.

use std::fmt;

use cucumber::World;

use storecheck_bdd::anchored;
use storecheck_common::{ScenarioContext, SuiteConfig};
use storecheck_harness::{BrowserSession, CatalogClient, Storefront, VisualComparator};

/// World for the catalog API features
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct ApiWorld {
    pub config: SuiteConfig,
    pub client: CatalogClient,
    pub ctx: ScenarioContext,
}

impl ApiWorld {
    fn new() -> Self {
        let config = SuiteConfig::from_env();
        let client = CatalogClient::new(&config.api).expect("build catalog client");
        Self {
            config,
            client,
            ctx: ScenarioContext::new(),
        }
    }

    /// Directory holding `product.schema.json`, anchored at the workspace root
    pub fn schemas_dir(&self) -> std::path::PathBuf {
        anchored(&storecheck_common::default_schemas_dir())
    }
}

/// World for the storefront UI features
#[derive(World)]
#[world(init = Self::new)]
pub struct UiWorld {
    pub config: SuiteConfig,
    pub comparator: VisualComparator,
    storefront: Option<Storefront>,
}

impl UiWorld {
    fn new() -> Self {
        let mut config = SuiteConfig::from_env();
        config.visual.snapshots_dir = anchored(&config.visual.snapshots_dir);
        let comparator = VisualComparator::new(&config.visual).expect("open snapshot store");
        Self {
            config,
            comparator,
            storefront: None,
        }
    }

    /// The storefront for this scenario, launching the browser on first use
    pub async fn storefront(&mut self) -> &Storefront {
        if self.storefront.is_none() {
            let session = BrowserSession::launch(self.config.ui.clone())
                .await
                .expect("launch browser");
            self.storefront = Some(Storefront::new(session));
        }
        self.storefront.as_ref().unwrap()
    }
}

impl fmt::Debug for UiWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiWorld")
            .field("config", &self.config)
            .field("comparator", &self.comparator)
            .field(
                "storefront",
                &self.storefront.as_ref().map(|_| "<browser session>"),
            )
            .finish()
    }
}
