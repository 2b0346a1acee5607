//! Headless browser session over the Chrome DevTools Protocol

use std::sync::Arc;
use std::time::{Duration, Instant};

use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;
use headless_chrome::{Browser, LaunchOptions, Tab};
use tracing::{debug, info};

use storecheck_common::{Error, Result, UiConfig};

/// Active browser session driving one page
pub struct BrowserSession {
    /// Underlying browser instance (kept alive for tab lifetime)
    #[allow(dead_code)]
    browser: Browser,
    /// Current active tab
    tab: Arc<Tab>,
    /// UI configuration
    config: UiConfig,
}

impl BrowserSession {
    /// Launch a browser with the suite's UI configuration
    pub async fn launch(config: UiConfig) -> Result<Self> {
        info!(
            "Launching browser (headless: {}, viewport: {}x{})",
            config.headless, config.viewport_width, config.viewport_height
        );

        let launch_options = LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some((config.viewport_width, config.viewport_height)))
            .build()
            .map_err(|e| Error::Browser(format!("failed to build launch options: {}", e)))?;

        let browser = Browser::new(launch_options)
            .map_err(|e| Error::Browser(format!("failed to launch browser: {}", e)))?;

        let tab = browser
            .new_tab()
            .map_err(|e| Error::Browser(format!("failed to create tab: {}", e)))?;

        Ok(Self {
            browser,
            tab,
            config,
        })
    }

    /// Navigate to a URL and wait for the navigation to finish
    pub async fn navigate(&self, url: &str) -> Result<()> {
        debug!("Navigating to {}", url);

        self.tab.navigate_to(url).map_err(|e| Error::Navigation {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        self.tab
            .wait_until_navigated()
            .map_err(|e| Error::Navigation {
                url: url.to_string(),
                reason: format!("navigation did not settle: {}", e),
            })?;

        Ok(())
    }

    /// Wait for an element to appear, using the configured timeout
    pub async fn wait_for_element(&self, selector: &str) -> Result<()> {
        self.tab
            .wait_for_element_with_custom_timeout(selector, self.config.timeout())
            .map_err(|_| Error::ElementNotFound {
                selector: selector.to_string(),
            })?;
        Ok(())
    }

    /// Click an element
    pub async fn click(&self, selector: &str) -> Result<()> {
        debug!("Clicking {}", selector);
        let element = self
            .tab
            .wait_for_element_with_custom_timeout(selector, self.config.timeout())
            .map_err(|_| Error::ElementNotFound {
                selector: selector.to_string(),
            })?;
        element
            .click()
            .map_err(|e| Error::Browser(format!("click on {} failed: {}", selector, e)))?;
        Ok(())
    }

    /// Fill an input: focus the element, then send keystrokes
    pub async fn fill(&self, selector: &str, value: &str) -> Result<()> {
        debug!("Filling {}", selector);
        let element = self
            .tab
            .wait_for_element_with_custom_timeout(selector, self.config.timeout())
            .map_err(|_| Error::ElementNotFound {
                selector: selector.to_string(),
            })?;
        element
            .click()
            .map_err(|e| Error::Browser(format!("focus of {} failed: {}", selector, e)))?;
        self.tab
            .type_str(value)
            .map_err(|e| Error::Browser(format!("typing into {} failed: {}", selector, e)))?;
        Ok(())
    }

    /// Check if an element exists without waiting for the full timeout budget
    pub async fn element_exists(&self, selector: &str) -> bool {
        self.tab.wait_for_element(selector).is_ok()
    }

    /// Text content of an element
    pub async fn text_of(&self, selector: &str) -> Result<String> {
        let script = format!("document.querySelector('{}')?.textContent", selector);
        let result = self.evaluate(&script).await?;
        Ok(result.as_str().unwrap_or("").trim().to_string())
    }

    /// Whether the given text is visible anywhere in the page body
    pub async fn text_visible(&self, text: &str) -> Result<bool> {
        let needle = serde_json::to_string(text)?;
        let script = format!("!!document.body && document.body.innerText.includes({})", needle);
        let result = self.evaluate(&script).await?;
        Ok(result.as_bool().unwrap_or(false))
    }

    /// Current page title
    pub async fn title(&self) -> Result<String> {
        let result = self.evaluate("document.title").await?;
        Ok(result.as_str().unwrap_or("").to_string())
    }

    /// Current URL
    pub async fn current_url(&self) -> Result<String> {
        let result = self.evaluate("window.location.href").await?;
        Ok(result.as_str().unwrap_or("").to_string())
    }

    /// Execute JavaScript in the page context
    pub async fn evaluate(&self, script: &str) -> Result<serde_json::Value> {
        let result = self
            .tab
            .evaluate(script, false)
            .map_err(|e| Error::Browser(format!("script evaluation failed: {}", e)))?;
        Ok(result.value.unwrap_or(serde_json::Value::Null))
    }

    /// Wait for the document to be ready, then hold for the configured settle
    /// delay. Screenshots taken before late layout shifts settle would churn
    /// baselines.
    pub async fn settle(&self) -> Result<()> {
        let deadline = Instant::now() + self.config.timeout();
        loop {
            let state = self
                .evaluate("document.readyState")
                .await?
                .as_str()
                .unwrap_or("")
                .to_string();
            if state == "complete" || state == "interactive" {
                break;
            }
            if Instant::now() >= deadline {
                return Err(Error::Timeout {
                    seconds: self.config.timeout_secs,
                });
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        tokio::time::sleep(self.config.settle_delay()).await;
        Ok(())
    }

    /// Capture a PNG screenshot of the page
    pub async fn capture_png(&self, full_page: bool) -> Result<Vec<u8>> {
        debug!("Capturing {} screenshot", if full_page { "full-page" } else { "viewport" });
        let data = self
            .tab
            .capture_screenshot(CaptureScreenshotFormatOption::Png, None, None, full_page)
            .map_err(|e| Error::Browser(format!("screenshot capture failed: {}", e)))?;
        Ok(data)
    }

    /// UI configuration this session was launched with
    pub fn config(&self) -> &UiConfig {
        &self.config
    }
}
