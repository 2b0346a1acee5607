//! Page object for the demo storefront
//!
//! Wraps the fixed CSS selectors of the demo shop's login, inventory, cart,
//! and checkout pages so step definitions read as flows rather than selector
//! soup. Selector changes on the storefront land here and nowhere else.

use tracing::info;

use storecheck_common::{CheckoutDetails, Error, Result};

use crate::browser::BrowserSession;

/// Login form
pub const USERNAME_INPUT: &str = "#user-name";
pub const PASSWORD_INPUT: &str = "#password";
pub const LOGIN_BUTTON: &str = "#login-button";

/// Inventory and cart
pub const INVENTORY_URL_FRAGMENT: &str = "inventory.html";
pub const PRODUCTS_HEADING: &str = "Products";
pub const CART_BADGE: &str = ".shopping_cart_badge";
pub const CART_LINK: &str = ".shopping_cart_link";

/// Checkout flow
pub const CHECKOUT_BUTTON: &str = "button#checkout";
pub const FIRST_NAME_INPUT: &str = "input#first-name";
pub const LAST_NAME_INPUT: &str = "input#last-name";
pub const POSTAL_CODE_INPUT: &str = "input#postal-code";
pub const CONTINUE_BUTTON: &str = "input#continue";
pub const FINISH_BUTTON: &str = "button#finish";

/// Confirmation copy on the completed-order page
pub const CONFIRMATION_TEXTS: [&str; 3] = [
    "Checkout: Complete!",
    "Thank you for your order",
    "Your order has been dispatched",
];

/// The demo shop's standard test account
pub const STANDARD_USER: &str = "standard_user";
pub const STANDARD_PASSWORD: &str = "secret_sauce";

/// Storefront driver bound to a browser session
pub struct Storefront {
    session: BrowserSession,
    base_url: String,
}

impl Storefront {
    pub fn new(session: BrowserSession) -> Self {
        let base_url = session.config().base_url.trim_end_matches('/').to_string();
        Self { session, base_url }
    }

    /// The underlying browser session
    pub fn session(&self) -> &BrowserSession {
        &self.session
    }

    /// Open the login page and verify the shop branding loaded
    pub async fn open(&self) -> Result<()> {
        self.session.navigate(&self.base_url).await?;
        let title = self.session.title().await?;
        if !title.contains("Swag Labs") {
            return Err(Error::AssertionFailed(format!(
                "expected storefront title to contain 'Swag Labs', got '{}'",
                title
            )));
        }
        Ok(())
    }

    /// Submit the login form
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        info!("Logging in as {}", username);
        self.session.fill(USERNAME_INPUT, username).await?;
        self.session.fill(PASSWORD_INPUT, password).await?;
        self.session.click(LOGIN_BUTTON).await?;
        Ok(())
    }

    /// Open the shop and log in with the standard demo account
    pub async fn login_as_standard_user(&self) -> Result<()> {
        self.open().await?;
        self.login(STANDARD_USER, STANDARD_PASSWORD).await?;
        self.assert_on_inventory().await
    }

    /// The inventory page shows the "Products" heading and the URL carries
    /// the inventory fragment
    pub async fn assert_on_inventory(&self) -> Result<()> {
        if !self.session.text_visible(PRODUCTS_HEADING).await? {
            return Err(Error::AssertionFailed(
                "'Products' heading is not visible".to_string(),
            ));
        }
        let url = self.session.current_url().await?;
        if !url.contains(INVENTORY_URL_FRAGMENT) {
            return Err(Error::AssertionFailed(format!(
                "expected URL to contain '{}', got '{}'",
                INVENTORY_URL_FRAGMENT, url
            )));
        }
        Ok(())
    }

    /// Wait until the inventory heading is present
    pub async fn wait_for_inventory(&self) -> Result<()> {
        self.session.wait_for_element(".inventory_list").await
    }

    /// Click the add-to-cart button for a named item
    pub async fn add_to_cart(&self, item: &str) -> Result<()> {
        let selector = add_to_cart_selector(item);
        info!("Adding '{}' to cart via {}", item, selector);
        self.session.click(&selector).await
    }

    /// Number shown on the cart badge; 0 when the badge is absent
    pub async fn cart_badge_count(&self) -> Result<u32> {
        if !self.session.element_exists(CART_BADGE).await {
            return Ok(0);
        }
        let text = self.session.text_of(CART_BADGE).await?;
        text.parse()
            .map_err(|_| Error::AssertionFailed(format!("cart badge is not a number: '{}'", text)))
    }

    /// Walk the checkout flow from the cart icon through the finish button
    pub async fn complete_checkout(&self, details: &CheckoutDetails) -> Result<()> {
        self.session.click(CART_LINK).await?;
        self.session.click(CHECKOUT_BUTTON).await?;

        self.session.fill(FIRST_NAME_INPUT, &details.first_name).await?;
        self.session.fill(LAST_NAME_INPUT, &details.last_name).await?;
        self.session.fill(POSTAL_CODE_INPUT, &details.postal_code).await?;

        self.session.click(CONTINUE_BUTTON).await?;
        self.session.click(FINISH_BUTTON).await?;
        Ok(())
    }

    /// All order-confirmation copy is visible
    pub async fn assert_confirmation_visible(&self) -> Result<()> {
        for text in CONFIRMATION_TEXTS {
            if !self.session.text_visible(text).await? {
                return Err(Error::AssertionFailed(format!(
                    "confirmation text '{}' is not visible",
                    text
                )));
            }
        }
        Ok(())
    }
}

/// Selector for an item's add-to-cart button. The shop derives button ids
/// from the kebab-cased item name.
pub fn add_to_cart_selector(item: &str) -> String {
    format!(
        "button[id^='add-to-cart-'][name*='{}']",
        item_slug(item)
    )
}

fn item_slug(item: &str) -> String {
    item.to_lowercase().replace(' ', "-")
}
