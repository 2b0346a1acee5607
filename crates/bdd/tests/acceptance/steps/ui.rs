//! Steps for the storefront UI features

use cucumber::{given, then, when};
use tracing::info;

use storecheck_harness::data::random_checkout_details;
use storecheck_harness::storefront::{STANDARD_PASSWORD, STANDARD_USER};
use storecheck_harness::visual::{assert_visual_match, Outcome};

use crate::world::UiWorld;

#[given("the user is on the login page")]
async fn on_login_page(world: &mut UiWorld) {
    world.storefront().await.open().await.expect("open storefront");
}

#[when("the user logs in with valid credentials")]
async fn login_with_valid_credentials(world: &mut UiWorld) {
    world
        .storefront()
        .await
        .login(STANDARD_USER, STANDARD_PASSWORD)
        .await
        .expect("submit login form");
}

#[then("the user should be redirected to the products page")]
async fn redirected_to_products_page(world: &mut UiWorld) {
    if let Err(e) = world.storefront().await.assert_on_inventory().await {
        panic!("{}", e);
    }
}

#[given("the user is logged in")]
async fn logged_in_user(world: &mut UiWorld) {
    world
        .storefront()
        .await
        .login_as_standard_user()
        .await
        .expect("log in as the standard user");
}

#[given(expr = "the user has a {string} in the cart")]
async fn item_in_cart(world: &mut UiWorld, item: String) {
    let storefront = world.storefront().await;
    storefront
        .login_as_standard_user()
        .await
        .expect("log in as the standard user");
    storefront.add_to_cart(&item).await.expect("add item to cart");

    let count = storefront.cart_badge_count().await.expect("read cart badge");
    assert!(count >= 1, "cart badge did not appear after adding '{}'", item);
}

#[when(expr = "the user adds a {string} to the cart")]
async fn add_item_to_cart(world: &mut UiWorld, item: String) {
    world
        .storefront()
        .await
        .add_to_cart(&item)
        .await
        .expect("add item to cart");
}

#[when("the user completes the checkout process")]
async fn complete_checkout_process(world: &mut UiWorld) {
    let details = random_checkout_details();
    info!(
        "checking out as {} {} ({})",
        details.first_name, details.last_name, details.postal_code
    );
    world
        .storefront()
        .await
        .complete_checkout(&details)
        .await
        .expect("walk the checkout flow");
}

#[then(expr = "the cart should contain {string} item")]
async fn cart_contains_items(world: &mut UiWorld, expected: String) {
    let expected: u32 = expected.parse().expect("expected count is not a number");
    let count = world
        .storefront()
        .await
        .cart_badge_count()
        .await
        .expect("read cart badge");
    assert_eq!(count, expected);
}

#[then("the order confirmation message is displayed")]
async fn order_confirmation_displayed(world: &mut UiWorld) {
    if let Err(e) = world.storefront().await.assert_confirmation_visible().await {
        panic!("{}", e);
    }
}

#[then("the products page layout should be visually correct")]
async fn visual_check_products_page(world: &mut UiWorld) {
    let comparator = world.comparator.clone();
    let storefront = world.storefront().await;
    storefront
        .wait_for_inventory()
        .await
        .expect("inventory list did not appear");

    match assert_visual_match(storefront.session(), &comparator, "products_page").await {
        Ok(Outcome::Match) => {}
        Ok(Outcome::BaselineCreated) => {
            info!("no baseline existed for 'products_page'; current capture saved as baseline");
        }
        Err(e) => panic!("{}", e),
    }
}
