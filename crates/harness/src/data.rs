//! Checkout form data generation

use rand::seq::SliceRandom;
use rand::Rng;

use storecheck_common::CheckoutDetails;

const FIRST_NAMES: [&str; 8] = [
    "Ada", "Grace", "Alan", "Edsger", "Barbara", "Donald", "Margaret", "Tony",
];

const LAST_NAMES: [&str; 8] = [
    "Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov", "Knuth", "Hamilton", "Hoare",
];

/// Random but realistic-looking checkout details
pub fn random_checkout_details() -> CheckoutDetails {
    let mut rng = rand::thread_rng();
    CheckoutDetails {
        first_name: (*FIRST_NAMES.choose(&mut rng).unwrap()).to_string(),
        last_name: (*LAST_NAMES.choose(&mut rng).unwrap()).to_string(),
        postal_code: format!("{:05}", rng.gen_range(0..100_000)),
    }
}
