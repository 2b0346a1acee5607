//! Per-scenario transient state
//!
//! One `ScenarioContext` lives for the duration of a single scenario and is
//! dropped with it. It holds the most recent catalog response so later steps
//! can assert on it, plus a small string map for anything a step wants to
//! pass along.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// A recorded HTTP response, decoupled from the client that produced it
#[derive(Debug, Clone)]
pub struct RecordedResponse {
    /// HTTP status code
    pub status: u16,

    /// Final URL the response came from
    pub url: String,

    /// Raw response body
    pub body: String,
}

impl RecordedResponse {
    /// Parse the body as JSON
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.body)?)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Ephemeral key/value store shared between the steps of one scenario
#[derive(Debug, Default)]
pub struct ScenarioContext {
    response: Option<RecordedResponse>,
    values: HashMap<String, String>,
}

impl ScenarioContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the most recent response, replacing any previous one
    pub fn record_response(&mut self, response: RecordedResponse) {
        self.response = Some(response);
    }

    /// The most recent recorded response, or an assertion failure when no
    /// request step has run yet.
    pub fn response(&self) -> Result<&RecordedResponse> {
        self.response
            .as_ref()
            .ok_or_else(|| Error::AssertionFailed("no response recorded in this scenario".into()))
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_round_trip() {
        let mut ctx = ScenarioContext::new();
        assert!(ctx.response().is_err());

        ctx.record_response(RecordedResponse {
            status: 200,
            url: "https://fakestoreapi.com/products/1".to_string(),
            body: r#"{"id": 1, "title": "Backpack"}"#.to_string(),
        });

        let resp = ctx.response().unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.json().unwrap()["id"], 1);
    }

    #[test]
    fn test_values() {
        let mut ctx = ScenarioContext::new();
        ctx.set("item", "Sauce Labs Backpack");
        assert_eq!(ctx.get("item"), Some("Sauce Labs Backpack"));
        assert_eq!(ctx.get("missing"), None);
    }

    #[test]
    fn test_invalid_json_body() {
        let resp = RecordedResponse {
            status: 200,
            url: "https://example.com".to_string(),
            body: "<html>not json</html>".to_string(),
        };
        assert!(resp.json().is_err());
    }
}
