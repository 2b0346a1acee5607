//! JSON Schema validation of catalog responses

use std::path::Path;

use jsonschema::JSONSchema;
use serde_json::Value;
use tracing::debug;

use storecheck_common::{Error, Result};

/// File name of the product schema inside the schemas directory
pub const PRODUCT_SCHEMA_FILE: &str = "product.schema.json";

/// Compiled product schema
pub struct ProductSchema {
    compiled: JSONSchema,
}

impl ProductSchema {
    /// Load and compile `product.schema.json` from the schemas directory
    pub fn load(schemas_dir: &Path) -> Result<Self> {
        let path = schemas_dir.join(PRODUCT_SCHEMA_FILE);
        debug!("Loading product schema from {}", path.display());
        let content = std::fs::read_to_string(&path)?;
        let value: Value = serde_json::from_str(&content)?;
        Self::from_value(&value)
    }

    /// Compile a schema from an in-memory document
    pub fn from_value(schema: &Value) -> Result<Self> {
        let compiled = JSONSchema::compile(schema)
            .map_err(|e| Error::SchemaValidation(format!("invalid schema: {}", e)))?;
        Ok(Self { compiled })
    }

    /// Validate an instance, collecting every violation into one message
    pub fn validate(&self, instance: &Value) -> Result<()> {
        if let Err(errors) = self.compiled.validate(instance) {
            let details: Vec<String> = errors
                .map(|e| format!("{} (at {})", e, e.instance_path))
                .collect();
            return Err(Error::SchemaValidation(details.join("; ")));
        }
        Ok(())
    }
}
