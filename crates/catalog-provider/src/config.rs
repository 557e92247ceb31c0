//! Provider configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Resource served when no configuration is given.
pub const DEFAULT_RESOURCE: &str = "subjects";

/// Configuration for a [`MemoryProvider`](crate::MemoryProvider).
///
/// Every field has a default, so an empty document is a valid config:
///
/// ```
/// use catalog_provider::ProviderConfig;
///
/// let config = ProviderConfig::from_yaml_str("resource: courses").unwrap();
/// assert_eq!(config.resource, "courses");
/// assert_eq!(config.api_url, "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProviderConfig {
    /// Name of the one resource this provider serves.
    pub resource: String,
    /// Base URL reported by `api_url`. Empty for an in-memory store.
    pub api_url: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            resource: DEFAULT_RESOURCE.to_string(),
            api_url: String::new(),
        }
    }
}

impl ProviderConfig {
    /// Creates a config serving `resource`.
    pub fn new(resource: impl Into<String>) -> Self {
        ProviderConfig {
            resource: resource.into(),
            ..ProviderConfig::default()
        }
    }

    /// Parses a config from YAML. JSON documents are accepted too.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(ProviderConfig::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }
}
