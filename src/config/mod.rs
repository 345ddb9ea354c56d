// Configuration module

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::ThumborError;

/// Connection options for one proxy server
///
/// A present, non-empty `key` switches the builder to signed URLs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumborClientOptions {
    /// Base URL of the proxy, e.g. `https://images.example.com`
    pub url: String,

    /// Shared HMAC secret
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl fmt::Debug for ThumborClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThumborClientOptions")
            .field("url", &self.url)
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ThumborClientOptions {
    /// Options for unsigned (`unsafe`) URLs
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            key: None,
        }
    }

    /// Options for signed URLs
    pub fn with_key(url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            key: Some(key.into()),
        }
    }

    /// Signing key, treating an empty string as absent
    pub fn signing_key(&self) -> Option<&str> {
        self.key.as_deref().filter(|key| !key.is_empty())
    }

    pub fn from_yaml_with_env(yaml: &str) -> Result<Self, ThumborError> {
        // Replace ${VAR_NAME} with environment variable values
        let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| ThumborError::config(e.to_string()))?;

        // Every referenced variable must exist before substituting
        for caps in re.captures_iter(yaml) {
            let var_name = &caps[1];
            std::env::var(var_name).map_err(|_| {
                ThumborError::config(format!(
                    "Environment variable '{}' is referenced but not set",
                    var_name
                ))
            })?;
        }

        let substituted = re.replace_all(yaml, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_default()
        });

        serde_yaml::from_str(&substituted).map_err(|e| ThumborError::config(e.to_string()))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ThumborError> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| ThumborError::config(format!("Failed to read config file: {}", e)))?;
        Self::from_yaml_with_env(&yaml)
    }
}
