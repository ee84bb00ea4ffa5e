//! Configuration types for the grant digest.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every section has
//! defaults, so a partial file (or none at all) is valid.

use serde::Deserialize;

use crate::digest::{
    DEFAULT_CURRENCY_WORD, DEFAULT_DIGEST_LIMIT, DEFAULT_EXCEPTIONS, DEFAULT_GROUPING_SEPARATOR,
};

/// Registry feed of public support grants in Viken (county 3).
pub const DEFAULT_REGISTRY_URL: &str =
    "https://data.brreg.no/rofs/od/rofs/stottetildeling/search?language=nob&fylkesnr=3";

/// Where grant records are fetched from.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// URL of the registry search returning a JSON array of records.
    pub url: String,
    /// Timeout for the whole fetch, in seconds.
    pub timeout_secs: u64,
    /// Largest response body accepted, in bytes.
    pub max_body_bytes: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_REGISTRY_URL.to_string(),
            timeout_secs: 30,
            max_body_bytes: 64 * 1024 * 1024,
        }
    }
}

/// How the digest is rendered.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DigestSettings {
    /// Number of most recent grants to render.
    pub limit: usize,
    /// Word appended after the amount.
    pub currency_word: String,
    /// Thousands separator.
    pub grouping_separator: char,
}

impl Default for DigestSettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_DIGEST_LIMIT,
            currency_word: DEFAULT_CURRENCY_WORD.to_string(),
            grouping_separator: DEFAULT_GROUPING_SEPARATOR,
        }
    }
}

/// Tokens exempt from title-casing in organization names.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CapitalizationConfig {
    /// Exception tokens, matched exactly.
    pub exceptions: Vec<String>,
}

impl Default for CapitalizationConfig {
    fn default() -> Self {
        Self {
            exceptions: DEFAULT_EXCEPTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the server listens on.
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// The complete digest configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DigestConfig {
    /// Registry section.
    pub registry: RegistryConfig,
    /// Digest section.
    pub digest: DigestSettings,
    /// Capitalization section.
    pub capitalization: CapitalizationConfig,
    /// Server section.
    pub server: ServerConfig,
    /// Logging section.
    pub logging: LoggingConfig,
}
