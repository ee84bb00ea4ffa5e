//! Configuration loading and management for the grant digest.
//!
//! This module loads the digest configuration from a YAML file: the
//! registry to fetch from, how entries are rendered, the capitalization
//! exception list, and server and logging settings.
//!
//! # Example
//!
//! ```no_run
//! use grant_digest::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/digest.yaml").unwrap();
//! println!("Fetching from: {}", config.registry().url);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CapitalizationConfig, DEFAULT_REGISTRY_URL, DigestConfig, DigestSettings, LoggingConfig,
    RegistryConfig, ServerConfig,
};
