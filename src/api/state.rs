//! Application state for the grant digest API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::digest::Pipeline;
use crate::source::RecordSource;

/// Shared application state.
///
/// Holds the loaded configuration, the pipeline built from it and the
/// source records are fetched from.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    pipeline: Arc<Pipeline>,
    source: Arc<dyn RecordSource>,
}

impl AppState {
    /// Creates application state, building the pipeline from `config`.
    pub fn new(config: ConfigLoader, source: Arc<dyn RecordSource>) -> Self {
        let pipeline = config.pipeline();
        Self {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
            source,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the digest pipeline.
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Returns the record source.
    pub fn source(&self) -> &dyn RecordSource {
        self.source.as_ref()
    }
}
