//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the digest
//! configuration from a YAML file.

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::digest::{AmountFormatter, Capitalizer, Pipeline};
use crate::error::{DigestError, DigestResult};

use super::types::{CapitalizationConfig, DigestConfig, DigestSettings, RegistryConfig};

/// Loads and provides access to the digest configuration.
///
/// # Example
///
/// ```no_run
/// use grant_digest::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/digest.yaml").unwrap();
/// println!("Registry: {}", loader.registry().url);
///
/// let pipeline = loader.pipeline();
/// assert_eq!(pipeline.limit(), loader.digest().limit);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: DigestConfig,
}

impl ConfigLoader {
    /// Loads configuration from a YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or wrongly typed values
    ///   (`ConfigParseError`)
    ///
    /// ```no_run
    /// use grant_digest::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/digest.yaml")?;
    /// # Ok::<(), grant_digest::error::DigestError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> DigestResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| DigestError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content).map_err(|e| match e {
            DigestError::ConfigParseError { message, .. } => DigestError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml(content: &str) -> DigestResult<Self> {
        let config: DigestConfig =
            serde_yaml::from_str(content).map_err(|e| DigestError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;

        if config.digest.limit == 0 {
            return Err(DigestError::ConfigParseError {
                path: "<inline>".to_string(),
                message: "digest.limit must be at least 1".to_string(),
            });
        }

        Ok(Self { config })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &DigestConfig {
        &self.config
    }

    /// Returns the registry section.
    pub fn registry(&self) -> &RegistryConfig {
        &self.config.registry
    }

    /// Returns the digest section.
    pub fn digest(&self) -> &DigestSettings {
        &self.config.digest
    }

    /// Returns the capitalization section.
    pub fn capitalization(&self) -> &CapitalizationConfig {
        &self.config.capitalization
    }

    /// Returns the fetch timeout as a [`Duration`].
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.config.registry.timeout_secs)
    }

    /// Builds a pipeline from the digest and capitalization sections.
    pub fn pipeline(&self) -> Pipeline {
        let digest = &self.config.digest;
        Pipeline::new(
            Capitalizer::new(self.config.capitalization.exceptions.iter().cloned()),
            AmountFormatter::new(digest.grouping_separator, digest.currency_word.clone()),
            digest.limit,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_path() -> &'static str {
        "./config/digest.yaml"
    }

    #[test]
    fn test_load_bundled_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert!(loader.registry().url.starts_with("https://data.brreg.no/"));
        assert_eq!(loader.digest().limit, 10);
        assert_eq!(loader.digest().currency_word, "kroner");
        assert_eq!(loader.digest().grouping_separator, '\u{a0}');
        assert!(
            loader
                .capitalization()
                .exceptions
                .contains(&"S.A.R.L.".to_string())
        );
    }

    #[test]
    fn test_missing_file_returns_config_not_found() {
        let result = ConfigLoader::load("/nonexistent/digest.yaml");
        match result {
            Err(DigestError::ConfigNotFound { path }) => {
                assert_eq!(path, "/nonexistent/digest.yaml");
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_reports_file_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "digest:\n  limit: [not, a, number]").unwrap();

        let result = ConfigLoader::load(file.path());
        match result {
            Err(DigestError::ConfigParseError { path, message }) => {
                assert_eq!(path, file.path().display().to_string());
                assert!(!message.is_empty());
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        let result = ConfigLoader::from_yaml("digest:\n  limit: 0\n");
        assert!(matches!(result, Err(DigestError::ConfigParseError { .. })));
    }

    #[test]
    fn test_pipeline_uses_configured_values() {
        let yaml = r#"
digest:
  limit: 2
  currency_word: NOK
  grouping_separator: "."
capitalization:
  exceptions: [NRK]
"#;
        let loader = ConfigLoader::from_yaml(yaml).unwrap();
        let pipeline = loader.pipeline();

        assert_eq!(pipeline.limit(), 2);
        let builder = pipeline.sentence_builder();
        assert_eq!(builder.amount_formatter().currency_word(), "NOK");
        assert_eq!(builder.amount_formatter().grouping_separator(), '.');
        assert!(builder.capitalizer().is_exception("NRK"));
        assert!(!builder.capitalizer().is_exception("AS"));
    }

    #[test]
    fn test_default_loader_matches_default_pipeline() {
        let loader = ConfigLoader::default();
        assert_eq!(loader.pipeline(), Pipeline::default());
        assert_eq!(loader.fetch_timeout(), Duration::from_secs(30));
    }
}
