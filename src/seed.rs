//! Seed definitions for pre-populating the provider directory from YAML.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::Provider;

/// Errors that can occur when loading seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    /// I/O error while reading the seed file.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error.
    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A collection of provider records to load into the directory at startup.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct DirectorySeed {
    /// Schema version of the seed file.
    pub version: Option<u8>,
    /// Provider records to register.
    pub providers: Vec<Provider>,
}

impl DirectorySeed {
    /// Load seed data from a YAML file.
    ///
    /// # Parameters
    ///
    /// - `path` - Path to the YAML seed file
    ///
    /// # Returns
    ///
    /// Returns `Ok(DirectorySeed)` on success, or `SeedError` if the file
    /// cannot be read or parsed.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let txt = fs::read_to_string(path)?;
        let seed: Self = serde_yaml::from_str(&txt)?;
        Ok(seed)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SEED_YAML: &str = r"
version: 1
providers:
  - partner_id: p-100
    name: Lakeside Clinic
    city: Oslo
    services: [general, pediatrics]
  - partner_id: p-200
    name: Harbor Dental
    city: Bergen
";

    /// Test loading a seed file from disk.
    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(SEED_YAML.as_bytes()).expect("write seed");

        let seed = DirectorySeed::load_from_path(file.path()).expect("load seed");
        assert_eq!(seed.version, Some(1));
        assert_eq!(seed.providers.len(), 2);
        assert_eq!(seed.providers[0].partner_id, "p-100");
        assert_eq!(seed.providers[0].services, vec!["general", "pediatrics"]);
        // services defaults to empty when absent
        assert!(seed.providers[1].services.is_empty());
    }

    /// Test that a missing file surfaces as an I/O error.
    #[test]
    fn test_load_missing_file() {
        let result = DirectorySeed::load_from_path("/nonexistent/providers.yaml");
        assert!(matches!(result, Err(SeedError::Io(_))));
    }

    /// Test that malformed YAML surfaces as a parse error.
    #[test]
    fn test_load_invalid_yaml() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(b"providers: {not a list}").expect("write seed");

        let result = DirectorySeed::load_from_path(file.path());
        assert!(matches!(result, Err(SeedError::Yaml(_))));
    }
}
