//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a severance
//! policy from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{PolicyConfig, PolicyFile, PolicyMetadata, TierTable};

/// Loads and provides access to a severance policy.
///
/// # Directory Structure
///
/// ```text
/// config/labor_code/
/// ├── policy.yaml       # Metadata, trial window and clause references
/// ├── entitlement.yaml  # Vacation days by years of service
/// └── notice.yaml       # Notice days by months of tenure
/// ```
///
/// # Example
///
/// ```no_run
/// use severance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/labor_code").unwrap();
/// println!("Loaded policy: {}", loader.metadata().name);
/// println!("Trial window: {} days", loader.config().trial_window_days());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PolicyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if any file is missing, contains invalid YAML, or
    /// describes a tier table with gaps, overlaps or no open-ended band.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy = Self::load_yaml::<PolicyFile>(&path.join("policy.yaml"))?;
        let entitlement = Self::load_yaml::<TierTable>(&path.join("entitlement.yaml"))?;
        let notice = Self::load_yaml::<TierTable>(&path.join("notice.yaml"))?;

        let config = PolicyConfig::new(
            policy.metadata,
            policy.trial_window_days,
            policy.clauses,
            entitlement,
            notice,
        )?;

        info!(
            path = %path.display(),
            policy = %config.metadata().name,
            version = %config.metadata().version,
            "Loaded severance policy"
        );

        Ok(Self { config })
    }

    /// Wraps an already-built policy.
    pub fn from_config(config: PolicyConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying policy.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        self.config.metadata()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::from_config(PolicyConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/labor_code"
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "severance-engine-{}-{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_policy(dir: &Path, notice: &str) {
        fs::write(
            dir.join("policy.yaml"),
            "name: Test policy\nversion: \"2024-01-01\"\ntrial_window_days: 60\n",
        )
        .unwrap();
        fs::write(
            dir.join("entitlement.yaml"),
            "clause: \"346\"\nbands:\n  - { min: 0, days: 10 }\n",
        )
        .unwrap();
        fs::write(dir.join("notice.yaml"), notice).unwrap();
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.metadata().version, "2024-01-01");
        assert_eq!(loader.config().trial_window_days(), 90);
    }

    #[test]
    fn test_shipped_configuration_matches_builtin_tables() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let builtin = PolicyConfig::default();

        assert_eq!(loader.config().entitlement().bands, builtin.entitlement().bands);
        assert_eq!(loader.config().notice().bands, builtin.notice().bands);
        assert_eq!(loader.config().clauses(), builtin.clauses());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_custom_policy_directory() {
        let dir = scratch_dir("custom");
        write_policy(
            &dir,
            "clause: \"116\"\nbands:\n  - { min: 0, max: 12, days: 0 }\n  - { min: 12, days: 30 }\n",
        );

        let loader = ConfigLoader::load(&dir).unwrap();
        assert_eq!(loader.metadata().name, "Test policy");
        assert_eq!(loader.config().trial_window_days(), 60);
        assert_eq!(loader.config().notice().lookup(13), 30);
        // clauses fall back to the built-in references
        assert_eq!(loader.config().clauses().notice, "116");

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_load_rejects_gapped_notice_table() {
        let dir = scratch_dir("gapped");
        write_policy(
            &dir,
            "clause: \"116\"\nbands:\n  - { min: 0, max: 3, days: 0 }\n  - { min: 6, days: 14 }\n",
        );

        let result = ConfigLoader::load(&dir);
        assert!(matches!(result, Err(EngineError::InvalidPolicy { .. })));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_load_reports_parse_errors_with_path() {
        let dir = scratch_dir("malformed");
        write_policy(&dir, "clause: [unterminated\n");

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.ends_with("notice.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_default_loader_uses_builtin_policy() {
        let loader = ConfigLoader::default();
        assert_eq!(loader.metadata().version, "builtin");
    }
}
