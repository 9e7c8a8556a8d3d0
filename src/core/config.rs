use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

pub const DEFAULT_CNB_BASE_URL: &str = "https://www.cnb.cz";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CnbProviderConfig {
    pub base_url: String,
}

impl Default for CnbProviderConfig {
    fn default() -> Self {
        CnbProviderConfig {
            base_url: DEFAULT_CNB_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub cnb: CnbProviderConfig,
}

/// Amounts are always in CZK since that is what CNB quotes in, so there is
/// no home currency setting. Unknown keys are rejected.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
}

impl AppConfig {
    /// Loads the config from the default location, falling back to defaults
    /// when no config file has been created yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("cz", "cnbx", "cnbx")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
providers:
  cnb:
    base_url: "http://example.com/cnb"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.providers.cnb.base_url, "http://example.com/cnb");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").expect("Failed to deserialize");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.providers.cnb.base_url, DEFAULT_CNB_BASE_URL);
    }

    #[test]
    fn test_home_currency_setting_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "home_currency: \"EUR\"").unwrap();

        let err = AppConfig::load_from_path(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config file"));
        assert!(format!("{err:#}").contains("home_currency"), "{err:#}");
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "providers:\n  cnb:\n    base_url: \"http://localhost:9\"").unwrap();

        let config = AppConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.providers.cnb.base_url, "http://localhost:9");
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = AppConfig::load_from_path(dir.path().join("missing.yaml"));
        assert!(
            result
                .unwrap_err()
                .to_string()
                .starts_with("Failed to read config file")
        );
    }

    #[test]
    fn test_load_malformed_config_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "providers: [not, a, map]").unwrap();

        let result = AppConfig::load_from_path(file.path());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .starts_with("Failed to parse config file")
        );
    }
}
