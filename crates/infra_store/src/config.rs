//! Store configuration

use serde::Deserialize;

/// Dataset store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Path to the claim dataset document
    pub data_path: String,
    /// Default rows per page for table views
    pub default_page_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_path: "assets/data/fra-sample-data.json".to_string(),
            default_page_size: 5,
        }
    }
}

impl StoreConfig {
    /// Loads configuration from environment variables prefixed with `FRA`
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("data_path", StoreConfig::default().data_path)?
            .set_default("default_page_size", StoreConfig::default().default_page_size as i64)?
            .add_source(config::Environment::with_prefix("FRA"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = StoreConfig::default();
        assert_eq!(cfg.default_page_size, 5);
        assert!(cfg.data_path.ends_with("fra-sample-data.json"));
    }

    #[test]
    fn test_from_env_falls_back_to_defaults() {
        let cfg = StoreConfig::from_env().unwrap();
        assert_eq!(cfg.default_page_size, StoreConfig::default().default_page_size);
    }
}
