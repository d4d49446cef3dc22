use serde::Deserialize;
use std::path::Path;

use crate::capabilities::CapabilityFlags;
use crate::error::ConfigError;

#[derive(Debug, Default, Deserialize)]
pub struct TranslationConfig {
    #[serde(default)]
    pub capabilities: CapabilityFlags,
    #[serde(default)]
    pub catalog: CatalogSection,
}

/// Adjustments to the built-in legacy material table.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogSection {
    /// Legacy material names that do not exist in the running revision.
    #[serde(default)]
    pub absent: Vec<String>,
}

impl TranslationConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        Ok(config)
    }
}
