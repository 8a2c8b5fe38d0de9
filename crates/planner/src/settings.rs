//! Build-artifact settings, optionally loaded from a TOML file:
//!
//! ```toml
//! materialized = "view"
//! source_template = "{{ source('raw', '{name}') }}"
//! manifest_file = "schema.yml"
//! ```

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Placeholder replaced by the snake-cased source name.
pub const NAME_PLACEHOLDER: &str = "{name}";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Source template '{0}' does not contain {{name}}")]
    MissingPlaceholder(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ArtifactSettings {
    /// Value of the `materialized` config in every model file header.
    pub materialized: String,
    /// How a model refers to an upstream source.
    pub source_template: String,
    /// File name of the shared documentation manifest.
    pub manifest_file: String,
}

impl Default for ArtifactSettings {
    fn default() -> Self {
        ArtifactSettings {
            materialized: "view".to_string(),
            source_template: "{{ ref('{name}') }}".to_string(),
            manifest_file: "schema.yml".to_string(),
        }
    }
}

impl ArtifactSettings {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, SettingsError> {
        let settings: ArtifactSettings = toml::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.source_template.contains(NAME_PLACEHOLDER) {
            return Err(SettingsError::MissingPlaceholder(
                self.source_template.clone(),
            ));
        }
        Ok(())
    }

    pub fn source_reference(&self, name: &str) -> String {
        self.source_template.replace(NAME_PLACEHOLDER, name)
    }
}
