//! Coin view and toss controller options with TOML file support.
//!
//! Both sections use `#[serde(default)]`, so a file that only overrides
//! `[flight]` (or a single field of `[toss]`) works.

mod flight;
mod toss;

use std::path::Path;

pub use flight::FlightOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use toss::TossOptions;

use crate::error::TossError;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Coin view attributes.
    pub toss: TossOptions,
    /// Controller flight path.
    pub flight: FlightOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, TossError> {
        let content = std::fs::read_to_string(path).map_err(TossError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, TossError> {
        toml::from_str(content)
            .map_err(|e| TossError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), TossError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TossError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TossError::Io)?;
        }
        std::fs::write(path, content).map_err(TossError::Io)
    }
}
