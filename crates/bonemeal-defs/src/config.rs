//! Def loading and typed def structures.
//!
//! The defs live in `bonemeal-defs.yaml`. Each recipe entry may carry a
//! `grind` extension holding a [`YieldConfig`]; any field it omits takes the
//! default from the stock recipe.
//!
//! ```yaml
//! recipes:
//!   GrindCorpseToBoneMeal:
//!     label: grind corpse to bone meal
//!     grind:
//!       yield_animal: "0.9"
//!       meat_def: Meat_Generic
//! logging:
//!   level: debug
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use bonemeal_types::RecipeDefName;
use bonemeal_yield::YieldConfig;

use crate::error::DefsError;

/// Environment variable that overrides the logging level from the defs.
pub const LOG_LEVEL_ENV: &str = "BONEMEAL_LOG_LEVEL";

/// Top-level defs document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ModDefs {
    /// Recipe defs keyed by def name.
    #[serde(default)]
    pub recipes: BTreeMap<RecipeDefName, RecipeDef>,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ModDefs {
    /// Load defs from a YAML file at the given path.
    ///
    /// `BONEMEAL_LOG_LEVEL` overrides `logging.level` when set.
    ///
    /// # Errors
    ///
    /// Returns [`DefsError::Io`] if the file cannot be read,
    /// [`DefsError::Yaml`] if the content is not valid YAML, or
    /// [`DefsError::InvalidExtension`] if an extension fails validation.
    pub fn from_file(path: &Path) -> Result<Self, DefsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Load defs from `path`, falling back to stock defs when the file does
    /// not exist.
    ///
    /// Nothing is logged here: callers usually load defs before logging is
    /// set up, so the returned [`DefsOrigin`] tells them what to report.
    ///
    /// # Errors
    ///
    /// Same as [`ModDefs::from_file`] for a file that exists.
    pub fn from_file_or_default(path: &Path) -> Result<(Self, DefsOrigin), DefsError> {
        if path.exists() {
            Ok((Self::from_file(path)?, DefsOrigin::File))
        } else {
            let mut defs = Self::default();
            defs.logging.apply_env_overrides();
            Ok((defs, DefsOrigin::Stock))
        }
    }

    /// Parse defs from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`DefsError::Yaml`] if the string is not valid YAML, or
    /// [`DefsError::InvalidExtension`] if an extension fails validation.
    pub fn parse(yaml: &str) -> Result<Self, DefsError> {
        let mut defs: Self = serde_yml::from_str(yaml)?;
        defs.validate()?;
        defs.logging.apply_env_overrides();
        Ok(defs)
    }

    /// Validate every yield extension.
    ///
    /// # Errors
    ///
    /// Returns the first [`DefsError::InvalidExtension`] found, in def-name
    /// order.
    pub fn validate(&self) -> Result<(), DefsError> {
        for (name, recipe) in &self.recipes {
            if let Some(grind) = &recipe.grind {
                grind.validate().map_err(|source| DefsError::InvalidExtension {
                    recipe: name.clone(),
                    source,
                })?;
            }
        }
        Ok(())
    }
}

/// Where a loaded [`ModDefs`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefsOrigin {
    /// Parsed from the defs file.
    File,
    /// The file was absent; stock defs were used.
    Stock,
}

/// A single recipe def.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RecipeDef {
    /// Human-readable label.
    #[serde(default)]
    pub label: Option<String>,

    /// Bone meal yield extension, if the recipe has one.
    #[serde(default)]
    pub grind: Option<YieldConfig>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl LoggingConfig {
    /// Override the level with `BONEMEAL_LOG_LEVEL` when set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(LOG_LEVEL_ENV) {
            self.level = val;
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_owned()
}
