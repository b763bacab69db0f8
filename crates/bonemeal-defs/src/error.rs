//! Error types for the `bonemeal-defs` crate.

use bonemeal_types::RecipeDefName;
use bonemeal_yield::YieldError;

/// Errors that can occur when loading recipe defs.
#[derive(Debug, thiserror::Error)]
pub enum DefsError {
    /// Failed to read the defs file from disk.
    #[error("failed to read defs file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse defs YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A recipe's yield extension failed validation.
    #[error("invalid yield extension on recipe {recipe}: {source}")]
    InvalidExtension {
        /// The recipe carrying the extension.
        recipe: RecipeDefName,
        /// What was wrong with it.
        #[source]
        source: YieldError,
    },
}

impl From<serde_yml::Error> for DefsError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}
