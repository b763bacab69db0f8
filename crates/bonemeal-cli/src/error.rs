//! Error types for the `bonemeal` binary.

use std::path::PathBuf;

/// Top-level error for the `bonemeal` binary.
///
/// Each variant wraps a specific failure mode, providing a single error type
/// that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Recipe defs failed to load.
    #[error("defs error: {source}")]
    Defs {
        /// The underlying defs error.
        #[from]
        source: bonemeal_defs::DefsError,
    },

    /// An input document could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// The input path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// An input document was not valid JSON for the expected shape.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// The input path.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// Output could not be serialized.
    #[error("failed to write output: {source}")]
    Output {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },

    /// Output could not be written.
    #[error("failed to write output: {source}")]
    Write {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// The command line did not match any command.
    #[error("{0}")]
    Usage(String),
}
