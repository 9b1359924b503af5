//! Resolution and configuration errors.

use std::path::PathBuf;

use thiserror::Error;

/// The module or class attribute a type name maps to does not exist.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("no module `{module_path}`")]
    ModuleNotFound { module_path: String },
    #[error("module `{module_path}` has no class `{class}`")]
    ClassNotFound { module_path: String, class: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read registry config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid registry config: {0}")]
    Toml(#[from] toml::de::Error),
}
