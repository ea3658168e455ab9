use std::path::PathBuf;

use pc_chem::ChemError;
use pc_core::PcError;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Core(#[from] PcError),

    #[error(transparent)]
    Chem(#[from] ChemError),

    #[error("Failed to read {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid override '{text}', expected NAME=VALUE")]
    InvalidOverride { text: String },

    #[error("Entry '{name}' in {path} is not a number")]
    NotANumber { path: PathBuf, name: String },
}
