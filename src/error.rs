use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    Read {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    Parse {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read {path}: {source}")]
    ReadInput {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteOutput {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A document read back from JSON that does not fit the schema
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("unsupported document version {found}, expected {expected}")]
    UnsupportedVersion { found: u32, expected: u32 },
}
