use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlassbotError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write config file at {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("No {key} found. Set {env} env var or add {key} to ~/.config/glassbot/config.toml")]
    MissingSetting {
        key: &'static str,
        env: &'static str,
    },

    #[error("Invalid value for {key}: {value}")]
    InvalidSetting { key: &'static str, value: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

pub type Result<T> = std::result::Result<T, GlassbotError>;
