use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no config directory found")]
    NoConfigDir,

    #[error("failed to read config at {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config is not a JSON object")]
    MalformedConfig,

    #[error(
        "config_version {found} is newer than this build supports ({supported}). \
         Please update the Sokha client."
    )]
    VersionTooNew { found: u32, supported: u32 },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
