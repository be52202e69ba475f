use crate::library::ContainerKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Fatal: the target library could not be opened. Nothing is mirrored
    /// after this.
    #[error("Failed to open library \"{path}\": {reason}")]
    LibraryOpen { path: String, reason: String },

    /// Recoverable: one container could not be created. The affected subtree
    /// is skipped; siblings are still processed.
    #[error("Failed to create {kind} \"{name}\": {reason}")]
    ContainerCreate {
        kind: ContainerKind,
        name: String,
        reason: String,
    },

    #[error("Catalog error: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Other(String),
}
