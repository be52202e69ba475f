pub mod ambiguity;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod extensions;
pub mod fs_scan;
pub mod library;
pub mod logging;
pub mod mirror;
pub mod report;
pub mod verify;

pub use config::AppConfig;
pub use error::Error;
pub use library::{JsonCatalog, PhotoLibrary};
