use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "photo-mirror")]
#[command(
    about = "Mirror a nested media export into a folder/album library",
    long_about = None
)]
pub struct Cli {
    /// Root of the exported photo tree (overrides Config.toml)
    #[arg(long, global = true)]
    pub export_path: Option<String>,

    /// Path of the target library catalog (overrides Config.toml)
    #[arg(long, global = true)]
    pub library_path: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Pre-flight scan for directories holding both media files and subfolders
    Scan,
    /// Create folders and albums mirroring the export tree
    Mirror,
    /// Compare album contents against the export tree and report missing files
    Verify,
    /// Print configuration values
    PrintConfig,
}
