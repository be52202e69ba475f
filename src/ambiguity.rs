use crate::classify::{self, Classification};
use crate::extensions::ExtensionSet;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Pre-flight scan: every directory strictly below `root` that contains both
/// media files and subdirectories. Such a directory has no valid container
/// role, so the files should be moved into a new subfolder before mirroring.
/// Read-only; creates and mutates nothing.
pub fn find_ambiguous(root: &Path, extensions: &ExtensionSet) -> io::Result<Vec<PathBuf>> {
    let mut flagged = Vec::new();

    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let profile = classify::profile_directory(entry.path(), extensions)?;
        if profile.classification == Classification::Ambiguous {
            debug!(
                "\"{}\" contains {} media files and {} subfolders",
                entry.path().display(),
                profile.media_file_count,
                profile.subfolder_count,
            );
            flagged.push(entry.path().to_path_buf());
        }
    }

    Ok(flagged)
}
