use crate::classify::{self, Classification};
use crate::error::Error;
use crate::extensions::ExtensionSet;
use crate::fs_scan;
use crate::library::{FolderHandle, PhotoLibrary};
use std::io;
use std::path::Path;
use tracing::{debug, error, info};
use walkdir::WalkDir;

/// Containers confirmed created during a mirror run. Accumulated by the
/// traversal and returned up the call chain; never shared state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MirrorCounts {
    pub folders_created: usize,
    pub albums_created: usize,
}

impl MirrorCounts {
    fn absorb(&mut self, other: MirrorCounts) {
        self.folders_created += other.folders_created;
        self.albums_created += other.albums_created;
    }
}

/// Counts from the independent pre-pass: how many folders and albums a
/// failure-free run would create.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedCounts {
    pub folders: usize,
    pub albums: usize,
}

/// Full pre-pass over every directory strictly below `root`, using the same
/// classification rule as the live mirror pass. Empty and ambiguous
/// directories count toward neither total, matching what the mirror pass
/// will actually create.
pub fn expected_counts(root: &Path, extensions: &ExtensionSet) -> io::Result<ExpectedCounts> {
    let mut expected = ExpectedCounts::default();

    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let profile = classify::profile_directory(entry.path(), extensions)?;
        match profile.classification {
            Classification::Folder => expected.folders += 1,
            Classification::Album => expected.albums += 1,
            Classification::Empty | Classification::Ambiguous => {}
        }
    }

    Ok(expected)
}

/// Depth-first, pre-order mirror of the source tree into the target library.
///
/// Each subdirectory of `dir` is classified and mirrored: folders are
/// created then recursed into with the new container as parent, albums are
/// created as leaves, empty and ambiguous directories are skipped. A failed
/// folder creation skips that entire subtree (there is no valid parent to
/// attach children to) but never stops the run; siblings are still
/// processed. Siblings are visited in filesystem order, which is not
/// guaranteed sorted — counts, not order, are the invariant.
pub fn mirror_tree(
    dir: &Path,
    parent: Option<&FolderHandle>,
    library: &mut dyn PhotoLibrary,
    extensions: &ExtensionSet,
) -> Result<MirrorCounts, Error> {
    let mut counts = MirrorCounts::default();

    for subdir in fs_scan::list_subdirectories(dir)? {
        let profile = classify::profile_directory(&subdir, extensions)?;
        let name = subdir
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        match profile.classification {
            Classification::Folder => {
                info!("Directory \"{}\" contains subfolders. Creating folder...", name);
                match library.create_folder(&name, parent) {
                    Ok(folder) => {
                        info!("Created folder \"{}\" with ID {}", folder.name, folder.id);
                        counts.folders_created += 1;
                        counts.absorb(mirror_tree(&subdir, Some(&folder), library, extensions)?);
                    }
                    Err(err) => {
                        // No parent container to attach children to, so the
                        // whole subtree is skipped for this run.
                        error!("Failed to create folder \"{}\"", name);
                        error!("{}", err);
                    }
                }
            }
            Classification::Album => {
                info!("Directory \"{}\" contains media files. Creating album...", name);
                match library.create_album(&name, parent) {
                    Ok(album) => {
                        info!("Created album \"{}\" with ID {}", album.name, album.id);
                        counts.albums_created += 1;
                    }
                    Err(err) => {
                        error!("Failed to create album \"{}\"", name);
                        error!("{}", err);
                    }
                }
            }
            Classification::Empty | Classification::Ambiguous => {
                debug!(
                    "Skipping \"{}\": {:?} ({} subfolders, {} media files)",
                    subdir.display(),
                    profile.classification,
                    profile.subfolder_count,
                    profile.media_file_count,
                );
            }
        }
    }

    Ok(counts)
}

/// Compare the pre-pass totals against what was actually created. A
/// mismatch means one or more creations failed during the run; it is
/// reported, never fatal.
pub fn reconcile(expected: &ExpectedCounts, actual: &MirrorCounts) -> bool {
    let folders_ok = expected.folders == actual.folders_created;
    if folders_ok {
        info!(
            "Folders created: {}. Expected {}.",
            actual.folders_created, expected.folders
        );
    } else {
        error!(
            "Folders created: {}. Expected {}.",
            actual.folders_created, expected.folders
        );
    }

    let albums_ok = expected.albums == actual.albums_created;
    if albums_ok {
        info!(
            "Albums created: {}. Expected {}.",
            actual.albums_created, expected.albums
        );
    } else {
        error!(
            "Albums created: {}. Expected {}.",
            actual.albums_created, expected.albums
        );
    }

    folders_ok && albums_ok
}
