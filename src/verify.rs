use crate::error::Error;
use crate::fs_scan;
use crate::library::PhotoLibrary;
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Progress checkpoint interval: the first album, then every Nth, then the
/// last.
pub const PROGRESS_INTERVAL: usize = 20;

/// One source file absent from its corresponding album. Field names double
/// as the CSV report's column headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingItem {
    #[serde(rename = "Album")]
    pub album: String,
    #[serde(rename = "Directory")]
    pub directory: String,
    #[serde(rename = "File")]
    pub file: String,
}

#[derive(Debug, Default)]
pub struct VerifyReport {
    pub albums_checked: usize,
    pub count_mismatches: usize,
    pub missing: Vec<MissingItem>,
    pub albums_with_problems: Vec<String>,
}

/// Compare every album in the library against its corresponding source
/// directory under `export_root`.
///
/// The album's hierarchical path (parent folder chain plus its name) is
/// joined under the export root to recover the source directory. Source
/// file names beginning with a dot (.DS_Store and friends) are excluded.
/// A size difference between the two name-sets is recorded as a count
/// mismatch even when the missing set ends up empty; every source name
/// absent from the album becomes a `MissingItem`. Nothing here is fatal —
/// the report is for manual remediation.
pub fn verify_import(
    library: &dyn PhotoLibrary,
    export_root: &Path,
) -> Result<VerifyReport, Error> {
    let albums = library.albums();
    let total = albums.len();
    let mut report = VerifyReport::default();

    for album in &albums {
        let album_path = album.path_str();
        debug!("Album: {}", album_path);

        let album_dir: PathBuf = album
            .path
            .iter()
            .fold(export_root.to_path_buf(), |dir, part| dir.join(part));
        debug!("Directory: {}", album_dir.display());

        let files_in_dir: Vec<String> = fs_scan::list_files(&album_dir)?
            .iter()
            .filter_map(|f| f.file_name().and_then(|s| s.to_str()).map(String::from))
            .filter(|name| !name.starts_with('.'))
            .collect();

        let files_in_album: HashSet<&str> =
            album.file_names.iter().map(String::as_str).collect();

        if album.file_names.len() != files_in_dir.len() {
            report.count_mismatches += 1;
            error!(
                "COUNT MISMATCH: Directory \"{}\" contains {} files but album \"{}\" contains {} files.",
                album_dir.display(),
                files_in_dir.len(),
                album_path,
                album.file_names.len(),
            );
        } else {
            debug!(
                "COUNTS OK: Directory \"{}\" contains {} files. Album \"{}\" also contains {} files.",
                album_dir.display(),
                files_in_dir.len(),
                album_path,
                album.file_names.len(),
            );
        }

        let mut items_missing = 0;
        for name in &files_in_dir {
            if !files_in_album.contains(name.as_str()) {
                items_missing += 1;
                report.missing.push(MissingItem {
                    album: album_path.clone(),
                    directory: album_dir.display().to_string(),
                    file: name.clone(),
                });
                error!("{} not found in album \"{}\"", name, album_path);
            }
        }

        if items_missing > 0 {
            report.albums_with_problems.push(album_path.clone());
            error!("Album \"{}\" is missing {} items.", album_path, items_missing);
        }

        report.albums_checked += 1;
        if report.albums_checked == 1
            || report.albums_checked % PROGRESS_INTERVAL == 0
            || report.albums_checked == total
        {
            info!("Checked {} of {} albums.", report.albums_checked, total);
        }
    }

    info!("{} albums are missing items.", report.albums_with_problems.len());

    if !report.albums_with_problems.is_empty() {
        debug!("ALBUMS MISSING ITEMS:");
        let mut sorted = report.albums_with_problems.clone();
        sorted.sort();
        for album in &sorted {
            debug!("{}", album);
        }
    }

    Ok(report)
}
