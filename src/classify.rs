use crate::extensions::ExtensionSet;
use crate::fs_scan;
use std::io;
use std::path::Path;

/// Structural role of a source directory, derived from its immediate
/// children only. Total and mutually exclusive over the four cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Contains subdirectories and no media files; becomes a folder.
    Folder,
    /// Contains media files and no subdirectories; becomes an album.
    Album,
    /// No media files, no subdirectories; skipped.
    Empty,
    /// Contains both; has no valid single role and must be resolved manually
    /// before mirroring.
    Ambiguous,
}

/// Classification plus the counts it was derived from.
#[derive(Debug)]
pub struct DirProfile {
    pub subfolder_count: usize,
    pub media_file_count: usize,
    pub media_file_names: Vec<String>,
    pub classification: Classification,
}

pub fn classify_counts(subfolder_count: usize, media_file_count: usize) -> Classification {
    match (subfolder_count > 0, media_file_count > 0) {
        (true, false) => Classification::Folder,
        (false, true) => Classification::Album,
        (true, true) => Classification::Ambiguous,
        (false, false) => Classification::Empty,
    }
}

/// True when the file's extension is in the run's extension set. Files with
/// no extension are never media.
pub fn is_media_file(path: &Path, extensions: &ExtensionSet) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| extensions.contains(ext))
}

/// Profile a single directory from its immediate children. No recursion —
/// grandchildren never influence the result. The ambiguity scan, the
/// expected-count pre-pass and the live mirror pass all go through here so
/// their outputs agree by construction.
pub fn profile_directory(dir: &Path, extensions: &ExtensionSet) -> io::Result<DirProfile> {
    let subfolder_count = fs_scan::list_subdirectories(dir)?.len();

    let media_file_names: Vec<String> = fs_scan::list_files(dir)?
        .iter()
        .filter(|f| is_media_file(f, extensions))
        .filter_map(|f| f.file_name().and_then(|s| s.to_str()).map(String::from))
        .collect();
    let media_file_count = media_file_names.len();

    Ok(DirProfile {
        subfolder_count,
        media_file_count,
        media_file_names,
        classification: classify_counts(subfolder_count, media_file_count),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_counts_truth_table() {
        assert_eq!(classify_counts(1, 0), Classification::Folder);
        assert_eq!(classify_counts(3, 0), Classification::Folder);
        assert_eq!(classify_counts(0, 1), Classification::Album);
        assert_eq!(classify_counts(0, 42), Classification::Album);
        assert_eq!(classify_counts(2, 5), Classification::Ambiguous);
        assert_eq!(classify_counts(0, 0), Classification::Empty);
    }

    #[test]
    fn test_is_media_file_requires_known_extension() {
        let extensions: ExtensionSet = ["jpg".to_string()].into_iter().collect();
        assert!(is_media_file(Path::new("/x/a.jpg"), &extensions));
        assert!(!is_media_file(Path::new("/x/a.png"), &extensions));
        assert!(!is_media_file(Path::new("/x/notes"), &extensions));
        assert!(!is_media_file(Path::new("/x/.DS_Store"), &extensions));
    }
}
