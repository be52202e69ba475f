use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Immediate subdirectories of `dir`, in whatever order the filesystem
/// returns them. A non-directory path yields an empty list.
pub fn list_subdirectories(dir: &Path) -> io::Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut subdirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            subdirs.push(path);
        }
    }
    Ok(subdirs)
}

/// Immediate files of `dir`, symlinks excluded like everything that isn't a
/// plain file. A non-directory path yields an empty list.
pub fn list_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_lists_empty() {
        let missing = Path::new("/no/such/directory/anywhere");
        assert!(list_subdirectories(missing).unwrap().is_empty());
        assert!(list_files(missing).unwrap().is_empty());
    }
}
