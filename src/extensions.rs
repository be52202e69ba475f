use std::collections::HashSet;
use std::io;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// The set of file-extension strings (without the dot) observed anywhere in
/// the source tree. Computed once before classification begins and treated
/// as immutable for the rest of the run.
pub type ExtensionSet = HashSet<String>;

/// Walk the full source tree and collect every file extension seen.
///
/// In a clean export only media files carry extensions; incidental files
/// (`.DS_Store` and friends) are dotfiles, which have no extension and are
/// skipped. The whole tree must be scanned up front because extension
/// presence anywhere determines what counts as media everywhere.
pub fn collect_extensions(root: &Path) -> io::Result<ExtensionSet> {
    let mut extensions = HashSet::new();

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(ext) = entry.path().extension().and_then(|s| s.to_str()) {
            if extensions.insert(ext.to_string()) {
                debug!("Found extension \"{}\"", ext);
            }
        }
    }

    Ok(extensions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_collect_extensions_skips_extensionless_and_dotfiles() {
        let tmp = tempdir().unwrap();
        let sub = tmp.path().join("Trip");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("a.jpg"), "x").unwrap();
        fs::write(sub.join("b.MOV"), "x").unwrap();
        fs::write(sub.join("notes"), "x").unwrap();
        fs::write(sub.join(".DS_Store"), "x").unwrap();

        let extensions = collect_extensions(tmp.path()).unwrap();
        assert_eq!(extensions.len(), 2);
        assert!(extensions.contains("jpg"));
        assert!(extensions.contains("MOV"));
    }
}
