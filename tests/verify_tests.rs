use std::fs;
use tempfile::tempdir;

use photo_mirror::library::{JsonCatalog, PhotoLibrary};
use photo_mirror::verify::{self, MissingItem};
use photo_mirror::{extensions, fs_scan, mirror};

#[test]
fn test_missing_file_reported_with_count_mismatch() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("export");
    fs::create_dir_all(root.join("Trip")).unwrap();
    fs::write(root.join("Trip/a.jpg"), "a").unwrap();
    fs::write(root.join("Trip/b.jpg"), "b").unwrap();

    let mut library = JsonCatalog::open(&tmp.path().join("catalog.json")).unwrap();
    library.create_album("Trip", None).unwrap();
    library.record_media(&["Trip"], &["a.jpg"]).unwrap();

    let report = verify::verify_import(&library, &root).unwrap();

    assert_eq!(report.albums_checked, 1);
    assert_eq!(report.count_mismatches, 1);
    assert_eq!(report.albums_with_problems, vec!["Trip"]);
    assert_eq!(
        report.missing,
        vec![MissingItem {
            album: "Trip".to_string(),
            directory: root.join("Trip").display().to_string(),
            file: "b.jpg".to_string(),
        }]
    );
}

#[test]
fn test_count_mismatch_recorded_even_when_nothing_is_missing() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("export");
    fs::create_dir_all(root.join("Trip")).unwrap();
    fs::write(root.join("Trip/a.jpg"), "a").unwrap();

    let mut library = JsonCatalog::open(&tmp.path().join("catalog.json")).unwrap();
    library.create_album("Trip", None).unwrap();
    // The album holds a file the directory does not: sizes differ but the
    // source-minus-album difference is empty.
    library.record_media(&["Trip"], &["a.jpg", "z.jpg"]).unwrap();

    let report = verify::verify_import(&library, &root).unwrap();

    assert_eq!(report.count_mismatches, 1);
    assert!(report.missing.is_empty());
    assert!(report.albums_with_problems.is_empty());
}

#[test]
fn test_dot_prefixed_files_are_excluded() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("export");
    fs::create_dir_all(root.join("Trip")).unwrap();
    fs::write(root.join("Trip/a.jpg"), "a").unwrap();
    fs::write(root.join("Trip/.DS_Store"), "junk").unwrap();

    let mut library = JsonCatalog::open(&tmp.path().join("catalog.json")).unwrap();
    library.create_album("Trip", None).unwrap();
    library.record_media(&["Trip"], &["a.jpg"]).unwrap();

    let report = verify::verify_import(&library, &root).unwrap();

    assert_eq!(report.count_mismatches, 0);
    assert!(report.missing.is_empty());
}

/// Mirror a tree, record every album's source files as an import would,
/// then verify: nothing should be missing anywhere.
#[test]
fn test_clean_round_trip_has_no_missing_items() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("export");
    fs::create_dir_all(root.join("2020/Jan")).unwrap();
    fs::create_dir_all(root.join("2020/Feb")).unwrap();
    fs::create_dir_all(root.join("Trip")).unwrap();
    fs::write(root.join("2020/Jan/a.jpg"), "a").unwrap();
    fs::write(root.join("2020/Jan/b.jpg"), "b").unwrap();
    fs::write(root.join("2020/Feb/c.mov"), "c").unwrap();
    fs::write(root.join("Trip/d.jpg"), "d").unwrap();

    let media_extensions = extensions::collect_extensions(&root).unwrap();
    let mut library = JsonCatalog::open(&tmp.path().join("catalog.json")).unwrap();
    mirror::mirror_tree(&root, None, &mut library, &media_extensions).unwrap();

    // Stand in for the import step: record each album's source files.
    for album in library.albums() {
        let album_dir = album
            .path
            .iter()
            .fold(root.clone(), |dir, part| dir.join(part));
        let names: Vec<String> = fs_scan::list_files(&album_dir)
            .unwrap()
            .iter()
            .filter_map(|f| f.file_name().and_then(|s| s.to_str()).map(String::from))
            .collect();
        let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let path_refs: Vec<&str> = album.path.iter().map(String::as_str).collect();
        library.record_media(&path_refs, &name_refs).unwrap();
    }

    let report = verify::verify_import(&library, &root).unwrap();

    assert_eq!(report.albums_checked, 3);
    assert_eq!(report.count_mismatches, 0);
    assert!(report.missing.is_empty());
    assert!(report.albums_with_problems.is_empty());
}
