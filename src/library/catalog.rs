use super::{AlbumHandle, AlbumRecord, ContainerKind, FolderHandle, PhotoLibrary};
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
struct FolderEntry {
    id: u64,
    name: String,
    parent: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
struct AlbumEntry {
    id: u64,
    name: String,
    parent: Option<u64>,
    #[serde(default)]
    files: Vec<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogData {
    next_id: u64,
    folders: Vec<FolderEntry>,
    albums: Vec<AlbumEntry>,
}

/// JSON-file backed container catalog. Every creation is persisted before
/// the call returns, so an interrupted run leaves an accurate record of what
/// was actually created.
#[derive(Debug)]
pub struct JsonCatalog {
    path: PathBuf,
    data: CatalogData,
}

impl JsonCatalog {
    /// Open an existing catalog file, or start a new empty catalog when the
    /// file does not exist yet. The parent directory must already exist.
    pub fn open(path: &Path) -> Result<Self, Error> {
        let open_err = |reason: String| Error::LibraryOpen {
            path: path.display().to_string(),
            reason,
        };

        let data = if path.exists() {
            let raw = fs::read_to_string(path).map_err(|e| open_err(e.to_string()))?;
            serde_json::from_str(&raw).map_err(|e| open_err(e.to_string()))?
        } else {
            match path.parent() {
                Some(parent) if parent.as_os_str().is_empty() || parent.is_dir() => {
                    CatalogData::default()
                }
                _ => return Err(open_err("parent directory does not exist".to_string())),
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            data,
        })
    }

    fn save(&self) -> Result<(), Error> {
        let raw = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    fn next_id(&mut self) -> u64 {
        self.data.next_id += 1;
        self.data.next_id
    }

    fn folder_exists(&self, id: u64) -> bool {
        self.data.folders.iter().any(|f| f.id == id)
    }

    /// A name is taken when any container, folder or album, already uses it
    /// under the same parent.
    fn name_taken(&self, name: &str, parent: Option<u64>) -> bool {
        self.data
            .folders
            .iter()
            .any(|f| f.parent == parent && f.name == name)
            || self
                .data
                .albums
                .iter()
                .any(|a| a.parent == parent && a.name == name)
    }

    /// Folder-name chain from the root down to (and including) `folder_id`.
    fn folder_chain(&self, folder_id: Option<u64>) -> Vec<String> {
        let mut chain = Vec::new();
        let mut current = folder_id;
        while let Some(id) = current {
            match self.data.folders.iter().find(|f| f.id == id) {
                Some(folder) => {
                    chain.push(folder.name.clone());
                    current = folder.parent;
                }
                None => break,
            }
        }
        chain.reverse();
        chain
    }

    fn album_path(&self, album: &AlbumEntry) -> Vec<String> {
        let mut path = self.folder_chain(album.parent);
        path.push(album.name.clone());
        path
    }

    /// Record media file names against the album at `album_path` (folder
    /// chain plus album name), as the import step or a re-import tool
    /// consuming the missing-items report would. Names already present are
    /// kept once.
    pub fn record_media(&mut self, album_path: &[&str], names: &[&str]) -> Result<(), Error> {
        let idx = self
            .data
            .albums
            .iter()
            .position(|a| {
                self.album_path(a)
                    .iter()
                    .map(String::as_str)
                    .eq(album_path.iter().copied())
            })
            .ok_or_else(|| {
                Error::Other(format!("no album at path \"{}\"", album_path.join("/")))
            })?;

        let album = &mut self.data.albums[idx];
        for name in names {
            if !album.files.iter().any(|f| f == name) {
                album.files.push(name.to_string());
            }
        }
        self.save()
    }
}

impl PhotoLibrary for JsonCatalog {
    fn create_folder(
        &mut self,
        name: &str,
        parent: Option<&FolderHandle>,
    ) -> Result<FolderHandle, Error> {
        let parent_id = parent.map(|p| p.id);
        let create_err = |reason: String| Error::ContainerCreate {
            kind: ContainerKind::Folder,
            name: name.to_string(),
            reason,
        };

        if let Some(id) = parent_id {
            if !self.folder_exists(id) {
                return Err(create_err(format!("parent folder {} does not exist", id)));
            }
        }
        if self.name_taken(name, parent_id) {
            return Err(create_err(
                "a container with this name already exists here".to_string(),
            ));
        }

        let id = self.next_id();
        self.data.folders.push(FolderEntry {
            id,
            name: name.to_string(),
            parent: parent_id,
        });
        self.save()?;

        Ok(FolderHandle {
            id,
            name: name.to_string(),
        })
    }

    fn create_album(
        &mut self,
        name: &str,
        parent: Option<&FolderHandle>,
    ) -> Result<AlbumHandle, Error> {
        let parent_id = parent.map(|p| p.id);
        let create_err = |reason: String| Error::ContainerCreate {
            kind: ContainerKind::Album,
            name: name.to_string(),
            reason,
        };

        if let Some(id) = parent_id {
            if !self.folder_exists(id) {
                return Err(create_err(format!("parent folder {} does not exist", id)));
            }
        }
        if self.name_taken(name, parent_id) {
            return Err(create_err(
                "a container with this name already exists here".to_string(),
            ));
        }

        let id = self.next_id();
        self.data.albums.push(AlbumEntry {
            id,
            name: name.to_string(),
            parent: parent_id,
            files: Vec::new(),
        });
        self.save()?;

        Ok(AlbumHandle {
            id,
            name: name.to_string(),
        })
    }

    fn albums(&self) -> Vec<AlbumRecord> {
        self.data
            .albums
            .iter()
            .map(|a| AlbumRecord {
                id: a.id,
                name: a.name.clone(),
                path: self.album_path(a),
                file_names: a.files.clone(),
            })
            .collect()
    }
}
