use crate::error::Error;
use std::fmt;

mod catalog;
pub use catalog::JsonCatalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Folder,
    Album,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::Folder => write!(f, "folder"),
            ContainerKind::Album => write!(f, "album"),
        }
    }
}

/// Transient reference to a created folder container, held only while it is
/// the active parent during traversal. The library owns the container.
#[derive(Debug, Clone)]
pub struct FolderHandle {
    pub id: u64,
    pub name: String,
}

/// Transient reference to a created album container.
#[derive(Debug, Clone)]
pub struct AlbumHandle {
    pub id: u64,
    pub name: String,
}

/// An album as the library reports it back: its hierarchical path (parent
/// folder chain plus its own name) and its member file names.
#[derive(Debug, Clone)]
pub struct AlbumRecord {
    pub id: u64,
    pub name: String,
    pub path: Vec<String>,
    pub file_names: Vec<String>,
}

impl AlbumRecord {
    /// Path string as used in logs and the missing-items report.
    pub fn path_str(&self) -> String {
        self.path.join("/")
    }
}

/// The target library collaborator. Folders nest folders and albums; albums
/// hold only media references. `parent: None` means the hierarchy root.
pub trait PhotoLibrary {
    fn create_folder(
        &mut self,
        name: &str,
        parent: Option<&FolderHandle>,
    ) -> Result<FolderHandle, Error>;

    fn create_album(
        &mut self,
        name: &str,
        parent: Option<&FolderHandle>,
    ) -> Result<AlbumHandle, Error>;

    fn albums(&self) -> Vec<AlbumRecord>;
}
