//! Directory entries and sorted listing

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::{TreeError, TreeResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl Entry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// List the immediate children of `dir`, sorted by raw name bytes.
///
/// Symlinks are resolved when deciding the kind, and a symlinked directory
/// gets its canonical path so that following a link cycle never piles up
/// links inside one path. Dangling symlinks, sockets, FIFOs and devices are
/// left out; any other failure to stat a child is an error.
pub fn read_entries(dir: &Path) -> TreeResult<Vec<Entry>> {
    let read_dir = fs::read_dir(dir).map_err(|e| TreeError::from_io(dir, e))?;

    let mut raw = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = dir_entry.map_err(|e| TreeError::from_io(dir, e))?;
        let path = dir_entry.path();
        let is_symlink = dir_entry
            .file_type()
            .map_err(|e| TreeError::from_io(&path, e))?
            .is_symlink();
        raw.push((dir_entry.file_name(), path, is_symlink));
    }
    raw.sort_by(|a, b| a.0.cmp(&b.0));

    let mut entries = Vec::with_capacity(raw.len());
    for (file_name, path, is_symlink) in raw {
        let meta = match fs::metadata(&path) {
            Ok(meta) => meta,
            Err(e) if is_symlink && e.kind() == io::ErrorKind::NotFound => {
                trace!(path = %path.display(), "dangling symlink");
                continue;
            }
            Err(e) => return Err(TreeError::from_io(&path, e)),
        };

        let kind = if meta.is_dir() {
            EntryKind::Directory
        } else if meta.is_file() {
            EntryKind::File
        } else {
            continue;
        };

        let path = if is_symlink && kind == EntryKind::Directory {
            fs::canonicalize(&path).map_err(|e| TreeError::from_io(&path, e))?
        } else {
            path
        };

        entries.push(Entry {
            name: file_name.to_string_lossy().into_owned(),
            path,
            kind,
        });
    }

    Ok(entries)
}

/// Check that `root` is an existing, listable directory.
pub fn ensure_directory(root: &Path) -> TreeResult<()> {
    let meta = fs::metadata(root).map_err(|e| TreeError::from_io(root, e))?;
    if !meta.is_dir() {
        return Err(TreeError::NotADirectory(root.to_path_buf()));
    }
    Ok(())
}
