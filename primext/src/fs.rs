//! Filesystem path helpers.

use std::fs::{self, OpenOptions};
use std::path::{self, Component, Path, PathBuf};

use log::debug;

use crate::error::Result;

/// Longest single path component accepted by common filesystems, in bytes.
const MAX_COMPONENT_LEN: usize = 255;

/// Create `path` as an empty file (`is_file`) or as a directory tree, unless
/// something already exists there.
///
/// Existing files are never truncated. Parent directories of a file are not
/// created. Returns the path for chaining.
pub fn create_if_not_exists(path: impl AsRef<Path>, is_file: bool) -> Result<PathBuf> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(path.to_path_buf());
    }

    if is_file {
        debug!("creating file {}", path.display());
        OpenOptions::new().write(true).create_new(true).open(path)?;
    } else {
        debug!("creating directory {}", path.display());
        fs::create_dir_all(path)?;
    }
    Ok(path.to_path_buf())
}

/// Whether `path` is a well-formed path name.
///
/// The path must be non-empty, resolvable to an absolute form, free of NUL
/// bytes, and every component must fit in 255 bytes. The path does not need
/// to exist.
pub fn has_valid_name(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    if path::absolute(path).is_err() {
        return false;
    }
    path.components().all(|component| match component {
        Component::Normal(name) => {
            let bytes = name.as_encoded_bytes();
            !bytes.is_empty() && bytes.len() <= MAX_COMPONENT_LEN && !bytes.contains(&0)
        }
        _ => true,
    })
}

/// Whether `name` is a valid file name. See [`has_valid_name`].
pub fn is_valid_filename(name: &str) -> bool {
    has_valid_name(Path::new(name))
}

/// The absolute parent directory of `path`, or `None` at the filesystem root.
pub fn parent_folder(path: impl AsRef<Path>) -> Option<PathBuf> {
    path::absolute(path.as_ref())
        .ok()?
        .parent()
        .map(Path::to_path_buf)
}
