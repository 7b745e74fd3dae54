use std::path::Path;

use serde::de::DeserializeOwned;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Counts of files written and files left untouched by a copy pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyStats {
    pub copied: usize,
    pub skipped: usize,
}

impl std::ops::AddAssign for CopyStats {
    fn add_assign(&mut self, other: Self) {
        self.copied += other.copied;
        self.skipped += other.skipped;
    }
}

pub fn path_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    std::fs::create_dir_all(dest_path.as_ref()).map_err(Error::IoError)
}

/// Copies a single file under the skip/overwrite policy.
///
/// Existence alone gates the decision: when `force` is false and `dest`
/// already exists the file is left untouched, even if its content differs
/// from the source. Returns whether the destination was written.
pub fn copy_file<P: AsRef<Path>>(source_path: P, dest_path: P, force: bool) -> Result<bool> {
    let source_path = source_path.as_ref();
    let dest_path = dest_path.as_ref();

    if !force && dest_path.exists() {
        log::debug!("Skipping '{}' (already exists)", dest_path.display());
        return Ok(false);
    }

    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::copy(source_path, dest_path).map_err(Error::IoError)?;
    log::debug!("Copied '{}' to '{}'", source_path.display(), dest_path.display());
    Ok(true)
}

/// Writes generated content under the same skip/overwrite policy as
/// [`copy_file`]. Returns whether the destination was written.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P, force: bool) -> Result<bool> {
    let dest_path = dest_path.as_ref();

    if !force && dest_path.exists() {
        log::debug!("Skipping write to '{}' (already exists)", dest_path.display());
        return Ok(false);
    }

    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)?;
    Ok(true)
}

/// Recursively copies `source_dir` into `dest_dir`, applying the per-file
/// policy of [`copy_file`] and accumulating counts.
///
/// The destination directory is always created, even when the source is
/// empty. The copy is additive-only: entries present in the destination but
/// absent from the source are never deleted.
pub fn copy_dir<P: AsRef<Path>>(source_dir: P, dest_dir: P, force: bool) -> Result<CopyStats> {
    let source_dir = source_dir.as_ref();
    let dest_dir = dest_dir.as_ref();
    let mut stats = CopyStats::default();

    create_dir_all(dest_dir)?;

    for entry in WalkDir::new(source_dir).min_depth(1) {
        let entry = entry.map_err(|e| match e.into_io_error() {
            Some(io) => Error::IoError(io),
            None => Error::TemplateError(format!(
                "walk failed under '{}'",
                source_dir.display()
            )),
        })?;
        let rel = entry.path().strip_prefix(source_dir).map_err(|_| {
            Error::TemplateError(format!(
                "entry '{}' is outside '{}'",
                entry.path().display(),
                source_dir.display()
            ))
        })?;
        let target = dest_dir.join(rel);

        if entry.file_type().is_dir() {
            create_dir_all(&target)?;
        } else if copy_file(entry.path(), target.as_path(), force)? {
            stats.copied += 1;
        } else {
            stats.skipped += 1;
        }
    }

    Ok(stats)
}

/// Immediate subdirectory names of `dir_path`, in filesystem listing order.
/// A missing directory yields an empty list, not an error.
pub fn list_subdirectories<P: AsRef<Path>>(dir_path: P) -> Result<Vec<String>> {
    let dir_path = dir_path.as_ref();
    if !dir_path.exists() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir_path).map_err(Error::IoError)? {
        let entry = entry.map_err(Error::IoError)?;
        if entry.file_type().map_err(Error::IoError)?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(names)
}

/// Reads a JSON file and deserializes it into `T`.
pub fn read_json_file<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let content = std::fs::read_to_string(path.as_ref()).map_err(Error::IoError)?;
    serde_json::from_str(&content).map_err(Error::JsonError)
}
