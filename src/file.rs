// src/file.rs

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::error::{Error, Result};

/// Read the page template. A missing file gets its own error so the user sees which one.
pub fn read_template(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "reading template");
    fs::read_to_string(path).map_err(|source| template_error(path, source))
}

fn template_error(path: &Path, source: io::Error) -> Error {
    match source.kind() {
        io::ErrorKind::NotFound => Error::TemplateNotFound(path.to_path_buf()),
        _ => Error::TemplateUnreadable { path: path.to_path_buf(), source },
    }
}

/// Overwrite `path` with `contents` (UTF-8), creating missing parent directories.
/// Returns the path written to.
pub fn write_page(path: &Path, contents: &str) -> Result<PathBuf> {
    let classify = |source: io::Error| output_error(path, source);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(classify)?;
        }
    }
    fs::write(path, contents).map_err(classify)?;
    debug!(path = %path.display(), bytes = contents.len(), "page written");
    Ok(path.to_path_buf())
}

fn output_error(path: &Path, source: io::Error) -> Error {
    match source.kind() {
        io::ErrorKind::PermissionDenied => Error::OutputPermission { path: path.to_path_buf(), source },
        _ => Error::OutputFs { path: path.to_path_buf(), source },
    }
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
