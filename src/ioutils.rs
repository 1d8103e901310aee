use std::fs::OpenOptions;
use std::io;
use std::path::Path;

/// True when anything (file, folder or dangling symlink) occupies the path.
pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().symlink_metadata().is_ok()
}

/// Creates a single directory. Fails if the path already exists or its parent is missing.
pub fn create_dir<P: AsRef<Path>>(dest_path: P) -> io::Result<()> {
    let dest_path = dest_path.as_ref();
    log::debug!("Creating directory: {}", dest_path.display());
    std::fs::create_dir(dest_path)
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> io::Result<()> {
    let dest_path = dest_path.as_ref();
    log::debug!("Creating directory tree: {}", dest_path.display());
    std::fs::create_dir_all(dest_path)
}

/// Creates an empty file. An existing file is an error and is left untouched.
pub fn create_empty_file<P: AsRef<Path>>(dest_path: P) -> io::Result<()> {
    let dest_path = dest_path.as_ref();
    log::debug!("Creating empty file: {}", dest_path.display());
    OpenOptions::new().write(true).create_new(true).open(dest_path).map(|_| ())
}

/// Writes content to a file, creating parent directories if needed.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> io::Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            create_dir_all(parent)?;
        }
    }
    log::debug!("Writing file: {}", dest_path.display());
    std::fs::write(dest_path, content)
}

pub fn remove_dir_all<P: AsRef<Path>>(dest_path: P) -> io::Result<()> {
    let dest_path = dest_path.as_ref();
    log::debug!("Removing directory tree: {}", dest_path.display());
    std::fs::remove_dir_all(dest_path)
}
