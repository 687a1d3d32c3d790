use std::fs;
use std::io;
use std::path::Path;

/// Existence check and write for the generated file, behind a seam so the
/// flow can run against an in-memory store in tests
pub trait FileStore {
    fn exists(&self, path: &Path) -> io::Result<bool>;
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// `FileStore` over the local filesystem
pub struct LocalFileStore;

impl FileStore for LocalFileStore {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        match fs::metadata(path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        log::debug!("writing {} bytes to {}", contents.len(), path.display());
        fs::write(path, contents)
    }
}
