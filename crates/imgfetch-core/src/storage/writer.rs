//! Exclusive-create streaming writer for the saved image.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::FetchError;

use super::unique_path;

/// How many times a path that appeared between check and create is re-resolved.
const CREATE_ATTEMPTS: u32 = 8;

/// Open output file. Consumed by [`finish`](Self::finish) on success or
/// [`discard`](Self::discard) on failure, which removes the partial file.
#[derive(Debug)]
pub struct ImageWriter {
    file: File,
    path: PathBuf,
    bytes_written: u64,
}

impl ImageWriter {
    /// Create `path` exclusively. Fails with `AlreadyExists` if it is present.
    pub fn create_new(path: &Path) -> io::Result<Self> {
        let file = File::options().write(true).create_new(true).open(path)?;
        Ok(Self {
            file,
            path: path.to_path_buf(),
            bytes_written: 0,
        })
    }

    /// Resolve a collision-free path for `filename` inside `dir` and create it.
    ///
    /// If another writer claims the chosen path first, resolution is repeated
    /// instead of overwriting.
    pub fn create_unique(dir: &Path, filename: &str) -> Result<Self, FetchError> {
        let mut last_err = None;
        for _ in 0..CREATE_ATTEMPTS {
            let path = unique_path(dir, filename)?;
            match Self::create_new(&path) {
                Ok(w) => {
                    tracing::debug!(path = %path.display(), "created output file");
                    return Ok(w);
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    tracing::debug!(path = %path.display(), "path claimed concurrently, re-resolving");
                    last_err = Some(e);
                }
                Err(e) => return Err(FetchError::write(e)),
            }
        }
        let e = last_err.unwrap_or_else(|| io::Error::from(io::ErrorKind::AlreadyExists));
        Err(FetchError::write(e))
    }

    /// Append one body chunk. Empty chunks are skipped.
    pub fn write_chunk(&mut self, data: &[u8]) -> io::Result<()> {
        if data.is_empty() {
            return Ok(());
        }
        self.file.write_all(data)?;
        self.bytes_written += data.len() as u64;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Flush to disk and close. On failure the partial file is removed.
    pub fn finish(mut self) -> Result<PathBuf, FetchError> {
        if let Err(e) = self.file.flush().and_then(|()| self.file.sync_all()) {
            self.discard();
            return Err(FetchError::write(e));
        }
        Ok(self.path)
    }

    /// Close and remove the partial file (best effort).
    pub fn discard(self) {
        let Self { file, path, .. } = self;
        drop(file);
        match std::fs::remove_file(&path) {
            Ok(()) => tracing::debug!(path = %path.display(), "removed partial output"),
            Err(e) => tracing::warn!(path = %path.display(), "failed to remove partial output: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_chunks_and_finish() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = ImageWriter::create_unique(dir.path(), "a.png").unwrap();
        w.write_chunk(b"hello ").unwrap();
        w.write_chunk(b"").unwrap();
        w.write_chunk(b"world").unwrap();
        assert_eq!(w.bytes_written(), 11);
        let path = w.finish().unwrap();
        assert_eq!(path, dir.path().join("a.png"));
        assert_eq!(std::fs::read(&path).unwrap(), b"hello world");
    }

    #[test]
    fn create_new_refuses_existing() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("taken.png");
        std::fs::write(&p, b"original").unwrap();
        let err = ImageWriter::create_new(&p).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(std::fs::read(&p).unwrap(), b"original");
    }

    #[test]
    fn create_unique_skips_existing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("taken.png"), b"original").unwrap();
        let w = ImageWriter::create_unique(dir.path(), "taken.png").unwrap();
        assert_eq!(w.path(), dir.path().join("taken-1.png"));
        w.finish().unwrap();
        assert_eq!(std::fs::read(dir.path().join("taken.png")).unwrap(), b"original");
    }

    #[test]
    fn discard_removes_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = ImageWriter::create_unique(dir.path(), "partial.jpg").unwrap();
        w.write_chunk(b"half").unwrap();
        let p = w.path().to_path_buf();
        w.discard();
        assert!(!p.exists());
    }
}
