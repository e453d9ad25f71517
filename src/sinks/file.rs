//! File sink implementation

use crate::core::{LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Appends records to a file, creating it if needed.
///
/// Writes go straight to the file; nothing is buffered in between.
#[derive(Debug)]
pub struct FileSink {
    file: File,
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;

        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Write for FileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.file.sync_data();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_appends_across_opens() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("app.log");

        let mut sink = FileSink::new(&path).unwrap();
        sink.write_all(b"one\n").unwrap();
        drop(sink);

        let mut sink = FileSink::new(&path).unwrap();
        assert_eq!(sink.path(), path.as_path());
        sink.write_all(b"two\n").unwrap();
        drop(sink);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_missing_directory_is_io_operation_error() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let err = FileSink::new(dir.path().join("missing").join("app.log")).unwrap_err();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("opening log file"));
    }
}
