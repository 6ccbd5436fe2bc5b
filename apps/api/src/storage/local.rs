use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::{validate_name, StorageError, StorageSink};

/// Stores files in a local directory.
///
/// Writes go to a temp file in the same directory and are renamed into place,
/// so a reader never observes a partially written PDF under its final name.
#[derive(Debug, Clone)]
pub struct LocalDiskStorage {
    root: PathBuf,
}

impl LocalDiskStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn write_atomic(root: &Path, name: &str, bytes: &[u8]) -> Result<PathBuf, StorageError> {
        std::fs::create_dir_all(root)?;
        let target = root.join(name);
        let mut tmp = NamedTempFile::new_in(root)?;
        tmp.write_all(bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&target).map_err(|e| StorageError::Persist {
            name: name.to_string(),
            message: e.error.to_string(),
        })?;
        Ok(target)
    }
}

#[async_trait]
impl StorageSink for LocalDiskStorage {
    async fn write(&self, name: &str, bytes: Vec<u8>) -> Result<String, StorageError> {
        validate_name(name)?;
        let root = self.root.clone();
        let owned_name = name.to_string();
        let target = tokio::task::spawn_blocking(move || {
            Self::write_atomic(&root, &owned_name, &bytes)
        })
        .await
        .map_err(|e| StorageError::Io(std::io::Error::other(e)))??;

        debug!(path = %target.display(), "Stored file");
        Ok(target.to_string_lossy().into_owned())
    }

    async fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StorageError> {
        validate_name(name)?;
        match tokio::fs::read(self.root.join(name)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, name: &str) -> Result<(), StorageError> {
        validate_name(name)?;
        let path = self.root.join(name);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                info!(path = %path.display(), "Removed stored file");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_creates_file_with_contents() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalDiskStorage::new(dir.path().join("generated"));
        let location = storage.write("resume_a.pdf", b"%PDF-1.3".to_vec()).await.unwrap();
        assert_eq!(std::fs::read(&location).unwrap(), b"%PDF-1.3");
        assert!(location.ends_with("resume_a.pdf"));
    }

    #[tokio::test]
    async fn test_write_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalDiskStorage::new(dir.path());
        storage.write("resume_b.pdf", vec![1, 2, 3]).await.unwrap();
        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["resume_b.pdf"]);
    }

    #[tokio::test]
    async fn test_delete_removes_and_tolerates_missing() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalDiskStorage::new(dir.path());
        let location = storage.write("resume_c.pdf", vec![0]).await.unwrap();
        storage.delete("resume_c.pdf").await.unwrap();
        assert!(!Path::new(&location).exists());
        storage.delete("resume_c.pdf").await.unwrap();
    }

    #[tokio::test]
    async fn test_read_returns_stored_bytes_or_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalDiskStorage::new(dir.path());
        storage.write("resume_d.pdf", b"%PDF-1.3".to_vec()).await.unwrap();
        assert_eq!(
            storage.read("resume_d.pdf").await.unwrap().as_deref(),
            Some(&b"%PDF-1.3"[..])
        );
        assert!(storage.read("resume_missing.pdf").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_write_rejects_path_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalDiskStorage::new(dir.path());
        let err = storage.write("../escape.pdf", vec![0]).await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidName(_)));
    }
}
