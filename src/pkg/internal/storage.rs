use std::path::{Path, PathBuf};

use tokio::{fs, io::AsyncWriteExt};

use crate::prelude::{AppError, Result};

/// Directory that uploaded files are written into, one file per upload.
/// An existing file with the same name is replaced.
#[derive(Debug, Clone)]
pub struct DiskStorage {
    root: PathBuf,
}

impl DiskStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DiskStorage { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn persist(&self, name: &str, data: &[u8]) -> Result<PathBuf> {
        let name = safe_file_name(name)?;
        fs::create_dir_all(&self.root).await?;
        let path = self.root.join(name);
        let mut file = fs::File::create(&path).await?;
        file.write_all(data).await?;
        file.flush().await?;
        tracing::debug!("stored {} bytes at {}", data.len(), path.display());
        Ok(path)
    }
}

/// Accepts only a single plain path component.
pub fn safe_file_name(raw: &str) -> Result<&str> {
    let name = raw.trim();
    let unsafe_name = name.is_empty()
        || name == "."
        || name.contains("..")
        || name.contains(['/', '\\', '\0']);
    if unsafe_name {
        return Err(AppError::InvalidFileName(raw.to_string()));
    }
    Ok(name)
}
