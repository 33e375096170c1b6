use crate::areas::store_error::{StoreError, StoreResult};
use crate::areas::workspace::{ensure_inside, read_text_file, relative_sync_path};
use chrono::{DateTime, Utc};
use derive_new::new;
use std::path::{Path, PathBuf};

pub const VERSIONS_DIR: &str = "_versions";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, new)]
pub struct VersionInfo {
    pub version: u32,
    pub size: u64,
    pub modified: Option<DateTime<Utc>>,
}

/// Previous versions of synced files, stored as `_versions/<path>/<n>`.
#[derive(Debug)]
pub struct VersionStore {
    path: Box<Path>,
}

impl VersionStore {
    pub fn new(path: Box<Path>) -> Self {
        VersionStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn version_path(&self, file: &Path, version: u32) -> StoreResult<PathBuf> {
        if version == 0 {
            return Err(StoreError::InvalidVersion(version));
        }

        Ok(self
            .path
            .join(relative_sync_path(file)?)
            .join(version.to_string()))
    }

    pub async fn read_version(&self, file: &Path, version: u32) -> StoreResult<String> {
        let version_path = self.version_path(file, version)?;
        ensure_inside(&self.path, &version_path, file).await?;
        tracing::debug!(path = %version_path.display(), version, "reading stored version");

        read_text_file(&version_path, file)
            .await
            .map_err(|err| match err {
                StoreError::FileNotFound(path) => StoreError::VersionNotFound { path, version },
                other => other,
            })
    }

    /// Stored versions of `file` in ascending order. A file that was never
    /// overwritten has none.
    pub async fn list_versions(&self, file: &Path) -> StoreResult<Vec<VersionInfo>> {
        let dir = self.path.join(relative_sync_path(file)?);
        ensure_inside(&self.path, &dir, file).await?;
        let io_error = |source: std::io::Error| StoreError::Io {
            path: file.to_path_buf(),
            source,
        };

        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(io_error(err)),
        };

        let mut versions = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
            let Some(version) = entry
                .file_name()
                .to_str()
                .and_then(|name| name.parse::<u32>().ok())
                .filter(|version| *version > 0)
            else {
                continue;
            };

            let metadata = entry.metadata().await.map_err(io_error)?;
            if !metadata.is_file() {
                continue;
            }

            let modified = metadata.modified().ok().map(DateTime::<Utc>::from);
            versions.push(VersionInfo::new(version, metadata.len(), modified));
        }

        versions.sort();
        Ok(versions)
    }
}
