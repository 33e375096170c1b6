use std::path::PathBuf;

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while reading content out of the sync root.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("version {version} of {} not found", .path.display())]
    VersionNotFound { path: PathBuf, version: u32 },

    #[error("invalid version number: {0} (versions start at 1)")]
    InvalidVersion(u32),

    #[error("{} is not a text file", .0.display())]
    NotText(PathBuf),

    #[error("path escapes the sync root: {}", .0.display())]
    PathOutsideRoot(PathBuf),

    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
