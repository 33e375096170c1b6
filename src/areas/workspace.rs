use crate::areas::store_error::{StoreError, StoreResult};
use crate::areas::versions::VERSIONS_DIR;
use crate::artifacts::conflict::conflict_copy::ConflictCopy;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 2] = [VERSIONS_DIR, ".git"];
const UTF8_BOM: [u8; 3] = [0xef, 0xbb, 0xbf];
const UTF16_LE_BOM: [u8; 2] = [0xff, 0xfe];
const UTF16_BE_BOM: [u8; 2] = [0xfe, 0xff];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Joins a sync path onto the root. A leading `/` is accepted the way the
    /// server writes paths; `..`, other absolute forms and symlinks leading
    /// out of the root are refused.
    pub async fn resolve(&self, file: &Path) -> StoreResult<PathBuf> {
        let full_path = self.path.join(relative_sync_path(file)?);
        ensure_inside(&self.path, &full_path, file).await?;

        Ok(full_path)
    }

    pub async fn exists(&self, file: &Path) -> StoreResult<bool> {
        let full_path = self.resolve(file).await?;
        tokio::fs::try_exists(&full_path)
            .await
            .map_err(|source| StoreError::Io {
                path: file.to_path_buf(),
                source,
            })
    }

    pub async fn read_text(&self, file: &Path) -> StoreResult<String> {
        let full_path = self.resolve(file).await?;
        tracing::debug!(path = %full_path.display(), "reading current content");

        read_text_file(&full_path, file).await
    }

    /// Every conflict copy under the root, sorted by path, with paths
    /// relative to the root.
    pub fn list_conflict_copies(&self) -> anyhow::Result<Vec<ConflictCopy>> {
        let mut copies = Vec::new();

        let entries = WalkDir::new(&self.path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !Self::is_ignored(entry.file_name().to_str()))
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file());

        for entry in entries {
            let relative = entry.path().strip_prefix(self.path.as_ref())?;
            if let Some(copy) = ConflictCopy::try_parse(relative)? {
                copies.push(copy);
            }
        }

        copies.sort();
        tracing::debug!(count = copies.len(), "found conflict copies");

        Ok(copies)
    }

    fn is_ignored(name: Option<&str>) -> bool {
        name.is_some_and(|name| IGNORED_PATHS.contains(&name))
    }
}

pub(crate) fn relative_sync_path(file: &Path) -> StoreResult<PathBuf> {
    let mut relative = PathBuf::new();

    for component in file.components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir | Component::RootDir if relative.as_os_str().is_empty() => {}
            _ => return Err(StoreError::PathOutsideRoot(file.to_path_buf())),
        }
    }

    if relative.as_os_str().is_empty() {
        return Err(StoreError::PathOutsideRoot(file.to_path_buf()));
    }

    Ok(relative)
}

/// Fails when `full_path` exists but its real location, with symlinks
/// followed, is outside `root`. Missing paths pass and are reported by the
/// read that follows.
pub(crate) async fn ensure_inside(root: &Path, full_path: &Path, file: &Path) -> StoreResult<()> {
    let (Ok(root), Ok(target)) = tokio::join!(
        tokio::fs::canonicalize(root),
        tokio::fs::canonicalize(full_path)
    ) else {
        return Ok(());
    };

    if target.starts_with(&root) {
        Ok(())
    } else {
        tracing::warn!(
            path = %file.display(),
            target = %target.display(),
            "symlink leaves the sync root"
        );
        Err(StoreError::PathOutsideRoot(file.to_path_buf()))
    }
}

/// Reads a file as text, reporting errors against `display_path`.
pub async fn read_text_file(full_path: &Path, display_path: &Path) -> StoreResult<String> {
    let bytes = tokio::fs::read(full_path).await.map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            StoreError::FileNotFound(display_path.to_path_buf())
        } else {
            StoreError::Io {
                path: display_path.to_path_buf(),
                source,
            }
        }
    })?;

    decode_text(&bytes).ok_or_else(|| StoreError::NotText(display_path.to_path_buf()))
}

/// Decodes UTF-16 behind a byte order mark, otherwise UTF-8 with invalid
/// sequences replaced. Returns `None` for binary content, which is anything
/// without a UTF-16 mark that holds a NUL byte.
pub fn decode_text(bytes: &[u8]) -> Option<String> {
    if let Some(body) = bytes.strip_prefix(&UTF16_LE_BOM) {
        return Some(decode_utf16(body, u16::from_le_bytes));
    }
    if let Some(body) = bytes.strip_prefix(&UTF16_BE_BOM) {
        return Some(decode_utf16(body, u16::from_be_bytes));
    }

    let bytes = bytes.strip_prefix(&UTF8_BOM).unwrap_or(bytes);
    if bytes.contains(&0) {
        return None;
    }

    Some(String::from_utf8_lossy(bytes).into_owned())
}

fn decode_utf16(body: &[u8], unit: fn([u8; 2]) -> u16) -> String {
    let chunks = body.chunks_exact(2);
    let odd_tail = !chunks.remainder().is_empty();
    let units = chunks
        .map(|pair| unit([pair[0], pair[1]]))
        .collect::<Vec<_>>();

    let mut text = String::from_utf16_lossy(&units);
    if odd_tail {
        text.push(char::REPLACEMENT_CHARACTER);
    }
    text
}
