use crate::areas::store_error::StoreResult;
use crate::areas::versions::VersionStore;
use crate::areas::workspace::{Workspace, read_text_file};
use derive_new::new;
use std::path::Path;

const NULL_PATH: &str = "/dev/null";

/// One side of a comparison: where the text came from and the text itself.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffTarget {
    pub(crate) label: String,
    pub(crate) content: Option<String>,
}

impl DiffTarget {
    pub async fn from_file(file: &Path, workspace: &Workspace) -> StoreResult<Self> {
        let content = workspace.read_text(file).await?;

        Ok(Self {
            label: file.display().to_string(),
            content: Some(content),
        })
    }

    pub async fn from_version(
        file: &Path,
        version: u32,
        versions: &VersionStore,
    ) -> StoreResult<Self> {
        let content = versions.read_version(file, version).await?;

        Ok(Self {
            label: format!("{} (version {version})", file.display()),
            content: Some(content),
        })
    }

    /// A file outside the sync root, addressed as given on the command line.
    pub async fn from_path(path: &Path) -> StoreResult<Self> {
        let content = read_text_file(path, path).await?;

        Ok(Self {
            label: path.display().to_string(),
            content: Some(content),
        })
    }

    pub fn from_nothing() -> Self {
        Self {
            label: NULL_PATH.to_string(),
            content: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The text to diff; an absent side diffs as the empty text.
    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }
}
