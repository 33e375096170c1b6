use crate::areas::repository::Repository;
use crate::areas::store_error::StoreError;
use crate::artifacts::diff::diff_target::DiffTarget;
use crate::artifacts::diff::diff_view::DiffView;
use std::path::Path;

impl Repository {
    /// Diffs stored version `version` of `file` against its current content.
    /// A file deleted since then diffs against nothing.
    pub async fn version_diff(&self, file: &Path, version: u32) -> anyhow::Result<()> {
        tracing::info!(file = %file.display(), version, "comparing stored version");

        let stored = DiffTarget::from_version(file, version, self.versions());
        let current = async {
            match DiffTarget::from_file(file, self.workspace()).await {
                Err(StoreError::FileNotFound(_)) => Ok(DiffTarget::from_nothing()),
                other => other,
            }
        };

        let (stored, current) = tokio::try_join!(stored, current)?;
        let view = self
            .compute_view(DiffView::new(stored, current, self.options().threshold))
            .await?;

        self.print_diff_view(&view)
    }
}
