use crate::areas::repository::Repository;
use crate::areas::store_error::StoreError;
use crate::artifacts::conflict::conflict_copy::ConflictCopy;
use crate::artifacts::diff::diff_target::DiffTarget;
use crate::artifacts::diff::diff_view::DiffView;
use std::path::Path;

impl Repository {
    /// Diffs the original of a conflict copy against the copy. An original
    /// that no longer exists diffs as nothing.
    pub async fn conflict_diff(&self, copy: &Path) -> anyhow::Result<()> {
        let conflict = ConflictCopy::try_parse(copy)?
            .ok_or_else(|| anyhow::anyhow!("{} is not a conflict copy", copy.display()))?;

        tracing::info!(
            copy = %conflict.path().display(),
            original = %conflict.original().display(),
            "comparing conflict copy"
        );

        let original = async {
            match DiffTarget::from_file(conflict.original(), self.workspace()).await {
                Err(StoreError::FileNotFound(_)) => Ok(DiffTarget::from_nothing()),
                other => other,
            }
        };
        let copy = DiffTarget::from_file(conflict.path(), self.workspace());

        let (original, copy) = tokio::try_join!(original, copy)?;
        let view = self
            .compute_view(DiffView::new(original, copy, self.options().threshold))
            .await?;

        self.print_diff_view(&view)
    }
}
