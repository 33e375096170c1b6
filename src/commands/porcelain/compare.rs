use crate::areas::repository::Repository;
use crate::artifacts::diff::diff_target::DiffTarget;
use crate::artifacts::diff::diff_view::DiffView;
use std::path::Path;

impl Repository {
    pub async fn compare(&self, old: &Path, new: &Path) -> anyhow::Result<()> {
        tracing::info!(old = %old.display(), new = %new.display(), "comparing files");

        let (old, new) = tokio::try_join!(DiffTarget::from_path(old), DiffTarget::from_path(new))?;
        let view = self
            .compute_view(DiffView::new(old, new, self.options().threshold))
            .await?;

        self.print_diff_view(&view)
    }
}
