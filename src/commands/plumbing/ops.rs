use crate::areas::repository::Repository;
use crate::artifacts::diff::diff_target::DiffTarget;
use crate::artifacts::diff::diff_view::DiffView;
use std::io::Write;
use std::path::Path;

impl Repository {
    pub async fn ops(&self, old: &Path, new: &Path) -> anyhow::Result<()> {
        let (old, new) = tokio::try_join!(DiffTarget::from_path(old), DiffTarget::from_path(new))?;
        let mut view = self
            .compute_view(DiffView::new(old, new, self.options().threshold))
            .await?;
        let result = view.refresh_if_needed();

        let mut writer = self.writer();
        serde_json::to_writer_pretty(&mut *writer, result)?;
        writeln!(writer)?;

        Ok(())
    }
}
