use crate::areas::repository::Repository;
use colored::Colorize;
use std::io::Write;

impl Repository {
    pub async fn conflicts(&self) -> anyhow::Result<()> {
        let copies = self.workspace().list_conflict_copies()?;

        if copies.is_empty() {
            writeln!(self.writer(), "No conflict copies found")?;
            return Ok(());
        }

        for copy in copies {
            let original_exists = self.workspace().exists(copy.original()).await?;
            let original = if original_exists {
                copy.original().display().to_string().normal()
            } else {
                format!("{} (missing)", copy.original().display()).yellow()
            };

            writeln!(
                self.writer(),
                "{}  {}  {}",
                copy.date(),
                copy.path().display().to_string().red(),
                original
            )?;
        }

        Ok(())
    }
}
