use crate::areas::repository::Repository;
use colored::Colorize;
use std::io::Write;
use std::path::Path;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

impl Repository {
    pub async fn list_versions(&self, file: &Path) -> anyhow::Result<()> {
        let versions = self.versions().list_versions(file).await?;

        if versions.is_empty() {
            writeln!(self.writer(), "No stored versions of {}", file.display())?;
            return Ok(());
        }

        for info in versions {
            let modified = info
                .modified
                .map(|time| time.format(TIMESTAMP_FORMAT).to_string())
                .unwrap_or_else(|| "-".to_string());

            writeln!(
                self.writer(),
                "{}  {:>10} bytes  {}",
                format!("version {}", info.version).yellow(),
                info.size,
                modified
            )?;
        }

        Ok(())
    }
}
