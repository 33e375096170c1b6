use crate::artifacts::conflict::{CONFLICT_COPY_REGEX, CONFLICT_DATE_FORMAT};
use anyhow::Context;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// A conflict copy sitting next to the file it diverged from.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConflictCopy {
    path: PathBuf,
    original: PathBuf,
    date: NaiveDate,
}

impl ConflictCopy {
    /// Returns `None` when the file name is not a conflict copy name, including
    /// names whose date part is not a real calendar date.
    pub fn try_parse(path: &Path) -> anyhow::Result<Option<Self>> {
        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            return Ok(None);
        };

        let re = regex::Regex::new(CONFLICT_COPY_REGEX)
            .with_context(|| format!("invalid conflict copy regex: {CONFLICT_COPY_REGEX}"))?;

        let Some(caps) = re.captures(file_name) else {
            return Ok(None);
        };

        let Ok(date) = NaiveDate::parse_from_str(&caps["date"], CONFLICT_DATE_FORMAT) else {
            return Ok(None);
        };

        let ext = caps.name("ext").map(|m| m.as_str()).unwrap_or_default();
        let original_name = format!("{}{}", &caps["stem"], ext);

        Ok(Some(Self {
            path: path.to_path_buf(),
            original: path.with_file_name(original_name),
            date,
        }))
    }

    /// Builds the path a conflict copy of `original` made on `date` would have.
    pub fn name_for(original: &Path, date: NaiveDate) -> PathBuf {
        let stem = original
            .file_stem()
            .map(|stem| stem.to_string_lossy())
            .unwrap_or_default();
        let ext = original
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();

        original.with_file_name(format!(
            "{stem} (conflict {}){ext}",
            date.format(CONFLICT_DATE_FORMAT)
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn original(&self) -> &Path {
        &self.original
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}
