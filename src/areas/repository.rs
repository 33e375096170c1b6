use crate::DiffOptions;
use crate::areas::versions::{VERSIONS_DIR, VersionStore};
use crate::areas::workspace::Workspace;
use crate::artifacts::diff::diff_view::DiffView;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
    versions: VersionStore,
    options: DiffOptions,
}

impl Repository {
    pub fn new(
        path: &Path,
        writer: Box<dyn std::io::Write>,
        options: DiffOptions,
    ) -> anyhow::Result<Self> {
        let path = path
            .canonicalize()
            .with_context(|| format!("sync root {} does not exist", path.display()))?;

        if !path.is_dir() {
            anyhow::bail!("sync root {} is not a directory", path.display());
        }

        let workspace = Workspace::new(path.clone().into_boxed_path());
        let versions = VersionStore::new(path.join(VERSIONS_DIR).into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            workspace,
            versions,
            options,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn versions(&self) -> &VersionStore {
        &self.versions
    }

    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    /// Runs the diff on the blocking pool so a large exact-path table does not
    /// stall the runtime.
    pub async fn compute_view(&self, mut view: DiffView) -> anyhow::Result<DiffView> {
        let view = tokio::task::spawn_blocking(move || {
            view.compute();
            view
        })
        .await
        .context("diff task failed")?;

        Ok(view)
    }
}
