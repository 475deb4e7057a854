use crate::areas::index::Index;
use crate::areas::store::{REPOSITORY_DIR, Store};
use crate::areas::workspace::Workspace;
use crate::artifacts::error::{RepositoryError, RepositoryResult};
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn Write>>,
    index: Arc<Mutex<Index>>,
    store: Store,
    workspace: Workspace,
}

impl Repository {
    /// Open the repository rooted at `path`, which is also the working directory
    /// tracked paths are resolved against
    pub fn new(path: &Path, writer: Box<dyn Write>) -> anyhow::Result<Self> {
        if !path.exists() {
            std::fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory {}", path.display()))?;
        }

        let path = path
            .canonicalize()
            .with_context(|| format!("Failed to resolve path {}", path.display()))?;

        let store = Store::new(path.join(REPOSITORY_DIR).into_boxed_path());
        let index = Index::new(store.index_path().into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            index: Arc::new(Mutex::new(index)),
            store,
            workspace,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&self) -> Arc<Mutex<Index>> {
        self.index.clone()
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Reload the index, failing when the repository was never initialised
    pub(crate) fn load_index(&self, index: &mut Index) -> RepositoryResult<()> {
        if !index.exists() {
            return Err(RepositoryError::NotInitialized);
        }

        index.rehydrate()?;
        Ok(())
    }

    /// Print a recoverable error as a user message; propagate anything else
    pub(crate) fn report(&self, error: RepositoryError) -> anyhow::Result<()> {
        if !error.is_recoverable() {
            return Err(error.into());
        }

        writeln!(self.writer(), "{error}")?;
        Ok(())
    }
}
