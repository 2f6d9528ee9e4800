//! Collaborators the exporter calls into.
//!
//! The exporter never looks anything up on its own: the export root, the
//! writer and the message sink are all handed to it at construction.

use crate::commands::CmdMessage;
use crate::error::{CardsError, Result};
use crate::export::notebook::Notebook;
use std::fs;
use std::path::{Path, PathBuf};

/// Supplies the directory exported notebooks are written into.
pub trait RootProvider {
    /// `None` when no writable location is available.
    fn root(&self) -> Option<PathBuf>;
}

/// A root fixed at construction time.
#[derive(Debug, Clone, Default)]
pub struct FixedRoot(Option<PathBuf>);

impl FixedRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self(Some(root.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl RootProvider for FixedRoot {
    fn root(&self) -> Option<PathBuf> {
        self.0.clone()
    }
}

/// Writes a notebook for `kernel_name` into `dir`, returning the written path.
pub trait Persist {
    fn persist(&mut self, dir: &Path, notebook: &Notebook<'_>, kernel_name: &str)
        -> Result<PathBuf>;
}

/// Writes notebooks as UTF-8 JSON to `output_<kernel>.ipynb`, replacing any
/// existing file.
#[derive(Debug, Clone, Default)]
pub struct FilePersister {
    pretty: bool,
}

impl FilePersister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.set_pretty(pretty);
        self
    }

    pub fn set_pretty(&mut self, pretty: bool) {
        self.pretty = pretty;
    }
}

pub fn output_file_name(kernel_name: &str) -> String {
    format!("output_{}.ipynb", kernel_name)
}

impl Persist for FilePersister {
    fn persist(
        &mut self,
        dir: &Path,
        notebook: &Notebook<'_>,
        kernel_name: &str,
    ) -> Result<PathBuf> {
        let path = dir.join(output_file_name(kernel_name));
        let json = notebook.to_json(self.pretty)?;
        fs::write(&path, json).map_err(|source| CardsError::WriteFailed {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

/// Receives user-facing messages.
pub trait Notifier {
    fn notify(&mut self, message: CmdMessage);
}

impl Notifier for Vec<CmdMessage> {
    fn notify(&mut self, message: CmdMessage) {
        self.push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::notebook::partition;
    use crate::store::memory::fixtures::DeckFixture;
    use tempfile::TempDir;

    #[test]
    fn fixed_root_reports_absence() {
        assert!(FixedRoot::none().root().is_none());
        assert_eq!(FixedRoot::new("/tmp/x").root(), Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn file_persister_overwrites_existing_file() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("output_r.ipynb");
        fs::write(&target, "stale contents that are longer than the notebook").unwrap();

        let store = DeckFixture::new().with_r("B").store;
        let notebooks = partition(store.cards());
        let path = FilePersister::new()
            .persist(temp.path(), &notebooks[1], "r")
            .unwrap();

        assert_eq!(path, target);
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, notebooks[1].to_json(false).unwrap());
    }

    #[test]
    fn file_persister_reports_write_failure() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("does-not-exist");
        let store = DeckFixture::new().with_python("A").store;
        let notebooks = partition(store.cards());

        let err = FilePersister::new()
            .persist(&missing, &notebooks[0], "python3")
            .unwrap_err();
        assert!(matches!(err, CardsError::WriteFailed { .. }));
        assert!(err.to_string().starts_with("Unable to save exported Jupyter file"));
    }

    #[test]
    fn vec_notifier_collects_in_order() {
        let mut sink: Vec<CmdMessage> = Vec::new();
        sink.notify(CmdMessage::success("one"));
        sink.notify(CmdMessage::error("two"));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[1].content, "two");
    }
}
