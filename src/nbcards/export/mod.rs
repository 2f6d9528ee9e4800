//! # Notebook Export
//!
//! Turns a selection of cards into at most one notebook per kernel profile and
//! hands each non-empty notebook to a [`Persist`] collaborator.
//!
//! ## Flow
//!
//! 1. Resolve the export root. Without one nothing is built.
//! 2. Resolve the selection: explicit positions, or the whole deck. Any
//!    position that does not resolve aborts the export before anything is
//!    written.
//! 3. Partition by kernel ([`notebook::partition`]).
//! 4. Persist every non-empty notebook. Each failure is reported on its own;
//!    earlier writes are kept.
//! 5. Fire the completion event, exactly once, whatever happened above.
//!
//! Nothing here returns an error: failures become notifications and are
//! counted in the [`ExportReport`].

use crate::commands::CmdMessage;
use crate::error::{CardsError, Result};
use crate::events::ExportEvents;
use crate::host::{Notifier, Persist, RootProvider};
use crate::model::Card;
use crate::store::CardStore;
use std::path::{Path, PathBuf};

pub mod notebook;
pub mod profiles;

/// What a single export call did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub written: Vec<PathBuf>,
    pub failures: usize,
}

impl ExportReport {
    pub fn is_clean(&self) -> bool {
        self.failures == 0
    }
}

pub struct NotebookExporter<R, P, N> {
    root: R,
    persister: P,
    notifier: N,
    events: ExportEvents,
}

impl<R: RootProvider, P: Persist, N: Notifier> NotebookExporter<R, P, N> {
    pub fn new(root: R, persister: P, notifier: N) -> Self {
        Self {
            root,
            persister,
            notifier,
            events: ExportEvents::new(),
        }
    }

    /// Registers a listener for the export-complete event.
    pub fn on_export_complete<F>(&mut self, listener: F)
    where
        F: FnMut() + 'static,
    {
        self.events.subscribe(listener);
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn persister(&self) -> &P {
        &self.persister
    }

    pub fn persister_mut(&mut self) -> &mut P {
        &mut self.persister
    }

    /// Swaps the root provider; listeners stay subscribed.
    pub fn set_root(&mut self, root: R) {
        self.root = root;
    }

    /// Exports the cards at `indices`, or the whole deck when `None`.
    pub fn export(&mut self, store: &CardStore, indices: Option<&[isize]>) -> ExportReport {
        let mut report = ExportReport::default();

        match self.prepare(store, indices) {
            Ok((root, cards)) => self.write_all(&root, cards, &mut report),
            Err(err) => {
                log::warn!("export aborted: {}", err);
                self.notifier.notify(CmdMessage::error(err.to_string()));
                report.failures += 1;
            }
        }

        log::info!(
            "export complete: {} written, {} failed",
            report.written.len(),
            report.failures
        );
        self.events.fire();
        report
    }

    fn prepare<'s>(
        &self,
        store: &'s CardStore,
        indices: Option<&[isize]>,
    ) -> Result<(PathBuf, Vec<&'s Card>)> {
        let root = self.root.root().ok_or(CardsError::NoWorkspace)?;
        let cards = match indices {
            Some(indices) => select(store, indices)?,
            None => store.iter().collect(),
        };
        Ok((root, cards))
    }

    fn write_all(&mut self, root: &Path, cards: Vec<&Card>, report: &mut ExportReport) {
        for nb in notebook::partition(cards) {
            if nb.is_empty() {
                log::debug!("no {} cards selected, skipping", nb.profile.kernel);
                continue;
            }
            let kernel_name = nb.profile.file_stem;
            match self.persister.persist(root, &nb, kernel_name) {
                Ok(path) => {
                    self.notifier.notify(CmdMessage::success(format!(
                        "Exported {} cards to {}",
                        kernel_name,
                        path.display()
                    )));
                    report.written.push(path);
                }
                Err(err) => {
                    log::warn!("failed to export {} notebook: {}", kernel_name, err);
                    self.notifier.notify(CmdMessage::error(err.to_string()));
                    report.failures += 1;
                }
            }
        }
    }
}

fn select<'s>(store: &'s CardStore, indices: &[isize]) -> Result<Vec<&'s Card>> {
    indices
        .iter()
        .map(|&index| {
            store.get(index).ok_or_else(|| {
                CardsError::Api(format!(
                    "Card index {} is out of range (deck has {} cards)",
                    index,
                    store.len()
                ))
            })
        })
        .collect()
}
