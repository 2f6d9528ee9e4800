use crate::commands::{CmdMessage, CmdResult};
use crate::export::NotebookExporter;
use crate::host::{Persist, RootProvider};
use crate::index::DisplayIndex;
use crate::store::CardStore;

/// Exports the selected cards, or the whole deck when `indexes` is empty.
///
/// Notifications raised during the export become the result's messages.
pub fn run<R, P>(
    exporter: &mut NotebookExporter<R, P, Vec<CmdMessage>>,
    store: &CardStore,
    indexes: &[DisplayIndex],
) -> CmdResult
where
    R: RootProvider,
    P: Persist,
{
    let positions: Vec<isize> = indexes.iter().map(|i| i.position()).collect();
    let selection = if positions.is_empty() {
        None
    } else {
        Some(positions.as_slice())
    };

    let report = exporter.export(store, selection);

    let mut result = CmdResult::default();
    result.messages = std::mem::take(exporter.notifier_mut());
    if report.written.is_empty() && report.is_clean() {
        result.add_message(CmdMessage::info("No cards to export."));
    }
    result.written = report.written;
    result
}
