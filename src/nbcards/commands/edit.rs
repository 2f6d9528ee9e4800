use crate::commands::{no_card_at, CmdMessage, CmdResult};
use crate::index::DisplayIndex;
use crate::model::{code_cell, Card};
use crate::store::CardStore;
use serde_json::Value;

/// Field changes for an existing card. Unset fields keep their value.
#[derive(Debug, Clone, Default)]
pub struct CardUpdate {
    pub title: Option<String>,
    pub kernel: Option<String>,
    pub source_code: Option<String>,
    pub jupyter_data: Option<Value>,
    pub is_custom_markdown: Option<bool>,
}

impl CardUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.kernel.is_none()
            && self.source_code.is_none()
            && self.jupyter_data.is_none()
            && self.is_custom_markdown.is_none()
    }

    /// Applies the changes to a copy of `card`.
    ///
    /// Without an explicit cell, an ordinary card gets a fresh code cell when
    /// its source changes or when it stops being custom markdown, so the
    /// exported cell never drifts from the card text.
    pub fn apply(&self, card: &Card) -> Card {
        let mut updated = card.clone();
        if let Some(title) = &self.title {
            updated.title = title.clone();
        }
        if let Some(kernel) = &self.kernel {
            updated.kernel = kernel.clone();
        }
        if let Some(markdown) = self.is_custom_markdown {
            updated.is_custom_markdown = markdown;
        }
        if let Some(source) = &self.source_code {
            updated.source_code = source.clone();
        }
        let left_markdown = card.is_custom_markdown && !updated.is_custom_markdown;
        match &self.jupyter_data {
            Some(cell) => updated.jupyter_data = cell.clone(),
            None if !updated.is_custom_markdown
                && (self.source_code.is_some() || left_markdown) =>
            {
                updated.jupyter_data = code_cell(&updated.source_code);
            }
            None => {}
        }
        updated
    }
}

/// Replaces the card at `index` with a fully formed card.
pub fn replace(store: &mut CardStore, index: DisplayIndex, card: Card) -> CmdResult {
    let mut result = CmdResult::default();
    if !store.edit(index.position(), card) {
        result.add_message(no_card_at(index));
        return result;
    }
    edited(result, store, index)
}

/// Applies `update` to the card at `index` and writes it back through
/// [`CardStore::edit`], which re-normalizes custom markdown.
pub fn run(store: &mut CardStore, index: DisplayIndex, update: &CardUpdate) -> CmdResult {
    let mut result = CmdResult::default();
    let Some(current) = store.get(index.position()) else {
        result.add_message(no_card_at(index));
        return result;
    };
    if update.is_empty() {
        result.add_message(CmdMessage::info("Nothing to change."));
        return result;
    }
    let updated = update.apply(current);
    store.edit(index.position(), updated);
    edited(result, store, index)
}

pub fn set_title(store: &mut CardStore, index: DisplayIndex, title: &str) -> CmdResult {
    let mut result = CmdResult::default();
    if !store.set_title(index.position(), title) {
        result.add_message(no_card_at(index));
        return result;
    }
    edited(result, store, index)
}

fn edited(mut result: CmdResult, store: &CardStore, index: DisplayIndex) -> CmdResult {
    if let Some(card) = store.get(index.position()) {
        result.add_message(CmdMessage::success(format!(
            "Card updated ({}): {}",
            index, card.title
        )));
        result.affected_cards.push(card.clone());
    }
    result
}
