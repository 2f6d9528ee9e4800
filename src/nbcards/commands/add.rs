use crate::commands::{CmdMessage, CmdResult};
use crate::export::profiles::profile_for;
use crate::model::Card;
use crate::store::CardStore;

/// Appends an ordinary card as given.
pub fn run(store: &mut CardStore, card: Card) -> CmdResult {
    let mut result = CmdResult::default();
    warn_unexported(&mut result, &card);
    result.add_message(CmdMessage::success(format!(
        "Card added ({}): {}",
        store.len() + 1,
        card.title
    )));
    store.add(card.clone());
    result.with_affected_cards(vec![card])
}

/// Appends a card under `id`, normalizing it if it is custom markdown.
pub fn custom(store: &mut CardStore, card: Card, id: i64) -> CmdResult {
    store.add_custom(card, id);
    let mut result = CmdResult::default();
    let added = store.cards()[store.len() - 1].clone();
    warn_unexported(&mut result, &added);
    result.add_message(CmdMessage::success(format!(
        "Card added ({}): {}",
        store.len(),
        added.title
    )));
    result.with_affected_cards(vec![added])
}

fn warn_unexported(result: &mut CmdResult, card: &Card) {
    if profile_for(&card.kernel).is_none() {
        result.add_message(CmdMessage::warning(format!(
            "Kernel '{}' has no notebook profile; this card will not be exported",
            card.kernel
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::{markdown_cell, PYTHON_KERNEL, R_KERNEL};

    #[test]
    fn appends_card() {
        let mut store = CardStore::new();
        let result = run(&mut store, Card::code(5, "Load", R_KERNEL, "x <- 1"));
        assert_eq!(store.len(), 1);
        assert_eq!(result.affected_cards[0].id, 5);
        assert!(result.messages[0].content.contains("Card added (1): Load"));
    }

    #[test]
    fn custom_normalizes_markdown() {
        let mut store = CardStore::new();
        let mut card = Card::code(0, "Intro", R_KERNEL, "# Title");
        card.is_custom_markdown = true;
        let result = custom(&mut store, card, 12);

        let added = &result.affected_cards[0];
        assert_eq!(added.id, 12);
        assert_eq!(added.kernel, PYTHON_KERNEL);
        assert_eq!(added.jupyter_data, markdown_cell("# Title"));
        assert_eq!(store.get(0), Some(added));
    }

    #[test]
    fn warns_about_unknown_kernel() {
        let mut store = CardStore::new();
        let result = run(&mut store, Card::code(1, "Old", "cobol", ""));
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(store.len(), 1);
    }
}
