use crate::commands::{CmdMessage, CmdResult};
use crate::index::{index_cards, DisplayCard, DisplayIndex};
use crate::store::CardStore;

/// Lists the deck, optionally only cards of one kernel.
pub fn run(store: &CardStore, kernel: Option<&str>) -> CmdResult {
    let listed: Vec<DisplayCard> = index_cards(store)
        .into_iter()
        .filter(|dc| kernel.map_or(true, |k| dc.card.kernel == k))
        .collect();
    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No cards found."));
    }
    result.with_listed_cards(listed)
}

/// Returns the cards at `indexes`, in the order given.
pub fn view(store: &CardStore, indexes: &[DisplayIndex]) -> CmdResult {
    let mut result = CmdResult::default();
    for &index in indexes {
        match store.get(index.position()) {
            Some(card) => result.listed_cards.push(DisplayCard {
                card: card.clone(),
                index,
            }),
            None => result.add_message(crate::commands::no_card_at(index)),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::DeckFixture;

    #[test]
    fn lists_in_deck_order() {
        let store = DeckFixture::new().with_python("A").with_r("B").store;
        let result = run(&store, None);
        assert_eq!(result.listed_cards.len(), 2);
        assert_eq!(result.listed_cards[1].index, DisplayIndex(2));
        assert_eq!(result.listed_cards[1].card.title, "B");
    }

    #[test]
    fn kernel_filter_keeps_deck_numbers() {
        let store = DeckFixture::new().with_python("A").with_r("B").store;
        let result = run(&store, Some("ir"));
        assert_eq!(result.listed_cards.len(), 1);
        assert_eq!(result.listed_cards[0].index, DisplayIndex(2));
    }

    #[test]
    fn empty_deck_says_so() {
        let result = run(&CardStore::new(), None);
        assert!(result.listed_cards.is_empty());
        assert_eq!(result.messages[0].content, "No cards found.");
    }

    #[test]
    fn view_reports_missing() {
        let store = DeckFixture::new().with_python("A").store;
        let result = view(&store, &[DisplayIndex(1), DisplayIndex(2)]);
        assert_eq!(result.listed_cards.len(), 1);
        assert_eq!(result.messages.len(), 1);
    }
}
