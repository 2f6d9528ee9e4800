use crate::commands::{no_card_at, CmdMessage, CmdResult};
use crate::index::DisplayIndex;
use crate::store::CardStore;

/// Deletes the cards at `indexes`.
///
/// Indexes refer to the deck as it was before the call; they are removed from
/// the highest position down so earlier removals do not shift later ones.
pub fn run(store: &mut CardStore, indexes: &[DisplayIndex]) -> CmdResult {
    let mut result = CmdResult::default();
    let mut ordered: Vec<DisplayIndex> = indexes.to_vec();
    ordered.sort_unstable_by(|a, b| b.cmp(a));
    ordered.dedup();

    for index in ordered {
        match store.delete(index.position()) {
            Some(card) => {
                result.add_message(CmdMessage::success(format!(
                    "Card deleted ({}): {}",
                    index, card.title
                )));
                result.affected_cards.push(card);
            }
            None => result.add_message(no_card_at(index)),
        }
    }
    result
}
