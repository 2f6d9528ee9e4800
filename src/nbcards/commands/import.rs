use crate::commands::{add, CmdMessage, CmdResult, MessageLevel};
use crate::error::{CardsError, Result};
use crate::model::Card;
use crate::store::CardStore;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

/// A card file holds either one card or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum CardFile {
    Many(Vec<Card>),
    One(Box<Card>),
}

/// Appends the cards found in each JSON file, in file order.
///
/// Cards keep their own id unless it is already taken in the deck, in which
/// case they get the next free one. Custom markdown cards are normalized.
pub fn run(store: &mut CardStore, paths: &[PathBuf]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut taken: HashSet<i64> = store.iter().map(|c| c.id).collect();

    for path in paths {
        let content = fs::read_to_string(path).map_err(CardsError::Io)?;
        let cards = match serde_json::from_str::<CardFile>(&content) {
            Ok(CardFile::Many(cards)) => cards,
            Ok(CardFile::One(card)) => vec![*card],
            Err(e) => {
                log::warn!("skipping {}: {}", path.display(), e);
                result.add_message(CmdMessage::error(format!(
                    "Could not read cards from {}: {}",
                    path.display(),
                    e
                )));
                continue;
            }
        };

        let count = cards.len();
        for card in cards {
            let id = if taken.contains(&card.id) {
                taken.iter().max().map_or(1, |m| m + 1)
            } else {
                card.id
            };
            taken.insert(id);
            let added = add::custom(store, card, id);
            result.messages.extend(
                added
                    .messages
                    .into_iter()
                    .filter(|m| m.level == MessageLevel::Warning),
            );
            result.affected_cards.extend(added.affected_cards);
        }
        result.add_message(CmdMessage::success(format!(
            "Imported {} card(s) from {}",
            count,
            path.display()
        )));
    }

    Ok(result)
}
