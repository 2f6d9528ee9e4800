use crate::commands::{CmdMessage, CmdResult};
use crate::index::DisplayIndex;
use crate::store::CardStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Moves the card at `index` one slot. Cards already at the edge stay put.
pub fn run(store: &mut CardStore, index: DisplayIndex, direction: Direction) -> CmdResult {
    let mut result = CmdResult::default();
    let position = index.position();
    let moved = match direction {
        Direction::Up => store.move_up(position),
        Direction::Down => store.move_down(position),
    };

    if moved {
        let to = match direction {
            Direction::Up => DisplayIndex(index.0 - 1),
            Direction::Down => DisplayIndex(index.0 + 1),
        };
        if let Some(card) = store.get(to.position()) {
            result.add_message(CmdMessage::success(format!(
                "Card moved ({} -> {}): {}",
                index, to, card.title
            )));
            result.affected_cards.push(card.clone());
        }
        return result;
    }

    let reason = if store.get(position).is_none() {
        format!("No card at index {}", index)
    } else {
        match direction {
            Direction::Up => format!("Card {} is already first", index),
            Direction::Down => format!("Card {} is already last", index),
        }
    };
    result.add_message(CmdMessage::warning(reason));
    result
}
