use crate::commands::{no_card_at, CmdMessage, CmdResult};
use crate::index::DisplayIndex;
use crate::store::CardStore;

/// Which display flag to set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapseTarget {
    Code,
    Output,
    Card,
}

impl CollapseTarget {
    fn label(self) -> &'static str {
        match self {
            CollapseTarget::Code => "Code",
            CollapseTarget::Output => "Output",
            CollapseTarget::Card => "Card",
        }
    }
}

pub fn run(
    store: &mut CardStore,
    indexes: &[DisplayIndex],
    target: CollapseTarget,
    value: bool,
) -> CmdResult {
    let mut result = CmdResult::default();
    for &index in indexes {
        let position = index.position();
        let applied = match target {
            CollapseTarget::Code => store.set_code_collapsed(position, value),
            CollapseTarget::Output => store.set_output_collapsed(position, value),
            CollapseTarget::Card => store.set_collapsed(position, value),
        };
        match store.get(position) {
            Some(card) if applied => {
                let state = if value { "collapsed" } else { "expanded" };
                result.add_message(CmdMessage::success(format!(
                    "{} {} ({}): {}",
                    target.label(),
                    state,
                    index,
                    card.title
                )));
                result.affected_cards.push(card.clone());
            }
            _ => result.add_message(no_card_at(index)),
        }
    }
    result
}
