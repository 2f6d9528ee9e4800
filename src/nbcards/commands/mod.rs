use crate::config::CardsConfig;
use crate::index::{DisplayCard, DisplayIndex};
use crate::model::Card;
use std::path::PathBuf;

pub mod add;
pub mod collapse;
pub mod config;
pub mod delete;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod move_cards;

/// Where a deck lives and where its notebooks go by default.
#[derive(Debug, Clone)]
pub struct CardsPaths {
    /// The deck directory (`.nbcards/`), holding `cards.json` and `config.json`.
    pub deck_dir: PathBuf,
    /// Default export root when the config does not name one.
    pub workspace: Option<PathBuf>,
}

impl CardsPaths {
    /// The export root: configured `output_dir` first, then the workspace.
    pub fn export_root(&self, config: &CardsConfig) -> Option<PathBuf> {
        config.output_dir.clone().or_else(|| self.workspace.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_cards: Vec<Card>,
    pub listed_cards: Vec<DisplayCard>,
    pub written: Vec<PathBuf>,
    pub config: Option<CardsConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_cards(mut self, cards: Vec<Card>) -> Self {
        self.affected_cards = cards;
        self
    }

    pub fn with_listed_cards(mut self, cards: Vec<DisplayCard>) -> Self {
        self.listed_cards = cards;
        self
    }

    pub fn with_config(mut self, config: CardsConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Whether the deck changed and needs saving.
    pub fn changed(&self) -> bool {
        !self.affected_cards.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

/// The warning every position-addressed command emits for a no-op.
pub(crate) fn no_card_at(index: DisplayIndex) -> CmdMessage {
    CmdMessage::warning(format!("No card at index {}", index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_root_prefers_configured_dir() {
        let paths = CardsPaths {
            deck_dir: PathBuf::from("/ws/.nbcards"),
            workspace: Some(PathBuf::from("/ws")),
        };
        let mut config = CardsConfig::default();
        assert_eq!(paths.export_root(&config), Some(PathBuf::from("/ws")));

        config.output_dir = Some(PathBuf::from("/out"));
        assert_eq!(paths.export_root(&config), Some(PathBuf::from("/out")));
    }

    #[test]
    fn export_root_absent_without_workspace() {
        let paths = CardsPaths {
            deck_dir: PathBuf::from("/deck"),
            workspace: None,
        };
        assert!(paths.export_root(&CardsConfig::default()).is_none());
    }
}
