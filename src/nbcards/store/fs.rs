use super::DeckStore;
use crate::error::{CardsError, Result};
use crate::model::Card;
use std::fs;
use std::path::PathBuf;

const DECK_FILENAME: &str = "cards.json";

pub struct FileDeck {
    root: PathBuf,
}

impl FileDeck {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn deck_path(&self) -> PathBuf {
        self.root.join(DECK_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(CardsError::Io)?;
        }
        Ok(())
    }
}

impl DeckStore for FileDeck {
    fn load(&self) -> Result<Vec<Card>> {
        let path = self.deck_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(CardsError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let cards: Vec<Card> = serde_json::from_str(&content).map_err(CardsError::Serialization)?;
        log::debug!("loaded {} cards from {}", cards.len(), path.display());
        Ok(cards)
    }

    fn save(&mut self, cards: &[Card]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(cards).map_err(CardsError::Serialization)?;
        fs::write(self.deck_path(), content).map_err(CardsError::Io)?;
        log::debug!("saved {} cards to {}", cards.len(), self.root.display());
        Ok(())
    }
}
