use super::DeckStore;
use crate::error::Result;
use crate::model::Card;

/// Deck storage that never touches the filesystem.
#[derive(Debug, Default, Clone)]
pub struct MemoryDeck {
    cards: Vec<Card>,
    saves: usize,
}

impl MemoryDeck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the deck has been saved.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl DeckStore for MemoryDeck {
    fn load(&self) -> Result<Vec<Card>> {
        Ok(self.cards.clone())
    }

    fn save(&mut self, cards: &[Card]) -> Result<()> {
        self.cards = cards.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::{Card, PYTHON_KERNEL, R_KERNEL};
    use crate::store::CardStore;
    use serde_json::json;

    /// A cell whose content identifies it in assertions.
    pub fn tagged_cell(tag: &str) -> serde_json::Value {
        json!({"cell_type": "code", "metadata": {}, "source": tag})
    }

    pub struct DeckFixture {
        pub store: CardStore,
    }

    impl Default for DeckFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl DeckFixture {
        pub fn new() -> Self {
            Self {
                store: CardStore::new(),
            }
        }

        pub fn with_card(mut self, kernel: &str, tag: &str) -> Self {
            let id = self.store.next_id();
            self.store
                .add(Card::new(id, tag, kernel, tag, tagged_cell(tag)));
            self
        }

        pub fn with_python(self, tag: &str) -> Self {
            self.with_card(PYTHON_KERNEL, tag)
        }

        pub fn with_r(self, tag: &str) -> Self {
            self.with_card(R_KERNEL, tag)
        }

        pub fn with_markdown(mut self, text: &str) -> Self {
            let id = self.store.next_id();
            self.store.add_custom(Card::markdown(0, text, text), id);
            self
        }
    }
}
