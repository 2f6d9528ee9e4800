//! # Storage Layer
//!
//! Two halves live here:
//!
//! - [`CardStore`]: the in-memory, ordered deck. Every position-addressed
//!   operation goes through [`CardStore::resolve`], so the "invalid index is a
//!   silent no-op" policy sits in one place.
//! - [`DeckStore`]: persistence of the deck between runs.
//!
//! ## Implementations
//!
//! - [`fs::FileDeck`]: production storage, the card list as JSON in
//!   `cards.json` inside the deck directory.
//! - [`memory::MemoryDeck`]: in-memory storage for testing.
//!
//! ## Positions
//!
//! Positions are zero-based `isize` values into the live sequence. They are
//! not stable across deletes or reorders; callers re-resolve after every
//! mutation. A negative position means "no selection".
//!
//! ```text
//! .nbcards/
//! ├── cards.json          # The ordered deck (JSON array of cards)
//! └── config.json         # Deck configuration
//! ```

use crate::error::Result;
use crate::model::Card;

pub mod fs;
pub mod memory;

/// Abstract interface for deck persistence.
pub trait DeckStore {
    /// Load the full deck in stored order. A missing deck is empty.
    fn load(&self) -> Result<Vec<Card>>;

    /// Replace the stored deck with `cards`.
    fn save(&mut self, cards: &[Card]) -> Result<()>;
}

/// Ordered collection of cards with position-addressed mutation.
///
/// Mutations return `true` when they changed the deck and `false` when the
/// position did not resolve. They never fail.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardStore {
    cards: Vec<Card>,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn get(&self, index: isize) -> Option<&Card> {
        self.resolve(index).map(|i| &self.cards[i])
    }

    /// One past the largest id in the deck, for callers that assign ids.
    pub fn next_id(&self) -> i64 {
        self.cards.iter().map(|c| c.id).max().map_or(1, |id| id + 1)
    }

    /// Maps a position onto the live sequence. Negative and past-the-end
    /// positions resolve to `None`.
    pub fn resolve(&self, index: isize) -> Option<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.cards.len())
    }

    pub fn add(&mut self, card: Card) {
        log::debug!("add card id={} kernel={}", card.id, card.kernel);
        self.cards.push(card);
    }

    /// Appends a card after assigning `id` and normalizing custom markdown.
    pub fn add_custom(&mut self, mut card: Card, id: i64) {
        card.id = id;
        card.normalize();
        self.add(card);
    }

    /// Replaces the card at `index` wholesale, normalizing custom markdown.
    pub fn edit(&mut self, index: isize, mut card: Card) -> bool {
        let Some(i) = self.resolve(index) else {
            return false;
        };
        card.normalize();
        log::debug!("edit card at {} id={}", i, card.id);
        self.cards[i] = card;
        true
    }

    /// Swaps the card at `index` with its predecessor. The first card stays put.
    pub fn move_up(&mut self, index: isize) -> bool {
        match self.resolve(index) {
            Some(i) if i > 0 => {
                self.cards.swap(i - 1, i);
                true
            }
            _ => false,
        }
    }

    /// Swaps the card at `index` with its successor. The last card stays put.
    pub fn move_down(&mut self, index: isize) -> bool {
        match self.resolve(index) {
            Some(i) if i + 1 < self.cards.len() => {
                self.cards.swap(i, i + 1);
                true
            }
            _ => false,
        }
    }

    /// Removes the card at `index`, returning it.
    pub fn delete(&mut self, index: isize) -> Option<Card> {
        let i = self.resolve(index)?;
        log::debug!("delete card at {}", i);
        Some(self.cards.remove(i))
    }

    pub fn set_title(&mut self, index: isize, title: impl Into<String>) -> bool {
        self.update(index, |card| card.title = title.into())
    }

    pub fn set_code_collapsed(&mut self, index: isize, value: bool) -> bool {
        self.update(index, |card| card.code_collapsed = value)
    }

    pub fn set_output_collapsed(&mut self, index: isize, value: bool) -> bool {
        self.update(index, |card| card.output_collapsed = value)
    }

    pub fn set_collapsed(&mut self, index: isize, value: bool) -> bool {
        self.update(index, |card| card.collapsed = value)
    }

    fn update<F: FnOnce(&mut Card)>(&mut self, index: isize, f: F) -> bool {
        match self.resolve(index) {
            Some(i) => {
                f(&mut self.cards[i]);
                true
            }
            None => false,
        }
    }
}

impl<'a> IntoIterator for &'a CardStore {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
