//! # API Facade
//!
//! The single entry point for every nbcards operation, whatever the UI.
//!
//! The facade:
//! - **Loads** the deck from a [`DeckStore`] once, at construction
//! - **Normalizes inputs** (user index strings into [`DisplayIndex`] values)
//! - **Dispatches** to `commands/*.rs`
//! - **Saves** the deck after every command that changed it
//! - **Owns** the [`NotebookExporter`] wiring (export root and pretty-printing
//!   come from the deck config)
//!
//! It writes nothing to stdout and holds no presentation logic.
//!
//! `CardsApi<S: DeckStore>` is generic over the deck backend:
//! - Production: `CardsApi<FileDeck>`
//! - Testing: `CardsApi<MemoryDeck>`

use crate::commands;
use crate::config::CardsConfig;
use crate::error::{CardsError, Result};
use crate::export::NotebookExporter;
use crate::host::{FilePersister, FixedRoot};
use crate::index::{parse_indexes, DisplayIndex};
use crate::model::Card;
use crate::store::{CardStore, DeckStore};
use serde_json::Value;
use std::path::PathBuf;
use std::str::FromStr;

type FileExporter = NotebookExporter<FixedRoot, FilePersister, Vec<CmdMessage>>;

pub struct CardsApi<S: DeckStore> {
    deck: S,
    store: CardStore,
    paths: CardsPaths,
    config: CardsConfig,
    exporter: FileExporter,
}

impl<S: DeckStore> CardsApi<S> {
    pub fn new(deck: S, paths: CardsPaths) -> Result<Self> {
        let config = CardsConfig::load(&paths.deck_dir)?;
        let store = CardStore::from_cards(deck.load()?);
        let exporter = NotebookExporter::new(
            export_root(&paths, &config),
            FilePersister::new().pretty(config.pretty),
            Vec::new(),
        );
        log::debug!(
            "opened deck at {} with {} cards",
            paths.deck_dir.display(),
            store.len()
        );
        Ok(Self {
            deck,
            store,
            paths,
            config,
            exporter,
        })
    }

    pub fn cards(&self) -> &CardStore {
        &self.store
    }

    pub fn paths(&self) -> &CardsPaths {
        &self.paths
    }

    pub fn config(&self) -> &CardsConfig {
        &self.config
    }

    /// Registers a listener fired once after every export.
    pub fn on_export_complete<F>(&mut self, listener: F)
    where
        F: FnMut() + 'static,
    {
        self.exporter.on_export_complete(listener);
    }

    /// Adds an ordinary card. Without `cell`, a code cell is built from
    /// `source`; without `kernel`, the configured default kernel is used.
    pub fn add_card(
        &mut self,
        title: String,
        kernel: Option<String>,
        source: String,
        cell: Option<Value>,
    ) -> Result<CmdResult> {
        let id = self.store.next_id();
        let kernel = kernel.unwrap_or_else(|| self.config.default_kernel.clone());
        let card = match cell {
            Some(cell) => Card::new(id, title, kernel, source, cell),
            None => Card::code(id, title, kernel, source),
        };
        let result = commands::add::run(&mut self.store, card);
        self.save_if_changed(result)
    }

    /// Adds a custom markdown card.
    pub fn add_note(&mut self, title: String, source: String) -> Result<CmdResult> {
        let id = self.store.next_id();
        self.add_custom(Card::markdown(id, title, source), id)
    }

    /// Adds a caller-built card under `id`, normalizing custom markdown.
    pub fn add_custom(&mut self, card: Card, id: i64) -> Result<CmdResult> {
        let result = commands::add::custom(&mut self.store, card, id);
        self.save_if_changed(result)
    }

    pub fn import_cards(&mut self, paths: &[PathBuf]) -> Result<CmdResult> {
        let result = commands::import::run(&mut self.store, paths)?;
        self.save_if_changed(result)
    }

    pub fn edit_card<I: AsRef<str>>(
        &mut self,
        index: I,
        update: &commands::edit::CardUpdate,
    ) -> Result<CmdResult> {
        let index = parse_index(index)?;
        let result = commands::edit::run(&mut self.store, index, update);
        self.save_if_changed(result)
    }

    /// Replaces the card at `index` with `card`, keeping its position.
    pub fn replace_card<I: AsRef<str>>(&mut self, index: I, card: Card) -> Result<CmdResult> {
        let index = parse_index(index)?;
        let result = commands::edit::replace(&mut self.store, index, card);
        self.save_if_changed(result)
    }

    pub fn set_title<I: AsRef<str>>(&mut self, index: I, title: &str) -> Result<CmdResult> {
        let index = parse_index(index)?;
        let result = commands::edit::set_title(&mut self.store, index, title);
        self.save_if_changed(result)
    }

    pub fn move_card<I: AsRef<str>>(
        &mut self,
        index: I,
        direction: commands::move_cards::Direction,
    ) -> Result<CmdResult> {
        let index = parse_index(index)?;
        let result = commands::move_cards::run(&mut self.store, index, direction);
        self.save_if_changed(result)
    }

    pub fn delete_cards<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<CmdResult> {
        let indexes = parse_many(indexes)?;
        let result = commands::delete::run(&mut self.store, &indexes);
        self.save_if_changed(result)
    }

    pub fn collapse<I: AsRef<str>>(
        &mut self,
        indexes: &[I],
        target: commands::collapse::CollapseTarget,
        value: bool,
    ) -> Result<CmdResult> {
        let indexes = parse_many(indexes)?;
        let result = commands::collapse::run(&mut self.store, &indexes, target, value);
        self.save_if_changed(result)
    }

    pub fn list_cards(&self, kernel: Option<&str>) -> Result<CmdResult> {
        Ok(commands::list::run(&self.store, kernel))
    }

    pub fn view_cards<I: AsRef<str>>(&self, indexes: &[I]) -> Result<CmdResult> {
        let indexes = parse_many(indexes)?;
        Ok(commands::list::view(&self.store, &indexes))
    }

    /// Exports the selected cards (all when `indexes` is empty) as notebooks.
    pub fn export<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<CmdResult> {
        let indexes = parse_many(indexes)?;
        Ok(commands::export::run(
            &mut self.exporter,
            &self.store,
            &indexes,
        ))
    }

    pub fn config_action(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.paths, action)?;
        if let Some(config) = &result.config {
            self.reconfigure(config.clone());
        }
        Ok(result)
    }

    pub fn init(&self) -> Result<CmdResult> {
        commands::init::run(&self.paths)
    }

    fn reconfigure(&mut self, config: CardsConfig) {
        self.exporter.set_root(export_root(&self.paths, &config));
        self.exporter.persister_mut().set_pretty(config.pretty);
        self.config = config;
    }

    fn save_if_changed(&mut self, result: CmdResult) -> Result<CmdResult> {
        if result.changed() {
            self.deck.save(self.store.cards())?;
            log::info!("deck saved with {} cards", self.store.len());
        }
        Ok(result)
    }
}

fn export_root(paths: &CardsPaths, config: &CardsConfig) -> FixedRoot {
    match paths.export_root(config) {
        Some(root) => FixedRoot::new(root),
        None => FixedRoot::none(),
    }
}

fn parse_index<I: AsRef<str>>(input: I) -> Result<DisplayIndex> {
    DisplayIndex::from_str(input.as_ref()).map_err(CardsError::Api)
}

fn parse_many<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<DisplayIndex>> {
    parse_indexes(inputs).map_err(CardsError::Api)
}

pub use crate::commands::collapse::CollapseTarget;
pub use crate::commands::config::ConfigAction;
pub use crate::commands::edit::CardUpdate;
pub use crate::commands::move_cards::Direction;
pub use crate::commands::{CardsPaths, CmdMessage, CmdResult, MessageLevel};
