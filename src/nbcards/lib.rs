//! # nbcards Architecture
//!
//! nbcards keeps an ordered deck of **cards** (code cells or custom markdown
//! notes, each tagged with a kernel) and exports a selection of them as
//! Jupyter notebooks, one notebook per kernel.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                     │
//! │  - Parses arguments, prints messages and listings           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Parses display indexes, dispatches, saves the deck       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - Operate on a CardStore, return CmdResult                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────┐  ┌──────────────────────────┐
//! │  store/                      │  │  export/                 │
//! │  CardStore + DeckStore       │  │  NotebookExporter        │
//! └──────────────────────────────┘  └──────────────────────────┘
//! ```
//!
//! ## Positions
//!
//! The store addresses cards by zero-based position; the CLI shows them
//! numbered from 1 (see [`index`]). Positions shift on every delete and move,
//! so nothing holds on to one across mutations. An invalid position is never
//! an error: the operation simply does nothing and says so.
//!
//! ## Export
//!
//! [`export::NotebookExporter`] takes its export root, writer and message sink
//! as constructor arguments ([`host`]), and fires the completion listeners
//! ([`events`]) once per export, after every write was attempted.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`store`]: The ordered deck and its persistence
//! - [`export`]: Kernel partitioning and notebook documents
//! - [`host`]: Export root, writer and notification collaborators
//! - [`events`]: Export-complete listeners
//! - [`model`]: The `Card` type and cell shapes
//! - [`index`]: 1-based display indexes
//! - [`config`]: Deck configuration
//! - [`logging`]: Logger setup for the binary
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod export;
pub mod host;
pub mod index;
pub mod logging;
pub mod model;
pub mod store;
