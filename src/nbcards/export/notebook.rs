use super::profiles::{KernelProfile, NotebookMetadata, PROFILES};
use crate::error::{CardsError, Result};
use crate::model::Card;
use serde::Serialize;
use serde_json::Value;

pub const NBFORMAT: u32 = 4;
pub const NBFORMAT_MINOR: u32 = 2;

/// One notebook document, borrowing its cells from the cards it was built from.
///
/// Serializes with the top-level keys `nbformat`, `nbformat_minor`,
/// `metadata`, `cells`, in that order.
#[derive(Debug, Clone, Serialize)]
pub struct Notebook<'a> {
    #[serde(skip)]
    pub profile: &'static KernelProfile,
    pub nbformat: u32,
    pub nbformat_minor: u32,
    pub metadata: &'static NotebookMetadata,
    pub cells: Vec<&'a Value>,
}

impl<'a> Notebook<'a> {
    pub fn new(profile: &'static KernelProfile) -> Self {
        Self {
            profile,
            nbformat: NBFORMAT,
            nbformat_minor: NBFORMAT_MINOR,
            metadata: &profile.metadata,
            cells: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        json.map_err(CardsError::Serialization)
    }
}

/// Partitions `cards` by kernel into one notebook per known profile.
///
/// Every profile gets a notebook, empty or not, in profile order. Cards whose
/// kernel has no profile are dropped. Cell order follows `cards`.
pub fn partition<'a, I>(cards: I) -> Vec<Notebook<'a>>
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut notebooks: Vec<Notebook<'a>> = PROFILES.iter().map(|p| Notebook::new(*p)).collect();
    for card in cards {
        match notebooks.iter_mut().find(|nb| nb.profile.kernel == card.kernel) {
            Some(nb) => nb.cells.push(&card.jupyter_data),
            None => log::debug!("dropping card {} with unknown kernel {}", card.id, card.kernel),
        }
    }
    notebooks
}
