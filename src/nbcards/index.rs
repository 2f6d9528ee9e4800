//! User-facing card numbers.
//!
//! The CLI numbers cards from 1; the store addresses them from 0. A
//! [`DisplayIndex`] is the 1-based form, and [`DisplayIndex::position`] maps it
//! onto the store. `0` maps to position -1, which the store treats as "no
//! selection".

use crate::model::Card;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(pub usize);

impl DisplayIndex {
    pub fn from_position(position: usize) -> Self {
        Self(position + 1)
    }

    /// Zero-based store position.
    pub fn position(self) -> isize {
        isize::try_from(self.0).map_or(isize::MAX, |n| n - 1)
    }
}

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(DisplayIndex)
            .map_err(|_| format!("Invalid index format: {}", s))
    }
}

#[derive(Debug, Clone)]
pub struct DisplayCard {
    pub card: Card,
    pub index: DisplayIndex,
}

/// Numbers every card in deck order.
pub fn index_cards<'a, I>(cards: I) -> Vec<DisplayCard>
where
    I: IntoIterator<Item = &'a Card>,
{
    cards
        .into_iter()
        .enumerate()
        .map(|(i, card)| DisplayCard {
            card: card.clone(),
            index: DisplayIndex::from_position(i),
        })
        .collect()
}

/// Largest number of indexes a single range may expand to.
pub const MAX_RANGE_LEN: usize = 10_000;

/// Parses `"3"` or an inclusive range such as `"2-4"`.
pub fn parse_index_or_range(s: &str) -> Result<Vec<DisplayIndex>, String> {
    if let Some((start, end)) = s.split_once('-') {
        if !start.is_empty() {
            let start = DisplayIndex::from_str(start)?;
            let end = DisplayIndex::from_str(end)?;
            if start > end {
                return Err(format!(
                    "Invalid range: start ({}) must be <= end ({})",
                    start, end
                ));
            }
            if end.0 - start.0 >= MAX_RANGE_LEN {
                return Err(format!(
                    "Invalid range: {}-{} spans more than {} cards",
                    start, end, MAX_RANGE_LEN
                ));
            }
            return Ok((start.0..=end.0).map(DisplayIndex).collect());
        }
    }
    DisplayIndex::from_str(s).map(|idx| vec![idx])
}

/// Parses every input, expanding ranges, preserving order.
pub fn parse_indexes<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<DisplayIndex>, String> {
    let mut out = Vec::new();
    for input in inputs {
        out.extend(parse_index_or_range(input.as_ref())?);
    }
    Ok(out)
}
