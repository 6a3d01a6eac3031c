use crate::classes::base::JsonObject;
use crate::classes::card::{CardType, ParsedCard};
use indexmap::IndexMap;
#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

/// Outcome of parsing one pasted deck list
///
/// `cards` keeps source line order. `section_totals` holds the counts declared
/// in the section headers, keyed in order of first appearance; they are
/// informational and never checked against the parsed quantities.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "python", pyclass(name = "ParseResult"))]
pub struct ParseResult {
    pub cards: Vec<ParsedCard>,
    pub errors: Vec<String>,
    pub section_totals: IndexMap<CardType, u32>,
}

impl ParseResult {
    pub fn new(
        cards: Vec<ParsedCard>,
        errors: Vec<String>,
        section_totals: IndexMap<CardType, u32>,
    ) -> Self {
        Self {
            cards,
            errors,
            section_totals,
        }
    }

    /// A parse succeeds only when no line failed and at least one card was read
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && !self.cards.is_empty()
    }

    /// Sum of all card quantities
    pub fn total_cards(&self) -> u64 {
        self.cards.iter().map(|card| u64::from(card.quantity)).sum()
    }

    /// Cards listed under the given section, in source order
    pub fn cards_of_type(&self, card_type: CardType) -> impl Iterator<Item = &ParsedCard> {
        self.cards
            .iter()
            .filter(move |card| card.card_type == card_type)
    }

    /// Actual summed quantity for a section, for display next to the declared total
    pub fn section_card_count(&self, card_type: CardType) -> u64 {
        self.cards_of_type(card_type)
            .map(|card| u64::from(card.quantity))
            .sum()
    }

    /// Count declared by the section header, if the header was present
    pub fn declared_total(&self, card_type: CardType) -> Option<u32> {
        self.section_totals.get(&card_type).copied()
    }
}

impl JsonObject for ParseResult {}
