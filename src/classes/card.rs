//! ParsedCard
//!
//! A single recognized card line from a deck list, tagged with the section
//! (Pokémon, Trainer or Energy) it was listed under.

use crate::classes::base::JsonObject;
#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Deck-list section a card was parsed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "python", pyclass(name = "CardType"))]
pub enum CardType {
    Pokemon,
    Trainer,
    Energy,
}

impl CardType {
    /// Canonical lowercase section name
    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Pokemon => "pokemon",
            CardType::Trainer => "trainer",
            CardType::Energy => "energy",
        }
    }

    /// Map a section header keyword (any case) to its section
    pub fn from_section_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_lowercase().as_str() {
            "pokemon" | "pokémon" => Some(CardType::Pokemon),
            "trainer" => Some(CardType::Trainer),
            "energy" => Some(CardType::Energy),
            _ => None,
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One card line: `<qty> <card name> <SETCODE> <card-number>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "python", pyclass(name = "ParsedCard"))]
pub struct ParsedCard {
    pub quantity: u32,
    pub card_name: String,
    pub set_code: String,
    pub card_number: String,
    pub card_type: CardType,
}

impl ParsedCard {
    pub fn new(
        quantity: u32,
        card_name: impl Into<String>,
        set_code: impl Into<String>,
        card_number: impl Into<String>,
        card_type: CardType,
    ) -> Self {
        Self {
            quantity,
            card_name: card_name.into(),
            set_code: set_code.into(),
            card_number: card_number.into(),
            card_type,
        }
    }

    /// Printing identity used for copy counting: `{set_code}|{card_number}`
    pub fn identity_key(&self) -> String {
        format!("{}|{}", self.set_code, self.card_number)
    }
}

impl JsonObject for ParsedCard {}
