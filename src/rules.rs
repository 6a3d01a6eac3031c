//! Deck-building rules
//!
//! Expanded format: exactly 60 cards, at most 4 copies of any printing, and
//! the nine basic energy cards exempt from the copy limit.

use crate::classes::{CardType, ParsedCard};
use crate::error::Result;
use config::{Config, Environment, File};
use log::warn;
#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

/// Exact card count of an Expanded deck
pub const EXPANDED_DECK_SIZE: u32 = 60;

/// Maximum copies of a single printing in an Expanded deck
pub const EXPANDED_MAX_COPIES: u32 = 4;

/// Canonical basic energy names, matched exactly
pub const BASIC_ENERGY_NAMES: [&str; 9] = [
    "Grass Energy",
    "Fire Energy",
    "Water Energy",
    "Lightning Energy",
    "Psychic Energy",
    "Fighting Energy",
    "Darkness Energy",
    "Metal Energy",
    "Fairy Energy",
];

/// A card is a basic energy only when listed under Energy with a canonical name
pub fn is_basic_energy(card: &ParsedCard) -> bool {
    card.card_type == CardType::Energy && BASIC_ENERGY_NAMES.contains(&card.card_name.as_str())
}

/// Numeric limits applied by the validator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "python", pyclass(name = "DeckRules"))]
pub struct DeckRules {
    pub deck_size: u32,
    pub max_copies: u32,
}

impl DeckRules {
    pub fn expanded() -> Self {
        Self {
            deck_size: EXPANDED_DECK_SIZE,
            max_copies: EXPANDED_MAX_COPIES,
        }
    }

    /// Read limits from an already built configuration; missing keys keep the Expanded values
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(config.clone().try_deserialize()?)
    }

    /// Load limits from `decklist.*` (optional) and `DECKLIST_*` environment variables
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            .add_source(File::with_name("decklist").required(false))
            .add_source(Environment::with_prefix("DECKLIST").try_parsing(true))
            .build()?;

        Self::from_config(&config)
    }

    /// Same as [`DeckRules::load`], defaulting to Expanded when configuration is unusable
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(rules) => rules,
            Err(e) => {
                warn!("Failed to load deck rules ({}). Defaulting to Expanded format", e);
                Self::expanded()
            }
        }
    }
}

impl Default for DeckRules {
    fn default() -> Self {
        Self::expanded()
    }
}
