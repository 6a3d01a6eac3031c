//! DeckListValidator
//!
//! Checks a parsed deck list against deck-building rules. Both checks always
//! run so callers can show every problem at once:
//!
//! 1. the deck holds exactly `deck_size` cards;
//! 2. no printing (set code + card number) appears more than `max_copies`
//!    times across all lines, basic energy excepted.

use crate::classes::{ParseResult, ParsedCard, ValidationResult};
use crate::rules::{is_basic_energy, DeckRules};
use indexmap::map::Entry;
use indexmap::IndexMap;
use log::debug;

/// Validator for parsed deck lists
#[derive(Debug, Clone, Copy, Default)]
pub struct DeckListValidator {
    rules: DeckRules,
}

impl DeckListValidator {
    pub fn new(rules: DeckRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &DeckRules {
        &self.rules
    }

    /// Validate a parse result; never fails, problems are returned as errors
    pub fn validate(&self, parse_result: &ParseResult) -> ValidationResult {
        let mut errors = Vec::new();

        let total = parse_result.total_cards();
        if total != u64::from(self.rules.deck_size) {
            errors.push(format!(
                "A deck must contain exactly {} cards, but this list has {}.",
                self.rules.deck_size, total
            ));
        }

        for (name, quantity) in copy_counts(&parse_result.cards) {
            if quantity > u64::from(self.rules.max_copies) {
                errors.push(format!(
                    "Card \"{}\" appears {} times, but the maximum is {} copies.",
                    name, quantity, self.rules.max_copies
                ));
            }
        }

        debug!(
            "Validated deck list of {} cards: {} errors",
            total,
            errors.len()
        );

        ValidationResult::new(errors, Vec::new())
    }
}

/// Summed quantity per printing, keyed by first occurrence, basic energy excluded
fn copy_counts(cards: &[ParsedCard]) -> impl Iterator<Item = (&str, u64)> {
    let mut counts: IndexMap<String, (&str, u64)> = IndexMap::new();

    for card in cards.iter().filter(|card| !is_basic_energy(card)) {
        counts
            .entry(card.identity_key())
            .or_insert((card.card_name.as_str(), 0))
            .1 += u64::from(card.quantity);
    }

    counts.into_values()
}

/// Merge lines that share a printing into one entry each
///
/// Quantities are summed; name and section come from the first occurrence and
/// output order follows first occurrence. Useful before persisting cards
/// under a unique (set code, card number) constraint.
pub fn merge_duplicate_cards(cards: &[ParsedCard]) -> Vec<ParsedCard> {
    let mut merged: IndexMap<String, ParsedCard> = IndexMap::with_capacity(cards.len());

    for card in cards {
        match merged.entry(card.identity_key()) {
            Entry::Occupied(mut entry) => {
                let existing = entry.get_mut();
                existing.quantity = existing.quantity.saturating_add(card.quantity);
            }
            Entry::Vacant(entry) => {
                entry.insert(card.clone());
            }
        }
    }

    merged.into_values().collect()
}

/// Validate a parse result against the Expanded format
pub fn validate_deck_list(parse_result: &ParseResult) -> ValidationResult {
    DeckListValidator::default().validate(parse_result)
}
