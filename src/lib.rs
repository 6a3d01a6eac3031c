//! ptcg-decklist
//!
//! Parser and validator for PTCG text-format deck lists, the plain-text
//! exports pasted from PTCGO, PTCGL and other deck builders.
//!
//! ```
//! use ptcg_decklist::{parse_deck_list, validate_deck_list};
//!
//! let parsed = parse_deck_list("Pokémon: 4\n4 Arceus V BRS 122\nTotal Cards: 4");
//! assert!(parsed.is_valid());
//!
//! let validation = validate_deck_list(&parsed);
//! assert_eq!(
//!     validation.errors,
//!     vec!["A deck must contain exactly 60 cards, but this list has 4.".to_string()]
//! );
//! ```

pub mod classes;
pub mod error;
pub mod parser;
pub mod rules;
pub mod validator;

#[cfg(feature = "python")]
mod python;

pub use classes::{CardType, JsonObject, ParseResult, ParsedCard, ValidationResult};
pub use error::{DeckListError, Result};
pub use parser::{parse_deck_list, DeckListLine, DeckListParser};
pub use rules::{is_basic_energy, DeckRules, BASIC_ENERGY_NAMES};
pub use validator::{merge_duplicate_cards, validate_deck_list, DeckListValidator};
