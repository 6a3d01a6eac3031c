//! DeckListParser
//!
//! Reads the plain-text export produced by PTCGO/PTCGL and other deck
//! builders:
//!
//! ```text
//! Pokémon: 16
//! 4 Arceus VSTAR BRS 123
//! ...
//!
//! Trainer: 34
//! ...
//! Total Cards: 60
//! ```
//!
//! Every line is classified on its own, top to bottom. Lines that cannot be
//! read become messages in [`ParseResult::errors`]; parsing never fails.

use crate::classes::{CardType, ParseResult, ParsedCard};
use indexmap::IndexMap;
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;

static TOTAL_CARDS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^total cards\s*:").expect("total cards pattern is valid"));

static SECTION_HEADER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?P<section>pokémon|pokemon|trainer|energy)\s*:\s*(?P<count>[0-9]+)$")
        .expect("section header pattern is valid")
});

// The name is non-greedy so the last two tokens always bind to set code and number.
static CARD_LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<quantity>[0-9]+)\s+(?P<name>.+?)\s+(?P<set_code>[A-Z][A-Za-z0-9-]{1,5})\s+(?P<number>\S+)$",
    )
    .expect("card line pattern is valid")
});

/// Classification of a single trimmed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckListLine<'a> {
    Blank,
    TotalCards,
    SectionHeader { section: CardType, declared: u32 },
    Card {
        quantity: u32,
        name: &'a str,
        set_code: &'a str,
        number: &'a str,
    },
    Unrecognized,
}

impl<'a> DeckListLine<'a> {
    /// Classify an already trimmed line
    pub fn classify(line: &'a str) -> Self {
        if line.is_empty() {
            return DeckListLine::Blank;
        }
        if TOTAL_CARDS_PATTERN.is_match(line) {
            return DeckListLine::TotalCards;
        }
        if let Some(header) = Self::section_header(line) {
            return header;
        }
        if let Some(card) = Self::card_line(line) {
            return card;
        }
        DeckListLine::Unrecognized
    }

    fn section_header(line: &str) -> Option<DeckListLine<'static>> {
        let caps = SECTION_HEADER_PATTERN.captures(line)?;
        let section = CardType::from_section_keyword(&caps["section"])?;
        // Only digits are captured, so a failed parse means overflow.
        let declared = caps["count"].parse().unwrap_or(u32::MAX);
        Some(DeckListLine::SectionHeader { section, declared })
    }

    fn card_line(line: &'a str) -> Option<Self> {
        let caps = CARD_LINE_PATTERN.captures(line)?;
        let quantity = caps["quantity"].parse().ok()?;
        Some(DeckListLine::Card {
            quantity,
            name: caps.name("name")?.as_str(),
            set_code: caps.name("set_code")?.as_str(),
            number: caps.name("number")?.as_str(),
        })
    }
}

/// Running state threaded through the lines of one parse
#[derive(Debug, Default)]
struct ParseState {
    current_section: Option<CardType>,
    cards: Vec<ParsedCard>,
    errors: Vec<String>,
    section_totals: IndexMap<CardType, u32>,
}

impl ParseState {
    fn consume(mut self, line_number: usize, raw_line: &str) -> Self {
        let line = raw_line.trim();

        match DeckListLine::classify(line) {
            DeckListLine::Blank | DeckListLine::TotalCards => {}
            DeckListLine::SectionHeader { section, declared } => {
                trace!("Line {}: entering {} section ({} declared)", line_number, section, declared);
                self.current_section = Some(section);
                self.section_totals.insert(section, declared);
            }
            DeckListLine::Card {
                quantity,
                name,
                set_code,
                number,
            } => match self.current_section {
                Some(section) => self
                    .cards
                    .push(ParsedCard::new(quantity, name, set_code, number, section)),
                None => self.errors.push(format!(
                    "Line {}: card line found before any section header: \"{}\"",
                    line_number, line
                )),
            },
            DeckListLine::Unrecognized => self.errors.push(format!(
                "Line {}: unrecognized format: \"{}\"",
                line_number, line
            )),
        }

        self
    }

    fn finish(self) -> ParseResult {
        ParseResult::new(self.cards, self.errors, self.section_totals)
    }
}

/// Parser for PTCG text-format deck lists
#[derive(Debug, Clone, Copy, Default)]
pub struct DeckListParser;

impl DeckListParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse pasted deck-list text
    pub fn parse(&self, raw_text: &str) -> ParseResult {
        let result = raw_text
            .split('\n')
            .enumerate()
            .fold(ParseState::default(), |state, (index, line)| {
                state.consume(index + 1, line)
            })
            .finish();

        debug!(
            "Parsed deck list: {} card lines totalling {} cards, {} errors",
            result.cards.len(),
            result.total_cards(),
            result.errors.len()
        );

        result
    }
}

/// Parse pasted deck-list text with the default parser
pub fn parse_deck_list(raw_text: &str) -> ParseResult {
    DeckListParser::new().parse(raw_text)
}
