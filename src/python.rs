//! Python bindings (feature `python`)

use crate::classes::{CardType, JsonObject, ParseResult, ParsedCard, ValidationResult};
use crate::parser::DeckListParser;
use crate::rules::DeckRules;
use crate::validator::DeckListValidator;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;
use std::collections::HashMap;

#[pymethods]
impl CardType {
    fn __str__(&self) -> &'static str {
        self.as_str()
    }
}

#[pymethods]
impl ParsedCard {
    #[new]
    fn py_new(
        quantity: u32,
        card_name: String,
        set_code: String,
        card_number: String,
        card_type: CardType,
    ) -> Self {
        Self::new(quantity, card_name, set_code, card_number, card_type)
    }

    #[getter]
    fn quantity(&self) -> u32 {
        self.quantity
    }

    #[getter]
    fn card_name(&self) -> String {
        self.card_name.clone()
    }

    #[getter]
    fn set_code(&self) -> String {
        self.set_code.clone()
    }

    #[getter]
    fn card_number(&self) -> String {
        self.card_number.clone()
    }

    #[getter]
    fn card_type(&self) -> CardType {
        self.card_type
    }

    #[pyo3(name = "identity_key")]
    fn py_identity_key(&self) -> String {
        self.identity_key()
    }

    /// Convert to JSON string
    fn to_json(&self) -> PyResult<String> {
        Ok(self.to_json_string()?)
    }

    fn __repr__(&self) -> String {
        format!(
            "ParsedCard({} {} {} {}, {})",
            self.quantity, self.card_name, self.set_code, self.card_number, self.card_type
        )
    }
}

#[pymethods]
impl ParseResult {
    #[getter]
    fn cards(&self) -> Vec<ParsedCard> {
        self.cards.clone()
    }

    #[getter]
    fn errors(&self) -> Vec<String> {
        self.errors.clone()
    }

    /// Declared section totals keyed by section name
    #[getter]
    fn section_totals(&self) -> HashMap<String, u32> {
        self.section_totals
            .iter()
            .map(|(section, total)| (section.as_str().to_string(), *total))
            .collect()
    }

    #[pyo3(name = "is_valid")]
    fn py_is_valid(&self) -> bool {
        self.is_valid()
    }

    #[pyo3(name = "total_cards")]
    fn py_total_cards(&self) -> u64 {
        self.total_cards()
    }

    /// Convert to JSON string
    fn to_json(&self) -> PyResult<String> {
        Ok(self.to_json_string()?)
    }
}

#[pymethods]
impl DeckRules {
    #[new]
    #[pyo3(signature = (deck_size = crate::rules::EXPANDED_DECK_SIZE, max_copies = crate::rules::EXPANDED_MAX_COPIES))]
    fn py_new(deck_size: u32, max_copies: u32) -> Self {
        Self {
            deck_size,
            max_copies,
        }
    }

    #[staticmethod]
    #[pyo3(name = "expanded")]
    fn py_expanded() -> Self {
        Self::expanded()
    }

    #[getter]
    fn deck_size(&self) -> u32 {
        self.deck_size
    }

    #[getter]
    fn max_copies(&self) -> u32 {
        self.max_copies
    }

    fn __repr__(&self) -> String {
        format!(
            "DeckRules(deck_size={}, max_copies={})",
            self.deck_size, self.max_copies
        )
    }
}

#[pymethods]
impl ValidationResult {
    #[getter]
    fn errors(&self) -> Vec<String> {
        self.errors.clone()
    }

    #[getter]
    fn warnings(&self) -> Vec<String> {
        self.warnings.clone()
    }

    #[pyo3(name = "is_valid")]
    fn py_is_valid(&self) -> bool {
        self.is_valid()
    }

    /// Convert to JSON string
    fn to_json(&self) -> PyResult<String> {
        Ok(self.to_json_string()?)
    }
}

/// Parse pasted deck-list text
#[pyfunction]
fn parse(raw_text: &str) -> ParseResult {
    DeckListParser::new().parse(raw_text)
}

/// Validate a parse result against `rules`, Expanded when omitted
#[pyfunction]
#[pyo3(signature = (parse_result, rules = None))]
fn validate(parse_result: PyRef<'_, ParseResult>, rules: Option<DeckRules>) -> ValidationResult {
    DeckListValidator::new(rules.unwrap_or_default()).validate(&parse_result)
}

/// Python module definition
#[pymodule]
fn ptcg_decklist(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<CardType>()?;
    m.add_class::<ParsedCard>()?;
    m.add_class::<ParseResult>()?;
    m.add_class::<ValidationResult>()?;
    m.add_class::<DeckRules>()?;

    m.add_function(wrap_pyfunction!(parse, m)?)?;
    m.add_function(wrap_pyfunction!(validate, m)?)?;

    Ok(())
}
