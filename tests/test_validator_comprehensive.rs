mod common;

use common::{section, SIXTY_CARD_LIST};
use ptcg_decklist::{
    merge_duplicate_cards, parse_deck_list, validate_deck_list, DeckListValidator, DeckRules,
    JsonObject,
};

/// Basic energy padding so a test list reaches exactly 60 cards
fn padded_energy(basic_count: u32) -> String {
    format!("{} Fire Energy SVE 2", basic_count)
}

mod comprehensive_validator_tests {
    use super::*;

    #[test]
    fn test_exact_sixty_passes() {
        let parsed = parse_deck_list(SIXTY_CARD_LIST);
        let result = validate_deck_list(&parsed);
        assert!(result.is_valid(), "unexpected errors: {:?}", result.errors);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_wrong_total_fails_once() {
        let parsed = parse_deck_list(&section("Pokémon: 4", &["4 Arceus V BRS 122"]));
        let result = validate_deck_list(&parsed);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("exactly 60 cards"));
        assert!(result.errors[0].contains('4'));
        assert_eq!(
            result.errors[0],
            "A deck must contain exactly 60 cards, but this list has 4."
        );
    }

    #[test]
    fn test_too_many_cards_fails() {
        let text = format!(
            "{}{}",
            section("Trainer: 4", &["4 Iono PAL 185"]),
            section("Energy: 57", &[padded_energy(57).as_str()])
        );
        let result = validate_deck_list(&parse_deck_list(&text));
        assert_eq!(
            result.errors,
            vec!["A deck must contain exactly 60 cards, but this list has 61.".to_string()]
        );
    }

    #[test]
    fn test_empty_parse_reports_zero_cards() {
        let result = validate_deck_list(&parse_deck_list(""));
        assert_eq!(
            result.errors,
            vec!["A deck must contain exactly 60 cards, but this list has 0.".to_string()]
        );
    }

    #[test]
    fn test_copy_limit_on_single_line() {
        let text = format!(
            "{}{}",
            section("Trainer: 5", &["5 Ultra Ball SVI 196"]),
            section("Energy: 55", &[padded_energy(55).as_str()])
        );
        let result = validate_deck_list(&parse_deck_list(&text));
        assert_eq!(
            result.errors,
            vec!["Card \"Ultra Ball\" appears 5 times, but the maximum is 4 copies.".to_string()]
        );
    }

    #[test]
    fn test_copy_limit_across_split_lines() {
        let text = format!(
            "{}{}",
            section("Trainer: 5", &["3 Iono PAL 185", "2 Iono PAL 185"]),
            section("Energy: 55", &[padded_energy(55).as_str()])
        );
        let result = validate_deck_list(&parse_deck_list(&text));
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("\"Iono\""));
        assert!(result.errors[0].contains("maximum is 4"));
    }

    #[test]
    fn test_split_lines_at_limit_pass() {
        let text = format!(
            "{}{}",
            section("Trainer: 4", &["2 Iono PAL 185", "2 Iono PAL 185"]),
            section("Energy: 56", &[padded_energy(56).as_str()])
        );
        assert!(validate_deck_list(&parse_deck_list(&text)).is_valid());
    }

    #[test]
    fn test_name_comes_from_first_occurrence() {
        let text = section("Trainer: 6", &["3 Iono PAL 185", "3 Iono Full Art PAL 185"]);
        let result = validate_deck_list(&parse_deck_list(&text));
        assert_eq!(
            result.errors[1],
            "Card \"Iono\" appears 6 times, but the maximum is 4 copies."
        );
    }

    #[test]
    fn test_different_numbers_are_different_cards() {
        let text = format!(
            "{}{}",
            section("Trainer: 6", &["3 Iono PAL 185", "3 Iono PAL 254"]),
            section("Energy: 54", &[padded_energy(54).as_str()])
        );
        assert!(validate_deck_list(&parse_deck_list(&text)).is_valid());
    }

    #[test]
    fn test_basic_energy_is_exempt() {
        let text = format!(
            "{}{}",
            section("Pokémon: 4", &["4 Pikachu ex SSP 57"]),
            section("Energy: 56", &["10 Lightning Energy SVE 4", "46 Lightning Energy SVE 4"])
        );
        let result = validate_deck_list(&parse_deck_list(&text));
        assert!(result.is_valid(), "unexpected errors: {:?}", result.errors);
    }

    #[test]
    fn test_special_energy_is_limited() {
        let text = format!(
            "{}{}",
            section("Energy: 5", &["5 V Guard Energy SIT 169"]),
            section("Energy: 55", &[padded_energy(55).as_str()])
        );
        let result = validate_deck_list(&parse_deck_list(&text));
        assert_eq!(
            result.errors,
            vec!["Card \"V Guard Energy\" appears 5 times, but the maximum is 4 copies.".to_string()]
        );
    }

    #[test]
    fn test_basic_energy_name_outside_energy_section_is_limited() {
        let text = section("Trainer: 60", &["60 Fire Energy SVE 2"]);
        let result = validate_deck_list(&parse_deck_list(&text));
        assert_eq!(
            result.errors,
            vec!["Card \"Fire Energy\" appears 60 times, but the maximum is 4 copies.".to_string()]
        );
    }

    #[test]
    fn test_errors_accumulate_in_order() {
        let text = section(
            "Trainer: 12",
            &["6 Nest Ball SVI 181", "1 Iono PAL 185", "5 Iono PAL 185"],
        );
        let result = validate_deck_list(&parse_deck_list(&text));
        assert_eq!(
            result.errors,
            vec![
                "A deck must contain exactly 60 cards, but this list has 12.".to_string(),
                "Card \"Nest Ball\" appears 6 times, but the maximum is 4 copies.".to_string(),
                "Card \"Iono\" appears 6 times, but the maximum is 4 copies.".to_string(),
            ]
        );
    }

    #[test]
    fn test_validator_with_custom_rules() {
        let validator = DeckListValidator::new(DeckRules {
            deck_size: 4,
            max_copies: 4,
        });
        let parsed = parse_deck_list(&section("Pokémon: 4", &["4 Arceus V BRS 122"]));
        assert!(validator.validate(&parsed).is_valid());
        assert_eq!(validator.rules(), &DeckRules { deck_size: 4, max_copies: 4 });
    }

    #[test]
    fn test_validation_is_pure() {
        let parsed = parse_deck_list(SIXTY_CARD_LIST);
        let before = parsed.clone();
        let first = validate_deck_list(&parsed);
        let second = validate_deck_list(&parsed);
        assert_eq!(first, second);
        assert_eq!(parsed, before);
    }

    #[test]
    fn test_merge_before_persisting() {
        let parsed = parse_deck_list(&section(
            "Trainer: 4",
            &["2 Iono PAL 185", "1 Arven SVI 166", "1 Iono PAL 185"],
        ));
        let merged = merge_duplicate_cards(&parsed.cards);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].card_name, "Iono");
        assert_eq!(merged[0].quantity, 3);
        assert_eq!(merged[1].card_name, "Arven");
        let merged_total: u64 = merged.iter().map(|c| u64::from(c.quantity)).sum();
        assert_eq!(merged_total, parsed.total_cards());
    }

    #[test]
    fn test_validation_result_json() -> anyhow::Result<()> {
        let result = validate_deck_list(&parse_deck_list(""));
        let value = result.to_json_value()?;
        assert_eq!(
            value["errors"][0],
            "A deck must contain exactly 60 cards, but this list has 0."
        );
        assert_eq!(value["warnings"], serde_json::json!([]));
        Ok(())
    }
}
