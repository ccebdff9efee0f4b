//! Card filtering for the review and show pipelines.

use crate::errors::GtdError;
use crate::trello::Card;
use regex::Regex;

/// Filter cards by an optional name pattern and optionally reverse the
/// result. The pattern uses search semantics: it matches anywhere in the
/// card name, not the full name. Relative order is preserved.
pub fn apply_filters(
    cards: Vec<Card>,
    pattern: Option<&str>,
    reverse: bool,
) -> Result<Vec<Card>, GtdError> {
    let mut selected = match pattern {
        Some(pattern) => {
            let re = Regex::new(pattern).map_err(|e| {
                GtdError::UsageError(format!("Invalid card name pattern '{}': {}", pattern, e))
            })?;
            cards.into_iter().filter(|c| re.is_match(&c.name)).collect()
        }
        None => cards,
    };
    if reverse {
        selected.reverse();
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str) -> Card {
        Card {
            id: format!("5f00000a{}", name.len()),
            name: name.to_string(),
            due: None,
            labels: Vec::new(),
            id_list: "inbound".to_string(),
        }
    }

    fn names(cards: &[Card]) -> Vec<&str> {
        cards.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn no_pattern_is_the_identity() {
        let cards = vec![card("alpha"), card("beta"), card("gamma")];
        let out = apply_filters(cards, None, false).unwrap();
        assert_eq!(names(&out), ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn pattern_keeps_matching_subsequence_in_order() {
        let cards = vec![card("buy milk"), card("call bank"), card("buy stamps")];
        let out = apply_filters(cards, Some("buy"), false).unwrap();
        assert_eq!(names(&out), ["buy milk", "buy stamps"]);
    }

    #[test]
    fn pattern_uses_search_semantics_not_full_match() {
        let cards = vec![card("prepare talk"), card("walk the dog")];
        let out = apply_filters(cards, Some("alk"), false).unwrap();
        assert_eq!(names(&out), ["prepare talk", "walk the dog"]);
    }

    #[test]
    fn reverse_reverses_the_filtered_subsequence() {
        let cards = vec![card("buy milk"), card("call bank"), card("buy stamps")];
        let out = apply_filters(cards, Some("buy"), true).unwrap();
        assert_eq!(names(&out), ["buy stamps", "buy milk"]);
    }

    #[test]
    fn reverse_without_pattern_reverses_everything() {
        let cards = vec![card("a"), card("b"), card("c")];
        let out = apply_filters(cards, None, true).unwrap();
        assert_eq!(names(&out), ["c", "b", "a"]);
    }

    #[test]
    fn invalid_pattern_is_a_usage_error() {
        let err = apply_filters(vec![card("a")], Some("(unclosed"), false).unwrap_err();
        match err {
            GtdError::UsageError(message) => assert!(message.contains("(unclosed")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
