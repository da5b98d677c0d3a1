use super::*;

fn hit(first: &str, second: &str) -> Option<StrategyHit> {
    let first_compact = first.replace(' ', "");
    let second_compact = second.replace(' ', "");
    match_names(
        NameForms::new(first, &first_compact),
        NameForms::new(second, &second_compact),
    )
}

fn evaluate(strategy: &Strategy, first: &str, second: &str) -> Option<StrategyHit> {
    let first_compact = first.replace(' ', "");
    let second_compact = second.replace(' ', "");
    strategy.evaluate(
        NameForms::new(first, &first_compact),
        NameForms::new(second, &second_compact),
    )
}

// ─── Individual strategies ───────────────────────────────────────────────────

#[test]
fn test_exact_on_full_form_earns_bonus() {
    let result = hit("medieval madness", "medieval madness").unwrap();
    assert_eq!(result.strategy, NameStrategy::Exact);
    assert_eq!(result.score, 155);
    assert!(result.precise);
}

#[test]
fn test_exact_on_compact_form_has_no_bonus() {
    let result = hit("monster bash", "monsterbash").unwrap();
    assert_eq!(result.strategy, NameStrategy::Exact);
    assert_eq!(result.score, 150);
    assert!(!result.precise);
}

#[test]
fn test_edit_distance_within_two() {
    let result = hit("theatre of magic", "theater of magic").unwrap();
    assert_eq!(result.strategy, NameStrategy::EditDistance);
    assert_eq!(result.score, 125);
}

#[test]
fn test_edit_distance_requires_fourteen_chars() {
    assert!(!is_edit_distance_match("tron", "tran"));
    assert!(is_edit_distance_match("theatre of magic", "theater of magic"));
}

#[test]
fn test_prefix_fourteen() {
    let result = hit("attack from mars remake", "attack from mars").unwrap();
    assert_eq!(result.strategy, NameStrategy::Prefix(14));
    assert_eq!(result.score, 105);
}

#[test]
fn test_prefix_ten() {
    let result = hit("twilight zone", "twilight zone deluxe").unwrap();
    assert_eq!(result.strategy, NameStrategy::Prefix(10));
    assert_eq!(result.score, 65);
}

#[test]
fn test_prefix_eight() {
    let result = hit("champion pub", "champion").unwrap();
    assert_eq!(result.strategy, NameStrategy::Prefix(8));
    assert_eq!(result.score, 55);
}

#[test]
fn test_prefix_requires_both_long_enough() {
    assert!(!is_prefix_match("champion pub", "champ", 8));
    assert!(is_prefix_match("champion pub", "champion", 8));
}

#[test]
fn test_contains_seventeen() {
    let result = hit(
        "addams family special collectors edition",
        "special collectors edition",
    )
    .unwrap();
    assert_eq!(result.strategy, NameStrategy::Contains(17));
    assert_eq!(result.score, 105);
}

#[test]
fn test_contains_thirteen() {
    let result = hit("bally cactus canyon", "cactus canyon").unwrap();
    assert_eq!(result.strategy, NameStrategy::Contains(13));
    assert_eq!(result.score, 65);
}

#[test]
fn test_prefix_suffix() {
    let result = hit("jungle lord pinball", "jungle queen pinball").unwrap();
    assert_eq!(result.strategy, NameStrategy::PrefixSuffix);
    assert_eq!(result.score, 65);
}

#[test]
fn test_prefix_suffix_needs_both_ends() {
    assert!(!is_prefix_suffix_match("jungle lord pinball", "jungle queen machine"));
    assert!(!is_prefix_suffix_match("short", "short"));
}

// ─── Chain behaviour ─────────────────────────────────────────────────────────

#[test]
fn test_no_strategy_matches() {
    assert_eq!(hit("medieval madness", "twilight zone"), None);
}

#[test]
fn test_empty_names_never_match() {
    assert_eq!(hit("", ""), None);
    assert_eq!(hit("medieval madness", ""), None);
}

#[test]
fn test_first_strategy_wins() {
    // Also a prefix and containment match, but exact comes first.
    let result = hit("attack from mars", "attack from mars").unwrap();
    assert_eq!(result.strategy, NameStrategy::Exact);
}

#[test]
fn test_compact_match_on_later_strategy_has_no_bonus() {
    let first = NameForms::new("twilight zone", "twilightzone");
    let second = NameForms::new("twi light zone deluxe", "twilightzonedeluxe");
    let result = match_names(first, second).unwrap();
    assert_eq!(result.strategy, NameStrategy::Prefix(10));
    assert_eq!(result.score, 60);
    assert!(!result.precise);
}

#[test]
fn test_strategy_evaluates_in_isolation() {
    let exact = &STRATEGIES[0];
    assert_eq!(exact.kind, NameStrategy::Exact);
    assert!(evaluate(exact, "twilight zone", "twilight zone deluxe").is_none());

    let prefix_ten = STRATEGIES
        .iter()
        .find(|s| s.kind == NameStrategy::Prefix(10))
        .unwrap();
    assert_eq!(
        evaluate(prefix_ten, "twilight zone", "twilight zone deluxe").map(|h| h.score),
        Some(65)
    );
}

#[test]
fn test_match_optional_requires_both_sides() {
    assert_eq!(
        match_optional((Some("williams"), Some("williams")), (None, None)),
        None
    );
    let result = match_optional(
        (Some("williams"), Some("williams")),
        (Some("williams"), Some("williams")),
    )
    .unwrap();
    assert_eq!(result.score, 155);
}
