use super::*;

fn decision(score: Option<i32>) -> MatchDecision {
    MatchDecision {
        score,
        ..MatchDecision::no_match(false)
    }
}

#[test]
fn test_no_score_is_not_applicable() {
    assert_eq!(decision(None).score_descriptor(&MatchConfig::default()), "n/a");
}

#[test]
fn test_below_warning_score_is_low() {
    let config = MatchConfig::default();

    assert_eq!(decision(Some(95)).score_descriptor(&config), "low 95%");
    assert_eq!(decision(Some(100)).score_descriptor(&config), "low 100%");
    assert_eq!(decision(Some(119)).score_descriptor(&config), "low 119%");
}

#[test]
fn test_at_or_above_warning_score() {
    let config = MatchConfig::default();

    assert_eq!(decision(Some(120)).score_descriptor(&config), "120%");
    assert_eq!(decision(Some(227)).score_descriptor(&config), "227%");
}

#[test]
fn test_percentage_rounds_against_threshold() {
    let config = MatchConfig {
        min_match_score: 150,
        ..MatchConfig::default()
    };

    // 200 / 150 = 133.33, warning score is 180
    assert_eq!(decision(Some(200)).score_descriptor(&config), "133%");
    assert_eq!(decision(Some(-1000)).score_descriptor(&config), "low -667%");
}

#[test]
fn test_score_to_percentage() {
    assert_eq!(score_to_percentage(227, 100), 227);
    assert_eq!(score_to_percentage(1, 3), 33);
    assert_eq!(score_to_percentage(2, 3), 67);
    assert_eq!(score_to_percentage(5, 0), 0);
}
