use super::*;

#[test]
fn test_default_config_is_valid() {
    let config = MatchConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.min_match_score, 100);
    assert!(config.stopwords.iter().any(|w| w == "vpx"));
    assert!(config.stopwords.iter().any(|w| w == "the"));
}

#[test]
fn test_warning_score_is_threshold_times_multiplier() {
    let config = MatchConfig {
        min_match_score: 100,
        min_match_warning_multiplier: 1.2,
        ..Default::default()
    };
    assert!((config.min_match_warning_score() - 120.0).abs() < f64::EPSILON);
}

#[test]
fn test_from_json_fills_missing_keys_with_defaults() {
    let config = MatchConfig::from_json(r#"{"min_match_score": 130}"#).unwrap();
    assert_eq!(config.min_match_score, 130);
    assert_eq!(config.stopwords, MatchConfig::default().stopwords);
}

#[test]
fn test_from_json_rejects_non_positive_threshold() {
    let err = MatchConfig::from_json(r#"{"min_match_score": 0}"#).unwrap_err();
    assert!(matches!(err, MatcherError::InvalidConfig(_)));
}

#[test]
fn test_from_json_rejects_multiplier_below_one() {
    let err = MatchConfig::from_json(r#"{"min_match_warning_multiplier": 0.5}"#).unwrap_err();
    assert!(matches!(err, MatcherError::InvalidConfig(_)));
}

#[test]
fn test_from_json_reports_malformed_input() {
    let err = MatchConfig::from_json("[1, 2").unwrap_err();
    assert!(matches!(err, MatcherError::Json(_)));
}

#[test]
fn test_prepare_word_list_lowercases_and_drops_blanks() {
    let words = vec!["  VPX ".to_string(), "".to_string(), "   ".to_string(), "Mod".to_string()];
    assert_eq!(prepare_word_list(&words, "stopwords"), vec!["vpx", "mod"]);
}
