use super::*;

#[test]
fn from_matches_picks_widest_tier() {
    assert_eq!(Viewport::from_matches(false, false), Viewport::Compact);
    assert_eq!(Viewport::from_matches(true, false), Viewport::Narrow);
    assert_eq!(Viewport::from_matches(true, true), Viewport::Wide);
}

#[test]
fn wide_query_wins_even_if_small_query_lags() {
    assert_eq!(Viewport::from_matches(false, true), Viewport::Wide);
}

#[test]
fn tier_predicates() {
    assert!(Viewport::Wide.is_wide());
    assert!(!Viewport::Narrow.is_wide());
    assert!(Viewport::Compact.is_compact());
    assert!(!Viewport::Narrow.is_compact());
}
