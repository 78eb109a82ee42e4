use super::*;

#[test]
fn default_filter_shows_everything() {
    let state = ProjectsState::default();
    assert_eq!(state.active_filter, ALL_FILTER);
    assert!(state.shows("web"));
    assert!(state.shows("design"));
    assert!(state.shows(""));
}

#[test]
fn named_filter_matches_by_equality() {
    let mut state = ProjectsState::default();
    state.set_filter("web");
    assert!(state.shows("web"));
    assert!(!state.shows("design"));
    assert!(!state.shows("webapp"));
}

#[test]
fn switching_back_to_all_restores_every_card() {
    let mut state = ProjectsState::default();
    state.set_filter("design");
    state.set_filter(ALL_FILTER);
    assert!(state.shows("web"));
    assert!(state.shows("app"));
}
