// Active-definition state machine and stagger interaction

use marginalia_wasm::models::{Definition, PanelMeasurements};
use marginalia_wasm::{LayoutEngine, PanelState, Transition};

fn definitions(ids: &[&str]) -> Vec<Definition> {
    ids.iter()
        .map(|id| Definition::new(*id, format!("Term {id}"), "body"))
        .collect()
}

fn even_measurements(count: usize) -> PanelMeasurements {
    PanelMeasurements {
        panel_top: 0.0,
        marker_tops: (0..count).map(|i| Some(i as f64 * 200.0)).collect(),
        card_heights: (0..count).map(|_| Some(40.0)).collect(),
    }
}

#[test]
fn test_at_most_one_active() {
    let mut state = PanelState::new();
    state.toggle("a");
    state.toggle("b");

    assert!(state.is_active("b"));
    assert!(!state.is_active("a"));
    assert_eq!(state.active_id(), Some("b"));
}

#[test]
fn test_toggle_off_returns_to_idle() {
    let mut state = PanelState::new();
    assert_eq!(state.toggle("d2"), Transition::Opened("d2".to_string()));
    assert_eq!(state.toggle("d2"), Transition::Closed);
    assert_eq!(state.active_id(), None);
}

#[test]
fn test_replace_has_no_intermediate_idle() {
    let mut state = PanelState::new();
    state.toggle("a");
    match state.toggle("b") {
        Transition::Opened(id) => assert_eq!(id, "b"),
        other => panic!("expected direct replacement, got {other:?}"),
    }
}

#[test]
fn test_toggle_then_pass_staggers_following_cards() {
    let defs = definitions(&["a", "b", "c", "d"]);
    let mut state = PanelState::new();
    state.toggle("b");

    let last_toggled = state.take_last_toggled();
    let list = LayoutEngine::new().compute_layout(
        &defs,
        &even_measurements(4),
        last_toggled.as_deref(),
    );

    assert_eq!(list.card("a").unwrap().delay_ms, 0.0);
    assert_eq!(list.card("b").unwrap().delay_ms, 0.0);
    assert_eq!(list.card("c").unwrap().delay_ms, 0.0);
    assert_eq!(list.card("d").unwrap().delay_ms, 40.0);
}

#[test]
fn test_second_pass_does_not_stagger_again() {
    let defs = definitions(&["a", "b", "c", "d"]);
    let mut state = PanelState::new();
    state.toggle("a");

    let engine = LayoutEngine::new();
    let m = even_measurements(4);

    let first = engine.compute_layout(&defs, &m, state.take_last_toggled().as_deref());
    assert!(first.cards.iter().any(|c| c.delay_ms > 0.0));

    // The toggled id was consumed; a follow-up passive pass animates
    // everything immediately.
    let second = engine.compute_layout(&defs, &m, state.take_last_toggled().as_deref());
    assert!(second.cards.iter().all(|c| c.delay_ms == 0.0));
}

#[test]
fn test_toggle_off_does_not_stagger() {
    let defs = definitions(&["a", "b", "c"]);
    let mut state = PanelState::new();
    state.toggle("a");
    state.take_last_toggled();
    state.toggle("a");

    let list = LayoutEngine::new().compute_layout(
        &defs,
        &even_measurements(3),
        state.take_last_toggled().as_deref(),
    );
    assert!(list.cards.iter().all(|c| c.delay_ms == 0.0));
}

#[test]
fn test_rapid_toggles_honor_most_recent() {
    // Two toggles land before a pass runs; the single slot keeps only
    // the most recent for stagger purposes.
    let mut state = PanelState::new();
    state.toggle("a");
    state.toggle("c");

    assert_eq!(state.take_last_toggled(), Some("c".to_string()));
    assert!(state.is_active("c"));
}

#[test]
fn test_min_height_tracks_layout() {
    let defs = definitions(&["a", "b"]);
    let mut state = PanelState::new();
    let list = LayoutEngine::new().compute_layout(&defs, &even_measurements(2), None);
    state.set_min_height(list.min_height);

    // b at 200 with height 40
    assert_eq!(state.min_height(), Some(240.0));
}
