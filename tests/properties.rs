#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use folio_wasm::deck::{ClipSide, ImageDeck, LayerState};
use folio_wasm::layout::LayoutMode;
use folio_wasm::throttle::{RateGate, SCROLL_THROTTLE_MS};
use folio_wasm::visibility::{Observation, VisibilityTracker};

wasm_bindgen_test_configure!(run_in_browser);

fn visible_indices(deck: &ImageDeck) -> Vec<usize> {
    deck.layers()
        .iter()
        .enumerate()
        .filter(|(_, layer)| !layer.hidden)
        .map(|(i, _)| i)
        .collect()
}

#[wasm_bindgen_test]
fn batch_tie_break_prefers_the_later_report() {
    let mut tracker = VisibilityTracker::new();
    let batch = [Observation::new(2, 0.3), Observation::new(5, 0.2)];
    assert_eq!(tracker.ingest(&batch), Some(5));
    assert_eq!(tracker.active(), Some(5));
}

#[wasm_bindgen_test]
fn quiet_batches_never_move_the_active_index() {
    let mut tracker = VisibilityTracker::new();
    tracker.ingest(&[Observation::new(1, 0.5)]);
    assert_eq!(tracker.ingest(&[Observation::new(2, 0.05)]), None);
    assert_eq!(tracker.active(), Some(1));
}

// The wide-viewport scenario: sections A, B, C, with only B reported above
// threshold, leaves A clipped one way, B front and captioned, C the other.
#[wasm_bindgen_test]
fn middle_section_scenario() {
    let mut tracker = VisibilityTracker::new();
    let mut deck = ImageDeck::new(3);

    let active = tracker.ingest(&[Observation::new(1, 0.4)]).unwrap();
    assert!(deck.apply_active(active));

    assert_eq!(visible_indices(&deck), vec![1]);
    assert_eq!(deck.layers()[0].clip, Some(ClipSide::BeforeCurrent));
    assert_eq!(deck.layers()[1], LayerState::current());
    assert_eq!(deck.layers()[2].clip, Some(ClipSide::AfterCurrent));
}

#[wasm_bindgen_test]
fn renderer_end_states_are_idempotent() {
    let mut deck = ImageDeck::new(4);
    deck.apply_active(2);
    let snapshot = deck.layers().to_vec();
    deck.apply_active(2);
    assert_eq!(deck.layers(), snapshot.as_slice());
}

#[wasm_bindgen_test]
fn rectangular_reset_applies_from_any_active_index() {
    for k in 0..5 {
        let mut deck = ImageDeck::new(5);
        deck.apply_active(k);
        deck.reset_neutral();
        assert!(deck
            .layers()
            .iter()
            .all(|layer| *layer == LayerState::at_rest()));
    }
}

#[wasm_bindgen_test]
fn a_scroll_burst_admits_one_update() {
    let mut gate = RateGate::new(SCROLL_THROTTLE_MS);
    let admitted = (0..10)
        .filter(|i| gate.admit(*i as f64 * (SCROLL_THROTTLE_MS / 10.0)))
        .count();
    assert_eq!(admitted, 1);
}

#[wasm_bindgen_test]
fn stored_preference_overrides_the_system_preference() {
    assert_eq!(
        LayoutMode::resolve(Some("diagonal"), true),
        LayoutMode::Diagonal
    );
    assert_eq!(
        LayoutMode::resolve(Some("rectangular"), false),
        LayoutMode::Rectangular
    );
    assert_eq!(LayoutMode::resolve(None, true), LayoutMode::Rectangular);
}
