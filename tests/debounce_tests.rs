// Host-side tests for the move-event debounce gate.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod debounce {
    include!("../src/core/debounce.rs");
}

use debounce::*;

#[test]
fn first_event_always_fires() {
    let mut d = Debouncer::new(60.0);
    assert!(d.should_fire(0.0));
}

#[test]
fn accepts_only_events_spaced_by_min_gap() {
    // Timestamps [0, 30, 60, 61, 200] with a 60ms gap: 30 is too close to 0,
    // 60 is exactly one gap after 0, 61 is 1ms after the newly accepted 60.
    let mut d = Debouncer::new(60.0);
    let accepted: Vec<f64> = [0.0, 30.0, 60.0, 61.0, 200.0]
        .into_iter()
        .filter(|&t| d.should_fire(t))
        .collect();
    assert_eq!(accepted, vec![0.0, 60.0, 200.0]);
}

#[test]
fn rejected_events_do_not_reset_the_window() {
    let mut d = Debouncer::new(60.0);
    assert!(d.should_fire(0.0));
    // A burst of rejected events must not push the window forward.
    for t in [10.0, 20.0, 30.0, 40.0, 50.0] {
        assert!(!d.should_fire(t));
    }
    assert!(d.should_fire(60.0));
}

#[test]
fn two_moves_10ms_apart_then_one_70ms_later() {
    let mut d = Debouncer::new(60.0);
    assert!(d.should_fire(100.0));
    assert!(!d.should_fire(110.0), "second event 10ms later must not spawn");
    assert!(d.should_fire(170.0), "event 70ms after the first must spawn");
}

#[test]
fn gap_boundary_is_inclusive() {
    let mut d = Debouncer::new(60.0);
    assert!(d.should_fire(0.0));
    assert!(d.should_fire(60.0), "exactly min_gap_ms must fire");
}

#[test]
fn min_gap_accessor_reports_configuration() {
    let d = Debouncer::new(45.0);
    assert_eq!(d.min_gap_ms(), 45.0);
}
