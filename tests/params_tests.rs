// Host-side tests for parameter state and derived style strings.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod params {
    include!("../src/core/params.rs");
}

use params::*;

#[test]
fn hsla_compiles_the_four_channels() {
    assert_eq!(hsla(185.0, 70.0, 85.0, 1.0), "hsla(185, 70%, 85%, 1)");
    assert_eq!(hsla(0.0, 0.0, 100.0, 0.5), "hsla(0, 0%, 100%, 0.5)");
}

#[test]
fn defaults_are_deterministic() {
    // Resetting from any state lands on the same embedded defaults as a
    // fresh initialization.
    assert_eq!(ParameterState::default(), ParameterState::default());
    let fresh = ParameterState::default();
    assert_eq!(fresh.caustic_declarations(), ParameterState::default().caustic_declarations());
    assert_eq!(fresh.background_filter(), ParameterState::default().background_filter());
}

#[test]
fn caustic_declarations_use_strength_and_compiled_color() {
    let p = ParameterState {
        caustic_hue: 200.0,
        caustic_sat: 50.0,
        caustic_lit: 60.0,
        caustic_strength: 4.0,
        ..ParameterState::default()
    };
    assert_eq!(
        p.caustic_declarations(),
        "border-width: 4px; border-color: hsla(200, 50%, 60%, 1);"
    );
}

#[test]
fn ripple_border_width_is_double_but_capped() {
    let mut p = ParameterState {
        caustic_strength: 10.0,
        ..ParameterState::default()
    };
    assert!(p.ripple_declarations().starts_with("border-width: 20px;"));

    p.caustic_strength = 25.0;
    assert!(
        p.ripple_declarations().starts_with("border-width: 40px;"),
        "double strength must clamp at {RIPPLE_BORDER_MAX_PX}px"
    );
}

#[test]
fn filter_strings_compose_from_current_values() {
    let p = ParameterState {
        bg_brightness: 1.2,
        bg_contrast: 0.9,
        caustic_blur_px: 7.0,
        ..ParameterState::default()
    };
    assert_eq!(p.background_filter(), "brightness(1.2) contrast(0.9)");
    assert_eq!(p.caustic_blur_filter(), "blur(7px)");
}

#[test]
fn colors_derive_from_their_own_channel_group() {
    let p = ParameterState {
        caustic_hue: 10.0,
        bg_hue: 300.0,
        ..ParameterState::default()
    };
    assert!(p.caustic_color().starts_with("hsla(10,"));
    assert!(p.background_color().starts_with("hsla(300,"));
}
