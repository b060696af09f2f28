// Host-side tests for style-block rule synthesis and replacement.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod style {
    include!("../src/core/style.rs");
}

use style::*;

const SELECTORS: [&str; 2] = [".caustic", ".interactive-caustic"];

#[test]
fn seed_holds_one_placeholder_rule_per_selector() {
    let css = seed(&SELECTORS);
    assert_eq!(css, "\n.caustic { }\n.interactive-caustic { }\n");
}

#[test]
fn rule_synthesis_wraps_declarations() {
    assert_eq!(
        rule(".caustic", "border-width: 4px;"),
        ".caustic { border-width: 4px; }"
    );
}

#[test]
fn rewrite_replaces_only_the_matching_rule() {
    let css = seed(&SELECTORS);
    let next = replace_rule(
        &css,
        ".caustic",
        &rule(".caustic", "border-width: 4px; border-color: hsla(185, 70%, 85%, 1);"),
    )
    .expect("seeded selector must match");
    assert!(next.contains(".caustic { border-width: 4px; border-color: hsla(185, 70%, 85%, 1); }"));
    // The ripple rule is untouched.
    assert!(next.contains(".interactive-caustic { }"));
}

#[test]
fn rewrite_is_idempotent() {
    // Applying the same rewrite twice leaves exactly one rule, no leftovers.
    let css = seed(&SELECTORS);
    let new_rule = rule(".caustic", "border-width: 8px;");
    let once = replace_rule(&css, ".caustic", &new_rule).unwrap();
    let twice = replace_rule(&once, ".caustic", &new_rule).unwrap();
    assert_eq!(once, twice);
    assert_eq!(twice.matches(".caustic {").count(), 1);
}

#[test]
fn successive_rewrites_replace_rather_than_accumulate() {
    let css = seed(&SELECTORS);
    let a = replace_rule(&css, ".caustic", &rule(".caustic", "border-width: 2px;")).unwrap();
    let b = replace_rule(&a, ".caustic", &rule(".caustic", "border-width: 9px;")).unwrap();
    assert!(b.contains("border-width: 9px;"));
    assert!(!b.contains("border-width: 2px;"));
    assert_eq!(b.lines().count(), css.lines().count());
}

#[test]
fn unseeded_selector_is_dropped() {
    let css = seed(&SELECTORS);
    assert!(replace_rule(&css, ".ripple-glow", &rule(".ripple-glow", "opacity: 1;")).is_none());
}

#[test]
fn selector_prefix_does_not_match_longer_class_names() {
    let css = "\n.caustic-halo { }\n.caustic { }\n";
    let next = replace_rule(&css, ".caustic", &rule(".caustic", "border-width: 1px;")).unwrap();
    assert!(next.contains(".caustic-halo { }"));
    assert!(next.contains(".caustic { border-width: 1px; }"));
}

#[test]
fn ripple_rewrite_does_not_clobber_the_ambient_rule() {
    let css = seed(&SELECTORS);
    let with_caustic =
        replace_rule(&css, ".caustic", &rule(".caustic", "border-width: 4px;")).unwrap();
    let with_both = replace_rule(
        &with_caustic,
        ".interactive-caustic",
        &rule(".interactive-caustic", "border-width: 8px;"),
    )
    .unwrap();
    assert!(with_both.contains(".caustic { border-width: 4px; }"));
    assert!(with_both.contains(".interactive-caustic { border-width: 8px; }"));
}
