// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn easing_factors_are_fractions() {
    assert!(CURSOR_LERP_FACTOR > 0.0 && CURSOR_LERP_FACTOR < 1.0);
    assert!(MAGNETIC_STRENGTH > 0.0 && MAGNETIC_STRENGTH < 1.0);
    assert!(PARALLAX_FACTOR > 0.0 && PARALLAX_FACTOR < 1.0);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ripple_is_smaller_on_mobile() {
    assert!(RIPPLE_SIZE_MOBILE_PX > 0.0);
    assert!(RIPPLE_SIZE_MOBILE_PX < RIPPLE_SIZE_DESKTOP_PX);
    assert!(RIPPLE_ANIMATION_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn feedback_timings_have_logical_relationships() {
    // header flash is shorter than the link pulse, and scrolling starts
    // while the pulse is still visible
    assert!(HEADER_FLASH_MS < NAV_PULSE_MS);
    assert!(NAV_SCROLL_DELAY_MS < NAV_PULSE_MS);

    // the manual-copy instruction needs more reading time than the success note
    assert!(COPY_FAIL_VISIBLE_MS > COPY_OK_VISIBLE_MS);
    assert!(DRAFT_FADE_MS < DRAFT_COPY_VISIBLE_MS);
}

#[test]
fn dim_opacity_parses_as_fraction() {
    let v: f32 = DRAFT_DIM_OPACITY.parse().unwrap();
    assert!(v > 0.0 && v < 1.0);
}

#[test]
fn copy_messages_differ() {
    assert_ne!(MSG_EMAIL_COPIED, MSG_EMAIL_COPY_FAILED);
    assert!(!MSG_EMAIL_COPIED.is_empty());
    assert!(DRAFT_SUBJECT_LABEL.ends_with('：'));
}

#[test]
fn excluded_ripple_selectors_cover_copy_buttons_and_links() {
    assert!(SEL_RIPPLE_EXCLUDED.contains(&".copy-btn"));
    assert!(SEL_RIPPLE_EXCLUDED.contains(&"a"));
}
