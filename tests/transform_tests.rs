// Host-side tests for composing tilt and magnetic transforms on one element.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod transform {
    include!("../src/core/transform.rs");
}

use glam::Vec2;
use transform::*;

#[test]
fn untouched_state_has_no_transform() {
    assert_eq!(TransformState::new().css(), "none");
}

#[test]
fn tilt_only_element() {
    let mut s = TransformState::new();
    s.enable_tilt(1000.0);
    assert_eq!(s.css(), "perspective(1000px) rotateX(0deg) rotateY(0deg)");
    s.set_rotation(Vec2::new(-4.0, 2.5));
    assert_eq!(s.css(), "perspective(1000px) rotateX(-4deg) rotateY(2.5deg)");
    s.reset_rotation();
    assert_eq!(s.rotation(), Some(Vec2::ZERO));
}

#[test]
fn magnetic_only_element() {
    let mut s = TransformState::new();
    s.enable_translate();
    s.set_translation(Vec2::new(10.0, -3.25));
    assert_eq!(s.css(), "translate(10px, -3.25px)");
    s.reset_translation();
    assert_eq!(s.css(), "translate(0px, 0px)");
}

#[test]
fn tilt_and_magnetic_compose_instead_of_overwriting() {
    let mut s = TransformState::new();
    s.enable_tilt(1000.0);
    s.enable_translate();

    s.set_rotation(Vec2::new(3.0, -6.0));
    s.set_translation(Vec2::new(5.0, 2.0));
    let css = s.css();
    assert!(css.contains("rotateX(3deg)"));
    assert!(css.contains("rotateY(-6deg)"));
    assert!(css.contains("translate(5px, 2px)"));

    // leaving resets each component independently
    s.reset_translation();
    assert_eq!(
        s.css(),
        "perspective(1000px) translate(0px, 0px) rotateX(3deg) rotateY(-6deg)"
    );
}

#[test]
fn resets_do_not_enable_components() {
    let mut s = TransformState::new();
    s.reset_rotation();
    s.reset_translation();
    assert_eq!(s.css(), "none");
    assert_eq!(s.translation(), None);
}

#[test]
fn tiny_values_round_to_zero() {
    let mut s = TransformState::new();
    s.set_translation(Vec2::new(0.001, -0.004));
    assert_eq!(s.css(), "translate(0px, 0px)");
}
