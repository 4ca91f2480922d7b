// Host-side tests for staggered line wrapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod stagger {
    include!("../src/core/stagger.rs");
}

use stagger::*;

#[test]
fn wraps_each_line_with_growing_delay() {
    let out = stagger_lines("数字に強い<br>経営の相棒<br>として", 200);
    assert_eq!(
        out,
        "<span class=\"stagger-line\" style=\"transition-delay: 0ms\">数字に強い</span><br>\
<span class=\"stagger-line\" style=\"transition-delay: 200ms\">経営の相棒</span><br>\
<span class=\"stagger-line\" style=\"transition-delay: 400ms\">として</span>"
    );
}

#[test]
fn single_line_gets_one_span() {
    let out = stagger_lines("one line", 200);
    assert_eq!(
        out,
        "<span class=\"stagger-line\" style=\"transition-delay: 0ms\">one line</span>"
    );
}

#[test]
fn wrapping_twice_equals_wrapping_once() {
    let html = "first<br>second<br>third";
    let once = stagger_lines(html, 200);
    let twice = stagger_lines(&once, 200);
    assert_eq!(once, twice);
    assert!(is_staggered(&once));
    assert!(!is_staggered(html));
}

#[test]
fn xhtml_breaks_are_normalized() {
    let out = stagger_lines("a<br/>b<br />c", 100);
    assert_eq!(out.matches("class=\"stagger-line\"").count(), 3);
    assert_eq!(out.matches("<br>").count(), 2);
    assert!(out.contains("transition-delay: 200ms\">c</span>"));
}

#[test]
fn inline_markup_inside_a_line_is_kept() {
    let out = stagger_lines("<strong>強調</strong><br>後半", 200);
    assert!(out.starts_with(
        "<span class=\"stagger-line\" style=\"transition-delay: 0ms\"><strong>強調</strong></span>"
    ));
}

#[test]
fn break_inside_inline_markup_stays_in_its_line() {
    let out = stagger_lines("<strong>a<br>b</strong>", 200);
    assert_eq!(
        out,
        "<span class=\"stagger-line\" style=\"transition-delay: 0ms\"><strong>a<br>b</strong></span>"
    );
}

#[test]
fn nested_and_top_level_breaks_mix() {
    let out = stagger_lines("上段<br><em>中<br/>段</em><BR>下段<img src=\"x.png\"><br>末尾", 100);
    assert_eq!(out.matches("class=\"stagger-line\"").count(), 4);
    assert!(out.contains("0ms\">上段</span>"));
    assert!(out.contains("100ms\"><em>中<br/>段</em></span>"));
    assert!(out.contains("200ms\">下段<img src=\"x.png\"></span>"));
    assert!(out.contains("300ms\">末尾</span>"));
}
