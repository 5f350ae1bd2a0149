//! Scroll-top state machine behavior.

use wisp_dom::scroll_top::{SCROLL_SHOW_THRESHOLD, ScrollTopMachine, Visibility};

#[test]
fn starts_hidden() {
    let machine = ScrollTopMachine::new();
    assert_eq!(machine.state(), Visibility::Hidden);
}

#[test]
fn shows_past_threshold_and_hides_back() {
    let mut machine = ScrollTopMachine::new();

    assert_eq!(machine.on_scroll(SCROLL_SHOW_THRESHOLD + 1), Visibility::Shown);
    assert_eq!(machine.state(), Visibility::Shown);

    // Exactly at the threshold counts as not scrolled far enough.
    assert_eq!(machine.on_scroll(SCROLL_SHOW_THRESHOLD), Visibility::Hidden);
    assert_eq!(machine.on_scroll(0), Visibility::Hidden);
}

#[test]
fn repeated_events_are_idempotent() {
    let mut machine = ScrollTopMachine::new();

    let first = machine.on_scroll(450);
    let second = machine.on_scroll(450);
    assert_eq!(first, second);
    assert_eq!(machine.state(), Visibility::Shown);

    machine.on_scroll(10);
    machine.on_scroll(10);
    assert_eq!(machine.state(), Visibility::Hidden);
}

#[test]
fn state_tracks_only_the_latest_offset() {
    let mut machine = ScrollTopMachine::new();
    for offset in [0, 500, 120, 301, 300] {
        machine.on_scroll(offset);
    }
    assert_eq!(machine.state(), Visibility::Hidden);
}
