//! Carousel Behaviour Tests
//!
//! Drives mounted carousels through virtual time and checks the index and
//! timer invariants: modular navigation, pause/resume with a fresh interval,
//! hover pause, focus-gated keys and teardown.

use std::time::Duration;

use folio_core::carousel::DEFAULT_INTERVAL;
use folio_core::{Carousel, CarouselKey, ImageItem, KeyOutcome, Mounted};
use pretty_assertions::assert_eq;

// =============================================================================
// Helpers
// =============================================================================

fn items(n: usize) -> Vec<ImageItem> {
    (1..=n)
        .map(|i| ImageItem::new(format!("MEM-{:02}", i), format!("photos/photo-{:02}.jpeg", i)))
        .collect()
}

fn mount(n: usize) -> Mounted<Carousel> {
    Mounted::mount(Carousel::new(items(n), DEFAULT_INTERVAL).unwrap())
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn index(m: &Mounted<Carousel>) -> usize {
    m.component().state().current_index
}

// =============================================================================
// Navigation
// =============================================================================

#[test]
fn jump_to_every_valid_index() {
    for len in 1..=11 {
        let mut m = mount(len);
        for i in 0..len {
            assert!(m.update(|c, ctx| c.jump_to(i, ctx)));
            assert_eq!(index(&m), i);
        }
    }
}

#[test]
fn jump_out_of_range_keeps_state() {
    let mut m = mount(4);
    m.update(|c, ctx| c.jump_to(2, ctx));

    assert!(!m.update(|c, ctx| c.jump_to(4, ctx)));
    assert!(!m.update(|c, ctx| c.jump_to(usize::MAX, ctx)));
    assert_eq!(index(&m), 2);
}

#[test]
fn advance_next_cycles_each_index_once_per_lap() {
    for len in 1..=7 {
        let mut m = mount(len);
        let mut seen = Vec::new();
        for _ in 0..(2 * len) {
            m.update(|c, ctx| c.advance_next(ctx));
            seen.push(index(&m));
        }

        let expected: Vec<usize> = (1..=2 * len).map(|k| k % len).collect();
        assert_eq!(seen, expected, "len = {}", len);
    }
}

#[test]
fn advance_prev_undoes_advance_next_from_any_start() {
    for len in 1..=6 {
        for start in 0..len {
            let mut m = mount(len);
            m.update(|c, ctx| c.jump_to(start, ctx));
            m.update(|c, ctx| c.advance_next(ctx));
            m.update(|c, ctx| c.advance_prev(ctx));
            assert_eq!(index(&m), start, "len = {}, start = {}", len, start);
        }
    }
}

#[test]
fn prev_from_first_wraps_to_last() {
    let mut m = mount(5);
    m.update(|c, ctx| c.advance_prev(ctx));
    assert_eq!(index(&m), 4);
}

// =============================================================================
// Auto-advance and pause
// =============================================================================

#[test]
fn three_images_return_to_start_after_three_intervals() {
    let mut m = mount(3);

    m.advance_to(ms(4000));
    assert_eq!(index(&m), 1);
    m.advance_to(ms(8000));
    assert_eq!(index(&m), 2);
    m.advance_to(ms(12000));
    assert_eq!(index(&m), 0);
}

#[test]
fn large_jump_in_time_fires_every_tick() {
    let mut m = mount(3);
    m.advance_to(ms(12000));
    assert_eq!(index(&m), 0);
    m.advance_to(ms(16000));
    assert_eq!(index(&m), 1);
}

#[test]
fn paused_carousel_never_auto_advances() {
    let mut m = mount(3);
    m.update(|c, ctx| c.set_paused(true, ctx));

    assert!(!m.component().is_running());
    assert_eq!(m.pending_timers(), 0);
    m.advance_to(ms(60_000));
    assert_eq!(index(&m), 0);
}

#[test]
fn resume_starts_a_fresh_interval() {
    let mut m = mount(3);

    m.advance_to(ms(3000));
    m.update(|c, ctx| c.set_paused(true, ctx));
    m.advance_to(ms(5000));
    m.update(|c, ctx| c.set_paused(false, ctx));

    m.advance_to(ms(8999));
    assert_eq!(index(&m), 0, "no partial tick may carry over");
    m.advance_to(ms(9000));
    assert_eq!(index(&m), 1);
}

#[test]
fn repeated_resume_does_not_restart_interval() {
    let mut m = mount(3);
    m.advance_to(ms(3000));
    m.update(|c, ctx| c.set_paused(false, ctx));

    m.advance_to(ms(4000));
    assert_eq!(index(&m), 1);
}

#[test]
fn hover_for_ten_seconds_allows_at_most_one_advance() {
    let mut m = mount(3);

    m.advance_to(ms(1500));
    m.update(|c, ctx| c.set_hovered(true, ctx));
    let paused_at = index(&m);

    m.advance_to(ms(11_500));
    assert_eq!(index(&m), paused_at);

    m.update(|c, ctx| c.set_hovered(false, ctx));
    m.advance_to(ms(15_499));
    assert_eq!(index(&m), paused_at);
    m.advance_to(ms(15_500));
    assert_eq!(index(&m), (paused_at + 1) % 3);
}

#[test]
fn manual_navigation_leaves_timer_alone() {
    let mut m = mount(4);

    m.advance_to(ms(3000));
    m.update(|c, ctx| c.advance_next(ctx));
    m.advance_to(ms(4000));

    assert_eq!(index(&m), 2);
}

// =============================================================================
// Keys, transitions, teardown
// =============================================================================

#[test]
fn arrow_keys_only_when_focused() {
    let mut m = mount(3);

    let outcome = m.update(|c, ctx| c.handle_key(CarouselKey::Right, ctx));
    assert_eq!(outcome, KeyOutcome::Ignored);
    assert_eq!(index(&m), 0);

    m.update(|c, ctx| c.set_focused(true, ctx));
    assert_eq!(m.update(|c, ctx| c.handle_key(CarouselKey::Right, ctx)), KeyOutcome::Consumed);
    assert_eq!(m.update(|c, ctx| c.handle_key(CarouselKey::Right, ctx)), KeyOutcome::Consumed);
    assert_eq!(m.update(|c, ctx| c.handle_key(CarouselKey::Left, ctx)), KeyOutcome::Consumed);
    assert_eq!(index(&m), 1);
}

#[test]
fn index_changes_before_crossfade_finishes() {
    let mut m = mount(3);
    m.advance_to(ms(4000));

    assert_eq!(index(&m), 1);
    let fade = *m.component().transition(ms(4100)).unwrap();
    assert_eq!((fade.from, fade.to), (0, 1));
    assert!(m.component().transition(ms(4700)).is_none());
}

#[test]
fn observers_see_every_auto_advance() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut m = mount(3);
    m.on_state_change(move |c: &Carousel| sink.borrow_mut().push(c.state().current_index));

    m.advance_to(ms(12_000));
    assert_eq!(*seen.borrow(), vec![1, 2, 0]);
}

#[test]
fn unmount_leaves_nothing_armed() {
    let mut m = mount(3);
    m.advance_to(ms(2000));
    assert_eq!(m.pending_timers(), 1);

    let carousel = m.unmount();
    assert!(!carousel.is_running());
}
