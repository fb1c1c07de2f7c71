//! Navbar visibility derived from the window scroll position.
//!
//! The navbar background switches once the page has left the top, and the
//! navigation links hide while the reader scrolls down past the fold and come
//! back as soon as they scroll up.

use yew::prelude::*;
use log::debug;
use web_sys::{window, Window};

use crate::scroll::listener::ScrollListener;

/// Past this offset the navbar gets its solid background.
pub const SCROLLED_THRESHOLD: u32 = 20;

/// Scrolling down past this offset hides the navigation links.
pub const HIDE_THRESHOLD: u32 = 100;

/// Anything that can report the current vertical scroll offset in pixels.
pub trait ScrollSource {
    fn offset(&self) -> u32;
}

impl ScrollSource for Window {
    fn offset(&self) -> u32 {
        self.scroll_y().map(offset_from_pixels).unwrap_or(0)
    }
}

/// Hosts report fractional and, during overscroll bounce, negative offsets.
pub fn offset_from_pixels(pixels: f64) -> u32 {
    if !pixels.is_finite() || pixels <= 0.0 {
        return 0;
    }
    pixels.min(u32::MAX as f64) as u32
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollVisibility {
    pub scrolled: bool,
    pub nav_visible: bool,
    pub last_position: u32,
}

impl Default for ScrollVisibility {
    fn default() -> Self {
        Self {
            scrolled: false,
            nav_visible: true,
            last_position: 0,
        }
    }
}

impl ScrollVisibility {
    /// Applies one scroll sample. Equal samples count as scrolling down.
    pub fn next(self, position: u32) -> Self {
        let moving_up = position < self.last_position;

        let mut nav_visible = self.nav_visible;
        if moving_up {
            nav_visible = true;
        } else if position > HIDE_THRESHOLD {
            nav_visible = false;
        }

        // Near the top the links are always shown, whatever the direction.
        let scrolled = position > SCROLLED_THRESHOLD;
        if !scrolled {
            nav_visible = true;
        }

        Self {
            scrolled,
            nav_visible,
            last_position: position,
        }
    }

    /// True when both states would render the navbar the same way.
    pub fn same_output(&self, other: &Self) -> bool {
        self.scrolled == other.scrolled && self.nav_visible == other.nav_visible
    }
}

/// Owns the visibility state and pulls a fresh sample from its source on
/// every scroll notification.
pub struct ScrollVisibilityController<S> {
    source: S,
    state: ScrollVisibility,
}

impl<S: ScrollSource> ScrollVisibilityController<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: ScrollVisibility::default(),
        }
    }

    pub fn state(&self) -> ScrollVisibility {
        self.state
    }

    pub fn on_scroll(&mut self) -> ScrollVisibility {
        self.state = self.state.next(self.source.offset());
        self.state
    }
}

/// Tracks the window scroll position for the lifetime of the calling
/// component. Re-renders only when `scrolled` or `nav_visible` flips.
#[hook]
pub fn use_scroll_visibility() -> ScrollVisibility {
    let visibility = use_state(ScrollVisibility::default);

    {
        let visibility = visibility.clone();
        use_effect_with_deps(
            move |_| {
                let listener = window().and_then(|window| {
                    let mut controller = ScrollVisibilityController::new(window.clone());
                    ScrollListener::passive(&window, move || {
                        let before = controller.state();
                        let after = controller.on_scroll();
                        if !before.same_output(&after) {
                            debug!(
                                "Navbar state changed at {}px: scrolled={}, nav_visible={}",
                                after.last_position, after.scrolled, after.nav_visible
                            );
                            visibility.set(after);
                        }
                    })
                });

                move || drop(listener)
            },
            (),
        );
    }

    *visibility
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn feed(samples: &[u32]) -> ScrollVisibility {
        samples
            .iter()
            .fold(ScrollVisibility::default(), |state, &p| state.next(p))
    }

    #[derive(Clone, Default)]
    struct FakeSource(Rc<Cell<u32>>);

    impl ScrollSource for FakeSource {
        fn offset(&self) -> u32 {
            self.0.get()
        }
    }

    #[test]
    fn test_initial_state() {
        let state = ScrollVisibility::default();
        assert!(!state.scrolled);
        assert!(state.nav_visible);
        assert_eq!(state.last_position, 0);
    }

    #[test]
    fn test_near_top_always_shows_nav() {
        let hidden = feed(&[0, 50, 150]);
        assert!(!hidden.nav_visible);

        for p in 0..=SCROLLED_THRESHOLD {
            for prior in [ScrollVisibility::default(), hidden, feed(&[300, 400])] {
                let state = prior.next(p);
                assert!(!state.scrolled, "p={}", p);
                assert!(state.nav_visible, "p={}", p);
            }
        }
    }

    #[test]
    fn test_scrolling_down_past_fold_hides_nav() {
        for p in [101, 150, 5_000] {
            let state = feed(&[0, 30, p]);
            assert!(state.scrolled);
            assert!(!state.nav_visible, "p={}", p);
        }
    }

    #[test]
    fn test_scrolling_down_before_fold_keeps_nav() {
        let state = feed(&[0, 60, 100]);
        assert!(state.scrolled);
        assert!(state.nav_visible);
    }

    #[test]
    fn test_scrolling_up_shows_nav_even_far_down() {
        let state = feed(&[0, 500, 1_000, 999]);
        assert!(state.scrolled);
        assert!(state.nav_visible);
    }

    #[test]
    fn test_repeated_sample_is_not_moving_up() {
        // Shown by scrolling up, then the same offset arrives twice.
        let state = feed(&[0, 400, 300]);
        assert!(state.nav_visible);
        let state = state.next(300);
        assert!(!state.nav_visible);
        let state = state.next(300);
        assert!(!state.nav_visible);
        assert_eq!(state.last_position, 300);

        // Below the hide threshold repeats change nothing.
        let state = feed(&[0, 60, 60, 60]);
        assert!(state.scrolled);
        assert!(state.nav_visible);
    }

    #[test]
    fn test_hidden_nav_stays_hidden_while_scrolling_down() {
        let state = feed(&[0, 150]);
        assert!(!state.nav_visible);
        let state = state.next(200);
        assert!(!state.nav_visible);
    }

    #[test]
    fn test_scenario_a_stays_at_top() {
        let mut state = ScrollVisibility::default();
        for p in [0, 10, 20] {
            state = state.next(p);
            assert!(!state.scrolled);
            assert!(state.nav_visible);
        }
    }

    #[test]
    fn test_scenarios_b_through_d() {
        let b = feed(&[0, 50, 150]);
        assert!(b.scrolled);
        assert!(!b.nav_visible);

        let c = b.next(120);
        assert!(c.scrolled);
        assert!(c.nav_visible);

        let d = c.next(5);
        assert!(!d.scrolled);
        assert!(d.nav_visible);
        assert_eq!(d.last_position, 5);
    }

    #[test]
    fn test_bounce_from_deep_to_top_in_one_sample() {
        let state = feed(&[0, 150]).next(15);
        assert!(!state.scrolled);
        assert!(state.nav_visible);
    }

    #[test]
    fn test_same_output_ignores_position() {
        let a = feed(&[0, 40]);
        let b = feed(&[0, 60]);
        assert!(a.same_output(&b));
        assert_ne!(a, b);
        assert!(!a.same_output(&feed(&[0, 200])));
    }

    #[test]
    fn test_controller_reads_source_on_each_notification() {
        let source = FakeSource::default();
        let mut controller = ScrollVisibilityController::new(source.clone());
        assert_eq!(controller.state(), ScrollVisibility::default());

        source.0.set(150);
        let state = controller.on_scroll();
        assert!(state.scrolled);
        assert!(!state.nav_visible);

        source.0.set(120);
        assert!(controller.on_scroll().nav_visible);

        source.0.set(5);
        let state = controller.on_scroll();
        assert!(!state.scrolled);
        assert!(state.nav_visible);
        assert_eq!(controller.state().last_position, 5);
    }

    #[test]
    fn test_offset_from_pixels() {
        assert_eq!(offset_from_pixels(0.0), 0);
        assert_eq!(offset_from_pixels(-12.5), 0);
        assert_eq!(offset_from_pixels(f64::NAN), 0);
        assert_eq!(offset_from_pixels(20.9), 20);
        assert_eq!(offset_from_pixels(1_234.0), 1_234);
    }
}
