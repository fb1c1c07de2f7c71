use yew::prelude::*;
use web_sys::window;

use crate::scroll::listener::ScrollListener;

/// Fraction of the document progress over which the hero image moves.
const PARALLAX_RANGE: f64 = 0.2;
const PARALLAX_LIFT_PX: f64 = 50.0;
const PARALLAX_GROWTH: f64 = 0.05;

/// How far through the document the viewport is, from 0 at the top to 1 at
/// the bottom. A page that cannot scroll stays at 0.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable.is_nan() || scrollable <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Vertical offset (px) and scale for the hero image at the given progress.
pub fn hero_parallax(progress: f64) -> (f64, f64) {
    let t = (progress / PARALLAX_RANGE).clamp(0.0, 1.0);
    // Subtracting from 0.0 keeps the resting offset a positive zero.
    (0.0 - PARALLAX_LIFT_PX * t, 1.0 + PARALLAX_GROWTH * t)
}

pub fn parallax_style(progress: f64) -> String {
    let (y, scale) = hero_parallax(progress);
    format!("transform: translateY({:.1}px) scale({:.3});", y, scale)
}

fn current_progress() -> Option<f64> {
    let window = window()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let document = window.document()?.document_element()?.scroll_height() as f64;
    Some(scroll_progress(scroll_y, document, viewport))
}

/// Document scroll progress, updated on every scroll event while mounted.
#[hook]
pub fn use_scroll_progress() -> f64 {
    let progress = use_state(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let listener = window().and_then(|window| {
                    ScrollListener::passive(&window, move || {
                        if let Some(p) = current_progress() {
                            progress.set(p);
                        }
                    })
                });
                // Pick up the position a reload restored before any scroll event.
                if let Some(listener) = &listener {
                    listener.fire();
                }
                move || drop(listener)
            },
            (),
        );
    }

    *progress
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_progress_of_unscrollable_page() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(10.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn test_progress_clamps() {
        assert!(close(scroll_progress(500.0, 1800.0, 800.0), 0.5));
        assert_eq!(scroll_progress(-40.0, 1800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(5_000.0, 1800.0, 800.0), 1.0);
    }

    #[test]
    fn test_parallax_endpoints() {
        assert_eq!(hero_parallax(0.0), (0.0, 1.0));
        let (y, scale) = hero_parallax(0.2);
        assert!(close(y, -50.0));
        assert!(close(scale, 1.05));
    }

    #[test]
    fn test_parallax_midpoint_and_clamp() {
        let (y, scale) = hero_parallax(0.1);
        assert!(close(y, -25.0));
        assert!(close(scale, 1.025));

        assert_eq!(hero_parallax(0.9), hero_parallax(0.2));
        assert_eq!(hero_parallax(-1.0), (0.0, 1.0));
    }

    #[test]
    fn test_parallax_style() {
        assert_eq!(parallax_style(0.0), "transform: translateY(0.0px) scale(1.000);");
        assert_eq!(parallax_style(1.0), "transform: translateY(-50.0px) scale(1.050);");
    }
}
