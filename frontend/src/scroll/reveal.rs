//! Scroll-triggered reveal animations.
//!
//! Elements start hidden in one of the [`Reveal`] poses and transition to
//! their resting state once enough of them intersects the viewport. The
//! transitions themselves are plain CSS (see [`REVEAL_CSS`]), the Rust side
//! only toggles the `in-view` class.

use yew::prelude::*;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    Fade,
    FadeUp,
    FadeLeft,
    FadeRight,
    ScaleUp,
    ImageScale,
}

impl Reveal {
    pub fn class(self) -> &'static str {
        match self {
            Reveal::Fade => "reveal-fade",
            Reveal::FadeUp => "reveal-fade-up",
            Reveal::FadeLeft => "reveal-fade-left",
            Reveal::FadeRight => "reveal-fade-right",
            Reveal::ScaleUp => "reveal-scale-up",
            Reveal::ImageScale => "reveal-image-scale",
        }
    }
}

/// Whether an observer entry counts as "in view" for the given `amount`
/// (fraction of the element that must be visible).
pub fn meets_amount(is_intersecting: bool, ratio: f64, amount: f64) -> bool {
    // Browsers round ratios slightly below the threshold they fired for.
    is_intersecting && ratio + 1e-3 >= amount
}

/// With `once`, an element that has been revealed stays revealed.
pub fn next_in_view(was_in_view: bool, intersecting: bool, once: bool) -> bool {
    if once && was_in_view {
        return true;
    }
    intersecting
}

/// Delay in seconds for the `index`th child of a staggered group.
pub fn stagger_delay(index: usize, step: f64, base: f64) -> f64 {
    base + index as f64 * step
}

pub fn delay_style(seconds: f64) -> String {
    if seconds <= 0.0 {
        return String::new();
    }
    format!("transition-delay: {:.2}s; animation-delay: {:.2}s;", seconds, seconds)
}

struct InViewObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl InViewObserver {
    fn observe(element: &Element, amount: f64, once: bool, in_view: UseStateHandle<bool>) -> Option<Self> {
        let mut shown = false;
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let intersecting = meets_amount(entry.is_intersecting(), entry.intersection_ratio(), amount);
                let next = next_in_view(shown, intersecting, once);
                if next != shown {
                    shown = next;
                    in_view.set(next);
                }
                if once && shown {
                    observer.disconnect();
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(amount));

        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                warn!("IntersectionObserver unavailable: {:?}", e);
                return None;
            }
        };
        observer.observe(element);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for InViewObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// True while at least `amount` of the referenced element is on screen.
#[hook]
pub fn use_in_view(node: NodeRef, amount: f64, once: bool) -> bool {
    let in_view = use_state(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |(node, amount, once): &(NodeRef, f64, bool)| {
                let observer = match node.cast::<Element>() {
                    Some(element) => InViewObserver::observe(&element, *amount, *once, in_view),
                    None => {
                        // Without an observer the content must not stay invisible.
                        in_view.set(true);
                        None
                    }
                };
                move || drop(observer)
            },
            (node, amount, once),
        );
    }

    *in_view
}

#[derive(Properties, PartialEq)]
pub struct RevealOnScrollProps {
    pub variant: Reveal,
    #[prop_or(0.3)]
    pub amount: f64,
    #[prop_or(false)]
    pub once: bool,
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RevealOnScroll)]
pub fn reveal_on_scroll(props: &RevealOnScrollProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), props.amount, props.once);

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.variant.class(), in_view.then(|| "in-view"), props.class.clone())}
            style={delay_style(props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}

pub const REVEAL_CSS: &str = r#"
    .reveal {
        opacity: 0;
        transition: opacity 0.8s ease-out, transform 0.8s ease-out;
        will-change: opacity, transform;
    }
    .reveal-fade-up { transform: translateY(30px); }
    .reveal-fade-left { transform: translateX(-50px); }
    .reveal-fade-right { transform: translateX(50px); }
    .reveal-scale-up {
        transform: scale(0.9);
        transition-duration: 0.5s;
    }
    .reveal-image-scale { transform: scale(0.9); }
    .reveal.in-view {
        opacity: 1;
        transform: none;
    }
    @media (prefers-reduced-motion: reduce) {
        .reveal {
            opacity: 1;
            transform: none;
            transition: none;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_once_latches() {
        assert!(!next_in_view(false, false, true));
        assert!(next_in_view(false, true, true));
        assert!(next_in_view(true, false, true));
    }

    #[test]
    fn test_repeatable_hides_on_exit() {
        assert!(next_in_view(false, true, false));
        assert!(!next_in_view(true, false, false));
        assert!(next_in_view(true, true, false));
    }

    #[test]
    fn test_meets_amount() {
        assert!(!meets_amount(false, 0.0, 0.3));
        assert!(!meets_amount(true, 0.1, 0.3));
        assert!(meets_amount(true, 0.3, 0.3));
        assert!(meets_amount(true, 0.2995, 0.3));
        assert!(meets_amount(true, 0.01, 0.0));
    }

    #[test]
    fn test_stagger_delay() {
        assert!((stagger_delay(0, 0.15, 0.1) - 0.1).abs() < 1e-9);
        assert!((stagger_delay(2, 0.15, 0.1) - 0.4).abs() < 1e-9);
        assert!((stagger_delay(3, 0.1, 0.0) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_delay_style() {
        assert_eq!(delay_style(0.0), "");
        assert_eq!(delay_style(0.3), "transition-delay: 0.30s; animation-delay: 0.30s;");
        assert_eq!(delay_style(stagger_delay(2, 0.15, 0.1)), "transition-delay: 0.40s; animation-delay: 0.40s;");
    }

    #[test]
    fn test_variant_classes_are_distinct() {
        let all = [
            Reveal::Fade,
            Reveal::FadeUp,
            Reveal::FadeLeft,
            Reveal::FadeRight,
            Reveal::ScaleUp,
            Reveal::ImageScale,
        ];
        for (i, a) in all.iter().enumerate() {
            assert!(a.class().starts_with("reveal-"));
            for b in &all[i + 1..] {
                assert_ne!(a.class(), b.class());
            }
        }
    }
}
