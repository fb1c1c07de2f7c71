use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, EventTarget};

/// A `scroll` listener that stays registered for as long as this value lives.
///
/// Registered passive so the browser never waits on the handler before
/// scrolling. Dropping it (usually from a `use_effect` cleanup) removes the
/// listener again.
pub struct ScrollListener {
    target: EventTarget,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn passive<F>(target: &EventTarget, handler: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);

        let options = AddEventListenerOptions::new();
        options.set_passive(true);

        match target.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(()) => Some(Self {
                target: target.clone(),
                callback,
            }),
            Err(e) => {
                warn!("Could not register scroll listener: {:?}", e);
                None
            }
        }
    }

    /// Runs the handler once without waiting for a scroll event.
    pub fn fire(&self) {
        let _ = self
            .callback
            .as_ref()
            .unchecked_ref::<web_sys::js_sys::Function>()
            .call0(&JsValue::NULL);
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}
