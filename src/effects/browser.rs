use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use crate::config::{REDUCED_MOTION_QUERY, REVEALED_CLASS};
use crate::effects::host::{
    HostError, MotionHost, MotionPreference, ScrollHost, VisibilityEntry, VisibilityHost,
};

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        HostError::Js(format!("{:?}", value))
    }
}

/// The real page: `window`, its scroll events, animation frames and
/// `IntersectionObserver`.
#[derive(Clone)]
pub struct BrowserHost {
    window: Window,
}

impl BrowserHost {
    pub fn new() -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::Unavailable("window"))?;
        Ok(Self { window })
    }
}

pub fn mark_element_revealed(element: &Element) {
    if let Err(err) = element.class_list().add_1(REVEALED_CLASS) {
        warn!("Failed to reveal section: {:?}", err);
    }
}

impl MotionHost for BrowserHost {
    fn motion_preference(&self) -> MotionPreference {
        match self.window.match_media(REDUCED_MOTION_QUERY) {
            Ok(Some(query)) => MotionPreference::from_reduced(query.matches()),
            // No way to ask, so assume the user wants stillness.
            Ok(None) | Err(_) => {
                warn!("matchMedia unavailable, treating as reduced motion");
                MotionPreference::Reduced
            }
        }
    }
}

impl ScrollHost for BrowserHost {
    type Listener = EventListener;
    type Frame = AnimationFrame;

    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn on_scroll(&self, mut handler: Box<dyn FnMut()>) -> EventListener {
        // gloo registers listeners as passive by default
        EventListener::new(&self.window, "scroll", move |_| handler())
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> AnimationFrame {
        request_animation_frame(move |_timestamp| callback())
    }
}

/// Disconnects the observer when dropped.
pub struct IntersectionObservation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for IntersectionObservation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl VisibilityHost for BrowserHost {
    type Target = Element;
    type Observation = IntersectionObservation;

    fn observe(
        &self,
        targets: &[Element],
        threshold: f64,
        mut on_entries: Box<dyn FnMut(Vec<VisibilityEntry<Element>>)>,
    ) -> Result<IntersectionObservation, HostError> {
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            let entries = entries
                .iter()
                .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| VisibilityEntry {
                    target: entry.target(),
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                })
                .collect();
            on_entries(entries);
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for target in targets {
            observer.observe(target);
        }

        Ok(IntersectionObservation {
            observer,
            _callback: callback,
        })
    }

    fn unobserve(&self, observation: &IntersectionObservation, target: &Element) {
        observation.observer.unobserve(target);
    }

    fn mark_revealed(&self, target: &Element) {
        mark_element_revealed(target);
    }
}
