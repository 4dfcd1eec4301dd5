//! Narrow seams between the scroll effects and the page host.
//!
//! Every resource handed out by a host (scroll listener, animation frame,
//! intersection observation) is a guard: dropping it releases the resource.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("browser primitive `{0}` is unavailable")]
    Unavailable(&'static str),
    #[error("browser call failed: {0}")]
    Js(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionPreference {
    Full,
    Reduced,
}

impl MotionPreference {
    pub fn from_reduced(reduced: bool) -> Self {
        if reduced {
            MotionPreference::Reduced
        } else {
            MotionPreference::Full
        }
    }

    pub fn is_reduced(self) -> bool {
        self == MotionPreference::Reduced
    }
}

pub trait MotionHost {
    /// Sampled once when an effect is set up.
    fn motion_preference(&self) -> MotionPreference;
}

pub trait ScrollHost {
    type Listener: 'static;
    type Frame: 'static;

    fn scroll_offset(&self) -> f64;
    fn on_scroll(&self, handler: Box<dyn FnMut()>) -> Self::Listener;
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Self::Frame;
}

#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityEntry<T> {
    pub target: T,
    pub is_intersecting: bool,
    pub ratio: f64,
}

pub trait VisibilityHost {
    type Target: Clone + PartialEq + 'static;
    type Observation: 'static;

    fn observe(
        &self,
        targets: &[Self::Target],
        threshold: f64,
        on_entries: Box<dyn FnMut(Vec<VisibilityEntry<Self::Target>>)>,
    ) -> Result<Self::Observation, HostError>;

    fn unobserve(&self, observation: &Self::Observation, target: &Self::Target);

    fn mark_revealed(&self, target: &Self::Target);
}
