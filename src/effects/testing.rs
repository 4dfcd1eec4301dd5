//! In-memory host for driving the effects without a browser.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::effects::host::{
    HostError, MotionHost, MotionPreference, ScrollHost, VisibilityEntry, VisibilityHost,
};

pub type ScrollHandler = Rc<RefCell<Box<dyn FnMut()>>>;
pub type EntriesHandler = Rc<RefCell<Box<dyn FnMut(Vec<VisibilityEntry<usize>>)>>>;

#[derive(Default)]
struct State {
    scroll_y: f64,
    scroll_reads: usize,
    reduced_motion: bool,
    next_id: usize,
    scroll_handlers: Vec<(usize, ScrollHandler)>,
    frames: Vec<(usize, Box<dyn FnOnce()>)>,
    observers: Vec<(usize, EntriesHandler)>,
    observed: Vec<usize>,
    revealed: Vec<usize>,
    fail_observe: bool,
}

impl State {
    fn next_id(&mut self) -> usize {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Clone, Default)]
pub struct FakeHost {
    state: Rc<RefCell<State>>,
    observe_calls: Rc<Cell<usize>>,
}

impl FakeHost {
    pub fn with_reduced_motion() -> Self {
        let host = Self::default();
        host.state.borrow_mut().reduced_motion = true;
        host
    }

    pub fn failing_observer() -> Self {
        let host = Self::default();
        host.state.borrow_mut().fail_observe = true;
        host
    }

    pub fn set_scroll(&self, y: f64) {
        self.state.borrow_mut().scroll_y = y;
    }

    pub fn fire_scroll(&self, y: f64) {
        self.set_scroll(y);
        for handler in self.scroll_handlers() {
            (*handler.borrow_mut())();
        }
    }

    pub fn scroll_handlers(&self) -> Vec<ScrollHandler> {
        let state = self.state.borrow();
        state.scroll_handlers.iter().map(|(_, h)| h.clone()).collect()
    }

    pub fn run_frames(&self) {
        let frames = std::mem::take(&mut self.state.borrow_mut().frames);
        for (_, frame) in frames {
            frame();
        }
    }

    pub fn emit(&self, entries: Vec<VisibilityEntry<usize>>) {
        for handler in self.entries_handlers() {
            (*handler.borrow_mut())(entries.clone());
        }
    }

    pub fn entries_handlers(&self) -> Vec<EntriesHandler> {
        let state = self.state.borrow();
        state.observers.iter().map(|(_, h)| h.clone()).collect()
    }

    pub fn scroll_listener_count(&self) -> usize {
        self.state.borrow().scroll_handlers.len()
    }

    pub fn pending_frame_count(&self) -> usize {
        self.state.borrow().frames.len()
    }

    pub fn scroll_reads(&self) -> usize {
        self.state.borrow().scroll_reads
    }

    pub fn observer_count(&self) -> usize {
        self.state.borrow().observers.len()
    }

    pub fn observe_calls(&self) -> usize {
        self.observe_calls.get()
    }

    pub fn observed(&self) -> Vec<usize> {
        self.state.borrow().observed.clone()
    }

    pub fn revealed(&self) -> Vec<usize> {
        self.state.borrow().revealed.clone()
    }
}

pub fn entry(target: usize, ratio: f64) -> VisibilityEntry<usize> {
    VisibilityEntry {
        target,
        is_intersecting: ratio > 0.0,
        ratio,
    }
}

pub struct FakeListener {
    id: usize,
    state: Rc<RefCell<State>>,
}

impl Drop for FakeListener {
    fn drop(&mut self) {
        let id = self.id;
        self.state.borrow_mut().scroll_handlers.retain(|(i, _)| *i != id);
    }
}

pub struct FakeFrame {
    id: usize,
    state: Rc<RefCell<State>>,
}

impl Drop for FakeFrame {
    fn drop(&mut self) {
        let id = self.id;
        self.state.borrow_mut().frames.retain(|(i, _)| *i != id);
    }
}

pub struct FakeObservation {
    id: usize,
    state: Rc<RefCell<State>>,
}

impl Drop for FakeObservation {
    fn drop(&mut self) {
        let id = self.id;
        let mut state = self.state.borrow_mut();
        state.observers.retain(|(i, _)| *i != id);
        state.observed.clear();
    }
}

impl MotionHost for FakeHost {
    fn motion_preference(&self) -> MotionPreference {
        MotionPreference::from_reduced(self.state.borrow().reduced_motion)
    }
}

impl ScrollHost for FakeHost {
    type Listener = FakeListener;
    type Frame = FakeFrame;

    fn scroll_offset(&self) -> f64 {
        let mut state = self.state.borrow_mut();
        state.scroll_reads += 1;
        state.scroll_y
    }

    fn on_scroll(&self, handler: Box<dyn FnMut()>) -> FakeListener {
        let mut state = self.state.borrow_mut();
        let id = state.next_id();
        state.scroll_handlers.push((id, Rc::new(RefCell::new(handler))));
        FakeListener {
            id,
            state: self.state.clone(),
        }
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> FakeFrame {
        let mut state = self.state.borrow_mut();
        let id = state.next_id();
        state.frames.push((id, callback));
        FakeFrame {
            id,
            state: self.state.clone(),
        }
    }
}

impl VisibilityHost for FakeHost {
    type Target = usize;
    type Observation = FakeObservation;

    fn observe(
        &self,
        targets: &[usize],
        _threshold: f64,
        on_entries: Box<dyn FnMut(Vec<VisibilityEntry<usize>>)>,
    ) -> Result<FakeObservation, HostError> {
        self.observe_calls.set(self.observe_calls.get() + 1);
        let mut state = self.state.borrow_mut();
        if state.fail_observe {
            return Err(HostError::Unavailable("IntersectionObserver"));
        }
        let id = state.next_id();
        state.observers.push((id, Rc::new(RefCell::new(on_entries))));
        state.observed.extend_from_slice(targets);
        Ok(FakeObservation {
            id,
            state: self.state.clone(),
        })
    }

    fn unobserve(&self, _observation: &FakeObservation, target: &usize) {
        self.state.borrow_mut().observed.retain(|t| t != target);
    }

    fn mark_revealed(&self, target: &usize) {
        let mut state = self.state.borrow_mut();
        if !state.revealed.contains(target) {
            state.revealed.push(*target);
        }
    }
}
