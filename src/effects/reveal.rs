use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, info, warn};

use crate::effects::host::{MotionPreference, VisibilityEntry, VisibilityHost};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

/// One-way `Hidden -> Revealed` flag per section.
#[derive(Clone, Debug)]
pub struct RevealTracker {
    states: Vec<RevealState>,
    threshold: f64,
}

impl RevealTracker {
    pub fn new(sections: usize, threshold: f64) -> Self {
        Self {
            states: vec![RevealState::Hidden; sections],
            threshold,
        }
    }

    /// Feeds one visibility reading. Returns `true` only on the reading that
    /// flips the section to revealed.
    pub fn record(&mut self, index: usize, is_intersecting: bool, ratio: f64) -> bool {
        // NaN compares false both ways, so it is rejected explicitly
        if !is_intersecting || ratio.is_nan() || ratio < self.threshold {
            return false;
        }
        self.reveal(index)
    }

    pub fn reveal(&mut self, index: usize) -> bool {
        match self.states.get_mut(index) {
            Some(state @ RevealState::Hidden) => {
                *state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn reveal_all(&mut self) -> usize {
        (0..self.states.len()).filter(|&i| self.reveal(i)).count()
    }

    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    pub fn revealed_count(&self) -> usize {
        self.states
            .iter()
            .filter(|s| **s == RevealState::Revealed)
            .count()
    }

    pub fn all_revealed(&self) -> bool {
        self.revealed_count() == self.states.len()
    }
}

struct RevealInner<H: VisibilityHost> {
    host: H,
    targets: Vec<H::Target>,
    tracker: RefCell<RevealTracker>,
    observation: RefCell<Option<H::Observation>>,
}

impl<H: VisibilityHost> RevealInner<H> {
    fn reveal_everything(&self) {
        self.tracker.borrow_mut().reveal_all();
        for target in &self.targets {
            self.host.mark_revealed(target);
        }
    }

    fn handle_entries(&self, entries: Vec<VisibilityEntry<H::Target>>) {
        for entry in entries {
            let Some(index) = self.targets.iter().position(|t| *t == entry.target) else {
                continue;
            };
            let flipped = self
                .tracker
                .borrow_mut()
                .record(index, entry.is_intersecting, entry.ratio);
            if !flipped {
                continue;
            }
            debug!("Revealing section {} at ratio {:.3}", index, entry.ratio);
            self.host.mark_revealed(&entry.target);
            if let Some(observation) = self.observation.borrow().as_ref() {
                self.host.unobserve(observation, &entry.target);
            }
        }

        if self.tracker.borrow().all_revealed() {
            // Nothing left to watch.
            let released = self.observation.borrow_mut().take();
            drop(released);
        }
    }
}

/// Reveal-on-scroll for a fixed set of sections. Dropping the effect ends
/// all observation.
pub struct RevealEffect<H: VisibilityHost> {
    inner: Rc<RevealInner<H>>,
}

impl<H: VisibilityHost + 'static> RevealEffect<H> {
    pub fn start(
        host: H,
        targets: Vec<H::Target>,
        motion: MotionPreference,
        threshold: f64,
    ) -> Self {
        let inner = Rc::new(RevealInner {
            tracker: RefCell::new(RevealTracker::new(targets.len(), threshold)),
            host,
            targets,
            observation: RefCell::new(None),
        });

        if motion.is_reduced() {
            info!("Reduced motion requested, showing all {} sections", inner.targets.len());
            inner.reveal_everything();
            return Self { inner };
        }
        if inner.targets.is_empty() {
            return Self { inner };
        }

        let weak: Weak<RevealInner<H>> = Rc::downgrade(&inner);
        let observed = inner.host.observe(
            &inner.targets,
            threshold,
            Box::new(move |entries| {
                if let Some(inner) = weak.upgrade() {
                    inner.handle_entries(entries);
                }
            }),
        );
        match observed {
            Ok(observation) => {
                info!("Observing {} sections for reveal", inner.targets.len());
                *inner.observation.borrow_mut() = Some(observation);
            }
            Err(err) => {
                warn!("Reveal animation unavailable, showing content: {}", err);
                inner.reveal_everything();
            }
        }

        Self { inner }
    }

    pub fn revealed_count(&self) -> usize {
        self.inner.tracker.borrow().revealed_count()
    }

    pub fn is_observing(&self) -> bool {
        self.inner.observation.borrow().is_some()
    }
}

#[cfg(test)]
impl<H: VisibilityHost + 'static> RevealEffect<H> {
    fn state(&self, index: usize) -> Option<RevealState> {
        self.inner.tracker.borrow().state(index)
    }
}
