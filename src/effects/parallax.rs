use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::info;

use crate::config::PARALLAX_RATES;
use crate::effects::host::{MotionPreference, ScrollHost};

/// Vertical translations, in pixels, for the three backdrop layers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxOffsets {
    pub orb_a: f64,
    pub orb_b: f64,
    pub grid: f64,
}

impl ParallaxOffsets {
    pub fn from_scroll(scroll_y: f64) -> Self {
        // f64::max drops NaN, so a bogus reading lands on zero too
        let scroll_y = if scroll_y.is_finite() { scroll_y.max(0.0) } else { 0.0 };
        let [orb_a, orb_b, grid] = PARALLAX_RATES;
        Self {
            orb_a: scroll_y * orb_a,
            orb_b: scroll_y * orb_b,
            grid: scroll_y * grid,
        }
    }

    pub fn orb_a_transform(&self) -> String {
        format!("{} translateX(-50%)", translate_y(self.orb_a))
    }

    pub fn orb_b_transform(&self) -> String {
        translate_y(self.orb_b)
    }

    pub fn grid_transform(&self) -> String {
        translate_y(self.grid)
    }
}

fn translate_y(px: f64) -> String {
    format!("translate3d(0, {}px, 0)", px)
}

struct ParallaxInner<H: ScrollHost> {
    host: H,
    pending: RefCell<Option<H::Frame>>,
    sink: Box<dyn Fn(ParallaxOffsets)>,
}

impl<H: ScrollHost + 'static> ParallaxInner<H> {
    /// Queues one sample for the next frame; extra scroll events before
    /// then are folded into it.
    fn schedule(self: &Rc<Self>) {
        if self.pending.borrow().is_some() {
            return;
        }
        let weak: Weak<Self> = Rc::downgrade(self);
        let frame = self.host.request_frame(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.sample();
            }
        }));
        *self.pending.borrow_mut() = Some(frame);
    }

    fn sample(&self) {
        let finished = self.pending.borrow_mut().take();
        drop(finished);
        let offsets = ParallaxOffsets::from_scroll(self.host.scroll_offset());
        (self.sink)(offsets);
    }
}

/// Scroll-driven backdrop offsets. Dropping the effect removes the scroll
/// listener and cancels any queued frame.
pub struct ParallaxEffect<H: ScrollHost> {
    inner: Option<Rc<ParallaxInner<H>>>,
    _listener: Option<H::Listener>,
}

impl<H: ScrollHost + 'static> ParallaxEffect<H> {
    pub fn start(
        host: H,
        motion: MotionPreference,
        sink: impl Fn(ParallaxOffsets) + 'static,
    ) -> Self {
        if motion.is_reduced() {
            info!("Reduced motion requested, parallax disabled");
            return Self {
                inner: None,
                _listener: None,
            };
        }

        let inner = Rc::new(ParallaxInner {
            host,
            pending: RefCell::new(None),
            sink: Box::new(sink),
        });

        // Sample once up front so a restored scroll position is honoured.
        inner.schedule();

        let weak = Rc::downgrade(&inner);
        let listener = inner.host.on_scroll(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.schedule();
            }
        }));

        Self {
            inner: Some(inner),
            _listener: Some(listener),
        }
    }

    pub fn is_active(&self) -> bool {
        self.inner.is_some()
    }
}

#[cfg(test)]
impl<H: ScrollHost + 'static> ParallaxEffect<H> {
    fn has_pending_frame(&self) -> bool {
        self.inner
            .as_ref()
            .map_or(false, |inner| inner.pending.borrow().is_some())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::effects::testing::FakeHost;

    fn recording_sink() -> (Rc<RefCell<Vec<ParallaxOffsets>>>, impl Fn(ParallaxOffsets)) {
        let seen = Rc::new(RefCell::new(Vec::<ParallaxOffsets>::new()));
        let sink = {
            let seen = seen.clone();
            move |offsets: ParallaxOffsets| seen.borrow_mut().push(offsets)
        };
        (seen, sink)
    }

    #[test]
    fn offsets_are_proportional_to_scroll() {
        for scroll in [0.0, 1.0, 37.5, 600.0, 12_345.0] {
            let offsets = ParallaxOffsets::from_scroll(scroll);
            assert_eq!(offsets.orb_a, scroll * 0.18);
            assert_eq!(offsets.orb_b, scroll * 0.10);
            assert_eq!(offsets.grid, scroll * 0.06);
        }
    }

    #[test]
    fn overscroll_and_garbage_clamp_to_zero() {
        assert_eq!(ParallaxOffsets::from_scroll(-40.0), ParallaxOffsets::default());
        assert_eq!(ParallaxOffsets::from_scroll(f64::NAN), ParallaxOffsets::default());
        assert_eq!(
            ParallaxOffsets::from_scroll(f64::INFINITY),
            ParallaxOffsets::default()
        );
    }

    #[test]
    fn transforms_render_as_vertical_translations() {
        let offsets = ParallaxOffsets::from_scroll(100.0);
        assert_eq!(offsets.orb_a_transform(), "translate3d(0, 18px, 0) translateX(-50%)");
        assert_eq!(offsets.orb_b_transform(), "translate3d(0, 10px, 0)");
        assert_eq!(offsets.grid_transform(), "translate3d(0, 6px, 0)");
        assert_eq!(
            ParallaxOffsets::default().grid_transform(),
            "translate3d(0, 0px, 0)"
        );
    }

    #[test]
    fn reduced_motion_never_touches_the_host() {
        let host = FakeHost::default();
        host.set_scroll(900.0);
        let (seen, sink) = recording_sink();

        let effect = ParallaxEffect::start(host.clone(), MotionPreference::Reduced, sink);

        assert!(!effect.is_active());
        assert_eq!(host.scroll_listener_count(), 0);
        assert_eq!(host.pending_frame_count(), 0);
        host.fire_scroll(1200.0);
        host.run_frames();
        assert!(seen.borrow().is_empty());
        assert_eq!(host.scroll_reads(), 0);
    }

    #[test]
    fn initial_sample_reflects_restored_position() {
        let host = FakeHost::default();
        host.set_scroll(250.0);
        let (seen, sink) = recording_sink();

        let effect = ParallaxEffect::start(host.clone(), MotionPreference::Full, sink);
        assert!(effect.has_pending_frame());
        host.run_frames();

        assert_eq!(*seen.borrow(), vec![ParallaxOffsets::from_scroll(250.0)]);
        assert!(!effect.has_pending_frame());
    }

    #[test]
    fn bursts_of_scroll_events_coalesce_into_one_frame() {
        let host = FakeHost::default();
        let (seen, sink) = recording_sink();
        let _effect = ParallaxEffect::start(host.clone(), MotionPreference::Full, sink);
        host.run_frames();
        seen.borrow_mut().clear();

        for y in [10.0, 20.0, 30.0, 40.0] {
            host.fire_scroll(y);
        }
        assert_eq!(host.pending_frame_count(), 1);
        host.run_frames();

        assert_eq!(*seen.borrow(), vec![ParallaxOffsets::from_scroll(40.0)]);
    }

    #[test]
    fn teardown_releases_listener_and_pending_frame() {
        let host = FakeHost::default();
        let (seen, sink) = recording_sink();
        let effect = ParallaxEffect::start(host.clone(), MotionPreference::Full, sink);
        host.run_frames();
        host.fire_scroll(80.0);
        let stale_handlers = host.scroll_handlers();
        let before = seen.borrow().len();

        drop(effect);

        assert_eq!(host.scroll_listener_count(), 0);
        assert_eq!(host.pending_frame_count(), 0);
        for handler in stale_handlers {
            (*handler.borrow_mut())();
        }
        host.run_frames();
        assert_eq!(seen.borrow().len(), before);
        assert_eq!(host.pending_frame_count(), 0);
    }
}
