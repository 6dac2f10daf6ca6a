//! One-shot visibility tracking for reveal-on-scroll content.
//!
//! A [`VisibilityTracker`] subscribes to a [`ViewportObserver`] and flips from
//! hidden to revealed the first time its region crosses the configured
//! [`Threshold`]. After that it cancels its subscription and ignores every
//! later report. If the host has no intersection primitive the tracker starts
//! out revealed so content is never left hidden.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObserverError {
    #[error("Viewport intersection is not supported by this host")]
    Unsupported,
}

/// Fraction of a region's area that has to be inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    pub const DEFAULT: Self = Self(0.12);

    pub fn fraction(self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A single report from the host's intersection primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionReport {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionReport {
    pub fn crosses(&self, threshold: Threshold) -> bool {
        self.is_intersecting && self.ratio >= threshold.fraction()
    }
}

pub trait Subscription {
    fn cancel(&mut self);
}

pub type ReportListener = Box<dyn FnMut(IntersectionReport)>;

/// Host capability that reports when a region enters or leaves the viewport.
pub trait ViewportObserver {
    type Region: ?Sized;
    type Subscription: Subscription + 'static;

    /// Whether the host provides the primitive at all. `observe` is never
    /// called when this is false.
    fn is_supported(&self) -> bool;

    fn observe(
        &self,
        region: &Self::Region,
        threshold: Threshold,
        listener: ReportListener,
    ) -> Self::Subscription;
}

fn subscribe<O: ViewportObserver>(
    observer: &O,
    region: &O::Region,
    threshold: Threshold,
    listener: ReportListener,
) -> Result<O::Subscription, ObserverError> {
    if !observer.is_supported() {
        return Err(ObserverError::Unsupported);
    }
    Ok(observer.observe(region, threshold, listener))
}

pub struct VisibilityTracker<S: Subscription> {
    revealed: Rc<Cell<bool>>,
    subscription: Rc<RefCell<Option<S>>>,
}

impl<S: Subscription + 'static> VisibilityTracker<S> {
    pub fn attach<O>(
        observer: &O,
        region: &O::Region,
        threshold: Threshold,
        on_reveal: impl FnOnce() + 'static,
    ) -> Self
    where
        O: ViewportObserver<Subscription = S>,
    {
        let revealed = Rc::new(Cell::new(false));
        let subscription = Rc::new(RefCell::new(None::<S>));
        let callback: Box<dyn FnOnce()> = Box::new(on_reveal);
        let on_reveal = Rc::new(RefCell::new(Some(callback)));

        let listener = {
            let revealed = Rc::clone(&revealed);
            let subscription = Rc::clone(&subscription);
            let on_reveal = Rc::clone(&on_reveal);
            move |report: IntersectionReport| {
                if revealed.get() || !report.crosses(threshold) {
                    return;
                }
                reveal(&revealed, &on_reveal);
                // still unset if the host reported from inside observe()
                let live = subscription.borrow_mut().take();
                if let Some(mut sub) = live {
                    sub.cancel();
                }
            }
        };

        match subscribe(observer, region, threshold, Box::new(listener)) {
            Ok(mut sub) => {
                if revealed.get() {
                    sub.cancel();
                } else {
                    *subscription.borrow_mut() = Some(sub);
                }
            }
            Err(err) => {
                log::warn!("{err}; revealing content immediately");
                reveal(&revealed, &on_reveal);
            }
        }

        Self {
            revealed,
            subscription,
        }
    }
}

fn reveal(revealed: &Cell<bool>, on_reveal: &RefCell<Option<Box<dyn FnOnce()>>>) {
    revealed.set(true);
    let callback = on_reveal.borrow_mut().take();
    if let Some(f) = callback {
        f();
    }
}

impl<S: Subscription> VisibilityTracker<S> {
    pub fn is_revealed(&self) -> bool {
        self.revealed.get()
    }

    pub fn is_observing(&self) -> bool {
        self.subscription.borrow().is_some()
    }

    /// Releases the observer subscription if the reveal has not happened yet.
    pub fn detach(&mut self) {
        let live = self.subscription.borrow_mut().take();
        if let Some(mut sub) = live {
            sub.cancel();
        }
    }
}

impl<S: Subscription> Drop for VisibilityTracker<S> {
    fn drop(&mut self) {
        self.detach();
    }
}

impl<S: Subscription> std::fmt::Debug for VisibilityTracker<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisibilityTracker")
            .field("revealed", &self.is_revealed())
            .field("observing", &self.is_observing())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entry {
        active: Rc<Cell<bool>>,
        listener: Rc<RefCell<ReportListener>>,
    }

    /// In-memory host that lets tests push intersection reports by hand.
    #[derive(Default)]
    struct FakeViewport {
        entries: RefCell<Vec<Entry>>,
        observe_calls: Cell<usize>,
        supported: bool,
        report_on_observe: Option<IntersectionReport>,
    }

    struct FakeSubscription {
        active: Rc<Cell<bool>>,
    }

    impl Subscription for FakeSubscription {
        fn cancel(&mut self) {
            self.active.set(false);
        }
    }

    impl FakeViewport {
        fn new() -> Self {
            Self {
                supported: true,
                ..Default::default()
            }
        }

        fn report(&self, is_intersecting: bool, ratio: f64) {
            let live = self
                .entries
                .borrow()
                .iter()
                .filter(|e| e.active.get())
                .map(|e| Rc::clone(&e.listener))
                .collect::<Vec<_>>();
            for listener in live {
                (listener.borrow_mut())(IntersectionReport {
                    is_intersecting,
                    ratio,
                });
            }
        }

        fn active_count(&self) -> usize {
            self.entries
                .borrow()
                .iter()
                .filter(|e| e.active.get())
                .count()
        }
    }

    impl ViewportObserver for FakeViewport {
        type Region = str;
        type Subscription = FakeSubscription;

        fn is_supported(&self) -> bool {
            self.supported
        }

        fn observe(
            &self,
            _region: &str,
            _threshold: Threshold,
            mut listener: ReportListener,
        ) -> FakeSubscription {
            self.observe_calls.set(self.observe_calls.get() + 1);
            if let Some(report) = self.report_on_observe {
                listener(report);
            }
            let active = Rc::new(Cell::new(true));
            self.entries.borrow_mut().push(Entry {
                active: Rc::clone(&active),
                listener: Rc::new(RefCell::new(listener)),
            });
            FakeSubscription { active }
        }
    }

    fn counter() -> (Rc<Cell<usize>>, impl FnOnce() + 'static) {
        let fired = Rc::new(Cell::new(0));
        let f = {
            let fired = Rc::clone(&fired);
            move || fired.set(fired.get() + 1)
        };
        (fired, f)
    }

    #[test]
    fn test_default_threshold() {
        assert_eq!(Threshold::default().fraction(), 0.12);
        assert!(IntersectionReport {
            is_intersecting: true,
            ratio: 0.12
        }
        .crosses(Threshold::DEFAULT));
    }

    #[test]
    fn test_reveal_is_monotonic() {
        let viewport = FakeViewport::new();
        let (fired, on_reveal) = counter();
        let tracker = VisibilityTracker::attach(&viewport, "card", Threshold::DEFAULT, on_reveal);
        assert!(!tracker.is_revealed());

        viewport.report(true, 0.5);
        assert!(tracker.is_revealed());

        viewport.report(false, 0.0);
        assert!(tracker.is_revealed());
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_reveal_fires_once_and_stops_observing() {
        let viewport = FakeViewport::new();
        let (fired, on_reveal) = counter();
        let tracker = VisibilityTracker::attach(&viewport, "card", Threshold::DEFAULT, on_reveal);
        assert!(tracker.is_observing());

        for _ in 0..5 {
            viewport.report(true, 1.0);
            viewport.report(false, 0.0);
        }
        assert_eq!(fired.get(), 1);
        assert!(!tracker.is_observing());
        assert_eq!(viewport.active_count(), 0);
    }

    #[test]
    fn test_below_threshold_does_not_reveal() {
        let viewport = FakeViewport::new();
        let (fired, on_reveal) = counter();
        let tracker = VisibilityTracker::attach(&viewport, "card", Threshold::DEFAULT, on_reveal);

        viewport.report(true, 0.05);
        viewport.report(false, 0.5);
        assert!(!tracker.is_revealed());
        assert_eq!(fired.get(), 0);

        viewport.report(true, 0.12);
        assert!(tracker.is_revealed());
    }

    #[test]
    fn test_report_during_observe() {
        let viewport = FakeViewport {
            supported: true,
            report_on_observe: Some(IntersectionReport {
                is_intersecting: true,
                ratio: 1.0,
            }),
            ..Default::default()
        };
        let (fired, on_reveal) = counter();
        let tracker = VisibilityTracker::attach(&viewport, "hero", Threshold::DEFAULT, on_reveal);

        assert!(tracker.is_revealed());
        assert!(!tracker.is_observing());
        assert_eq!(viewport.active_count(), 0);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_unsupported_host_fails_open() {
        let viewport = FakeViewport::default();
        let (fired, on_reveal) = counter();
        let tracker = VisibilityTracker::attach(&viewport, "card", Threshold::DEFAULT, on_reveal);

        assert!(tracker.is_revealed());
        assert!(!tracker.is_observing());
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_unsupported_host_is_never_observed() {
        let viewport = FakeViewport::default();
        let (_, on_reveal) = counter();
        let _tracker = VisibilityTracker::attach(&viewport, "card", Threshold::DEFAULT, on_reveal);

        assert_eq!(viewport.observe_calls.get(), 0);
        assert_eq!(viewport.active_count(), 0);

        let supported = FakeViewport::new();
        let (_, on_reveal) = counter();
        let _tracker = VisibilityTracker::attach(&supported, "card", Threshold::DEFAULT, on_reveal);
        assert_eq!(supported.observe_calls.get(), 1);
    }

    #[test]
    fn test_detach_and_drop_release_subscription() {
        let viewport = FakeViewport::new();
        let (_, first) = counter();
        let (fired, second) = counter();
        let mut a = VisibilityTracker::attach(&viewport, "a", Threshold::DEFAULT, first);
        let b = VisibilityTracker::attach(&viewport, "b", Threshold::DEFAULT, second);
        assert_eq!(viewport.active_count(), 2);

        a.detach();
        assert!(!a.is_observing());
        assert_eq!(viewport.active_count(), 1);

        drop(b);
        assert_eq!(viewport.active_count(), 0);

        viewport.report(true, 1.0);
        assert!(!a.is_revealed());
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_trackers_are_independent() {
        let viewport = FakeViewport::new();
        let (_, first) = counter();
        let (_, second) = counter();
        let a = VisibilityTracker::attach(&viewport, "a", Threshold::DEFAULT, first);
        let b = VisibilityTracker::attach(&viewport, "b", Threshold(0.9), second);

        viewport.report(true, 0.5);
        assert!(a.is_revealed());
        assert!(!b.is_revealed());
        assert!(b.is_observing());
    }
}
