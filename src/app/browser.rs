use std::time::Duration;

use leptos::prelude::*;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions,
};

use crate::layout::Section;
use crate::timer::Scheduler;

#[cfg(feature = "hydrate")]
pub use observer::BrowserViewport;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("No anchor element with id '{0}' in the document")]
    MissingAnchor(&'static str),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn defer(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        set_timeout(task, delay);
    }
}

pub fn anchor_top(section: Section) -> Option<f64> {
    let el = document()
        .get_element_by_id(section.anchor_id())?
        .dyn_into::<HtmlElement>()
        .ok()?;
    Some(f64::from(el.offset_top()))
}

pub fn scroll_to_section(section: Section) -> Result<(), NavigationError> {
    let el = document()
        .get_element_by_id(section.anchor_id())
        .ok_or(NavigationError::MissingAnchor(section.anchor_id()))?;
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
    Ok(())
}

pub fn scroll_to_top() {
    let opts = ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

/// True when `host` exposes an `IntersectionObserver` constructor.
pub fn has_intersection_observer(host: &JsValue) -> bool {
    js_sys::Reflect::has(host, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

#[cfg(feature = "hydrate")]
mod observer {
    use leptos::{html, prelude::*};
    use leptos_use::{
        use_intersection_observer_with_options, UseIntersectionObserverOptions,
        UseIntersectionObserverReturn,
    };
    use web_sys::IntersectionObserverEntry;

    use super::has_intersection_observer;
    use crate::reveal::{
        IntersectionReport, ReportListener, Subscription, Threshold, ViewportObserver,
    };

    /// Intersection source backed by the browser's `IntersectionObserver`.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserViewport;

    pub struct ObserverHandle {
        stop: Box<dyn Fn()>,
    }

    impl Subscription for ObserverHandle {
        fn cancel(&mut self) {
            (self.stop)();
        }
    }

    impl ViewportObserver for BrowserViewport {
        type Region = NodeRef<html::Div>;
        type Subscription = ObserverHandle;

        // leptos-use panics when constructing an observer on a host without one
        fn is_supported(&self) -> bool {
            has_intersection_observer(&window())
        }

        fn observe(
            &self,
            region: &NodeRef<html::Div>,
            threshold: Threshold,
            mut listener: ReportListener,
        ) -> ObserverHandle {
            let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
                *region,
                move |entries: Vec<IntersectionObserverEntry>, _| {
                    for entry in entries {
                        listener(IntersectionReport {
                            is_intersecting: entry.is_intersecting(),
                            ratio: entry.intersection_ratio(),
                        });
                    }
                },
                UseIntersectionObserverOptions::default().thresholds(vec![threshold.fraction()]),
            );
            ObserverHandle {
                stop: Box::new(stop),
            }
        }
    }
}
