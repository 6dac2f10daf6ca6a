use leptos::{html, prelude::*};

use crate::style::reveal_presentation;

/// Fades and lifts its children into place the first time they scroll into
/// view. `style` is applied beneath the animation properties.
#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] style: String,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let revealed = track_reveal(node_ref, delay_ms);

    view! {
        <div
            node_ref=node_ref
            style=move || reveal_presentation(revealed.get(), delay_ms).css_over(&style)
        >
            {children()}
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn track_reveal(node_ref: NodeRef<html::Div>, delay_ms: u32) -> ReadSignal<bool> {
    use super::browser::BrowserViewport;
    use crate::layout::LayoutConfig;
    use crate::reveal::VisibilityTracker;

    let (revealed, set_revealed) = signal(false);
    let tracker = VisibilityTracker::attach(
        &BrowserViewport,
        &node_ref,
        LayoutConfig::DEFAULT.reveal_threshold,
        move || {
            log::debug!("revealing block (delay {delay_ms}ms)");
            set_revealed.set(true);
        },
    );
    let tracker = StoredValue::new_local(tracker);
    on_cleanup(move || {
        tracker.try_update_value(VisibilityTracker::detach);
    });
    revealed
}

// the server always renders the entrance state so hydration matches
#[cfg(not(feature = "hydrate"))]
fn track_reveal(_node_ref: NodeRef<html::Div>, _delay_ms: u32) -> ReadSignal<bool> {
    signal(false).0
}
