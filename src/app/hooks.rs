use std::sync::{Arc, Mutex};

use leptos::prelude::*;

use crate::scroll::{ScrollOffset, ScrollSource, ScrollTracker};

#[cfg(feature = "hydrate")]
type PageScroll = crate::scroll::WindowScroll;
// nothing scrolls while rendering on the server
#[cfg(not(feature = "hydrate"))]
type PageScroll = crate::scroll::ScrollBus;

/// Tracks the window's vertical scroll offset for the lifetime of the calling component.
pub fn use_scroll_offset() -> ReadSignal<ScrollOffset> {
    use_scroll_offset_from(PageScroll::default())
}

/// Subscribes to `source` once for the current owner and unsubscribes when it is cleaned up.
pub fn use_scroll_offset_from<S>(source: S) -> ReadSignal<ScrollOffset>
where
    S: ScrollSource + Send + 'static,
{
    let (offset, set_offset) = signal(ScrollOffset::default());
    let tracker = Arc::new(Mutex::new(ScrollTracker::new(source)));

    if let Ok(mut t) = tracker.lock() {
        t.mount_with(move |o| set_offset.set(o));
    }

    on_cleanup(move || {
        if let Ok(mut t) = tracker.lock() {
            t.unmount();
        }
    });

    offset
}
