use std::sync::{
    atomic::{AtomicI32, AtomicU64, Ordering},
    Arc, Mutex, MutexGuard, PoisonError,
};

/// Vertical scroll position in whole pixels from the top of the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScrollOffset(i32);

impl ScrollOffset {
    pub fn new(px: i32) -> Self {
        Self(px.max(0))
    }

    /// Browsers report fractional offsets and may overscroll below zero.
    pub fn from_pixels(px: f64) -> Self {
        if px.is_nan() {
            return Self(0);
        }
        Self(px.round().clamp(0.0, i32::MAX as f64) as i32)
    }

    pub fn pixels(self) -> i32 {
        self.0
    }
}

pub type ScrollListener = Arc<dyn Fn(ScrollOffset) + Send + Sync>;

/// Something that emits scroll positions.
pub trait ScrollSource {
    /// Dropping the guard must remove the listener.
    type Guard: Send;

    fn subscribe(&self, listener: ScrollListener) -> Self::Guard;
}

/// Keeps the latest offset of a [`ScrollSource`] while mounted.
///
/// At most one subscription exists per tracker no matter how often `mount` is called,
/// and it is released on `unmount` or drop.
pub struct ScrollTracker<S: ScrollSource> {
    source: S,
    offset: Arc<AtomicI32>,
    guard: Option<S::Guard>,
}

impl<S: ScrollSource> ScrollTracker<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            offset: Arc::new(AtomicI32::new(0)),
            guard: None,
        }
    }

    pub fn mount(&mut self) {
        self.mount_with(|_| {});
    }

    /// Subscribes and forwards every recorded offset to `notify`.
    pub fn mount_with(&mut self, notify: impl Fn(ScrollOffset) + Send + Sync + 'static) {
        if self.guard.is_some() {
            return;
        }
        let offset = self.offset.clone();
        let listener: ScrollListener = Arc::new(move |value: ScrollOffset| {
            offset.store(value.pixels(), Ordering::Relaxed);
            notify(value);
        });
        self.guard = Some(self.source.subscribe(listener));
    }

    pub fn unmount(&mut self) {
        self.guard = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.guard.is_some()
    }

    pub fn offset(&self) -> ScrollOffset {
        ScrollOffset(self.offset.load(Ordering::Relaxed))
    }
}

type Listeners = Arc<Mutex<Vec<(u64, ScrollListener)>>>;

// a panic while the list was held must not drop later registrations
fn lock(listeners: &Listeners) -> MutexGuard<'_, Vec<(u64, ScrollListener)>> {
    listeners.lock().unwrap_or_else(PoisonError::into_inner)
}

/// In-memory scroll source. Used where there is no window to listen on.
#[derive(Clone, Default)]
pub struct ScrollBus {
    listeners: Listeners,
    next_id: Arc<AtomicU64>,
}

impl ScrollBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&self, offset: ScrollOffset) {
        // snapshot so a listener may unsubscribe while being called
        let listeners = lock(&self.listeners)
            .iter()
            .map(|(_, f)| f.clone())
            .collect::<Vec<_>>();
        for listener in listeners {
            listener(offset);
        }
    }

    pub fn active_subscriptions(&self) -> usize {
        lock(&self.listeners).len()
    }
}

pub struct BusGuard {
    id: u64,
    listeners: Listeners,
}

impl Drop for BusGuard {
    fn drop(&mut self) {
        lock(&self.listeners).retain(|(id, _)| *id != self.id);
    }
}

impl ScrollSource for ScrollBus {
    type Guard = BusGuard;

    fn subscribe(&self, listener: ScrollListener) -> BusGuard {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        lock(&self.listeners).push((id, listener));
        BusGuard {
            id,
            listeners: self.listeners.clone(),
        }
    }
}

#[cfg(feature = "hydrate")]
pub use window::WindowScroll;

#[cfg(feature = "hydrate")]
mod window {
    use leptos::{ev, prelude::*};

    use super::{ScrollListener, ScrollOffset, ScrollSource};

    /// The browser window's `scroll` event.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct WindowScroll;

    pub struct WindowScrollGuard(Option<WindowListenerHandle>);

    impl Drop for WindowScrollGuard {
        fn drop(&mut self) {
            if let Some(handle) = self.0.take() {
                handle.remove();
            }
        }
    }

    impl ScrollSource for WindowScroll {
        type Guard = WindowScrollGuard;

        fn subscribe(&self, listener: ScrollListener) -> WindowScrollGuard {
            let handle = window_event_listener(ev::scroll, move |_| {
                let y = window().scroll_y().unwrap_or_default();
                listener(ScrollOffset::from_pixels(y));
            });
            log::debug!("subscribed to window scroll");
            WindowScrollGuard(Some(handle))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let bus = ScrollBus::new();
        let mut tracker = ScrollTracker::new(bus.clone());
        tracker.mount();
        assert_eq!(tracker.offset(), ScrollOffset::default());

        bus.dispatch(ScrollOffset::new(120));
        assert_eq!(tracker.offset().pixels(), 120);
        bus.dispatch(ScrollOffset::new(40));
        assert_eq!(tracker.offset().pixels(), 40);
    }

    #[test]
    fn test_mount_is_idempotent() {
        let bus = ScrollBus::new();
        let mut tracker = ScrollTracker::new(bus.clone());
        for _ in 0..3 {
            tracker.mount();
        }
        assert!(tracker.is_mounted());
        assert_eq!(bus.active_subscriptions(), 1);

        tracker.unmount();
        assert!(!tracker.is_mounted());
        assert_eq!(bus.active_subscriptions(), 0);
    }

    #[test]
    fn test_no_leak_across_mount_cycles() {
        let bus = ScrollBus::new();
        let mut tracker = ScrollTracker::new(bus.clone());
        for i in 0..10 {
            tracker.mount();
            bus.dispatch(ScrollOffset::new(i));
            tracker.unmount();
            assert_eq!(bus.active_subscriptions(), 0);
        }
        assert_eq!(tracker.offset().pixels(), 9);

        // dispatches while unmounted are not recorded
        bus.dispatch(ScrollOffset::new(500));
        assert_eq!(tracker.offset().pixels(), 9);
    }

    #[test]
    fn test_drop_releases_subscription() {
        let bus = ScrollBus::new();
        {
            let mut a = ScrollTracker::new(bus.clone());
            let mut b = ScrollTracker::new(bus.clone());
            a.mount();
            b.mount();
            assert_eq!(bus.active_subscriptions(), 2);
        }
        assert_eq!(bus.active_subscriptions(), 0);
    }

    #[test]
    fn test_mount_with_notifies() {
        let bus = ScrollBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut tracker = ScrollTracker::new(bus.clone());
        let sink = seen.clone();
        tracker.mount_with(move |o| sink.lock().unwrap().push(o.pixels()));

        bus.dispatch(ScrollOffset::new(120));
        bus.dispatch(ScrollOffset::new(40));
        assert_eq!(*seen.lock().unwrap(), vec![120, 40]);
    }

    #[test]
    fn test_subscribe_survives_poisoned_lock() {
        let bus = ScrollBus::new();
        let listeners = bus.listeners.clone();
        let _ = std::thread::spawn(move || {
            let _held = listeners.lock().unwrap();
            panic!("poison the listener list");
        })
        .join();
        assert!(bus.listeners.is_poisoned());

        let mut tracker = ScrollTracker::new(bus.clone());
        tracker.mount();
        assert_eq!(bus.active_subscriptions(), 1);
        bus.dispatch(ScrollOffset::new(120));
        assert_eq!(tracker.offset().pixels(), 120);

        tracker.unmount();
        assert_eq!(bus.active_subscriptions(), 0);
    }

    #[test]
    fn test_offset_from_pixels() {
        assert_eq!(ScrollOffset::from_pixels(119.6).pixels(), 120);
        assert_eq!(ScrollOffset::from_pixels(-12.0).pixels(), 0);
        assert_eq!(ScrollOffset::from_pixels(f64::NAN).pixels(), 0);
        assert_eq!(ScrollOffset::from_pixels(1e12).pixels(), i32::MAX);
        assert_eq!(ScrollOffset::new(-5).pixels(), 0);
    }
}
