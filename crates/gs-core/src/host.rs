//! Notification bridge between the host platform and the widget core
//!
//! The host drives two notification sources: data/config changes and
//! viewport resizes. Subscribers are held as weak references and notified
//! in registration order; each handler runs to completion before the next
//! one is dispatched. Every subscription is paired with an RAII guard so
//! that deregistration is guaranteed to happen exactly once, even on
//! abnormal teardown.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use crate::rowset::RowSet;

/// Trait for components that need to respond to host data changes.
pub trait DataSubscriber: Send + Sync {
    /// Called with the full new data snapshot on every host change.
    fn on_data_change(&self, data: &RowSet);
}

/// Trait for components that need to respond to viewport resizes.
pub trait ResizeSubscriber: Send + Sync {
    /// Called with the new viewport pixel dimensions.
    fn on_viewport_resize(&self, width: u32, height: u32);
}

/// One registered subscriber, identified for scoped removal.
struct Slot<S: ?Sized> {
    id: u64,
    subscriber: Weak<S>,
}

/// Scoped handle for one subscription.
///
/// Dropping the guard removes the subscriber from the bridge. This is the
/// only way to unsubscribe, which keeps acquisition and release paired.
#[must_use = "dropping the guard immediately cancels the subscription"]
pub struct SubscriptionGuard {
    unsubscribe: Option<Box<dyn FnOnce() + Send>>,
}

impl SubscriptionGuard {
    fn new(unsubscribe: impl FnOnce() + Send + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }
}

impl Drop for SubscriptionGuard {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl fmt::Debug for SubscriptionGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriptionGuard").finish_non_exhaustive()
    }
}

/// The notification bridge the host drives.
pub struct HostBridge {
    data_subscribers: Arc<RwLock<Vec<Slot<dyn DataSubscriber>>>>,
    resize_subscribers: Arc<RwLock<Vec<Slot<dyn ResizeSubscriber>>>>,

    /// Last viewport size reported by the host.
    viewport: RwLock<(u32, u32)>,

    next_id: AtomicU64,
}

impl HostBridge {
    pub fn new() -> Self {
        Self {
            data_subscribers: Arc::new(RwLock::new(Vec::new())),
            resize_subscribers: Arc::new(RwLock::new(Vec::new())),
            viewport: RwLock::new((0, 0)),
            next_id: AtomicU64::new(0),
        }
    }

    /// Register a data-change subscriber.
    ///
    /// The bridge holds only a weak reference; the caller keeps the
    /// subscriber alive and holds the guard for the subscription's scope.
    pub fn subscribe_data(&self, subscriber: Arc<dyn DataSubscriber>) -> SubscriptionGuard {
        Self::subscribe(&self.data_subscribers, &self.next_id, subscriber)
    }

    /// Register a viewport-resize subscriber.
    pub fn subscribe_resize(&self, subscriber: Arc<dyn ResizeSubscriber>) -> SubscriptionGuard {
        Self::subscribe(&self.resize_subscribers, &self.next_id, subscriber)
    }

    /// Deliver a new data snapshot to all live subscribers, in
    /// registration order.
    pub fn notify_data_change(&self, data: &RowSet) {
        for subscriber in Self::live(&self.data_subscribers) {
            subscriber.on_data_change(data);
        }
    }

    /// Record the new viewport size and deliver it to all live
    /// subscribers, in registration order.
    pub fn notify_resize(&self, width: u32, height: u32) {
        *self.viewport.write() = (width, height);
        for subscriber in Self::live(&self.resize_subscribers) {
            subscriber.on_viewport_resize(width, height);
        }
    }

    /// Last viewport size reported by the host.
    pub fn viewport_size(&self) -> (u32, u32) {
        *self.viewport.read()
    }

    fn subscribe<S: ?Sized + Send + Sync + 'static>(
        registry: &Arc<RwLock<Vec<Slot<S>>>>,
        next_id: &AtomicU64,
        subscriber: Arc<S>,
    ) -> SubscriptionGuard {
        let id = next_id.fetch_add(1, Ordering::Relaxed);
        registry.write().push(Slot {
            id,
            subscriber: Arc::downgrade(&subscriber),
        });

        let registry = Arc::clone(registry);
        SubscriptionGuard::new(move || {
            registry.write().retain(|slot| slot.id != id);
        })
    }

    /// Snapshot the live subscribers so no lock is held while handlers
    /// run (a handler may itself subscribe or unsubscribe).
    fn live<S: ?Sized>(registry: &RwLock<Vec<Slot<S>>>) -> Vec<Arc<S>> {
        let mut slots = registry.write();

        // Remove any dead weak references
        slots.retain(|slot| slot.subscriber.strong_count() > 0);

        slots
            .iter()
            .filter_map(|slot| slot.subscriber.upgrade())
            .collect()
    }
}

impl Default for HostBridge {
    fn default() -> Self {
        Self::new()
    }
}
