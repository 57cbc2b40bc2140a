//! Listener registration and event fan-out.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::events::Event;

/// Listener for events from the content.
///
/// Implemented for any `Fn(&Event) + Send + Sync`, so closures can be
/// registered directly.
pub trait EventListener: Send + Sync {
	fn on_event(&self, event: &Event);
}

impl<F> EventListener for F
where
	F: Fn(&Event) + Send + Sync,
{
	fn on_event(&self, event: &Event) {
		self(event)
	}
}

/// Thread-safe multiset of event listeners.
///
/// Identity is `Arc` pointer identity: the same `Arc` may be registered
/// several times and is then invoked once per registration; `remove` drops
/// one registration at a time.
///
/// Dispatch iterates over a snapshot of the registrations taken when the
/// dispatch starts, so listeners may register or remove listeners
/// (including themselves) from inside `on_event`; such changes apply from
/// the next dispatch.
#[derive(Default)]
pub struct ListenerRegistry {
	listeners: RwLock<Vec<Arc<dyn EventListener>>>,
}

impl ListenerRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register `listener`. Always succeeds.
	pub fn register(&self, listener: Arc<dyn EventListener>) -> bool {
		self.listeners.write().push(listener);
		true
	}

	/// Remove one registration of `listener`. Returns whether a
	/// registration was removed.
	pub fn remove(&self, listener: &Arc<dyn EventListener>) -> bool {
		let mut listeners = self.listeners.write();
		match listeners.iter().position(|l| Arc::ptr_eq(l, listener)) {
			Some(index) => {
				listeners.remove(index);
				true
			}
			None => false,
		}
	}

	/// Remove every registration.
	pub fn clear(&self) {
		self.listeners.write().clear();
	}

	pub fn is_empty(&self) -> bool {
		self.listeners.read().is_empty()
	}

	pub fn len(&self) -> usize {
		self.listeners.read().len()
	}

	/// Fan `event` out to every listener registered at the start of the
	/// call, in registration order.
	pub fn dispatch(&self, event: &Event) {
		// The read guard is dropped before any listener runs, so listeners
		// can mutate the registry without deadlocking.
		let snapshot = self.listeners.read().clone();
		for listener in snapshot {
			listener.on_event(event);
		}
	}
}
