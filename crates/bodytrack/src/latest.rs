//! Single-slot mailbox holding only the most recent value.
//!
//! A producer driven by the tracking source publishes every frame; a slower
//! consumer takes whatever is newest. Unconsumed values are overwritten.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

struct Slot<T> {
    value: Option<T>,
    published: u64,
    dropped: u64,
}

/// Shared handle to the newest published value.
pub struct LatestFrame<T> {
    slot: Arc<Mutex<Slot<T>>>,
}

impl<T> Clone for LatestFrame<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T> Default for LatestFrame<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LatestFrame<T> {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot {
                value: None,
                published: 0,
                dropped: 0,
            })),
        }
    }

    // A panicking writer cannot leave the slot half-updated, so a poisoned
    // lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Slot<T>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores `value`, replacing any value not yet taken.
    pub fn publish(&self, value: T) {
        let mut slot = self.lock();
        if slot.value.replace(value).is_some() {
            slot.dropped += 1;
        }
        slot.published += 1;
    }

    /// Removes and returns the newest value, if any.
    pub fn take(&self) -> Option<T> {
        self.lock().value.take()
    }

    /// Returns true if a value is waiting.
    pub fn has_value(&self) -> bool {
        self.lock().value.is_some()
    }

    /// Total number of published values.
    pub fn published(&self) -> u64 {
        self.lock().published
    }

    /// Number of values overwritten before being taken.
    pub fn dropped(&self) -> u64 {
        self.lock().dropped
    }
}

impl<T: Clone> LatestFrame<T> {
    /// Returns a copy of the newest value without consuming it.
    pub fn peek(&self) -> Option<T> {
        self.lock().value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_take_returns_newest() {
        let latest = LatestFrame::new();
        latest.publish(1);
        latest.publish(2);
        latest.publish(3);

        assert_eq!(latest.take(), Some(3));
        assert_eq!(latest.take(), None);
        assert_eq!(latest.published(), 3);
        assert_eq!(latest.dropped(), 2);
    }

    #[test]
    fn test_peek_keeps_value() {
        let latest = LatestFrame::new();
        latest.publish("frame");
        assert_eq!(latest.peek(), Some("frame"));
        assert!(latest.has_value());
        assert_eq!(latest.take(), Some("frame"));
        assert!(!latest.has_value());
    }

    #[test]
    fn test_shared_across_threads() {
        let latest = LatestFrame::new();
        let producer = latest.clone();

        let handle = thread::spawn(move || {
            for i in 0..100u32 {
                producer.publish(i);
            }
        });
        handle.join().unwrap();

        assert_eq!(latest.take(), Some(99));
        assert_eq!(latest.published(), 100);
        assert_eq!(latest.dropped(), 99);
    }
}
