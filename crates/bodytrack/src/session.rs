//! Tracking sessions: a single delivery point per frame.
//!
//! A [`TrackingSource`] produces frames; a [`TrackingSession`] hands each
//! frame to its subscribers, in subscription order, on the calling thread.

use bodytrack_core::Result;

use crate::frame::TrackingFrame;

/// Anything that yields tracking frames.
pub trait TrackingSource {
    /// Returns the next frame, or `None` once the source is exhausted.
    fn next_frame(&mut self) -> Result<Option<TrackingFrame>>;
}

type Subscriber<'a> = Box<dyn FnMut(&TrackingFrame) + Send + 'a>;

/// Dispatches tracking frames to subscribed callbacks.
#[derive(Default)]
pub struct TrackingSession<'a> {
    subscribers: Vec<Subscriber<'a>>,
    delivered: u64,
}

impl<'a> TrackingSession<'a> {
    /// Creates a session with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback invoked once per delivered frame.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&TrackingFrame) + Send + 'a,
    {
        self.subscribers.push(Box::new(callback));
    }

    /// Number of registered callbacks.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Number of frames delivered so far.
    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    /// Hands `frame` to every subscriber.
    pub fn deliver(&mut self, frame: &TrackingFrame) {
        for subscriber in &mut self.subscribers {
            subscriber(frame);
        }
        self.delivered += 1;
    }

    /// Pumps `source` until it is exhausted and returns the number of frames
    /// delivered by this call.
    pub fn run<S: TrackingSource + ?Sized>(&mut self, source: &mut S) -> Result<u64> {
        log::info!(
            "tracking session started with {} subscriber(s)",
            self.subscribers.len()
        );
        let start = self.delivered;
        while let Some(frame) = source.next_frame()? {
            self.deliver(&frame);
        }
        let count = self.delivered - start;
        log::info!("tracking session finished after {count} frame(s)");
        Ok(count)
    }
}

impl std::fmt::Debug for TrackingSession<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackingSession")
            .field("subscribers", &self.subscribers.len())
            .field("delivered", &self.delivered)
            .finish()
    }
}
