use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

/// Receives "render again after `delay`" requests.
///
/// Requests are fire-and-forget: there is no handle to cancel one. A widget
/// that stops being rendered simply stops issuing them.
pub trait Invalidator {
    fn post_invalidate_delayed(&mut self, delay: Duration);
}

/// Pending redraw deadlines, earliest first.
///
/// Every request is kept; two requests for the same instant produce two
/// redraws.
#[derive(Debug, Default)]
pub struct RedrawQueue {
    deadlines: BinaryHeap<Reverse<Instant>>,
}

impl RedrawQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a redraw due at `base + delay`.
    pub fn request_at(&mut self, base: Instant, delay: Duration) {
        self.deadlines.push(Reverse(base + delay));
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.peek().map(|Reverse(at)| *at)
    }

    /// Removes and returns the earliest deadline if it is due at `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<Instant> {
        match self.next_deadline() {
            Some(at) if at <= now => self.deadlines.pop().map(|Reverse(at)| at),
            _ => None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.deadlines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }
}

impl Invalidator for RedrawQueue {
    fn post_invalidate_delayed(&mut self, delay: Duration) {
        self.request_at(Instant::now(), delay);
        log::trace!("redraw requested in {:?} ({} pending)", delay, self.len());
    }
}
