//! Fixed-capacity queue of outbound field events.
//!
//! Allocated once. When the driver stops draining, the oldest events are
//! dropped so the queue never grows.

use std::collections::VecDeque;

use starraid_core::events::FieldEvent;

/// Events kept between drains.
pub const EVENT_CAPACITY: usize = 16;

#[derive(Debug, Clone)]
pub struct EventQueue {
    events: VecDeque<FieldEvent>,
    dropped: u64,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self {
            events: VecDeque::with_capacity(EVENT_CAPACITY),
            dropped: 0,
        }
    }
}

impl EventQueue {
    pub fn push(&mut self, event: FieldEvent) {
        if self.events.len() == EVENT_CAPACITY {
            self.events.pop_front();
            self.dropped += 1;
            if self.dropped == 1 {
                log::warn!("field events are not being drained; dropping the oldest");
            }
        }
        self.events.push_back(event);
    }

    pub fn drain(&mut self) -> std::collections::vec_deque::Drain<'_, FieldEvent> {
        self.events.drain(..)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Total events discarded because the queue was full.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldEvent> {
        self.events.iter()
    }
}
