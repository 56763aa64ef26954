// SPDX-License-Identifier: MPL-2.0
//! Pending message queue.
//!
//! Strict FIFO holding area for messages waiting for the visible slot.
//! The queue never triggers presentation on its own; the controller pulls
//! from it.

use crate::domain::message::Message;
use std::collections::VecDeque;

/// Unbounded FIFO of messages awaiting presentation.
#[derive(Debug, Default)]
pub struct MessageQueue {
    pending: VecDeque<Message>,
}

impl MessageQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to the tail.
    pub fn enqueue(&mut self, message: Message) {
        self.pending.push_back(message);
    }

    /// Removes and returns the head, or `None` if the queue is empty.
    pub fn dequeue_next(&mut self) -> Option<Message> {
        self.pending.pop_front()
    }

    /// Discards all pending messages without presenting them.
    ///
    /// Returns how many messages were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
