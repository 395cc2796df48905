//! Hand-off queues between the bridge workers.

use std::collections::VecDeque;
use std::sync::Mutex;

use tokio::sync::Notify;

use crate::frame::Frame;

/// Unbounded multi-producer/multi-consumer FIFO hand-off queue.
///
/// `push` never waits and `pop` suspends until an element is available;
/// elements come out in the exact order they went in. `pop` is safe to
/// race against a cancellation token in `select!`.
///
/// The queue is unbounded on purpose: the TUN side can outpace the radio
/// link by orders of magnitude, and bounding the queue would force a drop
/// policy on the producers. Sustained overload grows memory instead of
/// dropping frames.
pub struct HandoffQueue<T> {
    items: Mutex<VecDeque<T>>,
    notify: Notify,
}

/// Queue of [`Frame`]s between a TUN worker and the radio worker.
pub type FrameQueue = HandoffQueue<Frame>;

impl<T> HandoffQueue<T> {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
            notify: Notify::new(),
        }
    }

    /// Appends an item at the tail and wakes one waiting `pop`.
    pub fn push(&self, item: T) {
        self.items.lock().unwrap().push_back(item);
        self.notify.notify_one();
    }

    /// Removes and returns the head, waiting until one exists.
    ///
    /// Dropping the returned future before completion never loses an
    /// item: removal happens atomically with completion, and a consumed
    /// wake-up moves on to the next waiter.
    pub async fn pop(&self) -> T {
        loop {
            let notified = self.notify.notified();

            if let Some(item) = self.try_pop() {
                return item;
            }

            notified.await;
        }
    }

    /// Removes and returns the head if the queue is non-empty.
    pub fn try_pop(&self) -> Option<T> {
        self.items.lock().unwrap().pop_front()
    }

    /// Number of queued items at the time of the call. Concurrent pushes
    /// and pops may invalidate the answer immediately.
    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().unwrap().is_empty()
    }
}

impl<T> Default for HandoffQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
