//! Pending key-event queue: the single synchronization point between the
//! adapter callback thread, command-channel sessions, and the injection loop.
//!
//! Both producers and the consumer go through one mutex-guarded FIFO. The
//! queue is unbounded: producers are rate-limited naturally by human button
//! presses and network round-trips, so a capacity bound would add a failure
//! mode without a workload that needs it.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use crate::keymap::InputKeyCode;

/// Thread-safe FIFO of key codes awaiting injection.
///
/// Events come out in exactly the order they went in, regardless of which
/// producer pushed them. No priority, no coalescing, no deduplication —
/// duplicates are valid and ordered.
#[derive(Debug, Default)]
pub struct KeyEventQueue {
    inner: Mutex<VecDeque<InputKeyCode>>,
}

impl KeyEventQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pending key event to the tail. Never fails, never blocks
    /// beyond the bounded critical section.
    pub fn push(&self, key: InputKeyCode) {
        self.lock().push_back(key);
    }

    /// Removes and returns the head event, or `None` when the queue is empty.
    /// Never blocks beyond the bounded critical section.
    pub fn try_pop(&self) -> Option<InputKeyCode> {
        self.lock().pop_front()
    }

    /// Number of events currently pending.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// `true` when no event is pending.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Acquires the queue lock. A poisoned lock is recovered rather than
    /// propagated: the FIFO stays structurally valid even if a producer
    /// panicked mid-push, and `push` is contractually infallible.
    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<InputKeyCode>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_try_pop_on_empty_queue_returns_none() {
        let queue = KeyEventQueue::new();
        assert_eq!(queue.try_pop(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_push_then_pop_returns_same_event() {
        let queue = KeyEventQueue::new();
        queue.push(InputKeyCode::Enter);
        assert_eq!(queue.try_pop(), Some(InputKeyCode::Enter));
        assert_eq!(queue.try_pop(), None);
    }

    #[test]
    fn test_events_come_out_in_fifo_order() {
        let queue = KeyEventQueue::new();
        queue.push(InputKeyCode::Up);
        queue.push(InputKeyCode::Down);
        queue.push(InputKeyCode::Enter);

        assert_eq!(queue.try_pop(), Some(InputKeyCode::Up));
        assert_eq!(queue.try_pop(), Some(InputKeyCode::Down));
        assert_eq!(queue.try_pop(), Some(InputKeyCode::Enter));
        assert_eq!(queue.try_pop(), None);
    }

    #[test]
    fn test_duplicate_events_are_kept_and_ordered() {
        let queue = KeyEventQueue::new();
        queue.push(InputKeyCode::VolumeUp);
        queue.push(InputKeyCode::VolumeUp);
        queue.push(InputKeyCode::VolumeUp);

        assert_eq!(queue.len(), 3);
        for _ in 0..3 {
            assert_eq!(queue.try_pop(), Some(InputKeyCode::VolumeUp));
        }
    }

    #[test]
    fn test_interleaved_push_pop() {
        let queue = KeyEventQueue::new();
        queue.push(InputKeyCode::Num1);
        assert_eq!(queue.try_pop(), Some(InputKeyCode::Num1));
        queue.push(InputKeyCode::Num2);
        queue.push(InputKeyCode::Num3);
        assert_eq!(queue.try_pop(), Some(InputKeyCode::Num2));
        queue.push(InputKeyCode::Num4);
        assert_eq!(queue.try_pop(), Some(InputKeyCode::Num3));
        assert_eq!(queue.try_pop(), Some(InputKeyCode::Num4));
        assert_eq!(queue.try_pop(), None);
    }

    #[test]
    fn test_concurrent_producers_lose_nothing() {
        // N producer threads each push M events; every single one must come
        // out exactly once.
        const PRODUCERS: usize = 8;
        const EVENTS_PER_PRODUCER: usize = 500;

        let queue = Arc::new(KeyEventQueue::new());

        let handles: Vec<_> = (0..PRODUCERS)
            .map(|i| {
                let queue = Arc::clone(&queue);
                std::thread::spawn(move || {
                    // Alternate keys per producer so misordering within one
                    // producer would be visible as a broken run below.
                    let key = if i % 2 == 0 {
                        InputKeyCode::Up
                    } else {
                        InputKeyCode::Down
                    };
                    for _ in 0..EVENTS_PER_PRODUCER {
                        queue.push(key);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let mut drained = 0;
        let mut ups = 0;
        while let Some(key) = queue.try_pop() {
            drained += 1;
            if key == InputKeyCode::Up {
                ups += 1;
            }
        }

        assert_eq!(drained, PRODUCERS * EVENTS_PER_PRODUCER);
        assert_eq!(ups, PRODUCERS / 2 * EVENTS_PER_PRODUCER);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_concurrent_producer_and_consumer_drain_everything() {
        const EVENTS: usize = 2_000;

        let queue = Arc::new(KeyEventQueue::new());

        let producer = {
            let queue = Arc::clone(&queue);
            std::thread::spawn(move || {
                for _ in 0..EVENTS {
                    queue.push(InputKeyCode::Enter);
                }
            })
        };

        let consumer = {
            let queue = Arc::clone(&queue);
            std::thread::spawn(move || {
                let mut seen = 0;
                while seen < EVENTS {
                    if queue.try_pop().is_some() {
                        seen += 1;
                    } else {
                        std::thread::yield_now();
                    }
                }
                seen
            })
        };

        producer.join().unwrap();
        assert_eq!(consumer.join().unwrap(), EVENTS);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_single_producer_order_survives_concurrent_consumer() {
        // With one producer, FIFO order must hold even while a consumer races.
        const EVENTS: u16 = 1_000;

        let queue = Arc::new(KeyEventQueue::new());
        let sequence: Vec<InputKeyCode> = (0..EVENTS)
            .map(|i| {
                if i % 2 == 0 {
                    InputKeyCode::Left
                } else {
                    InputKeyCode::Right
                }
            })
            .collect();

        let producer = {
            let queue = Arc::clone(&queue);
            let sequence = sequence.clone();
            std::thread::spawn(move || {
                for key in sequence {
                    queue.push(key);
                }
            })
        };

        let consumer = {
            let queue = Arc::clone(&queue);
            std::thread::spawn(move || {
                let mut drained = Vec::new();
                while drained.len() < EVENTS as usize {
                    if let Some(key) = queue.try_pop() {
                        drained.push(key);
                    } else {
                        std::thread::yield_now();
                    }
                }
                drained
            })
        };

        producer.join().unwrap();
        assert_eq!(consumer.join().unwrap(), sequence);
    }
}
