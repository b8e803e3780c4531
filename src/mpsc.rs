//! Multi-producer/single-consumer queue profile.
//!
//! Backed by `crossbeam_queue::ArrayQueue`: bounded, lock-free, push and
//! pop by shared reference, storage allocated once at construction. The
//! price over [`SpscRingQueue`](crate::SpscRingQueue) is a CAS loop on
//! the push side, which stays non-blocking under producer contention.

use crossbeam_queue::ArrayQueue;

use crate::queue::{LogQueue, MultiProducer};

/// Lock-free bounded MPSC queue.
///
/// Safe for any number of concurrent producers; the pop side remains
/// single-consumer per the [`LogQueue`] contract.
pub struct MpscArrayQueue<T> {
    inner: ArrayQueue<T>,
}

impl<T> LogQueue for MpscArrayQueue<T> {
    type Item = T;

    fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: ArrayQueue::new(capacity),
        }
    }

    #[inline]
    fn try_push(&self, item: T) -> Result<(), T> {
        self.inner.push(item)
    }

    #[inline]
    fn try_pop(&self) -> Option<T> {
        self.inner.pop()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.inner.capacity()
    }
}

impl<T> MultiProducer for MpscArrayQueue<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mpsc_push_pop_fifo() {
        let queue: MpscArrayQueue<u32> = MpscArrayQueue::with_capacity(4);

        assert!(queue.try_push(10).is_ok());
        assert!(queue.try_push(20).is_ok());

        assert_eq!(queue.try_pop(), Some(10));
        assert_eq!(queue.try_pop(), Some(20));
        assert_eq!(queue.try_pop(), None);
    }

    #[test]
    fn test_mpsc_full_hands_item_back() {
        let queue: MpscArrayQueue<u32> = MpscArrayQueue::with_capacity(1);

        assert!(queue.try_push(1).is_ok());
        assert_eq!(queue.try_push(2), Err(2));
    }

    #[test]
    fn test_mpsc_concurrent_producers_lose_nothing_under_capacity() {
        use std::sync::Arc;
        use std::thread;

        let queue: Arc<MpscArrayQueue<u64>> = Arc::new(MpscArrayQueue::with_capacity(1024));
        let mut handles = vec![];

        for t in 0..8u64 {
            let queue = Arc::clone(&queue);
            handles.push(thread::spawn(move || {
                for i in 0..100u64 {
                    assert!(queue.try_push(t * 100 + i).is_ok());
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let mut seen = vec![];
        while let Some(v) = queue.try_pop() {
            seen.push(v);
        }
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 800);
    }
}
