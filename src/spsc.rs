//! Single-producer/single-consumer bounded ring, the default profile.
//!
//! # Rules
//!
//! - Exactly one thread pushes, exactly one thread pops
//! - Only atomic operations for synchronization
//! - No operation blocks, no allocation after construction
//!
//! The slot storage is allocated once at construction and never grows.

use core::cell::UnsafeCell;
use core::mem::MaybeUninit;
use core::sync::atomic::{AtomicU64, Ordering};

use crate::queue::LogQueue;

/// Lock-free SPSC ring buffer.
///
/// # Safety
///
/// This type uses `UnsafeCell` internally but is safe to use because:
/// - Single producer, single consumer (enforced by the declared profile,
///   not by the type system)
/// - Producer writes a slot strictly before publishing it via `tail`
/// - Consumer releases a slot via `head` strictly after reading it
/// - Head and tail are monotonic counters; a slot is owned by exactly
///   one side at any time
///
/// # Memory Ordering
///
/// - Producer: `Acquire` load of `head` (observe completed pops before
///   reusing a slot), `Release` store of `tail` (publish the write)
/// - Consumer: `Acquire` load of `tail` (observe the slot write),
///   `Release` store of `head` (return the slot)
pub struct SpscRingQueue<T> {
    /// Slot storage, indexed by counter modulo capacity.
    slots: Box<[UnsafeCell<MaybeUninit<T>>]>,

    /// Count of elements ever pushed (monotonic, never wraps in practice).
    tail: AtomicU64,

    /// Count of elements ever popped.
    head: AtomicU64,
}

// SAFETY: Single producer, single consumer, coordination through the
// head/tail atomics as described above. No aliasing of a live slot.
unsafe impl<T: Send> Send for SpscRingQueue<T> {}
unsafe impl<T: Send> Sync for SpscRingQueue<T> {}

impl<T> LogQueue for SpscRingQueue<T> {
    type Item = T;

    fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "queue capacity must be non-zero");

        let slots = (0..capacity)
            .map(|_| UnsafeCell::new(MaybeUninit::uninit()))
            .collect();

        Self {
            slots,
            tail: AtomicU64::new(0),
            head: AtomicU64::new(0),
        }
    }

    /// Push from the producer thread.
    ///
    /// # Timing
    ///
    /// O(1), wait-free. Never blocks, never allocates.
    #[inline]
    fn try_push(&self, item: T) -> Result<(), T> {
        // Own index: only the producer writes tail
        let tail = self.tail.load(Ordering::Relaxed);
        let head = self.head.load(Ordering::Acquire);

        if tail.wrapping_sub(head) >= self.slots.len() as u64 {
            return Err(item);
        }

        let idx = (tail % self.slots.len() as u64) as usize;

        // SAFETY: tail - head < capacity, so this slot is not owned by
        // the consumer; single producer, so no concurrent writer.
        unsafe {
            (*self.slots[idx].get()).write(item);
        }

        self.tail.store(tail.wrapping_add(1), Ordering::Release);
        Ok(())
    }

    /// Pop from the consumer thread.
    #[inline]
    fn try_pop(&self) -> Option<T> {
        // Own index: only the consumer writes head
        let head = self.head.load(Ordering::Relaxed);
        let tail = self.tail.load(Ordering::Acquire);

        if head == tail {
            return None;
        }

        let idx = (head % self.slots.len() as u64) as usize;

        // SAFETY: head < tail, so this slot holds a published element;
        // single consumer, so no concurrent reader. The value is moved
        // out and the slot handed back to the producer below.
        let item = unsafe { (*self.slots[idx].get()).assume_init_read() };

        self.head.store(head.wrapping_add(1), Ordering::Release);
        Some(item)
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl<T> Drop for SpscRingQueue<T> {
    fn drop(&mut self) {
        // Elements still queued own resources; move them out and drop
        while self.try_pop().is_some() {}
    }
}
