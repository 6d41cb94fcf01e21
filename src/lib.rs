//! Growable circular FIFO queue with stable, comparator-driven ranked snapshots.
//!
//! The queue is a ring of slots linked in both directions, split into a contiguous run of
//! occupied slots starting at `front` and a contiguous run of empty slots starting at `rear`.
//! When every slot is occupied a new ring as large as the current one is spliced in right
//! before `front`, doubling the capacity. Capacity never shrinks.
//!
//! # Basic usage
//! ```
//! use procq::{compare::PidComparator, Process, Queue};
//! let mut queue = Queue::new(2)?;
//! queue.enqueue(Process::new("cmd", 119, 2.0, 23, 2, "System")?);
//! queue.enqueue(Process::new("termial", 9625, 4.1, 46, 1, "Pritesh")?);
//! queue.enqueue(Process::new("matlab", 13, 12.5, 923, 8, "Admin")?);
//! assert_eq!(queue.capacity(), 4);
//!
//! let ranked = queue.sorted_snapshot(&PidComparator::new());
//! let names: Vec<_> = ranked.iter().map(|p| p.name()).collect();
//! assert_eq!(names, &["matlab", "cmd", "termial"]);
//!
//! // The live queue keeps its FIFO order.
//! assert_eq!(queue.dequeue().map(|p| p.pid()), Some(119));
//! # Ok::<(), procq::Error>(())
//! ```
pub mod compare;
mod error;
pub mod process;
mod slot;
pub mod sort;

pub use crate::{
    error::{Error, Result},
    process::Process,
    slot::cursor::Cursor,
};

use {
    crate::{
        compare::Compare,
        slot::Slots,
        sort::{MergeSort, Sorter},
    },
    either::Either,
    log::{debug, trace},
    std::fmt,
};

/// Capacity used by [`Queue::default`], [`FromIterator`] and the [`queue!`] macro.
pub const DEFAULT_CAPACITY: usize = 8;

#[macro_export]
macro_rules! queue {
    [$($elem:expr),* $(,)?] => {{
        #[allow(unused_mut)]
        let mut q = $crate::Queue::default();
        $(
            q.enqueue($elem);
        )*
        q
    }}
}

#[derive(Clone)]
pub struct Queue<T> {
    slots: Slots<T>,
    // Invariant (3): `front` and `rear` are indices of `slots`, `size` steps of `next` lead from
    // `front` to `rear`, and exactly the `size` slots on that path are occupied.
    front: usize,
    rear: usize,
    size: usize,
}

impl<T> Queue<T> {
    /// Creates a queue with exactly `initial_capacity` empty slots.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `initial_capacity` is zero.
    pub fn new(initial_capacity: usize) -> Result<Self> {
        if initial_capacity < 1 {
            return Err(Error::invalid_capacity(initial_capacity));
        }
        Ok(Self::with_ring(initial_capacity))
    }

    fn with_ring(capacity: usize) -> Self {
        let mut slots = Slots::new();
        let first = slots.ring(capacity);
        Self {
            slots,
            front: first,
            rear: first,
            size: 0,
        }
    }

    /// Number of queued values.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Total number of slots, occupied or not.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Appends `value` at the rear, doubling the capacity first if every slot is occupied.
    pub fn enqueue(&mut self, value: T) {
        if self.size == self.capacity() {
            self.grow();
        }
        let previous = self.slots.fill(self.rear, value);
        debug_assert!(previous.is_none(), "rear slot must be empty");
        self.rear = self.slots.next(self.rear);
        self.size += 1;
        trace!("enqueued value, size {}/{}", self.size, self.capacity());
    }

    /// Removes and returns the value at the front, or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots.take(self.front);
        debug_assert!(value.is_some(), "front slot must be occupied");
        self.front = self.slots.next(self.front);
        self.size -= 1;
        trace!("dequeued value, size {}/{}", self.size, self.capacity());
        value
    }

    /// Returns the value at the front without removing it, or `None` if the queue is empty.
    pub fn peek_front(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            self.slots.value(self.front)
        }
    }

    /// Doubles the capacity by splicing a fresh ring of empty slots between the last occupied
    /// slot and `front`.
    ///
    /// # Sketch
    /// ```text
    ///  occupied arc                 new empty ring
    /// ┌─────┬──►...──►┌────┬──►┌──────┬──►...──►┌────┬──►┌─────┐
    /// │front│         │last│   │ rear │         │end │   │front│
    /// └─────┘         └────┘◄──┴──────┘         └────┘◄──┴─────┘
    /// ```
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        // A full queue has no empty arc: `rear` has wrapped around onto `front`.
        debug_assert_eq!(self.front, self.rear);
        let first_empty = self.slots.ring(old_capacity);
        self.slots.splice(first_empty, self.front);
        self.rear = first_empty;
        debug!("queue grown from {} to {} slots", old_capacity, self.capacity());
    }

    /// Iterates over the queued values from front to rear.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        if self.is_empty() {
            Either::Left(std::iter::empty())
        } else {
            Either::Right(Iter::new(self))
        }
    }

    /// A cursor on the front slot. `None` if the queue is empty.
    pub fn cursor(&self) -> Option<Cursor<'_, T>> {
        if self.is_empty() {
            None
        } else {
            Some(Cursor::new(&self.slots, self.front))
        }
    }
}

impl<T: Clone> Queue<T> {
    /// Copies the queued values into a `Vec`, front first.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Returns the queued values sorted by `comparator`; values that compare equal keep their
    /// FIFO order. The queue itself is left untouched.
    pub fn sorted_snapshot<C>(&self, comparator: &C) -> Vec<T>
    where
        C: Compare<T> + ?Sized,
    {
        let mut snapshot = self.to_vec();
        debug!("sorting a snapshot of {} values", snapshot.len());
        MergeSort::sort(&mut snapshot, comparator);
        snapshot
    }
}

/// Front to rear iterator over the occupied slots of a [`Queue`].
struct Iter<'life, T> {
    cursor: Cursor<'life, T>,
    remaining: usize,
}

impl<'life, T> Iter<'life, T> {
    fn new(queue: &'life Queue<T>) -> Self {
        Self {
            cursor: Cursor::new(&queue.slots, queue.front),
            remaining: queue.size,
        }
    }
}

impl<'life, T> Iterator for Iter<'life, T> {
    type Item = &'life T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.cursor.value();
        self.cursor.move_next();
        self.remaining -= 1;
        current
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::with_ring(DEFAULT_CAPACITY)
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut new: Self = Default::default();
        new.extend(iter);
        new
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.enqueue(x);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// One value per line between two rules. An empty queue renders as nothing.
impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        writeln!(f, "------------")?;
        for value in self.iter() {
            writeln!(f, "{value}")?;
        }
        writeln!(f, "------------")
    }
}

/// Draining iterator returned by [`Queue::into_iter`], in FIFO order.
pub struct IntoIter<T>(Queue<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::<T>(self)
    }
}
