use super::Slots;

/// A `Cursor` is like an iterator, except that it can freely seek back-and-forth around the
/// ring of slots, empty ones included.
/// This `struct` is constructed by the [`Queue::cursor`](crate::Queue::cursor) function.
pub struct Cursor<'life, T> {
    slots: &'life Slots<T>,
    // Invariant (2): `current` is an index of `slots`.
    current: usize,
}

impl<'life, T> Cursor<'life, T> {
    /// Builds a `Cursor` on the slot at `index`, which must be in bounds.
    pub(crate) fn new(slots: &'life Slots<T>, index: usize) -> Self {
        Self {
            slots,
            current: index,
        }
    }

    /// Moves the cursor to the next slot of the ring.
    pub fn move_next(&mut self) {
        // Invariants (1) and (2) keep `current` in bounds.
        self.current = self.slots.next(self.current);
    }

    /// Moves the cursor to the previous slot of the ring.
    pub fn move_prev(&mut self) {
        self.current = self.slots.prev(self.current);
    }

    /// Returns the occupant of the slot behind the cursor, `None` for an empty slot.
    pub fn value(&self) -> Option<&'life T> {
        self.slots.value(self.current)
    }
}

impl<'life, T> Clone for Cursor<'life, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'life, T> Copy for Cursor<'life, T> {}

impl<'life, T: std::fmt::Debug> std::fmt::Debug for Cursor<'life, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.value().fmt(f)
    }
}

impl<'life, T> std::cmp::PartialEq for Cursor<'life, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.slots, other.slots) && self.current == other.current
    }
}
