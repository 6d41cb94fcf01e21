pub mod cursor;

/// Storage cell of a circular doubly linked ring. Links are indices into the owning [`Slots`].
#[derive(Debug, Clone)]
pub(crate) struct Slot<T> {
    next: usize,
    prev: usize,
    value: Option<T>,
}

/// Arena of slots. Every slot belongs to exactly one ring.
// The present implementation aims to preserve the following invariant (1):
// * The `next` and `prev` indices are always in bounds
// * Following `next` recursively must always end up at the original slot
// * Following `prev` recursively must give the exact reverse path as the `next` one
#[derive(Debug, Clone)]
pub(crate) struct Slots<T> {
    slots: Vec<Slot<T>>,
}

impl<T> Slots<T> {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Total number of slots, occupied or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Appends `count` empty slots linked into a ring of their own and returns the index of its
    /// first slot.
    ///
    /// # Layout
    /// ```text
    /// ┌────┬──►┌────┬──►┌────┬──►┌────┐
    /// │ 0  │   │ 1  │   │... │   │n-1 │
    /// └────┘◄──┴────┘◄──┴────┘◄──┴────┘
    ///   ▲ │                        │ ▲
    ///   │ └────────────────────────┘ │
    ///   └────────────────────────────┘
    /// ```
    pub fn ring(&mut self, count: usize) -> usize {
        debug_assert!(count > 0);
        let first = self.slots.len();
        let last = first + count - 1;
        self.slots.reserve(count);
        for index in first..=last {
            // Preserving invariant (1)
            let next = if index == last { first } else { index + 1 };
            let prev = if index == first { last } else { index - 1 };
            self.slots.push(Slot {
                next,
                prev,
                value: None,
            });
        }
        first
    }

    pub fn next(&self, index: usize) -> usize {
        self.slots[index].next
    }

    pub fn prev(&self, index: usize) -> usize {
        self.slots[index].prev
    }

    pub fn value(&self, index: usize) -> Option<&T> {
        self.slots[index].value.as_ref()
    }

    /// Stores `value` in the slot and returns the previous occupant.
    pub fn fill(&mut self, index: usize, value: T) -> Option<T> {
        self.slots[index].value.replace(value)
    }

    /// Empties the slot and returns its occupant.
    pub fn take(&mut self, index: usize) -> Option<T> {
        self.slots[index].value.take()
    }

    /// Connects `prev` and `next` together.
    ///
    /// # Sketch
    /// ```text
    ///      ┌────┬──┐
    ///      │... │  │
    ///  ┌───┴────┘  │
    /// ┌▼───┬──►┌───▼┐
    /// │prev│   │next│
    /// └────┘◄──┴────┘
    /// ```
    ///
    /// The slots previously between `prev` and `next` must be linked somewhere else afterwards
    /// in order to preserve invariant (1).
    fn link(&mut self, prev: usize, next: usize) {
        self.slots[next].prev = prev;
        self.slots[prev].next = next;
    }

    /// Inserts the whole ring starting at `list` before `next`.
    ///
    /// `list` must not be on the same ring as `next`.
    pub fn splice(&mut self, list: usize, next: usize) {
        let last_of_list = self.slots[list].prev;
        let prev = self.slots[next].prev;

        // The end of `list` is connected to `next`
        self.link(last_of_list, next);

        // The beginning of `list` is connected to the slot before `next`
        self.link(prev, list);
    }

    /// Number of `next` steps from `from` to `to`, if `to` is on the ring of `from`.
    #[cfg(test)]
    pub fn distance(&self, from: usize, to: usize) -> Option<usize> {
        let mut current = from;
        for steps in 0..self.slots.len() {
            if current == to {
                return Some(steps);
            }
            current = self.slots[current].next;
        }
        None
    }
}
