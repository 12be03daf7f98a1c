use std::num::NonZero;

use tracing::debug;

use super::{DEFAULT_CAPACITY, PriorityQueue};
use crate::collections::traits::{Natural, Reversed, ValueEq};
use crate::util::error::IllegalArguments;

/// A builder for [`PriorityQueue`]s, which allows the capacity, ordering and equality to be
/// configured before the queue is created.
///
/// ```
/// # use standard_collections::collections::heap::QueueOptions;
/// let mut queue = QueueOptions::new().capacity(3).reversed().build().unwrap();
/// queue.offer(1).unwrap();
/// queue.offer(7).unwrap();
/// queue.offer(4).unwrap();
/// assert!(queue.offer(9).is_err());
/// assert_eq!(queue.poll(), Some(7));
/// ```
#[derive(Debug, Clone)]
pub struct QueueOptions<C = Natural, E = ValueEq> {
    capacity: usize,
    comparator: C,
    equivalence: E,
}

impl QueueOptions {
    /// Creates a new QueueOptions with [`DEFAULT_CAPACITY`], [`Natural`] ordering and [`ValueEq`]
    /// equality.
    pub const fn new() -> QueueOptions {
        QueueOptions {
            capacity: DEFAULT_CAPACITY,
            comparator: Natural,
            equivalence: ValueEq,
        }
    }
}

impl<C, E> QueueOptions<C, E> {
    /// Sets the maximum number of elements the queue can hold. Must be at least 1.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the ordering. The element which compares as least is polled first.
    pub fn comparator<D>(self, comparator: D) -> QueueOptions<D, E> {
        QueueOptions {
            capacity: self.capacity,
            comparator,
            equivalence: self.equivalence,
        }
    }

    /// Reverses the currently configured ordering.
    pub fn reversed(self) -> QueueOptions<Reversed<C>, E> {
        QueueOptions {
            capacity: self.capacity,
            comparator: Reversed(self.comparator),
            equivalence: self.equivalence,
        }
    }

    /// Sets the equality used by `contains` and `remove`.
    pub fn equality<F>(self, equivalence: F) -> QueueOptions<C, F> {
        QueueOptions {
            capacity: self.capacity,
            comparator: self.comparator,
            equivalence,
        }
    }

    /// Creates an empty [`PriorityQueue`] with these options.
    ///
    /// Fails with [`IllegalArguments`] if the configured capacity is zero.
    pub fn build<T>(self) -> Result<PriorityQueue<T, C, E>, IllegalArguments> {
        let capacity = NonZero::new(self.capacity).ok_or(IllegalArguments {
            reason: "priority queue capacity must be at least 1",
        })?;

        debug!(capacity = capacity.get(), "building priority queue");
        Ok(PriorityQueue::from_parts(capacity, self.comparator, self.equivalence))
    }
}

impl Default for QueueOptions {
    fn default() -> Self {
        Self::new()
    }
}
