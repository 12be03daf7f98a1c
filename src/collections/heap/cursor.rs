use std::collections::VecDeque;

use tracing::trace;

use super::PriorityQueue;
use crate::collections::traits::{Comparator, Cursor};
use crate::util::error::{IllegalCursorState, NoMoreElements};

/// A [`Cursor`] over the slots of a [`PriorityQueue`], in array order. Created with
/// [`PriorityQueue::cursor`].
///
/// Removing the current element refills its slot from the end of the backing array. If the filler
/// belongs above the slot, where the cursor has already been, it is set aside instead and visited
/// after the last slot. Set aside elements are put back into the queue once the cursor moves past
/// them or is dropped, so every element is visited exactly once.
pub struct QueueCursor<'a, T, C: Comparator<T>, E> {
    queue: &'a mut PriorityQueue<T, C, E>,
    next: usize,
    current: Slot,
    displaced: VecDeque<T>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Start,
    At(usize),
    /// The front of `displaced`.
    Displaced,
    Removed,
}

impl<'a, T, C: Comparator<T>, E> QueueCursor<'a, T, C, E> {
    pub(crate) fn new(queue: &'a mut PriorityQueue<T, C, E>) -> QueueCursor<'a, T, C, E> {
        QueueCursor {
            queue,
            next: 0,
            current: Slot::Start,
            displaced: VecDeque::new(),
        }
    }

    fn restore_current(&mut self) {
        if let Some(value) = self.displaced.pop_front() {
            self.queue.restore(value);
        }
        self.next = self.queue.len();
    }
}

impl<T, C: Comparator<T>, E> Cursor<T> for QueueCursor<'_, T, C, E> {
    fn has_next(&self) -> bool {
        let held = usize::from(self.current == Slot::Displaced);
        self.next < self.queue.len() || self.displaced.len() > held
    }

    fn next(&mut self) -> Result<&T, NoMoreElements> {
        if !self.has_next() {
            return Err(NoMoreElements);
        }
        if self.current == Slot::Displaced {
            self.restore_current();
        }

        if self.next < self.queue.len() {
            let index = self.next;
            self.current = Slot::At(index);
            self.next = index + 1;
            return Ok(&self.queue.data[index]);
        }

        self.current = Slot::Displaced;
        self.displaced.front().ok_or(NoMoreElements)
    }

    fn remove(&mut self) -> Result<T, IllegalCursorState> {
        let value = match self.current {
            Slot::Start => return Err(IllegalCursorState::NoCurrent),
            Slot::Removed => return Err(IllegalCursorState::AlreadyRemoved),
            Slot::Displaced => {
                let Some(value) = self.displaced.pop_front() else {
                    unreachable!("cursor holds no displaced element");
                };
                value
            },
            Slot::At(index) => {
                let Some(value) = self.queue.take_slot(index, &mut self.displaced) else {
                    unreachable!("cursor slot {index} is outside of the queue");
                };
                self.next = index;
                value
            },
        };

        self.current = Slot::Removed;
        Ok(value)
    }

    fn current(&self) -> Result<&T, IllegalCursorState> {
        match self.current {
            Slot::Start => Err(IllegalCursorState::NoCurrent),
            Slot::Removed => Err(IllegalCursorState::AlreadyRemoved),
            Slot::At(index) => Ok(&self.queue.data[index]),
            Slot::Displaced => self.displaced.front().ok_or(IllegalCursorState::NoCurrent),
        }
    }
}

impl<T, C: Comparator<T>, E> Drop for QueueCursor<'_, T, C, E> {
    fn drop(&mut self) {
        if self.displaced.is_empty() {
            return;
        }

        trace!(
            count = self.displaced.len(),
            "restoring elements set aside by priority queue cursor"
        );
        for value in self.displaced.drain(..) {
            self.queue.restore(value);
        }
    }
}
