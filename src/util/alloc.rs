use std::cell::Cell;
use std::rc::Rc;

/// A test value which counts how many times it, or any clone of it, has been dropped, so that
/// collections can be checked for leaks and double drops.
///
/// All clones share one counter and compare as equal to each other.
#[derive(Debug, Clone)]
pub struct CountedDrop {
    drops: Rc<Cell<usize>>,
}

impl CountedDrop {
    pub fn new() -> CountedDrop {
        CountedDrop {
            drops: Rc::new(Cell::new(0)),
        }
    }

    /// Returns the number of drops counted since the last call, and resets the count.
    pub fn take(&self) -> usize {
        self.drops.take()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

impl PartialEq for CountedDrop {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.drops, &other.drops)
    }
}
