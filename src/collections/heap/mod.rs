//! A module containing [`PriorityQueue`] and associated types.
//!
//! Besides the queue itself, this includes [`QueueOptions`] for configuring a queue before it is
//! built, [`QueueCursor`] for iteration with removal and the borrowed and owned iterators [`Iter`]
//! and [`IntoIter`]. All of these visit elements in the order of the backing array, except that the
//! cursor visits elements set aside by its own removals last.

mod cursor;
mod iter;
mod options;
mod priority_queue;

pub use cursor::*;
pub use iter::*;
pub use options::*;
pub use priority_queue::*;
