//! The contracts shared by every collection in this crate.
//!
//! [`Collection`] is the root, with [`List`] and [`Queue`] building on it. Iteration with removal
//! goes through [`Cursor`], and the orderings and equalities that collections can be configured
//! with are described by [`Comparator`] and [`Equivalence`].

mod collection;
mod compare;
mod cursor;
mod equivalence;
mod list;
mod queue;

pub use collection::*;
pub use compare::*;
pub use cursor::*;
pub use equivalence::*;
pub use list::*;
pub use queue::*;
