//! Various general-purpose collection types.
//!
//! # Purpose
//! [`traits`] holds the contracts every collection here is written against, [`linked`] the doubly
//! linked list and [`heap`] the binary heap based priority queue.
//!
//! # Method
//! Types implement only the small required part of each contract; bulk operations such as
//! `remove_all` or `contains_all` come from the default methods of
//! [`Collection`](traits::Collection).

#[cfg(feature = "heap")]
pub mod heap;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "traits")]
pub mod traits;
