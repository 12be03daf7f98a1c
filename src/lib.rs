//! A small collections framework in the shape of the classic object-oriented ones: a handful of
//! contracts ([`Collection`](collections::traits::Collection), [`List`](collections::traits::List),
//! [`Queue`](collections::traits::Queue) and [`Cursor`](collections::traits::Cursor)) and two
//! engines that implement them.
//!
//! # Purpose
//! The two engines are a doubly linked list which can be used as a list, stack, deque or queue,
//! and a binary heap backed priority queue with a fixed capacity and a pluggable ordering. Most of
//! the contract surface is written once, as default trait methods over a small set of required
//! methods, rather than being repeated for each type.
//!
//! # Method
//! The linked list keeps its nodes in an arena and links them by index, so the whole crate is free
//! of `unsafe`. Nodes can still be addressed directly through
//! [`NodeRef`](collections::linked::NodeRef) handles, which stay valid until the node they point at
//! is removed (including across sorting).
//!
//! # Error Handling
//! Every failure has its own small error type, and operations that can fail in more than one way
//! return an enum over those types, so callers can match on exactly what went wrong. A few
//! index-based methods also come in a panicking flavour (`get`, `insert`, `remove_at`, `set`) next
//! to their `try_` counterparts, which panic with the message of the underlying error.
//!
//! # Logging
//! The crate emits [`tracing`] events for bulk structural work and for rejected insertions. It
//! never installs a subscriber; that is left to the application.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;

pub use util::error;
