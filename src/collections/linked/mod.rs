//! Linked collection types. Primarily revolves around [`LinkedList`], its accompanying
//! [`ListCursor`] type and the [`NodeRef`] handles it hands out.

pub mod list;

#[doc(inline)]
pub use list::{LinkedList, ListCursor, NodeRef};
