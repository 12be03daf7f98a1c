mod cursor;
mod iter;
mod length;
mod linked_list;
mod node;
mod sort;
mod tests;

pub use cursor::*;
pub use iter::*;
pub(crate) use length::*;
pub use linked_list::*;
pub use node::NodeRef;
pub(crate) use node::{Arena, Link, Node};
