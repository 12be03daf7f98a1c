use derive_more::IsVariant;

use super::{LinkedList, Link, NodeRef};
use crate::collections::traits::Cursor;
use crate::util::error::{IllegalCursorState, NoMoreElements};

/// A [`Cursor`] over a [`LinkedList`], created with [`LinkedList::cursor`].
///
/// Removing through the cursor unlinks the current node in `O(1)`, and iteration carries on from
/// the node that followed it.
pub struct ListCursor<'a, T, E> {
    pub(crate) list: &'a mut LinkedList<T, E>,
    pub(crate) next: Link,
    pub(crate) current: Current,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub(crate) enum Current {
    Start,
    Node(usize),
    Removed,
}

impl<'a, T, E> ListCursor<'a, T, E> {
    pub(crate) fn new(list: &'a mut LinkedList<T, E>) -> ListCursor<'a, T, E> {
        let (head, _) = list.link_range();
        ListCursor {
            list,
            next: head,
            current: Current::Start,
        }
    }

    /// Returns a handle to the current node, if there is one.
    pub fn current_node(&self) -> Option<NodeRef> {
        match self.current {
            Current::Node(index) => Some(self.list.nodes.handle(index)),
            _ => None,
        }
    }

    /// Returns the current element mutably.
    pub fn current_mut(&mut self) -> Result<&mut T, IllegalCursorState> {
        match self.current {
            Current::Start => Err(IllegalCursorState::NoCurrent),
            Current::Removed => Err(IllegalCursorState::AlreadyRemoved),
            Current::Node(index) => Ok(self.list.nodes.value_mut(index)),
        }
    }
}

impl<T, E> Cursor<T> for ListCursor<'_, T, E> {
    fn has_next(&self) -> bool {
        self.next.is_some()
    }

    fn next(&mut self) -> Result<&T, NoMoreElements> {
        let index = self.next.ok_or(NoMoreElements)?;
        self.current = Current::Node(index);
        self.next = self.list.nodes.next(index);
        Ok(self.list.nodes.value(index))
    }

    fn remove(&mut self) -> Result<T, IllegalCursorState> {
        match self.current {
            Current::Start => Err(IllegalCursorState::NoCurrent),
            Current::Removed => Err(IllegalCursorState::AlreadyRemoved),
            Current::Node(index) => {
                self.current = Current::Removed;
                Ok(self.list.unlink(index))
            },
        }
    }

    fn current(&self) -> Result<&T, IllegalCursorState> {
        match self.current {
            Current::Start => Err(IllegalCursorState::NoCurrent),
            Current::Removed => Err(IllegalCursorState::AlreadyRemoved),
            Current::Node(index) => Ok(self.list.nodes.value(index)),
        }
    }
}
