use std::mem;

/// A link to a neighbouring node, as an index into the owning list's [`Arena`].
pub(crate) type Link = Option<usize>;

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link,
    pub next: Link,
}

/// A handle to a single node of a [`LinkedList`](super::LinkedList), used to insert or remove
/// relative to that node in `O(1)`.
///
/// A NodeRef stays valid until its node is removed, and is unaffected by other insertions,
/// removals or sorting. Once the node is removed the handle is stale: the list rejects it, even if
/// the node's storage has since been reused for a new element. Handles are only meaningful to the
/// list that produced them; using one with another list is a logic error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

#[derive(Debug, Clone)]
pub(crate) struct Slot<T> {
    generation: u32,
    node: Option<Node<T>>,
}

/// Owns every node of a list. Vacant slots are recycled, with each slot's generation bumped on
/// removal so that old [`NodeRef`]s can be told apart from new ones.
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    vacant: Vec<usize>,
}

impl<T> Arena<T> {
    pub const fn new() -> Arena<T> {
        Arena {
            slots: Vec::new(),
            vacant: Vec::new(),
        }
    }

    pub fn alloc(&mut self, node: Node<T>) -> usize {
        match self.vacant.pop() {
            Some(index) => {
                self.slots[index].node = Some(node);
                index
            },
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                self.slots.len() - 1
            },
        }
    }

    /// Moves the node at `index` out of the arena, invalidating all handles to it.
    pub fn take(&mut self, index: usize) -> Node<T> {
        let slot = &mut self.slots[index];
        match slot.node.take() {
            Some(node) => {
                slot.generation = slot.generation.wrapping_add(1);
                self.vacant.push(index);
                node
            },
            None => unreachable!("node {index} is not linked"),
        }
    }

    pub fn node(&self, index: usize) -> &Node<T> {
        match &self.slots[index].node {
            Some(node) => node,
            None => unreachable!("node {index} is not linked"),
        }
    }

    pub fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        match &mut self.slots[index].node {
            Some(node) => node,
            None => unreachable!("node {index} is not linked"),
        }
    }

    pub fn value(&self, index: usize) -> &T {
        &self.node(index).value
    }

    pub fn value_mut(&mut self, index: usize) -> &mut T {
        &mut self.node_mut(index).value
    }

    pub fn replace(&mut self, index: usize, value: T) -> T {
        mem::replace(self.value_mut(index), value)
    }

    pub fn prev(&self, index: usize) -> Link {
        self.node(index).prev
    }

    pub fn next(&self, index: usize) -> Link {
        self.node(index).next
    }

    pub fn handle(&self, index: usize) -> NodeRef {
        NodeRef {
            index,
            generation: self.slots[index].generation,
        }
    }

    /// Returns the index behind `handle`, if it still refers to a linked node.
    pub fn resolve(&self, handle: NodeRef) -> Option<usize> {
        match self.slots.get(handle.index) {
            Some(Slot {
                generation,
                node: Some(_),
            }) if *generation == handle.generation => Some(handle.index),
            _ => None,
        }
    }

    /// Drops every node. Generations are kept, so handles from before the clear stay stale.
    pub fn clear(&mut self) {
        self.vacant.clear();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.node.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.vacant.push(index);
        }
    }
}
