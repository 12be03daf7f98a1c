use std::cmp::Ordering;

use tracing::trace;

use super::{Arena, LinkedList, ListContents, ListState};

impl<T, E> LinkedList<T, E> {
    /// Sorts the LinkedList with a merge sort over its nodes, according to `compare`.
    ///
    /// The sort is stable and relinks the existing nodes rather than moving any elements, so every
    /// [`NodeRef`](super::NodeRef) still refers to the same element afterwards.
    pub fn sort_by<F: FnMut(&T, &T) -> Ordering>(&mut self, mut compare: F) {
        let ListState::Full(ListContents { len, head, .. }) = self.state else {
            return;
        };
        trace!(len = len.get(), "merge sorting linked list");

        let head = merge_sort(&mut self.nodes, head, &mut compare);
        self.nodes.node_mut(head).prev = None;

        let mut tail = head;
        while let Some(next) = self.nodes.next(tail) {
            tail = next;
        }

        self.state = ListState::Full(ListContents { len, head, tail });
    }

    /// Sorts the LinkedList into ascending order. See [`sort_by`](LinkedList::sort_by).
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp)
    }
}

/// Sorts the chain starting at `head`, returning the new head. The chain's last node must have no
/// next link.
fn merge_sort<T, F>(nodes: &mut Arena<T>, head: usize, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let Some(second) = split(nodes, head) else {
        return head;
    };

    let first = merge_sort(nodes, head, compare);
    let second = merge_sort(nodes, second, compare);
    merge(nodes, first, second, compare)
}

/// Cuts the chain starting at `head` in two, returning the head of the second half, or [`None`]
/// if the chain is a single node. For odd lengths, the first half is the longer one.
fn split<T>(nodes: &mut Arena<T>, head: usize) -> Option<usize> {
    let mut fast = head;
    let mut slow = head;

    loop {
        let Some(next) = nodes.next(fast) else { break };
        let Some(after) = nodes.next(next) else { break };
        fast = after;
        match nodes.next(slow) {
            Some(next_slow) => slow = next_slow,
            None => break,
        }
    }

    let second = nodes.next(slow)?;
    nodes.node_mut(slow).next = None;
    nodes.node_mut(second).prev = None;
    Some(second)
}

/// Merges two sorted chains, rebuilding back links as it goes. When the fronts compare equal, the
/// node from `first` is taken, which keeps the sort stable.
fn merge<T, F>(nodes: &mut Arena<T>, first: usize, second: usize, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let takes_first = |nodes: &Arena<T>, compare: &mut F, a: usize, b: usize| {
        compare(nodes.value(a), nodes.value(b)) != Ordering::Greater
    };

    let (head, mut first, mut second) = if takes_first(nodes, compare, first, second) {
        (first, nodes.next(first), Some(second))
    } else {
        (second, Some(first), nodes.next(second))
    };
    nodes.node_mut(head).prev = None;
    let mut tail = head;

    loop {
        let node = match (first, second) {
            (Some(a), Some(b)) => {
                if takes_first(nodes, compare, a, b) {
                    first = nodes.next(a);
                    a
                } else {
                    second = nodes.next(b);
                    b
                }
            },
            // The rest of a chain is already sorted and linked, so it is attached as a whole.
            (Some(rest), None) | (None, Some(rest)) => {
                link(nodes, tail, rest);
                break;
            },
            (None, None) => break,
        };
        link(nodes, tail, node);
        tail = node;
    }

    head
}

fn link<T>(nodes: &mut Arena<T>, prev: usize, next: usize) {
    nodes.node_mut(prev).next = Some(next);
    nodes.node_mut(next).prev = Some(prev);
}
