#![cfg(test)]

use std::collections::VecDeque;
use std::iter;

use proptest::prelude::*;

use super::*;
use crate::collections::traits::{Collection, Cursor, List, Natural, Queue};
use crate::util::alloc::CountedDrop;
use crate::util::error::{IllegalCursorState, NoMoreElements, UnsupportedOperation};
use crate::util::panic::assert_panics;

fn list_of<const N: usize>(values: [i32; N]) -> LinkedList<i32> {
    values.into_iter().collect()
}

fn contents<T: Clone, E>(list: &LinkedList<T, E>) -> Vec<T> {
    list.iter().cloned().collect()
}

#[test]
fn test_add_and_remove_at_both_ends() {
    let mut list = LinkedList::new();
    assert!(list.add(1));
    assert!(list.add(2));
    assert!(list.add(3));

    assert_eq!(list.remove_first(), Ok(1), "remove_first should return the oldest element.");
    assert_eq!(list.remove_last(), Ok(3), "remove_last should return the newest element.");
    assert_eq!(list.len(), 1, "Only the middle element should remain.");
    list.verify_double_links();

    assert_eq!(list.remove_last(), Ok(2));
    assert!(list.is_empty(), "Removing the last node should leave the list empty.");
    assert_eq!(list.first_node(), None, "An empty list should have no head.");
    assert_eq!(list.last_node(), None, "An empty list should have no tail.");
    assert_eq!(list.remove_first(), Err(EmptyCollection));
}

#[test]
fn test_sort_three_elements() {
    let mut list = list_of([3, 1, 2]);
    list.sort_by(|a, b| a.cmp(b));

    assert_eq!(list.get(0), &1);
    assert_eq!(list.get(1), &2);
    assert_eq!(list.get(2), &3);
    list.verify_double_links();
}

#[test]
fn test_sub_list() {
    let list = list_of([1, 2, 3, 4]);
    let sub_list = list.sub_list(1, 3).unwrap();

    assert_eq!(sub_list.len(), 2);
    assert_eq!(contents(&sub_list), [2, 3], "The sub-list should hold copies of 1..3.");
    assert_eq!(list.len(), 4, "The original list should be unchanged.");
    assert_eq!(contents(&list), [1, 2, 3, 4]);
    sub_list.verify_double_links();

    assert!(list.sub_list(4, 4).unwrap().is_empty(), "An empty range at the end is valid.");
    assert_eq!(
        list.sub_list(3, 1),
        Err(IllegalRange {
            from: 3,
            to: 1,
            len: 4
        }),
        "A backwards range should be rejected."
    );
    assert_eq!(
        list.sub_list(2, 5),
        Err(IllegalRange {
            from: 2,
            to: 5,
            len: 4
        }),
        "A range past the end should be rejected."
    );
}

#[test]
fn test_pop_empty() {
    let mut list = LinkedList::<i32>::new();
    assert_eq!(list.pop(), Err(EmptyCollection), "Popping an empty stack should fail.");
}

#[test]
fn test_stack_and_deque() {
    let mut list = LinkedList::new();
    list.push(1).unwrap();
    list.push(2).unwrap();
    list.add_first(0).unwrap();

    assert_eq!(list.get_first(), Ok(&0));
    assert_eq!(list.get_last(), Ok(&2));
    assert_eq!(list.pop(), Ok(2), "The stack top should be the back of the list.");
    assert_eq!(list.poll_first(), Some(0));
    assert_eq!(list.poll_last(), Some(1));
    assert_eq!(list.poll_first(), None);
    assert_eq!(list.poll_last(), None);
    assert_eq!(list.get_first(), Err(EmptyCollection));
    assert_eq!(list.get_last(), Err(EmptyCollection));
}

#[test]
fn test_queue_order() {
    let mut list = LinkedList::new();
    assert!(list.offer(1));
    assert!(list.offer(2));
    assert!(list.offer_first(0));
    assert!(list.offer_last(3));

    assert_eq!(contents(&list), [0, 1, 2, 3], "offer should append to the back.");
    assert_eq!(list.peek(), Some(&0));
    assert_eq!(list.element(), Ok(&0));
    assert_eq!(list.peek_first(), Ok(&0));

    assert_eq!(list.peek_last(), Ok(&3));
    assert_eq!(list.len(), 4, "peek_last shouldn't remove anything.");

    assert_eq!(Queue::poll(&mut list), Some(0));
    assert_eq!(Queue::peek(&list), Some(&1));
    assert_eq!(Queue::element(&list), Ok(&1));
}

#[test]
fn test_bounded() {
    assert!(LinkedList::<i32>::bounded(0).is_err(), "A maximum length of zero is illegal.");

    let mut list = LinkedList::bounded(2).unwrap();
    assert_eq!(list.max_len(), Some(2));
    list.add_first(1).unwrap();
    list.add_last(2).unwrap();
    assert!(list.is_full());

    assert_eq!(list.add_last(3), Err(CapacityExceeded { max: 2 }));
    assert_eq!(list.add_first(3), Err(CapacityExceeded { max: 2 }));
    assert!(!list.add(3), "add should return false rather than fail when full.");
    assert!(!list.offer(3));
    assert!(!list.offer_first(3));
    assert!(list.try_insert(0, 3).unwrap_err().is_capacity_exceeded());
    let head = list.first_node().unwrap();
    assert!(list.add_before(head, 3).unwrap_err().is_capacity_exceeded());
    assert_eq!(
        list.add_after(head, 3),
        Err(NodeInsertError::CapacityExceeded(CapacityExceeded { max: 2 }))
    );
    assert_eq!(contents(&list), [1, 2], "Rejected insertions shouldn't change the list.");

    list.remove_first().unwrap();
    assert!(list.offer_first(0), "Removing an element should make room again.");
    assert_eq!(contents(&list), [0, 2]);

    assert_eq!(LinkedList::<i32>::new().max_len(), None);
}

#[test]
fn test_index_access() {
    let mut list = list_of([10, 20, 30, 40, 50]);

    for i in 0..5 {
        assert_eq!(list[i], (i as i32 + 1) * 10, "Indexing should walk to the right node.");
    }
    assert_eq!(
        list.try_get(5),
        Err(IndexOutOfBounds { index: 5, len: 5 }),
        "Indexing at len should fail."
    );

    list[1] = 21;
    assert_eq!(list.set(3, 41), 40, "set should return the replaced element.");
    assert_eq!(list.try_set(5, 0), Err(IndexOutOfBounds { index: 5, len: 5 }));
    *list.get_mut(4) += 1;
    assert_eq!(contents(&list), [10, 21, 30, 41, 51]);

    assert_panics!({ list.get(5) }, contains "Index 5 out of bounds");
    assert_panics!({ list.set(7, 0) });
}

#[test]
fn test_insert_and_remove_at() {
    let mut list = list_of([1, 3]);

    list.insert(1, 2);
    list.insert(0, 0);
    list.insert(4, 4);
    assert_eq!(contents(&list), [0, 1, 2, 3, 4], "Insertion at len should append.");
    list.verify_double_links();

    assert_eq!(
        list.try_insert(6, 6),
        Err(InsertError::IndexOutOfBounds(IndexOutOfBounds { index: 6, len: 5 })),
        "Insertion past len should fail."
    );

    assert_eq!(list.remove_at(2), 2);
    assert_eq!(list.remove_at(0), 0);
    assert_eq!(list.remove_at(2), 4);
    assert_eq!(list.try_remove_at(2), Err(IndexOutOfBounds { index: 2, len: 2 }));
    assert_eq!(contents(&list), [1, 3]);
    list.verify_double_links();

    assert_panics!({ list.insert(3, 0) }, contains "Index 3 out of bounds");
    assert_panics!({ list.remove_at(2) });
}

#[test]
fn test_list_trait_positional_mutation() {
    let mut list = list_of([1, 2]);

    assert_eq!(List::try_insert(&mut list, 1, 5), Ok(()));
    assert_eq!(List::try_set(&mut list, 0, 0), Ok(1));
    assert_eq!(List::try_remove_at(&mut list, 2), Ok(2));
    assert_eq!(contents(&list), [0, 5]);

    let error = List::try_insert(&mut list, 3, 9).unwrap_err();
    assert!(error.is_index_out_of_bounds(), "Bounds errors should carry through the trait.");
    assert_ne!(
        error,
        ListError::UnsupportedOperation(UnsupportedOperation { operation: "insert" }),
        "LinkedList supports positional mutation."
    );
}

#[test]
fn test_node_handles() {
    let mut list = LinkedList::new();
    let two = list.add_last(2).unwrap();
    let one = list.add_before(two, 1).unwrap();
    let four = list.add_after(two, 4).unwrap();
    list.add_before(four, 3).unwrap();
    list.add_after(four, 5).unwrap();

    assert_eq!(contents(&list), [1, 2, 3, 4, 5]);
    assert_eq!(list.first_node(), Some(one));
    assert_eq!(list.node_at(1), Ok(two));
    assert_eq!(list.next_node(two).and_then(|node| list.value_of(node)), Some(&3));
    assert_eq!(list.prev_node(one), None, "The head should have no previous node.");
    list.verify_double_links();

    *list.value_of_mut(four).unwrap() = 40;
    assert_eq!(list.remove_node(four), Ok(40));
    assert_eq!(contents(&list), [1, 2, 3, 5]);

    assert_eq!(list.value_of(four), None, "A removed node's handle should be stale.");
    assert!(list.remove_node(four).is_err(), "Removing a node twice should be rejected.");
    assert!(list.add_after(four, 0).unwrap_err().is_illegal_arguments());

    let reused = list.add_last(6).unwrap();
    assert_eq!(reused.index, four.index, "The vacant slot should be reused.");
    assert_eq!(
        list.value_of(four),
        None,
        "A stale handle shouldn't alias a new node in a reused slot."
    );
    assert_eq!(list.value_of(reused), Some(&6));

    list.clear();
    assert_eq!(list.value_of(one), None, "Clearing should invalidate every handle.");
    list.verify_double_links();
}

#[test]
fn test_handles_survive_sort() {
    let mut list = LinkedList::new();
    let handles: Vec<_> = [5, 3, 9, 1, 7]
        .into_iter()
        .map(|value| (value, list.add_last(value).unwrap()))
        .collect();

    list.sort();
    assert_eq!(contents(&list), [1, 3, 5, 7, 9]);
    assert_eq!(list.last_node(), Some(handles[2].1), "The tail should be recomputed.");

    for (value, handle) in handles {
        assert_eq!(
            list.value_of(handle),
            Some(&value),
            "Sorting should relink nodes, not move elements between them."
        );
    }
    list.verify_double_links();
}

#[test]
fn test_sort_with_comparator() {
    let mut list = list_of([4, 1, 3, 5, 2]);
    list.sort_with(&Natural.reversed());
    assert_eq!(contents(&list), [5, 4, 3, 2, 1]);
    list.verify_double_links();

    let mut empty = LinkedList::<i32>::new();
    empty.sort();
    assert!(empty.is_empty(), "Sorting an empty list should be a no-op.");

    let mut single = list_of([1]);
    single.sort();
    single.verify_double_links();
}

#[test]
fn test_cursor() {
    let mut list = list_of([1, 2, 3, 4, 5]);
    let mut cursor = list.cursor();

    assert_eq!(cursor.remove(), Err(IllegalCursorState::NoCurrent));
    assert_eq!(cursor.current(), Err(IllegalCursorState::NoCurrent));

    assert_eq!(cursor.next(), Ok(&1));
    assert_eq!(cursor.next(), Ok(&2));
    assert_eq!(cursor.current(), Ok(&2));
    assert_eq!(cursor.remove(), Ok(2));
    assert_eq!(
        cursor.remove(),
        Err(IllegalCursorState::AlreadyRemoved),
        "The same element can't be removed twice."
    );
    assert_eq!(cursor.current(), Err(IllegalCursorState::AlreadyRemoved));

    assert_eq!(cursor.next(), Ok(&3), "Iteration should continue after a removed node.");
    *cursor.current_mut().unwrap() = 30;
    assert_eq!(cursor.next(), Ok(&4));
    assert_eq!(cursor.next(), Ok(&5));
    assert_eq!(cursor.remove(), Ok(5));
    assert!(!cursor.has_next());
    assert_eq!(cursor.next(), Err(NoMoreElements));

    assert_eq!(contents(&list), [1, 30, 4]);
    assert_eq!(list.get_last(), Ok(&4), "Removing the tail through a cursor should move it.");
    list.verify_double_links();
}

#[test]
fn test_collection_defaults() {
    let mut list = list_of([1, 2, 3, 2, 1]);

    assert!(list.contains(&3));
    assert!(!list.contains(&4));
    assert_eq!(list.index_of(&2), Some(1));
    assert_eq!(list.last_index_of(&2), Some(3));
    assert_eq!(list.index_of(&9), None);

    assert!(list.remove(&2), "An equal element should be found and removed.");
    assert_eq!(contents(&list), [1, 3, 2, 1], "Only the first match should be removed.");
    assert!(!list.remove(&9));

    assert!(list.remove_if(|value| *value == 1));
    assert_eq!(contents(&list), [3, 2]);
    assert!(!list.remove_if(|value| *value > 10), "No match should report no change.");

    let other = list_of([2, 4]);
    assert!(list.add_all(&other).unwrap());
    assert_eq!(contents(&list), [3, 2, 2, 4]);
    assert!(list.contains_all(&other));
    assert!(list.remove_all(&other));
    assert_eq!(contents(&list), [3]);

    list.offer_all([5, 6, 7]).unwrap();
    assert!(list.retain_all(&list_of([6, 3])));
    assert_eq!(list.to_vec(), [3, 6]);
    list.verify_double_links();

    Collection::clear(&mut list);
    assert!(list.is_empty());
}

#[test]
fn test_custom_equality() {
    let mut list = LinkedList::with_equality(|a: &String, b: &String| a.eq_ignore_ascii_case(b));
    list.add_last(String::from("Hello")).unwrap();
    list.add_last(String::from("World")).unwrap();

    assert!(list.contains(&String::from("HELLO")), "The supplied equality should be used.");
    assert!(list.remove(&String::from("world")));
    assert_eq!(contents(&list), ["Hello"]);

    let sub_list = list.sub_list(0, 1).unwrap();
    assert!(
        sub_list.contains(&String::from("hello")),
        "A sub-list should share the equality of its parent."
    );
}

#[test]
fn test_iterators() {
    let list = list_of([1, 2, 3, 4]);

    let mut iter = list.iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.clone().collect::<Vec<_>>(), [&2, &3]);
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next_back(), Some(&3));
    assert_eq!(iter.next(), None, "Meeting in the middle should end iteration.");
    assert_eq!(iter.next_back(), None);

    assert_eq!(list.clone().into_iter().rev().collect::<Vec<_>>(), [4, 3, 2, 1]);
    assert_eq!((&list).into_iter().count(), 4);
}

#[test]
fn test_equality_and_formatting() {
    let list = list_of([1, 2, 3]);

    assert_eq!(list, list_of([1, 2, 3]));
    assert_ne!(list, list_of([1, 2]));
    assert_eq!(list.clone(), list, "A clone should be equal to its original.");

    assert_eq!(list.to_string(), "[1, 2, 3]");
    assert_eq!(LinkedList::<i32>::new().to_string(), "[]");
    assert_eq!(
        format!("{:?}", list),
        "LinkedList { contents: [1, 2, 3], len: 3, max_len: None }"
    );
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let list: LinkedList<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(list);
    assert_eq!(counter.take(), 10, "10 elements should have been dropped.");

    let mut list: LinkedList<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    drop(list.remove_first());
    drop(list.remove_at(4));
    assert_eq!(counter.take(), 2, "Each removed element should be dropped once.");

    list.clear();
    assert_eq!(counter.take(), 8, "Clearing should drop every remaining element.");

    list.add_last(counter.clone()).unwrap();
    list.add_last(counter.clone()).unwrap();
    assert!(list.remove(&counter), "CountedDrop compares by its shared counter.");
    drop(list);
    assert_eq!(counter.take(), 2, "Each element should be dropped exactly once.");
}

#[derive(Debug, Clone)]
enum Op {
    AddFirst(i32),
    AddLast(i32),
    PollFirst,
    PollLast,
    Insert(usize, i32),
    RemoveAt(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::AddFirst),
        any::<i32>().prop_map(Op::AddLast),
        Just(Op::PollFirst),
        Just(Op::PollLast),
        (0_usize..40, any::<i32>()).prop_map(|(index, value)| Op::Insert(index, value)),
        (0_usize..40).prop_map(Op::RemoveAt),
    ]
}

proptest! {
    #[test]
    fn prop_matches_deque_model(ops in prop::collection::vec(op(), 0..200)) {
        let mut list = LinkedList::new();
        let mut model = VecDeque::new();

        for op in ops {
            match op {
                Op::AddFirst(value) => {
                    list.add_first(value).unwrap();
                    model.push_front(value);
                },
                Op::AddLast(value) => {
                    list.add_last(value).unwrap();
                    model.push_back(value);
                },
                Op::PollFirst => {
                    prop_assert_eq!(list.poll_first(), model.pop_front());
                },
                Op::PollLast => {
                    prop_assert_eq!(list.poll_last(), model.pop_back());
                },
                Op::Insert(index, value) => {
                    let result = list.try_insert(index, value);
                    if index <= model.len() {
                        prop_assert!(result.is_ok());
                        model.insert(index, value);
                    } else {
                        prop_assert!(result.is_err());
                    }
                },
                Op::RemoveAt(index) => {
                    prop_assert_eq!(list.try_remove_at(index).ok(), model.remove(index));
                },
            }

            list.verify_double_links();
            prop_assert_eq!(list.len(), model.len());
        }

        prop_assert!(list.iter().eq(model.iter()));
        prop_assert!(list.iter().rev().eq(model.iter().rev()));
    }

    #[test]
    fn prop_sort_is_stable(keys in prop::collection::vec(0_u8..8, 0..100)) {
        let mut list: LinkedList<(u8, usize)> = keys.iter().copied().zip(0..).collect();
        let mut expected: Vec<_> = list.iter().copied().collect();
        expected.sort_by_key(|(key, _)| *key);

        list.sort_by(|a, b| a.0.cmp(&b.0));

        list.verify_double_links();
        prop_assert_eq!(contents(&list), expected);
    }

    #[test]
    fn prop_sub_list_round_trip(
        values in prop::collection::vec(any::<i32>(), 0..50),
        from in 0_usize..60,
        to in 0_usize..60
    ) {
        let list: LinkedList<i32> = values.iter().copied().collect();

        match list.sub_list(from, to) {
            Ok(sub_list) => {
                prop_assert!(from <= to && to <= values.len());
                prop_assert_eq!(contents(&sub_list), &values[from..to]);
            },
            Err(error) => {
                prop_assert!(from > to || to > values.len());
                prop_assert_eq!(error, IllegalRange { from, to, len: values.len() });
            },
        }
    }

    #[test]
    fn prop_polls_past_empty(
        values in prop::collection::vec(any::<i32>(), 0..20),
        extra in 1_usize..5
    ) {
        let mut list: LinkedList<i32> = values.iter().copied().collect();

        for _ in 0..values.len() {
            prop_assert!(list.poll().is_some());
        }
        for _ in 0..extra {
            prop_assert_eq!(list.poll(), None);
            prop_assert_eq!(list.poll_first(), None);
            prop_assert_eq!(list.poll_last(), None);
        }
        prop_assert!(list.is_empty());
    }
}
