//! Frontier structures for the search engines: a LIFO [`Stack`] for
//! depth-first search and a duplicate-tolerant min-[`PriorityQueue`] for
//! best-first search.

use crate::search::HeuristicValue;
use std::cmp::Reverse;

/// LIFO frontier. `pop` returns `None` when empty; the engines guard their
/// loops on that rather than on a separate emptiness check.
#[derive(Debug)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: vec![] }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Smallest-priority ties are broken by insertion order, which keeps runs
/// deterministic.
type Rank = (Reverse<HeuristicValue>, Reverse<usize>);

/// Min-priority frontier over the `priority-queue` crate. That queue is
/// keyed by item, so inserting the same search node twice (a state reached
/// along two paths) would collapse the copies; instead we key the heap by an
/// arena slot and keep the nodes in the arena, which makes insertion
/// duplicate-tolerant while staying O(log n).
#[derive(Debug)]
pub struct PriorityQueue<T> {
    heap: priority_queue::PriorityQueue<usize, Rank>,
    items: Vec<Option<T>>,
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: priority_queue::PriorityQueue::new(),
            items: vec![],
        }
    }

    pub fn push(&mut self, item: T, priority: HeuristicValue) {
        let slot = self.items.len();
        self.items.push(Some(item));
        self.heap.push(slot, (Reverse(priority), Reverse(slot)));
    }

    /// Remove and return the item with the smallest priority.
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|(slot, _)| {
            self.items[slot]
                .take()
                .expect("frontier slot popped twice")
        })
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
