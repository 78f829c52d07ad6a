//! Arena-backed doubly linked list used to track recency order.
//!
//! Nodes live in a `Vec` and link to each other through [`Index`] handles
//! instead of raw pointers, so the key table can hold a handle to a node
//! while the list owns it. Unlinking and relinking a node is O(1).
//!
//! Freed slots are chained through their `next` link and reused by the next
//! [`List::push_front`]. An [`Index`] is only meaningful while the node it
//! names is linked; once removed, the slot may be handed out again.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

/// Stable handle to a node stored in a [`List`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Index(usize);

struct Node<T> {
    /// `None` for slots sitting on the free list.
    value: Option<T>,
    /// Toward the head (more recently touched).
    prev: Option<Index>,
    /// Toward the tail (less recently touched). Doubles as the free-list link.
    next: Option<Index>,
}

/// A doubly linked list whose nodes are addressed by [`Index`].
///
/// The head is the most recently touched element and the tail the least
/// recently touched one.
pub(crate) struct List<T> {
    nodes: Vec<Node<T>>,
    head: Option<Index>,
    tail: Option<Index>,
    free: Option<Index>,
    len: usize,
}

impl<T> List<T> {
    /// Creates an empty list with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        List {
            nodes: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            free: None,
            len: 0,
        }
    }

    /// Returns the number of linked nodes.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no node is linked.
    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the value at the head of the list.
    #[cfg(test)]
    pub(crate) fn front(&self) -> Option<&T> {
        self.head.and_then(|index| self.get(index))
    }

    /// Returns the value at the tail of the list, the next eviction candidate.
    pub(crate) fn back(&self) -> Option<&T> {
        self.tail.and_then(|index| self.get(index))
    }

    /// Returns the value stored at `index`, if the node is linked.
    pub(crate) fn get(&self, index: Index) -> Option<&T> {
        self.nodes.get(index.0).and_then(|node| node.value.as_ref())
    }

    /// Returns a mutable reference to the value stored at `index`.
    pub(crate) fn get_mut(&mut self, index: Index) -> Option<&mut T> {
        self.nodes
            .get_mut(index.0)
            .and_then(|node| node.value.as_mut())
    }

    /// Links `value` at the head of the list and returns its handle.
    pub(crate) fn push_front(&mut self, value: T) -> Index {
        let node = Node {
            value: Some(value),
            prev: None,
            next: None,
        };

        let index = match self.free {
            Some(index) => {
                self.free = self.nodes[index.0].next;
                self.nodes[index.0] = node;
                index
            }
            None => {
                self.nodes.push(node);
                Index(self.nodes.len() - 1)
            }
        };

        self.attach(index);
        self.len += 1;
        index
    }

    /// Moves the node at `index` to the head of the list.
    pub(crate) fn move_to_front(&mut self, index: Index) {
        if self.head == Some(index) || self.get(index).is_none() {
            return;
        }
        self.detach(index);
        self.attach(index);
    }

    /// Unlinks the node at `index` and returns its value.
    ///
    /// The slot is pushed onto the free list; `index` must not be used again.
    pub(crate) fn remove(&mut self, index: Index) -> Option<T> {
        self.get(index)?;
        self.detach(index);
        self.len -= 1;

        let node = &mut self.nodes[index.0];
        let value = node.value.take();
        node.prev = None;
        node.next = self.free;
        self.free = Some(index);
        value
    }

    /// Removes the tail node and returns its value.
    pub(crate) fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        self.remove(tail)
    }

    /// Drops every node and resets the list to its empty state.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.free = None;
        self.len = 0;
    }

    /// Iterates over values from head (most recent) to tail (least recent).
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Splices a detached node in front of the current head.
    fn attach(&mut self, index: Index) {
        let old_head = self.head;
        {
            let node = &mut self.nodes[index.0];
            node.prev = None;
            node.next = old_head;
        }
        match old_head {
            Some(head) => self.nodes[head.0].prev = Some(index),
            None => self.tail = Some(index),
        }
        self.head = Some(index);
    }

    /// Unlinks a node from its neighbours without freeing its slot.
    fn detach(&mut self, index: Index) {
        let (prev, next) = {
            let node = &self.nodes[index.0];
            (node.prev, node.next)
        };
        match prev {
            Some(prev) => self.nodes[prev.0].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.nodes[next.0].prev = prev,
            None => self.tail = prev,
        }
        let node = &mut self.nodes[index.0];
        node.prev = None;
        node.next = None;
    }
}

impl<T> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("len", &self.len)
            .field("head", &self.head)
            .field("tail", &self.tail)
            .finish()
    }
}

/// Head-to-tail iterator over a [`List`].
pub(crate) struct Iter<'a, T> {
    list: &'a List<T>,
    cursor: Option<Index>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor?;
        let node = &self.list.nodes[index.0];
        self.cursor = node.next;
        self.remaining -= 1;
        node.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
