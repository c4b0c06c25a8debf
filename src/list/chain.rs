//! Link management for a chain of slab-resident nodes.
//!
//! ## Design
//!
//! A `NodeChain` holds only the chain metadata (head, tail, length). The
//! nodes themselves live in a `Slab<ListNode<T>>` passed to every call,
//! so the chain never borrows its storage between operations.
//!
//! ```text
//! head <-> node <-> node <-> tail
//! ```
//!
//! The chain does not know about ordering. Callers pick the position
//! (front, back, or after an anchor) and the chain keeps the links and
//! endpoints consistent.
//!
//! ## Panics
//!
//! Every method indexes the slab with keys it was given or already holds.
//! A key that is not in the slab is a broken invariant and panics.

use slab::Slab;

use crate::list::ListNode;

/// Head/tail/length bookkeeping for a doubly-linked chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeChain {
    /// First node (slab key)
    pub head: Option<usize>,

    /// Last node (slab key)
    pub tail: Option<usize>,

    /// Number of linked nodes
    pub len: usize,
}

impl NodeChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Check if the chain is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Link `key` after the current tail
    ///
    /// # Arguments
    ///
    /// * `key` - Slab key of an unlinked node
    /// * `slab` - The slab holding every node of the chain
    ///
    /// # Panics
    ///
    /// Panics if `key` or the current tail is not in the slab
    pub fn push_back<T>(&mut self, key: usize, slab: &mut Slab<ListNode<T>>) {
        let node = &mut slab[key];
        node.prev = self.tail;
        node.next = None;

        if let Some(tail_key) = self.tail {
            slab[tail_key].next = Some(key);
        } else {
            // Empty chain - this is also the head
            self.head = Some(key);
        }

        self.tail = Some(key);
        self.len += 1;
    }

    /// Link `key` before the current head
    ///
    /// # Arguments
    ///
    /// * `key` - Slab key of an unlinked node
    /// * `slab` - The slab holding every node of the chain
    ///
    /// # Panics
    ///
    /// Panics if `key` or the current head is not in the slab
    pub fn push_front<T>(&mut self, key: usize, slab: &mut Slab<ListNode<T>>) {
        let node = &mut slab[key];
        node.next = self.head;
        node.prev = None;

        if let Some(head_key) = self.head {
            slab[head_key].prev = Some(key);
        } else {
            // Empty chain - this is also the tail
            self.tail = Some(key);
        }

        self.head = Some(key);
        self.len += 1;
    }

    /// Link `key` immediately after `anchor`
    ///
    /// # Arguments
    ///
    /// * `anchor` - Slab key of a node already linked into this chain
    /// * `key` - Slab key of an unlinked node
    /// * `slab` - The slab holding every node of the chain
    ///
    /// # Panics
    ///
    /// Panics if `anchor`, `key` or the anchor's successor is not in the slab
    pub fn insert_after<T>(&mut self, anchor: usize, key: usize, slab: &mut Slab<ListNode<T>>) {
        let next_key = slab[anchor].next;

        let node = &mut slab[key];
        node.prev = Some(anchor);
        node.next = next_key;

        match next_key {
            Some(next) => slab[next].prev = Some(key),
            // Anchor was the tail
            None => self.tail = Some(key),
        }

        slab[anchor].next = Some(key);
        self.len += 1;
    }

    /// Unlink `key`, re-linking its neighbors
    ///
    /// The node stays in the slab with cleared links; the caller decides
    /// whether to free it.
    ///
    /// # Arguments
    ///
    /// * `key` - Slab key of a node linked into this chain
    /// * `slab` - The slab holding every node of the chain
    ///
    /// # Panics
    ///
    /// Panics if `key` or either of its neighbors is not in the slab
    pub fn unlink<T>(&mut self, key: usize, slab: &mut Slab<ListNode<T>>) {
        let node = &slab[key];
        let prev_key = node.prev;
        let next_key = node.next;

        if let Some(prev) = prev_key {
            slab[prev].next = next_key;
        } else {
            // This was the head
            self.head = next_key;
        }

        if let Some(next) = next_key {
            slab[next].prev = prev_key;
        } else {
            // This was the tail
            self.tail = prev_key;
        }

        let node = &mut slab[key];
        node.prev = None;
        node.next = None;

        self.len -= 1;
    }

    /// Slab key of the node at `index`, walking forward from the head
    ///
    /// Returns `None` when `index >= len`.
    pub fn key_at<T>(&self, index: usize, slab: &Slab<ListNode<T>>) -> Option<usize> {
        if index >= self.len {
            return None;
        }

        let mut current = self.head?;
        for _ in 0..index {
            current = slab[current].next?;
        }
        Some(current)
    }

    /// Forget every link without touching the slab
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
