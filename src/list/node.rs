//! List node for slab-based storage.
//!
//! ## Design
//!
//! `ListNode` wraps one element value with doubly-linked pointers. The
//! pointers are slab keys, not references, so the forward/backward graph
//! never forms an ownership cycle: the slab owns every node, and both
//! links are plain indices into it.
//!
//! ## Slab Integration
//!
//! Per slab docs (https://docs.rs/slab/0.4.11):
//! - Keys are `usize` values returned by `slab.insert()`
//! - Keys may be reused after `slab.remove()`
//! - O(1) insert, remove, and lookup
//!
//! ## Links
//!
//! - `next`: the following node, `None` at the tail
//! - `prev`: the preceding node, `None` at the head

/// Node stored in the list's slab.
///
/// ```text
/// ListNode {
///     value: T
///     next: Option<usize>
///     prev: Option<usize>
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ListNode<T> {
    /// The element value
    pub value: T,

    /// Next node toward the tail (slab key)
    pub next: Option<usize>,

    /// Previous node toward the head (slab key)
    pub prev: Option<usize>,
}

impl<T> ListNode<T> {
    /// Create a new, unlinked node
    ///
    /// # Example
    ///
    /// ```
    /// use sorted_list::list::ListNode;
    ///
    /// let node = ListNode::new(7u32);
    ///
    /// assert!(node.next.is_none());
    /// assert!(node.prev.is_none());
    /// ```
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            value,
            next: None,
            prev: None,
        }
    }

    /// Check if this node has no neighbors
    ///
    /// True for a detached node and for the only node of a one-element list.
    #[inline]
    pub fn is_unlinked(&self) -> bool {
        self.next.is_none() && self.prev.is_none()
    }

    /// Consume the node, returning its value
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
