//! Sorted doubly-linked list.
//!
//! ## Architecture
//!
//! - **Slab**: arena owning every node; links are slab keys
//! - **NodeChain**: head/tail/length bookkeeping over the slab
//! - **Change counter**: bumped on every structural mutation so detached
//!   cursors can notice changes made through another handle
//!
//! ## Ordering
//!
//! Values are kept ascending under `T: Ord`. A new value is linked after
//! the last value that compares less than or equal to it, so equal values
//! keep their insertion order.
//!
//! ## Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Insert | O(n) |
//! | Peek/poll either end | O(1) |
//! | Get / remove by index | O(n) |
//! | Length | O(1) |
//! | Sub-range, clone | O(n) |
//!
//! ## Example
//!
//! ```
//! use sorted_list::OrderedList;
//!
//! let mut list: OrderedList<i32> = OrderedList::new();
//! for value in [5, 3, 10, 1, 2] {
//!     list.insert(value).unwrap();
//! }
//!
//! assert_eq!(list.to_vec(), vec![1, 2, 3, 5, 10]);
//! assert_eq!(list.peek_front(), Some(&1));
//! assert_eq!(list.poll_back(), Some(10));
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use slab::Slab;
use ssz_rs::SimpleSerialize;

use crate::list::{Cursor, Iter, ListCursor, ListNode, NodeChain};
use crate::types::{ListError, ListResult, SequenceRoot};

/// Source of per-instance list ids
static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

/// Doubly-linked list kept in ascending order.
///
/// Not synchronized: one owner mutates it at a time. Cursors obtained from
/// [`cursor`](Self::cursor) and [`list_cursor`](Self::list_cursor) detect
/// mutations made behind their back and fail with
/// [`ListError::ConcurrentModification`].
pub struct OrderedList<T> {
    /// Node arena
    nodes: Slab<ListNode<T>>,

    /// Head, tail and length
    chain: NodeChain,

    /// Structural change counter
    mod_count: u64,

    /// Instance id, binds cursors to the list that created them
    id: u64,
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedList<T> {
    /// Create a new empty list
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            chain: NodeChain::new(),
            mod_count: 0,
            id: NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Create a list with room for `capacity` nodes before reallocating
    ///
    /// ```
    /// use sorted_list::OrderedList;
    ///
    /// let list: OrderedList<u64> = OrderedList::with_capacity(1_000);
    /// assert!(list.capacity() >= 1_000);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            chain: NodeChain::new(),
            mod_count: 0,
            id: NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Number of nodes the arena holds without reallocating
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Number of elements, O(1)
    #[inline]
    pub fn len(&self) -> usize {
        self.chain.len
    }

    /// Check if the list has no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Current value of the structural change counter
    #[inline]
    pub fn modification_count(&self) -> u64 {
        self.mod_count
    }

    /// Process-unique id of this list instance
    ///
    /// Clones and sub-ranges get ids of their own.
    #[inline]
    pub fn instance_id(&self) -> u64 {
        self.id
    }

    // ========================================================================
    // Queue Operations
    // ========================================================================

    /// Smallest value, or `None` when empty
    #[inline]
    pub fn peek_front(&self) -> Option<&T> {
        self.chain.head.map(|key| &self.nodes[key].value)
    }

    /// Largest value, or `None` when empty
    #[inline]
    pub fn peek_back(&self) -> Option<&T> {
        self.chain.tail.map(|key| &self.nodes[key].value)
    }

    /// Smallest value
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyContainer`] if the list is empty.
    pub fn require_front(&self) -> ListResult<&T> {
        self.peek_front().ok_or(ListError::EmptyContainer)
    }

    /// Largest value
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyContainer`] if the list is empty.
    pub fn require_back(&self) -> ListResult<&T> {
        self.peek_back().ok_or(ListError::EmptyContainer)
    }

    /// Remove and return the smallest value, or `None` when empty
    pub fn poll_front(&mut self) -> Option<T> {
        let key = self.chain.head?;
        Some(self.remove_key(key))
    }

    /// Remove and return the largest value, or `None` when empty
    pub fn poll_back(&mut self) -> Option<T> {
        let key = self.chain.tail?;
        Some(self.remove_key(key))
    }

    /// Remove and return the smallest value
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyContainer`] if the list is empty.
    pub fn remove_front(&mut self) -> ListResult<T> {
        self.poll_front().ok_or(ListError::EmptyContainer)
    }

    /// Remove and return the largest value
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyContainer`] if the list is empty.
    pub fn remove_back(&mut self) -> ListResult<T> {
        self.poll_back().ok_or(ListError::EmptyContainer)
    }

    // ========================================================================
    // Indexed Access
    // ========================================================================

    /// Value at `index`, walking from the head
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> ListResult<&T> {
        let key = self.checked_key(index)?;
        Ok(&self.nodes[key].value)
    }

    /// Remove and return the value at `index`
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] if `index >= len()`; the list is
    /// left untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use sorted_list::OrderedList;
    ///
    /// let mut list: OrderedList<i32> = [5, 3, 10, 1, 2].into_iter().collect();
    ///
    /// assert_eq!(list.remove_at(2), Ok(3));
    /// assert_eq!(list.to_vec(), vec![1, 2, 5, 10]);
    /// ```
    pub fn remove_at(&mut self, index: usize) -> ListResult<T> {
        let key = self.checked_key(index)?;
        Ok(self.remove_key(key))
    }

    /// Remove every element
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }
        self.nodes.clear();
        self.chain.reset();
        self.bump();
    }

    /// Borrowing iterator from smallest to largest
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.chain)
    }

    // ========================================================================
    // Cursors
    // ========================================================================

    /// Forward cursor positioned before the first element
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self, 0)
    }

    /// Bidirectional cursor positioned before the element at `index`
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfRange`] if `index > len()`.
    pub fn list_cursor(&self, index: usize) -> ListResult<ListCursor> {
        if index > self.len() {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(ListCursor::new(self, index))
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    /// Slab key at `index`, or the range error
    fn checked_key(&self, index: usize) -> ListResult<usize> {
        self.chain
            .key_at(index, &self.nodes)
            .ok_or(ListError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Unlink and free the node at `key`
    fn remove_key(&mut self, key: usize) -> T {
        self.chain.unlink(key, &mut self.nodes);
        let node = self.nodes.remove(key);
        self.bump();
        node.into_value()
    }

    /// Append a value known to be >= the current tail
    ///
    /// Used when copying from an already sorted source. Does not count as
    /// a structural change: only fresh lists are built this way.
    fn append_sorted(&mut self, value: T) {
        let key = self.nodes.insert(ListNode::new(value));
        self.chain.push_back(key, &mut self.nodes);
    }

    #[inline]
    fn bump(&mut self) {
        self.mod_count = self.mod_count.wrapping_add(1);
    }
}

impl<T: Ord> OrderedList<T> {
    // ========================================================================
    // Insertion
    // ========================================================================

    /// Insert a value at its sorted position
    ///
    /// Accepts either a value or an `Option`; `None` is the absent value.
    /// Equal values are placed after the ones already present.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidArgument`] if the value is absent; nothing is
    /// inserted.
    ///
    /// # Example
    ///
    /// ```
    /// use sorted_list::{ListError, OrderedList};
    ///
    /// let mut list: OrderedList<&str> = OrderedList::new();
    /// list.insert("Sorted").unwrap();
    /// list.insert("Linked").unwrap();
    ///
    /// assert!(matches!(list.insert(None), Err(ListError::InvalidArgument(_))));
    /// assert_eq!(list.to_vec(), vec!["Linked", "Sorted"]);
    /// ```
    pub fn insert(&mut self, value: impl Into<Option<T>>) -> ListResult<()> {
        self.insert_indexed(value.into()).map(|_| ())
    }

    /// Queue-style alias of [`insert`](Self::insert)
    ///
    /// The list is unbounded, so this never fails for lack of room; it
    /// still rejects an absent value.
    pub fn offer(&mut self, value: impl Into<Option<T>>) -> ListResult<()> {
        self.insert(value)
    }

    /// Insert every value from `values` in iteration order
    ///
    /// # Returns
    ///
    /// `Ok(false)` if `values` was empty, `Ok(true)` otherwise.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidArgument`] at the first absent value. Values
    /// inserted before it stay in the list.
    pub fn insert_all<I>(&mut self, values: I) -> ListResult<bool>
    where
        I: IntoIterator,
        I::Item: Into<Option<T>>,
    {
        let mut changed = false;
        for value in values {
            self.insert_indexed(value.into())?;
            changed = true;
        }
        Ok(changed)
    }

    /// Positional bulk insert
    ///
    /// Always fails: positions follow from the ordering, not from the caller.
    ///
    /// # Errors
    ///
    /// [`ListError::UnsupportedOperation`], unconditionally.
    pub fn insert_all_at<I>(&mut self, _index: usize, _values: I) -> ListResult<bool>
    where
        I: IntoIterator,
        I::Item: Into<Option<T>>,
    {
        Err(ListError::UnsupportedOperation(
            "positional insert into a sorted list",
        ))
    }

    /// Insert and report the index the value landed at
    pub(crate) fn insert_indexed(&mut self, value: Option<T>) -> ListResult<usize> {
        let value = value.ok_or_else(ListError::absent_value)?;
        Ok(self.link_sorted(value))
    }

    fn link_sorted(&mut self, value: T) -> usize {
        let position = match self.chain.head {
            None => None,
            Some(head) if value < self.nodes[head].value => None,
            Some(head) => Some(self.find_sorted_position(head, &value)),
        };

        let key = self.nodes.insert(ListNode::new(value));
        let index = match position {
            None => {
                self.chain.push_front(key, &mut self.nodes);
                0
            }
            Some((anchor, anchor_index)) => {
                self.chain.insert_after(anchor, key, &mut self.nodes);
                anchor_index + 1
            }
        };

        self.bump();
        index
    }

    /// Last node whose value is <= `value`, with its index
    fn find_sorted_position(&self, head: usize, value: &T) -> (usize, usize) {
        let mut current = head;
        let mut index = 0;
        while let Some(next) = self.nodes[current].next {
            if self.nodes[next].value > *value {
                break;
            }
            current = next;
            index += 1;
        }
        (current, index)
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Check if an equal value is present
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Index of the first equal value
    ///
    /// Stops at the first larger value.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        for (index, current) in self.iter().enumerate() {
            if current == value {
                return Some(index);
            }
            if current > value {
                break;
            }
        }
        None
    }

    /// Index of the last equal value
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        let mut found = None;
        for (index, current) in self.iter().enumerate() {
            if current > value {
                break;
            }
            if current == value {
                found = Some(index);
            }
        }
        found
    }

    /// Remove the first equal value
    ///
    /// # Returns
    ///
    /// The removed value, or `None` if no equal value was present.
    pub fn remove_value(&mut self, value: &T) -> Option<T> {
        let index = self.index_of(value)?;
        self.remove_at(index).ok()
    }
}

impl<T: Clone> OrderedList<T> {
    /// Copy a contiguous span into a new, independent list
    ///
    /// The copy starts at `from_index` and takes `to_index - from_index + 1`
    /// values, one more than the half-open range `[from_index, to_index)`
    /// would hold. Copying stops early at the tail. The source is not
    /// modified and shares no nodes with the result.
    ///
    /// # Errors
    ///
    /// - [`ListError::IndexOutOfRange`] if `to_index > len()`
    /// - [`ListError::InvalidArgument`] if `from_index > to_index`
    ///
    /// # Example
    ///
    /// ```
    /// use sorted_list::OrderedList;
    ///
    /// let list: OrderedList<i32> = [5, 3, 10, 1, 2].into_iter().collect();
    /// let sub = list.subrange(2, 4).unwrap();
    ///
    /// assert_eq!(sub.to_vec(), vec![3, 5, 10]);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 5, 10]);
    /// ```
    pub fn subrange(&self, from_index: usize, to_index: usize) -> ListResult<Self> {
        if to_index > self.len() {
            return Err(ListError::IndexOutOfRange {
                index: to_index,
                len: self.len(),
            });
        }
        if from_index > to_index {
            return Err(ListError::InvalidArgument(format!(
                "from_index({from_index}) > to_index({to_index})"
            )));
        }

        let mut sub = Self::with_capacity(to_index - from_index + 1);
        let mut current = self.chain.key_at(from_index, &self.nodes);
        for _ in from_index..=to_index {
            let Some(key) = current else { break };
            let node = &self.nodes[key];
            sub.append_sorted(node.value.clone());
            current = node.next;
        }
        Ok(sub)
    }

    /// Values in order, copied into a `Vec`
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: SimpleSerialize> OrderedList<T> {
    /// Digest of the ordered value sequence
    ///
    /// # Errors
    ///
    /// [`ListError::Encoding`] if a value fails to SSZ-encode.
    pub fn state_root(&self) -> ListResult<SequenceRoot> {
        SequenceRoot::compute(self.len(), self.iter())
    }
}

impl<T: Clone> Clone for OrderedList<T> {
    /// Fresh nodes, same values, change counter restarted
    fn clone(&self) -> Self {
        let mut clone = Self::with_capacity(self.len());
        for value in self.iter() {
            clone.append_sorted(value.clone());
        }
        clone
    }
}

impl<T: PartialEq> PartialEq for OrderedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for OrderedList<T> {}

impl<T: fmt::Debug> fmt::Debug for OrderedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: Ord> Extend<T> for OrderedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.link_sorted(value);
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
