//! # Sorted List
//!
//! A doubly-linked list that keeps its elements in ascending order.
//!
//! ## Architecture
//!
//! - **List**: slab-backed node chain with sorted insertion, queue
//!   operations at both ends, indexed access and sub-range extraction
//! - **Cursors**: detached positions that detect modification made
//!   through another handle
//! - **Types**: error taxonomy and the sequence root digest
//!
//! ## Design Principles
//!
//! 1. **Stable ordering**: equal values keep their insertion order
//! 2. **Arena links**: nodes link by slab key, never by reference
//! 3. **No partial failure**: a failed call leaves the list unchanged
//! 4. **Single owner**: no internal locking; synchronize externally
//!
//! ## Example
//!
//! ```
//! use sorted_list::OrderedList;
//!
//! let mut list: OrderedList<i32> = [5, 3, 10, 1, 2].into_iter().collect();
//!
//! assert_eq!(list.to_vec(), vec![1, 2, 3, 5, 10]);
//! assert_eq!(list.subrange(2, 4).unwrap().to_vec(), vec![3, 5, 10]);
//! assert_eq!(list.remove_at(2), Ok(3));
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Error taxonomy and sequence root
pub mod types;

/// Sorted list, cursors and iterators
pub mod list;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{ListError, ListResult, SequenceRoot};
pub use list::{Cursor, IntoIter, Iter, ListCursor, OrderedList};
