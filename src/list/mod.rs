//! Sorted list module.
//!
//! ## Architecture
//!
//! - **Slab-based storage**: nodes live in an arena and link by key
//! - **Sorted insertion**: values are kept ascending, equal values in
//!   insertion order
//! - **Change counter**: detached cursors detect mutations made behind them
//!
//! ## Components
//!
//! - [`ListNode`]: value plus doubly-linked slab keys
//! - [`NodeChain`]: head/tail/length bookkeeping over the slab
//! - [`OrderedList`]: the sorted list and double-ended queue
//! - [`Cursor`] / [`ListCursor`]: forward and bidirectional cursors
//! - [`Iter`] / [`IntoIter`]: standard iterators
//!
//! ## Example
//!
//! ```
//! use sorted_list::list::OrderedList;
//!
//! let mut list: OrderedList<&str> = OrderedList::new();
//! for word in ["Sorted", "Linked", "List", "Test", "Items"] {
//!     list.insert(word).unwrap();
//! }
//!
//! assert_eq!(list.to_vec(), vec!["Items", "Linked", "List", "Sorted", "Test"]);
//! ```

pub mod node;
pub mod chain;
pub mod sorted;
pub mod cursor;
pub mod iter;

pub use node::ListNode;
pub use chain::NodeChain;
pub use sorted::OrderedList;
pub use cursor::{Cursor, ListCursor};
pub use iter::{IntoIter, Iter};
