//! Error taxonomy for list and cursor operations.
//!
//! Every fallible operation returns [`ListResult`]. Callers match on the
//! variant instead of inspecting messages.
//!
//! ## Failure Guarantees
//!
//! A failing call leaves the list exactly as it was before the call.
//! The one exception is [`OrderedList::insert_all`](crate::OrderedList::insert_all),
//! which stops at the first absent value and keeps the insertions made
//! before it.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type ListResult<T> = Result<T, ListError>;

/// Errors raised by [`OrderedList`](crate::OrderedList) and its cursors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// An absent value was offered, or sub-range bounds are out of order
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Index outside the valid range for the operation
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Offending index
        index: usize,
        /// Length of the list at the time of the call
        len: usize,
    },

    /// A `require_*` or `remove_*` operation on an empty list
    #[error("sorted list is empty")]
    EmptyContainer,

    /// The list changed since the cursor last synchronized with it
    #[error("concurrent modification: cursor expected change count {expected}, list is at {actual}")]
    ConcurrentModification {
        /// Change count captured by the cursor
        expected: u64,
        /// Live change count of the list
        actual: u64,
    },

    /// A cursor was handed a list other than the one that created it
    #[error("cursor belongs to list {expected}, was used on list {actual}")]
    ForeignList {
        /// Instance id of the cursor's list
        expected: u64,
        /// Instance id of the list passed in
        actual: u64,
    },

    /// Cursor removal without a pending returned element
    #[error("illegal state: {0}")]
    IllegalState(&'static str),

    /// Operation that has no meaning for an order-maintaining container
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// Cursor stepped past either end of the list
    #[error("no element at cursor position {index}")]
    NoSuchElement {
        /// Position the cursor tried to read
        index: usize,
    },

    /// An element could not be SSZ-encoded while computing a sequence root
    #[error("encoding failed: {0}")]
    Encoding(String),
}

impl ListError {
    /// Shorthand for the absent-value rejection
    pub(crate) fn absent_value() -> Self {
        ListError::InvalidArgument("an element cannot be absent".to_string())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ListError::IndexOutOfRange { index: 5, len: 5 };
        assert_eq!(err.to_string(), "index 5 out of range for length 5");

        assert_eq!(ListError::EmptyContainer.to_string(), "sorted list is empty");

        let err = ListError::ConcurrentModification { expected: 2, actual: 3 };
        assert!(err.to_string().contains("expected change count 2"));

        let err = ListError::ForeignList { expected: 1, actual: 4 };
        assert_eq!(err.to_string(), "cursor belongs to list 1, was used on list 4");
    }

    #[test]
    fn test_absent_value_is_invalid_argument() {
        assert!(matches!(ListError::absent_value(), ListError::InvalidArgument(_)));
    }
}
