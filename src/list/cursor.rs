//! Index-based cursors with modification detection.
//!
//! ## Design
//!
//! A cursor is a detached position: it does not borrow the list. Each
//! cursor call is handed the list it walks, the same way the node chain
//! is handed its slab. This lets the list be mutated directly while a
//! cursor is alive, which is exactly the situation the cursor must catch.
//!
//! ## Modification Detection
//!
//! The cursor captures the list's change counter when created and after
//! each of its own mutations. `next`, `previous`, `remove` and `insert`
//! compare the captured value with the live one first and fail with
//! [`ListError::ConcurrentModification`] on mismatch, before touching
//! anything.
//!
//! A cursor is also bound to the list that created it. Handing it any
//! other list, a clone included, fails with [`ListError::ForeignList`].
//!
//! ## Example
//!
//! ```
//! use sorted_list::{ListError, OrderedList};
//!
//! let mut list: OrderedList<i32> = [3, 1, 2].into_iter().collect();
//! let mut cursor = list.cursor();
//!
//! assert_eq!(cursor.next(&list), Ok(&1));
//! assert_eq!(cursor.remove(&mut list), Ok(1));
//!
//! // Mutating the list directly invalidates the cursor
//! list.insert(0).unwrap();
//! assert!(matches!(
//!     cursor.next(&list),
//!     Err(ListError::ConcurrentModification { .. })
//! ));
//! ```

use crate::list::OrderedList;
use crate::types::{ListError, ListResult};

/// Forward cursor over an [`OrderedList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    /// Index of the element returned by the next call to `next`
    position: usize,

    /// Index of the element most recently returned, cleared on removal
    last_returned: Option<usize>,

    /// Change count the cursor believes the list has
    expected_mod_count: u64,

    /// Instance id of the list the cursor was created on
    list_id: u64,
}

impl Cursor {
    pub(crate) fn new<T>(list: &OrderedList<T>, position: usize) -> Self {
        Self {
            position,
            last_returned: None,
            expected_mod_count: list.modification_count(),
            list_id: list.instance_id(),
        }
    }

    /// Check if `next` has an element to return
    #[inline]
    pub fn has_next<T>(&self, list: &OrderedList<T>) -> bool {
        self.position != list.len()
    }

    /// Index of the element the next call to `next` returns
    #[inline]
    pub fn next_index(&self) -> usize {
        self.position
    }

    /// Return the element at the cursor and advance
    ///
    /// # Errors
    ///
    /// - [`ListError::ForeignList`] if `list` is not the cursor's list
    /// - [`ListError::ConcurrentModification`] if the list changed behind the cursor
    /// - [`ListError::NoSuchElement`] if the cursor is at the end
    pub fn next<'a, T>(&mut self, list: &'a OrderedList<T>) -> ListResult<&'a T> {
        self.check_for_comodification(list)?;

        let index = self.position;
        let value = list
            .get(index)
            .map_err(|_| ListError::NoSuchElement { index })?;
        self.last_returned = Some(index);
        self.position = index + 1;
        Ok(value)
    }

    /// Remove the element most recently returned by `next` or `previous`
    ///
    /// # Errors
    ///
    /// - [`ListError::IllegalState`] if no element was returned since the last removal
    /// - [`ListError::ForeignList`] if `list` is not the cursor's list
    /// - [`ListError::ConcurrentModification`] if the list changed behind the cursor
    pub fn remove<T>(&mut self, list: &mut OrderedList<T>) -> ListResult<T> {
        let last = self.last_returned.ok_or(ListError::IllegalState(
            "no element returned since the last removal",
        ))?;
        self.check_for_comodification(list)?;

        let value = match list.remove_at(last) {
            Ok(value) => value,
            Err(_) => return Err(self.modification_error(list)),
        };

        if last < self.position {
            self.position -= 1;
        }
        self.last_returned = None;
        self.expected_mod_count = list.modification_count();
        Ok(value)
    }

    /// Insert through the cursor
    ///
    /// The value goes to its sorted position; the cursor's own position
    /// is left alone. An absent value is reported as
    /// [`ListError::ConcurrentModification`], not as `InvalidArgument`.
    ///
    /// # Errors
    ///
    /// - [`ListError::ForeignList`] if `list` is not the cursor's list
    /// - [`ListError::ConcurrentModification`] if the list changed behind the
    ///   cursor or the value is absent
    pub fn insert<T: Ord>(
        &mut self,
        list: &mut OrderedList<T>,
        value: impl Into<Option<T>>,
    ) -> ListResult<()> {
        self.check_for_comodification(list)?;

        let index = match list.insert_indexed(value.into()) {
            Ok(index) => index,
            Err(_) => return Err(self.modification_error(list)),
        };

        // Keep `last_returned` on the same element
        if let Some(last) = self.last_returned {
            if index <= last {
                self.last_returned = Some(last + 1);
            }
        }
        self.expected_mod_count = list.modification_count();
        Ok(())
    }

    fn check_for_comodification<T>(&self, list: &OrderedList<T>) -> ListResult<()> {
        if list.instance_id() != self.list_id {
            return Err(ListError::ForeignList {
                expected: self.list_id,
                actual: list.instance_id(),
            });
        }
        if list.modification_count() != self.expected_mod_count {
            return Err(self.modification_error(list));
        }
        Ok(())
    }

    fn modification_error<T>(&self, list: &OrderedList<T>) -> ListError {
        ListError::ConcurrentModification {
            expected: self.expected_mod_count,
            actual: list.modification_count(),
        }
    }
}

/// Bidirectional cursor over an [`OrderedList`].
///
/// Sits between two elements: `previous` returns the one before the
/// cursor, `next` the one after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCursor {
    inner: Cursor,
}

impl ListCursor {
    pub(crate) fn new<T>(list: &OrderedList<T>, position: usize) -> Self {
        Self {
            inner: Cursor::new(list, position),
        }
    }

    /// Check if `next` has an element to return
    #[inline]
    pub fn has_next<T>(&self, list: &OrderedList<T>) -> bool {
        self.inner.has_next(list)
    }

    /// Check if `previous` has an element to return
    #[inline]
    pub fn has_previous(&self) -> bool {
        self.inner.position != 0
    }

    /// Index of the element the next call to `next` returns
    #[inline]
    pub fn next_index(&self) -> usize {
        self.inner.next_index()
    }

    /// Index of the element the next call to `previous` returns,
    /// `None` at the start
    #[inline]
    pub fn previous_index(&self) -> Option<usize> {
        self.inner.position.checked_sub(1)
    }

    /// Return the element after the cursor and advance
    ///
    /// See [`Cursor::next`].
    pub fn next<'a, T>(&mut self, list: &'a OrderedList<T>) -> ListResult<&'a T> {
        self.inner.next(list)
    }

    /// Return the element before the cursor and step back
    ///
    /// # Errors
    ///
    /// - [`ListError::ForeignList`] if `list` is not the cursor's list
    /// - [`ListError::ConcurrentModification`] if the list changed behind the cursor
    /// - [`ListError::NoSuchElement`] if the cursor is at the start
    pub fn previous<'a, T>(&mut self, list: &'a OrderedList<T>) -> ListResult<&'a T> {
        self.inner.check_for_comodification(list)?;

        let index = self
            .previous_index()
            .ok_or(ListError::NoSuchElement { index: 0 })?;
        let value = list
            .get(index)
            .map_err(|_| ListError::NoSuchElement { index })?;
        self.inner.last_returned = Some(index);
        self.inner.position = index;
        Ok(value)
    }

    /// See [`Cursor::remove`]
    pub fn remove<T>(&mut self, list: &mut OrderedList<T>) -> ListResult<T> {
        self.inner.remove(list)
    }

    /// See [`Cursor::insert`]
    pub fn insert<T: Ord>(
        &mut self,
        list: &mut OrderedList<T>,
        value: impl Into<Option<T>>,
    ) -> ListResult<()> {
        self.inner.insert(list, value)
    }

    /// Same as [`insert`](Self::insert)
    ///
    /// A sorted list cannot overwrite an element in place, so the value
    /// is inserted at its sorted position instead.
    pub fn set<T: Ord>(
        &mut self,
        list: &mut OrderedList<T>,
        value: impl Into<Option<T>>,
    ) -> ListResult<()> {
        self.insert(list, value)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn create_list() -> OrderedList<i32> {
        [5, 3, 10, 1, 2].into_iter().collect()
    }

    #[test]
    fn test_cursor_walks_in_order() {
        let list = create_list();
        let mut cursor = list.cursor();
        let mut seen = Vec::new();

        while cursor.has_next(&list) {
            seen.push(*cursor.next(&list).unwrap());
        }

        assert_eq!(seen, vec![1, 2, 3, 5, 10]);
        assert_eq!(cursor.next_index(), 5);
        assert_eq!(cursor.next(&list), Err(ListError::NoSuchElement { index: 5 }));
    }

    #[test]
    fn test_cursor_on_empty_list() {
        let list: OrderedList<i32> = OrderedList::new();
        let mut cursor = list.cursor();

        assert!(!cursor.has_next(&list));
        assert_eq!(cursor.next(&list), Err(ListError::NoSuchElement { index: 0 }));
    }

    #[test]
    fn test_cursor_detects_direct_insert() {
        let mut list = create_list();
        let mut cursor = list.cursor();
        cursor.next(&list).unwrap();

        list.insert(4).unwrap();

        assert!(matches!(
            cursor.next(&list),
            Err(ListError::ConcurrentModification { .. })
        ));
    }

    #[test]
    fn test_cursor_detects_direct_remove() {
        let mut list = create_list();
        let mut cursor = list.cursor();
        cursor.next(&list).unwrap();

        list.poll_back();

        assert_eq!(
            cursor.remove(&mut list),
            Err(ListError::ConcurrentModification { expected: 5, actual: 6 })
        );
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_cursor_rejects_foreign_list() {
        let list_a: OrderedList<i32> = [1, 2, 3].into_iter().collect();
        let mut list_b: OrderedList<i32> = [7, 8, 9].into_iter().collect();
        let mut cursor = list_a.cursor();
        assert_eq!(cursor.next(&list_a), Ok(&1));

        // Same change count, different list
        assert_eq!(list_a.modification_count(), list_b.modification_count());
        assert!(matches!(
            cursor.remove(&mut list_b),
            Err(ListError::ForeignList { .. })
        ));
        assert!(matches!(
            cursor.next(&list_b),
            Err(ListError::ForeignList { .. })
        ));
        assert!(matches!(
            cursor.insert(&mut list_b, 4),
            Err(ListError::ForeignList { .. })
        ));
        assert_eq!(list_b.to_vec(), vec![7, 8, 9]);

        // Still usable on its own list
        assert_eq!(cursor.next(&list_a), Ok(&2));
    }

    #[test]
    fn test_cursor_rejects_clone_of_its_list() {
        let list = create_list();
        let mut clone = list.clone();
        let mut cursor = clone.cursor();
        cursor.next(&clone).unwrap();

        let mut other = list.subrange(0, 4).unwrap();
        assert_eq!(other.modification_count(), clone.modification_count());
        assert!(matches!(
            cursor.remove(&mut other),
            Err(ListError::ForeignList { .. })
        ));
        assert_eq!(cursor.remove(&mut clone), Ok(1));
    }

    #[test]
    fn test_cursor_detects_removal_through_other_cursor() {
        let mut list = create_list();
        let mut first = list.cursor();
        let mut second = list.cursor();

        assert_eq!(first.next(&list), Ok(&1));
        assert_eq!(second.next(&list), Ok(&1));
        assert_eq!(second.remove(&mut list), Ok(1));

        assert!(matches!(
            first.next(&list),
            Err(ListError::ConcurrentModification { .. })
        ));
        assert!(matches!(
            first.remove(&mut list),
            Err(ListError::ConcurrentModification { .. })
        ));
        assert_eq!(list.to_vec(), vec![2, 3, 5, 10]);

        // The cursor that made the change stays in sync
        assert_eq!(second.next(&list), Ok(&2));
    }

    #[test]
    fn test_list_cursor_detects_insert_through_other_cursor() {
        let mut list = create_list();
        let mut reader = list.list_cursor(2).unwrap();
        let mut writer = list.list_cursor(0).unwrap();

        writer.insert(&mut list, 4).unwrap();

        assert!(matches!(
            reader.previous(&list),
            Err(ListError::ConcurrentModification { .. })
        ));
    }

    #[test]
    fn test_cursor_remove_requires_returned_element() {
        let mut list = create_list();
        let mut cursor = list.cursor();

        assert!(matches!(
            cursor.remove(&mut list),
            Err(ListError::IllegalState(_))
        ));

        cursor.next(&list).unwrap();
        assert_eq!(cursor.remove(&mut list), Ok(1));

        // Second removal without another next
        assert!(matches!(
            cursor.remove(&mut list),
            Err(ListError::IllegalState(_))
        ));
    }

    #[test]
    fn test_cursor_remove_while_iterating() {
        let mut list = create_list();
        let mut cursor = list.cursor();

        // Drop every even value
        while cursor.has_next(&list) {
            let value = *cursor.next(&list).unwrap();
            if value % 2 == 0 {
                cursor.remove(&mut list).unwrap();
            }
        }

        assert_eq!(list.to_vec(), vec![1, 3, 5]);
    }

    #[test]
    fn test_cursor_insert_resyncs() {
        let mut list = create_list();
        let mut cursor = list.cursor();
        assert_eq!(cursor.next(&list), Ok(&1));

        cursor.insert(&mut list, 4).unwrap();

        assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5, 10]);
        assert_eq!(cursor.next(&list), Ok(&2));
    }

    #[test]
    fn test_cursor_insert_before_last_returned() {
        let mut list = create_list();
        let mut cursor = list.cursor();
        cursor.next(&list).unwrap();
        assert_eq!(cursor.next(&list), Ok(&2));

        // Lands at index 0, ahead of the returned element
        cursor.insert(&mut list, 0).unwrap();

        assert_eq!(cursor.remove(&mut list), Ok(2));
        assert_eq!(list.to_vec(), vec![0, 1, 3, 5, 10]);
    }

    #[test]
    fn test_cursor_insert_absent_is_concurrent_modification() {
        let mut list = create_list();
        let mut cursor = list.cursor();

        let result = cursor.insert(&mut list, None);

        assert!(matches!(
            result,
            Err(ListError::ConcurrentModification { .. })
        ));
        assert_eq!(list.len(), 5);

        // The failed insert changed nothing, so the cursor is still usable
        assert_eq!(cursor.next(&list), Ok(&1));
    }

    #[test]
    fn test_list_cursor_backward() {
        let list = create_list();
        let mut cursor = list.list_cursor(list.len()).unwrap();
        let mut seen = Vec::new();

        assert_eq!(cursor.previous_index(), Some(4));
        while cursor.has_previous() {
            seen.push(*cursor.previous(&list).unwrap());
        }

        assert_eq!(seen, vec![10, 5, 3, 2, 1]);
        assert_eq!(cursor.previous_index(), None);
        assert_eq!(
            cursor.previous(&list),
            Err(ListError::NoSuchElement { index: 0 })
        );
    }

    #[test]
    fn test_list_cursor_back_and_forth() {
        let list = create_list();
        let mut cursor = list.list_cursor(2).unwrap();

        assert_eq!(cursor.next_index(), 2);
        assert_eq!(cursor.next(&list), Ok(&3));
        assert_eq!(cursor.previous(&list), Ok(&3));
        assert_eq!(cursor.previous(&list), Ok(&2));
        assert_eq!(cursor.next_index(), 1);
    }

    #[test]
    fn test_list_cursor_remove_after_previous() {
        let mut list = create_list();
        let mut cursor = list.list_cursor(3).unwrap();

        assert_eq!(cursor.previous(&list), Ok(&3));
        assert_eq!(cursor.remove(&mut list), Ok(3));

        // Removed element was at the cursor, so the position stays
        assert_eq!(cursor.next_index(), 2);
        assert_eq!(cursor.next(&list), Ok(&5));
        assert_eq!(list.to_vec(), vec![1, 2, 5, 10]);
    }

    #[test]
    fn test_list_cursor_detects_modification() {
        let mut list = create_list();
        let mut cursor = list.list_cursor(3).unwrap();

        list.remove_at(0).unwrap();

        assert!(matches!(
            cursor.previous(&list),
            Err(ListError::ConcurrentModification { .. })
        ));
    }

    #[test]
    fn test_list_cursor_set_inserts() {
        let mut list = create_list();
        let mut cursor = list.list_cursor(0).unwrap();

        cursor.next(&list).unwrap();
        cursor.set(&mut list, 7).unwrap();

        assert_eq!(list.to_vec(), vec![1, 2, 3, 5, 7, 10]);
        assert!(cursor.set(&mut list, None).is_err());
    }
}
