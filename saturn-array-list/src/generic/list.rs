//! Common trait for index-addressable lists.
//!
//! This module provides [`List`], the operation set shared by [`ArrayList`] and the
//! standard library `Vec`. Generic code such as [`ArrayList::add_all`] reads its
//! source through this trait only.
//!
//! [`ArrayList`]: crate::generic::array_list::ArrayList
//! [`ArrayList::add_all`]: crate::generic::array_list::ArrayList::add_all

use crate::error::{ArrayListError, Result};

/// A sequence addressed by position, with shifting insert and remove.
///
/// Every index-taking method validates its index before touching the list, so an
/// `Err` always leaves the list as it was.
///
/// # Examples
///
/// ```rust
/// use saturn_array_list::generic::{array_list::ArrayList, list::List};
///
/// fn work_with_list<L: List<i32>>(list: &mut L) {
///     list.add(42);
///     list.add_at(7, 0).unwrap();
///     assert_eq!(list.size(), 2);
///     assert_eq!(list.get(0), Ok(&7));
///     assert_eq!(list.remove(1), Ok(42));
///     assert!(list.get(1).is_err());
/// }
///
/// let mut list = ArrayList::new();
/// work_with_list(&mut list);
///
/// let mut vec = Vec::new();
/// work_with_list(&mut vec);
/// ```
pub trait List<T> {
    /// Appends `value` at the end.
    fn add(&mut self, value: T);

    /// Inserts `value` at `index`, shifting later elements right.
    ///
    /// `index == size()` appends. Returns [`ArrayListError::IndexOutOfRange`] when
    /// `index > size()`.
    fn add_at(&mut self, value: T, index: usize) -> Result<()>;

    /// Returns the element at `index`.
    fn get(&self, index: usize) -> Result<&T>;

    /// Replaces the element at `index` and returns the previous one.
    fn set(&mut self, value: T, index: usize) -> Result<T>;

    /// Removes the element at `index`, shifting later elements left.
    fn remove(&mut self, index: usize) -> Result<T>;

    /// Returns the number of elements.
    fn size(&self) -> usize;

    /// Returns `true` if the list holds no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// Implementation for standard library [`Vec`].
///
/// Bounds violations report the same [`ArrayListError`] as [`ArrayList`] instead of
/// panicking.
///
/// [`Vec`]: std::vec::Vec
/// [`ArrayList`]: crate::generic::array_list::ArrayList
impl<T> List<T> for Vec<T> {
    fn add(&mut self, value: T) {
        self.push(value);
    }

    fn add_at(&mut self, value: T, index: usize) -> Result<()> {
        if index > self.len() {
            return Err(ArrayListError::out_of_range(index, self.len()));
        }

        self.insert(index, value);
        Ok(())
    }

    fn get(&self, index: usize) -> Result<&T> {
        self.as_slice()
            .get(index)
            .ok_or_else(|| ArrayListError::out_of_range(index, self.len()))
    }

    fn set(&mut self, value: T, index: usize) -> Result<T> {
        let size = self.len();
        let slot = self
            .as_mut_slice()
            .get_mut(index)
            .ok_or_else(|| ArrayListError::out_of_range(index, size))?;

        Ok(core::mem::replace(slot, value))
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.len() {
            return Err(ArrayListError::out_of_range(index, self.len()));
        }

        Ok(Vec::remove(self, index))
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}
