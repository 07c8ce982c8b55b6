//! Growable list backed by a contiguous, exclusively owned buffer.
//!
//! This module provides [`ArrayList`], an index-addressable list with shifting
//! `add_at`/`remove` and a 1.5x growth policy.

use core::fmt;

use crate::config::{ArrayListConfig, DEFAULT_CAPACITY};
use crate::error::{ArrayListError, Result};
use crate::generic::list::List;

/// A resizable list backed by a contiguous buffer of slots.
///
/// Elements live in slots `[0, size)` in insertion order. Slots past `size` are
/// always `None` and are never visible through the public API. When an insertion
/// finds the buffer full, capacity grows to `floor(capacity * 1.5)` and the live
/// elements are moved into the new buffer. Capacity never shrinks.
///
/// # Type Parameters
///
/// * `T` - The element type. [`remove_value`](Self::remove_value) needs
///   `T: PartialEq`, [`add_all`](Self::add_all) needs `T: Clone`. Use
///   `Option<U>` to store absent values.
///
/// # Examples
///
/// ```rust
/// use saturn_array_list::generic::array_list::ArrayList;
///
/// let mut list: ArrayList<u32> = ArrayList::new();
///
/// list.add(10);
/// list.add(20);
/// list.add_at(30, 1).unwrap();
/// assert_eq!(list.size(), 3);
/// assert_eq!(list.get(1), Ok(&30));
///
/// assert_eq!(list.remove_value(&30), Ok(30));
/// assert_eq!(list.get(1), Ok(&20));
/// assert!(list.get(5).is_err());
/// ```
///
/// # Memory Layout
///
/// The list stores a boxed slice of `Option<T>` slots followed by a length field.
/// A removed element's trailing slot is reset to `None` so the list never keeps
/// a stale value alive.
#[derive(Clone)]
pub struct ArrayList<T> {
    items: Box<[Option<T>]>,
    len: usize,
}

fn allocate<T>(capacity: usize) -> Box<[Option<T>]> {
    core::iter::repeat_with(|| None).take(capacity).collect()
}

/// `floor(current * 1.5)`, but always at least one slot more than `current`.
fn grown_capacity(current: usize) -> usize {
    current
        .saturating_add(current / 2)
        .max(current.saturating_add(1))
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayList<T> {
    /// Creates a new, empty `ArrayList` with room for
    /// [`DEFAULT_CAPACITY`] elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_array_list::generic::array_list::ArrayList;
    ///
    /// let list: ArrayList<u32> = ArrayList::new();
    /// assert!(list.is_empty());
    /// assert_eq!(list.size(), 0);
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a new, empty `ArrayList` with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: allocate(capacity),
            len: 0,
        }
    }

    /// Creates a new, empty `ArrayList` sized from `config`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_array_list::config::ArrayListConfig;
    /// use saturn_array_list::generic::array_list::ArrayList;
    ///
    /// let config = ArrayListConfig { initial_capacity: 2 };
    /// let mut list = ArrayList::with_config(&config);
    /// list.add('a');
    /// list.add('b');
    /// list.add('c');
    /// assert_eq!(list.size(), 3);
    /// ```
    pub fn with_config(config: &ArrayListConfig) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    /// Creates an `ArrayList` holding clones of the elements of `slice`, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_array_list::generic::array_list::ArrayList;
    ///
    /// let list = ArrayList::from_slice(&[1, 2, 3]);
    /// assert_eq!(list.size(), 3);
    /// assert_eq!(list.get(2), Ok(&3));
    /// ```
    pub fn from_slice(slice: &[T]) -> Self
    where
        T: Clone,
    {
        let mut list = Self::new();
        for item in slice {
            list.add(item.clone());
        }
        list
    }

    /// Returns the number of elements in the list.
    pub fn size(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_array_list::generic::array_list::ArrayList;
    ///
    /// let mut list = ArrayList::new();
    /// assert!(list.is_empty());
    ///
    /// list.add(42);
    /// assert!(!list.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.items.len()
    }

    fn live(&self) -> &[Option<T>] {
        &self.items[..self.len]
    }

    fn ensure_capacity(&mut self) {
        if self.len == self.items.len() {
            self.grow();
        }
    }

    fn grow(&mut self) {
        let old_capacity = self.items.len();
        let new_capacity = grown_capacity(old_capacity);
        tracing::trace!(
            old_capacity,
            new_capacity,
            len = self.len,
            "growing array list storage"
        );

        let mut items = allocate(new_capacity);
        for (dest, source) in items.iter_mut().zip(self.items[..self.len].iter_mut()) {
            *dest = source.take();
        }
        self.items = items;
    }

    fn check_index_for_addition(&self, index: usize) -> Result<()> {
        if index > self.len {
            return Err(ArrayListError::out_of_range(index, self.len));
        }
        Ok(())
    }

    fn live_slot_mut(&mut self, index: usize) -> Result<&mut Option<T>> {
        let len = self.len;
        self.items[..len]
            .get_mut(index)
            .ok_or_else(|| ArrayListError::out_of_range(index, len))
    }

    /// Appends an element to the back of the list, growing the buffer if it is full.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_array_list::generic::array_list::ArrayList;
    ///
    /// let mut list = ArrayList::new();
    /// for i in 0..11 {
    ///     list.add(i);
    /// }
    /// assert_eq!(list.size(), 11);
    /// assert_eq!(list.get(10), Ok(&10));
    /// ```
    pub fn add(&mut self, value: T) {
        self.ensure_capacity();
        self.items[self.len] = Some(value);
        self.len += 1;
    }

    /// Inserts `value` at `index`, shifting the elements at `[index, size)` one
    /// slot to the right.
    ///
    /// `index == size()` is a valid insertion point and behaves like [`add`](Self::add).
    ///
    /// # Errors
    ///
    /// Returns [`ArrayListError::IndexOutOfRange`] if `index > size()`. The list,
    /// including its capacity, is left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_array_list::generic::array_list::ArrayList;
    /// use saturn_array_list::error::ArrayListError;
    ///
    /// let mut list = ArrayList::from_slice(&["a", "c"]);
    /// list.add_at("b", 1).unwrap();
    /// assert_eq!(list.get(1), Ok(&"b"));
    /// assert_eq!(list.get(2), Ok(&"c"));
    ///
    /// assert_eq!(
    ///     list.add_at("z", 4),
    ///     Err(ArrayListError::IndexOutOfRange { index: 4, size: 3 })
    /// );
    /// ```
    pub fn add_at(&mut self, value: T, index: usize) -> Result<()> {
        self.check_index_for_addition(index)?;
        self.ensure_capacity();

        // Park the value in the first free slot, then rotate it into place.
        self.items[self.len] = Some(value);
        self.items[index..=self.len].rotate_right(1);
        self.len += 1;

        Ok(())
    }

    /// Appends every element of `other`, in order, as repeated [`add`](Self::add) calls.
    ///
    /// `other` is read through [`List::size`] and [`List::get`] only and is never
    /// modified.
    ///
    /// # Errors
    ///
    /// Propagates an error from `other.get`, which a conforming [`List`] never
    /// returns for indices below its `size()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_array_list::generic::array_list::ArrayList;
    ///
    /// let mut a = ArrayList::from_slice(&[1, 2, 3]);
    /// let b = ArrayList::from_slice(&[4, 5]);
    ///
    /// a.add_all(&b).unwrap();
    /// assert_eq!(a, ArrayList::from_slice(&[1, 2, 3, 4, 5]));
    /// assert_eq!(b, ArrayList::from_slice(&[4, 5]));
    ///
    /// // Any `List` works as the source.
    /// a.add_all(&vec![6]).unwrap();
    /// assert_eq!(a.size(), 6);
    /// ```
    pub fn add_all<L>(&mut self, other: &L) -> Result<()>
    where
        L: List<T> + ?Sized,
        T: Clone,
    {
        for index in 0..other.size() {
            self.add(other.get(index)?.clone());
        }
        Ok(())
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayListError::IndexOutOfRange`] if `index >= size()`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.live()
            .get(index)
            .and_then(Option::as_ref)
            .ok_or_else(|| ArrayListError::out_of_range(index, self.len))
    }

    /// Replaces the element at `index` with `value` and returns the old element.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayListError::IndexOutOfRange`] if `index >= size()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_array_list::generic::array_list::ArrayList;
    ///
    /// let mut list = ArrayList::from_slice(&[1, 2]);
    /// assert_eq!(list.set(20, 1), Ok(2));
    /// assert_eq!(list.get(1), Ok(&20));
    /// assert!(list.set(0, 2).is_err());
    /// ```
    pub fn set(&mut self, value: T, index: usize) -> Result<T> {
        let len = self.len;
        let slot = self.live_slot_mut(index)?;
        slot
            .replace(value)
            .ok_or_else(|| ArrayListError::out_of_range(index, len))
    }

    /// Removes and returns the element at `index`, shifting the elements after it
    /// one slot to the left.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayListError::IndexOutOfRange`] if `index >= size()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_array_list::generic::array_list::ArrayList;
    ///
    /// let mut list = ArrayList::from_slice(&[1, 2, 3]);
    /// assert_eq!(list.remove(0), Ok(1));
    /// assert_eq!(list, ArrayList::from_slice(&[2, 3]));
    /// assert!(list.remove(2).is_err());
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let len = self.len;
        let removed = self
            .live_slot_mut(index)?
            .take()
            .ok_or_else(|| ArrayListError::out_of_range(index, len))?;

        // The emptied slot travels to the end of the live range.
        self.items[index..len].rotate_left(1);
        self.len -= 1;

        Ok(removed)
    }

    /// Returns the position of the first element equal to `value`.
    ///
    /// Each slot is first compared by address, so passing a reference obtained from
    /// [`get`](Self::get) matches even for types whose `PartialEq` is not reflexive.
    /// Otherwise `PartialEq` decides.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.live().iter().position(|slot| match slot {
            Some(item) => core::ptr::eq(item, value) || item == value,
            None => false,
        })
    }

    /// Returns `true` if an element equal to `value` is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_array_list::generic::array_list::ArrayList;
    ///
    /// let list = ArrayList::from_slice(&[3, 5]);
    /// assert!(list.contains(&5));
    /// assert!(!list.contains(&4));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Removes and returns the first element equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayListError::ElementNotFound`] if no element matches. The list
    /// is left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_array_list::generic::array_list::ArrayList;
    /// use saturn_array_list::error::ArrayListError;
    ///
    /// let mut list = ArrayList::from_slice(&[Some("x"), None, Some("y")]);
    /// assert_eq!(list.remove_value(&None), Ok(None));
    /// assert_eq!(list.size(), 2);
    /// assert_eq!(list.remove_value(&Some("z")), Err(ArrayListError::ElementNotFound));
    /// ```
    pub fn remove_value(&mut self, value: &T) -> Result<T>
    where
        T: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => self.remove(index),
            None => {
                tracing::debug!(size = self.len, "value to remove not found in list");
                Err(ArrayListError::ElementNotFound)
            }
        }
    }
}

impl<T> List<T> for ArrayList<T> {
    fn add(&mut self, value: T) {
        self.add(value)
    }

    fn add_at(&mut self, value: T, index: usize) -> Result<()> {
        self.add_at(value, index)
    }

    fn get(&self, index: usize) -> Result<&T> {
        self.get(index)
    }

    fn set(&mut self, value: T, index: usize) -> Result<T> {
        self.set(value, index)
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        self.remove(index)
    }

    fn size(&self) -> usize {
        self.len
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.live().iter().flatten()).finish()
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.live() == other.live()
    }
}

impl<T: Eq> Eq for ArrayList<T> {}
