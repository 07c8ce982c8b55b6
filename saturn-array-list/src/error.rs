use thiserror::Error;

/// Errors returned by [`ArrayList`](crate::generic::array_list::ArrayList) and
/// other [`List`](crate::generic::list::List) implementations.
///
/// A failed call never mutates the list it was made on.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayListError {
    /// The index lies outside the range accepted by the operation.
    #[error("Index {index} is out of bounds for size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// `remove_value` scanned the whole list without finding an equal element.
    #[error("Element does not exist in the list")]
    ElementNotFound,
}

impl ArrayListError {
    pub(crate) fn out_of_range(index: usize, size: usize) -> Self {
        let error = ArrayListError::IndexOutOfRange { index, size };
        tracing::debug!(%error, "rejected list index");
        error
    }
}

/// Convenience alias so list operations can return `Result<T>`.
pub type Result<T> = core::result::Result<T, ArrayListError>;
