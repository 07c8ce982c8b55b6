//! # Saturn Array List
//!
//! A generic, growable, index-addressable list for programs that want a small,
//! auditable container with explicit bounds errors instead of panics.
//!
//! ## Features
//!
//! - **[`ArrayList<T>`]** – contiguous buffer with positional `add_at`/`get`/`set`/`remove`,
//!   value removal with `remove_value`, and bulk append with `add_all`
//! - **[`List<T>`]** – trait abstraction over the same operations, implemented for
//!   [`ArrayList<T>`] and `Vec<T>`
//! - **[`ArrayListError`]** – `IndexOutOfRange` and `ElementNotFound`, returned instead of
//!   panicking
//! - **[`ArrayListConfig`]** – `serde`-deserializable construction settings
//!
//! ## Growth
//!
//! A new list has room for [`DEFAULT_CAPACITY`] (10) elements. When an insertion finds the
//! buffer full, capacity becomes `floor(capacity * 1.5)` and the live elements are moved
//! over in order. Removals never shrink the buffer, and every slot vacated by a removal is
//! cleared. Growth is logged through `tracing` at `trace` level.
//!
//! ## Failure Atomicity
//!
//! Indices are validated before anything is touched, so a call that returns `Err` leaves
//! the list exactly as it was.
//!
//! ## Quick Example
//!
//! ```rust
//! use saturn_array_list::{ArrayList, ArrayListError};
//!
//! let mut list = ArrayList::new();
//! list.add(10);
//! list.add(20);
//! list.add_at(30, 1).unwrap();
//! assert_eq!(format!("{:?}", list), "[10, 30, 20]");
//!
//! assert_eq!(list.remove_value(&30), Ok(30));
//! assert_eq!(format!("{:?}", list), "[10, 20]");
//!
//! assert_eq!(
//!     list.get(5),
//!     Err(ArrayListError::IndexOutOfRange { index: 5, size: 2 })
//! );
//! ```
//!
//! ## Threading
//!
//! The list does no locking. Mutation takes `&mut self`, so exclusive access is enforced
//! by the borrow checker, and the list is `Send`/`Sync` exactly when `T` is.
//!
//! [`ArrayList<T>`]: generic::array_list::ArrayList
//! [`List<T>`]: generic::list::List
//! [`ArrayListError`]: error::ArrayListError
//! [`ArrayListConfig`]: config::ArrayListConfig
//! [`DEFAULT_CAPACITY`]: config::DEFAULT_CAPACITY

pub mod config;
pub mod error;
pub mod generic;

pub use config::{ArrayListConfig, DEFAULT_CAPACITY};
pub use error::{ArrayListError, Result};
pub use generic::{array_list::ArrayList, list::List};
