//! Construction settings for [`ArrayList`](crate::generic::array_list::ArrayList).
//!
//! [`ArrayListConfig`] derives `serde` so it can sit inside a larger
//! application config and be deserialized with it. Missing fields fall back
//! to their defaults.

use serde::{Deserialize, Serialize};

/// Number of slots a list allocates when no capacity is requested.
pub const DEFAULT_CAPACITY: usize = 10;

/// Settings used by [`ArrayList::with_config`](crate::generic::array_list::ArrayList::with_config).
///
/// # Examples
///
/// ```rust
/// use saturn_array_list::config::{ArrayListConfig, DEFAULT_CAPACITY};
///
/// let config = ArrayListConfig::default();
/// assert_eq!(config.initial_capacity, DEFAULT_CAPACITY);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayListConfig {
    /// Slots allocated up front. Growth starts from this value.
    pub initial_capacity: usize,
}

impl Default for ArrayListConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
        }
    }
}
