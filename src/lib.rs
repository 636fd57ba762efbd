//! # sorted-container
//!
//! An ordered, deduplicated container of numbers with positional and
//! value-range queries.
//!
//! ## Overview
//!
//! - **[`SortedContainer`](container::SortedContainer)**: keeps a unique,
//!   ascending sequence of numbers and supports index access, inclusive index
//!   slices, value-range queries, range deletion and iteration
//! - **[`Numeric`](numeric::Numeric)**: the element constraint, implemented for
//!   every primitive integer and float type
//! - **[`AsyncTraversal`](traversal::AsyncTraversal)**: cancellable,
//!   cooperatively scheduled traversal of a container snapshot
//!
//! ## Feature Flags
//!
//! - `async` (default): asynchronous traversal (`tokio`, `futures`)
//! - `serde`: `Serialize`/`Deserialize` for `SortedContainer`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use sorted_container::prelude::*;
//!
//! let mut container = SortedContainer::from_values([10, 40, 20, 30, 20]);
//! assert_eq!(container.len(), 4);
//! assert_eq!(container.get_range(1, 3), vec![20, 30, 40]);
//! assert_eq!(container.get_between(15, 35, false), vec![20, 30]);
//! assert_eq!(container.remove_at(0), Ok(10));
//! assert!(container.at(3).is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use sorted_container::prelude::*;
/// ```
pub mod prelude {
    pub use crate::container::{ContainerError, SortedContainer};
    pub use crate::numeric::Numeric;

    #[cfg(feature = "async")]
    pub use crate::traversal::{AsyncTraversal, TraversalError, TraversalHandle};
}

pub mod container;
pub mod numeric;

#[cfg(feature = "async")]
pub mod traversal;
