//! Error types for [`SortedContainer`](super::SortedContainer).

/// Errors returned by the strict index accessors of a sorted container.
///
/// Only [`at`](super::SortedContainer::at), [`get`](super::SortedContainer::get)
/// and [`remove_at`](super::SortedContainer::remove_at) fail. The range
/// accessor [`get_range`](super::SortedContainer::get_range) clamps instead.
///
/// # Examples
///
/// ```rust
/// use sorted_container::container::{ContainerError, SortedContainer};
///
/// let container = SortedContainer::from_values([1, 2, 3]);
/// let error = container.at(5).unwrap_err();
/// assert_eq!(error, ContainerError::IndexOutOfRange { index: 5, length: 3 });
/// assert_eq!(
///     error.to_string(),
///     "index 5 out of range for sorted container of length 3"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// The requested position is outside `[0, length)`.
    IndexOutOfRange {
        /// The position that was requested.
        index: usize,
        /// The number of elements in the container at the time of the call.
        length: usize,
    },
}

impl std::fmt::Display for ContainerError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, length } => write!(
                formatter,
                "index {index} out of range for sorted container of length {length}"
            ),
        }
    }
}

impl std::error::Error for ContainerError {}
