//! Sorted, deduplicated container of numbers.
//!
//! This module provides [`SortedContainer`], an owned collection that keeps
//! its elements unique and in ascending order at all times, and answers
//! positional and value-range queries over them.
//!
//! # Overview
//!
//! - Elements are stored in a single sorted `Vec` owned by each instance.
//! - Membership, insertion and value-range lookups use binary search.
//! - Strict positional accessors ([`at`](SortedContainer::at),
//!   [`remove_at`](SortedContainer::remove_at)) fail with
//!   [`ContainerError::IndexOutOfRange`]; the permissive
//!   [`get_range`](SortedContainer::get_range) clamps instead.
//!
//! # Time Complexity
//!
//! | Operation        | Complexity          |
//! |------------------|---------------------|
//! | `add`            | O(log n) + O(n)     |
//! | `remove`         | O(log n) + O(n)     |
//! | `remove_at`      | O(n)                |
//! | `remove_between` | O(log n) + O(n)     |
//! | `contains`       | O(log n)            |
//! | `at` / `get`     | O(1)                |
//! | `get_range`      | O(k)                |
//! | `get_between`    | O(log n) + O(k)     |
//! | `len`            | O(1)                |
//!
//! where k is the size of the result.
//!
//! # Examples
//!
//! ```rust
//! use sorted_container::container::SortedContainer;
//!
//! let mut container = SortedContainer::from_values([3, 1, 2, 1]);
//! assert_eq!(container.to_vec(), vec![1, 2, 3]);
//!
//! container.add(10);
//! container.add(2); // already present, no-op
//! assert_eq!(container.len(), 4);
//!
//! assert_eq!(container.get_between(2, 10, true), vec![3]);
//! assert_eq!(container.remove_between(2, 3, false), vec![2, 3]);
//! assert_eq!(container.to_string(), "1,10");
//! ```

mod error;
mod iter;

pub use error::ContainerError;
pub use iter::{IntoIter, Iter};

use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;

use crate::numeric::Numeric;

/// An ordered set of numbers backed by a sorted `Vec`.
///
/// Every instance owns its storage; cloning produces an independent copy.
/// Accessors hand out copies or shared borrows, never the mutable store.
///
/// # Invariants
///
/// After every call returns:
/// - elements are in ascending order under [`Numeric::total_cmp`]
/// - no two elements compare equal under [`Numeric::total_cmp`]
/// - [`len`](Self::len) is the number of distinct values added and not yet removed
///
/// # Examples
///
/// ```rust
/// use sorted_container::container::SortedContainer;
///
/// let mut container = SortedContainer::new();
/// container.add(30);
/// container.add(10);
/// container.add(20);
///
/// assert_eq!(container.at(0), Ok(10));
/// assert_eq!(container.get_range(1, 2), vec![20, 30]);
/// assert_eq!(container.remove(20), Some(20));
/// assert_eq!(container.remove(20), None);
/// ```
#[derive(Clone)]
pub struct SortedContainer<T: Numeric> {
    elements: Vec<T>,
}

static_assertions::assert_impl_all!(SortedContainer<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(SortedContainer<f64>: Send, Sync, Clone, Default);

impl<T: Numeric> SortedContainer<T> {
    /// Creates a new empty container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_container::container::SortedContainer;
    ///
    /// let container: SortedContainer<i32> = SortedContainer::new();
    /// assert!(container.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates a container from arbitrary initial values.
    ///
    /// Duplicates collapse and the input order is irrelevant: the result is the
    /// same as calling [`add`](Self::add) for each value in turn.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_container::container::SortedContainer;
    ///
    /// let container = SortedContainer::from_values(vec![3, 1, 2, 1]);
    /// assert_eq!(container.to_vec(), vec![1, 2, 3]);
    /// assert_eq!(container.len(), 3);
    /// ```
    #[must_use]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().collect()
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the container holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::IndexOutOfRange`] if `index >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_container::container::{ContainerError, SortedContainer};
    ///
    /// let container = SortedContainer::from_values([5, 4, 6]);
    /// assert_eq!(container.at(0), Ok(4));
    /// assert_eq!(
    ///     container.at(3),
    ///     Err(ContainerError::IndexOutOfRange { index: 3, length: 3 })
    /// );
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<T, ContainerError> {
        self.elements
            .get(index)
            .copied()
            .ok_or(ContainerError::IndexOutOfRange {
                index,
                length: self.elements.len(),
            })
    }

    /// Returns the element at `start_index`. Equivalent to [`at`](Self::at).
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::IndexOutOfRange`] if `start_index >= self.len()`.
    #[inline]
    pub fn get(&self, start_index: usize) -> Result<T, ContainerError> {
        self.at(start_index)
    }

    /// Returns a copy of the elements at positions `start_index..=end_index`.
    ///
    /// This accessor never fails. An `end_index` at or past the last position
    /// is truncated to the end of the container, and a `start_index` past the
    /// end or past `end_index` yields an empty vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_container::container::SortedContainer;
    ///
    /// let container = SortedContainer::from_values([10, 20, 30, 40]);
    /// assert_eq!(container.get_range(1, 2), vec![20, 30]);
    /// assert_eq!(container.get_range(1, 3), vec![20, 30, 40]);
    /// assert_eq!(container.get_range(2, 99), vec![30, 40]);
    /// assert!(container.get_range(3, 1).is_empty());
    /// assert!(container.get_range(7, 9).is_empty());
    /// ```
    #[must_use]
    pub fn get_range(&self, start_index: usize, end_index: usize) -> Vec<T> {
        let end = end_index.saturating_add(1).min(self.elements.len());
        if start_index >= end {
            return Vec::new();
        }
        self.elements[start_index..end].to_vec()
    }

    /// Returns a copy of the elements whose values lie between the bounds.
    ///
    /// With `exclusive == false` the predicate is `lower <= v <= upper`; with
    /// `exclusive == true` it is `lower < v < upper`. Comparisons use
    /// [`Numeric::total_cmp`] on canonical values, so the result is exact for
    /// floats as well as for integers at the edges of their range. `lower >
    /// upper` and a `NaN` bound both yield an empty vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_container::container::SortedContainer;
    ///
    /// let container = SortedContainer::from_values([1, 2, 3, 4, 5]);
    /// assert_eq!(container.get_between(2, 4, false), vec![2, 3, 4]);
    /// assert_eq!(container.get_between(2, 4, true), vec![3]);
    /// assert!(container.get_between(4, 2, false).is_empty());
    /// ```
    #[must_use]
    pub fn get_between(&self, lower_bound: T, upper_bound: T, exclusive: bool) -> Vec<T> {
        let range = self.between_range(lower_bound, upper_bound, exclusive);
        self.elements[range].to_vec()
    }

    /// Returns `true` if `value` is in the container.
    ///
    /// # Complexity
    ///
    /// O(log n) binary search.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: T) -> bool {
        self.search(value).is_ok()
    }

    /// Returns the position of `value`, or `None` if it is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_container::container::SortedContainer;
    ///
    /// let container = SortedContainer::from_values([30, 10, 20]);
    /// assert_eq!(container.index_of(30), Some(2));
    /// assert_eq!(container.index_of(15), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn index_of(&self, value: T) -> Option<usize> {
        self.search(value).ok()
    }

    /// Returns the smallest element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<T> {
        self.elements.first().copied()
    }

    /// Returns the largest element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<T> {
        self.elements.last().copied()
    }

    /// Returns the elements as an ascending slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an independent ascending copy of all elements.
    ///
    /// Mutating the returned vector never affects the container.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.clone()
    }

    /// Returns an iterator over the elements in ascending order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.elements)
    }

    /// Calls `visitor(element, index, elements)` for every element in ascending order.
    ///
    /// `elements` is a shared view of the whole container; the container cannot
    /// be mutated until the traversal returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_container::container::SortedContainer;
    ///
    /// let container = SortedContainer::from_values([3, 1, 2]);
    /// let mut visited = Vec::new();
    /// container.for_each(|element, index, elements| {
    ///     assert_eq!(elements[index], element);
    ///     visited.push((index, element));
    /// });
    /// assert_eq!(visited, vec![(0, 1), (1, 2), (2, 3)]);
    /// ```
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(T, usize, &[T]),
    {
        for (index, element) in self.elements.iter().copied().enumerate() {
            visitor(element, index, &self.elements);
        }
    }

    /// Like [`for_each`](Self::for_each), passing `context` to every visit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_container::container::SortedContainer;
    ///
    /// let container = SortedContainer::from_values([1, 2, 3]);
    /// let mut total = 0;
    /// container.for_each_with(&mut total, |total, element, _, _| *total += element);
    /// assert_eq!(total, 6);
    /// ```
    pub fn for_each_with<C, F>(&self, context: &mut C, mut visitor: F)
    where
        F: FnMut(&mut C, T, usize, &[T]),
    {
        for (index, element) in self.elements.iter().copied().enumerate() {
            visitor(context, element, index, &self.elements);
        }
    }

    /// Adds `value` if it is not already present.
    ///
    /// Returns `true` if the value was inserted, `false` if it was already in
    /// the container (in which case nothing changes).
    ///
    /// # Complexity
    ///
    /// O(log n) lookup plus O(n) to shift the tail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_container::container::SortedContainer;
    ///
    /// let mut container = SortedContainer::new();
    /// assert!(container.add(2));
    /// assert!(container.add(1));
    /// assert!(!container.add(2));
    /// assert_eq!(container.to_vec(), vec![1, 2]);
    /// ```
    pub fn add(&mut self, value: T) -> bool {
        let value = value.canonical();
        match self.search(value) {
            Ok(_) => false,
            Err(position) => {
                self.elements.insert(position, value);
                true
            }
        }
    }

    /// Removes `value` and returns the stored element, or returns `None` if it
    /// is absent.
    ///
    /// O(log n) lookup plus O(n) to shift the tail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_container::container::SortedContainer;
    ///
    /// let mut container = SortedContainer::from_values([1, 2, 3]);
    /// assert_eq!(container.remove(2), Some(2));
    /// assert_eq!(container.remove(2), None);
    /// assert_eq!(container.to_vec(), vec![1, 3]);
    /// ```
    pub fn remove(&mut self, value: T) -> Option<T> {
        let position = self.search(value).ok()?;
        self.remove_at(position).ok()
    }

    /// Removes and returns the element at `index`, shifting later elements left.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::IndexOutOfRange`] if `index >= self.len()`;
    /// the container is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_container::container::SortedContainer;
    ///
    /// let mut container = SortedContainer::from_values([1, 2, 3]);
    /// assert_eq!(container.remove_at(1), Ok(2));
    /// assert_eq!(container.to_vec(), vec![1, 3]);
    /// assert!(container.remove_at(2).is_err());
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T, ContainerError> {
        if index >= self.elements.len() {
            return Err(ContainerError::IndexOutOfRange {
                index,
                length: self.elements.len(),
            });
        }
        Ok(self.elements.remove(index))
    }

    /// Removes every element matching the [`get_between`](Self::get_between)
    /// predicate and returns them in ascending order.
    ///
    /// Elements below and above the bounds stay in the container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_container::container::SortedContainer;
    ///
    /// let mut container = SortedContainer::from_values([1, 2, 3, 4, 5, 6]);
    /// assert_eq!(container.remove_between(2, 5, false), vec![2, 3, 4, 5]);
    /// assert_eq!(container.to_vec(), vec![1, 6]);
    /// ```
    pub fn remove_between(&mut self, lower_bound: T, upper_bound: T, exclusive: bool) -> Vec<T> {
        let range = self.between_range(lower_bound, upper_bound, exclusive);
        let removed: Vec<T> = self.elements.drain(range).collect();
        log::trace!(
            "remove_between({lower_bound}, {upper_bound}, exclusive={exclusive}) removed {} element(s), {} remain",
            removed.len(),
            self.elements.len()
        );
        removed
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        log::trace!("clearing {} element(s)", self.elements.len());
        self.elements.clear();
    }

    fn search(&self, value: T) -> Result<usize, usize> {
        let value = value.canonical();
        self.elements
            .binary_search_by(|element| element.total_cmp(&value))
    }

    /// Positions of the elements matching the value-range predicate.
    ///
    /// Both ends are found by binary search; the matching elements are
    /// contiguous because the store is sorted. A `NaN` bound matches nothing.
    fn between_range(&self, lower_bound: T, upper_bound: T, exclusive: bool) -> Range<usize> {
        if lower_bound.is_unordered() || upper_bound.is_unordered() {
            return 0..0;
        }
        let (lower_bound, upper_bound) = (lower_bound.canonical(), upper_bound.canonical());
        let start = self.elements.partition_point(|element| {
            let ordering = element.total_cmp(&lower_bound);
            if exclusive {
                ordering != Ordering::Greater
            } else {
                ordering == Ordering::Less
            }
        });
        let end = self.elements.partition_point(|element| {
            let ordering = element.total_cmp(&upper_bound);
            if exclusive {
                ordering == Ordering::Less
            } else {
                ordering != Ordering::Greater
            }
        });
        start..end.max(start)
    }
}

impl<T: Numeric> Default for SortedContainer<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T: Numeric> From<Vec<T>> for SortedContainer<T> {
    fn from(mut elements: Vec<T>) -> Self {
        for element in &mut elements {
            *element = element.canonical();
        }
        elements.sort_by(|left, right| left.total_cmp(right));
        elements.dedup_by(|current, previous| current.same_as(previous));
        debug_assert!(
            is_strictly_ascending(&elements),
            "sorted container elements must be strictly ascending"
        );
        Self { elements }
    }
}

impl<T: Numeric, const N: usize> From<[T; N]> for SortedContainer<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from(Vec::from(elements))
    }
}

impl<T: Numeric> From<SortedContainer<T>> for Vec<T> {
    fn from(container: SortedContainer<T>) -> Self {
        container.elements
    }
}

impl<T: Numeric> FromIterator<T> for SortedContainer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let elements: Vec<T> = iter.into_iter().collect();
        Self::from(elements)
    }
}

impl<T: Numeric> Extend<T> for SortedContainer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Numeric> IntoIterator for SortedContainer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.elements)
    }
}

impl<'a, T: Numeric> IntoIterator for &'a SortedContainer<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Equality and Formatting
// =============================================================================

impl<T: Numeric> PartialEq for SortedContainer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .elements
                .iter()
                .zip(&other.elements)
                .all(|(left, right)| left.same_as(right))
    }
}

impl<T: Numeric> Eq for SortedContainer<T> {}

impl<T: Numeric> fmt::Debug for SortedContainer<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.elements.iter()).finish()
    }
}

/// Comma-joined rendering in ascending order, e.g. `1,2,3`.
impl<T: Numeric> fmt::Display for SortedContainer<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for element in &self.elements {
            if first {
                first = false;
            } else {
                write!(formatter, ",")?;
            }
            write!(formatter, "{element}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: Numeric + serde::Serialize> serde::Serialize for SortedContainer<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in &self.elements {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SortedContainerVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> SortedContainerVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SortedContainerVisitor<T>
where
    T: Numeric + serde::Deserialize<'de>,
{
    type Value = SortedContainer<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of numbers")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(SortedContainer::from(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SortedContainer<T>
where
    T: Numeric + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SortedContainerVisitor::new())
    }
}

fn is_strictly_ascending<T: Numeric>(slice: &[T]) -> bool {
    slice
        .windows(2)
        .all(|window| window[0].total_cmp(&window[1]) == Ordering::Less)
}
