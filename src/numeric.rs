//! Numeric element types accepted by [`SortedContainer`](crate::container::SortedContainer).
//!
//! The container only stores numbers. [`Numeric`] is a sealed trait that
//! is implemented for every primitive integer and floating-point type and
//! supplies the total order the container sorts and deduplicates by.
//!
//! # Ordering
//!
//! - Integers use their `Ord` implementation.
//! - Floats use IEEE 754 `totalOrder` (`f64::total_cmp`) for sorting. Values
//!   are first passed through [`Numeric::canonical`], which folds `-0.0` into
//!   `0.0` and every `NaN` into a single positive `NaN`, so numerically equal
//!   values are one element and `NaN` sorts after `+inf`.
//!
//! # Examples
//!
//! ```rust
//! use sorted_container::numeric::Numeric;
//! use std::cmp::Ordering;
//!
//! assert_eq!(3_i32.total_cmp(&7), Ordering::Less);
//! assert_eq!(f64::NAN.total_cmp(&f64::INFINITY), Ordering::Greater);
//! assert!((-0.0_f64).canonical().same_as(&0.0));
//! assert!(f64::NAN.is_unordered());
//! ```

use std::cmp::Ordering;
use std::fmt::{Debug, Display};

mod sealed {
    pub trait Sealed {}
}

/// A primitive number that can be stored in a sorted container.
///
/// This trait is sealed; it cannot be implemented outside this crate.
pub trait Numeric:
    Copy + PartialOrd + Debug + Display + Send + Sync + 'static + sealed::Sealed
{
    /// Compares two values under a total order.
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// Maps numerically equal values to one representative.
    ///
    /// Identity for integers. For floats, `-0.0` becomes `0.0` and any `NaN`
    /// becomes the positive quiet `NaN`.
    fn canonical(self) -> Self;

    /// Returns `true` for values that compare unequal to everything (`NaN`).
    fn is_unordered(&self) -> bool;

    /// Returns `true` if both values are the same element under [`Numeric::total_cmp`].
    #[inline]
    fn same_as(&self, other: &Self) -> bool {
        self.total_cmp(other) == Ordering::Equal
    }
}

macro_rules! impl_numeric_for_integers {
    ($($type:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $type {}

            impl Numeric for $type {
                #[inline]
                fn total_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }

                #[inline]
                fn canonical(self) -> Self {
                    self
                }

                #[inline]
                fn is_unordered(&self) -> bool {
                    false
                }
            }
        )*
    };
}

macro_rules! impl_numeric_for_floats {
    ($($type:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $type {}

            impl Numeric for $type {
                #[inline]
                fn total_cmp(&self, other: &Self) -> Ordering {
                    <$type>::total_cmp(self, other)
                }

                #[inline]
                fn canonical(self) -> Self {
                    if <$type>::is_nan(self) {
                        <$type>::NAN
                    } else if self == 0.0 {
                        0.0
                    } else {
                        self
                    }
                }

                #[inline]
                fn is_unordered(&self) -> bool {
                    <$type>::is_nan(*self)
                }
            }
        )*
    };
}

impl_numeric_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric_for_floats!(f32, f64);

static_assertions::assert_impl_all!(i32: Numeric);
static_assertions::assert_impl_all!(u64: Numeric);
static_assertions::assert_impl_all!(f64: Numeric);
static_assertions::assert_not_impl_any!(String: Numeric);
static_assertions::assert_not_impl_any!(&'static str: Numeric);
