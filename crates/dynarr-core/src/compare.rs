//! Comparator capabilities for extreme-value queries.
//!
//! `min`/`max` scans are parameterized by a [`Comparator`]. When the
//! caller supplies none, [`NaturalOrder`] falls back to the element
//! type's own `<`/`>`.

use std::cmp::Ordering;

/// Three-way ordering over element references.
pub trait Comparator<T: ?Sized> {
    /// Order `lhs` relative to `rhs`.
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for &C {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        (**self).compare(lhs, rhs)
    }
}

/// The element type's built-in ordering.
///
/// Pairs that `PartialOrd` cannot order (e.g. NaN) compare as equal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: PartialOrd + ?Sized> Comparator<T> for NaturalOrder {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        lhs.partial_cmp(rhs).unwrap_or(Ordering::Equal)
    }
}

/// Adapts a closure returning [`Ordering`].
#[derive(Clone, Copy, Debug)]
pub struct FnComparator<F>(pub F);

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Comparator<T> for FnComparator<F> {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        (self.0)(lhs, rhs)
    }
}

/// Adapts a closure with a signed contract: negative for less-than,
/// zero for equal, positive for greater-than.
#[derive(Clone, Copy, Debug)]
pub struct ThreeWay<F>(pub F);

impl<T: ?Sized, F: Fn(&T, &T) -> i64> Comparator<T> for ThreeWay<F> {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        (self.0)(lhs, rhs).cmp(&0)
    }
}

/// Build a comparator from an `Ordering`-returning closure.
pub fn by<T: ?Sized, F: Fn(&T, &T) -> Ordering>(f: F) -> FnComparator<F> {
    FnComparator(f)
}

/// Build a comparator from a signed three-way closure.
pub fn three_way<T: ?Sized, F: Fn(&T, &T) -> i64>(f: F) -> ThreeWay<F> {
    ThreeWay(f)
}
