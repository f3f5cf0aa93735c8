//! Foldable type class - collapsing a structure to a summary value.
//!
//! [`Foldable`] abstracts over structures whose elements can be visited in
//! order and accumulated: `fold_left` and `fold_right` are the primitives,
//! everything else (`fold_map`, `length`, `exists`, `for_all`, `to_vec`, …)
//! derives from them.
//!
//! # Examples
//!
//! ```rust
//! use kindling::typeclass::{Foldable, Sum};
//!
//! let total = vec![1, 2, 3].fold_left(0, |acc, n| acc + n);
//! assert_eq!(total, 6);
//!
//! let as_monoid = vec![1, 2, 3].fold_map(Sum);
//! assert_eq!(as_monoid, Sum(6));
//! ```

use super::higher::Kind;
use super::identity::Identity;
use super::monoid::Monoid;

/// A type class for structures that can be folded to a summary value.
///
/// `fold_left` is strict and iterative; `fold_right` folds from the back.
/// For the single-value carriers (`Option`, `Result`, `Identity`, `Box`)
/// the two coincide on the lone element.
pub trait Foldable: Kind {
    /// Folds from the left with an accumulator.
    fn fold_left<B, F>(self, initial: B, function: F) -> B
    where
        F: FnMut(B, Self::Elem) -> B;

    /// Folds from the right.
    fn fold_right<B, F>(self, initial: B, function: F) -> B
    where
        F: FnMut(Self::Elem, B) -> B;

    /// Whether the structure holds no elements.
    fn is_empty(&self) -> bool;

    /// Maps every element into a monoid and combines the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::{Foldable, Max};
    ///
    /// assert_eq!(vec![3, 1, 2].fold_map(Max), Max(3));
    /// ```
    #[inline]
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        Self: Sized,
        M: Monoid,
        F: FnMut(Self::Elem) -> M,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// The number of elements.
    #[inline]
    fn length(self) -> usize
    where
        Self: Sized,
    {
        self.fold_left(0, |count, _| count + 1)
    }

    /// Collects the elements into a `Vec`, left to right.
    #[inline]
    fn to_vec(self) -> Vec<Self::Elem>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut collected, element| {
            collected.push(element);
            collected
        })
    }

    /// Whether any element satisfies the predicate.
    #[inline]
    fn exists<P>(self, mut predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Elem) -> bool,
    {
        self.fold_left(false, |found, element| found || predicate(&element))
    }

    /// Whether every element satisfies the predicate.
    #[inline]
    fn for_all<P>(self, mut predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Elem) -> bool,
    {
        self.fold_left(true, |all, element| all && predicate(&element))
    }

    /// Whether the given value occurs among the elements.
    #[inline]
    fn contains(self, needle: &Self::Elem) -> bool
    where
        Self: Sized,
        Self::Elem: PartialEq,
    {
        self.exists(|element| element == needle)
    }

    /// The first element satisfying the predicate, if any.
    #[inline]
    fn find<P>(self, mut predicate: P) -> Option<Self::Elem>
    where
        Self: Sized,
        P: FnMut(&Self::Elem) -> bool,
    {
        self.fold_left(None, |found, element| match found {
            Some(_) => found,
            None if predicate(&element) => Some(element),
            None => None,
        })
    }
}

// =============================================================================
// Option<A>
// =============================================================================

impl<A> Foldable for Option<A> {
    #[inline]
    fn fold_left<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(value) => function(initial, value),
            None => initial,
        }
    }

    #[inline]
    fn fold_right<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(value) => function(value, initial),
            None => initial,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_none()
    }
}

// =============================================================================
// Result<T, E>
// =============================================================================

impl<T, E> Foldable for Result<T, E> {
    #[inline]
    fn fold_left<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Ok(value) => function(initial, value),
            Err(_) => initial,
        }
    }

    #[inline]
    fn fold_right<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Ok(value) => function(value, initial),
            Err(_) => initial,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_err()
    }
}

// =============================================================================
// Vec<T>
// =============================================================================

impl<T> Foldable for Vec<T> {
    #[inline]
    fn fold_left<B, F>(self, initial: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(initial, function)
    }

    #[inline]
    fn fold_right<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(initial, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

// =============================================================================
// Box<T>
// =============================================================================

impl<T> Foldable for Box<T> {
    #[inline]
    fn fold_left<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        function(initial, *self)
    }

    #[inline]
    fn fold_right<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        function(*self, initial)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        false
    }
}

// =============================================================================
// Identity<A>
// =============================================================================

impl<A> Foldable for Identity<A> {
    #[inline]
    fn fold_left<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        function(initial, self.0)
    }

    #[inline]
    fn fold_right<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        function(self.0, initial)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{All, Any, Sum};
    use rstest::rstest;

    #[rstest]
    fn option_folds_over_at_most_one_element() {
        assert_eq!(Some(5).fold_left(1, |acc, n| acc + n), 6);
        assert_eq!(None::<i32>.fold_left(1, |acc, n| acc + n), 1);
        assert_eq!(Some(5).fold_right(1, |n, acc| n + acc), 6);
    }

    #[rstest]
    fn result_folds_ok_only() {
        let ok: Result<i32, &str> = Ok(5);
        let err: Result<i32, &str> = Err("boom");
        assert_eq!(ok.fold_left(0, |acc, n| acc + n), 5);
        assert_eq!(err.fold_left(0, |acc, n| acc + n), 0);
    }

    #[rstest]
    fn vec_fold_left_is_in_order() {
        let digits = vec![1, 2, 3];
        let rendered = digits.fold_left(String::new(), |mut acc, n| {
            acc.push_str(&n.to_string());
            acc
        });
        assert_eq!(rendered, "123");
    }

    #[rstest]
    fn vec_fold_right_is_reversed() {
        let digits = vec![1, 2, 3];
        let rendered = digits.fold_right(String::new(), |n, mut acc| {
            acc.push_str(&n.to_string());
            acc
        });
        assert_eq!(rendered, "321");
    }

    #[rstest]
    fn fold_map_through_monoids() {
        assert_eq!(vec![1, 2, 3].fold_map(Sum), Sum(6));
        assert_eq!(vec![1, 2, 3].fold_map(|n| Any(n > 2)), Any(true));
        assert_eq!(vec![1, 2, 3].fold_map(|n| All(n > 2)), All(false));
        assert_eq!(None::<i32>.fold_map(Sum), Sum(0));
    }

    #[rstest]
    fn derived_queries() {
        assert_eq!(vec![1, 2, 3].length(), 3);
        assert!(Vec::<i32>::new().is_empty());
        assert!(!vec![1].exists(|&n| n > 1));
        assert!(vec![1, 2].exists(|&n| n > 1));
        assert!(vec![2, 4].for_all(|&n| n % 2 == 0));
        assert!(vec![1, 2, 3].contains(&2));
        assert_eq!(vec![1, 2, 3].find(|&n| n > 1), Some(2));
        assert_eq!(Some(7).to_vec(), vec![7]);
    }

    #[rstest]
    fn identity_and_box_hold_exactly_one_element() {
        assert_eq!(Identity(5).length(), 1);
        assert_eq!(Box::new(5).length(), 1);
        assert!(!Identity(5).is_empty());
    }
}
