//! Traversals focus on zero or more values at once.
//!
//! A [`Traversal`] visits every focus in order: reads collect them into a
//! `Vec`, writes rebuild the source with each focus replaced. A lens is the
//! one-focus special case and an optional the at-most-one case; both convert
//! into traversals through the composition layer.
//!
//! # Examples
//!
//! ```rust
//! use kindling::optics::{Traversal, VecTraversal};
//!
//! let each = VecTraversal::new();
//! assert_eq!(each.get_all(&vec![1, 2, 3]), vec![1, 2, 3]);
//! assert_eq!(each.modify_all(vec![1, 2, 3], |n| n * 10), vec![10, 20, 30]);
//! ```

use std::marker::PhantomData;

/// A first-class accessor for every element of a structure.
pub trait Traversal<S, A> {
    /// Collects every focus in traversal order.
    fn get_all(&self, source: &S) -> Vec<A>;

    /// Rewrites every focus with the function, preserving structure.
    fn modify_all<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A;

    /// Collects every focus, consuming the source.
    fn get_all_owned(&self, source: S) -> Vec<A> {
        self.get_all(&source)
    }

    /// Replaces every focus with the same value.
    fn set_all(&self, source: S, value: A) -> S
    where
        A: Clone,
    {
        self.modify_all(source, |_| value.clone())
    }

    /// Folds over the foci in traversal order.
    fn fold<B, F>(&self, source: &S, initial: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.get_all(source).into_iter().fold(initial, function)
    }

    /// Counts the foci.
    fn length(&self, source: &S) -> usize {
        self.get_all(source).len()
    }

    /// Tests whether any focus satisfies the predicate.
    fn exists<P>(&self, source: &S, predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.get_all(source).iter().any(predicate)
    }

    /// Tests whether every focus satisfies the predicate.
    fn for_all<P>(&self, source: &S, predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.get_all(source).iter().all(predicate)
    }

    /// Reads the first focus, if any.
    fn head_option(&self, source: &S) -> Option<A> {
        self.get_all(source).into_iter().next()
    }

    /// Composes with a traversal on each focus.
    fn compose<B, T>(self, other: T) -> ComposedTraversal<Self, T, A>
    where
        Self: Sized,
        T: Traversal<A, B>,
    {
        ComposedTraversal::new(self, other)
    }
}

/// The traversal over every element of a `Vec`.
pub struct VecTraversal<A> {
    _marker: PhantomData<A>,
}

impl<A> VecTraversal<A> {
    /// Creates the element traversal.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A> Default for VecTraversal<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Clone> Traversal<Vec<A>, A> for VecTraversal<A> {
    fn get_all(&self, source: &Vec<A>) -> Vec<A> {
        source.clone()
    }

    fn modify_all<F>(&self, source: Vec<A>, function: F) -> Vec<A>
    where
        F: FnMut(A) -> A,
    {
        source.into_iter().map(function).collect()
    }

    fn get_all_owned(&self, source: Vec<A>) -> Vec<A> {
        source
    }
}

impl<A> Clone for VecTraversal<A> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<A> std::fmt::Debug for VecTraversal<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("VecTraversal").finish()
    }
}

/// Two traversals run in sequence; the composite visits every inner focus of
/// every outer focus.
pub struct ComposedTraversal<T1, T2, A> {
    first: T1,
    second: T2,
    _marker: PhantomData<A>,
}

impl<T1, T2, A> ComposedTraversal<T1, T2, A> {
    /// Chains two traversals.
    #[must_use]
    pub const fn new(first: T1, second: T2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, T1, T2> Traversal<S, B> for ComposedTraversal<T1, T2, A>
where
    T1: Traversal<S, A>,
    T2: Traversal<A, B>,
{
    fn get_all(&self, source: &S) -> Vec<B> {
        self.first
            .get_all(source)
            .into_iter()
            .flat_map(|intermediate| self.second.get_all_owned(intermediate))
            .collect()
    }

    fn modify_all<F>(&self, source: S, mut function: F) -> S
    where
        F: FnMut(B) -> B,
    {
        self.first.modify_all(source, |intermediate| {
            self.second.modify_all(intermediate, &mut function)
        })
    }
}

impl<T1: Clone, T2: Clone, A> Clone for ComposedTraversal<T1, T2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T1: std::fmt::Debug, T2: std::fmt::Debug, A> std::fmt::Debug
    for ComposedTraversal<T1, T2, A>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedTraversal")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn get_all_collects_in_order() {
        let each = VecTraversal::new();
        assert_eq!(each.get_all(&vec![1, 2, 3]), vec![1, 2, 3]);
        assert_eq!(each.get_all(&Vec::<i32>::new()), Vec::<i32>::new());
    }

    #[rstest]
    fn modify_all_rewrites_every_focus() {
        let each = VecTraversal::new();
        assert_eq!(each.modify_all(vec![1, 2, 3], |n| n * 10), vec![10, 20, 30]);
    }

    #[rstest]
    fn set_all_replaces_every_focus() {
        let each = VecTraversal::new();
        assert_eq!(each.set_all(vec![1, 2, 3], 0), vec![0, 0, 0]);
    }

    #[rstest]
    fn fold_accumulates_in_order() {
        let each = VecTraversal::new();
        assert_eq!(each.fold(&vec![1, 2, 3], 0, |sum, n| sum + n), 6);

        let words = VecTraversal::new();
        assert_eq!(
            words.fold(&vec!["a", "b"], String::new(), |acc, s| acc + s),
            "ab"
        );
    }

    #[rstest]
    fn length_exists_and_for_all() {
        let each = VecTraversal::new();
        assert_eq!(each.length(&vec![1, 2, 3]), 3);
        assert!(each.exists(&vec![1, 2, 3], |n| *n == 2));
        assert!(!each.exists(&vec![1, 3], |n| *n == 2));
        assert!(each.for_all(&vec![2, 4], |n| n % 2 == 0));
        assert!(!each.for_all(&vec![2, 3], |n| n % 2 == 0));
    }

    #[rstest]
    fn head_option_reads_the_first_focus() {
        let each = VecTraversal::new();
        assert_eq!(each.head_option(&vec![7, 8]), Some(7));
        assert_eq!(each.head_option(&Vec::<i32>::new()), None);
    }

    #[rstest]
    fn compose_visits_nested_foci() {
        let nested = VecTraversal::new().compose(VecTraversal::new());
        let source = vec![vec![1, 2], vec![3]];

        assert_eq!(nested.get_all(&source), vec![1, 2, 3]);
        assert_eq!(
            nested.modify_all(source, |n| n + 1),
            vec![vec![2, 3], vec![4]]
        );
    }

    #[rstest]
    fn get_all_owned_avoids_the_clone() {
        let each = VecTraversal::new();
        assert_eq!(each.get_all_owned(vec![1, 2, 3]), vec![1, 2, 3]);
    }
}
