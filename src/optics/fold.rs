//! Folds are read-only many-focus optics.
//!
//! A [`FoldOptic`] collects zero or more foci without being able to write
//! any of them back. A [`Traversal`](super::traversal::Traversal) is a fold
//! that can also write; a [`Getter`](super::getter::Getter) is a fold with
//! exactly one focus. Both convert through the composition layer.

use std::marker::PhantomData;

/// A read-only accessor for zero or more values.
pub trait FoldOptic<S, A> {
    /// Collects every focus in order.
    fn get_all(&self, source: &S) -> Vec<A>;

    /// Folds over the foci in order.
    fn fold_left<B, F>(&self, source: &S, initial: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.get_all(source).into_iter().fold(initial, function)
    }

    /// Counts the foci.
    fn length(&self, source: &S) -> usize {
        self.get_all(source).len()
    }

    /// Tests whether there are no foci.
    fn is_empty(&self, source: &S) -> bool {
        self.get_all(source).is_empty()
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

    /// Composes with a fold on each focus.
    fn compose<B, F>(self, other: F) -> ComposedFold<Self, F, A>
    where
        Self: Sized,
        F: FoldOptic<A, B>,
    {
        ComposedFold::new(self, other)
    }
}

/// A fold built from a single collecting closure.
pub struct FunctionFold<S, A, G> {
    collector: G,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G> FunctionFold<S, A, G> {
    /// Wraps a collecting function as a fold.
    #[must_use]
    pub const fn new(collector: G) -> Self {
        Self {
            collector,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G> FoldOptic<S, A> for FunctionFold<S, A, G>
where
    G: Fn(&S) -> Vec<A>,
{
    fn get_all(&self, source: &S) -> Vec<A> {
        (self.collector)(source)
    }
}

impl<S, A, G: Clone> Clone for FunctionFold<S, A, G> {
    fn clone(&self) -> Self {
        Self {
            collector: self.collector.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G> std::fmt::Debug for FunctionFold<S, A, G> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FunctionFold").finish_non_exhaustive()
    }
}

/// Two folds run in sequence; the composite visits every inner focus of
/// every outer focus.
pub struct ComposedFold<F1, F2, A> {
    first: F1,
    second: F2,
    _marker: PhantomData<A>,
}

impl<F1, F2, A> ComposedFold<F1, F2, A> {
    /// Chains two folds.
    #[must_use]
    pub const fn new(first: F1, second: F2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, F1, F2> FoldOptic<S, B> for ComposedFold<F1, F2, A>
where
    F1: FoldOptic<S, A>,
    F2: FoldOptic<A, B>,
{
    fn get_all(&self, source: &S) -> Vec<B> {
        self.first
            .get_all(source)
            .into_iter()
            .flat_map(|intermediate| self.second.get_all(&intermediate))
            .collect()
    }
}

impl<F1: Clone, F2: Clone, A> Clone for ComposedFold<F1, F2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F1: std::fmt::Debug, F2: std::fmt::Debug, A> std::fmt::Debug for ComposedFold<F1, F2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedFold")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn evens() -> impl FoldOptic<Vec<i32>, i32> {
        FunctionFold::new(|source: &Vec<i32>| {
            source.iter().copied().filter(|n| n % 2 == 0).collect()
        })
    }

    #[rstest]
    fn get_all_collects_the_foci() {
        assert_eq!(evens().get_all(&vec![1, 2, 3, 4]), vec![2, 4]);
        assert_eq!(evens().get_all(&vec![1, 3]), Vec::<i32>::new());
    }

    #[rstest]
    fn fold_left_accumulates() {
        assert_eq!(evens().fold_left(&vec![1, 2, 3, 4], 0, |sum, n| sum + n), 6);
    }

    #[rstest]
    fn length_and_is_empty() {
        assert_eq!(evens().length(&vec![1, 2, 4]), 2);
        assert!(evens().is_empty(&vec![1, 3]));
    }

    #[rstest]
    fn exists_for_all_and_head_option() {
        assert!(evens().exists(&vec![1, 2], |n| *n == 2));
        assert!(evens().for_all(&vec![2, 4], |n| *n > 0));
        assert_eq!(evens().head_option(&vec![1, 2, 4]), Some(2));
        assert_eq!(evens().head_option(&vec![1, 3]), None);
    }

    #[rstest]
    fn compose_flattens_nested_foci() {
        let rows = FunctionFold::new(|source: &Vec<Vec<i32>>| source.clone());
        let flattened = rows.compose(evens());

        assert_eq!(flattened.get_all(&vec![vec![1, 2], vec![3, 4]]), vec![2, 4]);
    }
}
