//! Optionals focus on at most one value.
//!
//! An [`Optional`] (affine traversal) is what composing a [`Lens`] with a
//! [`Prism`] produces: the focus may be absent, and writing to an absent
//! focus leaves the source unchanged.
//!
//! # Laws
//!
//! When the focus is present:
//!
//! 1. **GetOptionSet**: `optional.set(source.clone(), optional.get_option(&source).unwrap()) == source`
//! 2. **SetGetOption**: `optional.get_option(&optional.set(source, value)) == Some(value)`
//!
//! [`Lens`]: super::lens::Lens
//! [`Prism`]: super::prism::Prism

use std::marker::PhantomData;

/// A first-class accessor for a value that may be absent.
pub trait Optional<S, A> {
    /// Reads the focus if it is present.
    fn get_option(&self, source: &S) -> Option<A>;

    /// Writes the focus when present; an absent focus leaves the source
    /// unchanged.
    fn set(&self, source: S, value: A) -> S;

    /// Applies a function to the focus; an absent focus leaves the source
    /// unchanged.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        match self.get_option(&source) {
            Some(value) => self.set(source, function(value)),
            None => source,
        }
    }

    /// Applies a function to the focus, or yields `None` when it is absent.
    fn modify_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        let value = self.get_option(&source)?;
        Some(self.set(source, function(value)))
    }

    /// Tests whether the focus is present.
    fn is_present(&self, source: &S) -> bool {
        self.get_option(source).is_some()
    }

    /// Composes with an optional on the focused value.
    fn compose<B, O>(self, other: O) -> ComposedOptional<Self, O, A>
    where
        Self: Sized,
        O: Optional<A, B>,
    {
        ComposedOptional::new(self, other)
    }
}

/// An optional built from a getter and a setter closure.
pub struct FunctionOptional<S, A, G, St> {
    getter: G,
    setter: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> FunctionOptional<S, A, G, St> {
    /// Wraps a partial getter and a setter into an optional.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Optional<S, A> for FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    fn get_option(&self, source: &S) -> Option<A> {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G: Clone, St: Clone> Clone for FunctionOptional<S, A, G, St> {
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> std::fmt::Debug for FunctionOptional<S, A, G, St> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionOptional")
            .finish_non_exhaustive()
    }
}

/// Two optionals run in sequence; the composite focus is present only when
/// both are.
pub struct ComposedOptional<O1, O2, A> {
    first: O1,
    second: O2,
    _marker: PhantomData<A>,
}

impl<O1, O2, A> ComposedOptional<O1, O2, A> {
    /// Chains two optionals.
    #[must_use]
    pub const fn new(first: O1, second: O2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, O1, O2> Optional<S, B> for ComposedOptional<O1, O2, A>
where
    O1: Optional<S, A>,
    O2: Optional<A, B>,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.first
            .get_option(source)
            .and_then(|intermediate| self.second.get_option(&intermediate))
    }

    fn set(&self, source: S, value: B) -> S {
        match self.first.get_option(&source) {
            Some(intermediate) => {
                let updated = self.second.set(intermediate, value);
                self.first.set(source, updated)
            }
            None => source,
        }
    }
}

impl<O1: Clone, O2: Clone, A> Clone for ComposedOptional<O1, O2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<O1: std::fmt::Debug, O2: std::fmt::Debug, A> std::fmt::Debug for ComposedOptional<O1, O2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedOptional")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn head_optional() -> impl Optional<Vec<i32>, i32> {
        FunctionOptional::new(
            |source: &Vec<i32>| source.first().copied(),
            |mut source: Vec<i32>, value| {
                if let Some(head) = source.first_mut() {
                    *head = value;
                }
                source
            },
        )
    }

    #[rstest]
    fn get_option_reads_the_present_focus() {
        let head = head_optional();
        assert_eq!(head.get_option(&vec![1, 2, 3]), Some(1));
        assert_eq!(head.get_option(&vec![]), None);
    }

    #[rstest]
    fn set_writes_only_when_present() {
        let head = head_optional();
        assert_eq!(head.set(vec![1, 2, 3], 9), vec![9, 2, 3]);
        assert_eq!(head.set(vec![], 9), Vec::<i32>::new());
    }

    #[rstest]
    fn modify_leaves_absent_sources_untouched() {
        let head = head_optional();
        assert_eq!(head.modify(vec![1, 2], |n| n * 10), vec![10, 2]);
        assert_eq!(head.modify(vec![], |n| n * 10), Vec::<i32>::new());
    }

    #[rstest]
    fn modify_option_signals_absence() {
        let head = head_optional();
        assert_eq!(head.modify_option(vec![1, 2], |n| n + 1), Some(vec![2, 2]));
        assert_eq!(head.modify_option(vec![], |n| n + 1), None);
    }

    #[rstest]
    fn is_present_checks_the_focus() {
        let head = head_optional();
        assert!(head.is_present(&vec![1]));
        assert!(!head.is_present(&vec![]));
    }

    #[rstest]
    fn compose_chains_two_optionals() {
        let outer = head_optional();
        let composed = FunctionOptional::new(
            |source: &Vec<Vec<i32>>| source.first().cloned(),
            |mut source: Vec<Vec<i32>>, value: Vec<i32>| {
                if let Some(head) = source.first_mut() {
                    *head = value;
                }
                source
            },
        )
        .compose(outer);

        assert_eq!(composed.get_option(&vec![vec![1, 2], vec![3]]), Some(1));
        assert_eq!(composed.get_option(&vec![vec![], vec![3]]), None);
        assert_eq!(
            composed.set(vec![vec![1, 2], vec![3]], 9),
            vec![vec![9, 2], vec![3]]
        );
        assert_eq!(composed.set(vec![], 9), Vec::<Vec<i32>>::new());
    }

    #[rstest]
    fn get_option_set_law() {
        let head = head_optional();
        let source = vec![1, 2, 3];
        let focus = head.get_option(&source).unwrap();
        assert_eq!(head.set(source.clone(), focus), source);
    }

    #[rstest]
    fn set_get_option_law() {
        let head = head_optional();
        assert_eq!(head.get_option(&head.set(vec![1, 2], 9)), Some(9));
    }
}
