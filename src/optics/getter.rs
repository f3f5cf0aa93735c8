//! Getters are read-only single-focus optics.
//!
//! A [`Getter`] is the read half of a lens: it can view the focus but never
//! write it back. Any function `&S -> A` is a getter.
//!
//! # Examples
//!
//! ```rust
//! use kindling::optics::{FunctionGetter, Getter};
//!
//! let length = FunctionGetter::new(|s: &String| s.len());
//! assert_eq!(length.view(&"hello".to_string()), 5);
//! ```

use std::marker::PhantomData;

/// A read-only accessor for a value that is always present.
pub trait Getter<S, A> {
    /// Reads the focused value out of the source.
    fn view(&self, source: &S) -> A;

    /// Composes with a getter on the focused value.
    fn compose<B, G>(self, other: G) -> ComposedGetter<Self, G, A>
    where
        Self: Sized,
        G: Getter<A, B>,
    {
        ComposedGetter::new(self, other)
    }
}

/// A getter built from a single closure.
pub struct FunctionGetter<S, A, G> {
    getter: G,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G> FunctionGetter<S, A, G> {
    /// Wraps a function as a getter.
    #[must_use]
    pub const fn new(getter: G) -> Self {
        Self {
            getter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G> Getter<S, A> for FunctionGetter<S, A, G>
where
    G: Fn(&S) -> A,
{
    fn view(&self, source: &S) -> A {
        (self.getter)(source)
    }
}

impl<S, A, G: Clone> Clone for FunctionGetter<S, A, G> {
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G> std::fmt::Debug for FunctionGetter<S, A, G> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FunctionGetter").finish_non_exhaustive()
    }
}

/// Two getters run in sequence.
pub struct ComposedGetter<G1, G2, A> {
    first: G1,
    second: G2,
    _marker: PhantomData<A>,
}

impl<G1, G2, A> ComposedGetter<G1, G2, A> {
    /// Chains two getters.
    #[must_use]
    pub const fn new(first: G1, second: G2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, G1, G2> Getter<S, B> for ComposedGetter<G1, G2, A>
where
    G1: Getter<S, A>,
    G2: Getter<A, B>,
{
    fn view(&self, source: &S) -> B {
        self.second.view(&self.first.view(source))
    }
}

impl<G1: Clone, G2: Clone, A> Clone for ComposedGetter<G1, G2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<G1: std::fmt::Debug, G2: std::fmt::Debug, A> std::fmt::Debug for ComposedGetter<G1, G2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedGetter")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Clone, PartialEq, Debug)]
    struct Person {
        name: String,
    }

    #[rstest]
    fn view_reads_the_focus() {
        let name = FunctionGetter::new(|person: &Person| person.name.clone());
        let alice = Person {
            name: "alice".to_string(),
        };
        assert_eq!(name.view(&alice), "alice");
    }

    #[rstest]
    fn compose_chains_reads() {
        let name = FunctionGetter::new(|person: &Person| person.name.clone());
        let length = FunctionGetter::new(|s: &String| s.len());
        let name_length = name.compose(length);

        let alice = Person {
            name: "alice".to_string(),
        };
        assert_eq!(name_length.view(&alice), 5);
    }
}
