//! Setters are write-only optics.
//!
//! A [`Setter`] can rewrite its foci but never read them. Every lens, prism,
//! optional, and traversal weakens into a setter through the composition
//! layer.
//!
//! # Examples
//!
//! ```rust
//! use kindling::optics::{FunctionSetter, Setter};
//!
//! let each = FunctionSetter::new(|source: Vec<i32>, function: &mut dyn FnMut(i32) -> i32| {
//!     source.into_iter().map(function).collect()
//! });
//! assert_eq!(each.over(vec![1, 2, 3], |n| n * 2), vec![2, 4, 6]);
//! ```

use std::marker::PhantomData;

/// A write-only accessor over zero or more values.
pub trait Setter<S, A> {
    /// Rewrites every focus with the function.
    fn over<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A;

    /// Replaces every focus with the same value.
    fn set(&self, source: S, value: A) -> S
    where
        A: Clone,
    {
        self.over(source, |_| value.clone())
    }

    /// Composes with a setter on each focus.
    fn compose<B, St>(self, other: St) -> ComposedSetter<Self, St, A>
    where
        Self: Sized,
        St: Setter<A, B>,
    {
        ComposedSetter::new(self, other)
    }
}

/// A setter built from a mapping closure.
///
/// The closure receives the source and the rewrite function as a trait
/// object, so one closure type serves every rewrite.
pub struct FunctionSetter<S, A, M> {
    mapper: M,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, M> FunctionSetter<S, A, M> {
    /// Wraps a mapping function as a setter.
    #[must_use]
    pub const fn new(mapper: M) -> Self {
        Self {
            mapper,
            _marker: PhantomData,
        }
    }
}

impl<S, A, M> Setter<S, A> for FunctionSetter<S, A, M>
where
    M: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    fn over<F>(&self, source: S, mut function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        (self.mapper)(source, &mut function)
    }
}

impl<S, A, M: Clone> Clone for FunctionSetter<S, A, M> {
    fn clone(&self) -> Self {
        Self {
            mapper: self.mapper.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, M> std::fmt::Debug for FunctionSetter<S, A, M> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FunctionSetter").finish_non_exhaustive()
    }
}

/// Two setters run in sequence.
pub struct ComposedSetter<S1, S2, A> {
    first: S1,
    second: S2,
    _marker: PhantomData<A>,
}

impl<S1, S2, A> ComposedSetter<S1, S2, A> {
    /// Chains two setters.
    #[must_use]
    pub const fn new(first: S1, second: S2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, S1, S2> Setter<S, B> for ComposedSetter<S1, S2, A>
where
    S1: Setter<S, A>,
    S2: Setter<A, B>,
{
    fn over<F>(&self, source: S, mut function: F) -> S
    where
        F: FnMut(B) -> B,
    {
        self.first.over(source, |intermediate| {
            self.second.over(intermediate, &mut function)
        })
    }
}

impl<S1: Clone, S2: Clone, A> Clone for ComposedSetter<S1, S2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S1: std::fmt::Debug, S2: std::fmt::Debug, A> std::fmt::Debug for ComposedSetter<S1, S2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedSetter")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}
