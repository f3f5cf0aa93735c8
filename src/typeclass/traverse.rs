//! Traverse type class - mapping with effects and collecting the results.
//!
//! `traverse` applies a fallible function to every element and pulls the
//! effect outward: mapping `Vec<&str>` with a parser returning `Option<i32>`
//! yields `Option<Vec<i32>>`, `Some` only when every parse succeeded.
//!
//! Without higher-kinded types a single `traverse` generic over any
//! applicative is not expressible, so the trait exposes one method per
//! target effect: [`Traverse::traverse_option`] and
//! [`Traverse::traverse_result`]. Both short-circuit on the first failure.
//!
//! # Examples
//!
//! ```rust
//! use kindling::typeclass::Traverse;
//!
//! let parsed: Option<Vec<i32>> = vec!["1", "2", "3"].traverse_option(|s| s.parse().ok());
//! assert_eq!(parsed, Some(vec![1, 2, 3]));
//!
//! let failed: Option<Vec<i32>> = vec!["1", "x"].traverse_option(|s| s.parse().ok());
//! assert_eq!(failed, None);
//! ```

use super::foldable::Foldable;
use super::functor::Functor;
use super::higher::Kind;
use super::identity::Identity;

/// A type class for structures that can be traversed with effects.
///
/// # Laws
///
/// - **Identity**: traversing with a pure function is plain mapping:
///   `fa.traverse_option(|a| Some(f(a))) == Some(fa.fmap(f))`
/// - **Naturality**: converting the effect after traversing equals
///   traversing with the converted function.
pub trait Traverse: Functor + Foldable {
    /// Applies an `Option`-returning function to each element, collecting
    /// the results; `None` from any element makes the whole result `None`.
    fn traverse_option<B, F>(self, function: F) -> Option<Self::Of<B>>
    where
        F: FnMut(Self::Elem) -> Option<B>,
        B: 'static;

    /// Applies a `Result`-returning function to each element, collecting
    /// the results; the first `Err` is returned as a whole.
    fn traverse_result<B, E, F>(self, function: F) -> Result<Self::Of<B>, E>
    where
        F: FnMut(Self::Elem) -> Result<B, E>,
        B: 'static;

    /// Turns a structure of `Option`s inside out: `F<Option<A>>` becomes
    /// `Option<F<A>>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Traverse;
    ///
    /// assert_eq!(vec![Some(1), Some(2)].sequence_option(), Some(vec![1, 2]));
    /// assert_eq!(vec![Some(1), None].sequence_option(), None);
    /// ```
    fn sequence_option(self) -> Option<Self::Of<<Self::Elem as Kind>::Elem>>
    where
        Self: Sized,
        Self::Elem: Kind + Into<Option<<Self::Elem as Kind>::Elem>>,
        <Self::Elem as Kind>::Elem: 'static,
    {
        self.traverse_option(Into::into)
    }

    /// Turns a structure of `Result`s inside out: `F<Result<A, E>>` becomes
    /// `Result<F<A>, E>`.
    fn sequence_result<E>(self) -> Result<Self::Of<<Self::Elem as Kind>::Elem>, E>
    where
        Self: Sized,
        Self::Elem: Kind + Into<Result<<Self::Elem as Kind>::Elem, E>>,
        <Self::Elem as Kind>::Elem: 'static,
    {
        self.traverse_result(Into::into)
    }

    /// Runs an `Option`-returning action on each element for its effect,
    /// discarding results.
    fn for_each_option<F>(self, function: F) -> Option<()>
    where
        Self: Sized,
        F: FnMut(Self::Elem) -> Option<()>,
    {
        self.traverse_option(function).map(|_| ())
    }

    /// Runs a `Result`-returning action on each element for its effect,
    /// discarding results.
    fn for_each_result<E, F>(self, function: F) -> Result<(), E>
    where
        Self: Sized,
        F: FnMut(Self::Elem) -> Result<(), E>,
    {
        self.traverse_result(function).map(|_| ())
    }
}

// =============================================================================
// Option<A>
// =============================================================================

impl<A> Traverse for Option<A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Option<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        match self {
            Some(value) => function(value).map(Some),
            None => Some(None),
        }
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Option<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        match self {
            Some(value) => function(value).map(Some),
            None => Ok(None),
        }
    }
}

// =============================================================================
// Result<T, E>
// =============================================================================

impl<T, E: Clone> Traverse for Result<T, E> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Result<B, E>>
    where
        F: FnMut(T) -> Option<B>,
    {
        match self {
            Ok(value) => function(value).map(Ok),
            Err(error) => Some(Err(error)),
        }
    }

    fn traverse_result<B, E2, F>(self, mut function: F) -> Result<Result<B, E>, E2>
    where
        F: FnMut(T) -> Result<B, E2>,
    {
        match self {
            Ok(value) => function(value).map(Ok),
            Err(error) => Ok(Err(error)),
        }
    }
}

// =============================================================================
// Vec<A>
// =============================================================================

impl<A> Traverse for Vec<A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Vec<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        let mut collected = Vec::with_capacity(self.len());
        for element in self {
            collected.push(function(element)?);
        }
        Some(collected)
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Vec<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        let mut collected = Vec::with_capacity(self.len());
        for element in self {
            collected.push(function(element)?);
        }
        Ok(collected)
    }
}

// =============================================================================
// Box<A>
// =============================================================================

impl<A> Traverse for Box<A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Box<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        function(*self).map(Box::new)
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Box<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        function(*self).map(Box::new)
    }
}

// =============================================================================
// Identity<A>
// =============================================================================

impl<A> Traverse for Identity<A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Identity<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        function(self.0).map(Identity)
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Identity<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        function(self.0).map(Identity)
    }
}
