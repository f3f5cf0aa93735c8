//! Monad type class - sequencing computations within a context.
//!
//! [`Monad`] extends [`Applicative`] with `flat_map`, letting each step of a
//! computation depend on the result of the previous one, and with
//! [`tail_rec_m`](Monad::tail_rec_m), the iterative fixpoint every instance
//! must provide so that monadic loops never grow the call stack.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy:
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Stack safety
//!
//! Recursing through `flat_map` alone is only as safe as the instance's own
//! `flat_map`, and for strict types that means one stack frame per step.
//! `tail_rec_m` is the contract that makes unbounded monadic iteration safe:
//! every instance implements it as a plain loop over
//! [`ControlFlow`](std::ops::ControlFlow) steps, so a hundred thousand
//! iterations cost a hundred thousand loop turns, not stack frames.
//!
//! ```rust
//! use std::ops::ControlFlow;
//! use kindling::typeclass::Monad;
//!
//! // Sum 1..=100_000 without touching the call stack.
//! let total = <Option<(u64, u64)> as Monad>::tail_rec_m((0, 0), |(i, sum)| {
//!     if i == 100_000 {
//!         Some(ControlFlow::Break(sum))
//!     } else {
//!         Some(ControlFlow::Continue((i + 1, sum + i + 1)))
//!     }
//! });
//! assert_eq!(total, Some(5_000_050_000));
//! ```

use std::ops::ControlFlow;

use super::applicative::Applicative;
use super::higher::Kind;
use super::identity::Identity;

/// A type class for sequencing computations with data dependency.
///
/// # Laws
///
/// - **Left Identity**: `Self::pure(a).flat_map(f) == f(a)`
/// - **Right Identity**: `m.flat_map(Self::pure) == m`
/// - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
///
/// # Examples
///
/// ```rust
/// use kindling::typeclass::Monad;
///
/// let result = Some(5).flat_map(|n| if n > 0 { Some(n * 2) } else { None });
/// assert_eq!(result, Some(10));
/// ```
pub trait Monad: Applicative {
    /// Applies a monad-returning function to the inner value and flattens.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Monad;
    ///
    /// fn parse_positive(s: &str) -> Option<i32> {
    ///     s.parse::<i32>().ok().filter(|&n| n > 0)
    /// }
    ///
    /// let result = Some("42").flat_map(parse_positive).flat_map(|n| Some(n * 2));
    /// assert_eq!(result, Some(84));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::Of<B>
    where
        F: FnOnce(Self::Elem) -> Self::Of<B> + 'static,
        B: 'static;

    /// Repeatedly steps a monadic state machine until it breaks, using
    /// constant stack.
    ///
    /// `step` maps the current loop state to a contextual
    /// [`ControlFlow`]: `Continue(next)` keeps looping, `Break(done)`
    /// finishes. Instances implement this with an explicit loop; it is the
    /// primitive that keeps monadic recursion stack-safe for types whose
    /// `flat_map` is strict.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::ops::ControlFlow;
    /// use kindling::typeclass::Monad;
    ///
    /// let countdown = <Result<u32, String> as Monad>::tail_rec_m(3, |n| {
    ///     if n == 0 {
    ///         Ok(ControlFlow::Break("liftoff".to_string()))
    ///     } else {
    ///         Ok(ControlFlow::Continue(n - 1))
    ///     }
    /// });
    /// assert_eq!(countdown, Ok("liftoff".to_string()));
    /// ```
    fn tail_rec_m<B, F>(initial: Self::Elem, step: F) -> Self::Of<B>
    where
        F: FnMut(Self::Elem) -> Self::Of<ControlFlow<B, Self::Elem>> + 'static,
        Self::Elem: 'static,
        B: 'static;

    /// Alias for `flat_map`, matching `Option::and_then` naming.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::Of<B>
    where
        Self: Sized,
        F: FnOnce(Self::Elem) -> Self::Of<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    #[inline]
    fn then<B>(self, next: Self::Of<B>) -> Self::Of<B>
    where
        Self: Sized,
        Self::Of<B>: 'static,
        B: 'static,
    {
        self.flat_map(move |_| next)
    }

    /// Collapses one level of nesting: `F<F<B>>` into `F<B>`.
    ///
    /// Only available when the inner value really is another layer of the
    /// same family; the `Kind<Elem = Inner, Of<B> = Inner>` bound pins that
    /// down.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Monad;
    ///
    /// let nested: Option<Option<i32>> = Some(Some(5));
    /// assert_eq!(nested.flatten(), Some(5));
    /// ```
    #[inline]
    fn flatten<B, Inner>(self) -> Inner
    where
        Self: Sized + Kind<Elem = Inner, Of<B> = Inner>,
        Inner: 'static,
        B: 'static,
    {
        self.flat_map::<B, _>(|inner| inner)
    }
}

// =============================================================================
// Option<A>
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.and_then(function)
    }

    fn tail_rec_m<B, F>(initial: A, mut step: F) -> Option<B>
    where
        F: FnMut(A) -> Option<ControlFlow<B, A>>,
    {
        let mut state = initial;
        loop {
            match step(state)? {
                ControlFlow::Continue(next) => state = next,
                ControlFlow::Break(done) => return Some(done),
            }
        }
    }
}

// =============================================================================
// Result<T, E>
// =============================================================================

impl<T, E: Clone> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        self.and_then(function)
    }

    fn tail_rec_m<B, F>(initial: T, mut step: F) -> Result<B, E>
    where
        F: FnMut(T) -> Result<ControlFlow<B, T>, E>,
    {
        let mut state = initial;
        loop {
            match step(state)? {
                ControlFlow::Continue(next) => state = next,
                ControlFlow::Break(done) => return Ok(done),
            }
        }
    }
}

// =============================================================================
// Box<T>
// =============================================================================

impl<T> Monad for Box<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Box<B>
    where
        F: FnOnce(T) -> Box<B>,
    {
        function(*self)
    }

    fn tail_rec_m<B, F>(initial: T, mut step: F) -> Box<B>
    where
        F: FnMut(T) -> Box<ControlFlow<B, T>>,
    {
        let mut state = initial;
        loop {
            match *step(state) {
                ControlFlow::Continue(next) => state = next,
                ControlFlow::Break(done) => return Box::new(done),
            }
        }
    }
}

// =============================================================================
// Identity<A>
// =============================================================================

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }

    fn tail_rec_m<B, F>(initial: A, mut step: F) -> Identity<B>
    where
        F: FnMut(A) -> Identity<ControlFlow<B, A>>,
    {
        let mut state = initial;
        loop {
            match step(state).0 {
                ControlFlow::Continue(next) => state = next,
                ControlFlow::Break(done) => return Identity(done),
            }
        }
    }
}

// =============================================================================
// Vec<A> - nondeterminism via a dedicated trait
// =============================================================================

/// The monadic structure of `Vec`, as a separate trait.
///
/// `Monad::flat_map` takes `FnOnce`, which cannot branch from every element;
/// `Vec` provides its bind through `FnMut` here instead. There is no
/// `tail_rec_m` for `Vec`: an iterative rendition of nondeterministic
/// recursion would need to clone the step closure per branch, which `FnMut`
/// does not permit.
///
/// # Examples
///
/// ```rust
/// use kindling::typeclass::MonadVec;
///
/// let result = vec![1, 2, 3].flat_map_mut(|n| vec![n, n * 10]);
/// assert_eq!(result, vec![1, 10, 2, 20, 3, 30]);
/// ```
pub trait MonadVec: Sized {
    /// The element type of the vector.
    type Item;

    /// Applies a vector-returning function to every element and concatenates.
    fn flat_map_mut<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(Self::Item) -> Vec<B>;

    /// Collapses one level of nesting.
    fn flatten<B>(self) -> Vec<B>
    where
        Self: MonadVec<Item = Vec<B>>,
    {
        self.flat_map_mut(|inner| inner)
    }
}

impl<A> MonadVec for Vec<A> {
    type Item = A;

    #[inline]
    fn flat_map_mut<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(A) -> Vec<B>,
    {
        self.into_iter().flat_map(function).collect()
    }
}
