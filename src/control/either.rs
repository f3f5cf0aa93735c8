//! Either type - a value that is one of two alternatives.
//!
//! `Either<L, R>` is right-biased: the typeclass instances ([`Functor`],
//! [`Applicative`], [`Monad`], [`Foldable`], [`Traverse`]) all operate on the
//! `Right` slot and pass `Left` through untouched, mirroring `Result` with
//! `Left` in the role of `Err`. Conversions to and from `Result` are lossless
//! in both directions.
//!
//! # Examples
//!
//! ```rust
//! use kindling::control::Either;
//! use kindling::typeclass::Monad;
//!
//! let parsed: Either<String, i32> = Either::Right(21);
//! let doubled = parsed.flat_map(|n| Either::Right(n * 2));
//! assert_eq!(doubled, Either::Right(42));
//!
//! let failed: Either<String, i32> = Either::Left("bad input".to_string());
//! assert_eq!(failed.flat_map(|n| Either::Right(n * 2)), Either::Left("bad input".to_string()));
//! ```

use std::fmt;
use std::ops::ControlFlow;

use crate::typeclass::{Applicative, Foldable, Functor, FunctorRef, Kind, Monad, Traverse};

/// A value that is either `Left(L)` or `Right(R)`.
///
/// By convention `Left` carries the failure or the first alternative and
/// `Right` the success; everything generic over the element type works on
/// the right slot.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left alternative, conventionally the failure.
    Left(L),
    /// The right alternative, conventionally the success.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left`.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right`.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Consumes the either, returning the left value if present.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Consumes the either, returning the right value if present.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Applies a function to the left value, leaving a `Right` unchanged.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value, leaving a `Left` unchanged.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies one of two functions depending on the side.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Eliminates the either by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::control::Either;
    ///
    /// let value: Either<i32, String> = Either::Left(42);
    /// assert_eq!(value.fold(|n| n.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the sides: `Left(l)` becomes `Right(l)` and vice versa.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Returns the right value or computes a fallback from the left.
    #[inline]
    pub fn right_or_else<F>(self, fallback: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Left(value) => fallback(value),
            Self::Right(value) => value,
        }
    }

    /// Returns the right value.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left`.
    #[inline]
    #[track_caller]
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Self::Right(value) => value,
        }
    }

    /// Returns the left value.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right`.
    #[inline]
    #[track_caller]
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Typeclass instances - right-biased
// =============================================================================

impl<L, R> Kind for Either<L, R> {
    type Elem = R;
    type Of<B: 'static> = Either<L, B>;
}

impl<L: Clone, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map_right(function)
    }
}

impl<L: Clone, R> FunctorRef for Either<L, R> {
    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value.clone()),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

impl<L: Clone, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Right(left), Either::Right(right)) => Either::Right(function(left, right)),
            (Self::Left(error), _) | (_, Either::Left(error)) => Either::Left(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Either<L, B>,
        third: Either<L, C>,
        function: F,
    ) -> Either<L, D>
    where
        F: FnOnce(R, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Right(first), Either::Right(second), Either::Right(third)) => {
                Either::Right(function(first, second, third))
            }
            (Self::Left(error), _, _)
            | (_, Either::Left(error), _)
            | (_, _, Either::Left(error)) => Either::Left(error),
        }
    }
}

impl<L: Clone, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    fn tail_rec_m<B, F>(initial: R, mut step: F) -> Either<L, B>
    where
        F: FnMut(R) -> Either<L, ControlFlow<B, R>>,
    {
        let mut state = initial;
        loop {
            match step(state) {
                Either::Left(error) => return Either::Left(error),
                Either::Right(ControlFlow::Continue(next)) => state = next,
                Either::Right(ControlFlow::Break(done)) => return Either::Right(done),
            }
        }
    }
}

impl<L: Clone, R> Foldable for Either<L, R> {
    #[inline]
    fn fold_left<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(B, R) -> B,
    {
        match self {
            Self::Left(_) => initial,
            Self::Right(value) => function(initial, value),
        }
    }

    #[inline]
    fn fold_right<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(R, B) -> B,
    {
        match self {
            Self::Left(_) => initial,
            Self::Right(value) => function(value, initial),
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_left()
    }
}

impl<L: Clone, R> Traverse for Either<L, R> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Either<L, B>>
    where
        F: FnMut(R) -> Option<B>,
    {
        match self {
            Self::Left(value) => Some(Either::Left(value)),
            Self::Right(value) => function(value).map(Either::Right),
        }
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Either<L, B>, E>
    where
        F: FnMut(R) -> Result<B, E>,
    {
        match self {
            Self::Left(value) => Ok(Either::Left(value)),
            Self::Right(value) => function(value).map(Either::Right),
        }
    }
}

// =============================================================================
// Traversal into Either
// =============================================================================

/// Extends [`Traverse`] with `Either` as the target effect.
///
/// Blanket-implemented for every `Traverse` type; the first `Left` produced
/// by the function aborts the traversal.
///
/// # Examples
///
/// ```rust
/// use kindling::control::{Either, TraverseEither};
///
/// let halved: Either<&str, Vec<i32>> = vec![2, 4, 6]
///     .traverse_either(|n| if n % 2 == 0 { Either::Right(n / 2) } else { Either::Left("odd") });
/// assert_eq!(halved, Either::Right(vec![1, 2, 3]));
/// ```
pub trait TraverseEither: Traverse {
    /// Applies an `Either`-returning function to each element, collecting
    /// the results; the first `Left` is returned as a whole.
    fn traverse_either<L, B, F>(self, mut function: F) -> Either<L, Self::Of<B>>
    where
        Self: Sized,
        F: FnMut(Self::Elem) -> Either<L, B>,
        B: 'static,
    {
        match self.traverse_result(|element| Result::from(function(element))) {
            Ok(collected) => Either::Right(collected),
            Err(error) => Either::Left(error),
        }
    }

    /// Turns a structure of `Either`s inside out: `F<Either<L, A>>` becomes
    /// `Either<L, F<A>>`.
    fn sequence_either<L>(self) -> Either<L, Self::Of<<Self::Elem as Kind>::Elem>>
    where
        Self: Sized,
        Self::Elem: Kind + Into<Result<<Self::Elem as Kind>::Elem, L>>,
        <Self::Elem as Kind>::Elem: 'static,
    {
        match self.traverse_result(Into::into) {
            Ok(collected) => Either::Right(collected),
            Err(error) => Either::Left(error),
        }
    }
}

impl<T: Traverse> TraverseEither for T {}
