//! `MonadError` - monads with a typed error channel.
//!
//! [`MonadError`] extends [`Monad`] with two primitives: `throw_error` puts
//! an error into the context, `catch_error` takes one back out and hands it
//! to a handler. Everything else here - recovery, validation, adapting and
//! materializing errors - derives from those two plus `pure`.
//!
//! Domain errors flow through the channel as ordinary values; they are never
//! panics and never silently coerced to another type.
//!
//! # Laws
//!
//! All `MonadError` implementations must satisfy:
//!
//! ## Catch of Throw
//!
//! ```text
//! catch_error(throw_error(e), h) == h(e)
//! ```
//!
//! ## Catch of Pure
//!
//! ```text
//! catch_error(pure(a), h) == pure(a)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindling::effect::MonadError;
//!
//! let failed: Result<i32, String> = <Result<i32, String>>::throw_error("missing".to_string());
//! let recovered = <Result<i32, String>>::handle_error(failed, |_| 0);
//! assert_eq!(recovered, Ok(0));
//! ```

use crate::control::Either;
use crate::typeclass::{Functor, Kind, Monad};

/// A type class for monads that carry a typed error channel.
///
/// `throw_error` and `catch_error` are the primitives; the remaining
/// operations are derived, with `attempt` defined as
/// `catch_error(fa.fmap(Ok), |e| pure(Err(e)))` so that materialized errors
/// are exactly the thrown ones.
pub trait MonadError<E>: Monad {
    /// Lifts an error into the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::MonadError;
    ///
    /// let failed: Result<i32, String> = <Result<i32, String>>::throw_error("boom".to_string());
    /// assert_eq!(failed, Err("boom".to_string()));
    /// ```
    fn throw_error<A>(error: E) -> Self::Of<A>
    where
        A: 'static;

    /// Hands a thrown error to a handler; successes pass through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::MonadError;
    ///
    /// let failed: Result<i32, String> = Err("boom".to_string());
    /// let handled = <Result<i32, String>>::catch_error(failed, |_| Ok(0));
    /// assert_eq!(handled, Ok(0));
    /// ```
    fn catch_error<A, F>(computation: Self::Of<A>, handler: F) -> Self::Of<A>
    where
        F: FnOnce(E) -> Self::Of<A> + 'static,
        A: 'static;

    /// Lifts a `Result` into the context: `Ok` becomes `pure`, `Err` is
    /// thrown.
    fn from_result<A>(result: Result<A, E>) -> Self::Of<A>
    where
        A: 'static,
        E: 'static,
    {
        match result {
            Ok(value) => Self::pure(value),
            Err(error) => Self::throw_error(error),
        }
    }

    /// Recovers from any error with a plain value.
    fn handle_error<A, F>(computation: Self::Of<A>, handler: F) -> Self::Of<A>
    where
        F: FnOnce(E) -> A + 'static,
        A: 'static,
    {
        Self::catch_error(computation, move |error| Self::pure(handler(error)))
    }

    /// Falls back to a default computation when an error is thrown.
    fn recover_with<A>(computation: Self::Of<A>, default: Self::Of<A>) -> Self::Of<A>
    where
        Self::Of<A>: 'static,
        A: 'static,
    {
        Self::catch_error(computation, move |_| default)
    }

    /// Recovers from the errors a partial handler matches; unmatched errors
    /// are rethrown unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::MonadError;
    ///
    /// #[derive(Debug, Clone, PartialEq)]
    /// enum Lookup {
    ///     NotFound,
    ///     Unauthorized,
    /// }
    ///
    /// let missing: Result<i32, Lookup> = Err(Lookup::NotFound);
    /// let recovered = <Result<i32, Lookup>>::recover(missing, |error| match error {
    ///     Lookup::NotFound => Some(0),
    ///     Lookup::Unauthorized => None,
    /// });
    /// assert_eq!(recovered, Ok(0));
    /// ```
    fn recover<A, F>(computation: Self::Of<A>, partial_handler: F) -> Self::Of<A>
    where
        F: FnOnce(&E) -> Option<A> + 'static,
        A: 'static,
        E: 'static,
    {
        Self::catch_error(computation, move |error| {
            match partial_handler(&error) {
                Some(value) => Self::pure(value),
                None => Self::throw_error(error),
            }
        })
    }

    /// Transforms a thrown error while staying in the same error type.
    fn adapt_error<A, F>(computation: Self::Of<A>, transform: F) -> Self::Of<A>
    where
        F: FnOnce(E) -> E + 'static,
        A: 'static,
        E: 'static,
    {
        Self::catch_error(computation, move |error| {
            Self::throw_error(transform(error))
        })
    }

    /// Validates the success value, throwing a lazily built error when the
    /// predicate rejects it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::MonadError;
    ///
    /// fn check_age(age: i32) -> Result<i32, String> {
    ///     <Result<i32, String>>::ensure(
    ///         Ok(age),
    ///         || "age out of range".to_string(),
    ///         |&a| (0..=150).contains(&a),
    ///     )
    /// }
    ///
    /// assert_eq!(check_age(25), Ok(25));
    /// assert_eq!(check_age(-5), Err("age out of range".to_string()));
    /// ```
    fn ensure<A, F, P>(computation: Self::Of<A>, error: F, predicate: P) -> Self::Of<A>
    where
        Self::Of<A>: Monad + Kind<Elem = A, Of<A> = Self::Of<A>>,
        F: FnOnce() -> E + 'static,
        P: FnOnce(&A) -> bool + 'static,
        A: 'static,
        E: 'static,
    {
        computation.flat_map::<A, _>(move |value| {
            if predicate(&value) {
                Self::pure(value)
            } else {
                Self::throw_error(error())
            }
        })
    }

    /// Collapses both channels into one success value.
    ///
    /// Errors go through `recover`, successes through `transform`; the
    /// result never carries an error.
    fn redeem<A, B, R, T>(computation: Self::Of<A>, recover: R, transform: T) -> Self::Of<B>
    where
        Self::Of<A>: Functor + Kind<Elem = A, Of<B> = Self::Of<B>>,
        R: FnOnce(E) -> B + 'static,
        T: FnOnce(A) -> B + 'static,
        A: 'static,
        B: 'static,
    {
        Self::catch_error(computation.fmap(transform), move |error| {
            Self::pure(recover(error))
        })
    }

    /// Materializes the error channel into the success value.
    ///
    /// A success `a` becomes `Ok(a)`, a thrown `e` becomes a *successful*
    /// `Err(e)`; the result never throws. Defined as
    /// `catch_error(fa.fmap(Ok), |e| pure(Err(e)))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::control::Either;
    /// use kindling::effect::MonadError;
    ///
    /// let failed: Either<String, i32> = Either::Left("boom".to_string());
    /// let surfaced = <Either<String, i32>>::attempt(failed);
    /// assert_eq!(surfaced, Either::Right(Err("boom".to_string())));
    /// ```
    fn attempt<A>(computation: Self::Of<A>) -> Self::Of<Result<A, E>>
    where
        Self::Of<A>: Functor + Kind<Elem = A, Of<Result<A, E>> = Self::Of<Result<A, E>>>,
        A: 'static,
        E: 'static,
    {
        Self::catch_error(computation.fmap(Ok::<A, E>), |error| {
            Self::pure(Err(error))
        })
    }
}

/// Changing the error type of a carrier.
///
/// [`MonadError`] fixes one error type per instance; `map_error` steps
/// outside that by rebuilding the carrier around a new error type, the way
/// `Result::map_err` does.
///
/// # Examples
///
/// ```rust
/// use kindling::effect::MonadErrorExt;
///
/// let failed: Result<i32, i32> = Err(404);
/// let described: Result<i32, String> = failed.map_error(|code| format!("status {code}"));
/// assert_eq!(described, Err("status 404".to_string()));
/// ```
pub trait MonadErrorExt<E> {
    /// The same carrier with its error slot replaced.
    type WithError<E2>;

    /// Applies a function to the error channel, leaving successes alone.
    fn map_error<E2, F>(self, transform: F) -> Self::WithError<E2>
    where
        F: FnOnce(E) -> E2;
}

// =============================================================================
// Result<T, E>
// =============================================================================

impl<T, E: Clone> MonadError<E> for Result<T, E> {
    fn throw_error<A>(error: E) -> Result<A, E> {
        Err(error)
    }

    fn catch_error<A, F>(computation: Result<A, E>, handler: F) -> Result<A, E>
    where
        F: FnOnce(E) -> Result<A, E>,
    {
        match computation {
            Ok(value) => Ok(value),
            Err(error) => handler(error),
        }
    }

    fn from_result<A>(result: Result<A, E>) -> Result<A, E> {
        result
    }
}

impl<T, E> MonadErrorExt<E> for Result<T, E> {
    type WithError<E2> = Result<T, E2>;

    fn map_error<E2, F>(self, transform: F) -> Result<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        self.map_err(transform)
    }
}

// =============================================================================
// Either<L, R>
// =============================================================================

impl<L: Clone, R> MonadError<L> for Either<L, R> {
    fn throw_error<A>(error: L) -> Either<L, A> {
        Either::Left(error)
    }

    fn catch_error<A, F>(computation: Either<L, A>, handler: F) -> Either<L, A>
    where
        F: FnOnce(L) -> Either<L, A>,
    {
        match computation {
            Either::Left(error) => handler(error),
            Either::Right(value) => Either::Right(value),
        }
    }
}

impl<L, R> MonadErrorExt<L> for Either<L, R> {
    type WithError<E2> = Either<E2, R>;

    fn map_error<E2, F>(self, transform: F) -> Either<E2, R>
    where
        F: FnOnce(L) -> E2,
    {
        self.map_left(transform)
    }
}
