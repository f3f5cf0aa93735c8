//! `EitherT` - the `Either` monad transformer.
//!
//! `EitherT<M>` wraps an `M<Either<E, A>>` and gives it the error-channel
//! behavior of [`Either`] directly: `flat_map` sees the `A`, short-circuits
//! on `Left`, and leaves the inner monad's own effects in place.
//!
//! The inner monad is anything whose element is an `Either`; `Option`,
//! `Result`, `Identity` and `Io` all qualify through their [`Monad`]
//! instances.
//!
//! # Examples
//!
//! ```rust
//! use kindling::control::Either;
//! use kindling::effect::EitherT;
//!
//! let stacked = EitherT::new(Some(Either::<String, i32>::Right(20)))
//!     .map(|n| n + 1)
//!     .flat_map(|n| EitherT::new(Some(Either::<String, i32>::Right(n * 2))));
//!
//! assert_eq!(stacked.run(), Some(Either::Right(42)));
//! ```

use crate::control::Either;
use crate::typeclass::{Applicative, Kind, Monad};

/// A computation in an inner monad `M` carrying an `Either` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EitherT<M> {
    inner: M,
}

impl<M> EitherT<M> {
    /// Wraps an inner monadic value.
    pub const fn new(inner: M) -> Self {
        Self { inner }
    }

    /// Unwraps back to the inner monadic value.
    pub fn run(self) -> M {
        self.inner
    }

    /// Lifts a success into the stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::control::Either;
    /// use kindling::effect::EitherT;
    ///
    /// let lifted: EitherT<Option<Either<String, i32>>> = EitherT::right(42);
    /// assert_eq!(lifted.run(), Some(Either::Right(42)));
    /// ```
    pub fn right<E, A>(value: A) -> Self
    where
        M: Monad + Kind<Elem = Either<E, A>, Of<Either<E, A>> = M>,
        E: 'static,
        A: 'static,
    {
        Self::new(M::pure(Either::Right(value)))
    }

    /// Lifts an error into the stack.
    pub fn left<E, A>(error: E) -> Self
    where
        M: Monad + Kind<Elem = Either<E, A>, Of<Either<E, A>> = M>,
        E: 'static,
        A: 'static,
    {
        Self::new(M::pure(Either::Left(error)))
    }

    /// Maps the success value, leaving errors and inner effects untouched.
    pub fn map<E, A, B, F>(self, function: F) -> EitherT<M::Of<Either<E, B>>>
    where
        M: Monad + Kind<Elem = Either<E, A>>,
        F: FnOnce(A) -> B + 'static,
        E: 'static,
        A: 'static,
        B: 'static,
    {
        EitherT::new(self.inner.fmap(move |either| either.map_right(function)))
    }

    /// Maps the error value, leaving successes and inner effects untouched.
    pub fn map_error<E, E2, A, F>(self, function: F) -> EitherT<M::Of<Either<E2, A>>>
    where
        M: Monad + Kind<Elem = Either<E, A>>,
        F: FnOnce(E) -> E2 + 'static,
        E: 'static,
        E2: 'static,
        A: 'static,
    {
        EitherT::new(self.inner.fmap(move |either| either.map_left(function)))
    }

    /// Sequences a dependent computation over the success value.
    ///
    /// A `Left` short-circuits: the function never runs and the error is
    /// re-lifted into the result stack.
    pub fn flat_map<E, A, B, F>(self, function: F) -> EitherT<M::Of<Either<E, B>>>
    where
        M: Monad + Kind<Elem = Either<E, A>>,
        M::Of<Either<E, B>>:
            Monad + Kind<Elem = Either<E, B>, Of<Either<E, B>> = M::Of<Either<E, B>>>,
        F: FnOnce(A) -> EitherT<M::Of<Either<E, B>>> + 'static,
        E: 'static,
        A: 'static,
        B: 'static,
    {
        EitherT::new(self.inner.flat_map(move |either| match either {
            Either::Left(error) => {
                <M::Of<Either<E, B>> as Applicative>::pure(Either::Left(error))
            }
            Either::Right(value) => function(value).inner,
        }))
    }

    /// Recovers from an error with another stacked computation.
    pub fn catch<E, A, F>(self, handler: F) -> Self
    where
        M: Monad + Kind<Elem = Either<E, A>, Of<Either<E, A>> = M>,
        F: FnOnce(E) -> Self + 'static,
        E: 'static,
        A: 'static,
    {
        Self::new(self.inner.flat_map::<Either<E, A>, _>(move |either| {
            match either {
                Either::Left(error) => handler(error).inner,
                Either::Right(value) => M::pure(Either::Right(value)),
            }
        }))
    }
}

/// Lifts a plain inner monadic value into the stack as a success.
///
/// # Examples
///
/// ```rust
/// use kindling::control::Either;
/// use kindling::effect::either_t_lift;
///
/// let lifted = either_t_lift::<String, _>(Some(42));
/// assert_eq!(lifted.run(), Some(Either::Right(42)));
/// ```
pub fn either_t_lift<E, N>(inner: N) -> EitherT<N::Of<Either<E, N::Elem>>>
where
    N: Monad,
    N::Elem: 'static,
    E: 'static,
{
    EitherT::new(inner.fmap(Either::Right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::Io;
    use rstest::rstest;

    type Stack = EitherT<Option<Either<String, i32>>>;

    #[rstest]
    fn right_and_left_construct_through_the_inner_monad() {
        let success: Stack = EitherT::right(42);
        assert_eq!(success.run(), Some(Either::Right(42)));

        let failure: Stack = EitherT::left("boom".to_string());
        assert_eq!(failure.run(), Some(Either::Left("boom".to_string())));
    }

    #[rstest]
    fn map_touches_only_the_success() {
        let success: Stack = EitherT::right(20);
        assert_eq!(success.map(|n| n + 1).run(), Some(Either::Right(21)));

        let failure: Stack = EitherT::left("boom".to_string());
        assert_eq!(
            failure.map(|n| n + 1).run(),
            Some(Either::Left("boom".to_string()))
        );
    }

    #[rstest]
    fn map_error_touches_only_the_error() {
        let failure: Stack = EitherT::left("boom".to_string());
        let renamed = failure.map_error(|e| format!("wrapped: {e}"));
        assert_eq!(renamed.run(), Some(Either::Left("wrapped: boom".to_string())));
    }

    #[rstest]
    fn flat_map_chains_successes() {
        let chained = EitherT::new(Some(Either::<String, i32>::Right(20)))
            .flat_map(|n| EitherT::new(Some(Either::<String, i32>::Right(n + 1))))
            .flat_map(|n| EitherT::new(Some(Either::<String, i32>::Right(n * 2))));
        assert_eq!(chained.run(), Some(Either::Right(42)));
    }

    #[rstest]
    fn flat_map_short_circuits_on_left() {
        let aborted = EitherT::new(Some(Either::<String, i32>::Left("boom".to_string())))
            .flat_map(|n| EitherT::new(Some(Either::<String, i32>::Right(n + 1))));
        assert_eq!(aborted.run(), Some(Either::Left("boom".to_string())));
    }

    #[rstest]
    fn inner_monad_effects_still_apply() {
        let absent: Stack = EitherT::new(None);
        let chained = absent.flat_map(|n| EitherT::new(Some(Either::<String, i32>::Right(n))));
        assert_eq!(chained.run(), None);
    }

    #[rstest]
    fn catch_recovers_from_left() {
        let failure: Stack = EitherT::left("boom".to_string());
        let recovered = failure.catch(|_| EitherT::right(0));
        assert_eq!(recovered.run(), Some(Either::Right(0)));

        let success: Stack = EitherT::right(42);
        let untouched = success.catch(|_| EitherT::right(0));
        assert_eq!(untouched.run(), Some(Either::Right(42)));
    }

    #[rstest]
    fn lift_wraps_the_inner_value_as_success() {
        let lifted = either_t_lift::<String, _>(Some(42));
        assert_eq!(lifted.run(), Some(Either::Right(42)));

        let absent = either_t_lift::<String, _>(None::<i32>);
        assert_eq!(absent.run(), None);
    }

    #[rstest]
    fn stacks_over_io() {
        let program = EitherT::new(Io::pure(Either::<String, i32>::Right(20)))
            .flat_map(|n| EitherT::new(Io::pure(Either::<String, i32>::Right(n + 1))))
            .map(|n| n * 2);
        assert_eq!(program.run().run_unsafe(), Either::Right(42));
    }
}
