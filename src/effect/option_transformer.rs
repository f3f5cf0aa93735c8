//! `OptionT` - the `Option` monad transformer.
//!
//! `OptionT<M>` wraps an `M<Option<A>>` and lets computations sequence over
//! the present value while `None` short-circuits, without manually matching
//! inside every inner bind.
//!
//! # Examples
//!
//! ```rust
//! use kindling::effect::OptionT;
//!
//! let stacked = OptionT::new(Ok::<_, String>(Some(20)))
//!     .map(|n| n + 1)
//!     .flat_map(|n| OptionT::new(Ok::<_, String>(Some(n * 2))));
//!
//! assert_eq!(stacked.run(), Ok(Some(42)));
//! ```

use crate::typeclass::{Applicative, Kind, Monad};

/// A computation in an inner monad `M` carrying an `Option` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionT<M> {
    inner: M,
}

impl<M> OptionT<M> {
    /// Wraps an inner monadic value.
    pub const fn new(inner: M) -> Self {
        Self { inner }
    }

    /// Unwraps back to the inner monadic value.
    pub fn run(self) -> M {
        self.inner
    }

    /// Lifts a present value into the stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::OptionT;
    ///
    /// let lifted: OptionT<Result<Option<i32>, String>> = OptionT::some(42);
    /// assert_eq!(lifted.run(), Ok(Some(42)));
    /// ```
    pub fn some<A>(value: A) -> Self
    where
        M: Monad + Kind<Elem = Option<A>, Of<Option<A>> = M>,
        A: 'static,
    {
        Self::new(M::pure(Some(value)))
    }

    /// Lifts an absence into the stack.
    pub fn none<A>() -> Self
    where
        M: Monad + Kind<Elem = Option<A>, Of<Option<A>> = M>,
        A: 'static,
    {
        Self::new(M::pure(None))
    }

    /// Maps the present value, leaving `None` and inner effects untouched.
    pub fn map<A, B, F>(self, function: F) -> OptionT<M::Of<Option<B>>>
    where
        M: Monad + Kind<Elem = Option<A>>,
        F: FnOnce(A) -> B + 'static,
        A: 'static,
        B: 'static,
    {
        OptionT::new(self.inner.fmap(move |option| option.map(function)))
    }

    /// Sequences a dependent computation over the present value.
    ///
    /// `None` short-circuits: the function never runs.
    pub fn flat_map<A, B, F>(self, function: F) -> OptionT<M::Of<Option<B>>>
    where
        M: Monad + Kind<Elem = Option<A>>,
        M::Of<Option<B>>: Monad + Kind<Elem = Option<B>, Of<Option<B>> = M::Of<Option<B>>>,
        F: FnOnce(A) -> OptionT<M::Of<Option<B>>> + 'static,
        A: 'static,
        B: 'static,
    {
        OptionT::new(self.inner.flat_map(move |option| match option {
            None => <M::Of<Option<B>> as Applicative>::pure(None),
            Some(value) => function(value).inner,
        }))
    }

    /// Replaces an absence with a default value, collapsing the stack to the
    /// inner monad.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::OptionT;
    ///
    /// let absent: OptionT<Result<Option<i32>, String>> = OptionT::none();
    /// assert_eq!(absent.get_or_else(0), Ok(0));
    /// ```
    pub fn get_or_else<A>(self, default: A) -> M::Of<A>
    where
        M: Monad + Kind<Elem = Option<A>>,
        A: 'static,
    {
        self.inner.fmap(move |option| option.unwrap_or(default))
    }

    /// Falls back to another stacked computation when the value is absent.
    pub fn or_else<A>(self, fallback: Self) -> Self
    where
        M: Monad + Kind<Elem = Option<A>, Of<Option<A>> = M> + 'static,
        A: 'static,
    {
        Self::new(self.inner.flat_map::<Option<A>, _>(move |option| {
            match option {
                None => fallback.inner,
                Some(value) => M::pure(Some(value)),
            }
        }))
    }
}

/// Lifts a plain inner monadic value into the stack as present.
///
/// # Examples
///
/// ```rust
/// use kindling::effect::option_t_lift;
///
/// let lifted = option_t_lift(Ok::<_, String>(42));
/// assert_eq!(lifted.run(), Ok(Some(42)));
/// ```
pub fn option_t_lift<N>(inner: N) -> OptionT<N::Of<Option<N::Elem>>>
where
    N: Monad,
    N::Elem: 'static,
{
    OptionT::new(inner.fmap(Some))
}
