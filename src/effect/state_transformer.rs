//! `StateT` - the state monad transformer.
//!
//! `StateT<S, M>` wraps a transition function `S -> M<(A, S)>`: given an
//! initial state it produces a value together with the successor state,
//! inside any inner monad `M`. Binding threads the state through each step
//! while the inner monad contributes its own effect (absence, failure,
//! deferral).
//!
//! # Examples
//!
//! ```rust
//! use kindling::effect::StateT;
//!
//! let doubler: StateT<i32, Option<(i32, i32)>> = StateT::new(|s| Some((s * 2, s + 1)));
//! assert_eq!(doubler.run(10), Some((20, 11)));
//! ```

use crate::typeclass::{Kind, Monad};

/// A stateful computation over state `S` inside an inner monad `M`.
///
/// The transition runs once; build a fresh `StateT` per execution the same
/// way an [`Io`](crate::effect::Io) is built per forcing.
pub struct StateT<S, M> {
    transition: Box<dyn FnOnce(S) -> M + 'static>,
}

impl<S: 'static, M: 'static> StateT<S, M> {
    /// Wraps a state transition function.
    pub fn new<F>(transition: F) -> Self
    where
        F: FnOnce(S) -> M + 'static,
    {
        Self {
            transition: Box::new(transition),
        }
    }

    /// Runs the transition with an initial state.
    #[must_use]
    pub fn run(self, initial: S) -> M {
        (self.transition)(initial)
    }

    /// Lifts a value without touching the state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::StateT;
    ///
    /// let lifted: StateT<i32, Option<(i32, i32)>> = StateT::pure(42);
    /// assert_eq!(lifted.run(7), Some((42, 7)));
    /// ```
    pub fn pure<A>(value: A) -> Self
    where
        M: Monad + Kind<Elem = (A, S), Of<(A, S)> = M>,
        A: 'static,
    {
        Self::new(move |state| M::pure((value, state)))
    }

    /// Reads the current state as the value.
    pub fn get() -> Self
    where
        M: Monad + Kind<Elem = (S, S), Of<(S, S)> = M>,
        S: Clone,
    {
        Self::new(|state: S| M::pure((state.clone(), state)))
    }

    /// Replaces the state, producing `()`.
    pub fn put(next: S) -> Self
    where
        M: Monad + Kind<Elem = ((), S), Of<((), S)> = M>,
    {
        Self::new(move |_| M::pure(((), next)))
    }

    /// Applies a function to the state, producing `()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::StateT;
    ///
    /// let bump: StateT<i32, Option<((), i32)>> = StateT::modify(|count| count + 1);
    /// assert_eq!(bump.run(41), Some(((), 42)));
    /// ```
    pub fn modify<F>(update: F) -> Self
    where
        M: Monad + Kind<Elem = ((), S), Of<((), S)> = M>,
        F: FnOnce(S) -> S + 'static,
    {
        Self::new(move |state| M::pure(((), update(state))))
    }

    /// Derives the value from the state without changing it.
    pub fn gets<A, F>(read: F) -> Self
    where
        M: Monad + Kind<Elem = (A, S), Of<(A, S)> = M>,
        F: FnOnce(&S) -> A + 'static,
        A: 'static,
    {
        Self::new(move |state| {
            let value = read(&state);
            M::pure((value, state))
        })
    }

    /// Maps the produced value, leaving the state thread untouched.
    pub fn map<A, B, F>(self, function: F) -> StateT<S, M::Of<(B, S)>>
    where
        M: Monad + Kind<Elem = (A, S)>,
        M::Of<(B, S)>: 'static,
        F: FnOnce(A) -> B + 'static,
        A: 'static,
        B: 'static,
    {
        StateT::new(move |state| {
            self.run(state)
                .fmap(move |(value, next)| (function(value), next))
        })
    }

    /// Sequences a dependent stateful computation.
    ///
    /// The successor state of this step feeds the next one; the inner
    /// monad's bind decides whether the chain continues at all.
    pub fn flat_map<A, B, F>(self, function: F) -> StateT<S, M::Of<(B, S)>>
    where
        M: Monad + Kind<Elem = (A, S)>,
        M::Of<(B, S)>: 'static,
        F: FnOnce(A) -> StateT<S, M::Of<(B, S)>> + 'static,
        A: 'static,
        B: 'static,
    {
        StateT::new(move |state| {
            self.run(state)
                .flat_map(move |(value, next)| function(value).run(next))
        })
    }

    /// Runs the computation and keeps only the value.
    pub fn eval<A>(self, initial: S) -> M::Of<A>
    where
        M: Monad + Kind<Elem = (A, S)>,
        A: 'static,
    {
        self.run(initial).fmap(|(value, _)| value)
    }

    /// Runs the computation and keeps only the final state.
    pub fn exec<A>(self, initial: S) -> M::Of<S>
    where
        M: Monad + Kind<Elem = (A, S)>,
        A: 'static,
    {
        self.run(initial).fmap(|(_, state)| state)
    }
}

/// Lifts a plain inner monadic value, passing the state through unchanged.
///
/// # Examples
///
/// ```rust
/// use kindling::effect::state_t_lift;
///
/// let lifted = state_t_lift(Some(42));
/// assert_eq!(lifted.run(7), Some((42, 7)));
/// ```
pub fn state_t_lift<S, N>(inner: N) -> StateT<S, N::Of<(N::Elem, S)>>
where
    N: Monad + 'static,
    N::Of<(N::Elem, S)>: 'static,
    N::Elem: 'static,
    S: 'static,
{
    StateT::new(move |state: S| inner.fmap(move |value| (value, state)))
}

impl<S, M> std::fmt::Debug for StateT<S, M> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_tuple("StateT").field(&"<transition>").finish()
    }
}
