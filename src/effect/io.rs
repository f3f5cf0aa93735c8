//! `Io` - a deferred computation.
//!
//! [`Io`] wraps a thunk that produces a value when forced. Building an `Io`
//! never runs anything: `fmap`, `flat_map` and friends stack further thunks,
//! and the whole pipeline executes only when [`Io::run_unsafe`] is called.
//! The `unsafe` in the name is the semantic caveat that forcing performs the
//! deferred work, not a memory-safety escape hatch.
//!
//! # Examples
//!
//! ```rust
//! use kindling::effect::Io;
//! use kindling::typeclass::{Functor, Monad};
//!
//! let program = Io::from_fn(|| 20)
//!     .fmap(|n| n + 1)
//!     .flat_map(|n| Io::from_fn(move || n * 2));
//!
//! // Nothing has run yet; forcing evaluates the whole chain.
//! assert_eq!(program.run_unsafe(), 42);
//! ```

use std::ops::ControlFlow;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::typeclass::{Applicative, Functor, Kind, Monad};

/// A computation that produces an `A` when forced.
///
/// Equal `Io` pipelines force to equal results; side effects inside the
/// thunk happen once per [`Io::run_unsafe`] call, in construction order.
pub struct Io<A> {
    thunk: Box<dyn FnOnce() -> A + 'static>,
}

impl<A: 'static> Io<A> {
    /// Defers a computation.
    ///
    /// The closure runs when the `Io` is forced, not when it is built.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::Io;
    ///
    /// let io = Io::from_fn(|| 42);
    /// assert_eq!(io.run_unsafe(), 42);
    /// ```
    pub fn from_fn<F>(thunk: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        Self {
            thunk: Box::new(thunk),
        }
    }

    /// Lifts an already-computed value.
    ///
    /// The value is captured now; only its release is deferred.
    pub fn pure(value: A) -> Self {
        Self::from_fn(move || value)
    }

    /// Forces the computation, running every deferred step.
    ///
    /// This is the only way effects inside an `Io` pipeline are observed.
    #[must_use]
    pub fn run_unsafe(self) -> A {
        (self.thunk)()
    }

    /// Converts panics during forcing into an `Err` value.
    ///
    /// The returned `Io` is still deferred; the unwind boundary exists only
    /// while it is being forced. On success the value passes through as
    /// `Ok`; a panic is captured and its message returned as `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::Io;
    ///
    /// let exploding: Io<i32> = Io::from_fn(|| panic!("boom"));
    /// assert_eq!(exploding.attempt().run_unsafe(), Err("boom".to_string()));
    ///
    /// assert_eq!(Io::pure(42).attempt().run_unsafe(), Ok(42));
    /// ```
    pub fn attempt(self) -> Io<Result<A, String>> {
        Io::from_fn(move || {
            catch_unwind(AssertUnwindSafe(|| self.run_unsafe())).map_err(|payload| {
                if let Some(message) = payload.downcast_ref::<&str>() {
                    (*message).to_string()
                } else if let Some(message) = payload.downcast_ref::<String>() {
                    message.clone()
                } else {
                    "unknown panic".to_string()
                }
            })
        })
    }

    /// Defers a closure and guards its forcing against panics.
    ///
    /// Shorthand for `Io::from_fn(thunk).attempt()`: no part of the closure
    /// runs before forcing, and a panic during forcing becomes an `Err`
    /// instead of unwinding the caller.
    pub fn attempt_fn<F>(thunk: F) -> Io<Result<A, String>>
    where
        F: FnOnce() -> A + 'static,
    {
        Self::from_fn(thunk).attempt()
    }

    /// Recovers from a panic during forcing with a handler value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::effect::Io;
    ///
    /// let exploding: Io<&str> = Io::from_fn(|| panic!("oops"));
    /// let recovered = exploding.catch(|_| "recovered");
    /// assert_eq!(recovered.run_unsafe(), "recovered");
    /// ```
    pub fn catch<F>(self, handler: F) -> Io<A>
    where
        F: FnOnce(String) -> A + 'static,
    {
        Io::from_fn(move || match self.attempt().run_unsafe() {
            Ok(value) => value,
            Err(message) => handler(message),
        })
    }
}

impl<A: 'static> Kind for Io<A> {
    type Elem = A;
    type Of<B: 'static> = Io<B>;
}

impl<A: 'static> Functor for Io<A> {
    fn fmap<B, F>(self, function: F) -> Io<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        Io::from_fn(move || function(self.run_unsafe()))
    }
}

impl<A: 'static> Applicative for Io<A> {
    fn pure<B>(value: B) -> Io<B>
    where
        B: 'static,
    {
        Io::pure(value)
    }

    fn map2<B, C, F>(self, other: Io<B>, function: F) -> Io<C>
    where
        F: FnOnce(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        Io::from_fn(move || {
            let first = self.run_unsafe();
            let second = other.run_unsafe();
            function(first, second)
        })
    }

    fn map3<B, C, D, F>(self, second: Io<B>, third: Io<C>, function: F) -> Io<D>
    where
        F: FnOnce(A, B, C) -> D + 'static,
        B: 'static,
        C: 'static,
        D: 'static,
    {
        Io::from_fn(move || {
            let first = self.run_unsafe();
            let second = second.run_unsafe();
            let third = third.run_unsafe();
            function(first, second, third)
        })
    }
}

impl<A: 'static> Monad for Io<A> {
    fn flat_map<B, F>(self, function: F) -> Io<B>
    where
        F: FnOnce(A) -> Io<B> + 'static,
        B: 'static,
    {
        Io::from_fn(move || function(self.run_unsafe()).run_unsafe())
    }

    /// Iterates the step function inside one deferred thunk.
    ///
    /// Each step's `Io` is forced as it is produced, so the loop holds one
    /// state value at a time and never grows the call stack.
    fn tail_rec_m<B, F>(initial: A, mut step: F) -> Io<B>
    where
        F: FnMut(A) -> Io<ControlFlow<B, A>> + 'static,
        B: 'static,
    {
        Io::from_fn(move || {
            let mut state = initial;
            loop {
                match step(state).run_unsafe() {
                    ControlFlow::Continue(next) => state = next,
                    ControlFlow::Break(done) => return done,
                }
            }
        })
    }
}

impl<A> std::fmt::Debug for Io<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_tuple("Io").field(&"<thunk>").finish()
    }
}
