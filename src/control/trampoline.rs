//! Stack-safe recursion by interpreting steps in a loop.
//!
//! Rust does not guarantee tail call elimination, so deep recursion can
//! overflow the stack. [`Trampoline`] represents each recursive step as data
//! and [`Trampoline::run`] consumes the steps iteratively, trading stack
//! frames for heap-allocated thunks.
//!
//! Binds are data too: `flat_map` records its continuation and the driver
//! loop keeps an explicit continuation stack, so `(m >>= f) >>= g` is
//! flattened by pushing `g` then `f` and walking `m`, never by recursion.
//! Intermediate values cross the erased continuations as `Box<dyn Any>`,
//! the same scheme the [`Free`](crate::control::Free) interpreter uses; a
//! failed downcast there is a wiring bug and panics.
//!
//! # Examples
//!
//! ```rust
//! use kindling::control::Trampoline;
//!
//! fn countdown(n: u64) -> Trampoline<u64> {
//!     if n == 0 {
//!         Trampoline::done(0)
//!     } else {
//!         Trampoline::defer(move || countdown(n - 1))
//!     }
//! }
//!
//! // Deep enough to overflow the stack as plain recursion.
//! assert_eq!(countdown(100_000).run(), 0);
//! ```

use smallvec::SmallVec;
use std::any::Any;
use std::marker::PhantomData;

use super::either::Either;

/// A recorded bind, erased so one stack can hold continuations whose
/// intermediate types all differ.
type Continuation = Box<dyn FnOnce(Box<dyn Any>) -> Step + 'static>;

const CONTINUATION_INLINE_CAPACITY: usize = 8;

/// Pending continuations, innermost bind on top.
///
/// Shallow bind chains stay inline; only programs nested deeper than
/// [`CONTINUATION_INLINE_CAPACITY`] binds spill to the heap.
type ContinuationStack = SmallVec<[Continuation; CONTINUATION_INLINE_CAPACITY]>;

/// The untyped program representation.
enum Step {
    Done(Box<dyn Any>),
    Defer(Box<dyn FnOnce() -> Step + 'static>),
    Bound {
        source: Box<Step>,
        continuation: Continuation,
    },
}

/// A suspended computation producing an `A`, evaluated without growing the
/// call stack.
///
/// `Trampoline` is a monad: `done` is `pure` and `flat_map` is bind. Binding
/// does not run anything; it records the continuation as data, and the
/// driver loop unwinds left-nested binds onto a continuation stack (monad
/// associativity) so evaluation stays a flat loop regardless of how the
/// computation was assembled.
pub struct Trampoline<A> {
    program: Step,
    _result: PhantomData<A>,
}

impl<A: 'static> Trampoline<A> {
    /// Lifts a finished value.
    #[inline]
    pub fn done(value: A) -> Self {
        Self {
            program: Step::Done(Box::new(value)),
            _result: PhantomData,
        }
    }

    /// Defers a step; the thunk runs only when the trampoline is driven.
    #[inline]
    pub fn defer<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Trampoline<A> + 'static,
    {
        Self {
            program: Step::Defer(Box::new(move || thunk().program)),
            _result: PhantomData,
        }
    }

    /// Alias for [`Trampoline::done`], the monadic unit.
    #[inline]
    pub fn pure(value: A) -> Self {
        Self::done(value)
    }

    /// Drives the computation to completion in constant stack space.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::control::Trampoline;
    ///
    /// let value = Trampoline::defer(|| Trampoline::done(42)).run();
    /// assert_eq!(value, 42);
    /// ```
    pub fn run(self) -> A {
        let mut current = self.program;
        let mut continuations = ContinuationStack::new();
        loop {
            match current {
                Step::Done(value) => match continuations.pop() {
                    Some(continuation) => current = continuation(value),
                    None => return Self::decode(value),
                },
                Step::Defer(thunk) => current = thunk(),
                Step::Bound {
                    source,
                    continuation,
                } => {
                    continuations.push(continuation);
                    current = *source;
                }
            }
        }
    }

    /// Advances until the next visible suspension point.
    ///
    /// Returns `Right(value)` when finished, or `Left(thunk)` holding the
    /// remaining work. Recorded binds are unwound onto the continuation
    /// stack transparently, so the caller only ever sees `Defer`
    /// boundaries; a returned thunk carries the pending binds with it.
    pub fn resume(self) -> Either<Box<dyn FnOnce() -> Trampoline<A> + 'static>, A> {
        let mut current = self.program;
        let mut continuations = ContinuationStack::new();
        loop {
            match current {
                Step::Done(value) => match continuations.pop() {
                    Some(continuation) => current = continuation(value),
                    None => return Either::Right(Self::decode(value)),
                },
                Step::Defer(thunk) => {
                    return Either::Left(Box::new(move || {
                        let mut rebuilt = thunk();
                        // Re-nest pending binds innermost-first so the next
                        // driver pass pops them back in the same order.
                        while let Some(continuation) = continuations.pop() {
                            rebuilt = Step::Bound {
                                source: Box::new(rebuilt),
                                continuation,
                            };
                        }
                        Trampoline {
                            program: rebuilt,
                            _result: PhantomData,
                        }
                    }));
                }
                Step::Bound {
                    source,
                    continuation,
                } => {
                    continuations.push(continuation);
                    current = *source;
                }
            }
        }
    }

    /// Applies a function to the eventual result.
    pub fn map<B, F>(self, function: F) -> Trampoline<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        self.flat_map(move |value| Trampoline::done(function(value)))
    }

    /// Sequences a trampoline-returning function after this computation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::control::Trampoline;
    ///
    /// let result = Trampoline::done(21).flat_map(|n| Trampoline::done(n * 2));
    /// assert_eq!(result.run(), 42);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Trampoline<B>
    where
        F: FnOnce(A) -> Trampoline<B> + 'static,
        B: 'static,
    {
        Trampoline {
            program: Step::Bound {
                source: Box::new(self.program),
                continuation: Box::new(move |raw| function(Self::decode(raw)).program),
            },
            _result: PhantomData,
        }
    }

    /// Alias for [`Trampoline::flat_map`].
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Trampoline<B>
    where
        F: FnOnce(A) -> Trampoline<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences another trampoline, discarding this result.
    #[inline]
    pub fn then<B: 'static>(self, next: Trampoline<B>) -> Trampoline<B> {
        self.flat_map(move |_| next)
    }

    fn decode(raw: Box<dyn Any>) -> A {
        *raw.downcast::<A>()
            .expect("continuation input type diverged from its producer")
    }
}

impl<A: std::fmt::Debug + 'static> std::fmt::Debug for Trampoline<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.program {
            Step::Done(value) => match value.downcast_ref::<A>() {
                Some(finished) => formatter.debug_tuple("Done").field(finished).finish(),
                None => formatter.debug_tuple("Done").field(&"<erased>").finish(),
            },
            Step::Defer(_) => formatter.debug_tuple("Defer").field(&"<thunk>").finish(),
            Step::Bound { .. } => formatter.debug_tuple("Bound").field(&"<step>").finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn done_returns_immediately() {
        assert_eq!(Trampoline::done(42).run(), 42);
    }

    #[rstest]
    fn defer_delays_until_run() {
        assert_eq!(Trampoline::defer(|| Trampoline::done(42)).run(), 42);
    }

    #[rstest]
    fn map_and_flat_map_compose() {
        assert_eq!(Trampoline::done(21).map(|n| n * 2).run(), 42);
        assert_eq!(
            Trampoline::done(20)
                .flat_map(|n| Trampoline::defer(move || Trampoline::done(n + 22)))
                .map(|n| n - 0)
                .run(),
            42
        );
    }

    #[rstest]
    fn resume_exposes_suspension_points() {
        let finished = Trampoline::done(1).resume();
        assert!(matches!(finished, Either::Right(1)));

        match Trampoline::defer(|| Trampoline::done(2)).resume() {
            Either::Left(thunk) => assert!(matches!(thunk().resume(), Either::Right(2))),
            Either::Right(_) => panic!("expected a suspension"),
        }
    }

    #[rstest]
    fn resume_carries_pending_binds_across_the_boundary() {
        let program = Trampoline::defer(|| Trampoline::done(10))
            .flat_map(|n| Trampoline::done(n + 1))
            .flat_map(|n| Trampoline::defer(move || Trampoline::done(n * 2)));

        let thunk = match program.resume() {
            Either::Left(thunk) => thunk,
            Either::Right(_) => panic!("expected a suspension"),
        };
        assert_eq!(thunk().run(), 22);
    }

    #[rstest]
    fn accumulator_recursion_is_stack_safe() {
        fn factorial(n: u64, accumulator: u64) -> Trampoline<u64> {
            if n <= 1 {
                Trampoline::done(accumulator)
            } else {
                Trampoline::defer(move || factorial(n - 1, n.wrapping_mul(accumulator)))
            }
        }

        assert_eq!(factorial(1, 1).run(), 1);
        assert_eq!(factorial(5, 1).run(), 120);
        assert_eq!(factorial(10, 1).run(), 3_628_800);
    }

    #[rstest]
    fn mutual_recursion_alternates() {
        fn is_even(n: u64) -> Trampoline<bool> {
            if n == 0 {
                Trampoline::done(true)
            } else {
                Trampoline::defer(move || is_odd(n - 1))
            }
        }

        fn is_odd(n: u64) -> Trampoline<bool> {
            if n == 0 {
                Trampoline::done(false)
            } else {
                Trampoline::defer(move || is_even(n - 1))
            }
        }

        assert!(is_even(0).run());
        assert!(is_odd(1).run());
        assert!(is_even(100).run());
        assert!(!is_odd(100).run());
    }

    #[rstest]
    fn left_nested_binds_evaluate_iteratively() {
        let mut computation = Trampoline::done(0u64);
        for _ in 0..300_000 {
            computation = computation.flat_map(|n| Trampoline::done(n + 1));
        }
        assert_eq!(computation.run(), 300_000);
    }

    #[rstest]
    fn deep_bind_chains_through_defer_are_stack_safe() {
        fn add_up(n: u64, accumulator: u64) -> Trampoline<u64> {
            if n == 0 {
                Trampoline::done(accumulator)
            } else {
                Trampoline::done(accumulator + n)
                    .flat_map(move |next| Trampoline::defer(move || add_up(n - 1, next)))
            }
        }

        assert_eq!(add_up(100_000, 0).run(), 5_000_050_000);
    }

    #[rstest]
    fn debug_renders_each_shape() {
        assert_eq!(format!("{:?}", Trampoline::done(7)), "Done(7)");
        assert_eq!(
            format!("{:?}", Trampoline::defer(|| Trampoline::done(7))),
            "Defer(\"<thunk>\")"
        );
        assert_eq!(
            format!(
                "{:?}",
                Trampoline::done(7).flat_map(|n| Trampoline::done(n + 1))
            ),
            "Bound(\"<step>\")"
        );
    }
}
