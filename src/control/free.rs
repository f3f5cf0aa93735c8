//! Free monad over an arbitrary instruction set.
//!
//! [`Free<I, A>`] turns any instruction type `I` into a monad: programs are
//! built with `pure`/`map`/`flat_map` as plain data, and given meaning only
//! when an interpreter walks them. The same program can run under different
//! handlers, which is what makes the encoding useful for DSLs and for
//! testing effectful logic with a pure handler.
//!
//! The representation follows the "reflection without remorse" freer
//! encoding: an instruction plus a queue of type-erased continuations, so
//! `flat_map` is O(1) and interpretation is a single loop over the queue.
//! No `Functor` bound on `I` is required. Continuations are erased to
//! `Box<dyn Any>` arrows; handlers answer instructions with `Box<dyn Any>`
//! and each step downcasts back to its concrete type. A mismatched downcast
//! inside a program is a wiring bug between DSL smart constructors and the
//! handler, and panics; only the final-result decode is surfaced as a
//! recoverable [`InterpretError`] through [`Free::try_interpret`].
//!
//! # Examples
//!
//! ```rust
//! use kindling::control::Free;
//!
//! enum Counter { Read, Write(i64) }
//!
//! fn read() -> Free<Counter, i64> {
//!     Free::<Counter, ()>::lift(Counter::Read, |raw| {
//!         *raw.downcast::<i64>().expect("Read answers with i64")
//!     })
//! }
//!
//! fn write(value: i64) -> Free<Counter, ()> {
//!     Free::<Counter, ()>::lift(Counter::Write(value), |_| ())
//! }
//!
//! let program = read().flat_map(|n| write(n + 1)).then(read());
//!
//! let mut counter = 10;
//! let observed = program.interpret(|instruction| match instruction {
//!     Counter::Read => Box::new(counter),
//!     Counter::Write(value) => { counter = value; Box::new(()) }
//! });
//!
//! assert_eq!(observed, 11);
//! assert_eq!(counter, 11);
//! ```

use smallvec::SmallVec;
use std::any::Any;
use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;

/// A continuation erased to `Box<dyn Any> -> Free<I, Box<dyn Any>>`.
///
/// Erasure is what lets one queue hold steps whose intermediate types all
/// differ.
trait ErasedStep<I> {
    fn apply(self: Box<Self>, input: Box<dyn Any>) -> Free<I, Box<dyn Any>>;
}

/// A recorded `flat_map` continuation.
struct BindStep<I, A, B, F>
where
    F: FnOnce(A) -> Free<I, B>,
{
    function: F,
    _types: PhantomData<fn(A) -> (I, B)>,
}

impl<I: 'static, A: 'static, B: 'static, F> ErasedStep<I> for BindStep<I, A, B, F>
where
    F: FnOnce(A) -> Free<I, B> + 'static,
{
    fn apply(self: Box<Self>, input: Box<dyn Any>) -> Free<I, Box<dyn Any>> {
        let value = *input
            .downcast::<A>()
            .expect("continuation input type diverged from its producer");

        match (self.function)(value) {
            Free::Pure(produced) => Free::Pure(Box::new(produced) as Box<dyn Any>),
            Free::Impure {
                instruction,
                mut queue,
                ..
            } => {
                // The inner program ends in a concrete B; re-erase it so the
                // outer queue keeps flowing in Box<dyn Any>.
                queue.steps.push(Box::new(ReboxStep::<B>(PhantomData)));
                Free::Impure {
                    instruction,
                    queue,
                    _result: PhantomData,
                }
            }
        }
    }
}

/// A step that turns a typed value back into an erased one.
struct ReboxStep<T>(PhantomData<T>);

impl<I: 'static, T: 'static> ErasedStep<I> for ReboxStep<T> {
    #[inline]
    fn apply(self: Box<Self>, input: Box<dyn Any>) -> Free<I, Box<dyn Any>> {
        Free::Pure(input)
    }
}

/// The step planted by [`Free::lift`]: decodes the handler's answer.
struct DecodeStep<R, E>
where
    E: FnOnce(Box<dyn Any>) -> R,
{
    decode: E,
    _result: PhantomData<R>,
}

impl<I: 'static, R: 'static, E> ErasedStep<I> for DecodeStep<R, E>
where
    E: FnOnce(Box<dyn Any>) -> R + 'static,
{
    #[inline]
    fn apply(self: Box<Self>, input: Box<dyn Any>) -> Free<I, Box<dyn Any>> {
        Free::Pure(Box::new((self.decode)(input)) as Box<dyn Any>)
    }
}

const STEP_INLINE_CAPACITY: usize = 8;

/// The continuation queue of an impure program.
///
/// Short chains stay inline in the `SmallVec`; only programs with more than
/// [`STEP_INLINE_CAPACITY`] queued steps spill to the heap.
#[doc(hidden)]
pub struct StepQueue<I> {
    steps: SmallVec<[Box<dyn ErasedStep<I>>; STEP_INLINE_CAPACITY]>,
}

impl<I> StepQueue<I> {
    #[inline]
    fn new() -> Self {
        Self {
            steps: SmallVec::new(),
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.steps.len()
    }
}

impl<I: 'static> StepQueue<I> {
    #[inline]
    fn push_bind<A: 'static, B: 'static, F>(mut self, function: F) -> Self
    where
        F: FnOnce(A) -> Free<I, B> + 'static,
    {
        self.steps.push(Box::new(BindStep {
            function,
            _types: PhantomData,
        }));
        self
    }

    #[inline]
    fn push_decode<R: 'static, E>(mut self, decode: E) -> Self
    where
        E: FnOnce(Box<dyn Any>) -> R + 'static,
    {
        self.steps.push(Box::new(DecodeStep {
            decode,
            _result: PhantomData,
        }));
        self
    }
}

/// Work list for the interpretation loop.
///
/// When a continuation produces a fresh impure program mid-queue, its queue
/// becomes the current one and the remainder of the old queue is parked;
/// parked queues resume LIFO once the current one drains.
struct StepStack<I> {
    cursor: usize,
    current: StepQueue<I>,
    parked: SmallVec<[(usize, StepQueue<I>); STEP_INLINE_CAPACITY]>,
}

impl<I: 'static> StepStack<I> {
    #[inline]
    fn new(initial: StepQueue<I>) -> Self {
        Self {
            cursor: 0,
            current: initial,
            parked: SmallVec::new(),
        }
    }

    #[inline]
    fn switch_to(&mut self, queue: StepQueue<I>) {
        if self.cursor < self.current.len() {
            let remainder = std::mem::replace(&mut self.current, queue);
            self.parked.push((self.cursor, remainder));
        } else {
            self.current = queue;
        }
        self.cursor = 0;
    }

    #[inline]
    fn next(&mut self) -> Option<Box<dyn ErasedStep<I>>> {
        loop {
            if self.cursor < self.current.steps.len() {
                let step = std::mem::replace(
                    &mut self.current.steps[self.cursor],
                    Box::new(ReboxStep::<()>(PhantomData)) as Box<dyn ErasedStep<I>>,
                );
                self.cursor += 1;
                return Some(step);
            }
            let (saved_cursor, saved_queue) = self.parked.pop()?;
            self.current = saved_queue;
            self.cursor = saved_cursor;
        }
    }
}

/// Failure reported by [`Free::try_interpret`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpretError {
    /// The interpreted value could not be decoded as the expected type.
    TypeMismatch {
        /// Where in interpretation the mismatch was detected.
        context: &'static str,
    },
}

impl Display for InterpretError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { context } => {
                write!(f, "type mismatch while interpreting: {context}")
            }
        }
    }
}

impl std::error::Error for InterpretError {}

/// A program over instruction set `I` producing an `A`.
///
/// # Laws
///
/// `Free` is a lawful monad under interpretation:
///
/// - **Left Identity**: `Free::pure(a).flat_map(f)` interprets as `f(a)`
/// - **Right Identity**: `m.flat_map(Free::pure)` interprets as `m`
/// - **Associativity**: `m.flat_map(f).flat_map(g)` interprets as
///   `m.flat_map(|x| f(x).flat_map(g))`
///
/// # Stack safety
///
/// `flat_map` appends to the continuation queue instead of nesting, and
/// [`Free::interpret`] drives a [`StepStack`] in a loop, so arbitrarily deep
/// chains interpret in constant stack space.
pub enum Free<I, A> {
    /// A finished program holding its result.
    Pure(A),
    /// An instruction awaiting its handler, with the queued continuations.
    Impure {
        /// The instruction to hand to the interpreter.
        instruction: I,
        /// Continuations to apply to the instruction's answer.
        queue: StepQueue<I>,
        /// Carries the program's result type.
        _result: PhantomData<A>,
    },
}

impl<I, A> Free<I, A> {
    /// Lifts a value into a finished program, the monadic unit.
    #[inline]
    pub const fn pure(value: A) -> Self {
        Self::Pure(value)
    }
}

impl<I: 'static, A: 'static> Free<I, A> {
    /// Lifts one instruction into a program.
    ///
    /// `decode` converts the handler's type-erased answer back to the
    /// instruction's result type; it should panic on a failed downcast,
    /// since that means the smart constructor and the handler disagree
    /// about the instruction's answer type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::control::Free;
    ///
    /// enum Clock { Now }
    ///
    /// fn now() -> Free<Clock, u64> {
    ///     Free::<Clock, ()>::lift(Clock::Now, |raw| {
    ///         *raw.downcast::<u64>().expect("Now answers with u64")
    ///     })
    /// }
    /// ```
    pub fn lift<R: 'static>(
        instruction: I,
        decode: impl FnOnce(Box<dyn Any>) -> R + 'static,
    ) -> Free<I, R> {
        Free::Impure {
            instruction,
            queue: StepQueue::new().push_decode(decode),
            _result: PhantomData,
        }
    }

    /// Applies a function to the eventual result.
    #[inline]
    pub fn map<B: 'static, F>(self, function: F) -> Free<I, B>
    where
        F: FnOnce(A) -> B + 'static,
    {
        self.flat_map(move |value| Free::pure(function(value)))
    }

    /// Sequences a program-returning function after this program.
    ///
    /// On a finished program the function runs immediately; on a pending
    /// one it is queued, costing O(1).
    #[inline]
    pub fn flat_map<B: 'static, F>(self, function: F) -> Free<I, B>
    where
        F: FnOnce(A) -> Free<I, B> + 'static,
    {
        match self {
            Self::Pure(value) => function(value),
            Self::Impure {
                instruction, queue, ..
            } => Free::Impure {
                instruction,
                queue: queue.push_bind(function),
                _result: PhantomData,
            },
        }
    }

    /// Alias for [`Free::flat_map`].
    #[inline]
    pub fn and_then<B: 'static, F>(self, function: F) -> Free<I, B>
    where
        F: FnOnce(A) -> Free<I, B> + 'static,
    {
        self.flat_map(function)
    }

    /// Sequences another program, discarding this result.
    #[inline]
    pub fn then<B: 'static>(self, next: Free<I, B>) -> Free<I, B> {
        self.flat_map(move |_| next)
    }

    /// Runs the program, answering each instruction with `handler`.
    ///
    /// # Panics
    ///
    /// Panics if the final value fails to decode as `A`; use
    /// [`Free::try_interpret`] to observe that case as an error instead.
    pub fn interpret<H>(self, handler: H) -> A
    where
        H: FnMut(I) -> Box<dyn Any>,
    {
        match self.try_interpret(handler) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Runs the program, reporting a final-result decode failure as
    /// [`InterpretError`] rather than panicking.
    ///
    /// # Errors
    ///
    /// Returns [`InterpretError::TypeMismatch`] when the interpreted value
    /// is not an `A`, which indicates the program was assembled against a
    /// handler answering with the wrong type.
    pub fn try_interpret<H>(self, mut handler: H) -> Result<A, InterpretError>
    where
        H: FnMut(I) -> Box<dyn Any>,
    {
        let (instruction, queue) = match self {
            Self::Pure(value) => return Ok(value),
            Self::Impure {
                instruction, queue, ..
            } => (instruction, queue),
        };

        let mut stack = StepStack::new(queue);
        let mut answer: Box<dyn Any> = handler(instruction);

        loop {
            let Some(step) = stack.next() else {
                return answer
                    .downcast::<A>()
                    .map(|boxed| *boxed)
                    .map_err(|_| InterpretError::TypeMismatch {
                        context: "final result",
                    });
            };

            match step.apply(answer) {
                Free::Pure(value) => answer = value,
                Free::Impure {
                    instruction, queue, ..
                } => {
                    stack.switch_to(queue);
                    answer = handler(instruction);
                }
            }
        }
    }
}

impl<I: Debug, A: Debug> Debug for Free<I, A> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pure(value) => formatter.debug_tuple("Pure").field(value).finish(),
            Self::Impure { instruction, .. } => formatter
                .debug_struct("Impure")
                .field("instruction", instruction)
                .field("queue", &"<steps>")
                .finish(),
        }
    }
}

impl<I: Display, A: Display> Display for Free<I, A> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pure(value) => write!(formatter, "Pure({value})"),
            Self::Impure { instruction, .. } => write!(formatter, "Impure({instruction})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug)]
    enum Register {
        Load,
        Store(i32),
    }

    fn load() -> Free<Register, i32> {
        Free::<Register, ()>::lift(Register::Load, |raw| {
            *raw.downcast::<i32>().expect("Load answers with i32")
        })
    }

    fn store(value: i32) -> Free<Register, ()> {
        Free::<Register, ()>::lift(Register::Store(value), |_| ())
    }

    fn run_register<A: 'static>(program: Free<Register, A>, initial: i32) -> (A, i32) {
        let mut register = initial;
        let result = program.interpret(|instruction| match instruction {
            Register::Load => Box::new(register),
            Register::Store(value) => {
                register = value;
                Box::new(())
            }
        });
        (result, register)
    }

    #[rstest]
    fn pure_needs_no_handler_calls() {
        let mut calls = 0;
        let result = Free::<Register, i32>::pure(42).interpret(|_| {
            calls += 1;
            Box::new(())
        });
        assert_eq!(result, 42);
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn map_transforms_the_result() {
        let (result, _) = run_register(load().map(|n| n * 2), 21);
        assert_eq!(result, 42);
    }

    #[rstest]
    fn flat_map_on_pure_runs_immediately() {
        let program = Free::<Register, i32>::pure(10)
            .flat_map(|n| Free::pure(n + 5))
            .flat_map(|n| Free::pure(n * 2));
        assert!(matches!(program, Free::Pure(30)));
    }

    #[rstest]
    fn instructions_thread_state_through_the_handler() {
        let program = load().flat_map(|n| store(n + 1)).then(load());
        let (result, register) = run_register(program, 10);
        assert_eq!(result, 11);
        assert_eq!(register, 11);
    }

    #[rstest]
    fn longer_programs_accumulate() {
        let program = load()
            .flat_map(|n| store(n + 10))
            .then(load())
            .flat_map(|n| store(n * 2))
            .then(load());
        let (result, register) = run_register(program, 5);
        assert_eq!(result, 30);
        assert_eq!(register, 30);
    }

    #[rstest]
    fn try_interpret_reports_final_decode_mismatch() {
        // Program typed as String, but the decode step produces i32.
        let program: Free<Register, String> =
            Free::<Register, ()>::lift(Register::Load, |raw| {
                *raw.downcast::<i32>().expect("Load answers with i32")
            })
            .map(|n| n + 1)
            .flat_map(|_| Free::Impure {
                instruction: Register::Load,
                queue: StepQueue::new().push_decode(|raw| {
                    *raw.downcast::<i32>().expect("Load answers with i32")
                }),
                _result: PhantomData::<String>,
            });

        let outcome = program.try_interpret(|_| Box::new(7i32));
        assert_eq!(
            outcome,
            Err(InterpretError::TypeMismatch {
                context: "final result"
            })
        );
    }

    #[rstest]
    fn deep_bind_chains_interpret_iteratively() {
        let mut program: Free<(), i32> = Free::pure(0);
        for _ in 0..10_000 {
            program = program.flat_map(|n| Free::pure(n + 1));
        }
        assert_eq!(program.interpret(|()| Box::new(())), 10_000);
    }

    #[rstest]
    fn deep_instruction_chains_interpret_iteratively() {
        let mut program = load();
        for _ in 0..1_000 {
            program = program.flat_map(|n| store(n + 1).then(load()));
        }
        let (result, register) = run_register(program, 0);
        assert_eq!(result, 1_000);
        assert_eq!(register, 1_000);
    }

    #[rstest]
    fn debug_and_display_render_both_shapes() {
        let finished: Free<i32, i32> = Free::pure(42);
        assert_eq!(format!("{finished:?}"), "Pure(42)");
        assert_eq!(format!("{finished}"), "Pure(42)");

        let pending = load().flat_map(|n| Free::pure(n * 2));
        let rendered = format!("{pending:?}");
        assert!(rendered.contains("Impure"));
        assert!(rendered.contains("Load"));
    }

    #[rstest]
    fn monad_laws_hold_under_interpretation() {
        fn f(x: i32) -> Free<(), i32> {
            Free::pure(x + 10)
        }
        fn g(x: i32) -> Free<(), i32> {
            Free::pure(x * 2)
        }

        let left_identity = Free::<(), i32>::pure(5).flat_map(f);
        assert_eq!(left_identity.interpret(|()| Box::new(())), 15);

        let right_identity = Free::<(), i32>::pure(42).flat_map(Free::pure);
        assert_eq!(right_identity.interpret(|()| Box::new(())), 42);

        let nested_left = Free::<(), i32>::pure(5).flat_map(f).flat_map(g);
        let nested_right = Free::<(), i32>::pure(5).flat_map(|x| f(x).flat_map(g));
        assert_eq!(
            nested_left.interpret(|()| Box::new(())),
            nested_right.interpret(|()| Box::new(()))
        );
    }

    #[rstest]
    fn interpret_error_renders() {
        let error = InterpretError::TypeMismatch {
            context: "final result",
        };
        assert_eq!(
            format!("{error}"),
            "type mismatch while interpreting: final result"
        );
    }
}
