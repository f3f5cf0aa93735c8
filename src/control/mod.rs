//! Control structures: branching, stack-safe recursion, and free programs.
//!
//! - [`Either`]: a value that is one of two alternatives, right-biased in
//!   every typeclass instance
//! - [`Trampoline`]: recursion expressed as data and driven by a loop
//! - [`Free`]: programs over an arbitrary instruction set, interpreted by
//!   a handler
//! - [`Coyoneda`]: deferred, fused mapping over any carrier
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
//! assert_eq!(countdown(100_000).run(), 0);
//! ```

mod coyoneda;
mod either;
mod free;
mod trampoline;

pub use coyoneda::Coyoneda;
pub use either::{Either, TraverseEither};
pub use free::{Free, InterpretError};
pub use trampoline::Trampoline;
