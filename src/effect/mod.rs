//! Effects: a typed error channel, deferred computation, and monad
//! transformers.
//!
//! - [`MonadError`] / [`MonadErrorExt`]: throwing, catching, and reshaping
//!   domain errors as values
//! - [`Io`]: a computation deferred behind a thunk, forced explicitly
//! - [`EitherT`], [`OptionT`], [`StateT`]: stacking `Either`, `Option`, and
//!   state semantics on top of any inner [`Monad`](crate::typeclass::Monad)
//!
//! # Examples
//!
//! ```rust
//! use kindling::effect::Io;
//! use kindling::typeclass::Monad;
//!
//! let program = Io::from_fn(|| 40).flat_map(|n| Io::from_fn(move || n + 2));
//! assert_eq!(program.run_unsafe(), 42);
//! ```

mod either_transformer;
mod io;
mod monad_error;
mod option_transformer;
mod state_transformer;

pub use either_transformer::{EitherT, either_t_lift};
pub use io::Io;
pub use monad_error::{MonadError, MonadErrorExt};
pub use option_transformer::{OptionT, option_t_lift};
pub use state_transformer::{StateT, state_t_lift};
