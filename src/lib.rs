//! # kindling
//!
//! Type classes, stack-safe control structures, and optics for Rust, built
//! on GAT-based higher-kinded type emulation.
//!
//! ## Overview
//!
//! Rust's generics are first-order: a function can abstract over `T`, but not
//! over the container `F` in `F<T>`. This library closes that gap with a
//! small Generic Associated Type encoding (the [`typeclass::Kind`] trait) and
//! builds the classic functional-programming hierarchy on top of it:
//!
//! - **Type Classes**: `Semigroup`, `Monoid`, `Functor`, `Applicative`,
//!   `Monad` (with stack-safe `tail_rec_m`), `Foldable`, `Traverse`, `Comonad`
//! - **Control Structures**: `Either`, `Trampoline`, the `Free` monad,
//!   `Coyoneda`
//! - **Effects**: `MonadError`, the deferred `Io` type, and the `EitherT`,
//!   `OptionT`, `StateT` monad transformers
//! - **Optics**: `Lens`, `Prism`, `Iso`, `Optional`, `Traversal`, `Getter`,
//!   `Fold`, `Setter` with a compile-time-checked composition table
//!
//! ## Feature Flags
//!
//! - `typeclass`: the `Kind` encoding and type class traits
//! - `control`: `Either`, `Trampoline`, `Free`, `Coyoneda`
//! - `effect`: `MonadError`, `Io`, monad transformers
//! - `optics`: `Lens`, `Prism`, and friends
//! - `full`: everything above (also the default)
//!
//! ## Example
//!
//! ```rust
//! use kindling::typeclass::{Applicative, Functor, Monad};
//!
//! fn half_if_even(n: i32) -> Option<i32> {
//!     if n % 2 == 0 { Some(n / 2) } else { None }
//! }
//!
//! let result = <Option<()>>::pure(10).flat_map(half_if_even).fmap(|n| n + 1);
//! assert_eq!(result, Some(6));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use kindling::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "optics")]
pub mod optics;
