//! Core type classes for functional programming.
//!
//! The traits here form a hierarchy rooted in the [`Kind`] trait, which
//! emulates higher-kinded types with generic associated types:
//!
//! - [`Functor`] / [`FunctorRef`] / [`FunctorMut`]: mapping over a context
//! - [`Applicative`] / [`ApplicativeVec`]: lifting values and combining
//!   independent contexts
//! - [`Monad`] / [`MonadVec`]: sequencing dependent computations, with
//!   stack-safe iteration via `tail_rec_m`
//! - [`Foldable`]: collapsing a structure to a summary value
//! - [`Traverse`]: mapping with effects and collecting the results
//! - [`Comonad`]: extracting values and extending context-consuming
//!   functions
//! - [`Semigroup`] / [`Monoid`]: associative combination, with and without
//!   an identity element
//!
//! Supporting types: [`Identity`] (the trivial context), the monoid
//! selector wrappers ([`Sum`], [`Product`], [`Max`], [`Min`], [`Any`],
//! [`All`]), and [`Bounded`] for the extremal identities of `Max`/`Min`.
//!
//! # Examples
//!
//! ```rust
//! use kindling::typeclass::{Applicative, Functor, Monad, Semigroup};
//!
//! let doubled = Some(21).fmap(|n| n * 2);
//! assert_eq!(doubled, Some(42));
//!
//! let summed = Some(40).map2(Some(2), |a, b| a + b);
//! assert_eq!(summed, Some(42));
//!
//! let chained = Some(42).flat_map(|n| if n > 0 { Some(n) } else { None });
//! assert_eq!(chained, Some(42));
//!
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//! ```

mod applicative;
mod comonad;
mod foldable;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod semigroup;
mod traverse;
mod wrappers;

pub use applicative::{Applicative, ApplicativeVec};
pub use comonad::Comonad;
pub use foldable::Foldable;
pub use functor::{Functor, FunctorMut, FunctorRef};
pub use higher::Kind;
pub use identity::Identity;
pub use monad::{Monad, MonadVec};
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use traverse::Traverse;
pub use wrappers::{All, Any, Bounded, Max, Min, Product, Sum};
