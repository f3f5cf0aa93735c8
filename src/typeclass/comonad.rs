//! Comonad type class - the dual of `Monad`.
//!
//! Where a monad puts values into a context (`pure`) and sequences
//! context-producing functions (`flat_map`), a comonad takes values out
//! ([`Comonad::extract`]) and extends context-consuming functions over the
//! whole structure ([`Comonad::coflat_map`]).
//!
//! The carriers here are the ones that always hold a value: [`Identity`],
//! `Box`, and the environment pair `(E, A)` where `extract` reads the value
//! and `coflat_map` threads the environment through.
//!
//! # Examples
//!
//! ```rust
//! use kindling::typeclass::Comonad;
//!
//! let cell = ("config", 41);
//! assert_eq!(cell.extract(), 41);
//! assert_eq!(cell.coflat_map(|(env, n)| (n + 1, env.len())), ("config", (42, 6)));
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A type class for contexts a value can always be extracted from.
///
/// # Laws
///
/// - **Left Identity**: `w.coflat_map(Comonad::extract) == w`
/// - **Right Identity**: `w.coflat_map(f).extract() == f(w)`
/// - **Associativity**:
///   `w.coflat_map(f).coflat_map(g) == w.coflat_map(|x| g(x.coflat_map(f)))`
pub trait Comonad: Functor {
    /// Extracts the value from the context.
    fn extract(self) -> Self::Elem;

    /// Applies a function that consumes the whole context, keeping the
    /// context's shape around the result.
    fn coflat_map<B, F>(self, function: F) -> Self::Of<B>
    where
        Self: Sized,
        F: FnOnce(Self) -> B,
        B: 'static;

    /// Nests the context inside itself.
    #[inline]
    fn duplicate(self) -> Self::Of<Self>
    where
        Self: Sized + 'static,
    {
        self.coflat_map(|whole| whole)
    }
}

impl<A> Comonad for Identity<A> {
    #[inline]
    fn extract(self) -> A {
        self.0
    }

    #[inline]
    fn coflat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(Self) -> B,
    {
        Identity(function(self))
    }
}

impl<A> Comonad for Box<A> {
    #[inline]
    fn extract(self) -> A {
        *self
    }

    #[inline]
    fn coflat_map<B, F>(self, function: F) -> Box<B>
    where
        F: FnOnce(Self) -> B,
    {
        Box::new(function(self))
    }
}

/// The environment comonad: the first component rides along unchanged.
impl<E: Clone, A> Comonad for (E, A) {
    #[inline]
    fn extract(self) -> A {
        self.1
    }

    #[inline]
    fn coflat_map<B, F>(self, function: F) -> (E, B)
    where
        F: FnOnce(Self) -> B,
    {
        let environment = self.0.clone();
        (environment, function(self))
    }
}
