//! Coyoneda - map fusion for any type constructor.
//!
//! [`Coyoneda`] pairs a carrier with a pending transformation of its
//! element. Successive `map` calls compose into that one pending function
//! instead of touching the carrier, so a chain of maps costs a single
//! traversal when the structure is finally [`lowered`](Coyoneda::lower).
//! Until then the carrier needs no `Functor` instance at all, which also
//! makes `Coyoneda` the free functor over any `Kind`.
//!
//! # Examples
//!
//! ```rust
//! use kindling::control::Coyoneda;
//!
//! let fused = Coyoneda::lift(Some(20))
//!     .map(|n| n + 1)
//!     .map(|n| n * 2);
//!
//! // One fmap over the Option, running the composed function once.
//! assert_eq!(fused.lower(), Some(42));
//! ```

use crate::typeclass::{Functor, Kind};

/// A carrier `F` together with a deferred `F::Elem -> B` transformation.
pub struct Coyoneda<F: Kind, B> {
    source: F,
    transform: Box<dyn FnOnce(F::Elem) -> B + 'static>,
}

impl<F: Kind> Coyoneda<F, F::Elem>
where
    F::Elem: 'static,
{
    /// Wraps a carrier with the identity transformation.
    pub fn lift(source: F) -> Self {
        Self {
            source,
            transform: Box::new(|element| element),
        }
    }
}

impl<F: Kind, B: 'static> Coyoneda<F, B>
where
    F::Elem: 'static,
{
    /// Composes a function onto the pending transformation.
    ///
    /// The carrier is untouched; only the stored function grows.
    pub fn map<C, G>(self, function: G) -> Coyoneda<F, C>
    where
        G: FnOnce(B) -> C + 'static,
        C: 'static,
    {
        let transform = self.transform;
        Coyoneda {
            source: self.source,
            transform: Box::new(move |element| function(transform(element))),
        }
    }

    /// Runs the accumulated transformation through the carrier's `Functor`.
    pub fn lower(self) -> F::Of<B>
    where
        F: Functor,
    {
        self.source.fmap(self.transform)
    }
}
