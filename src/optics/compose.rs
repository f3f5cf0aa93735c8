//! Cross-kind optic composition.
//!
//! Composing two optics of different kinds yields the weakest kind that can
//! still describe the pair. The table below is fixed; a pair with no entry
//! (for example Prism then Getter, or any read through a Setter) has no
//! method here and does not compile.
//!
//! | first \ second | Iso       | Lens     | Prism    | Optional | Traversal |
//! |----------------|-----------|----------|----------|----------|-----------|
//! | Iso            | Iso       | Lens     | Prism    | Optional | Traversal |
//! | Lens           | Lens      | Lens     | Optional | Optional | Traversal |
//! | Prism          | Prism     | Optional | Prism    | Optional | Traversal |
//! | Optional       | Optional  | Optional | Optional | Optional | Traversal |
//! | Traversal      | Traversal | Traversal| Traversal| Traversal| Traversal |
//!
//! Read-only and write-only weakenings: Lens then Getter is a Getter,
//! Getter then Lens is a Getter, Traversal weakens to Fold or Setter, and a
//! Getter weakens to Fold. Same-kind composition lives on each optic trait
//! itself as `compose`.
//!
//! # Examples
//!
//! ```rust
//! use kindling::optics::{LensComposeExtension, Optional, Prism};
//! use kindling::{lens, prism};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Payload { Text(String), Binary(Vec<u8>) }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Message { payload: Payload }
//!
//! let text = lens!(Message, payload).compose_prism(prism!(Payload, Text));
//!
//! let message = Message { payload: Payload::Text("hi".to_string()) };
//! assert_eq!(text.get_option(&message), Some("hi".to_string()));
//! ```

use std::marker::PhantomData;

use super::fold::FoldOptic;
use super::getter::{ComposedGetter, Getter};
use super::iso::{Iso, IsoAsLens, IsoAsPrism};
use super::lens::{ComposedLens, Lens};
use super::optional::{ComposedOptional, Optional};
use super::prism::{ComposedPrism, Prism};
use super::setter::Setter;
use super::traversal::{ComposedTraversal, Traversal};

/// A lens weakened to an optional; the focus is always present.
pub struct LensAsOptional<L, S, A> {
    lens: L,
    _marker: PhantomData<(S, A)>,
}

impl<L, S, A> LensAsOptional<L, S, A> {
    /// Wraps a lens as an optional.
    #[must_use]
    pub const fn new(lens: L) -> Self {
        Self {
            lens,
            _marker: PhantomData,
        }
    }
}

impl<L, S, A> Optional<S, A> for LensAsOptional<L, S, A>
where
    L: Lens<S, A>,
{
    fn get_option(&self, source: &S) -> Option<A> {
        Some(self.lens.get(source))
    }

    fn set(&self, source: S, value: A) -> S {
        self.lens.set(source, value)
    }
}

/// A prism weakened to an optional; the focus is present when the variant
/// matches.
pub struct PrismAsOptional<P, S, A> {
    prism: P,
    _marker: PhantomData<(S, A)>,
}

impl<P, S, A> PrismAsOptional<P, S, A> {
    /// Wraps a prism as an optional.
    #[must_use]
    pub const fn new(prism: P) -> Self {
        Self {
            prism,
            _marker: PhantomData,
        }
    }
}

impl<P, S, A> Optional<S, A> for PrismAsOptional<P, S, A>
where
    P: Prism<S, A>,
{
    fn get_option(&self, source: &S) -> Option<A> {
        self.prism.preview(source)
    }

    fn set(&self, source: S, value: A) -> S {
        self.prism.modify(source, move |_| value)
    }
}

/// A lens weakened to a traversal with exactly one focus.
pub struct LensAsTraversal<L, S, A> {
    lens: L,
    _marker: PhantomData<(S, A)>,
}

impl<L, S, A> LensAsTraversal<L, S, A> {
    /// Wraps a lens as a traversal.
    #[must_use]
    pub const fn new(lens: L) -> Self {
        Self {
            lens,
            _marker: PhantomData,
        }
    }
}

impl<L, S, A> Traversal<S, A> for LensAsTraversal<L, S, A>
where
    L: Lens<S, A>,
{
    fn get_all(&self, source: &S) -> Vec<A> {
        vec![self.lens.get(source)]
    }

    fn modify_all<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        self.lens.modify(source, function)
    }
}

/// A prism weakened to a traversal with at most one focus.
pub struct PrismAsTraversal<P, S, A> {
    prism: P,
    _marker: PhantomData<(S, A)>,
}

impl<P, S, A> PrismAsTraversal<P, S, A> {
    /// Wraps a prism as a traversal.
    #[must_use]
    pub const fn new(prism: P) -> Self {
        Self {
            prism,
            _marker: PhantomData,
        }
    }
}

impl<P, S, A> Traversal<S, A> for PrismAsTraversal<P, S, A>
where
    P: Prism<S, A>,
{
    fn get_all(&self, source: &S) -> Vec<A> {
        self.prism.preview(source).into_iter().collect()
    }

    fn modify_all<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        self.prism.modify(source, function)
    }
}

/// An optional weakened to a traversal with at most one focus.
pub struct OptionalAsTraversal<O, S, A> {
    optional: O,
    _marker: PhantomData<(S, A)>,
}

impl<O, S, A> OptionalAsTraversal<O, S, A> {
    /// Wraps an optional as a traversal.
    #[must_use]
    pub const fn new(optional: O) -> Self {
        Self {
            optional,
            _marker: PhantomData,
        }
    }
}

impl<O, S, A> Traversal<S, A> for OptionalAsTraversal<O, S, A>
where
    O: Optional<S, A>,
{
    fn get_all(&self, source: &S) -> Vec<A> {
        self.optional.get_option(source).into_iter().collect()
    }

    fn modify_all<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        self.optional.modify(source, function)
    }
}

/// The read half of a lens.
pub struct LensAsGetter<L, S, A> {
    lens: L,
    _marker: PhantomData<(S, A)>,
}

impl<L, S, A> LensAsGetter<L, S, A> {
    /// Wraps a lens as a getter.
    #[must_use]
    pub const fn new(lens: L) -> Self {
        Self {
            lens,
            _marker: PhantomData,
        }
    }
}

impl<L, S, A> Getter<S, A> for LensAsGetter<L, S, A>
where
    L: Lens<S, A>,
{
    fn view(&self, source: &S) -> A {
        self.lens.get(source)
    }
}

/// The write half of a lens.
pub struct LensAsSetter<L, S, A> {
    lens: L,
    _marker: PhantomData<(S, A)>,
}

impl<L, S, A> LensAsSetter<L, S, A> {
    /// Wraps a lens as a setter.
    #[must_use]
    pub const fn new(lens: L) -> Self {
        Self {
            lens,
            _marker: PhantomData,
        }
    }
}

impl<L, S, A> Setter<S, A> for LensAsSetter<L, S, A>
where
    L: Lens<S, A>,
{
    fn over<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        self.lens.modify(source, function)
    }
}

/// The write half of a traversal.
pub struct TraversalAsSetter<T, S, A> {
    traversal: T,
    _marker: PhantomData<(S, A)>,
}

impl<T, S, A> TraversalAsSetter<T, S, A> {
    /// Wraps a traversal as a setter.
    #[must_use]
    pub const fn new(traversal: T) -> Self {
        Self {
            traversal,
            _marker: PhantomData,
        }
    }
}

impl<T, S, A> Setter<S, A> for TraversalAsSetter<T, S, A>
where
    T: Traversal<S, A>,
{
    fn over<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        self.traversal.modify_all(source, function)
    }
}

/// The read half of a traversal.
pub struct TraversalAsFold<T, S, A> {
    traversal: T,
    _marker: PhantomData<(S, A)>,
}

impl<T, S, A> TraversalAsFold<T, S, A> {
    /// Wraps a traversal as a fold.
    #[must_use]
    pub const fn new(traversal: T) -> Self {
        Self {
            traversal,
            _marker: PhantomData,
        }
    }
}

impl<T, S, A> FoldOptic<S, A> for TraversalAsFold<T, S, A>
where
    T: Traversal<S, A>,
{
    fn get_all(&self, source: &S) -> Vec<A> {
        self.traversal.get_all(source)
    }
}

/// A getter weakened to a fold with exactly one focus.
pub struct GetterAsFold<G, S, A> {
    getter: G,
    _marker: PhantomData<(S, A)>,
}

impl<G, S, A> GetterAsFold<G, S, A> {
    /// Wraps a getter as a fold.
    #[must_use]
    pub const fn new(getter: G) -> Self {
        Self {
            getter,
            _marker: PhantomData,
        }
    }
}

impl<G, S, A> FoldOptic<S, A> for GetterAsFold<G, S, A>
where
    G: Getter<S, A>,
{
    fn get_all(&self, source: &S) -> Vec<A> {
        vec![self.getter.view(source)]
    }
}

/// Compositions and weakenings available on every lens.
pub trait LensComposeExtension<S, A>: Lens<S, A> + Sized {
    /// Lens then Prism yields an Optional.
    fn compose_prism<B, P>(
        self,
        prism: P,
    ) -> ComposedOptional<LensAsOptional<Self, S, A>, PrismAsOptional<P, A, B>, A>
    where
        P: Prism<A, B>,
    {
        ComposedOptional::new(LensAsOptional::new(self), PrismAsOptional::new(prism))
    }

    /// Lens then Optional yields an Optional.
    fn compose_optional<B, O>(
        self,
        optional: O,
    ) -> ComposedOptional<LensAsOptional<Self, S, A>, O, A>
    where
        O: Optional<A, B>,
    {
        ComposedOptional::new(LensAsOptional::new(self), optional)
    }

    /// Lens then Traversal yields a Traversal.
    fn compose_traversal<B, T>(
        self,
        traversal: T,
    ) -> ComposedTraversal<LensAsTraversal<Self, S, A>, T, A>
    where
        T: Traversal<A, B>,
    {
        ComposedTraversal::new(LensAsTraversal::new(self), traversal)
    }

    /// Lens then Iso yields a Lens.
    fn compose_iso<B, I>(self, iso: I) -> ComposedLens<Self, IsoAsLens<I, A, B>, A>
    where
        I: Iso<A, B>,
        A: Clone,
    {
        ComposedLens::new(self, iso.to_lens())
    }

    /// Lens then Getter yields a Getter.
    fn compose_getter<B, G>(self, getter: G) -> ComposedGetter<LensAsGetter<Self, S, A>, G, A>
    where
        G: Getter<A, B>,
    {
        ComposedGetter::new(LensAsGetter::new(self), getter)
    }

    /// Forgets that the focus is always present.
    fn to_optional(self) -> LensAsOptional<Self, S, A> {
        LensAsOptional::new(self)
    }

    /// Views the single focus as a traversal.
    fn to_traversal(self) -> LensAsTraversal<Self, S, A> {
        LensAsTraversal::new(self)
    }

    /// Keeps only the read half.
    fn to_getter(self) -> LensAsGetter<Self, S, A> {
        LensAsGetter::new(self)
    }

    /// Keeps only the write half.
    fn to_setter(self) -> LensAsSetter<Self, S, A> {
        LensAsSetter::new(self)
    }
}

impl<S, A, L> LensComposeExtension<S, A> for L where L: Lens<S, A> {}

/// Compositions and weakenings available on every prism.
pub trait PrismComposeExtension<S, A>: Prism<S, A> + Sized {
    /// Prism then Lens yields an Optional.
    fn compose_lens<B, L>(
        self,
        lens: L,
    ) -> ComposedOptional<PrismAsOptional<Self, S, A>, LensAsOptional<L, A, B>, A>
    where
        L: Lens<A, B>,
    {
        ComposedOptional::new(PrismAsOptional::new(self), LensAsOptional::new(lens))
    }

    /// Prism then Optional yields an Optional.
    fn compose_optional<B, O>(
        self,
        optional: O,
    ) -> ComposedOptional<PrismAsOptional<Self, S, A>, O, A>
    where
        O: Optional<A, B>,
    {
        ComposedOptional::new(PrismAsOptional::new(self), optional)
    }

    /// Prism then Traversal yields a Traversal.
    fn compose_traversal<B, T>(
        self,
        traversal: T,
    ) -> ComposedTraversal<PrismAsTraversal<Self, S, A>, T, A>
    where
        T: Traversal<A, B>,
    {
        ComposedTraversal::new(PrismAsTraversal::new(self), traversal)
    }

    /// Prism then Iso yields a Prism.
    fn compose_iso<B, I>(self, iso: I) -> ComposedPrism<Self, IsoAsPrism<I, A, B>, A>
    where
        I: Iso<A, B>,
        A: Clone,
    {
        ComposedPrism::new(self, iso.to_prism())
    }

    /// Forgets the ability to rebuild the source.
    fn to_optional(self) -> PrismAsOptional<Self, S, A> {
        PrismAsOptional::new(self)
    }

    /// Views the at-most-one focus as a traversal.
    fn to_traversal(self) -> PrismAsTraversal<Self, S, A> {
        PrismAsTraversal::new(self)
    }
}

impl<S, A, P> PrismComposeExtension<S, A> for P where P: Prism<S, A> {}

/// Compositions available on every iso.
pub trait IsoComposeExtension<S, A>: Iso<S, A> + Sized {
    /// Iso then Lens yields a Lens.
    fn compose_lens<B, L>(self, lens: L) -> ComposedLens<IsoAsLens<Self, S, A>, L, A>
    where
        L: Lens<A, B>,
        S: Clone,
    {
        ComposedLens::new(self.to_lens(), lens)
    }

    /// Iso then Prism yields a Prism.
    fn compose_prism<B, P>(self, prism: P) -> ComposedPrism<IsoAsPrism<Self, S, A>, P, A>
    where
        P: Prism<A, B>,
        S: Clone,
    {
        ComposedPrism::new(self.to_prism(), prism)
    }

    /// Iso then Optional yields an Optional.
    fn compose_optional<B, O>(
        self,
        optional: O,
    ) -> ComposedOptional<LensAsOptional<IsoAsLens<Self, S, A>, S, A>, O, A>
    where
        O: Optional<A, B>,
        S: Clone,
    {
        ComposedOptional::new(LensAsOptional::new(self.to_lens()), optional)
    }

    /// Iso then Traversal yields a Traversal.
    fn compose_traversal<B, T>(
        self,
        traversal: T,
    ) -> ComposedTraversal<LensAsTraversal<IsoAsLens<Self, S, A>, S, A>, T, A>
    where
        T: Traversal<A, B>,
        S: Clone,
    {
        ComposedTraversal::new(LensAsTraversal::new(self.to_lens()), traversal)
    }
}

impl<S, A, I> IsoComposeExtension<S, A> for I where I: Iso<S, A> {}

/// Compositions and weakenings available on every optional.
pub trait OptionalComposeExtension<S, A>: Optional<S, A> + Sized {
    /// Optional then Lens yields an Optional.
    fn compose_lens<B, L>(self, lens: L) -> ComposedOptional<Self, LensAsOptional<L, A, B>, A>
    where
        L: Lens<A, B>,
    {
        ComposedOptional::new(self, LensAsOptional::new(lens))
    }

    /// Optional then Prism yields an Optional.
    fn compose_prism<B, P>(self, prism: P) -> ComposedOptional<Self, PrismAsOptional<P, A, B>, A>
    where
        P: Prism<A, B>,
    {
        ComposedOptional::new(self, PrismAsOptional::new(prism))
    }

    /// Optional then Traversal yields a Traversal.
    fn compose_traversal<B, T>(
        self,
        traversal: T,
    ) -> ComposedTraversal<OptionalAsTraversal<Self, S, A>, T, A>
    where
        T: Traversal<A, B>,
    {
        ComposedTraversal::new(OptionalAsTraversal::new(self), traversal)
    }

    /// Optional then Iso yields an Optional.
    fn compose_iso<B, I>(
        self,
        iso: I,
    ) -> ComposedOptional<Self, LensAsOptional<IsoAsLens<I, A, B>, A, B>, A>
    where
        I: Iso<A, B>,
        A: Clone,
    {
        ComposedOptional::new(self, LensAsOptional::new(iso.to_lens()))
    }

    /// Views the at-most-one focus as a traversal.
    fn to_traversal(self) -> OptionalAsTraversal<Self, S, A> {
        OptionalAsTraversal::new(self)
    }
}

impl<S, A, O> OptionalComposeExtension<S, A> for O where O: Optional<S, A> {}

/// Compositions and weakenings available on every traversal.
pub trait TraversalComposeExtension<S, A>: Traversal<S, A> + Sized {
    /// Traversal then Lens yields a Traversal.
    fn compose_lens<B, L>(self, lens: L) -> ComposedTraversal<Self, LensAsTraversal<L, A, B>, A>
    where
        L: Lens<A, B>,
    {
        ComposedTraversal::new(self, LensAsTraversal::new(lens))
    }

    /// Traversal then Prism yields a Traversal.
    fn compose_prism<B, P>(self, prism: P) -> ComposedTraversal<Self, PrismAsTraversal<P, A, B>, A>
    where
        P: Prism<A, B>,
    {
        ComposedTraversal::new(self, PrismAsTraversal::new(prism))
    }

    /// Traversal then Optional yields a Traversal.
    fn compose_optional<B, O>(
        self,
        optional: O,
    ) -> ComposedTraversal<Self, OptionalAsTraversal<O, A, B>, A>
    where
        O: Optional<A, B>,
    {
        ComposedTraversal::new(self, OptionalAsTraversal::new(optional))
    }

    /// Traversal then Iso yields a Traversal.
    fn compose_iso<B, I>(
        self,
        iso: I,
    ) -> ComposedTraversal<Self, LensAsTraversal<IsoAsLens<I, A, B>, A, B>, A>
    where
        I: Iso<A, B>,
        A: Clone,
    {
        ComposedTraversal::new(self, LensAsTraversal::new(iso.to_lens()))
    }

    /// Keeps only the read half.
    fn to_fold(self) -> TraversalAsFold<Self, S, A> {
        TraversalAsFold::new(self)
    }

    /// Keeps only the write half.
    fn to_setter(self) -> TraversalAsSetter<Self, S, A> {
        TraversalAsSetter::new(self)
    }
}

impl<S, A, T> TraversalComposeExtension<S, A> for T where T: Traversal<S, A> {}

/// Compositions and weakenings available on every getter.
pub trait GetterComposeExtension<S, A>: Getter<S, A> + Sized {
    /// Getter then Lens yields a Getter.
    fn compose_lens<B, L>(self, lens: L) -> ComposedGetter<Self, LensAsGetter<L, A, B>, A>
    where
        L: Lens<A, B>,
    {
        ComposedGetter::new(self, LensAsGetter::new(lens))
    }

    /// Views the single focus as a fold.
    fn to_fold(self) -> GetterAsFold<Self, S, A> {
        GetterAsFold::new(self)
    }
}

impl<S, A, G> GetterComposeExtension<S, A> for G where G: Getter<S, A> {}

macro_rules! wrapper_clone_debug {
    ($name:ident, $field:ident) => {
        impl<Inner: Clone, S, A> Clone for $name<Inner, S, A> {
            fn clone(&self) -> Self {
                Self {
                    $field: self.$field.clone(),
                    _marker: PhantomData,
                }
            }
        }

        impl<Inner: std::fmt::Debug, S, A> std::fmt::Debug for $name<Inner, S, A> {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter
                    .debug_struct(stringify!($name))
                    .field(stringify!($field), &self.$field)
                    .finish()
            }
        }
    };
}

wrapper_clone_debug!(LensAsOptional, lens);
wrapper_clone_debug!(PrismAsOptional, prism);
wrapper_clone_debug!(LensAsTraversal, lens);
wrapper_clone_debug!(PrismAsTraversal, prism);
wrapper_clone_debug!(OptionalAsTraversal, optional);
wrapper_clone_debug!(LensAsGetter, lens);
wrapper_clone_debug!(LensAsSetter, lens);
wrapper_clone_debug!(TraversalAsSetter, traversal);
wrapper_clone_debug!(TraversalAsFold, traversal);
wrapper_clone_debug!(GetterAsFold, getter);
