//! Higher-kinded type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor directly: there is no way to
//! write `fn f<F>(...) where F: /* takes one type argument */`. The classic
//! workaround in languages without native HKTs is a witness encoding: an
//! opaque marker type per constructor family plus a `Kind<F, A>` wrapper and
//! an unchecked "narrow" downcast back to the concrete type.
//!
//! Rust does not need the unsafe half of that encoding. A Generic Associated
//! Type can express "the same constructor, re-applied to a different
//! argument" natively, which is all the typeclass hierarchy ever asks of a
//! witness:
//!
//! - `Self` plays the role of `Kind<F, A>` (the constructor already applied),
//! - [`Kind::Elem`] recovers the `A`,
//! - [`Kind::Of<B>`](Kind::Of) is `F<B>`.
//!
//! Because the "witness" is the type itself, two distinct families can never
//! collide on one marker, and narrowing back to the concrete type is the
//! identity, checked by the compiler. The one place a runtime downcast
//! survives in this library is the type-erased [`Free`](crate::control::Free)
//! interpreter, where a mismatch is a fatal wiring bug, not an API error.
//!
//! Multi-parameter constructors participate by fixing every parameter except
//! the last: `Result<_, E>` maps over its success slot, `Either<L, _>` over
//! its right slot, `(E, _)` over its second slot. The chain is always curried
//! left-to-right so a family's encoding is stable everywhere it appears.
//!
//! # Example
//!
//! ```rust
//! use kindling::typeclass::Kind;
//!
//! // Generic over the constructor: turn any F<i32> into an F<String> type.
//! fn renamed<F: Kind<Elem = i32>>() -> F::Of<String>
//! where
//!     F::Of<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none: Option<String> = renamed::<Option<i32>>();
//! assert_eq!(none, None);
//! ```

/// A type constructor applied to some element type.
///
/// `Kind` is the foundation of the whole typeclass hierarchy: `Functor`,
/// `Applicative`, `Monad` and the rest are all defined against `Self::Of<B>`
/// rather than any concrete container.
///
/// # Laws
///
/// For any `F: Kind`:
///
/// 1. **Stability**: `F::Of<F::Elem>` is the same type as `F`.
/// 2. **Re-application**: `<F::Of<B> as Kind>::Of<C>` is the same type as
///    `F::Of<C>`; applying the family twice never switches families.
///
/// Both laws hold by construction for every implementation in this crate;
/// they are what make a `Kind` impl a faithful witness for one family.
///
/// # Example
///
/// ```rust
/// use kindling::typeclass::Kind;
///
/// fn element_of<F: Kind<Elem = i32>>() {}
///
/// element_of::<Option<i32>>();
/// element_of::<Vec<i32>>();
/// element_of::<Result<i32, String>>();
/// ```
pub trait Kind {
    /// The element type the constructor is currently applied to.
    ///
    /// For `Option<i32>` this is `i32`.
    type Elem;

    /// The same constructor applied to `B`.
    ///
    /// For `Option<i32>`, `Of<String>` is `Option<String>`. The
    /// `Kind<Elem = B>` bound keeps re-applications chainable, and the
    /// `'static` bound lets carriers that store their element behind a boxed
    /// thunk (`Io`) participate in the same hierarchy as strict containers.
    type Of<B: 'static>: Kind<Elem = B>;
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl<A> Kind for Option<A> {
    type Elem = A;
    type Of<B: 'static> = Option<B>;
}

impl<T, E> Kind for Result<T, E> {
    type Elem = T;
    type Of<B: 'static> = Result<B, E>;
}

impl<T> Kind for Vec<T> {
    type Elem = T;
    type Of<B: 'static> = Vec<B>;
}

impl<T> Kind for Box<T> {
    type Elem = T;
    type Of<B: 'static> = Box<B>;
}

// The environment pair: maps over the second slot, the first is fixed.
impl<E, A> Kind for (E, A) {
    type Elem = A;
    type Of<B: 'static> = (E, B);
}

static_assertions::assert_impl_all!(Option<i32>: Kind);
static_assertions::assert_impl_all!(Result<i32, String>: Kind);
static_assertions::assert_impl_all!(Vec<i32>: Kind);
