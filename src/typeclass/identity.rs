//! Identity wrapper type - the identity functor.
//!
//! [`Identity`] wraps a value and adds no behavior at all. That makes it the
//! simplest lawful instance of every typeclass in the hierarchy, the base
//! case for monad transformer stacks, and a convenient model when testing
//! laws.

use super::higher::Kind;

/// The identity functor: a value with no surrounding effect.
///
/// # Examples
///
/// ```rust
/// use kindling::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// // Tuple-struct syntax works too
/// let wrapped = Identity("hello");
/// assert_eq!(wrapped.0, "hello");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Wraps a value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the wrapper and returns the value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the wrapped value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Identity<A> {
    #[inline]
    fn from(value: A) -> Self {
        Self(value)
    }
}

impl<A> Kind for Identity<A> {
    type Elem = A;
    type Of<B: 'static> = Identity<B>;
}
