//! Applicative type class - combining independent computations in a context.
//!
//! [`Applicative`] extends [`Functor`] with the ability to lift plain values
//! into the context (`pure`) and to combine several contextual values with a
//! plain function (`map2`, `map3`). Where `Monad` sequences *dependent*
//! computations, `Applicative` combines *independent* ones.
//!
//! # Laws
//!
//! All `Applicative` implementations must satisfy:
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply-to(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f) applied to pure(x) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u applied to pure(y) == pure(|f| f(y)) applied to u
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! pure(compose) . u . v . w == u . (v . w)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindling::typeclass::Applicative;
//!
//! let lifted: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(lifted, Some(42));
//!
//! assert_eq!(Some(1).map2(Some(2), |x, y| x + y), Some(3));
//! assert_eq!(Some(1).product(Some("hello")), Some((1, "hello")));
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A type class for lifting values into a context and combining contexts.
///
/// `pure`, `map2` and `map3` are the primitives every instance provides;
/// `apply`, `product` and its directional variants are derived.
///
/// # Examples
///
/// ```rust
/// use kindling::typeclass::Applicative;
///
/// let sum = Some(3).map2(Some(4), |x, y| x + y);
/// assert_eq!(sum, Some(7));
/// ```
pub trait Applicative: Functor {
    /// Lifts a plain value into the context.
    ///
    /// The receiver type only names the family; any element type may be
    /// lifted: `<Option<()>>::pure("hi")` is `Some("hi")`.
    fn pure<B>(value: B) -> Self::Of<B>
    where
        B: 'static;

    /// Combines two contextual values with a binary function.
    fn map2<B, C, F>(self, other: Self::Of<B>, function: F) -> Self::Of<C>
    where
        F: FnOnce(Self::Elem, B) -> C + 'static,
        B: 'static,
        C: 'static;

    /// Combines three contextual values with a ternary function.
    fn map3<B, C, D, F>(self, second: Self::Of<B>, third: Self::Of<C>, function: F) -> Self::Of<D>
    where
        F: FnOnce(Self::Elem, B, C) -> D + 'static,
        B: 'static,
        C: 'static,
        D: 'static;

    /// Applies a contextual function to this contextual value.
    ///
    /// Derived from `map2`; this is the `ap` of the classical presentation,
    /// with the function on the argument side to fit method syntax.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Applicative;
    ///
    /// let value = Some(21);
    /// let function: Option<fn(i32) -> i32> = Some(|n| n * 2);
    /// assert_eq!(value.apply(function), Some(42));
    /// ```
    #[inline]
    fn apply<B, F>(self, function: Self::Of<F>) -> Self::Of<B>
    where
        Self: Sized,
        F: FnOnce(Self::Elem) -> B + 'static,
        B: 'static,
    {
        self.map2(function, |value, apply_fn| apply_fn(value))
    }

    /// Pairs up two contextual values.
    #[inline]
    fn product<B>(self, other: Self::Of<B>) -> Self::Of<(Self::Elem, B)>
    where
        Self: Sized,
        Self::Elem: 'static,
        B: 'static,
    {
        self.map2(other, |left, right| (left, right))
    }

    /// Combines two contextual values, keeping the left result.
    #[inline]
    fn product_left<B>(self, other: Self::Of<B>) -> Self::Of<Self::Elem>
    where
        Self: Sized,
        Self::Elem: 'static,
        B: 'static,
    {
        self.map2(other, |left, _| left)
    }

    /// Combines two contextual values, keeping the right result.
    #[inline]
    fn product_right<B>(self, other: Self::Of<B>) -> Self::Of<B>
    where
        Self: Sized,
        Self::Elem: 'static,
        B: 'static,
    {
        self.map2(other, |_, right| right)
    }
}

// =============================================================================
// Option<A>
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(left), Some(right)) => Some(function(left, right)),
            _ => None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Some(first), Some(second), Some(third)) => Some(function(first, second, third)),
            _ => None,
        }
    }
}

// =============================================================================
// Result<T, E>
// =============================================================================

impl<T, E: Clone> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        Ok(function(self?, other?))
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Result<B, E>,
        third: Result<C, E>,
        function: F,
    ) -> Result<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        Ok(function(self?, second?, third?))
    }
}

// =============================================================================
// Box<T>
// =============================================================================

impl<T> Applicative for Box<T> {
    #[inline]
    fn pure<B>(value: B) -> Box<B> {
        Box::new(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Box<B>, function: F) -> Box<C>
    where
        F: FnOnce(T, B) -> C,
    {
        Box::new(function(*self, *other))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Box<B>, third: Box<C>, function: F) -> Box<D>
    where
        F: FnOnce(T, B, C) -> D,
    {
        Box::new(function(*self, *second, *third))
    }
}

// =============================================================================
// Identity<A>
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity(function(self.0, other.0))
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Identity<B>,
        third: Identity<C>,
        function: F,
    ) -> Identity<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Identity(function(self.0, second.0, third.0))
    }
}

// =============================================================================
// Vec<A> - cartesian applicative via a dedicated trait
// =============================================================================

/// The applicative structure of `Vec`, as a separate trait.
///
/// `Applicative::map2` takes `FnOnce`, which cannot combine every pairing of
/// elements; `Vec`'s lawful applicative is the cartesian product and needs
/// `FnMut` plus `Clone` on the element types.
///
/// # Examples
///
/// ```rust
/// use kindling::typeclass::ApplicativeVec;
///
/// let pairs = vec![1, 2].map2(vec![10, 20], |x, y| x + y);
/// assert_eq!(pairs, vec![11, 21, 12, 22]);
/// ```
pub trait ApplicativeVec: Sized {
    /// The element type of the vector.
    type Item;

    /// Lifts a value into a one-element vector.
    #[inline]
    #[must_use]
    fn pure<B>(value: B) -> Vec<B> {
        vec![value]
    }

    /// Combines every pairing of elements from the two vectors.
    fn map2<B: Clone, C, F>(self, other: Vec<B>, function: F) -> Vec<C>
    where
        F: FnMut(Self::Item, B) -> C,
        Self::Item: Clone;

    /// Pairs up every combination of elements.
    fn product<B: Clone>(self, other: Vec<B>) -> Vec<(Self::Item, B)>
    where
        Self::Item: Clone,
    {
        self.map2(other, |left, right| (left, right))
    }
}

impl<A> ApplicativeVec for Vec<A> {
    type Item = A;

    #[inline]
    fn map2<B: Clone, C, F>(self, other: Vec<B>, mut function: F) -> Vec<C>
    where
        F: FnMut(A, B) -> C,
        A: Clone,
    {
        let mut result = Vec::with_capacity(self.len() * other.len());
        for left in self {
            for right in &other {
                result.push(function(left.clone(), right.clone()));
            }
        }
        result
    }
}
