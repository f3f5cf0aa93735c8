//! Functor type class - mapping over container values.
//!
//! A [`Functor`] applies a function to the value(s) inside a container while
//! preserving the container's structure: `Some(5)` stays a `Some`, `None`
//! stays `None`, an `Err` passes through untouched.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy:
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindling::typeclass::Functor;
//!
//! let present: Option<i32> = Some(5);
//! assert_eq!(present.fmap(|n| n.to_string()), Some("5".to_string()));
//!
//! let absent: Option<i32> = None;
//! assert_eq!(absent.fmap(|n| n.to_string()), None);
//! ```

use super::higher::Kind;
use super::identity::Identity;

/// A type class for containers whose contents can be mapped over.
///
/// The `'static` bounds on the mapped function exist so that lazy carriers
/// (`Io`, `Trampoline`-backed types) can store the function in a boxed thunk;
/// strict containers like `Option` simply ignore them.
///
/// # Laws
///
/// - **Identity**: `fa.fmap(|x| x) == fa`
/// - **Composition**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
///
/// # Examples
///
/// ```rust
/// use kindling::typeclass::Functor;
///
/// let x: Option<i32> = Some(5);
/// assert_eq!(x.fmap(|n| n * 2), Some(10));
/// ```
pub trait Functor: Kind {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Functor;
    ///
    /// let x: Result<i32, String> = Ok(5);
    /// assert_eq!(x.fmap(|n| n * 2), Ok(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::Of<B>
    where
        F: FnOnce(Self::Elem) -> B + 'static,
        B: 'static;

    /// Replaces the inner value with a constant.
    ///
    /// Equivalent to `fmap(|_| value)`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::Of<B>
    where
        Self: Sized,
        B: 'static,
    {
        self.fmap(|_| value)
    }

    /// Discards the inner value, keeping only the structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::typeclass::Functor;
    ///
    /// assert_eq!(Some(5).void(), Some(()));
    /// let absent: Option<i32> = None;
    /// assert_eq!(absent.void(), None);
    /// ```
    #[inline]
    fn void(self) -> Self::Of<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

/// An extension of [`Functor`] for containers that can be observed without
/// being consumed.
///
/// One-shot carriers (`Io`) own their value behind a thunk that runs exactly
/// once, so they cannot map by reference; every strict container can.
///
/// # Examples
///
/// ```rust
/// use kindling::typeclass::FunctorRef;
///
/// let x: Option<String> = Some("hello".to_string());
/// assert_eq!(x.fmap_ref(|s| s.len()), Some(5));
/// assert_eq!(x, Some("hello".to_string()));
/// ```
pub trait FunctorRef: Functor {
    /// Applies a function to a reference of the inner value, leaving the
    /// original container intact.
    fn fmap_ref<B, F>(&self, function: F) -> Self::Of<B>
    where
        F: FnOnce(&Self::Elem) -> B + 'static,
        B: 'static;
}

/// An extension of [`Functor`] for containers with multiple elements.
///
/// `Functor::fmap` takes `FnOnce`, which can only be called once; containers
/// like `Vec` need a `FnMut` to visit every element. The split keeps lazy
/// single-value carriers implementable without forcing `Clone` everywhere.
///
/// # Examples
///
/// ```rust
/// use kindling::typeclass::FunctorMut;
///
/// let doubled: Vec<i32> = vec![1, 2, 3].fmap_mut(|n| n * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub trait FunctorMut: Functor {
    /// Applies a reusable function to each element.
    fn fmap_mut<B, F>(self, function: F) -> Self::Of<B>
    where
        F: FnMut(Self::Elem) -> B,
        B: 'static;

    /// Applies a reusable function to references of each element.
    fn fmap_ref_mut<B, F>(&self, function: F) -> Self::Of<B>
    where
        F: FnMut(&Self::Elem) -> B,
        B: 'static;
}

// =============================================================================
// Option<A>
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<A> FunctorRef for Option<A> {
    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Result<T, E>
// =============================================================================

impl<T, E: Clone> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }
}

impl<T, E: Clone> FunctorRef for Result<T, E> {
    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Result<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Ok(value) => Ok(function(value)),
            Err(error) => Err(error.clone()),
        }
    }
}

// =============================================================================
// Vec<T>
// =============================================================================

impl<T> Functor for Vec<T> {
    /// Maps over an empty or single-element `Vec`.
    ///
    /// `FnOnce` cannot visit more than one element; for multi-element vectors
    /// use [`FunctorMut::fmap_mut`], which is the lawful instance for `Vec`.
    #[inline]
    fn fmap<B, F>(self, function: F) -> Vec<B>
    where
        F: FnOnce(T) -> B,
    {
        let mut iter = self.into_iter();
        iter.next()
            .map_or_else(Vec::new, |first| vec![function(first)])
    }
}

impl<T> FunctorRef for Vec<T> {
    /// Maps over the first element only; see [`Functor::fmap`] for `Vec`.
    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Vec<B>
    where
        F: FnOnce(&T) -> B,
    {
        self.first()
            .map_or_else(Vec::new, |first| vec![function(first)])
    }
}

impl<T> FunctorMut for Vec<T> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, function: F) -> Vec<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }
}

// =============================================================================
// Box<T>
// =============================================================================

impl<T> Functor for Box<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Box<B>
    where
        F: FnOnce(T) -> B,
    {
        Box::new(function(*self))
    }
}

impl<T> FunctorRef for Box<T> {
    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Box<B>
    where
        F: FnOnce(&T) -> B,
    {
        Box::new(function(self.as_ref()))
    }
}

// =============================================================================
// Identity<A>
// =============================================================================

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }
}

impl<A> FunctorRef for Identity<A> {
    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Identity<B>
    where
        F: FnOnce(&A) -> B,
    {
        Identity(function(&self.0))
    }
}

// =============================================================================
// (E, A) - the environment pair
// =============================================================================

impl<E: Clone, A> Functor for (E, A) {
    #[inline]
    fn fmap<B, F>(self, function: F) -> (E, B)
    where
        F: FnOnce(A) -> B,
    {
        (self.0, function(self.1))
    }
}

impl<E: Clone, A> FunctorRef for (E, A) {
    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> (E, B)
    where
        F: FnOnce(&A) -> B,
    {
        (self.0.clone(), function(&self.1))
    }
}
