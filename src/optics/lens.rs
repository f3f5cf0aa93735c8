//! Lenses focus on a field that is always present.
//!
//! A [`Lens`] is a first-class accessor for one field of a product type:
//! it can read the field out of a source value and write a new field back,
//! producing a new source. Reads return owned values, so sources stay
//! immutable and no borrows escape the optic.
//!
//! # Laws
//!
//! 1. **GetPut**: `lens.set(source.clone(), lens.get(&source)) == source`
//! 2. **PutGet**: `lens.get(&lens.set(source, value)) == value`
//! 3. **PutPut**: `lens.set(lens.set(source, first), second) == lens.set(source, second)`
//!
//! # Examples
//!
//! ```rust
//! use kindling::lens;
//! use kindling::optics::Lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = lens!(Point, x);
//! let point = Point { x: 10, y: 20 };
//!
//! assert_eq!(x_lens.get(&point), 10);
//! assert_eq!(x_lens.set(point, 7), Point { x: 7, y: 20 });
//! ```

use std::marker::PhantomData;

/// A first-class accessor for a field that always exists.
///
/// Reading clones the focused value out of the source; writing consumes the
/// source and returns an updated copy.
pub trait Lens<S, A> {
    /// Reads the focused value out of the source.
    fn get(&self, source: &S) -> A;

    /// Writes a new value into the source, returning the updated source.
    fn set(&self, source: S, value: A) -> S;

    /// Applies a function to the focused value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::lens;
    /// use kindling::optics::Lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = lens!(Point, x);
    /// let doubled = x_lens.modify(Point { x: 10, y: 20 }, |x| x * 2);
    /// assert_eq!(doubled.x, 20);
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        let current = self.get(&source);
        self.set(source, function(current))
    }

    /// Applies a function that only needs a reference to the focused value.
    fn modify_ref<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(&A) -> A,
    {
        let current = self.get(&source);
        let next = function(&current);
        self.set(source, next)
    }

    /// Composes with a lens on the focused value, yielding a lens into the
    /// nested field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::lens;
    /// use kindling::optics::Lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Address { street: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Person { address: Address }
    ///
    /// let street = lens!(Person, address).compose(lens!(Address, street));
    /// let person = Person { address: Address { street: "Main St".to_string() } };
    /// assert_eq!(street.get(&person), "Main St");
    /// ```
    fn compose<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, other)
    }
}

/// A lens built from a getter and a setter closure.
pub struct FunctionLens<S, A, G, St> {
    getter: G,
    setter: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St> {
    /// Wraps a getter and a setter into a lens.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    fn get(&self, source: &S) -> A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G: Clone, St: Clone> Clone for FunctionLens<S, A, G, St> {
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> std::fmt::Debug for FunctionLens<S, A, G, St> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FunctionLens").finish_non_exhaustive()
    }
}

/// Two lenses run in sequence, focusing through an intermediate value.
pub struct ComposedLens<L1, L2, A> {
    first: L1,
    second: L2,
    _marker: PhantomData<A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Chains two lenses.
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
{
    fn get(&self, source: &S) -> B {
        self.second.get(&self.first.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        let intermediate = self.first.get(&source);
        let updated = self.second.set(intermediate, value);
        self.first.set(source, updated)
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A> std::fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// Creates a lens for a named field of a struct.
///
/// The field type must be `Clone`; reading clones the field out of the
/// source.
///
/// # Syntax
///
/// - `lens!(Type, field)`
/// - `lens!(Type<T1, T2>, field)` for generic structs
///
/// # Examples
///
/// ```rust
/// use kindling::lens;
/// use kindling::optics::Lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Pair<T> { left: T, right: T }
///
/// let left = lens!(Pair<i32>, left);
/// assert_eq!(left.get(&Pair { left: 1, right: 2 }), 1);
/// ```
#[macro_export]
macro_rules! lens {
    ($type:ident, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$type| source.$field.clone(),
            |mut source: $type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($type:ident < $($generic:ty),* $(,)? >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$type<$($generic),*>| source.$field.clone(),
            |mut source: $type<$($generic),*>, value| {
                source.$field = value;
                source
            },
        )
    };
}
