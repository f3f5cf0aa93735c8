//! Prisms focus on one variant of a sum type.
//!
//! A [`Prism`] may fail to focus: `preview` returns `None` when the source
//! holds a different variant, and `review` rebuilds a source from the focused
//! value. `get_or_modify` is the lossless form of `preview`: it either
//! extracts the focus or hands the untouched source back.
//!
//! # Laws
//!
//! 1. **PreviewReview**: if `prism.preview(&source) == Some(value)` then
//!    `prism.review(value) == source`
//! 2. **ReviewPreview**: `prism.preview(&prism.review(value)) == Some(value)`
//!
//! # Examples
//!
//! ```rust
//! use kindling::optics::Prism;
//! use kindling::prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape { Circle(f64), Square(f64) }
//!
//! let circle = prism!(Shape, Circle);
//! assert_eq!(circle.preview(&Shape::Circle(1.5)), Some(1.5));
//! assert_eq!(circle.preview(&Shape::Square(2.0)), None);
//! assert_eq!(circle.review(3.0), Shape::Circle(3.0));
//! ```

use std::marker::PhantomData;

/// A first-class accessor for a variant that may not be present.
pub trait Prism<S, A> {
    /// Extracts the focused value if the source holds the matching variant.
    fn preview(&self, source: &S) -> Option<A>;

    /// Rebuilds a source from a focused value.
    fn review(&self, value: A) -> S;

    /// Extracts the focus, or returns the source unchanged when it does not
    /// match.
    fn get_or_modify(&self, source: S) -> Result<A, S>;

    /// Applies a function to the focus; a non-matching source is returned
    /// untouched.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        match self.get_or_modify(source) {
            Ok(value) => self.review(function(value)),
            Err(original) => original,
        }
    }

    /// Applies a function to the focus, or yields `None` when the source
    /// does not match.
    fn modify_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        match self.get_or_modify(source) {
            Ok(value) => Some(self.review(function(value))),
            Err(_) => None,
        }
    }

    /// Tests whether the source holds the matching variant.
    fn is_matching(&self, source: &S) -> bool {
        self.preview(source).is_some()
    }

    /// Composes with a prism on the focused value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::optics::Prism;
    /// use kindling::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Outer { Wrapped(Inner) }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Inner { Value(i32) }
    ///
    /// let nested = prism!(Outer, Wrapped).compose(prism!(Inner, Value));
    /// assert_eq!(nested.preview(&Outer::Wrapped(Inner::Value(42))), Some(42));
    /// ```
    fn compose<B, P>(self, other: P) -> ComposedPrism<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedPrism::new(self, other)
    }
}

/// A prism built from preview, review, and extraction closures.
pub struct FunctionPrism<S, A, Pv, Rv, Ex> {
    previewer: Pv,
    reviewer: Rv,
    extractor: Ex,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, Pv, Rv, Ex> FunctionPrism<S, A, Pv, Rv, Ex> {
    /// Wraps the three closures into a prism.
    #[must_use]
    pub const fn new(previewer: Pv, reviewer: Rv, extractor: Ex) -> Self {
        Self {
            previewer,
            reviewer,
            extractor,
            _marker: PhantomData,
        }
    }
}

impl<S, A, Pv, Rv, Ex> Prism<S, A> for FunctionPrism<S, A, Pv, Rv, Ex>
where
    Pv: Fn(&S) -> Option<A>,
    Rv: Fn(A) -> S,
    Ex: Fn(S) -> Result<A, S>,
{
    fn preview(&self, source: &S) -> Option<A> {
        (self.previewer)(source)
    }

    fn review(&self, value: A) -> S {
        (self.reviewer)(value)
    }

    fn get_or_modify(&self, source: S) -> Result<A, S> {
        (self.extractor)(source)
    }
}

impl<S, A, Pv: Clone, Rv: Clone, Ex: Clone> Clone for FunctionPrism<S, A, Pv, Rv, Ex> {
    fn clone(&self) -> Self {
        Self {
            previewer: self.previewer.clone(),
            reviewer: self.reviewer.clone(),
            extractor: self.extractor.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, Pv, Rv, Ex> std::fmt::Debug for FunctionPrism<S, A, Pv, Rv, Ex> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FunctionPrism").finish_non_exhaustive()
    }
}

/// Two prisms run in sequence; the composite matches only when both match.
pub struct ComposedPrism<P1, P2, A> {
    first: P1,
    second: P2,
    _marker: PhantomData<A>,
}

impl<P1, P2, A> ComposedPrism<P1, P2, A> {
    /// Chains two prisms.
    #[must_use]
    pub const fn new(first: P1, second: P2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P1, P2> Prism<S, B> for ComposedPrism<P1, P2, A>
where
    P1: Prism<S, A>,
    P2: Prism<A, B>,
{
    fn preview(&self, source: &S) -> Option<B> {
        self.first
            .preview(source)
            .and_then(|intermediate| self.second.preview(&intermediate))
    }

    fn review(&self, value: B) -> S {
        self.first.review(self.second.review(value))
    }

    fn get_or_modify(&self, source: S) -> Result<B, S> {
        match self.first.get_or_modify(source) {
            Err(original) => Err(original),
            Ok(intermediate) => self
                .second
                .get_or_modify(intermediate)
                .map_err(|leftover| self.first.review(leftover)),
        }
    }
}

impl<P1: Clone, P2: Clone, A> Clone for ComposedPrism<P1, P2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P1: std::fmt::Debug, P2: std::fmt::Debug, A> std::fmt::Debug for ComposedPrism<P1, P2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedPrism")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// Creates a prism for a single-payload enum variant.
///
/// The payload type must be `Clone`; previewing clones the payload out of
/// the matched variant.
///
/// # Syntax
///
/// - `prism!(Enum, Variant)`
/// - `prism!(Enum<T1, T2>, Variant)` for generic enums
///
/// # Examples
///
/// ```rust
/// use kindling::optics::Prism;
/// use kindling::prism;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Holder<T> { Filled(T), Empty }
///
/// let filled = prism!(Holder<i32>, Filled);
/// assert_eq!(filled.preview(&Holder::Filled(42)), Some(42));
/// assert_eq!(filled.preview(&Holder::Empty), None);
/// ```
#[macro_export]
macro_rules! prism {
    ($type:ident, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$type| match source {
                $type::$variant(value) => Some(value.clone()),
                _ => None,
            },
            $type::$variant,
            |source: $type| match source {
                $type::$variant(value) => Ok(value),
                other => Err(other),
            },
        )
    };
    ($type:ident < $($generic:ty),* $(,)? >, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$type<$($generic),*>| match source {
                $type::$variant(value) => Some(value.clone()),
                _ => None,
            },
            $type::<$($generic),*>::$variant,
            |source: $type<$($generic),*>| match source {
                $type::$variant(value) => Ok(value),
                other => Err(other),
            },
        )
    };
}
