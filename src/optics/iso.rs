//! Isos witness that two types carry the same information.
//!
//! An [`Iso`] is a lossless, invertible conversion between a source and a
//! target type. Because it never fails and focuses exactly one value, an iso
//! can stand in for a [`Lens`] or a [`Prism`] through [`Iso::to_lens`] and
//! [`Iso::to_prism`].
//!
//! # Laws
//!
//! 1. **GetReverseGet**: `iso.reverse_get(iso.get(source.clone())) == source`
//! 2. **ReverseGetGet**: `iso.get(iso.reverse_get(value.clone())) == value`
//!
//! # Examples
//!
//! ```rust
//! use kindling::iso;
//! use kindling::optics::Iso;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Celsius(f64);
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Fahrenheit(f64);
//!
//! let to_fahrenheit = iso!(
//!     |c: Celsius| Fahrenheit(c.0 * 9.0 / 5.0 + 32.0),
//!     |f: Fahrenheit| Celsius((f.0 - 32.0) * 5.0 / 9.0)
//! );
//!
//! assert_eq!(to_fahrenheit.get(Celsius(100.0)), Fahrenheit(212.0));
//! assert_eq!(to_fahrenheit.reverse_get(Fahrenheit(32.0)), Celsius(0.0));
//! ```

use std::marker::PhantomData;

use super::lens::Lens;
use super::prism::Prism;

/// A lossless, invertible conversion between two types.
pub trait Iso<S, A> {
    /// Converts the source into the target.
    fn get(&self, source: S) -> A;

    /// Converts the target back into the source.
    fn reverse_get(&self, value: A) -> S;

    /// Applies a function on the target side of the conversion.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        self.reverse_get(function(self.get(source)))
    }

    /// Swaps the direction of the conversion.
    fn reverse(self) -> ReversedIso<Self>
    where
        Self: Sized,
    {
        ReversedIso::new(self)
    }

    /// Composes with an iso on the target.
    fn compose<B, I>(self, other: I) -> ComposedIso<Self, I, A>
    where
        Self: Sized,
        I: Iso<A, B>,
    {
        ComposedIso::new(self, other)
    }

    /// Views the iso as a lens whose focus is the converted value.
    fn to_lens(self) -> IsoAsLens<Self, S, A>
    where
        Self: Sized,
    {
        IsoAsLens::new(self)
    }

    /// Views the iso as a prism that always matches.
    fn to_prism(self) -> IsoAsPrism<Self, S, A>
    where
        Self: Sized,
    {
        IsoAsPrism::new(self)
    }
}

/// An iso built from a pair of conversion closures.
pub struct FunctionIso<S, A, G, R> {
    forward: G,
    backward: R,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, R> FunctionIso<S, A, G, R> {
    /// Wraps the two conversions into an iso.
    #[must_use]
    pub const fn new(forward: G, backward: R) -> Self {
        Self {
            forward,
            backward,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, R> Iso<S, A> for FunctionIso<S, A, G, R>
where
    G: Fn(S) -> A,
    R: Fn(A) -> S,
{
    fn get(&self, source: S) -> A {
        (self.forward)(source)
    }

    fn reverse_get(&self, value: A) -> S {
        (self.backward)(value)
    }
}

impl<S, A, G: Clone, R: Clone> Clone for FunctionIso<S, A, G, R> {
    fn clone(&self) -> Self {
        Self {
            forward: self.forward.clone(),
            backward: self.backward.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, R> std::fmt::Debug for FunctionIso<S, A, G, R> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FunctionIso").finish_non_exhaustive()
    }
}

/// An iso with its two directions swapped.
pub struct ReversedIso<I> {
    iso: I,
}

impl<I> ReversedIso<I> {
    /// Wraps an iso, swapping its direction.
    #[must_use]
    pub const fn new(iso: I) -> Self {
        Self { iso }
    }
}

impl<S, A, I> Iso<A, S> for ReversedIso<I>
where
    I: Iso<S, A>,
{
    fn get(&self, source: A) -> S {
        self.iso.reverse_get(source)
    }

    fn reverse_get(&self, value: S) -> A {
        self.iso.get(value)
    }
}

impl<I: Clone> Clone for ReversedIso<I> {
    fn clone(&self) -> Self {
        Self {
            iso: self.iso.clone(),
        }
    }
}

impl<I: std::fmt::Debug> std::fmt::Debug for ReversedIso<I> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ReversedIso")
            .field("iso", &self.iso)
            .finish()
    }
}

/// Two isos run in sequence.
pub struct ComposedIso<I1, I2, A> {
    first: I1,
    second: I2,
    _marker: PhantomData<A>,
}

impl<I1, I2, A> ComposedIso<I1, I2, A> {
    /// Chains two isos.
    #[must_use]
    pub const fn new(first: I1, second: I2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, I1, I2> Iso<S, B> for ComposedIso<I1, I2, A>
where
    I1: Iso<S, A>,
    I2: Iso<A, B>,
{
    fn get(&self, source: S) -> B {
        self.second.get(self.first.get(source))
    }

    fn reverse_get(&self, value: B) -> S {
        self.first.reverse_get(self.second.reverse_get(value))
    }
}

impl<I1: Clone, I2: Clone, A> Clone for ComposedIso<I1, I2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<I1: std::fmt::Debug, I2: std::fmt::Debug, A> std::fmt::Debug for ComposedIso<I1, I2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedIso")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// An iso used where a lens is expected.
///
/// The conversion always succeeds, so the lens laws follow directly from the
/// iso laws. Reading converts a clone of the source.
pub struct IsoAsLens<I, S, A> {
    iso: I,
    _marker: PhantomData<(S, A)>,
}

impl<I, S, A> IsoAsLens<I, S, A> {
    /// Wraps an iso as a lens.
    #[must_use]
    pub const fn new(iso: I) -> Self {
        Self {
            iso,
            _marker: PhantomData,
        }
    }
}

impl<I, S, A> Lens<S, A> for IsoAsLens<I, S, A>
where
    I: Iso<S, A>,
    S: Clone,
{
    fn get(&self, source: &S) -> A {
        self.iso.get(source.clone())
    }

    fn set(&self, _source: S, value: A) -> S {
        self.iso.reverse_get(value)
    }
}

impl<I: Clone, S, A> Clone for IsoAsLens<I, S, A> {
    fn clone(&self) -> Self {
        Self {
            iso: self.iso.clone(),
            _marker: PhantomData,
        }
    }
}

impl<I: std::fmt::Debug, S, A> std::fmt::Debug for IsoAsLens<I, S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("IsoAsLens")
            .field("iso", &self.iso)
            .finish()
    }
}

/// An iso used where a prism is expected; previewing always matches.
pub struct IsoAsPrism<I, S, A> {
    iso: I,
    _marker: PhantomData<(S, A)>,
}

impl<I, S, A> IsoAsPrism<I, S, A> {
    /// Wraps an iso as a prism.
    #[must_use]
    pub const fn new(iso: I) -> Self {
        Self {
            iso,
            _marker: PhantomData,
        }
    }
}

impl<I, S, A> Prism<S, A> for IsoAsPrism<I, S, A>
where
    I: Iso<S, A>,
    S: Clone,
{
    fn preview(&self, source: &S) -> Option<A> {
        Some(self.iso.get(source.clone()))
    }

    fn review(&self, value: A) -> S {
        self.iso.reverse_get(value)
    }

    fn get_or_modify(&self, source: S) -> Result<A, S> {
        Ok(self.iso.get(source))
    }
}

impl<I: Clone, S, A> Clone for IsoAsPrism<I, S, A> {
    fn clone(&self) -> Self {
        Self {
            iso: self.iso.clone(),
            _marker: PhantomData,
        }
    }
}

impl<I: std::fmt::Debug, S, A> std::fmt::Debug for IsoAsPrism<I, S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("IsoAsPrism")
            .field("iso", &self.iso)
            .finish()
    }
}

/// The identity iso.
#[must_use]
pub fn iso_identity<S>() -> FunctionIso<S, S, impl Fn(S) -> S, impl Fn(S) -> S> {
    FunctionIso::new(|source| source, |value| value)
}

/// The iso between `(A, B)` and `(B, A)`.
#[must_use]
pub fn iso_swap<A, B>()
-> FunctionIso<(A, B), (B, A), impl Fn((A, B)) -> (B, A), impl Fn((B, A)) -> (A, B)> {
    FunctionIso::new(|(a, b)| (b, a), |(b, a)| (a, b))
}

/// Creates an iso from a forward and a backward conversion.
///
/// # Examples
///
/// ```rust
/// use kindling::iso;
/// use kindling::optics::Iso;
///
/// let doubled = iso!(|n: i32| n * 2, |n: i32| n / 2);
/// assert_eq!(doubled.get(21), 42);
/// assert_eq!(doubled.reverse_get(42), 21);
/// ```
#[macro_export]
macro_rules! iso {
    ($forward:expr, $backward:expr $(,)?) => {
        $crate::optics::FunctionIso::new($forward, $backward)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Clone, PartialEq, Debug)]
    struct Meters(f64);

    #[derive(Clone, PartialEq, Debug)]
    struct Centimeters(f64);

    fn meters_iso() -> impl Iso<Meters, Centimeters> + Clone {
        iso!(
            |m: Meters| Centimeters(m.0 * 100.0),
            |c: Centimeters| Meters(c.0 / 100.0)
        )
    }

    #[rstest]
    fn get_and_reverse_get_convert() {
        let iso = meters_iso();
        assert_eq!(iso.get(Meters(1.5)), Centimeters(150.0));
        assert_eq!(iso.reverse_get(Centimeters(250.0)), Meters(2.5));
    }

    #[rstest]
    fn modify_works_on_the_target_side() {
        let iso = meters_iso();
        assert_eq!(
            iso.modify(Meters(1.0), |Centimeters(c)| Centimeters(c + 50.0)),
            Meters(1.5)
        );
    }

    #[rstest]
    fn reverse_swaps_the_direction() {
        let reversed = meters_iso().reverse();
        assert_eq!(reversed.get(Centimeters(100.0)), Meters(1.0));
        assert_eq!(reversed.reverse_get(Meters(2.0)), Centimeters(200.0));
    }

    #[rstest]
    fn compose_chains_conversions() {
        let doubled = iso!(|n: i32| n * 2, |n: i32| n / 2);
        let shown = iso!(
            |n: i32| n.to_string(),
            |s: String| s.parse::<i32>().unwrap_or(0)
        );
        let composed = doubled.compose(shown);

        assert_eq!(composed.get(21), "42".to_string());
        assert_eq!(composed.reverse_get("42".to_string()), 21);
    }

    #[rstest]
    fn to_lens_reads_and_writes_through_the_conversion() {
        let lens = meters_iso().to_lens();
        assert_eq!(lens.get(&Meters(1.0)), Centimeters(100.0));
        assert_eq!(lens.set(Meters(1.0), Centimeters(300.0)), Meters(3.0));
    }

    #[rstest]
    fn to_prism_always_matches() {
        let prism = meters_iso().to_prism();
        assert_eq!(prism.preview(&Meters(1.0)), Some(Centimeters(100.0)));
        assert_eq!(prism.review(Centimeters(200.0)), Meters(2.0));
        assert_eq!(prism.get_or_modify(Meters(1.0)), Ok(Centimeters(100.0)));
    }

    #[rstest]
    fn identity_and_swap() {
        assert_eq!(iso_identity::<i32>().get(42), 42);
        assert_eq!(iso_swap::<i32, &str>().get((1, "a")), ("a", 1));
        assert_eq!(iso_swap::<i32, &str>().reverse_get(("a", 1)), (1, "a"));
    }

    #[rstest]
    fn round_trip_laws() {
        let iso = meters_iso();
        let source = Meters(1.25);
        assert_eq!(iso.reverse_get(iso.get(source.clone())), source);

        let value = Centimeters(40.0);
        assert_eq!(iso.get(iso.reverse_get(value.clone())), value);
    }
}
