//! Newtype wrappers selecting an algebraic structure.
//!
//! One underlying type can carry several lawful `Semigroup`/`Monoid`
//! structures: integers combine by addition or by multiplication, booleans
//! by `||` or by `&&`. These wrappers pick one:
//!
//! - [`Sum`]: addition (identity: 0)
//! - [`Product`]: multiplication (identity: 1)
//! - [`Max`]: maximum (identity: the type minimum, via [`Bounded`])
//! - [`Min`]: minimum (identity: the type maximum, via [`Bounded`])
//! - [`Any`]: boolean or (identity: `false`)
//! - [`All`]: boolean and (identity: `true`)

/// Additive wrapper: `Sum(a).combine(Sum(b)) == Sum(a + b)`.
///
/// # Examples
///
/// ```rust
/// use kindling::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
/// assert_eq!(Sum::<i32>::empty(), Sum(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

/// Multiplicative wrapper: `Product(a).combine(Product(b)) == Product(a * b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Product<A>(pub A);

/// Maximum wrapper: `Max(a).combine(Max(b)) == Max(a.max(b))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Max<A>(pub A);

/// Minimum wrapper: `Min(a).combine(Min(b)) == Min(a.min(b))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Min<A>(pub A);

/// Boolean-or wrapper: `Any(a).combine(Any(b)) == Any(a || b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Any(pub bool);

/// Boolean-and wrapper: `All(a).combine(All(b)) == All(a && b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct All(pub bool);

macro_rules! wrapper_accessors {
    ($($name:ident),*) => {
        $(
            impl<A> $name<A> {
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
            }
        )*
    };
}

wrapper_accessors!(Sum, Product, Max, Min);

/// Types with a least and a greatest value.
///
/// Supplies the identity elements for the [`Max`] and [`Min`] monoids:
/// the identity of `max` is the least value, the identity of `min` the
/// greatest.
pub trait Bounded {
    /// The least value of the type.
    const MIN_VALUE: Self;
    /// The greatest value of the type.
    const MAX_VALUE: Self;
}

macro_rules! bounded_primitive {
    ($($ty:ty),*) => {
        $(
            impl Bounded for $ty {
                const MIN_VALUE: Self = <$ty>::MIN;
                const MAX_VALUE: Self = <$ty>::MAX;
            }
        )*
    };
}

bounded_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char);

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}

static_assertions::assert_impl_all!(Sum<i64>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Product<u32>: Send, Sync, Copy);
