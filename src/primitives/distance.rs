//! Signed distance types.
//!
//! A cursor's `Distance` is the argument of `advance` and the result of
//! `distance_to`. Only the signed primitive integers qualify, which keeps the
//! facade's `Add<D>`/`Sub<D>` impls disjoint from `Sub<Facade<_>>`.

use core::fmt::Debug;
use core::hash::Hash;
use core::ops::{Add, Neg, Sub};

mod sealed {
    pub trait Sealed {}
}

/// A signed integral distance between two cursor positions.
pub trait Distance:
    sealed::Sealed
    + Copy
    + Debug
    + Default
    + Eq
    + Ord
    + Hash
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + 'static
{
    const ZERO: Self;
    const ONE: Self;

    /// Widens to `i128` without loss.
    fn to_i128(self) -> i128;

    /// Narrows from `i128`, wrapping on overflow like an `as` cast.
    fn from_i128(value: i128) -> Self;

    /// Converts between distance types.
    #[inline]
    fn cast<D: Distance>(self) -> D {
        D::from_i128(self.to_i128())
    }
}

macro_rules! impl_distance {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Distance for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn from_i128(value: i128) -> Self {
                    value as $ty
                }
            }
        )*
    };
}

impl_distance!(i8, i16, i32, i64, i128, isize);

/// Invokes `$mac!` once per distance type.
///
/// Foreign-type impls such as `isize + Facade<C>` cannot be written
/// generically over `D: Distance`, so they are stamped out per type.
#[macro_export]
#[doc(hidden)]
macro_rules! __for_each_distance {
    ($mac:ident) => {
        $mac!(i8);
        $mac!(i16);
        $mac!(i32);
        $mac!(i64);
        $mac!(i128);
        $mac!(isize);
    };
}
