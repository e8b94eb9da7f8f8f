//! Arithmetic and comparison operators.

use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use super::Facade;
use crate::category::{Implies, RandomAccessTraversal};
use crate::cursor::{Cursor, RandomAccessCursor};
use crate::interop::Interoperable;
use crate::primitives::Distance;

// =============================================================================
// s += n, s -= n, s + n, n + s, s - n
// =============================================================================

// Stamped out per distance type: a generic `Sub<C::Distance>` would overlap
// with `Sub<Facade<C2>>`, and `n + s` needs a concrete left operand.
macro_rules! impl_advance_ops {
    ($d:ty) => {
        impl<C> AddAssign<$d> for Facade<C>
        where
            C: RandomAccessCursor<Distance = $d>,
            C::Traversal: Implies<RandomAccessTraversal>,
        {
            #[inline]
            fn add_assign(&mut self, n: $d) {
                self.0.advance(n);
            }
        }

        impl<C> SubAssign<$d> for Facade<C>
        where
            C: RandomAccessCursor<Distance = $d>,
            C::Traversal: Implies<RandomAccessTraversal>,
        {
            #[inline]
            fn sub_assign(&mut self, n: $d) {
                self.0.advance(-n);
            }
        }

        impl<C> Add<$d> for Facade<C>
        where
            C: RandomAccessCursor<Distance = $d>,
            C::Traversal: Implies<RandomAccessTraversal>,
        {
            type Output = Facade<C>;

            #[inline]
            fn add(mut self, n: $d) -> Facade<C> {
                self += n;
                self
            }
        }

        impl<C> Add<Facade<C>> for $d
        where
            C: RandomAccessCursor<Distance = $d>,
            C::Traversal: Implies<RandomAccessTraversal>,
        {
            type Output = Facade<C>;

            #[inline]
            fn add(self, s: Facade<C>) -> Facade<C> {
                s + self
            }
        }

        impl<C> Sub<$d> for Facade<C>
        where
            C: RandomAccessCursor<Distance = $d>,
            C::Traversal: Implies<RandomAccessTraversal>,
        {
            type Output = Facade<C>;

            #[inline]
            fn sub(mut self, n: $d) -> Facade<C> {
                self -= n;
                self
            }
        }
    };
}

crate::__for_each_distance!(impl_advance_ops);

// =============================================================================
// ==, !=
// =============================================================================

impl<C1, C2> PartialEq<Facade<C2>> for Facade<C1>
where
    C1: Interoperable<C2>,
    C2: Cursor,
{
    #[inline]
    fn eq(&self, rhs: &Facade<C2>) -> bool {
        let rhs = <C1 as Interoperable<C2>>::lift_other(&rhs.0);
        rhs.equal(&<C1 as Interoperable<C2>>::lift(&self.0))
    }
}

impl<C: Interoperable<C>> Eq for Facade<C> {}

// =============================================================================
// <, <=, >, >=
// =============================================================================

/// `lhs` relative to `rhs`, by the sign of `rhs.distance_to(lhs)`.
#[inline]
fn order<C1, C2>(lhs: &C1, rhs: &C2) -> Ordering
where
    C1: Interoperable<C2>,
    C2: Cursor,
    <C1 as Interoperable<C2>>::Common: RandomAccessCursor,
{
    let rhs = <C1 as Interoperable<C2>>::lift_other(rhs);
    let d = rhs.distance_to(&<C1 as Interoperable<C2>>::lift(lhs));
    d.cmp(&<<<C1 as Interoperable<C2>>::Common as Cursor>::Distance as Distance>::ZERO)
}

impl<C1, C2> PartialOrd<Facade<C2>> for Facade<C1>
where
    C1: Interoperable<C2>,
    C2: Cursor,
    <C1 as Interoperable<C2>>::Common: RandomAccessCursor,
    <<C1 as Interoperable<C2>>::Common as Cursor>::Traversal: Implies<RandomAccessTraversal>,
{
    #[inline]
    fn partial_cmp(&self, rhs: &Facade<C2>) -> Option<Ordering> {
        Some(order(&self.0, &rhs.0))
    }
}

impl<C> Ord for Facade<C>
where
    C: Interoperable<C>,
    C::Common: RandomAccessCursor,
    <C::Common as Cursor>::Traversal: Implies<RandomAccessTraversal>,
{
    #[inline]
    fn cmp(&self, rhs: &Self) -> Ordering {
        order(&self.0, &rhs.0)
    }
}

// =============================================================================
// s1 - s2
// =============================================================================

impl<C1, C2> Sub<Facade<C2>> for Facade<C1>
where
    C1: Interoperable<C2>,
    C2: Cursor<Distance = C1::Distance>,
    <C1 as Interoperable<C2>>::Common: RandomAccessCursor<Distance = C1::Distance>,
    <<C1 as Interoperable<C2>>::Common as Cursor>::Traversal: Implies<RandomAccessTraversal>,
{
    type Output = C1::Distance;

    #[inline]
    fn sub(self, rhs: Facade<C2>) -> C1::Distance {
        let rhs = <C1 as Interoperable<C2>>::lift_other(&rhs.0);
        rhs.distance_to(&<C1 as Interoperable<C2>>::lift(&self.0))
    }
}
