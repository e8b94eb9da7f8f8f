//! # Layer 4: Generic Algorithms
//!
//! Algorithms that pick their strategy from the traversal tag:
//! stepping one position at a time where that is all the cursor offers,
//! jumping where it is random access.

use crate::category::{
    BidirectionalTraversal, ForwardTraversal, Implies, IncrementableTraversal,
    RandomAccessTraversal, SinglePassTraversal, SwappableAccess,
};
use crate::cursor::{BidirectionalCursor, Cursor, Load, RandomAccessCursor, Store};
use crate::facade::Facade;
use crate::primitives::Distance;

// =============================================================================
// advance
// =============================================================================

/// How a traversal tag moves a cursor by `n`.
pub trait AdvanceStrategy<C: Cursor> {
    fn advance(position: &mut C, n: C::Distance);
}

fn step_forward<C: Cursor>(position: &mut C, n: C::Distance) {
    debug_assert!(
        n >= <C::Distance as Distance>::ZERO,
        "cannot move a forward-only cursor backward"
    );
    let mut i = <C::Distance as Distance>::ZERO;
    while i < n {
        position.increment();
        i = i + <C::Distance as Distance>::ONE;
    }
}

macro_rules! forward_only_advance {
    ($($tag:ty),*) => {
        $(
            impl<C: Cursor> AdvanceStrategy<C> for $tag {
                #[inline]
                fn advance(position: &mut C, n: C::Distance) {
                    step_forward(position, n);
                }
            }
        )*
    };
}

forward_only_advance!(IncrementableTraversal, SinglePassTraversal, ForwardTraversal);

impl<C: BidirectionalCursor> AdvanceStrategy<C> for BidirectionalTraversal {
    fn advance(position: &mut C, n: C::Distance) {
        if n >= <C::Distance as Distance>::ZERO {
            step_forward(position, n);
        } else {
            let mut i = n;
            while i < <C::Distance as Distance>::ZERO {
                position.decrement();
                i = i + <C::Distance as Distance>::ONE;
            }
        }
    }
}

impl<C: RandomAccessCursor> AdvanceStrategy<C> for RandomAccessTraversal {
    #[inline]
    fn advance(position: &mut C, n: C::Distance) {
        position.advance(n);
    }
}

/// Moves `position` by `n`.
///
/// Cursors below bidirectional can only move forward; `n` must not be
/// negative for them.
#[inline]
pub fn advance<C>(position: &mut Facade<C>, n: C::Distance)
where
    C: Cursor,
    C::Traversal: AdvanceStrategy<C>,
{
    <C::Traversal as AdvanceStrategy<C>>::advance(position.core_mut(), n);
}

// =============================================================================
// distance
// =============================================================================

/// How a traversal tag measures the distance between two positions.
pub trait DistanceStrategy<C: Cursor> {
    fn distance(first: &C, last: &C) -> C::Distance;
}

macro_rules! counting_distance {
    ($($tag:ty),*) => {
        $(
            impl<C: Cursor> DistanceStrategy<C> for $tag {
                fn distance(first: &C, last: &C) -> C::Distance {
                    let mut position = first.clone();
                    let mut n = <C::Distance as Distance>::ZERO;
                    while !position.equal(last) {
                        position.increment();
                        n = n + <C::Distance as Distance>::ONE;
                    }
                    n
                }
            }
        )*
    };
}

counting_distance!(SinglePassTraversal, ForwardTraversal, BidirectionalTraversal);

impl<C: RandomAccessCursor> DistanceStrategy<C> for RandomAccessTraversal {
    #[inline]
    fn distance(first: &C, last: &C) -> C::Distance {
        first.distance_to(last)
    }
}

/// Number of increments from `first` to `last`.
///
/// `last` must be reachable from `first`.
#[inline]
pub fn distance<C>(first: &Facade<C>, last: &Facade<C>) -> C::Distance
where
    C: Cursor,
    C::Traversal: DistanceStrategy<C> + Implies<SinglePassTraversal>,
{
    <C::Traversal as DistanceStrategy<C>>::distance(first.core(), last.core())
}

// =============================================================================
// iter_swap
// =============================================================================

/// Exchanges the values at two positions.
pub fn iter_swap<C1, C2>(a: &Facade<C1>, b: &Facade<C2>)
where
    C1: Cursor,
    C2: Cursor<Value = C1::Value>,
    C1::Access: Implies<SwappableAccess>,
    C2::Access: Implies<SwappableAccess>,
    C1::Reference: Load<C1::Value> + Store<C1::Value>,
    C2::Reference: Load<C1::Value> + Store<C1::Value>,
{
    let from_a = <C1::Reference as Load<C1::Value>>::load(a.get());
    let from_b = <C2::Reference as Load<C1::Value>>::load(b.get());
    <C1::Reference as Store<C1::Value>>::store(a.get(), from_b);
    <C2::Reference as Store<C1::Value>>::store(b.get(), from_a);
}
