//! Bridge from a pair of positions to `Iterator`.

use core::iter::FusedIterator;

use crate::category::{
    BidirectionalTraversal, ForwardTraversal, Implies, RandomAccessTraversal, SinglePassTraversal,
};
use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};
use crate::primitives::Distance;

/// The half-open range `[front, back)`.
///
/// Yields each position's reference. Needs single-pass traversal so the
/// end can be recognized by equality.
#[derive(Clone, Debug)]
pub struct Span<C> {
    front: C,
    back: C,
}

impl<C: Cursor> Span<C> {
    #[inline]
    pub(crate) fn new(front: C, back: C) -> Self {
        Span { front, back }
    }

    /// Remaining bounds as `(front, back)`.
    #[inline]
    pub fn into_bounds(self) -> (C, C) {
        (self.front, self.back)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front.equal(&self.back)
    }
}

/// How a traversal tag bounds the length of a span.
pub trait SizeHintStrategy<C: Cursor> {
    fn size_hint(front: &C, back: &C) -> (usize, Option<usize>);
}

macro_rules! unknown_size_hint {
    ($($tag:ty),*) => {
        $(
            impl<C: Cursor> SizeHintStrategy<C> for $tag {
                #[inline]
                fn size_hint(_: &C, _: &C) -> (usize, Option<usize>) {
                    (0, None)
                }
            }
        )*
    };
}

unknown_size_hint!(SinglePassTraversal, ForwardTraversal, BidirectionalTraversal);

impl<C: RandomAccessCursor> SizeHintStrategy<C> for RandomAccessTraversal {
    #[inline]
    fn size_hint(front: &C, back: &C) -> (usize, Option<usize>) {
        let n = usize::try_from(front.distance_to(back).to_i128()).unwrap_or(0);
        (n, Some(n))
    }
}

impl<C> Iterator for Span<C>
where
    C: Cursor,
    C::Traversal: Implies<SinglePassTraversal> + SizeHintStrategy<C>,
{
    type Item = C::Reference;

    #[inline]
    fn next(&mut self) -> Option<C::Reference> {
        if self.is_empty() {
            return None;
        }
        let item = self.front.dereference();
        self.front.increment();
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        <C::Traversal as SizeHintStrategy<C>>::size_hint(&self.front, &self.back)
    }
}

impl<C> DoubleEndedIterator for Span<C>
where
    C: BidirectionalCursor,
    C::Traversal:
        Implies<SinglePassTraversal> + Implies<BidirectionalTraversal> + SizeHintStrategy<C>,
{
    #[inline]
    fn next_back(&mut self) -> Option<C::Reference> {
        if self.is_empty() {
            return None;
        }
        self.back.decrement();
        Some(self.back.dereference())
    }
}

impl<C> ExactSizeIterator for Span<C>
where
    C: RandomAccessCursor,
    C::Traversal:
        Implies<SinglePassTraversal> + Implies<RandomAccessTraversal> + SizeHintStrategy<C>,
{
}

impl<C> FusedIterator for Span<C>
where
    C: Cursor,
    C::Traversal: Implies<SinglePassTraversal> + SizeHintStrategy<C>,
{
}
