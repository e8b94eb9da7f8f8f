//! Synthesized members, one trait per gated operation.

use super::proxy::{ArrowProxy, IndexProxy};
use super::Facade;
use crate::category::{
    AccessTag, BidirectionalTraversal, ForwardTraversal, Implies, RandomAccessTraversal,
    ReadableAccess,
};
use crate::cursor::{BidirectionalCursor, Cursor, Load, RandomAccessCursor};
use crate::primitives::{Absent, Present};

// =============================================================================
// Increment / Decrement
// =============================================================================

/// `++s`
pub trait Increment {
    fn inc(&mut self) -> &mut Self;
}

impl<C: Cursor> Increment for Facade<C> {
    #[inline]
    fn inc(&mut self) -> &mut Self {
        self.0.increment();
        self
    }
}

/// `s++`: advances and returns the previous position.
///
/// Only multi-pass cursors have a previous position worth keeping.
pub trait PostIncrement: Increment + Sized {
    fn post_inc(&mut self) -> Self;
}

impl<C> PostIncrement for Facade<C>
where
    C: Cursor,
    C::Traversal: Implies<ForwardTraversal>,
{
    #[inline]
    fn post_inc(&mut self) -> Self {
        let previous = self.clone();
        self.0.increment();
        previous
    }
}

/// `--s` and `s--`
pub trait Decrement: Sized {
    fn dec(&mut self) -> &mut Self;
    fn post_dec(&mut self) -> Self;
}

impl<C> Decrement for Facade<C>
where
    C: BidirectionalCursor,
    C::Traversal: Implies<BidirectionalTraversal>,
{
    #[inline]
    fn dec(&mut self) -> &mut Self {
        self.0.decrement();
        self
    }

    #[inline]
    fn post_dec(&mut self) -> Self {
        let previous = self.clone();
        self.0.decrement();
        previous
    }
}

// =============================================================================
// Arrow
// =============================================================================

/// `s->`: something that derefs to the current element.
pub trait Arrow {
    type Target;
    fn arrow(&self) -> Self::Target;
}

/// Chooses how `arrow` is served, keyed on the access tag's `Lvalue` flag.
///
/// Lvalue cursors hand out their reference, which already points into
/// storage. Everything else materializes the value into an [`ArrowProxy`].
pub trait SelectArrow<C: Cursor> {
    type Target;
    fn arrow(core: &C) -> Self::Target;
}

impl<C: Cursor> SelectArrow<C> for Present {
    type Target = C::Reference;

    #[inline]
    fn arrow(core: &C) -> C::Reference {
        core.dereference()
    }
}

impl<C> SelectArrow<C> for Absent
where
    C: Cursor,
    C::Reference: Load<C::Value>,
{
    type Target = ArrowProxy<C::Value>;

    #[inline]
    fn arrow(core: &C) -> ArrowProxy<C::Value> {
        ArrowProxy::new(<C::Reference as Load<C::Value>>::load(core.dereference()))
    }
}

impl<C> Arrow for Facade<C>
where
    C: Cursor,
    C::Access: Implies<ReadableAccess>,
    <C::Access as AccessTag>::Lvalue: SelectArrow<C>,
{
    type Target = <<C::Access as AccessTag>::Lvalue as SelectArrow<C>>::Target;

    #[inline]
    fn arrow(&self) -> Self::Target {
        <<C::Access as AccessTag>::Lvalue as SelectArrow<C>>::arrow(&self.0)
    }
}

// =============================================================================
// Subscript
// =============================================================================

/// `s[n]`
///
/// `Index` cannot be used: it must return a borrow of `self`, while `s[n]`
/// yields the reference of another position or a proxy.
pub trait Subscript {
    type Distance;
    type Output;
    fn at(&self, n: Self::Distance) -> Self::Output;
}

/// Chooses what `s[n]` yields, keyed on the access tag's `ProxiedWrite` flag.
///
/// Writable non-lvalue cursors get an [`IndexProxy`] that reads and writes
/// `*(s + n)`; everything else gets the reference at `s + n`.
pub trait SelectSubscript<C: Cursor> {
    type Output;
    fn subscript(position: C) -> Self::Output;
}

impl<C: Cursor> SelectSubscript<C> for Present {
    type Output = IndexProxy<C>;

    #[inline]
    fn subscript(position: C) -> IndexProxy<C> {
        IndexProxy::new(position)
    }
}

impl<C: Cursor> SelectSubscript<C> for Absent {
    type Output = C::Reference;

    #[inline]
    fn subscript(position: C) -> C::Reference {
        position.dereference()
    }
}

impl<C> Subscript for Facade<C>
where
    C: RandomAccessCursor,
    C::Traversal: Implies<RandomAccessTraversal>,
    <C::Access as AccessTag>::ProxiedWrite: SelectSubscript<C>,
{
    type Distance = C::Distance;
    type Output = <<C::Access as AccessTag>::ProxiedWrite as SelectSubscript<C>>::Output;

    #[inline]
    fn at(&self, n: C::Distance) -> Self::Output {
        let mut position = self.0.clone();
        position.advance(n);
        <<C::Access as AccessTag>::ProxiedWrite as SelectSubscript<C>>::subscript(position)
    }
}
