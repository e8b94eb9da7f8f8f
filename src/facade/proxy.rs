//! Stand-ins for references that cannot be formed directly.

use core::ops::Deref;

use crate::cursor::{Cursor, Load, Store};

/// Result of `arrow` when the cursor has no storage to point into.
///
/// Holds a materialized copy of the dereferenced value and derefs to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArrowProxy<V>(V);

impl<V> ArrowProxy<V> {
    #[inline]
    pub const fn new(value: V) -> Self {
        ArrowProxy(value)
    }

    #[inline]
    pub fn into_inner(self) -> V {
        self.0
    }
}

impl<V> Deref for ArrowProxy<V> {
    type Target = V;

    #[inline]
    fn deref(&self) -> &V {
        &self.0
    }
}

/// Result of `s[n]` for writable cursors that are not lvalues.
///
/// Holds the position `s + n`; `get` reads `*(s + n)` and `set` writes
/// through it.
#[derive(Clone, Debug)]
#[must_use = "an index proxy does nothing until read or written"]
pub struct IndexProxy<C>(C);

impl<C: Cursor> IndexProxy<C> {
    #[inline]
    pub(crate) fn new(position: C) -> Self {
        IndexProxy(position)
    }

    #[inline]
    pub fn get(&self) -> C::Value
    where
        C::Reference: Load<C::Value>,
    {
        <C::Reference as Load<C::Value>>::load(self.0.dereference())
    }

    #[inline]
    pub fn set(&self, value: C::Value)
    where
        C::Reference: Store<C::Value>,
    {
        <C::Reference as Store<C::Value>>::store(self.0.dereference(), value);
    }

    /// The reference `*(s + n)` itself.
    #[inline]
    pub fn reference(&self) -> C::Reference {
        self.0.dereference()
    }
}

impl<C> Store<C::Value> for IndexProxy<C>
where
    C: Cursor,
    C::Reference: Store<C::Value>,
{
    #[inline]
    fn store(self, value: C::Value) {
        self.set(value);
    }
}
