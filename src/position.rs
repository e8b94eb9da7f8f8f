//! Raw contiguous positions, the pointer-like base cursors.
//!
//! [`Ptr`] reads a slice through shared references. [`CellPtr`] walks a
//! slice of `Cell`s and hands out `&Cell<T>`, a mutable lvalue that stays
//! `Clone`; it converts into `Ptr<'a, Cell<T>>`, the constant view of the
//! same storage, and the two compare and subtract with each other.

use core::cell::Cell;
use core::fmt;

use crate::category::{ConstantLvalueAccess, MutableLvalueAccess, RandomAccessTraversal};
use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};

// =============================================================================
// Ptr
// =============================================================================

/// A constant position into a slice.
///
/// Positions `0..=len` are valid; `len` is the end position and must not be
/// dereferenced.
#[derive(macros::Interoperable)]
pub struct Ptr<'a, T> {
    slice: &'a [T],
    index: usize,
}

impl<'a, T> Ptr<'a, T> {
    #[inline]
    pub const fn begin(slice: &'a [T]) -> Self {
        Ptr { slice, index: 0 }
    }

    #[inline]
    pub const fn end(slice: &'a [T]) -> Self {
        Ptr {
            slice,
            index: slice.len(),
        }
    }

    #[inline]
    pub const fn at(slice: &'a [T], index: usize) -> Self {
        Ptr { slice, index }
    }

    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }
}

impl<T> Clone for Ptr<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Ptr<'_, T> {}

impl<T> fmt::Debug for Ptr<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ptr")
            .field("addr", &self.slice.as_ptr())
            .field("index", &self.index)
            .finish()
    }
}

impl<'a, T> Cursor for Ptr<'a, T> {
    type Value = T;
    type Reference = &'a T;
    type Distance = isize;
    type Access = ConstantLvalueAccess;
    type Traversal = RandomAccessTraversal;

    /// # Panics
    ///
    /// At the end position.
    #[inline]
    fn dereference(&self) -> &'a T {
        &self.slice[self.index]
    }

    #[inline]
    fn equal(&self, other: &Self) -> bool {
        debug_assert!(
            core::ptr::eq(self.slice, other.slice),
            "comparing positions into different slices"
        );
        self.index == other.index
    }

    #[inline]
    fn increment(&mut self) {
        self.index += 1;
    }
}

impl<T> BidirectionalCursor for Ptr<'_, T> {
    #[inline]
    fn decrement(&mut self) {
        self.index -= 1;
    }
}

impl<T> RandomAccessCursor for Ptr<'_, T> {
    #[inline]
    fn advance(&mut self, n: isize) {
        self.index = self.index.wrapping_add_signed(n);
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        (other.index as isize).wrapping_sub(self.index as isize)
    }
}

// =============================================================================
// CellPtr
// =============================================================================

/// A mutable position into a slice of cells.
#[derive(macros::Interoperable)]
#[interoperable(Ptr<'a, Cell<T>>)]
pub struct CellPtr<'a, T> {
    inner: Ptr<'a, Cell<T>>,
}

impl<'a, T> CellPtr<'a, T> {
    #[inline]
    pub const fn begin(slice: &'a [Cell<T>]) -> Self {
        CellPtr {
            inner: Ptr::begin(slice),
        }
    }

    #[inline]
    pub const fn end(slice: &'a [Cell<T>]) -> Self {
        CellPtr {
            inner: Ptr::end(slice),
        }
    }

    #[inline]
    pub const fn at(slice: &'a [Cell<T>], index: usize) -> Self {
        CellPtr {
            inner: Ptr::at(slice, index),
        }
    }

    #[inline]
    pub const fn index(&self) -> usize {
        self.inner.index
    }
}

impl<T> Clone for CellPtr<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CellPtr<'_, T> {}

impl<T> fmt::Debug for CellPtr<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellPtr")
            .field("addr", &self.inner.slice.as_ptr())
            .field("index", &self.inner.index)
            .finish()
    }
}

impl<'a, T> From<CellPtr<'a, T>> for Ptr<'a, Cell<T>> {
    #[inline]
    fn from(position: CellPtr<'a, T>) -> Self {
        position.inner
    }
}

impl<'a, T> Cursor for CellPtr<'a, T> {
    type Value = T;
    type Reference = &'a Cell<T>;
    type Distance = isize;
    type Access = MutableLvalueAccess;
    type Traversal = RandomAccessTraversal;

    /// # Panics
    ///
    /// At the end position.
    #[inline]
    fn dereference(&self) -> &'a Cell<T> {
        self.inner.dereference()
    }

    #[inline]
    fn equal(&self, other: &Self) -> bool {
        self.inner.equal(&other.inner)
    }

    #[inline]
    fn increment(&mut self) {
        self.inner.increment();
    }
}

impl<T> BidirectionalCursor for CellPtr<'_, T> {
    #[inline]
    fn decrement(&mut self) {
        self.inner.decrement();
    }
}

impl<T> RandomAccessCursor for CellPtr<'_, T> {
    #[inline]
    fn advance(&mut self, n: isize) {
        self.inner.advance(n);
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        self.inner.distance_to(&other.inner)
    }
}
