//! # Layer 2: The Core Operation Set
//!
//! A cursor supplies a handful of primitives and declares its category; the
//! [`Facade`](crate::Facade) turns that into the full surface.
//!
//! | Trait | Primitives |
//! |-------|------------|
//! | [`Cursor`] | `dereference`, `equal`, `increment` |
//! | [`BidirectionalCursor`] | `decrement` |
//! | [`RandomAccessCursor`] | `advance`, `distance_to` |
//!
//! Copying a cursor produces an independent position.

use core::cell::Cell;

use crate::category::{AccessTag, TraversalTag};
use crate::primitives::{Absent, Distance, Present};

/// A position in a sequence.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a cursor",
    label = "this type does not implement `Cursor`",
    note = "implement `dereference`, `equal` and `increment`, and declare the category tags"
)]
pub trait Cursor: Clone {
    /// Element type, without any reference wrapper.
    type Value;
    /// What `dereference` returns. Lvalue access requires a real reference.
    type Reference: ReferenceFor<<Self::Access as AccessTag>::Lvalue>;
    type Distance: Distance;
    type Access: AccessTag;
    type Traversal: TraversalTag;

    fn dereference(&self) -> Self::Reference;
    fn equal(&self, other: &Self) -> bool;
    fn increment(&mut self);
}

pub trait BidirectionalCursor: Cursor {
    fn decrement(&mut self);
}

pub trait RandomAccessCursor: BidirectionalCursor {
    /// Moves by `n` positions; negative `n` moves backward.
    fn advance(&mut self, n: Self::Distance);

    /// Signed number of increments from `self` to `other`.
    fn distance_to(&self, other: &Self) -> Self::Distance;
}

// =============================================================================
// Lvalue references
// =============================================================================

/// Ties a cursor's `Reference` to its access tag's `Lvalue` flag.
///
/// Any type may be the reference of a non-lvalue cursor. Lvalue cursors
/// must hand out `&T` (which covers `&Cell<T>`) or `&mut T`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a reference, but the cursor declares lvalue access",
    label = "lvalue access needs `&T`, `&Cell<T>` or `&mut T` here",
    note = "declare a non-lvalue access such as `ReadableAccess` for by-value references"
)]
pub trait ReferenceFor<Lvalue> {}

impl<R> ReferenceFor<Absent> for R {}

impl<T: ?Sized> ReferenceFor<Present> for &T {}

impl<T: ?Sized> ReferenceFor<Present> for &mut T {}

// =============================================================================
// Reading and writing through a reference
// =============================================================================

/// Read-as-conversion: obtain a value from whatever `dereference` returned.
pub trait Load<V> {
    fn load(self) -> V;
}

/// Write-as-assignment: store a value through a reference.
pub trait Store<V> {
    fn store(self, value: V);
}

impl<V> Load<V> for V {
    #[inline]
    fn load(self) -> V {
        self
    }
}

impl<T: Clone> Load<T> for &T {
    #[inline]
    fn load(self) -> T {
        self.clone()
    }
}

impl<T: Copy> Load<T> for &Cell<T> {
    #[inline]
    fn load(self) -> T {
        self.get()
    }
}

impl<T> Store<T> for &Cell<T> {
    #[inline]
    fn store(self, value: T) {
        self.set(value);
    }
}
