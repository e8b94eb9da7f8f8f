//! # Layer 3: The Facade
//!
//! [`Facade<C>`] wraps a cursor and synthesizes the complete operation set
//! from its primitives. Which members exist depends on the declared tags:
//!
//! | Member | Requires |
//! |--------|----------|
//! | `get()` (`*s`), [`Increment`], `==` | any cursor |
//! | [`Arrow`] | access ≥ readable |
//! | [`PostIncrement`] | traversal ≥ forward |
//! | [`Decrement`] | traversal ≥ bidirectional |
//! | [`Subscript`], `+= -= + -`, `< <= > >=`, `s1 - s2` | traversal ≥ random access |
//!
//! Every gate is a where-clause, so a member the category does not allow is
//! missing from the type and its use fails to compile.
//!
//! Cross-type `==`, ordering and difference go through the
//! [`Interoperable`](crate::Interoperable) gate; difference additionally
//! needs both operands to share the same distance type.

mod ops;
mod proxy;
mod span;
mod surface;

pub use proxy::{ArrowProxy, IndexProxy};
pub use span::{SizeHintStrategy, Span};
pub use surface::{Arrow, Decrement, Increment, PostIncrement, SelectArrow, SelectSubscript, Subscript};

use crate::category::{AccessTag, Category, LegacyCategory, TraversalTag};
use crate::cursor::Cursor;

/// A cursor with its full operation surface.
#[derive(Clone, Copy, Debug, Default, Hash)]
pub struct Facade<C>(C);

impl<C: Cursor> Facade<C> {
    /// Runtime classification of the wrapped cursor.
    pub const CATEGORY: Category = Category::new(
        <C::Access as AccessTag>::KIND,
        <C::Traversal as TraversalTag>::KIND,
    );

    /// Legacy single-hierarchy label for [`Self::CATEGORY`].
    pub const LEGACY: LegacyCategory = Self::CATEGORY.legacy();

    #[inline]
    pub const fn new(core: C) -> Self {
        Facade(core)
    }

    /// `*s`
    #[inline]
    pub fn get(&self) -> C::Reference {
        self.0.dereference()
    }

    #[inline]
    pub fn core(&self) -> &C {
        &self.0
    }

    #[inline]
    pub fn core_mut(&mut self) -> &mut C {
        &mut self.0
    }

    #[inline]
    pub fn into_core(self) -> C {
        self.0
    }

    /// Iterates from `self` up to, not including, `end`.
    #[inline]
    pub fn span_to(self, end: Self) -> Span<C> {
        Span::new(self.0, end.0)
    }
}

impl<C: Cursor> From<C> for Facade<C> {
    #[inline]
    fn from(core: C) -> Self {
        Facade(core)
    }
}
