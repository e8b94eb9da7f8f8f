//! # Layer 1: Capability Categories
//!
//! Two hierarchies classify a cursor: [`traversal`] (how it moves) and
//! [`access`] (what dereferencing grants). Each exists twice:
//!
//! - as zero-sized tags (`ForwardTraversal`, `SwappableAccess`, ...) that
//!   gate the facade's surface at compile time through [`Implies`], and
//! - as plain enums ([`Traversal`], [`Access`], [`Category`]) for code that
//!   inspects or reconciles categories at runtime.
//!
//! [`Meet`] picks the weaker of two related tags; for unrelated tags it has
//! no impl. The runtime [`Capability::meet`] reports the same condition as a
//! [`ConfigError`].

pub mod access;
pub mod lattice;
pub mod legacy;
pub mod tag;
pub mod traversal;

pub use access::{
    Access, AccessTag, ConstantLvalueAccess, MutableLvalueAccess, ReadableAccess,
    SwappableAccess, WritableAccess,
};
pub use lattice::{Above, AtLeast, Below, Compare, Implies, Meet, MeetOf, Same, TagOrdering};
pub use legacy::{LegacyCategory, legacy_label};
pub use tag::{Category, CategoryTag, Operation};
pub use traversal::{
    BidirectionalTraversal, ForwardTraversal, IncrementableTraversal, RandomAccessTraversal,
    SinglePassTraversal, Traversal, TraversalTag,
};

use core::fmt;

use crate::error::ConfigError;

/// Runtime implication and meet.
pub trait Capability: Copy + PartialEq + fmt::Debug + fmt::Display {
    /// `self` is usable wherever `other` is required.
    fn implies(self, other: Self) -> bool;

    fn related(self, other: Self) -> bool {
        self.implies(other) || other.implies(self)
    }

    /// The weaker of two related values.
    fn meet(self, other: Self) -> Result<Self, ConfigError>;
}

impl Capability for Traversal {
    fn implies(self, other: Self) -> bool {
        Traversal::implies(self, other)
    }

    fn meet(self, other: Self) -> Result<Self, ConfigError> {
        Ok(self.weaker(other))
    }
}

impl Capability for Access {
    fn implies(self, other: Self) -> bool {
        Access::implies(self, other)
    }

    fn meet(self, other: Self) -> Result<Self, ConfigError> {
        if self.implies(other) {
            Ok(other)
        } else if other.implies(self) {
            Ok(self)
        } else {
            tracing::debug!(lhs = %self, rhs = %other, "no meet for unrelated access kinds");
            Err(ConfigError::UnrelatedAccess(self, other))
        }
    }
}
