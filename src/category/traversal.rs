//! Traversal capabilities: how a cursor may move.

use core::fmt;

use crate::config::ResolveTraversal;

/// Runtime mirror of the traversal tags.
///
/// Traversal forms a chain, so the derived `Ord` is the implication order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Traversal {
    Incrementable,
    SinglePass,
    Forward,
    Bidirectional,
    RandomAccess,
}

impl Traversal {
    pub const ALL: [Traversal; 5] = [
        Traversal::Incrementable,
        Traversal::SinglePass,
        Traversal::Forward,
        Traversal::Bidirectional,
        Traversal::RandomAccess,
    ];

    /// `self` is usable wherever `other` is required.
    #[inline]
    pub const fn implies(self, other: Traversal) -> bool {
        self as u8 >= other as u8
    }

    /// The weaker of two traversals. Every pair is related.
    #[inline]
    pub const fn weaker(self, other: Traversal) -> Traversal {
        if self.implies(other) { other } else { self }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Traversal::Incrementable => "incrementable",
            Traversal::SinglePass => "single-pass",
            Traversal::Forward => "forward",
            Traversal::Bidirectional => "bidirectional",
            Traversal::RandomAccess => "random-access",
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A type-level traversal tag.
pub trait TraversalTag: Copy + Default + fmt::Debug + 'static {
    const KIND: Traversal;
}

macro_rules! traversal_tags {
    ($($(#[$meta:meta])* $kind:ident),* $(,)?) => {
        paste::paste! {
            $(
                $(#[$meta])*
                #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
                pub struct [<$kind Traversal>];

                impl TraversalTag for [<$kind Traversal>] {
                    const KIND: Traversal = Traversal::$kind;
                }

                impl<D: TraversalTag> ResolveTraversal<D> for [<$kind Traversal>] {
                    type Out = Self;
                }
            )*
        }
    };
}

traversal_tags! {
    /// Can be incremented; no promise that positions can be revisited.
    Incrementable,
    /// Incrementable and comparable for equality.
    SinglePass,
    /// Multi-pass: equal cursors dereference to the same element.
    Forward,
    /// Forward plus decrement.
    Bidirectional,
    /// Bidirectional plus constant-time jumps, distance and ordering.
    RandomAccess,
}

macros::capability_lattice! {
    IncrementableTraversal,
    SinglePassTraversal: IncrementableTraversal,
    ForwardTraversal: SinglePassTraversal,
    BidirectionalTraversal: ForwardTraversal,
    RandomAccessTraversal: BidirectionalTraversal,
}
