#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library (and `thiserror/std`, `tracing/std`)

//! # cursor-caps
//!
//! Write a handful of cursor primitives, get the whole iterator surface.
//!
//! ## Architecture
//!
//! A cursor declares an **access** tag and a **traversal** tag and
//! implements the primitives its traversal calls for. [`Facade`] then
//! provides dereference, arrow, indexing, increment and decrement, pointer
//! arithmetic, ordering, equality and difference, each one present only
//! when the declared tags allow it.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Type-level Bool (Present/Absent), signed Distance              |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Categories                                              |
//! |  - Traversal and access tags, Implies, Meet, legacy labels        |
//! |  - Runtime mirror: Traversal, Access, Category, ConfigError       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Core Operations                                         |
//! |  - Cursor, BidirectionalCursor, RandomAccessCursor, Interoperable |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Synthesis                                               |
//! |  - Facade (operators, proxies, Span), Adaptor + Policy            |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 4: Algorithms                                              |
//! |  - advance, distance, iter_swap                                   |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use cursor_caps::prelude::*;
//!
//! let data = [10, 20, 30, 40];
//! let begin = Facade::new(Ptr::begin(&data));
//! let end = Facade::new(Ptr::end(&data));
//!
//! assert_eq!(*begin.at(2), 30);
//! assert_eq!(end - begin, 4);
//! assert!(begin < end);
//! assert_eq!(begin.span_to(end).copied().sum::<i32>(), 100);
//! ```

// Allow `::cursor_caps` to work inside the crate itself
extern crate self as cursor_caps;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Categories
// =============================================================================
pub mod category;
pub mod config;
pub mod error;

// =============================================================================
// Layer 2: Core Operations
// =============================================================================
pub mod cursor;
pub mod interop;

// =============================================================================
// Layer 3: Synthesis
// =============================================================================
pub mod adaptor;
pub mod facade;
pub mod position;

// =============================================================================
// Layer 4: Algorithms
// =============================================================================
pub mod algo;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use adaptor::{Adaptor, Passthrough, Policy};
pub use category::{
    Above, Access, AccessTag, Below, BidirectionalTraversal, Capability, Category, CategoryTag,
    Compare, ConstantLvalueAccess, ForwardTraversal, Implies, IncrementableTraversal,
    LegacyCategory, Meet, MeetOf, MutableLvalueAccess, Operation, RandomAccessTraversal,
    ReadableAccess, Same, SinglePassTraversal, SwappableAccess, Traversal, TraversalTag,
    WritableAccess, legacy_label,
};
pub use config::UseDefault;
pub use cursor::{BidirectionalCursor, Cursor, Load, RandomAccessCursor, ReferenceFor, Store};
pub use error::ConfigError;
pub use facade::{
    Arrow, ArrowProxy, Decrement, Facade, Increment, IndexProxy, PostIncrement, Span, Subscript,
};
pub use interop::Interoperable;
pub use position::{CellPtr, Ptr};
pub use primitives::{Absent, Bool, Distance, Present};

// Re-export proc-macros
pub use macros::{Interoperable, capability_lattice, policy};

/// Common items for writing and using cursors.
pub mod prelude {
    pub use crate::adaptor::{Adaptor, Passthrough, Policy};
    pub use crate::category::{
        Access, BidirectionalTraversal, Capability, Category, ConstantLvalueAccess,
        ForwardTraversal, Implies, IncrementableTraversal, MutableLvalueAccess,
        RandomAccessTraversal, ReadableAccess, SinglePassTraversal, SwappableAccess, Traversal,
        WritableAccess,
    };
    pub use crate::config::UseDefault;
    pub use crate::cursor::{BidirectionalCursor, Cursor, Load, RandomAccessCursor, Store};
    pub use crate::facade::{Arrow, Decrement, Facade, Increment, PostIncrement, Subscript};
    pub use crate::interop::Interoperable;
    pub use crate::position::{CellPtr, Ptr};
    pub use macros::{Interoperable, policy};
}
