//! Macros used by cursor-caps itself to lay out its tag hierarchies.

pub mod lattice;
