//! The interoperability gate.
//!
//! Binary operators between two different cursor types exist only when one
//! converts into the other. Both operands are lifted into the common type
//! and the operation runs there, so `m == c` and `c == m` agree for a
//! mutable cursor `m` and a constant cursor `c` over the same storage.

use crate::cursor::Cursor;

/// `Self` and `Other` can meet in a common cursor type.
///
/// Declare it with `#[derive(Interoperable)]`; the reflexive impl is always
/// generated, and `#[interoperable(Target)]` adds both directions for a
/// `Target: From<Self>`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` and `{Other}` are not interoperable",
    label = "no comparison or difference exists between these cursors",
    note = "add `#[interoperable({Other})]` to `{Self}`'s `#[derive(Interoperable)]` if one converts into the other"
)]
pub trait Interoperable<Other: Cursor>: Cursor {
    /// The type both operands are lifted into.
    type Common: Cursor;

    fn lift(&self) -> Self::Common;
    fn lift_other(other: &Other) -> Self::Common;
}
