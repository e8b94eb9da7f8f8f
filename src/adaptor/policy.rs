//! What an adaptor changes about the cursor it wraps.

use crate::category::AccessTag;
use crate::config::{ResolveAccess, ResolveDistance, ResolveTraversal, UseDefault};
use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor, ReferenceFor};

/// Access tag a policy ends up with over `W`.
pub(crate) type AccessOf<W, P> =
    <<P as Policy<W>>::Access as ResolveAccess<<W as Cursor>::Access>>::Out;

/// Overrides applied by an [`Adaptor`](super::Adaptor) to a wrapped `W`.
///
/// Every primitive defaults to `W`'s own. Associated types have no defaults
/// in the language, so implement this under `#[policy]`, which fills in the
/// ones left out.
///
/// `decrement`, `advance` and `distance_to` written inside a `#[policy]`
/// impl are moved into [`PolicyDecrement`] and [`PolicyJump`], and the
/// `Backward`/`Jump` knobs switch to [`Overridden`]. That lets a policy give
/// a forward-only base a bidirectional or random-access surface.
///
/// Primitives receive `W`'s distance type; the adaptor casts to and from an
/// overridden `Distance`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an adaptor policy for `{W}`",
    label = "missing `impl Policy<{W}>`",
    note = "an empty `#[policy]` impl of `Policy<{W}>` passes everything through"
)]
pub trait Policy<W: Cursor>: Clone {
    type Value;
    type Reference: ReferenceFor<<AccessOf<W, Self> as AccessTag>::Lvalue>;
    type Distance: ResolveDistance<W::Distance>;
    type Access: ResolveAccess<W::Access>;
    type Traversal: ResolveTraversal<W::Traversal>;
    /// Source of `decrement`: [`UseDefault`] or [`Overridden`].
    type Backward;
    /// Source of `advance` and `distance_to`: [`UseDefault`] or [`Overridden`].
    type Jump;

    fn dereference(&self, base: &W) -> Self::Reference;

    #[inline]
    fn equal(&self, base: &W, other: &W) -> bool {
        base.equal(other)
    }

    #[inline]
    fn increment(&self, base: &mut W) {
        base.increment();
    }
}

/// A policy-supplied `decrement`.
pub trait PolicyDecrement<W: Cursor>: Policy<W> {
    fn decrement(&self, base: &mut W);
}

/// Policy-supplied random-access primitives.
pub trait PolicyJump<W: Cursor>: Policy<W> {
    fn advance(&self, base: &mut W, n: W::Distance);

    /// Signed distance from `base` to `other`.
    fn distance_to(&self, base: &W, other: &W) -> W::Distance;
}

/// Marks a motion knob as served by the policy itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Overridden;

/// Where an adaptor's `decrement` comes from.
#[diagnostic::on_unimplemented(
    message = "`{W}` cannot move backward and the policy does not say how",
    label = "no `decrement` for this adaptor",
    note = "write `fn decrement(&self, base: &mut W)` in the `#[policy]` impl"
)]
pub trait ResolveBackward<W: Cursor, P> {
    fn decrement(policy: &P, base: &mut W);
}

impl<W: BidirectionalCursor, P> ResolveBackward<W, P> for UseDefault {
    #[inline]
    fn decrement(_: &P, base: &mut W) {
        base.decrement();
    }
}

impl<W: Cursor, P: PolicyDecrement<W>> ResolveBackward<W, P> for Overridden {
    #[inline]
    fn decrement(policy: &P, base: &mut W) {
        policy.decrement(base);
    }
}

/// Where an adaptor's `advance` and `distance_to` come from.
#[diagnostic::on_unimplemented(
    message = "`{W}` is not random access and the policy does not say how to jump",
    label = "no `advance`/`distance_to` for this adaptor",
    note = "write both `advance` and `distance_to` in the `#[policy]` impl"
)]
pub trait ResolveJump<W: Cursor, P> {
    fn advance(policy: &P, base: &mut W, n: W::Distance);
    fn distance_to(policy: &P, base: &W, other: &W) -> W::Distance;
}

impl<W: RandomAccessCursor, P> ResolveJump<W, P> for UseDefault {
    #[inline]
    fn advance(_: &P, base: &mut W, n: W::Distance) {
        base.advance(n);
    }

    #[inline]
    fn distance_to(_: &P, base: &W, other: &W) -> W::Distance {
        base.distance_to(other)
    }
}

impl<W: Cursor, P: PolicyJump<W>> ResolveJump<W, P> for Overridden {
    #[inline]
    fn advance(policy: &P, base: &mut W, n: W::Distance) {
        policy.advance(base, n);
    }

    #[inline]
    fn distance_to(policy: &P, base: &W, other: &W) -> W::Distance {
        policy.distance_to(base, other)
    }
}

/// The empty override set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Passthrough;

#[macros::policy]
impl<W: Cursor> Policy<W> for Passthrough {}
