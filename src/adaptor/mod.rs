//! # Layer 3: Adaptors
//!
//! [`Adaptor<W, P>`] wraps an existing cursor `W` and becomes a cursor
//! itself. Its [`Policy`] says what differs from `W`; anything it leaves out
//! is inherited:
//!
//! | Knob | Omitted means |
//! |------|---------------|
//! | `Value`, `Reference` | `W::Value`, `W::Reference` |
//! | `Distance`, `Access`, `Traversal` | [`UseDefault`](crate::UseDefault), resolved to `W`'s |
//! | `dereference` | `*w` |
//! | `equal`, `increment`, `decrement`, `advance`, `distance_to` | the same primitive on `W` |
//!
//! Write policy impls under `#[policy]` so the omitted associated types are
//! filled in. Overriding `Reference` without naming `Access` makes the
//! adaptor [`ReadableAccess`](crate::ReadableAccess).
//!
//! The adaptor is bidirectional or random access when its resolved traversal
//! says so and the moves are available, from `W` or from the policy.

mod policy;

pub use policy::{
    Overridden, Passthrough, Policy, PolicyDecrement, PolicyJump, ResolveBackward, ResolveJump,
};

use policy::AccessOf;

use crate::category::{BidirectionalTraversal, Implies, RandomAccessTraversal};
use crate::config::{ResolveDistance, ResolveTraversal};
use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};
use crate::interop::Interoperable;
use crate::primitives::Distance;

type TraversalOf<W, P> =
    <<P as Policy<W>>::Traversal as ResolveTraversal<<W as Cursor>::Traversal>>::Out;

type DistanceOf<W, P> =
    <<P as Policy<W>>::Distance as ResolveDistance<<W as Cursor>::Distance>>::Out;

/// Converts a distance between the adaptor's and the base's types.
#[inline]
fn convert<D1: Distance, D2: Distance>(n: D1) -> D2 {
    let converted: D2 = n.cast();
    debug_assert_eq!(
        converted.to_i128(),
        n.to_i128(),
        "distance {n:?} does not fit the other distance type"
    );
    converted
}

/// A cursor built from another cursor and a policy.
#[derive(Clone, Copy, Debug, Default, Hash)]
pub struct Adaptor<W, P = Passthrough> {
    base: W,
    policy: P,
}

impl<W: Cursor> Adaptor<W> {
    /// Wraps `base` without changing anything about it.
    #[inline]
    pub fn new(base: W) -> Self {
        Adaptor {
            base,
            policy: Passthrough,
        }
    }
}

impl<W: Cursor, P: Policy<W>> Adaptor<W, P> {
    #[inline]
    pub fn with_policy(base: W, policy: P) -> Self {
        Adaptor { base, policy }
    }

    /// The wrapped position.
    #[inline]
    pub fn base(&self) -> &W {
        &self.base
    }

    #[inline]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    #[inline]
    pub fn into_base(self) -> W {
        self.base
    }

    /// Converts from an adaptor over a related cursor, e.g. mutable into
    /// constant.
    #[inline]
    pub fn from_related<W2>(other: Adaptor<W2, P>) -> Self
    where
        W2: Cursor + Into<W>,
        W: Interoperable<W2>,
    {
        Adaptor {
            base: other.base.into(),
            policy: other.policy,
        }
    }
}

impl<W: Cursor, P: Policy<W>> Cursor for Adaptor<W, P> {
    type Value = <P as Policy<W>>::Value;
    type Reference = <P as Policy<W>>::Reference;
    type Distance = DistanceOf<W, P>;
    type Access = AccessOf<W, P>;
    type Traversal = TraversalOf<W, P>;

    #[inline]
    fn dereference(&self) -> Self::Reference {
        self.policy.dereference(&self.base)
    }

    #[inline]
    fn equal(&self, other: &Self) -> bool {
        self.policy.equal(&self.base, &other.base)
    }

    #[inline]
    fn increment(&mut self) {
        self.policy.increment(&mut self.base);
    }
}

impl<W, P> BidirectionalCursor for Adaptor<W, P>
where
    W: Cursor,
    P: Policy<W>,
    P::Backward: ResolveBackward<W, P>,
    TraversalOf<W, P>: Implies<BidirectionalTraversal>,
{
    #[inline]
    fn decrement(&mut self) {
        <P::Backward as ResolveBackward<W, P>>::decrement(&self.policy, &mut self.base);
    }
}

impl<W, P> RandomAccessCursor for Adaptor<W, P>
where
    W: Cursor,
    P: Policy<W>,
    P::Backward: ResolveBackward<W, P>,
    P::Jump: ResolveJump<W, P>,
    TraversalOf<W, P>: Implies<BidirectionalTraversal>,
    TraversalOf<W, P>: Implies<RandomAccessTraversal>,
{
    #[inline]
    fn advance(&mut self, n: Self::Distance) {
        <P::Jump as ResolveJump<W, P>>::advance(&self.policy, &mut self.base, convert(n));
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> Self::Distance {
        convert(<P::Jump as ResolveJump<W, P>>::distance_to(
            &self.policy,
            &self.base,
            &other.base,
        ))
    }
}

impl<W1, W2, P> Interoperable<Adaptor<W2, P>> for Adaptor<W1, P>
where
    W1: Interoperable<W2>,
    W2: Cursor,
    P: Policy<W1> + Policy<W2> + Policy<<W1 as Interoperable<W2>>::Common>,
{
    type Common = Adaptor<<W1 as Interoperable<W2>>::Common, P>;

    #[inline]
    fn lift(&self) -> Self::Common {
        Adaptor {
            base: <W1 as Interoperable<W2>>::lift(&self.base),
            policy: self.policy.clone(),
        }
    }

    #[inline]
    fn lift_other(other: &Adaptor<W2, P>) -> Self::Common {
        Adaptor {
            base: <W1 as Interoperable<W2>>::lift_other(&other.base),
            policy: other.policy.clone(),
        }
    }
}
