//! Adaptor knob resolution.
//!
//! An adaptor policy may leave any of its `Traversal`, `Access` or `Distance`
//! knobs at [`UseDefault`]; resolution then substitutes the wrapped cursor's
//! own choice. A concrete tag (or distance type) resolves to itself.

use crate::category::{AccessTag, TraversalTag};
use crate::primitives::Distance;

/// Sentinel meaning "inherit this knob from the wrapped cursor".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct UseDefault;

/// Resolve a traversal knob against the base's traversal `D`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a traversal tag or `UseDefault`",
    label = "expected a traversal tag"
)]
pub trait ResolveTraversal<D: TraversalTag> {
    type Out: TraversalTag;
}

/// Resolve an access knob against the base's access `D`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an access tag or `UseDefault`",
    label = "expected an access tag"
)]
pub trait ResolveAccess<D: AccessTag> {
    type Out: AccessTag;
}

/// Resolve a distance knob against the base's distance `D`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a signed distance type or `UseDefault`",
    label = "expected one of i8, i16, i32, i64, i128, isize"
)]
pub trait ResolveDistance<D: Distance> {
    type Out: Distance;
}

impl<D: TraversalTag> ResolveTraversal<D> for UseDefault {
    type Out = D;
}

impl<D: AccessTag> ResolveAccess<D> for UseDefault {
    type Out = D;
}

impl<D: Distance> ResolveDistance<D> for UseDefault {
    type Out = D;
}

macro_rules! resolve_distance_to_self {
    ($t:ty) => {
        impl<D: Distance> ResolveDistance<D> for $t {
            type Out = $t;
        }
    };
}

crate::__for_each_distance!(resolve_distance_to_self);

