//! Implication and meet over capability tags.
//!
//! Every tag hierarchy is described once with `capability_lattice!`, which
//! emits a `Compare` impl for each related (ordered) pair of tags. The
//! user-facing relations are derived from it:
//!
//! ```text
//! Compare<B>::Ordering = Above | Same | Below     (generated)
//!   ├─ Implies<B>   when Ordering ∈ {Above, Same}
//!   └─ Meet<B>::Out = Ordering::Lower<A, B>
//! ```
//!
//! Unrelated pairs have no `Compare` impl, so asking for their meet does not
//! compile.

use core::cmp::Ordering;

/// Outcome of comparing two related tags.
pub trait TagOrdering: 'static {
    const ORDERING: Ordering;
    /// The weaker of `A` and `B`, given that `A` compares to `B` as `Self`.
    type Lower<A, B>;
}

/// `A` strictly implies `B`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Above;

/// `A` and `B` are the same tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Same;

/// `B` strictly implies `A`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Below;

impl TagOrdering for Above {
    const ORDERING: Ordering = Ordering::Greater;
    type Lower<A, B> = B;
}

impl TagOrdering for Same {
    const ORDERING: Ordering = Ordering::Equal;
    type Lower<A, B> = A;
}

impl TagOrdering for Below {
    const ORDERING: Ordering = Ordering::Less;
    type Lower<A, B> = A;
}

/// Position of `Self` relative to `Other` in their hierarchy.
///
/// Only implemented for related pairs. Generated by `capability_lattice!`.
pub trait Compare<Other> {
    type Ordering: TagOrdering;
}

/// Orderings that mean "at least as capable".
pub trait AtLeast: TagOrdering {}

impl AtLeast for Above {}
impl AtLeast for Same {}

/// Combines the orderings of two tag components that must point the same way.
///
/// `Above` with `Below` has no impl: the pair is unrelated.
pub trait Agree<Other> {
    type Out: TagOrdering;
}

impl<O: TagOrdering> Agree<O> for Same {
    type Out = O;
}

impl Agree<Same> for Above {
    type Out = Above;
}

impl Agree<Above> for Above {
    type Out = Above;
}

impl Agree<Same> for Below {
    type Out = Below;
}

impl Agree<Below> for Below {
    type Out = Below;
}

/// `Self` is usable wherever `Target` is required.
///
/// Reflexive and transitive; the type-level form of tag convertibility.
#[diagnostic::on_unimplemented(
    message = "capability `{Self}` does not imply `{Target}`",
    label = "`{Self}` is weaker than or unrelated to `{Target}`",
    note = "the operation you are using needs at least `{Target}`; declare a stronger tag on the cursor"
)]
pub trait Implies<Target> {}

impl<A, B> Implies<B> for A
where
    A: Compare<B>,
    <A as Compare<B>>::Ordering: AtLeast,
{
}

/// The weaker of two related capability tags.
#[diagnostic::on_unimplemented(
    message = "capability tags `{Self}` and `{Other}` are unrelated",
    label = "no meet exists for `{Self}` and `{Other}`",
    note = "a meet is only defined when one tag implies the other"
)]
pub trait Meet<Other> {
    type Out;
}

impl<A, B> Meet<B> for A
where
    A: Compare<B>,
{
    type Out = <<A as Compare<B>>::Ordering as TagOrdering>::Lower<A, B>;
}

/// Shorthand for `<A as Meet<B>>::Out`.
pub type MeetOf<A, B> = <A as Meet<B>>::Out;
