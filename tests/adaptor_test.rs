//! Policies override part of a wrapped cursor and inherit the rest.

use cursor_caps::prelude::*;
use cursor_caps::{ArrowProxy, IndexProxy, LegacyCategory};
use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

// =============================================================================
// Reverse: overrides movement, inherits everything else
// =============================================================================

#[derive(Clone, Copy, Default)]
struct Reverse;

#[policy]
impl<W: RandomAccessCursor> Policy<W> for Reverse {
    fn dereference(&self, base: &W) -> W::Reference {
        let mut previous = base.clone();
        previous.decrement();
        previous.dereference()
    }

    fn increment(&self, base: &mut W) {
        base.decrement();
    }

    fn decrement(&self, base: &mut W) {
        base.increment();
    }

    fn advance(&self, base: &mut W, n: W::Distance) {
        base.advance(-n);
    }

    fn distance_to(&self, base: &W, other: &W) -> W::Distance {
        other.distance_to(base)
    }
}

#[test]
fn reverse_walks_backwards() {
    let data = [1, 2, 3, 4, 5, 6];
    let rbegin = Facade::new(Adaptor::with_policy(Ptr::end(&data), Reverse));
    let rend = Facade::new(Adaptor::with_policy(Ptr::begin(&data), Reverse));

    let seen: Vec<i32> = rbegin.span_to(rend).copied().collect();
    assert_eq!(seen, [6, 5, 4, 3, 2, 1]);

    assert_eq!(rend - rbegin, 6);
    assert!(rbegin < rend);
    assert_eq!(*rbegin.at(1), 5);
    assert_eq!(*(rbegin + 2isize).get(), 4);
    assert_eq!(rbegin.core().base().index(), data.len());
}

assert_type_eq_all!(
    <Adaptor<Ptr<'static, i32>, Reverse> as Cursor>::Traversal,
    RandomAccessTraversal
);
assert_type_eq_all!(
    <Adaptor<Ptr<'static, i32>, Reverse> as Cursor>::Reference,
    &'static i32
);

// =============================================================================
// Doubled: by-value reference, readable access
// =============================================================================

#[derive(Clone, Copy, Default)]
struct Doubled;

#[policy]
impl<'a> Policy<Ptr<'a, i32>> for Doubled {
    type Reference = i32;
    type Access = ReadableAccess;

    fn dereference(&self, base: &Ptr<'a, i32>) -> i32 {
        *base.dereference() * 2
    }
}

type DoubledFacade<'a> = Facade<Adaptor<Ptr<'a, i32>, Doubled>>;

assert_impl_all!(DoubledFacade<'static>: Arrow, Subscript, Decrement, PartialOrd);
assert_type_eq_all!(<DoubledFacade<'static> as Subscript>::Output, i32);

#[test]
fn transform_by_value() {
    let data = [1, 2, 3];
    let s: DoubledFacade<'_> = Facade::new(Adaptor::with_policy(Ptr::begin(&data), Doubled));

    assert_eq!(s.get(), 2);
    assert_eq!(s.at(2), 6);
    assert_eq!(*s.arrow(), 2);
    assert_eq!(DoubledFacade::LEGACY, LegacyCategory::Input);
}

// =============================================================================
// Squared: a new reference type without a declared access
// =============================================================================

#[derive(Clone, Copy, Default)]
struct Squared;

#[policy]
impl<'a> Policy<Ptr<'a, i32>> for Squared {
    type Reference = i32;

    fn dereference(&self, base: &Ptr<'a, i32>) -> i32 {
        let v = *base.dereference();
        v * v
    }
}

type SquaredFacade<'a> = Facade<Adaptor<Ptr<'a, i32>, Squared>>;

assert_type_eq_all!(<Adaptor<Ptr<'static, i32>, Squared> as Cursor>::Access, ReadableAccess);
assert_type_eq_all!(<SquaredFacade<'static> as Arrow>::Target, ArrowProxy<i32>);
assert_type_eq_all!(<SquaredFacade<'static> as Subscript>::Output, i32);

#[test]
fn by_value_reference_is_not_an_lvalue() {
    let data = [1, 2, 3, 4];
    let s: SquaredFacade<'_> = Facade::new(Adaptor::with_policy(Ptr::begin(&data), Squared));

    assert_eq!(s.get(), 1);
    assert_eq!(s.at(3), 16);
    assert_eq!(s.arrow().into_inner(), 1);
    assert_eq!(
        SquaredFacade::CATEGORY,
        Category::new(Access::Readable, Traversal::RandomAccess)
    );
    assert_eq!(SquaredFacade::LEGACY, LegacyCategory::Input);
    assert_eq!(Facade::<Ptr<'static, i32>>::LEGACY, LegacyCategory::RandomAccess);
}

// =============================================================================
// Narrowed: restricted traversal and an overridden distance type
// =============================================================================

#[derive(Clone, Copy, Default)]
struct ForwardOnly;

#[policy]
impl<'a> Policy<Ptr<'a, i32>> for ForwardOnly {
    type Traversal = ForwardTraversal;
}

type ForwardFacade<'a> = Facade<Adaptor<Ptr<'a, i32>, ForwardOnly>>;

assert_impl_all!(ForwardFacade<'static>: Increment, PostIncrement, Arrow, PartialEq);
assert_not_impl_any!(
    ForwardFacade<'static>: Decrement,
    Subscript,
    PartialOrd,
    core::ops::Sub<ForwardFacade<'static>>,
    core::ops::AddAssign<isize>
);

#[test]
fn forward_only_still_iterates() {
    let data = [4, 5, 6];
    let begin: ForwardFacade<'_> = Facade::new(Adaptor::with_policy(Ptr::begin(&data), ForwardOnly));
    let end: ForwardFacade<'_> = Facade::new(Adaptor::with_policy(Ptr::end(&data), ForwardOnly));

    assert_eq!(begin.span_to(end).count(), 3);
    let mut s = begin;
    let old = s.post_inc();
    assert_eq!(*old.get(), 4);
    assert_eq!(*s.get(), 5);
    assert!(s != begin);
    assert_eq!(begin.span_to(end).size_hint(), (0, None));
}

assert_not_impl_any!(Adaptor<Ptr<'static, i32>, ForwardOnly>: BidirectionalCursor);

#[derive(Clone, Copy, Default)]
struct Compact;

#[policy]
impl<'a> Policy<Ptr<'a, i32>> for Compact {
    type Distance = i16;
}

assert_impl_all!(Facade<Adaptor<Ptr<'static, i32>, Compact>>: core::ops::AddAssign<i16>);
assert_not_impl_any!(Facade<Adaptor<Ptr<'static, i32>, Compact>>: core::ops::AddAssign<isize>);

#[test]
fn overridden_distance_type() {
    let data = [0; 10];
    let begin = Facade::new(Adaptor::with_policy(Ptr::begin(&data), Compact));
    let end = Facade::new(Adaptor::with_policy(Ptr::end(&data), Compact));

    let n: i16 = end - begin;
    assert_eq!(n, 10);
    assert!(begin + 10i16 == end);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "does not fit")]
fn narrowed_distance_overflow_is_caught() {
    let data = vec![0; 40_000];
    let begin = Facade::new(Adaptor::with_policy(Ptr::begin(&data), Compact));
    let end = Facade::new(Adaptor::with_policy(Ptr::end(&data), Compact));
    let _ = end - begin;
}

// =============================================================================
// Writable adaptor over a mutable position
// =============================================================================

#[derive(Clone, Copy, Default)]
struct WriteOnly;

#[policy]
impl<'a> Policy<CellPtr<'a, i32>> for WriteOnly {
    type Access = WritableAccess;
}

assert_not_impl_any!(Facade<Adaptor<CellPtr<'static, i32>, WriteOnly>>: Arrow);
assert_type_eq_all!(
    <Facade<Adaptor<CellPtr<'static, i32>, WriteOnly>> as Subscript>::Output,
    IndexProxy<Adaptor<CellPtr<'static, i32>, WriteOnly>>
);

#[test]
fn write_only_adaptor_writes_through_index() {
    let cells: Vec<std::cell::Cell<i32>> = (0..4).map(|_| std::cell::Cell::new(0)).collect();
    let s = Facade::new(Adaptor::with_policy(CellPtr::begin(&cells), WriteOnly));

    s.at(3).set(9);
    assert_eq!(cells[3].get(), 9);
    assert_eq!(
        Facade::<Adaptor<CellPtr<'static, i32>, WriteOnly>>::LEGACY,
        LegacyCategory::Output
    );
}

// =============================================================================
// Policies that add motion to a forward-only base
// =============================================================================

/// Forward-only walk over a slice.
#[derive(Clone, Copy, Interoperable)]
struct Walker<'a> {
    slice: &'a [i32],
    index: usize,
}

impl<'a> Cursor for Walker<'a> {
    type Value = i32;
    type Reference = &'a i32;
    type Distance = isize;
    type Access = ConstantLvalueAccess;
    type Traversal = ForwardTraversal;

    fn dereference(&self) -> &'a i32 {
        &self.slice[self.index]
    }

    fn equal(&self, other: &Self) -> bool {
        self.index == other.index
    }

    fn increment(&mut self) {
        self.index += 1;
    }
}

fn walker(slice: &[i32], index: usize) -> Walker<'_> {
    Walker { slice, index }
}

#[derive(Clone, Copy, Default)]
struct Rewind;

#[policy]
impl<'a> Policy<Walker<'a>> for Rewind {
    type Traversal = BidirectionalTraversal;

    fn decrement(&self, base: &mut Walker<'a>) {
        base.index -= 1;
    }
}

#[derive(Clone, Copy, Default)]
struct Seek;

#[policy]
impl<'a> Policy<Walker<'a>> for Seek {
    type Traversal = RandomAccessTraversal;

    fn decrement(&self, base: &mut Walker<'a>) {
        base.index -= 1;
    }

    fn advance(&self, base: &mut Walker<'a>, n: isize) {
        base.index = base.index.wrapping_add_signed(n);
    }

    fn distance_to(&self, base: &Walker<'a>, other: &Walker<'a>) -> isize {
        other.index as isize - base.index as isize
    }
}

assert_not_impl_any!(Facade<Walker<'static>>: Decrement);
assert_not_impl_any!(Adaptor<Walker<'static>>: BidirectionalCursor);
assert_impl_all!(Facade<Adaptor<Walker<'static>, Rewind>>: Decrement, PartialEq);
assert_not_impl_any!(Facade<Adaptor<Walker<'static>, Rewind>>: Subscript, PartialOrd);
assert_impl_all!(Facade<Adaptor<Walker<'static>, Seek>>: Decrement, Subscript, Ord);

#[test]
fn policy_decrement_over_forward_base() {
    let data = [1, 2, 3, 4];
    let begin = Facade::new(Adaptor::with_policy(walker(&data, 0), Rewind));
    let end = Facade::new(Adaptor::with_policy(walker(&data, data.len()), Rewind));

    let mut s = end;
    s.dec();
    assert_eq!(*s.get(), 4);
    let old = s.post_dec();
    assert_eq!(*old.get(), 4);
    assert_eq!(*s.get(), 3);

    let backwards: Vec<i32> = begin.span_to(end).rev().copied().collect();
    assert_eq!(backwards, [4, 3, 2, 1]);
    assert_eq!(Facade::<Adaptor<Walker<'static>, Rewind>>::LEGACY, LegacyCategory::Bidirectional);
}

#[test]
fn policy_jumps_over_forward_base() {
    let data = [10, 20, 30, 40, 50];
    let begin = Facade::new(Adaptor::with_policy(walker(&data, 0), Seek));
    let end = Facade::new(Adaptor::with_policy(walker(&data, data.len()), Seek));

    assert_eq!(end - begin, 5);
    assert!(begin < end);
    assert_eq!(*begin.at(3), 40);
    assert_eq!(*(end - 2isize).get(), 40);
    assert_eq!(begin.span_to(end).skip(1).len(), 4);
    assert_eq!(end.core().base().index, 5);
}
