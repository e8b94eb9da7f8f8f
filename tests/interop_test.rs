//! Cross-type operators exist only between interoperable cursors.

use std::cell::Cell;

use cursor_caps::prelude::*;
use static_assertions::{assert_impl_all, assert_not_impl_any};

type Mutable<'a> = Adaptor<CellPtr<'a, i32>>;
type Constant<'a> = Adaptor<Ptr<'a, Cell<i32>>>;

#[test]
fn mutable_and_constant_compare_in_both_orders() {
    let cells: Vec<Cell<i32>> = (0..6).map(Cell::new).collect();

    for i in 0..=cells.len() {
        for j in 0..=cells.len() {
            let m = Facade::new(Mutable::new(CellPtr::at(&cells, i)));
            let c = Facade::new(Constant::new(Ptr::at(&cells, j)));

            assert_eq!(m == c, i == j);
            assert_eq!(c == m, i == j);
            assert_eq!(m != c, i != j);
            assert_eq!(m < c, i < j);
            assert_eq!(c < m, j < i);
            assert_eq!(m - c, i as isize - j as isize);
            assert_eq!(c - m, j as isize - i as isize);
        }
    }
}

#[test]
fn raw_positions_interoperate_too() {
    let cells = [Cell::new(1), Cell::new(2), Cell::new(3)];
    let m = Facade::new(CellPtr::begin(&cells)) + 1isize;
    let c = Facade::new(Ptr::at(&cells, 1));

    assert!(m == c && c == m);
    assert_eq!(m.get().get(), c.get().get());
}

#[test]
fn constant_adaptor_from_mutable_one() {
    let cells = [Cell::new(7), Cell::new(8)];
    let m = Mutable::new(CellPtr::at(&cells, 1));
    let c = Constant::from_related(m);

    assert_eq!(c.base().index(), 1);
    assert_eq!(Facade::new(c).get().get(), 8);
}

// =============================================================================
// Distance mismatch
// =============================================================================

/// Same storage as `Ptr`, but measures distance in `i32`.
#[derive(Clone, Copy, Interoperable)]
#[interoperable(Ptr<'a, i32>)]
struct Narrow<'a>(Ptr<'a, i32>);

impl<'a> From<Narrow<'a>> for Ptr<'a, i32> {
    fn from(narrow: Narrow<'a>) -> Self {
        narrow.0
    }
}

impl<'a> Cursor for Narrow<'a> {
    type Value = i32;
    type Reference = &'a i32;
    type Distance = i32;
    type Access = ConstantLvalueAccess;
    type Traversal = RandomAccessTraversal;

    fn dereference(&self) -> &'a i32 {
        self.0.dereference()
    }

    fn equal(&self, other: &Self) -> bool {
        self.0.equal(&other.0)
    }

    fn increment(&mut self) {
        self.0.increment();
    }
}

impl BidirectionalCursor for Narrow<'_> {
    fn decrement(&mut self) {
        self.0.decrement();
    }
}

impl RandomAccessCursor for Narrow<'_> {
    fn advance(&mut self, n: i32) {
        self.0.advance(n as isize);
    }

    fn distance_to(&self, other: &Self) -> i32 {
        self.0.distance_to(&other.0) as i32
    }
}

assert_impl_all!(Facade<Narrow<'static>>: PartialEq<Facade<Ptr<'static, i32>>>);
assert_impl_all!(Facade<Ptr<'static, i32>>: PartialEq<Facade<Narrow<'static>>>);
assert_impl_all!(Facade<Narrow<'static>>: core::ops::Sub<Facade<Narrow<'static>>>);
assert_not_impl_any!(Facade<Narrow<'static>>: core::ops::Sub<Facade<Ptr<'static, i32>>>);
assert_not_impl_any!(Facade<Ptr<'static, i32>>: core::ops::Sub<Facade<Narrow<'static>>>);

// Unrelated cursors have no operators at all.
assert_not_impl_any!(
    Facade<Ptr<'static, i32>>: PartialEq<Facade<Ptr<'static, u8>>>,
    PartialOrd<Facade<Ptr<'static, u8>>>
);

#[test]
fn mismatched_distance_still_compares() {
    let data = [1, 2, 3, 4];
    let narrow = Facade::new(Narrow(Ptr::at(&data, 2)));
    let wide = Facade::new(Ptr::at(&data, 2));

    assert!(narrow == wide);
    assert!(wide == narrow);
    assert!(narrow > Facade::new(Ptr::begin(&data)));
    assert_eq!(narrow - Facade::new(Narrow(Ptr::begin(&data))), 2i32);
    assert_eq!(*(narrow + 1i32).get(), 4);
}
