use std::cell::Cell;

use cursor_caps::algo::{advance, distance, iter_swap};
use cursor_caps::prelude::*;

/// Counts up from a start value; single-pass, by value.
#[derive(Clone, Copy, Interoperable)]
struct Counter {
    value: i64,
}

impl Cursor for Counter {
    type Value = i64;
    type Reference = i64;
    type Distance = i64;
    type Access = ReadableAccess;
    type Traversal = SinglePassTraversal;

    fn dereference(&self) -> i64 {
        self.value
    }

    fn equal(&self, other: &Self) -> bool {
        self.value == other.value
    }

    fn increment(&mut self) {
        self.value += 1;
    }
}

#[derive(Clone, Copy, Default)]
struct BidiOnly;

#[policy]
impl<'a> Policy<Ptr<'a, i32>> for BidiOnly {
    type Traversal = BidirectionalTraversal;
}

#[test]
fn advance_steps_single_pass_cursors() {
    let mut c = Facade::new(Counter { value: 10 });
    advance(&mut c, 5);
    assert_eq!(c.get(), 15);

    let end = Facade::new(Counter { value: 20 });
    assert!(c != end);
    assert_eq!(distance(&c, &end), 5);
    assert_eq!(c.span_to(end).sum::<i64>(), 15 + 16 + 17 + 18 + 19);
}

#[test]
fn advance_moves_bidirectional_cursors_both_ways() {
    let data = [1, 2, 3, 4, 5];
    let mut s = Facade::new(Adaptor::with_policy(Ptr::begin(&data), BidiOnly));

    advance(&mut s, 4);
    assert_eq!(*s.get(), 5);
    advance(&mut s, -3);
    assert_eq!(*s.get(), 2);

    let begin = Facade::new(Adaptor::with_policy(Ptr::begin(&data), BidiOnly));
    let end = Facade::new(Adaptor::with_policy(Ptr::end(&data), BidiOnly));
    assert_eq!(distance(&begin, &end), 5);
}

#[test]
fn random_access_jumps() {
    let data = [1, 2, 3, 4, 5];
    let mut s = Facade::new(Ptr::at(&data, 4));
    advance(&mut s, -4);
    assert_eq!(*s.get(), 1);
    assert_eq!(distance(&s, &Facade::new(Ptr::end(&data))), 5);
}

#[test]
fn swap_through_cells() {
    let cells = [Cell::new('a'), Cell::new('b'), Cell::new('c')];
    let first = Facade::new(CellPtr::begin(&cells));
    let last = Facade::new(CellPtr::at(&cells, 2));

    iter_swap(&first, &last);
    assert_eq!(cells[0].get(), 'c');
    assert_eq!(cells[2].get(), 'a');

    // Through a mutable adaptor and a raw position at once.
    let middle = Facade::new(Adaptor::new(CellPtr::at(&cells, 1)));
    iter_swap(&middle, &first);
    assert_eq!(cells[0].get(), 'b');
    assert_eq!(cells[1].get(), 'c');
}
