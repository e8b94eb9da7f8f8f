//! Reverse Cursor
//!
//! Builds a reversing adaptor from a policy that overrides movement only,
//! then uses the synthesized surface: iteration, indexing, arithmetic and
//! ordering.

use cursor_caps::prelude::*;

// =============================================================================
// Step 1: The policy
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

type Rev<'a, T> = Facade<Adaptor<Ptr<'a, T>, Reverse>>;

fn rbegin<T>(data: &[T]) -> Rev<'_, T> {
    Facade::new(Adaptor::with_policy(Ptr::end(data), Reverse))
}

fn rend<T>(data: &[T]) -> Rev<'_, T> {
    Facade::new(Adaptor::with_policy(Ptr::begin(data), Reverse))
}

// =============================================================================
// Step 2: Use it
// =============================================================================

fn main() {
    let words = ["alpha", "beta", "gamma", "delta"];
    let first = rbegin(&words);
    let last = rend(&words);

    println!("=== Reverse Cursor ===");
    println!("category: {}", Rev::<&str>::CATEGORY);
    println!("legacy:   {}", Rev::<&str>::LEGACY);

    for word in first.span_to(last) {
        println!("  {}", word);
    }

    println!("first[2]     = {}", first.at(2));
    println!("*(first + 1) = {}", (first + 1isize).get());
    println!("last - first = {}", last - first);
    println!("first < last = {}", first < last);

    // The base of a reverse position is one past the element it yields.
    println!("first.base() = {}", first.core().base().index());
}
