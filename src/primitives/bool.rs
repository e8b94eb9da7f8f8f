//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.
//!
//! Access tags answer questions such as "is this an lvalue?" with these
//! types, and the facade picks its proxy types by dispatching on them.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;
    /// Type-level conditional: If<Then, Else> (General Type Selector)
    type If<Then, Else>;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;

    /// Logical NOT
    type Not: Bool;
}

/// Type-level True.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Present;

/// Type-level False.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type If<Then, Else> = Then;
    type And<Other: Bool> = Other;
    type Or<Other: Bool> = Present;
    type Not = Absent;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type If<Then, Else> = Else;
    type And<Other: Bool> = Absent;
    type Or<Other: Bool> = Other;
    type Not = Present;
}

/// `if C { T } else { E }` on a type-level boolean.
pub type If<C, T, E> = <C as Bool>::If<T, E>;

/// `A && B` on type-level booleans.
pub type And<A, B> = <A as Bool>::And<B>;

/// `A || B` on type-level booleans.
pub type Or<A, B> = <A as Bool>::Or<B>;

/// `!A` on type-level booleans.
pub type Not<A> = <A as Bool>::Not;
