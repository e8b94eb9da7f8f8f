//! Access capabilities: what dereferencing a cursor permits.
//!
//! ```text
//!            MutableLvalue
//!            /           \
//!      Swappable     ConstantLvalue
//!       /     \           /
//!  Writable   Readable ──┘
//! ```
//!
//! `Readable` and `Writable` are unrelated, as are `Swappable` and
//! `ConstantLvalue`.

use core::cmp::Ordering;
use core::fmt;

use crate::config::ResolveAccess;
use crate::primitives::{Absent, Bool, Present};

const READ: u8 = 1;
const WRITE: u8 = 1 << 1;
const LVALUE: u8 = 1 << 2;

/// Runtime mirror of the access tags.
///
/// Each kind is a set of abilities; implication is set inclusion, so the
/// order is partial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Access {
    Readable,
    Writable,
    Swappable,
    ConstantLvalue,
    MutableLvalue,
}

impl Access {
    pub const ALL: [Access; 5] = [
        Access::Readable,
        Access::Writable,
        Access::Swappable,
        Access::ConstantLvalue,
        Access::MutableLvalue,
    ];

    const fn bits(self) -> u8 {
        match self {
            Access::Readable => READ,
            Access::Writable => WRITE,
            Access::Swappable => READ | WRITE,
            Access::ConstantLvalue => READ | LVALUE,
            Access::MutableLvalue => READ | WRITE | LVALUE,
        }
    }

    /// `self` is usable wherever `other` is required.
    #[inline]
    pub const fn implies(self, other: Access) -> bool {
        other.bits() & !self.bits() == 0
    }

    #[inline]
    pub const fn is_readable(self) -> bool {
        self.bits() & READ != 0
    }

    #[inline]
    pub const fn is_writable(self) -> bool {
        self.bits() & WRITE != 0
    }

    /// The reference binds directly to storage.
    #[inline]
    pub const fn is_lvalue(self) -> bool {
        self.bits() & LVALUE != 0
    }

    /// Writable without being an lvalue: `s[n]` must return a proxy.
    #[inline]
    pub const fn needs_index_proxy(self) -> bool {
        self.is_writable() && !self.is_lvalue()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Access::Readable => "readable",
            Access::Writable => "writable",
            Access::Swappable => "swappable",
            Access::ConstantLvalue => "constant-lvalue",
            Access::MutableLvalue => "mutable-lvalue",
        }
    }
}

impl PartialOrd for Access {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.implies(*other) {
            Some(Ordering::Greater)
        } else if other.implies(*self) {
            Some(Ordering::Less)
        } else {
            None
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A type-level access tag.
///
/// The associated booleans drive the facade's member selection: `Lvalue`
/// picks how `arrow` is served, `ProxiedWrite` picks what `at` returns.
pub trait AccessTag: Copy + Default + fmt::Debug + 'static {
    const KIND: Access;
    type Readable: Bool;
    type Writable: Bool;
    type Lvalue: Bool;
    /// `Writable` and not `Lvalue`.
    type ProxiedWrite: Bool;
}

macro_rules! access_tags {
    ($(
        $(#[$meta:meta])*
        $kind:ident => ($r:ty, $w:ty, $l:ty, $p:ty)
    ),* $(,)?) => {
        paste::paste! {
            $(
                $(#[$meta])*
                #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
                pub struct [<$kind Access>];

                impl AccessTag for [<$kind Access>] {
                    const KIND: Access = Access::$kind;
                    type Readable = $r;
                    type Writable = $w;
                    type Lvalue = $l;
                    type ProxiedWrite = $p;
                }

                impl<D: AccessTag> ResolveAccess<D> for [<$kind Access>] {
                    type Out = Self;
                }
            )*
        }
    };
}

access_tags! {
    /// Dereferencing yields something convertible to the value type.
    Readable => (Present, Absent, Absent, Absent),
    /// A value can be stored through the reference.
    Writable => (Absent, Present, Absent, Present),
    /// Readable and writable, so two positions can exchange their values.
    Swappable => (Present, Present, Absent, Present),
    /// The reference is a shared reference into storage.
    ConstantLvalue => (Present, Absent, Present, Absent),
    /// The reference is a mutable handle into storage.
    MutableLvalue => (Present, Present, Present, Absent),
}

macros::capability_lattice! {
    ReadableAccess,
    WritableAccess,
    SwappableAccess: ReadableAccess + WritableAccess,
    ConstantLvalueAccess: ReadableAccess,
    MutableLvalueAccess: SwappableAccess + ConstantLvalueAccess,
}
