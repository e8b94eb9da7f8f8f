//! Access × traversal pairs, and the operations each pair unlocks.

use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;

use super::access::{Access, AccessTag};
use super::lattice::{Agree, Compare};
use super::legacy::{LegacyCategory, legacy_label};
use super::traversal::{Traversal, TraversalTag};
use super::Capability;
use crate::error::ConfigError;

// =============================================================================
// Type level
// =============================================================================

/// The combined category tag of a cursor.
///
/// Two category tags are related only when their access and traversal
/// components compare in the same direction, so `Meet` on a pair like
/// `(MutableLvalue, Forward)` and `(Readable, RandomAccess)` does not compile.
pub struct CategoryTag<A, T>(PhantomData<fn() -> (A, T)>);

impl<A, T> CategoryTag<A, T> {
    pub const fn new() -> Self {
        CategoryTag(PhantomData)
    }
}

impl<A: AccessTag, T: TraversalTag> CategoryTag<A, T> {
    pub const CATEGORY: Category = Category::new(A::KIND, T::KIND);
}

impl<A, T> Clone for CategoryTag<A, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, T> Copy for CategoryTag<A, T> {}

impl<A, T> Default for CategoryTag<A, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: AccessTag, T: TraversalTag> fmt::Debug for CategoryTag<A, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CategoryTag").field(&A::KIND).field(&T::KIND).finish()
    }
}

impl<A1, T1, A2, T2> Compare<CategoryTag<A2, T2>> for CategoryTag<A1, T1>
where
    A1: Compare<A2>,
    T1: Compare<T2>,
    <A1 as Compare<A2>>::Ordering: Agree<<T1 as Compare<T2>>::Ordering>,
{
    type Ordering =
        <<A1 as Compare<A2>>::Ordering as Agree<<T1 as Compare<T2>>::Ordering>>::Out;
}

// =============================================================================
// Runtime mirror
// =============================================================================

/// A cursor's runtime classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Category {
    pub access: Access,
    pub traversal: Traversal,
}

impl Category {
    pub const fn new(access: Access, traversal: Traversal) -> Self {
        Category { access, traversal }
    }

    /// Both components imply the other category's.
    #[inline]
    pub const fn implies(self, other: Category) -> bool {
        self.access.implies(other.access) && self.traversal.implies(other.traversal)
    }

    /// Whether a facade over a cursor of this category has `op`.
    #[inline]
    pub const fn supports(self, op: Operation) -> bool {
        match op {
            Operation::Dereference | Operation::Increment | Operation::Equality => true,
            Operation::Arrow => self.access.is_readable(),
            Operation::PostIncrement => self.traversal.implies(Traversal::Forward),
            Operation::Decrement | Operation::PostDecrement => {
                self.traversal.implies(Traversal::Bidirectional)
            }
            Operation::Subscript
            | Operation::Advance
            | Operation::Ordering
            | Operation::Difference => self.traversal.implies(Traversal::RandomAccess),
        }
    }

    pub fn require(self, op: Operation) -> Result<(), ConfigError> {
        if self.supports(op) {
            Ok(())
        } else {
            tracing::debug!(operation = %op, category = %self, "operation not synthesized");
            Err(ConfigError::Unsupported {
                operation: op,
                category: self,
            })
        }
    }

    /// Every operation the facade synthesizes for this category.
    pub fn surface(self) -> impl Iterator<Item = Operation> {
        Operation::ALL.into_iter().filter(move |op| self.supports(*op))
    }

    /// Legacy label for a cursor classified as `self`.
    ///
    /// The reference is taken to bind to storage when access is an lvalue, and
    /// the value to be constant when access is not writable.
    pub const fn legacy(self) -> LegacyCategory {
        legacy_label(
            self.access,
            self.traversal,
            !self.access.is_writable(),
            self.access.is_lvalue(),
        )
    }
}

impl PartialOrd for Category {
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

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.access, self.traversal)
    }
}

impl Capability for Category {
    fn implies(self, other: Self) -> bool {
        Category::implies(self, other)
    }

    fn meet(self, other: Self) -> Result<Self, ConfigError> {
        if self.implies(other) {
            Ok(other)
        } else if other.implies(self) {
            Ok(self)
        } else {
            tracing::debug!(lhs = %self, rhs = %other, "no meet for unrelated categories");
            Err(ConfigError::UnrelatedCategory(self, other))
        }
    }
}

// =============================================================================
// Operations
// =============================================================================

/// A member of the synthesized surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `*s`
    Dereference,
    /// `s->`
    Arrow,
    /// `s[n]`
    Subscript,
    /// `++s`
    Increment,
    /// `s++`
    PostIncrement,
    /// `--s`
    Decrement,
    /// `s--`
    PostDecrement,
    /// `s += n`, `s -= n`, `s + n`, `n + s`, `s - n`
    Advance,
    /// `==`, `!=`
    Equality,
    /// `<`, `>`, `<=`, `>=`
    Ordering,
    /// `s1 - s2`
    Difference,
}

impl Operation {
    pub const ALL: [Operation; 11] = [
        Operation::Dereference,
        Operation::Arrow,
        Operation::Subscript,
        Operation::Increment,
        Operation::PostIncrement,
        Operation::Decrement,
        Operation::PostDecrement,
        Operation::Advance,
        Operation::Equality,
        Operation::Ordering,
        Operation::Difference,
    ];

    pub const fn symbol(self) -> &'static str {
        match self {
            Operation::Dereference => "*s",
            Operation::Arrow => "s->",
            Operation::Subscript => "s[n]",
            Operation::Increment => "++s",
            Operation::PostIncrement => "s++",
            Operation::Decrement => "--s",
            Operation::PostDecrement => "s--",
            Operation::Advance => "s += n",
            Operation::Equality => "s1 == s2",
            Operation::Ordering => "s1 < s2",
            Operation::Difference => "s1 - s2",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
