//! Legacy single-hierarchy category labels.
//!
//! Generic algorithms written before traversal and access were separated
//! classify positions with one label. Every facade exposes the label that
//! matches its category so such algorithms keep accepting it.

use core::fmt;

use super::access::Access;
use super::traversal::Traversal;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LegacyCategory {
    Output,
    Input,
    /// Satisfies both `Input` and `Output`.
    InputOutput,
    Forward,
    Bidirectional,
    RandomAccess,
}

/// Computes the legacy label for a classification.
///
/// `reference_is_reference` says whether dereferencing binds to storage;
/// convertibility of the reference to the value type is read off `access`.
pub const fn legacy_label(
    access: Access,
    traversal: Traversal,
    is_const_value: bool,
    reference_is_reference: bool,
) -> LegacyCategory {
    if reference_is_reference && traversal.implies(Traversal::Forward) {
        if traversal.implies(Traversal::RandomAccess) {
            LegacyCategory::RandomAccess
        } else if traversal.implies(Traversal::Bidirectional) {
            LegacyCategory::Bidirectional
        } else {
            LegacyCategory::Forward
        }
    } else if traversal.implies(Traversal::SinglePass) && access.is_readable() {
        if is_const_value {
            LegacyCategory::Input
        } else {
            LegacyCategory::InputOutput
        }
    } else {
        LegacyCategory::Output
    }
}

impl LegacyCategory {
    pub const ALL: [LegacyCategory; 6] = [
        LegacyCategory::Output,
        LegacyCategory::Input,
        LegacyCategory::InputOutput,
        LegacyCategory::Forward,
        LegacyCategory::Bidirectional,
        LegacyCategory::RandomAccess,
    ];

    /// The traversal a position with this label is known to support.
    pub const fn traversal(self) -> Traversal {
        match self {
            LegacyCategory::Output => Traversal::Incrementable,
            LegacyCategory::Input | LegacyCategory::InputOutput => Traversal::SinglePass,
            LegacyCategory::Forward => Traversal::Forward,
            LegacyCategory::Bidirectional => Traversal::Bidirectional,
            LegacyCategory::RandomAccess => Traversal::RandomAccess,
        }
    }

    pub const fn is_input(self) -> bool {
        !matches!(self, LegacyCategory::Output)
    }

    pub const fn is_output(self) -> bool {
        matches!(self, LegacyCategory::Output | LegacyCategory::InputOutput)
    }

    /// An algorithm asking for `required` accepts a position labelled `self`.
    ///
    /// Forward and above refine `Input`; `InputOutput` refines both `Input`
    /// and `Output`.
    pub const fn satisfies(self, required: LegacyCategory) -> bool {
        match required {
            LegacyCategory::Output => self.is_output(),
            LegacyCategory::Input => self.is_input(),
            LegacyCategory::InputOutput => matches!(self, LegacyCategory::InputOutput),
            LegacyCategory::Forward
            | LegacyCategory::Bidirectional
            | LegacyCategory::RandomAccess => {
                !matches!(
                    self,
                    LegacyCategory::Output | LegacyCategory::Input | LegacyCategory::InputOutput
                ) && self.traversal().implies(required.traversal())
            }
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            LegacyCategory::Output => "output",
            LegacyCategory::Input => "input",
            LegacyCategory::InputOutput => "input/output",
            LegacyCategory::Forward => "forward",
            LegacyCategory::Bidirectional => "bidirectional",
            LegacyCategory::RandomAccess => "random-access",
        }
    }
}

impl fmt::Display for LegacyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
