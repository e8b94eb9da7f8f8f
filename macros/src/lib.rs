//! Procedural macros for cursor-caps
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `capability_lattice!{}` | - | Generate `Compare` impls for a tag hierarchy |
//! | `#[policy]` | `impl Policy<W> for X` | Fill unwritten adaptor knobs with defaults |
//! | `#[derive(Interoperable)]` | struct | Declare the cursors this one may be compared with |
//!
//! ## Example
//!
//! ```ignore
//! struct Doubled;
//!
//! #[policy]
//! impl<'a> Policy<Ptr<'a, i32>> for Doubled {
//!     type Reference = i32;
//!     type Access = ReadableAccess;
//!
//!     fn dereference(&self, base: &Ptr<'a, i32>) -> i32 {
//!         *base.dereference() * 2
//!     }
//! }
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod common;
mod inner;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate the `Compare` impls of a capability hierarchy.
///
/// Each entry names a tag and, optionally, the tags it directly implies.
/// The reflexive-transitive closure is computed here; every related pair gets
/// one impl and unrelated pairs get none.
///
/// # Usage
/// ```ignore
/// capability_lattice! {
///     ReadableAccess,
///     WritableAccess,
///     SwappableAccess: ReadableAccess + WritableAccess,
/// }
/// ```
#[proc_macro]
pub fn capability_lattice(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::lattice::LatticeInput);
    inner::lattice::expand_lattice(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Complete an adaptor policy impl with default knobs.
///
/// Missing `Value` and `Reference` are taken from the wrapped cursor;
/// missing `Traversal` and `Distance` become `UseDefault`; a missing
/// `dereference` passes straight through. A missing `Access` is `UseDefault`
/// too, unless `Reference` is overridden: then it is `ReadableAccess`, and
/// `dereference` must be written as well.
///
/// `decrement`, and `advance` together with `distance_to`, are moved into
/// `PolicyDecrement` and `PolicyJump` impls with the same generics.
#[proc_macro_attribute]
pub fn policy(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "#[policy] takes no arguments",
        )
        .to_compile_error()
        .into();
    }

    let item = parse_macro_input!(item as syn::ItemImpl);
    user::expand_policy(item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive the interoperability gate for a cursor.
///
/// Always implements `Interoperable<Self>`. Each type listed in
/// `#[interoperable(...)]` must be reachable through `From<Self>`; both
/// operand orders are then implemented, lifting into the listed type.
///
/// # Usage
/// ```ignore
/// #[derive(Clone, Interoperable)]
/// #[interoperable(ConstCursor<'a>)]
/// struct MutCursor<'a> { .. }
/// ```
#[proc_macro_derive(Interoperable, attributes(interoperable))]
pub fn derive_interoperable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_interoperable(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
