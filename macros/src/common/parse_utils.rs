//! Common parsing utilities
//!
//! Shared helpers for consistent diagnostics across macros.

use quote::ToTokens;
use syn::{
    punctuated::Punctuated, Attribute, GenericArgument, Ident, Path,
    PathArguments, Token, Type,
};

// =============================================================================
// Duplicate Detection
// =============================================================================

/// Reject a list that names the same identifier twice.
pub fn check_duplicate_idents<'a>(
    idents: impl IntoIterator<Item = &'a Ident>,
    what: &str,
) -> syn::Result<()> {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    for ident in idents {
        if !seen.insert(ident.to_string()) {
            return Err(syn::Error::new_spanned(
                ident,
                format!("duplicate {} `{}`", what, ident),
            ));
        }
    }
    Ok(())
}

/// Token-normalized spelling of a type, for equality checks.
pub fn type_key(ty: &Type) -> String {
    ty.to_token_stream().to_string().replace(' ', "")
}

// =============================================================================
// Attribute Lists
// =============================================================================

/// Collect the types of every `#[name(A, B, ...)]` attribute.
pub fn parse_type_list_attrs(attrs: &[Attribute], name: &str) -> syn::Result<Vec<Type>> {
    let mut types = Vec::new();
    for attr in attrs.iter().filter(|a| a.path().is_ident(name)) {
        let list = attr.parse_args_with(Punctuated::<Type, Token![,]>::parse_terminated)?;
        if list.is_empty() {
            return Err(syn::Error::new_spanned(
                attr,
                format!("`#[{}(...)]` needs at least one type", name),
            ));
        }
        types.extend(list);
    }
    Ok(types)
}

// =============================================================================
// Path Inspection
// =============================================================================

/// If the last segment of `path` is `name<T>`, return `T`.
pub fn single_type_argument<'a>(path: &'a Path, name: &str) -> Option<&'a Type> {
    let last = path.segments.last()?;
    if last.ident != name {
        return None;
    }
    match &last.arguments {
        PathArguments::AngleBracketed(args) if args.args.len() == 1 => match args.args.first()? {
            GenericArgument::Type(ty) => Some(ty),
            _ => None,
        },
        _ => None,
    }
}
