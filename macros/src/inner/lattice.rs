//! `capability_lattice!` expansion.
//!
//! Input is a list of tags with their direct parents. The closure of the
//! parent relation is the implication order; each ordered pair becomes one
//! `Compare` impl with `Above`, `Same` or `Below`.

use std::collections::{BTreeSet, HashMap};

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Ident, Token,
};

use crate::common::check_duplicate_idents;

// =============================================================================
// Input Parser
// =============================================================================

/// `Name` or `Name: Parent + Parent`
pub struct LatticeNode {
    pub name: Ident,
    pub parents: Vec<Ident>,
}

impl Parse for LatticeNode {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name: Ident = input.parse()?;
        let parents = if input.peek(Token![:]) {
            input.parse::<Token![:]>()?;
            Punctuated::<Ident, Token![+]>::parse_separated_nonempty(input)?
                .into_iter()
                .collect()
        } else {
            Vec::new()
        };
        Ok(LatticeNode { name, parents })
    }
}

pub struct LatticeInput {
    pub nodes: Punctuated<LatticeNode, Token![,]>,
}

impl Parse for LatticeInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let nodes = Punctuated::parse_terminated(input)?;
        Ok(LatticeInput { nodes })
    }
}

// =============================================================================
// Closure
// =============================================================================

/// Index-based view of the hierarchy.
struct Lattice {
    names: Vec<Ident>,
    /// `above[i]` holds every tag strictly implied by tag `i`.
    above: Vec<BTreeSet<usize>>,
}

impl Lattice {
    fn build(nodes: Vec<LatticeNode>) -> syn::Result<Self> {
        check_duplicate_idents(nodes.iter().map(|n| &n.name), "capability")?;

        let index: HashMap<String, usize> = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.name.to_string(), i))
            .collect();

        let mut direct = Vec::with_capacity(nodes.len());
        for node in &nodes {
            check_duplicate_idents(&node.parents, "parent")?;
            let mut parents = Vec::with_capacity(node.parents.len());
            for parent in &node.parents {
                match index.get(&parent.to_string()) {
                    Some(&i) => parents.push(i),
                    None => {
                        return Err(syn::Error::new_spanned(
                            parent,
                            format!(
                                "unknown capability `{}`\n\
                                 \n\
                                 Parents must be declared in the same lattice.",
                                parent
                            ),
                        ));
                    }
                }
            }
            direct.push(parents);
        }

        let mut above = Vec::with_capacity(nodes.len());
        for start in 0..nodes.len() {
            let mut seen = BTreeSet::new();
            let mut stack = direct[start].clone();
            while let Some(next) = stack.pop() {
                if next == start {
                    return Err(syn::Error::new_spanned(
                        &nodes[start].name,
                        format!(
                            "capability `{}` implies itself through its parents\n\
                             \n\
                             A capability hierarchy must be acyclic.",
                            nodes[start].name
                        ),
                    ));
                }
                if seen.insert(next) {
                    stack.extend(direct[next].iter().copied());
                }
            }
            above.push(seen);
        }

        let names = nodes.into_iter().map(|n| n.name).collect();
        Ok(Lattice { names, above })
    }

    fn ordering(&self, a: usize, b: usize) -> Option<TokenStream2> {
        if a == b {
            Some(quote! { ::cursor_caps::Same })
        } else if self.above[a].contains(&b) {
            Some(quote! { ::cursor_caps::Above })
        } else if self.above[b].contains(&a) {
            Some(quote! { ::cursor_caps::Below })
        } else {
            None
        }
    }
}

// =============================================================================
// Expansion
// =============================================================================

pub fn expand_lattice(input: LatticeInput) -> syn::Result<TokenStream2> {
    let lattice = Lattice::build(input.nodes.into_iter().collect())?;
    let len = lattice.names.len();

    let impls = (0..len).flat_map(|a| (0..len).map(move |b| (a, b))).filter_map(|(a, b)| {
        let ordering = lattice.ordering(a, b)?;
        let lhs = &lattice.names[a];
        let rhs = &lattice.names[b];
        Some(quote! {
            impl ::cursor_caps::Compare<#rhs> for #lhs {
                type Ordering = #ordering;
            }
        })
    });

    Ok(quote! { #(#impls)* })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expand(input: LatticeInput) -> syn::Result<Vec<syn::ItemImpl>> {
        let file: syn::File = syn::parse2(expand_lattice(input)?)?;
        Ok(file
            .items
            .into_iter()
            .filter_map(|item| match item {
                syn::Item::Impl(item) => Some(item),
                _ => None,
            })
            .collect())
    }

    fn error(input: LatticeInput) -> String {
        match expand(input) {
            Ok(_) => panic!("lattice was accepted"),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn test_chain_relates_every_pair() {
        let impls = expand(parse_quote! { A, B: A, C: B }).unwrap();
        assert_eq!(impls.len(), 9);
    }

    #[test]
    fn test_unrelated_tags_get_no_impl() {
        let impls = expand(parse_quote! {
            Readable,
            Writable,
            Swappable: Readable + Writable,
        })
        .unwrap();
        // Three reflexive pairs plus both directions of the two edges.
        assert_eq!(impls.len(), 7);
    }

    #[test]
    fn test_unknown_parent_is_rejected() {
        let msg = error(parse_quote! { A, B: Missing });
        assert!(msg.contains("unknown capability `Missing`"));
    }

    #[test]
    fn test_cycle_is_rejected() {
        let msg = error(parse_quote! { A: C, B: A, C: B });
        assert!(msg.contains("implies itself"));
    }

    #[test]
    fn test_self_parent_is_rejected() {
        let msg = error(parse_quote! { A: A });
        assert!(msg.contains("implies itself"));
    }

    #[test]
    fn test_duplicate_tag_is_rejected() {
        let msg = error(parse_quote! { A, B: A, A });
        assert!(msg.contains("duplicate capability `A`"));
    }

    #[test]
    fn test_duplicate_parent_is_rejected() {
        let msg = error(parse_quote! { A, B: A + A });
        assert!(msg.contains("duplicate parent `A`"));
    }
}
