//! `#[policy]` expansion.
//!
//! Rust traits cannot give associated types a default, so the attribute
//! writes the defaults in for whatever the author left out. Motion
//! overrides (`decrement`, `advance`, `distance_to`) move out into their own
//! trait impls so the adaptor can offer them over bases that lack them.

use std::collections::HashMap;

use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{parse_quote, ImplItem, ImplItemFn, ItemImpl, Type};

use crate::common::single_type_argument;

/// Knobs resolved against the wrapped cursor when omitted.
const INHERITED: &[&str] = &["Value", "Reference"];

/// Knobs that fall back to the `UseDefault` sentinel when omitted.
const SENTINEL: &[&str] = &["Traversal", "Distance"];

pub fn expand_policy(mut item: ItemImpl) -> syn::Result<TokenStream2> {
    let wrapped: Type = match &item.trait_ {
        Some((None, path, _)) => match single_type_argument(path, "Policy") {
            Some(ty) => ty.clone(),
            None => {
                return Err(syn::Error::new_spanned(
                    path,
                    "#[policy] expects `impl Policy<Wrapped> for ...`",
                ));
            }
        },
        Some((Some(bang), _, _)) => {
            return Err(syn::Error::new_spanned(bang, "negative impls are not policies"));
        }
        None => {
            return Err(syn::Error::new(
                Span::call_site(),
                "#[policy] applies to a trait impl, not an inherent impl",
            ));
        }
    };

    let mut types = HashMap::new();
    let mut has_dereference = false;
    for impl_item in &item.items {
        match impl_item {
            ImplItem::Type(ty) => {
                types.insert(ty.ident.to_string(), ty.ident.clone());
            }
            ImplItem::Fn(f) if f.sig.ident == "dereference" => has_dereference = true,
            _ => {}
        }
    }

    if let (Some(reference), false) = (types.get("Reference"), has_dereference) {
        return Err(syn::Error::new_spanned(
            reference,
            "`Reference` is overridden but `dereference` is not\n\
             \n\
             The pass-through `dereference` returns the wrapped cursor's reference;\n\
             write `fn dereference(&self, base: &W) -> Self::Reference` as well.",
        ));
    }

    let motion = take_motion(&mut item)?;

    let mut defaults: Vec<ImplItem> = Vec::new();
    for knob in INHERITED {
        if !types.contains_key(*knob) {
            let ident = syn::Ident::new(knob, Span::call_site());
            defaults.push(parse_quote! {
                type #ident = <#wrapped as ::cursor_caps::Cursor>::#ident;
            });
        }
    }
    for knob in SENTINEL {
        if !types.contains_key(*knob) {
            let ident = syn::Ident::new(knob, Span::call_site());
            defaults.push(parse_quote! {
                type #ident = ::cursor_caps::UseDefault;
            });
        }
    }
    // A new reference type says nothing about storage, so it only reads.
    if !types.contains_key("Access") {
        defaults.push(if types.contains_key("Reference") {
            parse_quote! { type Access = ::cursor_caps::ReadableAccess; }
        } else {
            parse_quote! { type Access = ::cursor_caps::UseDefault; }
        });
    }
    if !has_dereference {
        defaults.push(parse_quote! {
            #[inline]
            fn dereference(&self, base: &#wrapped) -> Self::Reference {
                ::cursor_caps::Cursor::dereference(base)
            }
        });
    }

    let backward: Type = if motion.decrement.is_some() {
        parse_quote! { ::cursor_caps::adaptor::Overridden }
    } else {
        parse_quote! { ::cursor_caps::UseDefault }
    };
    let jump: Type = if motion.jump.is_some() {
        parse_quote! { ::cursor_caps::adaptor::Overridden }
    } else {
        parse_quote! { ::cursor_caps::UseDefault }
    };
    defaults.push(parse_quote! { type Backward = #backward; });
    defaults.push(parse_quote! { type Jump = #jump; });

    defaults.append(&mut item.items);
    item.items = defaults;

    let (impl_generics, _, where_clause) = item.generics.split_for_impl();
    let self_ty = &item.self_ty;

    let decrement_impl = motion.decrement.map(|decrement| {
        quote! {
            impl #impl_generics ::cursor_caps::adaptor::PolicyDecrement<#wrapped> for #self_ty
            #where_clause
            {
                #decrement
            }
        }
    });
    let jump_impl = motion.jump.map(|(advance, distance_to)| {
        quote! {
            impl #impl_generics ::cursor_caps::adaptor::PolicyJump<#wrapped> for #self_ty
            #where_clause
            {
                #advance
                #distance_to
            }
        }
    });

    Ok(quote! {
        #item
        #decrement_impl
        #jump_impl
    })
}

/// Motion primitives written inside the policy impl.
struct Motion {
    decrement: Option<ImplItemFn>,
    jump: Option<(ImplItemFn, ImplItemFn)>,
}

/// Removes `decrement`, `advance` and `distance_to` from the impl.
fn take_motion(item: &mut ItemImpl) -> syn::Result<Motion> {
    let mut decrement = None;
    let mut advance = None;
    let mut distance_to = None;
    let mut kept = Vec::with_capacity(item.items.len());

    for impl_item in item.items.drain(..) {
        match impl_item {
            ImplItem::Fn(f) if f.sig.ident == "decrement" => decrement = Some(f),
            ImplItem::Fn(f) if f.sig.ident == "advance" => advance = Some(f),
            ImplItem::Fn(f) if f.sig.ident == "distance_to" => distance_to = Some(f),
            other => kept.push(other),
        }
    }
    item.items = kept;

    let jump = match (advance, distance_to) {
        (Some(advance), Some(distance_to)) => Some((advance, distance_to)),
        (None, None) => None,
        (Some(lone), None) | (None, Some(lone)) => {
            return Err(syn::Error::new_spanned(
                &lone.sig.ident,
                "`advance` and `distance_to` are overridden together\n\
                 \n\
                 Random access needs both; write the other one as well.",
            ));
        }
    };

    Ok(Motion { decrement, jump })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::type_key;

    /// The expansion, split back into impl blocks.
    fn expand(item: ItemImpl) -> syn::Result<Vec<ItemImpl>> {
        let file: syn::File = syn::parse2(expand_policy(item)?)?;
        Ok(file
            .items
            .into_iter()
            .filter_map(|item| match item {
                syn::Item::Impl(item) => Some(item),
                _ => None,
            })
            .collect())
    }

    fn assoc_type(item: &ItemImpl, name: &str) -> Option<String> {
        item.items.iter().find_map(|impl_item| match impl_item {
            ImplItem::Type(ty) if ty.ident == name => Some(type_key(&ty.ty)),
            _ => None,
        })
    }

    fn trait_name(item: &ItemImpl) -> String {
        let (_, path, _) = item.trait_.as_ref().unwrap();
        path.segments.last().unwrap().ident.to_string()
    }

    fn fn_names(item: &ItemImpl) -> Vec<String> {
        item.items
            .iter()
            .filter_map(|impl_item| match impl_item {
                ImplItem::Fn(f) => Some(f.sig.ident.to_string()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_reference_without_dereference_is_rejected() {
        let err = expand(parse_quote! {
            impl<'a> Policy<Ptr<'a, i32>> for Doubled {
                type Reference = i32;
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("`dereference` is not"));
    }

    #[test]
    fn test_lone_advance_is_rejected() {
        let err = expand(parse_quote! {
            impl<W: Cursor> Policy<W> for Skip {
                fn advance(&self, base: &mut W, n: W::Distance) {}
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("overridden together"));
    }

    #[test]
    fn test_inherent_impl_is_rejected() {
        assert!(expand(parse_quote! { impl Doubled {} }).is_err());
    }

    #[test]
    fn test_other_trait_is_rejected() {
        assert!(expand(parse_quote! { impl Clone for Doubled {} }).is_err());
    }

    #[test]
    fn test_new_reference_defaults_to_readable() {
        let impls = expand(parse_quote! {
            impl<'a> Policy<Ptr<'a, i32>> for Doubled {
                type Reference = i32;
                fn dereference(&self, base: &Ptr<'a, i32>) -> i32 { 0 }
            }
        })
        .unwrap();
        assert_eq!(impls.len(), 1);
        assert_eq!(
            assoc_type(&impls[0], "Access").as_deref(),
            Some("::cursor_caps::ReadableAccess")
        );
        assert_eq!(assoc_type(&impls[0], "Reference").as_deref(), Some("i32"));
    }

    #[test]
    fn test_explicit_access_is_kept() {
        let impls = expand(parse_quote! {
            impl<'a> Policy<Ptr<'a, i32>> for Doubled {
                type Reference = i32;
                type Access = WritableAccess;
                fn dereference(&self, base: &Ptr<'a, i32>) -> i32 { 0 }
            }
        })
        .unwrap();
        assert_eq!(assoc_type(&impls[0], "Access").as_deref(), Some("WritableAccess"));
    }

    #[test]
    fn test_empty_policy_inherits_everything() {
        let impls = expand(parse_quote! {
            impl<W: Cursor> Policy<W> for Passthrough {}
        })
        .unwrap();
        assert_eq!(impls.len(), 1);
        let policy = &impls[0];
        assert_eq!(
            assoc_type(policy, "Reference").as_deref(),
            Some("<Was::cursor_caps::Cursor>::Reference")
        );
        for knob in ["Access", "Traversal", "Distance", "Backward", "Jump"] {
            assert_eq!(
                assoc_type(policy, knob).as_deref(),
                Some("::cursor_caps::UseDefault"),
                "{knob}"
            );
        }
        assert_eq!(fn_names(policy), ["dereference"]);
    }

    #[test]
    fn test_motion_moves_into_its_own_impls() {
        let impls = expand(parse_quote! {
            impl<W: Cursor> Policy<W> for Reverse {
                fn increment(&self, base: &mut W) { base.decrement(); }
                fn decrement(&self, base: &mut W) { base.increment(); }
                fn advance(&self, base: &mut W, n: W::Distance) {}
                fn distance_to(&self, base: &W, other: &W) -> W::Distance { todo!() }
            }
        })
        .unwrap();
        assert_eq!(impls.len(), 3);

        let policy = &impls[0];
        assert_eq!(trait_name(policy), "Policy");
        assert_eq!(fn_names(policy), ["dereference", "increment"]);
        assert_eq!(
            assoc_type(policy, "Backward").as_deref(),
            Some("::cursor_caps::adaptor::Overridden")
        );
        assert_eq!(
            assoc_type(policy, "Jump").as_deref(),
            Some("::cursor_caps::adaptor::Overridden")
        );

        assert_eq!(trait_name(&impls[1]), "PolicyDecrement");
        assert_eq!(fn_names(&impls[1]), ["decrement"]);
        assert_eq!(trait_name(&impls[2]), "PolicyJump");
        assert_eq!(fn_names(&impls[2]), ["advance", "distance_to"]);
    }
}
