//! `#[derive(Interoperable)]` expansion.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_quote, DeriveInput, Type};

use crate::common::{parse_type_list_attrs, type_key};

pub fn expand_derive_interoperable(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let this: Type = parse_quote! { #name #ty_generics };

    let targets = parse_type_list_attrs(&input.attrs, "interoperable")?;
    for target in &targets {
        if type_key(target) == type_key(&this) || type_key(target) == "Self" {
            return Err(syn::Error::new_spanned(
                target,
                "a cursor is always interoperable with itself; list only other cursors",
            ));
        }
    }

    let mut predicates = where_clause
        .map(|w| w.predicates.iter().cloned().collect::<Vec<_>>())
        .unwrap_or_default();
    predicates.push(parse_quote! { #this: ::cursor_caps::Cursor });

    let reflexive = quote! {
        impl #impl_generics ::cursor_caps::Interoperable<#this> for #this
        where
            #(#predicates,)*
        {
            type Common = #this;

            #[inline]
            fn lift(&self) -> Self::Common {
                ::core::clone::Clone::clone(self)
            }

            #[inline]
            fn lift_other(other: &#this) -> Self::Common {
                ::core::clone::Clone::clone(other)
            }
        }
    };

    let pairs = targets.iter().map(|target| {
        quote! {
            impl #impl_generics ::cursor_caps::Interoperable<#target> for #this
            where
                #(#predicates,)*
                #target: ::cursor_caps::Cursor + ::core::convert::From<#this>,
            {
                type Common = #target;

                #[inline]
                fn lift(&self) -> Self::Common {
                    ::core::convert::From::from(::core::clone::Clone::clone(self))
                }

                #[inline]
                fn lift_other(other: &#target) -> Self::Common {
                    ::core::clone::Clone::clone(other)
                }
            }

            impl #impl_generics ::cursor_caps::Interoperable<#this> for #target
            where
                #(#predicates,)*
                #target: ::cursor_caps::Cursor + ::core::convert::From<#this>,
            {
                type Common = #target;

                #[inline]
                fn lift(&self) -> Self::Common {
                    ::core::clone::Clone::clone(self)
                }

                #[inline]
                fn lift_other(other: &#this) -> Self::Common {
                    ::core::convert::From::from(::core::clone::Clone::clone(other))
                }
            }
        }
    });

    Ok(quote! {
        #reflexive
        #(#pairs)*
    })
}
