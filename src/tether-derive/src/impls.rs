use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::spanned::Spanned;
use syn::{DeriveInput, Error as SynError, ItemTrait, Result as SynResult};

use crate::attrs::KindData;

fn expand_kind(kind: KindData) -> TokenStream2 {
    match kind {
        KindData::Object => quote! { ::tether::entity::Object },
        KindData::Function => quote! { ::tether::entity::Function },
    }
}

pub fn expand_entity(input: &DeriveInput, kind: KindData) -> TokenStream2 {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let kind = expand_kind(kind);

    quote! {
        impl #impl_generics ::tether::entity::Interface for #ident #ty_generics #where_clause {
            type Kind = #kind;
        }

        impl #impl_generics ::tether::entity::Entity for #ident #ty_generics #where_clause {
            type Ownership = ::tether::entity::Exclusive;

            type Wrapper = ::tether::wrapper::Unique<Self>;

            fn wrap(self) -> Self::Wrapper {
                ::tether::wrapper::Unique::new(self)
            }
        }
    }
}

pub fn expand_interface(item: TokenStream2, kind: KindData) -> SynResult<TokenStream2> {
    let item = match syn::parse2::<ItemTrait>(item) {
        Ok(item) => item,
        Err(err) => {
            return Err(SynError::new(
                err.span(),
                "`#[interface]` should be annotated on a trait",
            ))
        }
    };
    if let Some(lifetime) = item.generics.lifetimes().next() {
        return Err(SynError::new(
            lifetime.span(),
            "traits with lifetime parameters are not supported by `#[interface]`",
        ));
    }

    let ident = &item.ident;
    let (impl_generics, ty_generics, where_clause) = item.generics.split_for_impl();
    let kind = expand_kind(kind);

    Ok(quote! {
        #item

        impl #impl_generics ::tether::entity::Interface for dyn #ident #ty_generics #where_clause {
            type Kind = #kind;
        }

        impl #impl_generics ::tether::entity::Interface
            for dyn #ident #ty_generics + ::std::marker::Send + ::std::marker::Sync
        #where_clause
        {
            type Kind = #kind;
        }
    })
}
