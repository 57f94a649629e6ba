mod attrs;
mod impls;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use syn::Result as SynResult;

/// Makes a type bindable: implements `Interface` and `Entity` for it, as an
/// exclusively owned object.
///
/// Add `#[entity(function)]` to mark the type as a callable producing a
/// result, whose bindings are then not referable.
#[proc_macro_derive(Entity, attributes(entity))]
pub fn derive_entity(item: TokenStream) -> TokenStream {
    match derive_entity_impl(item) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Makes trait objects of the annotated trait usable as expected types, for
/// `dyn Trait` and `dyn Trait + Send + Sync`.
///
/// `#[interface(function)]` marks implementors as callables producing a
/// result.
#[proc_macro_attribute]
pub fn interface(attr: TokenStream, item: TokenStream) -> TokenStream {
    match interface_impl(attr, item) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

fn derive_entity_impl(item: TokenStream) -> SynResult<TokenStream2> {
    let input = syn::parse::<syn::DeriveInput>(item)?;
    let kind = attrs::parse_helper_attributes(&input.attrs)?;
    let expanded = impls::expand_entity(&input, kind);
    Ok(expanded)
}

fn interface_impl(attr: TokenStream, item: TokenStream) -> SynResult<TokenStream2> {
    let kind = attrs::parse_attribute(attr.into())?;
    let expanded = impls::expand_interface(item.into(), kind)?;
    Ok(expanded)
}
