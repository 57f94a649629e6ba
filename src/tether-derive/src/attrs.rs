use proc_macro2::TokenStream as TokenStream2;
use syn::spanned::Spanned;
use syn::{Attribute, Error as SynError, Ident, Result as SynResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindData {
    Object,
    Function,
}

pub fn parse_attribute(attr: TokenStream2) -> SynResult<KindData> {
    if attr.is_empty() {
        return Ok(KindData::Object);
    }
    let ident = syn::parse2::<Ident>(attr)?;
    parse_kind(&ident)
}

pub fn parse_helper_attributes(attrs: &[Attribute]) -> SynResult<KindData> {
    let helpers: Vec<_> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("entity"))
        .collect();

    match helpers.as_slice() {
        [] => Ok(KindData::Object),
        [attr] => parse_kind(&attr.parse_args::<Ident>()?),
        [_, attr, ..] => Err(SynError::new(
            attr.span(),
            "`#[entity(..)]` should be specified at most once",
        )),
    }
}

fn parse_kind(ident: &Ident) -> SynResult<KindData> {
    if ident == "object" {
        Ok(KindData::Object)
    } else if ident == "function" {
        Ok(KindData::Function)
    } else {
        Err(SynError::new(
            ident.span(),
            "expects either `object` or `function`",
        ))
    }
}
