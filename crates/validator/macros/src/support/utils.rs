use std::collections::HashSet;

use proc_macro2::{TokenStream as TokenStream2, TokenTree};
use quote::ToTokens;
use syn::{Data, DeriveInput, Fields, Generics, Ident, Type};

/// Ensure input is a struct and return its fields.
pub fn require_struct_fields(input: &DeriveInput) -> syn::Result<&Fields> {
    match &input.data {
        Data::Struct(s) => Ok(&s.fields),
        Data::Enum(e) => Err(syn::Error::new(
            e.enum_token.span,
            "`Record` can only be derived for structs, not enums",
        )),
        Data::Union(u) => Err(syn::Error::new(
            u.union_token.span,
            "`Record` can only be derived for structs, not unions",
        )),
    }
}

/// Names of the type parameters declared on `generics`.
pub fn type_param_names(generics: &Generics) -> HashSet<Ident> {
    generics.type_params().map(|p| p.ident.clone()).collect()
}

/// True if `ty` names any of `params` anywhere in its tokens.
pub fn mentions_any(ty: &Type, params: &HashSet<Ident>) -> bool {
    !params.is_empty() && tokens_mention(ty.to_token_stream(), params)
}

fn tokens_mention(tokens: TokenStream2, params: &HashSet<Ident>) -> bool {
    tokens.into_iter().any(|tt| match tt {
        TokenTree::Ident(ident) => params.contains(&ident),
        TokenTree::Group(group) => tokens_mention(group.stream(), params),
        TokenTree::Punct(_) | TokenTree::Literal(_) => false,
    })
}
