use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{
    Attribute, DeriveInput, Ident, Index, LitStr, Member, Meta, Visibility, parse_macro_input,
    parse_quote,
};

use crate::support::{diag, utils};

const ATTRIBUTE: &str = "validate";

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(input) {
        Ok(ts) => ts.into(),
        Err(e) => diag::to_compile_error(e),
    }
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let type_name = LitStr::new(&struct_name.unraw().to_string(), struct_name.span());
    let fields = utils::require_struct_fields(&input)?;
    let type_params = utils::type_param_names(&input.generics);

    let mut generics = input.generics.clone();
    let mut descriptors = Vec::new();
    let mut arms = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let (name, member) = match &field.ident {
            Some(ident) => (ident.unraw().to_string(), Member::Named(ident.clone())),
            None => (index.to_string(), Member::Unnamed(Index::from(index))),
        };
        let directive = directive_of(&field.attrs)?;
        let visibility = visibility_variant(&field.vis);

        let directive_tokens = match &directive {
            Some(lit) => quote!(::core::option::Option::Some(#lit)),
            None => quote!(::core::option::Option::None),
        };
        descriptors.push(quote! {
            ::fieldtag::__private::FieldDescriptor::new(
                #name,
                ::fieldtag::__private::Visibility::#visibility,
                #directive_tokens,
            )
        });

        // Unreadable fields get no accessor so their values are never touched.
        if directive.is_none() || !matches!(field.vis, Visibility::Public(_)) {
            continue;
        }

        let ty = &field.ty;
        let read = if utils::mentions_any(ty, &type_params) {
            generics
                .make_where_clause()
                .predicates
                .push(parse_quote!(#ty: ::fieldtag::__private::AsFieldValue));
            quote!(::fieldtag::__private::AsFieldValue::as_field_value(&self.#member))
        } else {
            quote!((&&&::fieldtag::__private::Probe(&self.#member)).read_field())
        };
        arms.push(quote! {
            #index => ::core::option::Option::Some(#read),
        });
    }

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::fieldtag::__private::Record for #struct_name #ty_generics #where_clause {
            fn type_name(&self) -> &'static str {
                #type_name
            }

            fn fields(&self) -> &'static [::fieldtag::__private::FieldDescriptor] {
                const FIELDS: &[::fieldtag::__private::FieldDescriptor] = &[#(#descriptors),*];
                FIELDS
            }

            fn field_value(
                &self,
                index: usize,
            ) -> ::core::option::Option<::fieldtag::__private::FieldValue<'_>> {
                #[allow(unused_imports)]
                use ::fieldtag::__private::{
                    ReadSequence as _, ReadSupported as _, ReadUnsupported as _,
                };

                match index {
                    #(#arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        #[automatically_derived]
        impl #impl_generics ::fieldtag::__private::Inspect for #struct_name #ty_generics #where_clause {
            fn shape(&self) -> ::fieldtag::__private::Shape<'_> {
                ::fieldtag::__private::Shape::Record(self)
            }
        }
    })
}

/// Reads the single `#[validate("...")]` attribute of a field, if any.
fn directive_of(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut found = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident(ATTRIBUTE)) {
        let Meta::List(_) = &attr.meta else {
            return Err(diag::error_spanned(
                attr,
                "expected `#[validate(\"rule:argument\")]`",
            ));
        };
        let directive = attr.parse_args::<LitStr>()?;
        if found.replace(directive).is_some() {
            return Err(diag::error_spanned(
                attr,
                "a field takes at most one `#[validate]` attribute",
            ));
        }
    }

    Ok(found)
}

fn visibility_variant(vis: &Visibility) -> Ident {
    let name = match vis {
        Visibility::Public(_) => "Public",
        Visibility::Restricted(_) => "Restricted",
        Visibility::Inherited => "Private",
    };
    Ident::new(name, proc_macro2::Span::call_site())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_str(input: DeriveInput) -> String {
        expand(input).unwrap().to_string()
    }

    #[test]
    fn private_fields_have_no_accessor() {
        let output = expand_str(parse_quote! {
            struct Login {
                #[validate("len:4")]
                pin: String,
                #[validate("min:1")]
                pub attempts: i32,
            }
        });

        assert!(output.contains("Visibility :: Private"));
        assert!(output.contains("self . attempts"));
        assert!(!output.contains("self . pin"));
    }

    #[test]
    fn restricted_visibility_is_recorded() {
        let output = expand_str(parse_quote! {
            struct Config {
                #[validate("max:10")]
                pub(crate) retries: i32,
            }
        });

        assert!(output.contains("Visibility :: Restricted"));
        assert!(!output.contains("self . retries"));
    }

    #[test]
    fn tuple_fields_are_numbered() {
        let output = expand_str(parse_quote! {
            pub struct Code(#[validate("len:3")] pub String);
        });

        assert!(output.contains("\"0\""));
        assert!(output.contains("self . 0"));
    }

    #[test]
    fn generic_fields_are_bounded() {
        let output = expand_str(parse_quote! {
            pub struct Wrapper<T> {
                #[validate("min:0")]
                pub value: T,
            }
        });

        assert!(output.contains("T : :: fieldtag :: __private :: AsFieldValue"));
    }

    #[test]
    fn rejects_enums() {
        let input: DeriveInput = parse_quote! {
            enum Choice { A, B }
        };
        assert!(expand(input).is_err());
    }

    #[test]
    fn rejects_duplicate_directives() {
        let input: DeriveInput = parse_quote! {
            struct Twice {
                #[validate("min:1")]
                #[validate("max:2")]
                pub value: i32,
            }
        };
        assert!(expand(input).is_err());
    }

    #[test]
    fn rejects_name_value_form() {
        let input: DeriveInput = parse_quote! {
            struct Assigned {
                #[validate = "min:1"]
                pub value: i32,
            }
        };
        assert!(expand(input).is_err());
    }
}
