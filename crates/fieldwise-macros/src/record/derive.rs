//! Implementation of the `#[derive(Record)]` macro.
//!
//! This macro generates implementations of the `Reflect` and `Record` traits
//! and field name constants for type-safe lookups.

use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    ext::IdentExt, parse_quote, spanned::Spanned, Data, DeriveInput, Error, Fields, Result,
    Visibility,
};

use super::attrs::parse_record_attrs;

/// Main implementation of the Record derive macro.
pub fn record_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let type_name = struct_name.unraw().to_string();

    // Named fields, or none at all for a unit struct
    let fields: Vec<&syn::Field> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().collect(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(Error::new(
                    input.span(),
                    "Record can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Record can only be derived for structs",
            ))
        }
    };

    let mut field_names: Vec<String> = Vec::new();
    let mut field_matches: Vec<TokenStream> = Vec::new();
    let mut field_constants: Vec<TokenStream> = Vec::new();
    let mut field_types: Vec<&syn::Type> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for field in fields {
        let field_ident = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let record_attrs = parse_record_attrs(&field.attrs)?;

        // Skip if marked with #[record(skip)]
        if record_attrs.skip {
            continue;
        }

        // Determine the lookup name
        let lookup_name = record_attrs
            .rename
            .unwrap_or_else(|| field_ident.unraw().to_string());

        if !seen.insert(lookup_name.clone()) {
            return Err(Error::new(
                field.span(),
                format!("duplicate record field name '{}'", lookup_name),
            ));
        }

        let exported = !matches!(field.vis, Visibility::Inherited);

        // Only exported fields get a constant
        if exported {
            let const_name = format_ident!("{}", to_screaming_snake_case(&lookup_name));
            field_constants.push(quote! {
                /// Field name constant for type-safe lookups.
                pub const #const_name: &'static str = #lookup_name;
            });
        }

        field_matches.push(quote! {
            #lookup_name => ::core::option::Option::Some(::fieldwise::Field {
                name: #lookup_name,
                value: ::fieldwise::Reflect::reflect(&self.#field_ident),
                exported: #exported,
            }),
        });

        field_names.push(lookup_name);
        field_types.push(&field.ty);
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Generic structs need every field type to be reflectable
    let mut reflect_where = where_clause.cloned().unwrap_or_else(|| parse_quote!(where));
    if input.generics.type_params().next().is_some() {
        for ty in &field_types {
            reflect_where
                .predicates
                .push(parse_quote!(#ty: ::fieldwise::Reflect));
        }
    }

    let constants_impl = if field_constants.is_empty() {
        quote! {}
    } else {
        quote! {
            impl #impl_generics #struct_name #ty_generics #where_clause {
                #(#field_constants)*
            }
        }
    };

    // Generate the impl blocks
    let expanded = quote! {
        #constants_impl

        impl #impl_generics ::fieldwise::Record for #struct_name #ty_generics #reflect_where {
            fn type_name(&self) -> &'static str {
                #type_name
            }

            fn field_names(&self) -> &'static [&'static str] {
                &[#(#field_names),*]
            }

            fn field(&self, name: &str) -> ::core::option::Option<::fieldwise::Field<'_>> {
                match name {
                    #(#field_matches)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl #impl_generics ::fieldwise::Reflect for #struct_name #ty_generics #reflect_where {
            fn reflect(&self) -> ::fieldwise::Value<'_> {
                ::fieldwise::Value::Struct(self)
            }
        }
    };

    Ok(expanded)
}

/// Convert a string to SCREAMING_SNAKE_CASE.
fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('_');
            }
            result.push(c);
            prev_was_lower = false;
        } else if c == '_' || c == '-' || c == ' ' {
            result.push('_');
            prev_was_lower = false;
        } else {
            result.push(c.to_ascii_uppercase());
            prev_was_lower = c.is_alphanumeric();
        }
    }

    result
}
