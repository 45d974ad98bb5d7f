//! Procedural macros for schema_map
//!
//! This crate provides the `Model` derive macro, which generates the type
//! descriptor that schema_map parses into a table schema.
//!
//! Recognized attributes:
//!
//! - `#[schema_map(table = "users")]` on the struct names its table
//! - `#[schema_map(custom_table_name)]` on the struct requires a
//!   hand-written `TableName` impl; non-generic structs pick up such an impl
//!   without the attribute
//! - `#[schema_map(embedded)]` on a field marks it as composed into the
//!   struct without a column of its own
//! - `#[tag(key = "value", ...)]` on a field attaches annotations

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::ext::IdentExt;
use syn::{
    parse_macro_input, parse_quote, Attribute, Data, DeriveInput, Fields, LitStr, Type,
    Visibility, WherePredicate,
};

/// Derive macro for schema_map models
#[proc_macro_derive(Model, attributes(schema_map, tag))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand_model(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Struct-level `#[schema_map(...)]` arguments
#[derive(Default)]
struct ModelArgs {
    table: Option<LitStr>,
    custom_table_name: bool,
}

/// Field-level attributes
#[derive(Default)]
struct MemberArgs {
    embedded: bool,
    tags: Vec<(String, LitStr)>,
}

/// Parse `#[schema_map(...)]` on the struct itself
fn parse_model_args(attrs: &[Attribute]) -> syn::Result<ModelArgs> {
    let mut args = ModelArgs::default();

    for attr in attrs {
        if !attr.path().is_ident("schema_map") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("table") {
                args.table = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("custom_table_name") {
                args.custom_table_name = true;
                Ok(())
            } else {
                Err(meta.error("expected `table = \"...\"` or `custom_table_name`"))
            }
        })?;
    }

    if let (Some(table), true) = (&args.table, args.custom_table_name) {
        return Err(syn::Error::new(
            table.span(),
            "`table` and `custom_table_name` cannot be combined",
        ));
    }

    Ok(args)
}

/// Parse `#[schema_map(embedded)]` and `#[tag(...)]` on a field
fn parse_member_args(attrs: &[Attribute]) -> syn::Result<MemberArgs> {
    let mut args = MemberArgs::default();

    for attr in attrs {
        if attr.path().is_ident("schema_map") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("embedded") {
                    args.embedded = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `embedded`"))
                }
            })?;
        } else if attr.path().is_ident("tag") {
            attr.parse_nested_meta(|meta| {
                let key = meta
                    .path
                    .get_ident()
                    .ok_or_else(|| meta.error("tag keys must be plain identifiers"))?
                    .unraw()
                    .to_string();
                let value: LitStr = meta.value()?.parse()?;
                args.tags.push((key, value));
                Ok(())
            })?;
        }
    }

    Ok(args)
}

/// Render a type the way it was written, without token spacing
fn type_label(ty: &Type) -> String {
    ty.to_token_stream()
        .to_string()
        .replace(" :: ", "::")
        .replace(":: ", "::")
        .replace(" <", "<")
        .replace("< ", "<")
        .replace(" >", ">")
        .replace(" ,", ",")
        .replace("& ", "&")
}

/// Generate the `Model` and `Reflect` impls
fn expand_model(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let name_str = name.unraw().to_string();
    let model_args = parse_model_args(&input.attrs)?;

    let mut members = Vec::new();
    let mut bounds: Vec<WherePredicate> = Vec::new();

    let kind = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => {
                for field in &fields.named {
                    let ident = match &field.ident {
                        Some(ident) => ident,
                        None => continue,
                    };
                    let member_name = ident.unraw().to_string();
                    let args = parse_member_args(&field.attrs)?;
                    let exported = matches!(field.vis, Visibility::Public(_));
                    let ty = &field.ty;

                    let type_info = if exported && !args.embedded {
                        bounds.push(parse_quote!(#ty: ::schema_map::Reflect));
                        quote!(<#ty as ::schema_map::Reflect>::type_info)
                    } else {
                        let label = type_label(ty);
                        quote!(|| ::schema_map::TypeInfo::opaque(#label))
                    };

                    let private = (!exported).then(|| quote!(.private()));
                    let embedded = args.embedded.then(|| quote!(.embedded()));
                    let tags: Vec<TokenStream2> = args
                        .tags
                        .iter()
                        .map(|(key, value)| quote!(.tag(#key, #value)))
                        .collect();

                    members.push(quote! {
                        .member(
                            ::schema_map::Member::new(#member_name, #type_info)
                                #private
                                #embedded
                                #(#tags)*
                        )
                    });
                }
                quote!(::schema_map::Kind::Struct)
            }
            Fields::Unnamed(_) => quote!(::schema_map::Kind::Tuple),
            Fields::Unit => quote!(::schema_map::Kind::Unit),
        },
        Data::Enum(_) => quote!(::schema_map::Kind::Enum),
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "Model cannot be derived for unions",
            ))
        }
    };

    let mut model_generics = input.generics.clone();
    if !input.generics.params.is_empty() {
        model_generics.make_where_clause().predicates.extend(bounds);
    }
    let (impl_generics, ty_generics, where_clause) = model_generics.split_for_impl();
    let (plain_impl_generics, _, plain_where_clause) = input.generics.split_for_impl();

    // Type parameters leave `Self: TableName` undecidable at the derive site,
    // so generic models must opt in with `custom_table_name`.
    let naming = if model_args.table.is_some() || model_args.custom_table_name {
        quote! {
            fn as_table_name(&self) -> ::core::option::Option<&dyn ::schema_map::TableName> {
                ::core::option::Option::Some(self)
            }
        }
    } else if input.generics.type_params().next().is_none() {
        quote! {
            fn as_table_name(&self) -> ::core::option::Option<&dyn ::schema_map::TableName> {
                #[allow(unused_imports)]
                use ::schema_map::models::capability::{ViaTableName as _, WithoutTableName as _};
                (&&::schema_map::models::capability::Capability(self)).table_name_capability()
            }
        }
    } else {
        TokenStream2::new()
    };

    let table_name_impl = model_args.table.map(|table| {
        quote! {
            #[automatically_derived]
            impl #plain_impl_generics ::schema_map::TableName for #name #ty_generics #plain_where_clause {
                fn table_name(&self) -> ::std::string::String {
                    ::std::string::String::from(#table)
                }
            }
        }
    });

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::schema_map::Model for #name #ty_generics #where_clause {
            fn descriptor() -> ::schema_map::TypeDescriptor {
                ::schema_map::TypeDescriptor::new(#name_str, #kind)
                    #(#members)*
            }

            #naming
        }

        #[automatically_derived]
        impl #plain_impl_generics ::schema_map::Reflect for #name #ty_generics #plain_where_clause {
            fn type_info() -> ::schema_map::TypeInfo {
                ::schema_map::TypeInfo::new(#name_str, #kind)
            }
        }

        #table_name_impl
    })
}
