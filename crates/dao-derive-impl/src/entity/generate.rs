// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `impl dao_core::Entity` generation.
//!
//! Each field becomes one `PropertyDescriptor` built at runtime from a copy
//! of the field value:
//!
//! ```rust,ignore
//! impl ::dao_core::Entity for Employee {
//!     const TABLE_NAME: &'static str = "EMPLOYEE";
//!
//!     fn property_descriptors(&self) -> Result<Vec<PropertyDescriptor>, PropertyError> {
//!         Ok(vec![
//!             PropertyDescriptor::builder()
//!                 .name("id")
//!                 .wrapper(Wrapper::with_value(self.id.clone()))
//!                 .kind(PropertyKind::Id)
//!                 .column_policy(ColumnPolicy::Derive(NamingConvention::SnakeUpperCase))
//!                 .build()?,
//!             // ...
//!         ])
//!     }
//! }
//! ```
//!
//! Field types must implement `dao_core::BasicValue`, optionally wrapped in
//! `Option`.

use dao_core::{NamingConvention, PropertyKind};
use proc_macro2::TokenStream;
use quote::quote;

use super::parse::{EntityDef, FieldDef};

/// Generate the `Entity` implementation.
pub fn generate(entity: &EntityDef) -> TokenStream {
    let ident = &entity.ident;
    let (impl_generics, ty_generics, where_clause) = entity.generics.split_for_impl();
    let table = &entity.table;
    let naming = naming_tokens(entity.naming);
    let properties = entity
        .fields
        .iter()
        .map(|field| property_tokens(field, &naming));

    quote! {
        impl #impl_generics ::dao_core::Entity for #ident #ty_generics #where_clause {
            const TABLE_NAME: &'static str = #table;

            fn property_descriptors(
                &self
            ) -> ::core::result::Result<
                ::std::vec::Vec<::dao_core::PropertyDescriptor>,
                ::dao_core::PropertyError
            > {
                ::core::result::Result::Ok(::std::vec![#(#properties?),*])
            }
        }
    }
}

fn property_tokens(field: &FieldDef, naming: &TokenStream) -> TokenStream {
    let name = field.name_str();
    let ident = field.name();
    let wrapper = if field.is_option() {
        quote!(::dao_core::Wrapper::from_option(::core::clone::Clone::clone(&self.#ident)))
    } else {
        quote!(::dao_core::Wrapper::with_value(::core::clone::Clone::clone(&self.#ident)))
    };
    let column = field
        .column_name()
        .map(|column| quote!(.column_name(#column)));
    let insertable = field.is_insertable();
    let updatable = field.is_updatable();
    let kind = kind_tokens(field.kind().unwrap_or_default());

    quote! {
        ::dao_core::PropertyDescriptor::builder()
            .name(#name)
            #column
            .wrapper(#wrapper)
            .insertable(#insertable)
            .updatable(#updatable)
            .kind(#kind)
            .column_policy(::dao_core::ColumnPolicy::Derive(#naming))
            .build()
    }
}

fn kind_tokens(kind: PropertyKind) -> TokenStream {
    match kind {
        PropertyKind::Basic => quote!(::dao_core::PropertyKind::Basic),
        PropertyKind::Id => quote!(::dao_core::PropertyKind::Id),
        PropertyKind::Version => quote!(::dao_core::PropertyKind::Version),
        PropertyKind::Transient => quote!(::dao_core::PropertyKind::Transient)
    }
}

fn naming_tokens(naming: NamingConvention) -> TokenStream {
    match naming {
        NamingConvention::None => quote!(::dao_core::NamingConvention::None),
        NamingConvention::SnakeUpperCase => {
            quote!(::dao_core::NamingConvention::SnakeUpperCase)
        }
        NamingConvention::SnakeLowerCase => {
            quote!(::dao_core::NamingConvention::SnakeLowerCase)
        }
        NamingConvention::UpperCase => quote!(::dao_core::NamingConvention::UpperCase),
        NamingConvention::LowerCase => quote!(::dao_core::NamingConvention::LowerCase)
    }
}
