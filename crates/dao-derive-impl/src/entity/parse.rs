// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity definition parsing.
//!
//! # Entity-Level `#[entity(...)]`
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `table` | struct name through `naming` | Table name |
//! | `naming` | `"none"` | Convention for derived table and column names |
//!
//! # Validation
//!
//! - a field carries at most one of `#[id]`, `#[version]`, `#[transient]`
//! - at most one `#[version]` field, of a numeric type
//! - `#[column]` is not allowed on `#[transient]` fields
//!
//! All violations are reported together.

mod field;
mod naming;

use dao_core::NamingConvention;
use darling::FromDeriveInput;
pub use field::FieldDef;
pub use naming::Naming;
use syn::{DeriveInput, Generics, Ident};

/// Entity-level attributes parsed from `#[entity(...)]`.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(entity), supports(struct_named))]
struct EntityAttrs {
    ident: Ident,

    generics: Generics,

    #[darling(default)]
    table: Option<String>,

    #[darling(default)]
    naming: Naming
}

/// Complete parsed entity definition.
#[derive(Debug, Clone)]
pub struct EntityDef {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics, carried to the generated impl.
    pub generics: Generics,

    /// Table name, explicit or derived.
    pub table: String,

    /// Convention for column names not given explicitly.
    pub naming: NamingConvention,

    /// Fields in declaration order.
    pub fields: Vec<FieldDef>
}

impl EntityDef {
    /// Parse and validate an entity struct.
    ///
    /// # Errors
    ///
    /// - Applied to enums, unions, tuple or unit structs
    /// - Invalid `#[entity(...)]` or field attributes
    /// - Marker combinations listed in the module docs
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = EntityAttrs::from_derive_input(input)?;

        let mut errors = darling::Error::accumulator();
        let fields: Vec<FieldDef> = match &input.data {
            syn::Data::Struct(data) => data
                .fields
                .iter()
                .filter_map(|field| errors.handle(FieldDef::from_field(field)))
                .collect(),
            _ => {
                return Err(
                    darling::Error::custom("Entity can only be derived for structs")
                        .with_span(input)
                );
            }
        };
        validate(&fields, &mut errors);
        errors.finish()?;

        let naming = attrs.naming.0;
        let table = attrs
            .table
            .unwrap_or_else(|| naming.apply(&attrs.ident.to_string()));

        Ok(Self {
            ident: attrs.ident,
            generics: attrs.generics,
            table,
            naming,
            fields
        })
    }
}

fn validate(fields: &[FieldDef], errors: &mut darling::error::Accumulator) {
    let mut version_seen = false;
    for field in fields {
        if field.kind().is_none() {
            let markers = field
                .storage
                .markers()
                .iter()
                .map(|marker| format!("#[{marker}]"))
                .collect::<Vec<_>>()
                .join(", ");
            errors.push(
                darling::Error::custom(format!(
                    "field `{}` cannot combine {markers}",
                    field.name_str()
                ))
                .with_span(field.name())
            );
        }
        if field.storage.is_transient && field.column.is_some() {
            errors.push(
                darling::Error::custom("#[transient] fields have no column")
                    .with_span(field.name())
            );
        }
        if field.storage.is_version {
            if version_seen {
                errors.push(
                    darling::Error::custom("an entity can have only one #[version] field")
                        .with_span(field.name())
                );
            }
            version_seen = true;
            if !field.is_numeric() {
                errors.push(
                    darling::Error::custom("#[version] field must have a numeric type")
                        .with_span(field.ty())
                );
            }
        }
    }
}
