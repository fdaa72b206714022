// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! ```text
//! field.rs (coordinator)
//! ├── storage.rs  - #[id], #[version], #[transient]
//! └── column.rs   - #[column(name, insertable, updatable)]
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! #[id]
//! pub id: i32,
//!
//! #[column(name = "EMP_NAME", updatable = false)]
//! pub name: String,
//!
//! #[version]
//! pub version: i64,
//!
//! #[transient]
//! pub cached_total: Option<f64>,
//! ```

mod column;
mod storage;

use column::ColumnConfig;
use dao_core::PropertyKind;
use storage::StorageConfig;
use syn::{Attribute, Field, GenericArgument, Ident, PathArguments, Type, ext::IdentExt};

use crate::dao::types::basic_kind;

/// Field definition with all parsed attributes.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Field identifier.
    pub ident: Ident,

    /// Field type.
    pub ty: Type,

    /// Kind markers.
    pub storage: StorageConfig,

    /// `#[column(...)]`, if present.
    pub column: Option<ColumnConfig>
}

fn require_marker(attr: &Attribute) -> darling::Result<bool> {
    attr.meta
        .require_path_only()
        .map(|_| true)
        .map_err(darling::Error::from)
}

impl FieldDef {
    /// Parse field definition from syn's `Field`.
    ///
    /// # Errors
    ///
    /// - Tuple struct field
    /// - Marker attribute with arguments
    /// - Invalid `#[column(...)]` options
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("Entity fields must be named").with_span(field)
        })?;

        let mut errors = darling::Error::accumulator();
        let mut storage = StorageConfig::default();
        let mut column = None;

        for attr in &field.attrs {
            if attr.path().is_ident("id") {
                storage.is_id = errors.handle(require_marker(attr)).unwrap_or(true);
            } else if attr.path().is_ident("version") {
                storage.is_version = errors.handle(require_marker(attr)).unwrap_or(true);
            } else if attr.path().is_ident("transient") {
                storage.is_transient = errors.handle(require_marker(attr)).unwrap_or(true);
            } else if attr.path().is_ident("column") {
                column = errors.handle(ColumnConfig::from_attr(attr));
            }
        }

        errors.finish_with(Self {
            ident,
            ty: field.ty.clone(),
            storage,
            column
        })
    }

    /// Get the field name as an identifier.
    #[must_use]
    pub fn name(&self) -> &Ident {
        &self.ident
    }

    /// Get the field name as a string.
    #[must_use]
    pub fn name_str(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Get the field type.
    #[must_use]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// Check if the field type is `Option<T>`.
    ///
    /// Optional fields start with an empty wrapper when `None`.
    #[must_use]
    pub fn is_option(&self) -> bool {
        if let Type::Path(type_path) = &self.ty
            && let Some(segment) = type_path.path.segments.last()
        {
            return segment.ident == "Option";
        }
        false
    }

    /// Check if the field type is a numeric basic type, looking through
    /// `Option`.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        let Type::Path(type_path) = &self.ty else {
            return false;
        };
        let Some(segment) = type_path.path.segments.last() else {
            return false;
        };
        if segment.ident == "Option"
            && let PathArguments::AngleBracketed(args) = &segment.arguments
            && let Some(GenericArgument::Type(Type::Path(inner))) = args.args.first()
            && let Some(inner) = inner.path.segments.last()
        {
            return basic_kind(&inner.ident.to_string()).is_some_and(|kind| kind.is_numeric());
        }
        basic_kind(&segment.ident.to_string()).is_some_and(|kind| kind.is_numeric())
    }

    /// Property kind, `None` when markers conflict.
    #[must_use]
    pub fn kind(&self) -> Option<PropertyKind> {
        self.storage.kind()
    }

    /// Explicit column name.
    #[must_use]
    pub fn column_name(&self) -> Option<&str> {
        self.column.as_ref().and_then(|column| column.name.as_deref())
    }

    /// Include in `INSERT` statements.
    #[must_use]
    pub fn is_insertable(&self) -> bool {
        self.column.as_ref().is_none_or(|column| column.insertable)
    }

    /// Include in `UPDATE` statements.
    #[must_use]
    pub fn is_updatable(&self) -> bool {
        self.column.as_ref().is_none_or(|column| column.updatable)
    }
}

#[cfg(test)]
mod tests {
    use syn::FieldsNamed;

    use super::*;

    fn fields(tokens: FieldsNamed) -> Vec<darling::Result<FieldDef>> {
        tokens.named.iter().map(FieldDef::from_field).collect()
    }

    fn field(tokens: FieldsNamed) -> FieldDef {
        fields(tokens).remove(0).unwrap()
    }

    #[test]
    fn plain_field() {
        let def = field(syn::parse_quote!({ pub name: String }));
        assert_eq!(def.name_str(), "name");
        assert_eq!(def.kind(), Some(PropertyKind::Basic));
        assert!(def.column_name().is_none());
        assert!(def.is_insertable());
        assert!(def.is_updatable());
        assert!(!def.is_option());
    }

    #[test]
    fn markers() {
        assert_eq!(
            field(syn::parse_quote!({ #[id] pub id: i32 })).kind(),
            Some(PropertyKind::Id)
        );
        assert_eq!(
            field(syn::parse_quote!({ #[version] pub version: i64 })).kind(),
            Some(PropertyKind::Version)
        );
        assert_eq!(
            field(syn::parse_quote!({ #[transient] pub cache: Option<f64> })).kind(),
            Some(PropertyKind::Transient)
        );
        assert!(field(syn::parse_quote!({ #[id] #[transient] pub id: i32 })).kind().is_none());
    }

    #[test]
    fn column_options() {
        let def = field(syn::parse_quote!({
            #[column(name = "EMP_NAME", updatable = false)]
            pub name: Option<String>
        }));
        assert_eq!(def.column_name(), Some("EMP_NAME"));
        assert!(def.is_insertable());
        assert!(!def.is_updatable());
        assert!(def.is_option());
    }

    #[test]
    fn numeric_types() {
        assert!(field(syn::parse_quote!({ pub v: i64 })).is_numeric());
        assert!(field(syn::parse_quote!({ pub v: Option<i32> })).is_numeric());
        assert!(!field(syn::parse_quote!({ pub v: String })).is_numeric());
        assert!(!field(syn::parse_quote!({ pub v: Option<chrono::NaiveDate> })).is_numeric());
    }

    #[test]
    fn raw_identifier_loses_prefix() {
        let def = field(syn::parse_quote!({ pub r#type: String }));
        assert_eq!(def.name_str(), "type");
        assert_eq!(def.name(), "r#type");
    }

    #[test]
    fn marker_with_arguments_is_rejected() {
        let parsed = fields(syn::parse_quote!({ #[id(auto)] pub id: i32 }));
        assert!(parsed[0].is_err());
    }
}
