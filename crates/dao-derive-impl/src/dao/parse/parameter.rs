// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Method parameter parsing.
//!
//! Each typed parameter of a `#[procedure]` or `#[function]` method carries
//! one role marker:
//!
//! | Attribute | Role | Expected type |
//! |-----------|------|---------------|
//! | `#[input]` | `In` | basic, enum or domain |
//! | `#[output]` | `Out` | `&mut Reference<T>` |
//! | `#[in_out]` | `InOut` | `&mut Reference<T>` |
//! | `#[result_set]` | `ResultSet` | `&mut Vec<T>` |
//!
//! Markers are collected as written. Checking that exactly one is present
//! happens when the parameter metadata is built, so the failure carries a
//! diagnostic code.

use dao_core::ParameterMode;
use proc_macro2::Span;
use syn::{Attribute, Ident, Pat, PatType, Type, ext::IdentExt, spanned::Spanned};

/// Binding role of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterRole {
    In,
    Out,
    InOut,
    ResultSet
}

impl ParameterRole {
    /// Every role, in attribute lookup order.
    pub const ALL: [Self; 4] = [Self::In, Self::Out, Self::InOut, Self::ResultSet];

    /// Role named by a marker attribute.
    #[must_use]
    pub fn from_attr(attr: &Attribute) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|role| attr.path().is_ident(role.attribute()))
    }

    /// Runtime mode emitted for this role.
    #[must_use]
    pub const fn mode(&self) -> ParameterMode {
        match self {
            Self::In => ParameterMode::In,
            Self::Out => ParameterMode::Out,
            Self::InOut => ParameterMode::InOut,
            Self::ResultSet => ParameterMode::ResultSet
        }
    }

    /// Marker attribute name.
    #[must_use]
    pub const fn attribute(&self) -> &'static str {
        self.mode().as_str()
    }
}

/// Role marker as written on a parameter.
#[derive(Debug, Clone, Copy)]
pub struct RoleMarker {
    pub role: ParameterRole,
    pub span: Span
}

/// Typed method parameter.
#[derive(Debug, Clone)]
pub struct ParameterDef {
    /// Bound identifier, `None` for patterns such as `_`.
    pub ident: Option<Ident>,

    /// Declared type.
    pub ty: Type,

    /// Role markers in attribute order.
    pub roles: Vec<RoleMarker>,

    /// Span of the whole parameter.
    pub span: Span
}

impl ParameterDef {
    /// Parse a typed parameter.
    ///
    /// # Errors
    ///
    /// Returns error if a role marker carries arguments.
    pub fn from_pat_type(arg: &PatType) -> darling::Result<Self> {
        let ident = match &*arg.pat {
            Pat::Ident(pat) if pat.subpat.is_none() => Some(pat.ident.clone()),
            _ => None
        };

        let mut errors = darling::Error::accumulator();
        let mut roles = Vec::new();
        for attr in &arg.attrs {
            let Some(role) = ParameterRole::from_attr(attr) else {
                continue;
            };
            if errors
                .handle(attr.meta.require_path_only().map_err(darling::Error::from))
                .is_some()
            {
                roles.push(RoleMarker {
                    role,
                    span: attr.span()
                });
            }
        }

        errors.finish_with(Self {
            ident,
            ty: (*arg.ty).clone(),
            roles,
            span: arg.span()
        })
    }

    /// Parameter name without the `r#` prefix, if bound to a plain
    /// identifier.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.ident.as_ref().map(|ident| ident.unraw().to_string())
    }
}

/// Check if an attribute is one of the role markers.
#[must_use]
pub fn is_role_attr(attr: &Attribute) -> bool {
    ParameterRole::from_attr(attr).is_some()
}

#[cfg(test)]
mod tests {
    use syn::FnArg;

    use super::*;

    fn param(arg: FnArg) -> darling::Result<ParameterDef> {
        match arg {
            FnArg::Typed(pat) => ParameterDef::from_pat_type(&pat),
            FnArg::Receiver(_) => panic!("expected a typed parameter")
        }
    }

    #[test]
    fn role_attribute_names() {
        assert_eq!(ParameterRole::In.attribute(), "input");
        assert_eq!(ParameterRole::Out.attribute(), "output");
        assert_eq!(ParameterRole::InOut.attribute(), "in_out");
        assert_eq!(ParameterRole::ResultSet.attribute(), "result_set");
    }

    #[test]
    fn single_role() {
        let def = param(syn::parse_quote!(#[input] id: i32)).unwrap();
        assert_eq!(def.name().as_deref(), Some("id"));
        assert_eq!(def.roles.len(), 1);
        assert_eq!(def.roles[0].role, ParameterRole::In);
    }

    #[test]
    fn no_role_and_foreign_attributes() {
        let def = param(syn::parse_quote!(#[allow(unused)] id: i32)).unwrap();
        assert!(def.roles.is_empty());
    }

    #[test]
    fn several_roles_are_kept() {
        let def = param(syn::parse_quote!(#[input] #[output] id: i32)).unwrap();
        let roles: Vec<_> = def.roles.iter().map(|m| m.role).collect();
        assert_eq!(roles, [ParameterRole::In, ParameterRole::Out]);
    }

    #[test]
    fn wildcard_has_no_name() {
        let def = param(syn::parse_quote!(#[input] _: i32)).unwrap();
        assert!(def.name().is_none());
    }

    #[test]
    fn raw_identifier_loses_prefix() {
        let def = param(syn::parse_quote!(#[input] r#type: i32)).unwrap();
        assert_eq!(def.name().as_deref(), Some("type"));
    }

    #[test]
    fn marker_with_arguments_is_rejected() {
        assert!(param(syn::parse_quote!(#[input(name = "x")] id: i32)).is_err());
    }
}
