// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Trait-level `#[dao(...)]` arguments.
//!
//! ```rust,ignore
//! #[dao(
//!     entities(Employee, Department),
//!     enums(JobKind),
//!     domains(Salary = i64, PhoneNumber = String)
//! )]
//! pub trait EmployeeDao { /* ... */ }
//! ```
//!
//! Domain value types that are not plain paths (such as `Vec<u8>`) can be
//! given as strings: `domains(Photo = "Vec<u8>")`.

use darling::{FromMeta, ast::NestedMeta, util::PathList};
use syn::{Expr, ExprLit, Lit, Meta, Path, Type, TypePath};

/// Parsed `#[dao(...)]` arguments.
#[derive(Debug, Default, Clone, FromMeta)]
pub struct DaoArgs {
    /// Entity types usable as result set rows.
    #[darling(default)]
    pub entities: PathList,

    /// Enum types usable as scalar values.
    #[darling(default)]
    pub enums: PathList,

    /// Domain types and the basic type each one wraps.
    #[darling(default)]
    pub domains: DomainList
}

/// One `Name = BasicType` entry of `domains(...)`.
#[derive(Debug, Clone)]
pub struct DomainDecl {
    /// Domain type.
    pub path:  Path,
    /// Wrapped basic type.
    pub value: Type
}

impl DomainDecl {
    fn from_nested(item: &NestedMeta) -> darling::Result<Self> {
        match item {
            NestedMeta::Meta(Meta::NameValue(pair)) => Ok(Self {
                path:  pair.path.clone(),
                value: value_type(&pair.value)?
            }),
            other => {
                Err(darling::Error::custom("expected `Domain = BasicType`").with_span(other))
            }
        }
    }
}

fn value_type(expr: &Expr) -> darling::Result<Type> {
    match expr {
        Expr::Path(path) if path.qself.is_none() && path.attrs.is_empty() => {
            Ok(Type::Path(TypePath {
                qself: None,
                path:  path.path.clone()
            }))
        }
        Expr::Lit(ExprLit {
            lit: Lit::Str(lit), ..
        }) => lit.parse::<Type>().map_err(darling::Error::from),
        other => Err(darling::Error::custom("expected a type").with_span(other))
    }
}

/// `domains(...)` entries in declaration order.
#[derive(Debug, Default, Clone)]
pub struct DomainList(Vec<DomainDecl>);

impl DomainList {
    pub fn iter(&self) -> std::slice::Iter<'_, DomainDecl> {
        self.0.iter()
    }
}

impl FromMeta for DomainList {
    fn from_list(items: &[NestedMeta]) -> darling::Result<Self> {
        let mut errors = darling::Error::accumulator();
        let decls = items
            .iter()
            .filter_map(|item| errors.handle(DomainDecl::from_nested(item)))
            .collect();
        errors.finish_with(Self(decls))
    }
}
