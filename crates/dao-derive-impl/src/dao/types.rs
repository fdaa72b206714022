// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type classification.
//!
//! Turns the `syn::Type` of a method parameter or return value into a
//! [`DataType`], one of six closed categories. Basic types are recognized by
//! the last path segment; enums, domains and entities must be registered on
//! the trait with `#[dao(entities(..), enums(..), domains(..))]`.
//!
//! | Rust type | Category |
//! |-----------|----------|
//! | `bool`, `i16`, `i32`, `i64`, `f32`, `f64`, `String`, `&str`, `Vec<u8>` | `Basic` |
//! | `NaiveDate`, `NaiveTime`, `NaiveDateTime`, `Uuid` | `Basic` |
//! | registered in `enums(..)` | `Enum` |
//! | registered in `domains(Name = Basic)` | `Domain` |
//! | registered in `entities(..)` | `Entity` |
//! | `Vec<T>` | `List` |
//! | `Reference<T>` | `Reference` |
//! | `Option<T>` | `T` marked nullable, for basic, enum and domain `T` |
//!
//! `&mut` is accepted around lists and references, `&` around everything
//! else. Any other shape is rejected with `UnsupportedType`.
//!
//! Classification is the only fallible step. Once a [`DataType`] exists,
//! [`DataType::category`] is total.

use std::collections::HashMap;

use dao_core::BasicKind;
use quote::ToTokens;
use syn::{GenericArgument, Path, PathArguments, PathSegment, Type, spanned::Spanned};

use super::{
    diagnostic::{Diagnostic, DiagnosticCode},
    parse::DaoArgs
};

/// Entry of the [`TypeRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registered {
    /// Registered under `enums(..)`.
    Enum,

    /// Registered under `domains(..)`, with its basic value type.
    Domain(BasicKind),

    /// Registered under `entities(..)`.
    Entity
}

/// Names of user types known to the classifier.
///
/// Keyed by the last path segment, so `crate::model::Employee` and
/// `Employee` refer to the same entry.
#[derive(Debug, Default, Clone)]
pub struct TypeRegistry {
    entries: HashMap<String, Registered>
}

impl TypeRegistry {
    /// Build the registry from `#[dao(...)]` arguments.
    ///
    /// # Errors
    ///
    /// - `DuplicateRegistration` if a name appears twice
    /// - `DomainValueNotBasic` if a domain wraps a non-basic type
    pub fn from_args(args: &DaoArgs) -> Result<Self, Diagnostic> {
        let mut registry = Self {
            entries: HashMap::with_capacity(
                args.entities.len() + args.enums.len() + args.domains.iter().len()
            )
        };
        for path in args.entities.iter() {
            registry.register(path, Registered::Entity)?;
        }
        for path in args.enums.iter() {
            registry.register(path, Registered::Enum)?;
        }
        for domain in args.domains.iter() {
            let value = match DataType::classify(&domain.value, &Self::default()) {
                Ok(DataType::Basic(basic)) if !basic.nullable => basic.kind,
                _ => {
                    return Err(Diagnostic::new(
                        DiagnosticCode::DomainValueNotBasic,
                        domain.value.span()
                    )
                    .expected(path_name(&domain.path))
                    .actual(type_name(&domain.value)));
                }
            };
            registry.register(&domain.path, Registered::Domain(value))?;
        }
        Ok(registry)
    }

    /// Register one name.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateRegistration` if the name is already present.
    pub fn register(&mut self, path: &Path, entry: Registered) -> Result<(), Diagnostic> {
        let Some(segment) = path.segments.last() else {
            return Err(
                Diagnostic::new(DiagnosticCode::UnsupportedType, path.span())
                    .actual(path_name(path))
            );
        };
        let key = segment.ident.to_string();
        if self.entries.contains_key(&key) {
            return Err(
                Diagnostic::new(DiagnosticCode::DuplicateRegistration, path.span())
                    .actual(key)
            );
        }
        self.entries.insert(key, entry);
        Ok(())
    }

    /// Look up a name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Registered> {
        self.entries.get(name).copied()
    }
}

/// Category of a [`DataType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Basic,
    Enum,
    Domain,
    Entity,
    List,
    Reference
}

/// Basic scalar type.
#[derive(Debug, Clone)]
pub struct BasicType {
    pub kind:     BasicKind,
    pub ty:       Type,
    pub nullable: bool
}

/// Registered enumeration.
#[derive(Debug, Clone)]
pub struct EnumType {
    pub ty:       Type,
    pub nullable: bool
}

/// Registered single-value wrapper over a basic type.
#[derive(Debug, Clone)]
pub struct DomainType {
    pub ty:       Type,
    pub value:    BasicKind,
    pub nullable: bool
}

/// Registered persistent record.
#[derive(Debug, Clone)]
pub struct EntityType {
    pub ty: Type
}

/// `Vec<T>`.
#[derive(Debug, Clone)]
pub struct ListType {
    pub ty:  Type,
    element: Box<DataType>
}

impl ListType {
    pub fn new(ty: Type, element: DataType) -> Self {
        Self {
            ty,
            element: Box::new(element)
        }
    }

    /// Classified element type.
    #[must_use]
    pub fn element(&self) -> &DataType {
        &self.element
    }
}

/// `Reference<T>`.
#[derive(Debug, Clone)]
pub struct ReferenceType {
    pub ty:   Type,
    referent: Box<DataType>
}

impl ReferenceType {
    pub fn new(ty: Type, referent: DataType) -> Self {
        Self {
            ty,
            referent: Box::new(referent)
        }
    }

    /// Classified referent type.
    #[must_use]
    pub fn referent(&self) -> &DataType {
        &self.referent
    }
}

/// Classified type.
#[derive(Debug, Clone)]
pub enum DataType {
    Basic(BasicType),
    Enum(EnumType),
    Domain(DomainType),
    Entity(EntityType),
    List(ListType),
    Reference(ReferenceType)
}

impl DataType {
    /// Classify a type.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedType` for shapes outside the table in the module
    /// docs. The diagnostic has no location yet; callers attach it.
    pub fn classify(ty: &Type, registry: &TypeRegistry) -> Result<Self, Diagnostic> {
        match ty {
            Type::Paren(inner) => Self::classify(&inner.elem, registry),
            Type::Group(inner) => Self::classify(&inner.elem, registry),
            Type::Reference(reference) => {
                let inner = Self::classify(&reference.elem, registry)?;
                let accepted = match (&inner, reference.mutability.is_some()) {
                    (Self::List(_) | Self::Reference(_), true) => true,
                    (Self::List(_) | Self::Reference(_), false) => false,
                    (Self::Basic(_) | Self::Enum(_) | Self::Domain(_) | Self::Entity(_), mutable) => {
                        !mutable
                    }
                };
                if accepted {
                    Ok(inner)
                } else {
                    Err(unsupported(ty))
                }
            }
            Type::Path(path) if path.qself.is_none() => classify_path(ty, &path.path, registry),
            _ => Err(unsupported(ty))
        }
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Basic(_) => Category::Basic,
            Self::Enum(_) => Category::Enum,
            Self::Domain(_) => Category::Domain,
            Self::Entity(_) => Category::Entity,
            Self::List(_) => Category::List,
            Self::Reference(_) => Category::Reference
        }
    }

    /// Syntax of the classified type, without `Option` or borrows.
    #[must_use]
    pub fn ty(&self) -> &Type {
        match self {
            Self::Basic(basic) => &basic.ty,
            Self::Enum(enumeration) => &enumeration.ty,
            Self::Domain(domain) => &domain.ty,
            Self::Entity(entity) => &entity.ty,
            Self::List(list) => &list.ty,
            Self::Reference(reference) => &reference.ty
        }
    }

    /// Rust name of the classified type.
    #[must_use]
    pub fn name(&self) -> String {
        type_name(self.ty())
    }
}

fn classify_path(ty: &Type, path: &Path, registry: &TypeRegistry) -> Result<DataType, Diagnostic> {
    let Some(segment) = path.segments.last() else {
        return Err(unsupported(ty));
    };
    let ident = segment.ident.to_string();

    if let Some(argument) = single_type_argument(segment) {
        return match ident.as_str() {
            "Option" => {
                let inner = DataType::classify(argument, registry)?;
                nullable(inner).ok_or_else(|| unsupported(ty))
            }
            "Vec" if is_u8(argument) => Ok(DataType::Basic(BasicType {
                kind:     BasicKind::Bytes,
                ty:       ty.clone(),
                nullable: false
            })),
            "Vec" => {
                let element = DataType::classify(argument, registry)?;
                Ok(DataType::List(ListType::new(ty.clone(), element)))
            }
            "Reference" => {
                let referent = DataType::classify(argument, registry)?;
                Ok(DataType::Reference(ReferenceType::new(ty.clone(), referent)))
            }
            _ => Err(unsupported(ty))
        };
    }

    if !segment.arguments.is_none() {
        return Err(unsupported(ty));
    }

    if let Some(entry) = registry.get(&ident) {
        let ty = ty.clone();
        return Ok(match entry {
            Registered::Enum => DataType::Enum(EnumType {
                ty,
                nullable: false
            }),
            Registered::Domain(value) => DataType::Domain(DomainType {
                ty,
                value,
                nullable: false
            }),
            Registered::Entity => DataType::Entity(EntityType {
                ty
            })
        });
    }

    basic_kind(&ident)
        .map(|kind| {
            DataType::Basic(BasicType {
                kind,
                ty: ty.clone(),
                nullable: false
            })
        })
        .ok_or_else(|| unsupported(ty))
}

fn nullable(inner: DataType) -> Option<DataType> {
    match inner {
        DataType::Basic(basic) if !basic.nullable => Some(DataType::Basic(BasicType {
            nullable: true,
            ..basic
        })),
        DataType::Enum(enumeration) if !enumeration.nullable => {
            Some(DataType::Enum(EnumType {
                nullable: true,
                ..enumeration
            }))
        }
        DataType::Domain(domain) if !domain.nullable => Some(DataType::Domain(DomainType {
            nullable: true,
            ..domain
        })),
        DataType::Basic(_)
        | DataType::Enum(_)
        | DataType::Domain(_)
        | DataType::Entity(_)
        | DataType::List(_)
        | DataType::Reference(_) => None
    }
}

/// Basic kind of a type name, matched on the last path segment.
#[must_use]
pub fn basic_kind(ident: &str) -> Option<BasicKind> {
    Some(match ident {
        "bool" => BasicKind::Bool,
        "i16" => BasicKind::I16,
        "i32" => BasicKind::I32,
        "i64" => BasicKind::I64,
        "f32" => BasicKind::F32,
        "f64" => BasicKind::F64,
        "String" | "str" => BasicKind::String,
        "NaiveDate" => BasicKind::Date,
        "NaiveTime" => BasicKind::Time,
        "NaiveDateTime" => BasicKind::DateTime,
        "Uuid" => BasicKind::Uuid,
        _ => return None
    })
}

fn single_type_argument(segment: &PathSegment) -> Option<&Type> {
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }
    match args.args.first() {
        Some(GenericArgument::Type(ty)) => Some(ty),
        _ => None
    }
}

fn is_u8(ty: &Type) -> bool {
    matches!(ty, Type::Path(path) if path.qself.is_none() && path.path.is_ident("u8"))
}

/// Element of a `Vec<T>` or `&mut Vec<T>`, read from syntax alone.
///
/// Used to word a failure when the element itself cannot be classified.
#[must_use]
pub fn list_element(ty: &Type) -> Option<&Type> {
    wrapped_argument(owned_or_mut(ty)?, "Vec").filter(|element| !is_u8(element))
}

/// Referent of a `Reference<T>` or `&mut Reference<T>`, read from syntax
/// alone.
#[must_use]
pub fn reference_referent(ty: &Type) -> Option<&Type> {
    wrapped_argument(owned_or_mut(ty)?, "Reference")
}

fn owned_or_mut(ty: &Type) -> Option<&Type> {
    match ty {
        Type::Paren(inner) => owned_or_mut(&inner.elem),
        Type::Group(inner) => owned_or_mut(&inner.elem),
        Type::Reference(reference) if reference.mutability.is_some() => Some(&reference.elem),
        Type::Reference(_) => None,
        _ => Some(ty)
    }
}

fn wrapped_argument<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if path.qself.is_some() || segment.ident != wrapper {
        return None;
    }
    single_type_argument(segment)
}

fn unsupported(ty: &Type) -> Diagnostic {
    Diagnostic::new(DiagnosticCode::UnsupportedType, ty.span()).actual(type_name(ty))
}

/// Compact Rust spelling of a type, e.g. `Reference<Option<i32>>`.
#[must_use]
pub fn type_name(ty: &Type) -> String {
    match ty {
        Type::Reference(reference) => {
            let mutability = if reference.mutability.is_some() {
                "mut "
            } else {
                ""
            };
            format!("&{mutability}{}", type_name(&reference.elem))
        }
        Type::Path(path) if path.qself.is_none() => path_name(&path.path),
        Type::Paren(inner) => type_name(&inner.elem),
        Type::Group(inner) => type_name(&inner.elem),
        Type::Tuple(tuple) => {
            let items: Vec<String> = tuple.elems.iter().map(type_name).collect();
            format!("({})", items.join(", "))
        }
        other => other.to_token_stream().to_string()
    }
}

/// Compact spelling of a path.
#[must_use]
pub fn path_name(path: &Path) -> String {
    let mut out = String::new();
    if path.leading_colon.is_some() {
        out.push_str("::");
    }
    for (index, segment) in path.segments.iter().enumerate() {
        if index > 0 {
            out.push_str("::");
        }
        out.push_str(&segment.ident.to_string());
        if let PathArguments::AngleBracketed(args) = &segment.arguments {
            let args: Vec<String> = args
                .args
                .iter()
                .map(|arg| match arg {
                    GenericArgument::Type(ty) => type_name(ty),
                    other => other.to_token_stream().to_string()
                })
                .collect();
            out.push('<');
            out.push_str(&args.join(", "));
            out.push('>');
        }
    }
    out
}

#[cfg(test)]
mod tests;
