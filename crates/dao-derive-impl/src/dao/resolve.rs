// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Parameter role resolution.
//!
//! Maps a parameter's role and declared type to the [`CallableParameter`]
//! that decides how the value is bound to the call. The role is checked
//! first, so a parameter without one is reported as such whatever its type.
//! The type is checked against the role next:
//!
//! | Role | Required type | Failure |
//! |------|---------------|---------|
//! | none | any | `MissingRole` |
//! | `ResultSet` | `Vec<T>` | `ResultSetNotList` |
//! | `In` | basic, enum, domain | `InTypeMismatch` |
//! | `Out` | `Reference<T>` | `OutNotReference` |
//! | `InOut` | `Reference<T>` | `InOutNotReference` |
//! | `Out`, `InOut` | `T` basic, enum, domain | `ReferentMismatch` |
//!
//! A type that could not be classified fails with the diagnostic of its
//! role. `Reference<T>` with an unknown `T` is still a referent mismatch.
//!
//! A result set element outside basic, enum, domain and entity should never
//! get past classification, so reaching one here is an [`IllegalState`].
//!
//! The same shapes decide what a `#[function]` returns, see
//! [`resolve_result`].

use dao_core::{BasicKind, ModuleKind, ParameterMode, TypeCategory};
use syn::{GenericArgument, PathArguments, ReturnType, Type, spanned::Spanned};

use super::{
    diagnostic::{Diagnostic, DiagnosticCode, IllegalState, MetaError},
    parse::{MethodDef, ParameterRole},
    query::QueryParameterMeta,
    types::{
        BasicType, DataType, DomainType, EntityType, EnumType, TypeRegistry, list_element,
        reference_referent, type_name
    }
};

const SCALAR: &str = "a basic, enum or domain type";
const ROW: &str = "a basic, enum, domain or entity type";

/// Value bound as a single column: basic, enum or domain.
#[derive(Debug, Clone)]
pub enum ScalarType {
    Basic(BasicType),
    Enum(EnumType),
    Domain(DomainType)
}

impl ScalarType {
    /// Narrow a classified type, `None` for entities, lists and references.
    #[must_use]
    pub fn from_data_type(data_type: &DataType) -> Option<Self> {
        match data_type {
            DataType::Basic(basic) => Some(Self::Basic(basic.clone())),
            DataType::Enum(enumeration) => Some(Self::Enum(enumeration.clone())),
            DataType::Domain(domain) => Some(Self::Domain(domain.clone())),
            DataType::Entity(_) | DataType::List(_) | DataType::Reference(_) => None
        }
    }

    #[must_use]
    pub const fn category(&self) -> TypeCategory {
        match self {
            Self::Basic(_) => TypeCategory::Basic,
            Self::Enum(_) => TypeCategory::Enum,
            Self::Domain(_) => TypeCategory::Domain
        }
    }

    #[must_use]
    pub fn ty(&self) -> &Type {
        match self {
            Self::Basic(basic) => &basic.ty,
            Self::Enum(enumeration) => &enumeration.ty,
            Self::Domain(domain) => &domain.ty
        }
    }

    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        match self {
            Self::Basic(basic) => basic.nullable,
            Self::Enum(enumeration) => enumeration.nullable,
            Self::Domain(domain) => domain.nullable
        }
    }

    /// Basic type the value is stored as, `None` for enums.
    #[must_use]
    pub const fn basic_kind(&self) -> Option<BasicKind> {
        match self {
            Self::Basic(basic) => Some(basic.kind),
            Self::Domain(domain) => Some(domain.value),
            Self::Enum(_) => None
        }
    }
}

/// Row of a result set: a scalar column or an entity.
#[derive(Debug, Clone)]
pub enum RowType {
    Scalar(ScalarType),
    Entity(EntityType)
}

impl RowType {
    /// Narrow a classified type, `None` for lists and references.
    #[must_use]
    pub fn from_data_type(data_type: &DataType) -> Option<Self> {
        match data_type {
            DataType::Entity(entity) => Some(Self::Entity(entity.clone())),
            DataType::Basic(_) | DataType::Enum(_) | DataType::Domain(_) => {
                ScalarType::from_data_type(data_type).map(Self::Scalar)
            }
            DataType::List(_) | DataType::Reference(_) => None
        }
    }

    #[must_use]
    pub const fn category(&self) -> TypeCategory {
        match self {
            Self::Scalar(scalar) => scalar.category(),
            Self::Entity(_) => TypeCategory::Entity
        }
    }

    #[must_use]
    pub fn ty(&self) -> &Type {
        match self {
            Self::Scalar(scalar) => scalar.ty(),
            Self::Entity(entity) => &entity.ty
        }
    }

    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        match self {
            Self::Scalar(scalar) => scalar.is_nullable(),
            Self::Entity(_) => false
        }
    }

    #[must_use]
    pub const fn basic_kind(&self) -> Option<BasicKind> {
        match self {
            Self::Scalar(scalar) => scalar.basic_kind(),
            Self::Entity(_) => None
        }
    }
}

/// How one parameter is bound to the call.
#[derive(Debug, Clone)]
pub enum CallableParameter {
    In { name: String, ty: ScalarType },
    Out { name: String, ty: ScalarType },
    InOut { name: String, ty: ScalarType },
    ResultSet { name: String, row: RowType }
}

impl CallableParameter {
    /// Parameter name as declared.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::In { name, .. }
            | Self::Out { name, .. }
            | Self::InOut { name, .. }
            | Self::ResultSet { name, .. } => name
        }
    }

    #[must_use]
    pub const fn mode(&self) -> ParameterMode {
        match self {
            Self::In { .. } => ParameterMode::In,
            Self::Out { .. } => ParameterMode::Out,
            Self::InOut { .. } => ParameterMode::InOut,
            Self::ResultSet { .. } => ParameterMode::ResultSet
        }
    }

    /// Category of the bound value: the referent for output cells, the row
    /// for result sets.
    #[must_use]
    pub const fn category(&self) -> TypeCategory {
        match self {
            Self::In { ty, .. } | Self::Out { ty, .. } | Self::InOut { ty, .. } => ty.category(),
            Self::ResultSet { row, .. } => row.category()
        }
    }

    /// Rust name of the bound value type.
    #[must_use]
    pub fn type_name(&self) -> String {
        match self {
            Self::In { ty, .. } | Self::Out { ty, .. } | Self::InOut { ty, .. } => {
                type_name(ty.ty())
            }
            Self::ResultSet { row, .. } => type_name(row.ty())
        }
    }

    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        match self {
            Self::In { ty, .. } | Self::Out { ty, .. } | Self::InOut { ty, .. } => ty.is_nullable(),
            Self::ResultSet { row, .. } => row.is_nullable()
        }
    }

    /// Basic type the bound value is stored as.
    #[must_use]
    pub const fn basic_kind(&self) -> Option<BasicKind> {
        match self {
            Self::In { ty, .. } | Self::Out { ty, .. } | Self::InOut { ty, .. } => ty.basic_kind(),
            Self::ResultSet { row, .. } => row.basic_kind()
        }
    }

    /// Descriptor name, e.g. `BasicInParameter` or `EntityListParameter`.
    #[must_use]
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Self::In { ty, .. } => match ty {
                ScalarType::Basic(_) => "BasicInParameter",
                ScalarType::Enum(_) => "EnumInParameter",
                ScalarType::Domain(_) => "DomainInParameter"
            },
            Self::Out { ty, .. } => match ty {
                ScalarType::Basic(_) => "BasicOutParameter",
                ScalarType::Enum(_) => "EnumOutParameter",
                ScalarType::Domain(_) => "DomainOutParameter"
            },
            Self::InOut { ty, .. } => match ty {
                ScalarType::Basic(_) => "BasicInOutParameter",
                ScalarType::Enum(_) => "EnumInOutParameter",
                ScalarType::Domain(_) => "DomainInOutParameter"
            },
            Self::ResultSet { row, .. } => match row {
                RowType::Scalar(ScalarType::Basic(_)) => "BasicListParameter",
                RowType::Scalar(ScalarType::Enum(_)) => "EnumListParameter",
                RowType::Scalar(ScalarType::Domain(_)) => "DomainListParameter",
                RowType::Entity(_) => "EntityListParameter"
            }
        }
    }
}

/// Resolve the callable descriptor of one parameter.
///
/// # Errors
///
/// Returns the diagnostic of the first failed check in the module table, or
/// [`IllegalState`] for a result set element that should have been rejected
/// upstream.
pub fn resolve(param: &QueryParameterMeta) -> Result<CallableParameter, MetaError> {
    let Some(role) = param.role else {
        return Err(Diagnostic::new(DiagnosticCode::MissingRole, param.span)
            .in_method(&param.method)
            .for_parameter(&param.name)
            .into());
    };
    let name = param.name.clone();
    match role {
        ParameterRole::ResultSet => {
            resolve_result_set(param).map(|row| CallableParameter::ResultSet {
                name,
                row
            })
        }
        ParameterRole::In => resolve_in(param).map(|ty| CallableParameter::In {
            name,
            ty
        }),
        ParameterRole::Out => {
            resolve_referent(param, DiagnosticCode::OutNotReference).map(|ty| {
                CallableParameter::Out {
                    name,
                    ty
                }
            })
        }
        ParameterRole::InOut => {
            resolve_referent(param, DiagnosticCode::InOutNotReference).map(|ty| {
                CallableParameter::InOut {
                    name,
                    ty
                }
            })
        }
    }
}

fn resolve_result_set(param: &QueryParameterMeta) -> Result<RowType, MetaError> {
    let illegal = |detail: String| -> MetaError {
        IllegalState {
            method: param.method.clone(),
            parameter: param.name.clone(),
            detail,
            span: param.span
        }
        .into()
    };
    match &param.data_type {
        Ok(DataType::List(list)) => RowType::from_data_type(list.element()).ok_or_else(|| {
            illegal(format!(
                "result set element `{}` of category {:?} is not {ROW}",
                list.element().name(),
                list.element().category()
            ))
        }),
        Ok(_) => Err(not_list(param)),
        Err(_) => match list_element(&param.ty) {
            Some(element) => Err(illegal(format!(
                "result set element `{}` is not {ROW}",
                type_name(element)
            ))),
            None => Err(not_list(param))
        }
    }
}

fn not_list(param: &QueryParameterMeta) -> MetaError {
    param
        .diagnostic(DiagnosticCode::ResultSetNotList)
        .expected("&mut Vec<T>")
        .into()
}

fn resolve_in(param: &QueryParameterMeta) -> Result<ScalarType, MetaError> {
    param
        .data_type
        .as_ref()
        .ok()
        .and_then(ScalarType::from_data_type)
        .ok_or_else(|| {
            param
                .diagnostic(DiagnosticCode::InTypeMismatch)
                .expected(SCALAR)
                .into()
        })
}

fn resolve_referent(
    param: &QueryParameterMeta,
    not_reference: DiagnosticCode
) -> Result<ScalarType, MetaError> {
    let referent_mismatch = |actual: String| -> MetaError {
        param
            .diagnostic(DiagnosticCode::ReferentMismatch)
            .expected(SCALAR)
            .actual(actual)
            .into()
    };
    let not_reference = || -> MetaError {
        param
            .diagnostic(not_reference)
            .expected("&mut Reference<T>")
            .into()
    };
    match &param.data_type {
        Ok(DataType::Reference(reference)) => ScalarType::from_data_type(reference.referent())
            .ok_or_else(|| referent_mismatch(reference.referent().name())),
        Ok(_) => Err(not_reference()),
        Err(_) => match reference_referent(&param.ty) {
            Some(referent) => Err(referent_mismatch(type_name(referent))),
            None => Err(not_reference())
        }
    }
}

/// Value returned by a `#[function]`.
#[derive(Debug, Clone)]
pub enum FunctionResult {
    /// Single value.
    Scalar(ScalarType),

    /// Rows collected into a `Vec`.
    ResultSet(RowType)
}

impl FunctionResult {
    #[must_use]
    pub const fn category(&self) -> TypeCategory {
        match self {
            Self::Scalar(scalar) => scalar.category(),
            Self::ResultSet(row) => row.category()
        }
    }

    /// Rust name of the value or row type.
    #[must_use]
    pub fn type_name(&self) -> String {
        match self {
            Self::Scalar(scalar) => type_name(scalar.ty()),
            Self::ResultSet(row) => type_name(row.ty())
        }
    }
}

/// Resolve what a method returns.
///
/// `Result<T, E>` is looked through. Procedures must return `()`, functions
/// must return a scalar or a `Vec` of rows.
///
/// # Errors
///
/// - `ProcedureReturnsValue` for a procedure with a return value
/// - `FunctionReturnsNothing` for a function returning `()`
/// - `FunctionResultMismatch` for entities and references
/// - `UnsupportedType` and `UnsupportedListElement` from classification
pub fn resolve_result(
    method: &MethodDef,
    registry: &TypeRegistry
) -> Result<Option<FunctionResult>, MetaError> {
    let returned = returned_type(&method.output);
    match (method.kind, returned) {
        (ModuleKind::Procedure, None) => Ok(None),
        (ModuleKind::Procedure, Some(ty)) => Err(Diagnostic::new(
            DiagnosticCode::ProcedureReturnsValue,
            ty.span()
        )
        .in_method(method.name())
        .actual(type_name(ty))
        .into()),
        (ModuleKind::Function, None) => Err(Diagnostic::new(
            DiagnosticCode::FunctionReturnsNothing,
            method.span
        )
        .in_method(method.name())
        .into()),
        (ModuleKind::Function, Some(ty)) => function_result(method, ty, registry).map(Some)
    }
}

fn function_result(
    method: &MethodDef,
    ty: &Type,
    registry: &TypeRegistry
) -> Result<FunctionResult, MetaError> {
    let data_type =
        DataType::classify(ty, registry).map_err(|error| error.in_method(method.name()))?;
    let mismatch = || {
        Diagnostic::new(DiagnosticCode::FunctionResultMismatch, ty.span())
            .in_method(method.name())
            .expected(format!("{SCALAR}, or `Vec<T>` of {ROW}"))
            .actual(type_name(ty))
    };
    match &data_type {
        DataType::Basic(_) | DataType::Enum(_) | DataType::Domain(_) => {
            ScalarType::from_data_type(&data_type)
                .map(FunctionResult::Scalar)
                .ok_or_else(|| mismatch().into())
        }
        DataType::List(list) => RowType::from_data_type(list.element())
            .map(FunctionResult::ResultSet)
            .ok_or_else(|| {
                Diagnostic::new(DiagnosticCode::UnsupportedListElement, ty.span())
                    .in_method(method.name())
                    .expected(ROW)
                    .actual(list.element().name())
                    .into()
            }),
        DataType::Entity(_) | DataType::Reference(_) => Err(mismatch().into())
    }
}

/// Declared return type with `Result<T, E>` looked through, `None` for `()`.
fn returned_type(output: &ReturnType) -> Option<&Type> {
    let ReturnType::Type(_, ty) = output else {
        return None;
    };
    let ty = ok_type(ty);
    match ty {
        Type::Tuple(tuple) if tuple.elems.is_empty() => None,
        _ => Some(ty)
    }
}

fn ok_type(ty: &Type) -> &Type {
    if let Type::Path(path) = ty
        && let Some(segment) = path.path.segments.last()
        && segment.ident == "Result"
        && let PathArguments::AngleBracketed(args) = &segment.arguments
        && let Some(GenericArgument::Type(ok)) = args.args.first()
    {
        return ok;
    }
    ty
}

#[cfg(test)]
mod tests;
