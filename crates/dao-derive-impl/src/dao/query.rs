// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Module query metadata.
//!
//! [`ModuleQueryMeta::build`] walks the parameters of one `#[procedure]` or
//! `#[function]` method in declaration order. For each parameter it builds
//! the generic [`QueryParameterMeta`], resolves its callable descriptor and,
//! for input parameters, records it in the bindable map:
//!
//! ```text
//! ParameterDef ──► QueryParameterMeta ──► CallableParameter
//!                          │
//!                          └── In / InOut ──► BindableParameters
//! ```
//!
//! The declared type is classified here, but a classification failure is
//! kept and only reported by the resolver, in terms of the role.
//!
//! The first failure aborts the method. `parameters[i]` and `callable[i]`
//! always describe the same method parameter.

use dao_core::ModuleKind;
use proc_macro2::Span;
use syn::{Ident, Type, ext::IdentExt, spanned::Spanned};

use super::{
    diagnostic::{Diagnostic, DiagnosticCode, MetaError},
    parse::{MethodDef, ParameterDef, ParameterRole},
    resolve::{CallableParameter, FunctionResult, resolve, resolve_result},
    types::{DataType, TypeRegistry, type_name}
};

/// Generic metadata of one method parameter.
#[derive(Debug, Clone)]
pub struct QueryParameterMeta {
    /// Owning method name.
    pub method: String,

    /// Parameter name.
    pub name: String,

    /// Declared type.
    pub ty: Type,

    /// Classified type, or the reason it could not be classified.
    pub data_type: Result<DataType, Diagnostic>,

    /// Binding role, `None` when no marker is present.
    pub role: Option<ParameterRole>,

    /// Parameter span.
    pub span: Span
}

impl QueryParameterMeta {
    /// Name, role and classify one parameter.
    ///
    /// # Errors
    ///
    /// - `UnnamedParameter` for patterns other than a plain identifier
    /// - `ConflictingRoles` for more than one role marker
    pub fn new(
        method: &str,
        param: &ParameterDef,
        registry: &TypeRegistry
    ) -> Result<Self, Diagnostic> {
        let Some(name) = param.name() else {
            return Err(
                Diagnostic::new(DiagnosticCode::UnnamedParameter, param.span).in_method(method)
            );
        };

        let role = match param.roles.as_slice() {
            [] => None,
            [marker] => Some(marker.role),
            [_, extra, ..] => {
                return Err(Diagnostic::new(DiagnosticCode::ConflictingRoles, extra.span)
                    .in_method(method)
                    .for_parameter(&name));
            }
        };

        let data_type = DataType::classify(&param.ty, registry)
            .map_err(|error| error.in_method(method).for_parameter(&name));

        Ok(Self {
            method: method.to_string(),
            name,
            ty: param.ty.clone(),
            data_type,
            role,
            span: param.span
        })
    }

    /// Check if a query may reference the parameter by name.
    #[must_use]
    pub fn is_bindable(&self) -> bool {
        matches!(self.role, Some(ParameterRole::In | ParameterRole::InOut))
    }

    /// Diagnostic about the declared type, located at this parameter.
    #[must_use]
    pub fn diagnostic(&self, code: DiagnosticCode) -> Diagnostic {
        Diagnostic::new(code, self.ty.span())
            .in_method(&self.method)
            .for_parameter(&self.name)
            .actual(type_name(&self.ty))
    }
}

/// Parameter a query may reference by name.
#[derive(Debug, Clone)]
pub struct BindableParameter {
    pub name: String,
    pub ty:   Type
}

/// Bindable parameters keyed by unique name, in declaration order.
#[derive(Debug, Default, Clone)]
pub struct BindableParameters {
    entries: Vec<BindableParameter>
}

impl BindableParameters {
    /// Record a parameter. The caller guarantees name uniqueness.
    pub fn insert(&mut self, param: &QueryParameterMeta) {
        self.entries.push(BindableParameter {
            name: param.name.clone(),
            ty:   param.ty.clone()
        });
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BindableParameter> {
        self.entries.iter()
    }
}

/// Call metadata of one method.
#[derive(Debug, Clone)]
pub struct ModuleQueryMeta {
    /// Method identifier.
    pub method: Ident,

    /// Procedure or function.
    pub kind: ModuleKind,

    /// Module name in the database.
    pub name: String,

    pub schema: Option<String>,

    pub catalog: Option<String>,

    /// Generic parameter metadata, in declaration order.
    pub parameters: Vec<QueryParameterMeta>,

    /// Callable descriptors, positionally matching `parameters`.
    pub callable: Vec<CallableParameter>,

    /// Parameters with role `In` or `InOut`.
    pub bindable: BindableParameters,

    /// Function result, `None` for procedures.
    pub result: Option<FunctionResult>
}

impl ModuleQueryMeta {
    /// Method name without the `r#` prefix of raw identifiers.
    #[must_use]
    pub fn method_name(&self) -> String {
        self.method.unraw().to_string()
    }

    /// Build the metadata of one method.
    ///
    /// # Errors
    ///
    /// Returns the first failure: a parameter diagnostic, `DuplicateParameter`,
    /// a result diagnostic, or an [`IllegalState`](super::diagnostic::IllegalState).
    pub fn build(method: &MethodDef, registry: &TypeRegistry) -> Result<Self, MetaError> {
        let mut parameters: Vec<QueryParameterMeta> = Vec::with_capacity(method.parameters.len());
        let mut callable = Vec::with_capacity(method.parameters.len());
        let mut bindable = BindableParameters::default();

        let method_name = method.name();
        for param in &method.parameters {
            let meta = QueryParameterMeta::new(&method_name, param, registry)?;
            if parameters.iter().any(|seen| seen.name == meta.name) {
                return Err(Diagnostic::new(DiagnosticCode::DuplicateParameter, meta.span)
                    .in_method(&method_name)
                    .for_parameter(&meta.name)
                    .into());
            }

            callable.push(resolve(&meta)?);
            if meta.is_bindable() {
                bindable.insert(&meta);
            }
            parameters.push(meta);
        }

        let result = resolve_result(method, registry)?;

        Ok(Self {
            method: method.ident.clone(),
            kind: method.kind,
            name: method.module_name(),
            schema: method.attrs.schema.clone(),
            catalog: method.attrs.catalog.clone(),
            parameters,
            callable,
            bindable,
            result
        })
    }
}
