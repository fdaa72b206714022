// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Diagnostics reported while building call metadata.
//!
//! Every user-facing failure is a [`Diagnostic`] with a stable
//! [`DiagnosticCode`], the offending span, the location (method and
//! parameter) and, for type mismatches, the expected and actual type names.
//! Broken internal assumptions are reported as [`IllegalState`] instead.
//! Both travel as [`MetaError`] and end up as `compile_error!` through
//! [`syn::Error`].
//!
//! # Codes
//!
//! | Code | Variant | Kind |
//! |------|---------|------|
//! | `DAO1001` | `MissingRole` | role missing |
//! | `DAO1002` | `ConflictingRoles` | declaration |
//! | `DAO1003` | `UnnamedParameter` | declaration |
//! | `DAO1004` | `DuplicateParameter` | declaration |
//! | `DAO1005` | `DuplicateQueryConstant` | declaration |
//! | `DAO1101` | `ResultSetNotList` | shape mismatch |
//! | `DAO1102` | `InTypeMismatch` | shape mismatch |
//! | `DAO1103` | `OutNotReference` | shape mismatch |
//! | `DAO1104` | `InOutNotReference` | shape mismatch |
//! | `DAO1105` | `ReferentMismatch` | referent mismatch |
//! | `DAO1201` | `UnsupportedType` | declaration |
//! | `DAO1202` | `UnsupportedListElement` | declaration |
//! | `DAO1301` | `ProcedureReturnsValue` | shape mismatch |
//! | `DAO1302` | `FunctionReturnsNothing` | shape mismatch |
//! | `DAO1303` | `FunctionResultMismatch` | shape mismatch |
//! | `DAO1401` | `DuplicateRegistration` | declaration |
//! | `DAO1402` | `DomainValueNotBasic` | declaration |

use std::fmt;

use proc_macro2::Span;

/// Stable identifier of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// Parameter carries none of the role attributes.
    MissingRole,

    /// Parameter carries more than one role attribute.
    ConflictingRoles,

    /// Parameter pattern is not a plain identifier.
    UnnamedParameter,

    /// Two parameters of one method share a name.
    DuplicateParameter,

    /// Two methods map to the same `{Trait}Meta` constant.
    DuplicateQueryConstant,

    /// `#[result_set]` parameter is not a list.
    ResultSetNotList,

    /// `#[input]` parameter is not a basic, enum or domain type.
    InTypeMismatch,

    /// `#[output]` parameter is not a `Reference<T>`.
    OutNotReference,

    /// `#[in_out]` parameter is not a `Reference<T>`.
    InOutNotReference,

    /// `Reference<T>` holds something other than a basic, enum or domain
    /// type.
    ReferentMismatch,

    /// Type shape is not recognized.
    UnsupportedType,

    /// `Vec<T>` element is not a basic, enum, domain or entity type.
    UnsupportedListElement,

    /// `#[procedure]` method declares a return value.
    ProcedureReturnsValue,

    /// `#[function]` method returns nothing.
    FunctionReturnsNothing,

    /// `#[function]` return type cannot be mapped to a result.
    FunctionResultMismatch,

    /// A type name is registered more than once in `#[dao(...)]`.
    DuplicateRegistration,

    /// A domain is declared over a non-basic value type.
    DomainValueNotBasic
}

/// Coarse classification of diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// No binding role on a parameter.
    RoleMissing,

    /// Declared type does not have the shape the role requires.
    ShapeMismatch,

    /// `Reference<T>` has the right shape but `T` is not bindable.
    ReferentMismatch,

    /// Malformed or unsupported declaration.
    Declaration,

    /// Broken internal assumption, never caused by the user.
    InternalConsistency
}

impl DiagnosticCode {
    /// Stable code string, e.g. `DAO1001`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingRole => "DAO1001",
            Self::ConflictingRoles => "DAO1002",
            Self::UnnamedParameter => "DAO1003",
            Self::DuplicateParameter => "DAO1004",
            Self::DuplicateQueryConstant => "DAO1005",
            Self::ResultSetNotList => "DAO1101",
            Self::InTypeMismatch => "DAO1102",
            Self::OutNotReference => "DAO1103",
            Self::InOutNotReference => "DAO1104",
            Self::ReferentMismatch => "DAO1105",
            Self::UnsupportedType => "DAO1201",
            Self::UnsupportedListElement => "DAO1202",
            Self::ProcedureReturnsValue => "DAO1301",
            Self::FunctionReturnsNothing => "DAO1302",
            Self::FunctionResultMismatch => "DAO1303",
            Self::DuplicateRegistration => "DAO1401",
            Self::DomainValueNotBasic => "DAO1402"
        }
    }

    /// Taxonomy bucket of the code.
    #[must_use]
    pub const fn kind(&self) -> DiagnosticKind {
        match self {
            Self::MissingRole => DiagnosticKind::RoleMissing,
            Self::ResultSetNotList
            | Self::InTypeMismatch
            | Self::OutNotReference
            | Self::InOutNotReference
            | Self::ProcedureReturnsValue
            | Self::FunctionReturnsNothing
            | Self::FunctionResultMismatch => DiagnosticKind::ShapeMismatch,
            Self::ReferentMismatch => DiagnosticKind::ReferentMismatch,
            Self::ConflictingRoles
            | Self::UnnamedParameter
            | Self::DuplicateParameter
            | Self::DuplicateQueryConstant
            | Self::UnsupportedType
            | Self::UnsupportedListElement
            | Self::DuplicateRegistration
            | Self::DomainValueNotBasic => DiagnosticKind::Declaration
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-facing failure.
#[derive(Debug, Clone, thiserror::Error)]
#[error("[{}] {}", self.code(), self.message())]
pub struct Diagnostic {
    code:      DiagnosticCode,
    span:      Span,
    method:    Option<String>,
    parameter: Option<String>,
    expected:  Option<String>,
    actual:    Option<String>
}

impl Diagnostic {
    /// Create a diagnostic pointing at `span`.
    #[must_use]
    pub fn new(code: DiagnosticCode, span: Span) -> Self {
        Self {
            code,
            span,
            method: None,
            parameter: None,
            expected: None,
            actual: None
        }
    }

    /// Attach the method the failure belongs to, unless already set.
    #[must_use]
    pub fn in_method(mut self, method: impl ToString) -> Self {
        self.method.get_or_insert_with(|| method.to_string());
        self
    }

    /// Attach the parameter the failure belongs to, unless already set.
    #[must_use]
    pub fn for_parameter(mut self, parameter: impl ToString) -> Self {
        self.parameter.get_or_insert_with(|| parameter.to_string());
        self
    }

    /// Describe the expected type shape.
    #[must_use]
    pub fn expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Name the offending type.
    #[must_use]
    pub fn actual(mut self, actual: impl Into<String>) -> Self {
        self.actual = Some(actual.into());
        self
    }

    #[must_use]
    pub const fn code(&self) -> DiagnosticCode {
        self.code
    }

    #[must_use]
    pub const fn kind(&self) -> DiagnosticKind {
        self.code.kind()
    }

    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    #[must_use]
    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    #[must_use]
    pub fn parameter(&self) -> Option<&str> {
        self.parameter.as_deref()
    }

    #[must_use]
    pub fn expected_type(&self) -> Option<&str> {
        self.expected.as_deref()
    }

    #[must_use]
    pub fn actual_type(&self) -> Option<&str> {
        self.actual.as_deref()
    }

    fn subject(&self) -> String {
        match (self.method(), self.parameter()) {
            (Some(method), Some(parameter)) => {
                format!("parameter `{parameter}` of `{method}`")
            }
            (None, Some(parameter)) => format!("parameter `{parameter}`"),
            (Some(method), None) => format!("method `{method}`"),
            (None, None) => "declaration".to_string()
        }
    }

    fn message(&self) -> String {
        let subject = self.subject();
        let actual = self.actual_type().unwrap_or("?");
        let expected = self.expected_type().unwrap_or("?");
        match self.code() {
            DiagnosticCode::MissingRole => format!(
                "{subject} has no binding role; annotate it with #[input], #[output], \
                 #[in_out] or #[result_set]"
            ),
            DiagnosticCode::ConflictingRoles => {
                format!("{subject} has more than one binding role")
            }
            DiagnosticCode::UnnamedParameter => {
                format!("{subject} must be bound to a plain identifier")
            }
            DiagnosticCode::DuplicateParameter => {
                format!("{subject} is declared more than once")
            }
            DiagnosticCode::DuplicateQueryConstant => format!(
                "{subject} maps to constant `{actual}`, already used by method `{expected}`"
            ),
            DiagnosticCode::ResultSetNotList => format!(
                "#[result_set] {subject} must be `{expected}`, found `{actual}`"
            ),
            DiagnosticCode::InTypeMismatch => format!(
                "#[input] {subject} must be {expected}, found `{actual}`"
            ),
            DiagnosticCode::OutNotReference => format!(
                "#[output] {subject} must be `{expected}`, found `{actual}`"
            ),
            DiagnosticCode::InOutNotReference => format!(
                "#[in_out] {subject} must be `{expected}`, found `{actual}`"
            ),
            DiagnosticCode::ReferentMismatch => format!(
                "{subject} references `{actual}`, expected {expected}"
            ),
            DiagnosticCode::UnsupportedType => format!(
                "{subject} has unsupported type `{actual}`; register it in \
                 #[dao(entities(..), enums(..), domains(..))] or use a basic type"
            ),
            DiagnosticCode::UnsupportedListElement => format!(
                "{subject} is a list of `{actual}`, expected {expected}"
            ),
            DiagnosticCode::ProcedureReturnsValue => format!(
                "#[procedure] {subject} must return `()`, found `{actual}`; \
                 use #[function] for modules with a result"
            ),
            DiagnosticCode::FunctionReturnsNothing => {
                format!("#[function] {subject} must declare a return type")
            }
            DiagnosticCode::FunctionResultMismatch => format!(
                "#[function] {subject} returns `{actual}`, expected {expected}"
            ),
            DiagnosticCode::DuplicateRegistration => {
                format!("type `{actual}` is registered more than once")
            }
            DiagnosticCode::DomainValueNotBasic => format!(
                "domain `{expected}` must wrap a basic type, found `{actual}`"
            )
        }
    }
}

impl From<Diagnostic> for syn::Error {
    fn from(diagnostic: Diagnostic) -> Self {
        syn::Error::new(diagnostic.span, diagnostic.to_string())
    }
}

/// Broken internal assumption.
///
/// Raised when upstream validation should have made a state unreachable.
#[derive(Debug, Clone, thiserror::Error)]
#[error(
    "internal error in dao-derive while processing parameter `{parameter}` of `{method}`: \
     {detail}; please report this as a bug"
)]
pub struct IllegalState {
    /// Method being processed.
    pub method:    String,
    /// Parameter being processed.
    pub parameter: String,
    /// What went wrong.
    pub detail:    String,
    /// Parameter span.
    pub span:      Span
}

/// Failure of metadata construction.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MetaError {
    /// User-facing diagnostic.
    #[error(transparent)]
    Diagnostic(#[from] Diagnostic),

    /// Internal consistency failure.
    #[error(transparent)]
    IllegalState(#[from] IllegalState)
}

impl MetaError {
    #[must_use]
    pub const fn kind(&self) -> DiagnosticKind {
        match self {
            Self::Diagnostic(diagnostic) => diagnostic.kind(),
            Self::IllegalState(_) => DiagnosticKind::InternalConsistency
        }
    }

    /// Check if this signals a defect rather than a user mistake.
    #[must_use]
    pub const fn is_illegal_state(&self) -> bool {
        matches!(self.kind(), DiagnosticKind::InternalConsistency)
    }

    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Diagnostic(diagnostic) => diagnostic.span(),
            Self::IllegalState(state) => state.span
        }
    }
}

impl From<MetaError> for syn::Error {
    fn from(error: MetaError) -> Self {
        syn::Error::new(error.span(), error.to_string())
    }
}
