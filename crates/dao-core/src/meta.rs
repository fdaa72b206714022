// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Static call metadata emitted by `#[dao]`.
//!
//! Every `#[procedure]` or `#[function]` method of a `#[dao]` trait becomes
//! one [`ModuleQuery`]. Its [`CallableParameter`]s appear in declaration
//! order, one per method parameter, so a call statement binds argument `i`
//! to placeholder `i`.
//!
//! ```rust
//! use dao_core::{
//!     BasicKind, BindableParameter, CallableParameter, ModuleKind, ModuleQuery, ParameterMode,
//!     TypeCategory
//! };
//!
//! static FIND: ModuleQuery = ModuleQuery {
//!     method:     "find",
//!     kind:       ModuleKind::Procedure,
//!     catalog:    None,
//!     schema:     Some("hr"),
//!     name:       "find_employees",
//!     parameters: &[CallableParameter {
//!         name:          "id",
//!         variant:       "BasicInParameter",
//!         mode:          ParameterMode::In,
//!         category:      TypeCategory::Basic,
//!         type_name:     "i32",
//!         declared_type: "i32",
//!         basic:         Some(BasicKind::I32),
//!         nullable:      false
//!     }],
//!     bindable:   &[BindableParameter {
//!         name:      "id",
//!         type_name: "i32"
//!     }],
//!     result:     None
//! };
//!
//! assert_eq!(FIND.qualified_name(), "hr.find_employees");
//! assert_eq!(FIND.bindable_type("id"), Some("i32"));
//! ```

use crate::wrapper::BasicKind;

/// Direction in which a parameter value travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterMode {
    /// Value passed to the database.
    In,

    /// Value returned through a reference cell.
    Out,

    /// Value passed in and returned through the same reference cell.
    InOut,

    /// Result set rows collected into a list.
    ResultSet
}

impl ParameterMode {
    /// Check if the caller supplies a value.
    #[must_use]
    pub const fn is_input(&self) -> bool {
        matches!(self, Self::In | Self::InOut)
    }

    /// Check if the database writes a value back.
    #[must_use]
    pub const fn is_output(&self) -> bool {
        matches!(self, Self::Out | Self::InOut | Self::ResultSet)
    }

    /// Attribute spelling of the mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::In => "input",
            Self::Out => "output",
            Self::InOut => "in_out",
            Self::ResultSet => "result_set"
        }
    }
}

/// Semantic category of a bound value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCategory {
    /// Basic scalar type.
    Basic,

    /// Enumeration.
    Enum,

    /// Single-value wrapper over a basic type.
    Domain,

    /// Persistent record, only as result set row.
    Entity
}

/// One bound parameter of a module call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallableParameter {
    /// Parameter name as declared on the method.
    pub name: &'static str,

    /// Descriptor name, e.g. `BasicInParameter` or `EntityListParameter`.
    pub variant: &'static str,

    /// Binding direction.
    pub mode: ParameterMode,

    /// Category of the bound value (the element type for result sets, the
    /// referent type for output cells).
    pub category: TypeCategory,

    /// Rust name of the bound value type.
    pub type_name: &'static str,

    /// Parameter type as declared, e.g. `&mut Reference<i64>`.
    pub declared_type: &'static str,

    /// Basic type the value is stored as: the type itself for basic values,
    /// the wrapped type for domains, `None` for enums and entities.
    pub basic: Option<BasicKind>,

    /// Whether the value was declared as `Option<T>`.
    pub nullable: bool
}

/// Parameter that a query string may reference by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindableParameter {
    /// Parameter name.
    pub name: &'static str,

    /// Rust name of the declared parameter type.
    pub type_name: &'static str
}

/// Value returned by a stored function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallableResult {
    /// A single scalar value.
    Scalar {
        /// Category of the value.
        category:  TypeCategory,
        /// Rust name of the value type.
        type_name: &'static str
    },

    /// A result set collected into a list.
    ResultSet {
        /// Category of each row.
        category:  TypeCategory,
        /// Rust name of the row type.
        type_name: &'static str
    }
}

/// Kind of stored module being called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    /// Stored procedure, no return value.
    Procedure,

    /// Stored function with a return value.
    Function
}

/// Metadata for one stored procedure or function call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleQuery {
    /// DAO method name.
    pub method: &'static str,

    /// Procedure or function.
    pub kind: ModuleKind,

    /// Catalog qualifier.
    pub catalog: Option<&'static str>,

    /// Schema qualifier.
    pub schema: Option<&'static str>,

    /// Module name in the database.
    pub name: &'static str,

    /// Parameters in declaration order.
    pub parameters: &'static [CallableParameter],

    /// Parameters that may be referenced by name.
    pub bindable: &'static [BindableParameter],

    /// Function result, `None` for procedures.
    pub result: Option<CallableResult>
}

impl ModuleQuery {
    /// Module name joined with its catalog and schema qualifiers.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        [self.catalog, self.schema, Some(self.name)]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Find a parameter by name.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&'static CallableParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Type name of a bindable parameter.
    #[must_use]
    pub fn bindable_type(&self, name: &str) -> Option<&'static str> {
        self.bindable
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.type_name)
    }

    /// Parameters the caller supplies values for.
    pub fn input_parameters(&self) -> impl Iterator<Item = &'static CallableParameter> {
        self.parameters.iter().filter(|p| p.mode.is_input())
    }

    /// Parameters the database writes back.
    pub fn output_parameters(&self) -> impl Iterator<Item = &'static CallableParameter> {
        self.parameters.iter().filter(|p| p.mode.is_output())
    }
}
