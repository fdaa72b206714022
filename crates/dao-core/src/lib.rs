// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits and types for dao-derive.
//!
//! This crate provides the runtime side of the code generated by
//! `#[dao]` and `#[derive(Entity)]`. It can also be used standalone for
//! hand-written metadata.
//!
//! # Overview
//!
//! - [`Wrapper`] / [`AnyWrapper`] - Typed value holders for basic columns
//! - [`PropertyDescriptor`] - One persistent entity field
//! - [`Reference`] - Output cell for `#[output]` and `#[in_out]` parameters
//! - [`ModuleQuery`] - Static metadata of a stored procedure or function call
//! - [`NamingConvention`] - Identifier to column/table name mapping
//! - [`prelude`] - Convenient re-exports
//!
//! # Usage
//!
//! Most users should use `dao-derive` directly, which re-exports this crate.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod meta;
pub mod naming;
pub mod prelude;
pub mod property;
pub mod reference;
pub mod wrapper;

pub use meta::{
    BindableParameter, CallableParameter, CallableResult, ModuleKind, ModuleQuery, ParameterMode,
    TypeCategory
};
pub use naming::NamingConvention;
pub use property::{
    ColumnPolicy, PropertyDescriptor, PropertyDescriptorBuilder, PropertyError, PropertyKind
};
pub use reference::Reference;
pub use wrapper::{
    AnyWrapper, BasicKind, BasicValue, BoolWrapper, BytesWrapper, DateTimeWrapper, DateWrapper,
    F32Wrapper, F64Wrapper, I16Wrapper, I32Wrapper, I64Wrapper, ScalarValue, StringWrapper,
    TimeWrapper, UuidWrapper, Wrapper, WrapperError
};

/// Call metadata of a DAO trait.
///
/// Implemented by the `{Trait}Meta` struct that `#[dao]` generates next to
/// the annotated trait.
///
/// # Example
///
/// ```rust,ignore
/// #[dao(entities(Employee))]
/// pub trait EmployeeDao {
///     #[procedure]
///     fn find(&self, #[input] id: i32, #[result_set] rows: &mut Vec<Employee>);
/// }
///
/// let find = EmployeeDaoMeta::query("find").unwrap();
/// assert_eq!(find.parameters.len(), 2);
/// ```
pub trait DaoMeta {
    /// One entry per `#[procedure]` or `#[function]` method, in declaration
    /// order.
    const QUERIES: &'static [ModuleQuery];

    /// Find the metadata of a method by name.
    #[must_use]
    fn query(method: &str) -> Option<&'static ModuleQuery> {
        Self::QUERIES.iter().find(|q| q.method == method)
    }
}

/// Persistent entity.
///
/// Implemented by `#[derive(Entity)]`.
pub trait Entity {
    /// Table the entity is stored in.
    const TABLE_NAME: &'static str;

    /// Build one descriptor per field, in declaration order, holding a copy
    /// of the current field values.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if a descriptor fails validation.
    fn property_descriptors(&self) -> Result<Vec<PropertyDescriptor>, PropertyError>;
}
