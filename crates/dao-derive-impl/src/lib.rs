// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Attribute Quick Reference
//!
//! ## `#[dao(...)]`
//!
//! ```rust,ignore
//! #[dao(
//!     entities(Employee, Department),   // Row types implementing Entity
//!     enums(JobKind),                   // Enum types stored as one column
//!     domains(Salary = i64)             // Newtypes over a basic type
//! )]
//! pub trait EmployeeDao {
//!     #[procedure(name = "find_employees", schema = "hr")]
//!     fn find(&self, #[input] id: i32, #[result_set] rows: &mut Vec<Employee>);
//!
//!     #[function]
//!     fn count_employees(&self, #[input] department: i32) -> i64;
//! }
//! ```
//!
//! ## Parameter Roles
//!
//! | Marker | Accepted type | Mode |
//! |--------|---------------|------|
//! | `#[input]` | `T`, `Option<T>`, `&T` | `In` |
//! | `#[output]` | `&mut Reference<T>` | `Out` |
//! | `#[in_out]` | `&mut Reference<T>` | `InOut` |
//! | `#[result_set]` | `&mut Vec<T>` | `ResultSet` |
//!
//! `T` is a basic, enum or domain type; result sets also accept entities.
//!
//! ## `#[derive(Entity)]`
//!
//! ```rust,ignore
//! #[derive(Entity)]
//! #[entity(table = "EMPLOYEE", naming = "snake_upper_case")]
//! pub struct Employee {
//!     #[id]
//!     pub id: i32,
//!
//!     #[column(name = "EMP_NAME", updatable = false)]
//!     pub name: Option<String>,
//!
//!     #[version]
//!     pub version: i64,
//!
//!     #[transient]
//!     pub cached: Option<String>,
//! }
//! ```
//!
//! # Diagnostics
//!
//! Every rejected declaration is reported with a stable code:
//!
//! | Range | Topic |
//! |-------|-------|
//! | `DAO10xx` | Parameter roles, names and query constants |
//! | `DAO11xx` | Role and type shape mismatches |
//! | `DAO12xx` | Unsupported types |
//! | `DAO13xx` | Procedure and function results |
//! | `DAO14xx` | `#[dao(...)]` type registrations |

mod dao;
mod entity;

use proc_macro::TokenStream;

/// Generate call metadata for a trait of stored procedures and functions.
///
/// Every method marked `#[procedure]` or `#[function]` is described by an
/// associated constant of the generated `{Trait}Meta` struct, which also
/// implements `dao_core::DaoMeta`. Unmarked methods are left alone.
///
/// # Module Attributes
///
/// | Attribute | Default | Description |
/// |-----------|---------|-------------|
/// | `name` | method name | Module name in the database |
/// | `schema` | none | Owning schema |
/// | `catalog` | none | Owning catalog or package |
///
/// # Example
///
/// ```rust,ignore
/// use dao_derive::{DaoMeta, Reference, dao};
///
/// #[dao]
/// pub trait PayrollDao {
///     #[procedure(schema = "hr")]
///     fn raise_salary(&self, #[input] id: i32, #[in_out] amount: &mut Reference<i64>);
/// }
///
/// let raise = PayrollDaoMeta::query("raise_salary").unwrap();
/// assert_eq!(raise.qualified_name(), "hr.raise_salary");
/// ```
#[proc_macro_attribute]
pub fn dao(args: TokenStream, item: TokenStream) -> TokenStream {
    dao::expand(args, item)
}

/// Derive `dao_core::Entity` for a struct with named fields.
///
/// # Entity Attributes
///
/// | Attribute | Default | Description |
/// |-----------|---------|-------------|
/// | `table` | struct name under `naming` | Table name |
/// | `naming` | `"none"` | Column naming: `"none"`, `"snake_upper_case"`, `"snake_lower_case"`, `"upper_case"`, `"lower_case"` |
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[id]` | Primary key column |
/// | `#[version]` | Optimistic lock counter, numeric, at most one |
/// | `#[transient]` | Not persisted, no column |
/// | `#[column(name = "..", insertable = bool, updatable = bool)]` | Column overrides |
///
/// Field types must implement `dao_core::BasicValue`, optionally inside
/// `Option`, and `Clone`.
#[proc_macro_derive(Entity, attributes(entity, id, version, transient, column))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    entity::derive(input)
}
