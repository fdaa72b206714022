// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # Generated Code Overview
//!
//! | Input | Generated |
//! |-------|-----------|
//! | `#[dao] trait EmployeeDao` | `EmployeeDao` without helper attributes |
//! | | `struct EmployeeDaoMeta` with one `ModuleQuery` constant per method |
//! | | `impl DaoMeta for EmployeeDaoMeta` |
//! | `#[derive(Entity)] struct Employee` | `impl Entity for Employee` |
//!
//! # Type Support
//!
//! | Category | Declared as |
//! |----------|-------------|
//! | Basic | `bool`, `i16`, `i32`, `i64`, `f32`, `f64`, `String`, `&str`, `Vec<u8>`, `NaiveDate`, `NaiveTime`, `NaiveDateTime`, `Uuid` |
//! | Enum | listed in `#[dao(enums(..))]` |
//! | Domain | listed in `#[dao(domains(Name = basic type))]` |
//! | Entity | listed in `#[dao(entities(..))]`, result set rows only |
//!
//! Basic, enum and domain values may be wrapped in `Option` to mark them
//! nullable.

pub use dao_core::*;
pub use dao_derive_impl::{Entity, dao};
