// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[derive(Entity)]` implementation.
//!
//! # Architecture
//!
//! ```text
//! entity.rs (entry point)
//! ├── parse/        - #[entity], field markers, #[column]
//! └── generate.rs   - impl dao_core::Entity
//! ```

pub mod generate;
pub mod parse;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

use self::parse::EntityDef;

/// Main entry point for the Entity derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match EntityDef::from_derive_input(&input) {
        Ok(entity) => generate::generate(&entity).into(),
        Err(err) => err.write_errors().into()
    }
}
