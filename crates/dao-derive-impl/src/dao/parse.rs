// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[dao]` input parsing.
//!
//! Syntax only. Types are classified and roles checked later, when the
//! metadata is built, so that those failures carry diagnostic codes.
//!
//! ```text
//! parse.rs (coordinator)
//! ├── args.rs       - #[dao(entities, enums, domains)]
//! ├── method.rs     - #[procedure] / #[function] methods
//! └── parameter.rs  - role markers on parameters
//! ```

mod args;
mod method;
mod parameter;

pub use args::DaoArgs;
use darling::{FromMeta, ast::NestedMeta};
pub use method::{MethodDef, module_kind};
pub use parameter::{ParameterDef, ParameterRole, is_role_attr};
use quote::format_ident;
use syn::{Ident, ItemTrait, TraitItem};

/// Parsed `#[dao]` trait.
#[derive(Debug, Clone)]
pub struct DaoDef {
    /// Attribute arguments.
    pub args: DaoArgs,

    /// The trait as written.
    pub item: ItemTrait,

    /// Methods mapped to stored modules, in declaration order.
    pub methods: Vec<MethodDef>
}

impl DaoDef {
    /// Parse the attribute arguments and the annotated trait.
    ///
    /// # Errors
    ///
    /// Returns all attribute errors found, accumulated.
    pub fn parse(args: &[NestedMeta], item: ItemTrait) -> darling::Result<Self> {
        let mut errors = darling::Error::accumulator();
        let args = errors.handle(DaoArgs::from_list(args)).unwrap_or_default();

        let methods: Vec<MethodDef> = item
            .items
            .iter()
            .filter_map(|item| match item {
                TraitItem::Fn(method) => errors.handle(MethodDef::from_trait_fn(method)).flatten(),
                _ => None
            })
            .collect();

        errors.finish_with(Self {
            args,
            item,
            methods
        })
    }

    /// Name of the generated metadata struct, `{Trait}Meta`.
    #[must_use]
    pub fn meta_ident(&self) -> Ident {
        format_ident!("{}Meta", self.item.ident)
    }
}
