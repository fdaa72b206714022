// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[dao]` attribute macro implementation.
//!
//! # Architecture
//!
//! ```text
//! dao.rs (entry point)
//! ├── parse/         - #[dao], #[procedure], #[function], role markers
//! ├── types.rs       - type classification and registry
//! ├── resolve.rs     - parameter role resolution
//! ├── query.rs       - per-method metadata builder
//! ├── diagnostic.rs  - diagnostic codes and errors
//! └── generate.rs    - {Trait}Meta generation
//! ```
//!
//! # Pipeline
//!
//! ```text
//! trait tokens ──► DaoDef ──► TypeRegistry ──► ModuleQueryMeta (per method)
//!                                                     │
//!                                                     ▼
//!                                     trait + {Trait}Meta: DaoMeta
//! ```
//!
//! Attribute syntax errors are reported by darling. Everything after parsing
//! is reported as a coded [`Diagnostic`](diagnostic::Diagnostic).

pub mod diagnostic;
pub mod generate;
pub mod parse;
pub mod query;
pub mod resolve;
pub mod types;

use darling::ast::NestedMeta;
use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemTrait, parse_macro_input};

use self::parse::DaoDef;

/// Main entry point for the `#[dao]` attribute.
pub fn expand(args: TokenStream, item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as ItemTrait);
    let args = match NestedMeta::parse_meta_list(args.into()) {
        Ok(args) => args,
        Err(err) => return with_errors(item, darling::Error::from(err))
    };

    match DaoDef::parse(&args, item.clone()) {
        Ok(dao) => generate::generate(&dao).into(),
        Err(err) => with_errors(item, err)
    }
}

/// Keep the trait usable next to attribute errors.
fn with_errors(item: ItemTrait, errors: darling::Error) -> TokenStream {
    let item = generate::strip_helper_attrs(item);
    let errors = errors.write_errors();
    quote! {
        #item
        #errors
    }
    .into()
}
