// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[procedure]` and `#[function]` method parsing.
//!
//! ```rust,ignore
//! #[procedure(name = "find_employees", schema = "hr")]
//! fn find(&self, #[input] id: i32, #[result_set] rows: &mut Vec<Employee>);
//!
//! #[function]
//! fn count_employees(&self, #[input] department: i32) -> i64;
//! ```
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `name` | method name | Module name in the database |
//! | `schema` | none | Schema qualifier |
//! | `catalog` | none | Catalog qualifier |
//!
//! Methods carrying neither attribute are left alone.

use dao_core::ModuleKind;
use darling::FromMeta;
use proc_macro2::Span;
use syn::{
    Attribute, FnArg, Ident, Meta, ReturnType, TraitItemFn, ext::IdentExt, spanned::Spanned
};

use super::parameter::ParameterDef;

/// Options of `#[procedure(...)]` and `#[function(...)]`.
#[derive(Debug, Default, Clone, FromMeta)]
pub struct ModuleAttrs {
    /// Module name, defaults to the method name.
    #[darling(default)]
    pub name: Option<String>,

    /// Schema qualifier.
    #[darling(default)]
    pub schema: Option<String>,

    /// Catalog qualifier.
    #[darling(default)]
    pub catalog: Option<String>
}

impl ModuleAttrs {
    /// Parse a bare `#[procedure]` or a `#[procedure(...)]` list.
    ///
    /// # Errors
    ///
    /// Returns error for `#[procedure = ...]` and unknown options.
    pub fn from_attr(attr: &Attribute) -> darling::Result<Self> {
        match &attr.meta {
            Meta::Path(_) => Ok(Self::default()),
            Meta::List(_) | Meta::NameValue(_) => Self::from_meta(&attr.meta)
        }
    }
}

/// Module kind named by an attribute.
#[must_use]
pub fn module_kind(attr: &Attribute) -> Option<ModuleKind> {
    if attr.path().is_ident("procedure") {
        Some(ModuleKind::Procedure)
    } else if attr.path().is_ident("function") {
        Some(ModuleKind::Function)
    } else {
        None
    }
}

/// Trait method mapped to a stored module.
#[derive(Debug, Clone)]
pub struct MethodDef {
    /// Method identifier.
    pub ident: Ident,

    /// Procedure or function.
    pub kind: ModuleKind,

    /// Attribute options.
    pub attrs: ModuleAttrs,

    /// Typed parameters in declaration order. The receiver is skipped.
    pub parameters: Vec<ParameterDef>,

    /// Declared return type.
    pub output: ReturnType,

    /// Span of the method signature.
    pub span: Span
}

impl MethodDef {
    /// Parse a trait method.
    ///
    /// Returns `Ok(None)` when the method has no `#[procedure]` or
    /// `#[function]` attribute.
    ///
    /// # Errors
    ///
    /// - Both attributes on one method
    /// - Invalid attribute options
    /// - Role markers with arguments
    pub fn from_trait_fn(item: &TraitItemFn) -> darling::Result<Option<Self>> {
        let mut errors = darling::Error::accumulator();
        let mut module: Option<(ModuleKind, ModuleAttrs)> = None;

        for attr in &item.attrs {
            let Some(kind) = module_kind(attr) else {
                continue;
            };
            if module.is_some() {
                errors.push(
                    darling::Error::custom(
                        "a method can be either #[procedure] or #[function], not both"
                    )
                    .with_span(attr)
                );
                continue;
            }
            if let Some(attrs) = errors.handle(ModuleAttrs::from_attr(attr)) {
                module = Some((kind, attrs));
            }
        }

        let parameters: Vec<ParameterDef> = item
            .sig
            .inputs
            .iter()
            .filter_map(|arg| match arg {
                FnArg::Typed(pat) => errors.handle(ParameterDef::from_pat_type(pat)),
                FnArg::Receiver(_) => None
            })
            .collect();

        errors.finish()?;

        Ok(module.map(|(kind, attrs)| Self {
            ident: item.sig.ident.clone(),
            kind,
            attrs,
            parameters,
            output: item.sig.output.clone(),
            span: item.sig.span()
        }))
    }

    /// Method name without the `r#` prefix of raw identifiers.
    #[must_use]
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Module name in the database.
    #[must_use]
    pub fn module_name(&self) -> String {
        self.attrs.name.clone().unwrap_or_else(|| self.name())
    }
}
