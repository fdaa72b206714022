// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Code generation for `#[dao]`.
//!
//! Emits the trait with the helper attributes removed, followed by the
//! `{Trait}Meta` struct:
//!
//! ```rust,ignore
//! pub trait EmployeeDao {
//!     fn find(&self, id: i32, rows: &mut Vec<Employee>);
//! }
//!
//! #[derive(Debug, Clone, Copy, Default)]
//! pub struct EmployeeDaoMeta;
//!
//! impl EmployeeDaoMeta {
//!     pub const FIND: ::dao_core::ModuleQuery = ::dao_core::ModuleQuery { /* ... */ };
//! }
//!
//! impl ::dao_core::DaoMeta for EmployeeDaoMeta {
//!     const QUERIES: &'static [::dao_core::ModuleQuery] = &[Self::FIND];
//! }
//! ```
//!
//! Methods are built independently. Every user diagnostic is reported, one
//! per failing method; an internal error stops generation at once. The
//! cleaned trait is emitted in every case, so a failing method does not
//! also break the code that uses the trait.
//!
//! Constants are named after the method in `SCREAMING_SNAKE_CASE`. Two
//! methods that map to one name, such as `findAll` and `find_all`, are
//! rejected with `DuplicateQueryConstant`.

use convert_case::{Case, Casing};
use dao_core::{BasicKind, ModuleKind, ParameterMode, TypeCategory};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{FnArg, Ident, ItemTrait, TraitItem};

use super::{
    diagnostic::{Diagnostic, DiagnosticCode},
    parse::{DaoDef, is_role_attr, module_kind},
    query::{ModuleQueryMeta, QueryParameterMeta},
    resolve::{CallableParameter, FunctionResult},
    types::{TypeRegistry, type_name}
};

/// Generate the cleaned trait followed by its metadata, or by the
/// `compile_error!`s that replace it.
#[must_use]
pub fn generate(dao: &DaoDef) -> TokenStream {
    let item = strip_helper_attrs(dao.item.clone());
    match metadata(dao, &item) {
        Ok(meta) => quote! {
            #item
            #meta
        },
        Err(errors) => {
            let errors = errors.to_compile_error();
            quote! {
                #item
                #errors
            }
        }
    }
}

/// Generate the `{Trait}Meta` struct for the cleaned trait.
///
/// # Errors
///
/// Returns the registry error, every method diagnostic combined, or the
/// first internal error.
pub fn metadata(dao: &DaoDef, item: &ItemTrait) -> syn::Result<TokenStream> {
    let registry = TypeRegistry::from_args(&dao.args)?;

    let mut queries: Vec<(Ident, ModuleQueryMeta)> = Vec::with_capacity(dao.methods.len());
    let mut errors: Option<syn::Error> = None;
    for method in &dao.methods {
        let query = match ModuleQueryMeta::build(method, &registry) {
            Ok(query) => query,
            Err(error) if error.is_illegal_state() => return Err(error.into()),
            Err(error) => {
                push_error(&mut errors, error.into());
                continue;
            }
        };
        let ident = query_const_ident(&query);
        if let Some((_, taken)) = queries.iter().find(|(seen, _)| *seen == ident) {
            let diagnostic =
                Diagnostic::new(DiagnosticCode::DuplicateQueryConstant, query.method.span())
                    .in_method(query.method_name())
                    .expected(taken.method_name())
                    .actual(ident.to_string());
            push_error(&mut errors, diagnostic.into());
            continue;
        }
        queries.push((ident, query));
    }
    if let Some(errors) = errors {
        return Err(errors);
    }

    let vis = &item.vis;
    let meta_ident = dao.meta_ident();
    let doc = format!("Call metadata of [`{}`].", item.ident);

    let consts: Vec<&Ident> = queries.iter().map(|(ident, _)| ident).collect();
    let values = queries.iter().map(|(_, query)| query_tokens(query));

    Ok(quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, Copy, Default)]
        #vis struct #meta_ident;

        impl #meta_ident {
            #(
                #[allow(missing_docs)]
                pub const #consts: ::dao_core::ModuleQuery = #values;
            )*
        }

        impl ::dao_core::DaoMeta for #meta_ident {
            const QUERIES: &'static [::dao_core::ModuleQuery] = &[#(Self::#consts),*];
        }
    })
}

/// Remove `#[procedure]`, `#[function]` and role markers.
#[must_use]
pub fn strip_helper_attrs(mut item: ItemTrait) -> ItemTrait {
    for trait_item in &mut item.items {
        let TraitItem::Fn(method) = trait_item else {
            continue;
        };
        method.attrs.retain(|attr| module_kind(attr).is_none());
        for input in &mut method.sig.inputs {
            if let FnArg::Typed(arg) = input {
                arg.attrs.retain(|attr| !is_role_attr(attr));
            }
        }
    }
    item
}

fn push_error(errors: &mut Option<syn::Error>, error: syn::Error) {
    match errors.as_mut() {
        Some(combined) => combined.combine(error),
        None => *errors = Some(error)
    }
}

fn query_const_ident(query: &ModuleQueryMeta) -> Ident {
    let method = query.method_name();
    let mut name = method.to_case(Case::Snake).to_uppercase();
    // `__` and `_1` have no word to start the constant with
    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        name = format!("_{}", method.to_uppercase());
    }
    format_ident!("{}", name, span = query.method.span())
}

fn query_tokens(query: &ModuleQueryMeta) -> TokenStream {
    let method = query.method_name();
    let kind = match query.kind {
        ModuleKind::Procedure => quote!(::dao_core::ModuleKind::Procedure),
        ModuleKind::Function => quote!(::dao_core::ModuleKind::Function)
    };
    let catalog = optional_str(query.catalog.as_deref());
    let schema = optional_str(query.schema.as_deref());
    let name = &query.name;
    let parameters = query
        .parameters
        .iter()
        .zip(&query.callable)
        .map(|(meta, callable)| parameter_tokens(meta, callable));
    let bindable = query.bindable.iter().map(|param| {
        let name = &param.name;
        let type_name = type_name(&param.ty);
        quote! {
            ::dao_core::BindableParameter {
                name: #name,
                type_name: #type_name
            }
        }
    });
    let result = match &query.result {
        Some(result) => {
            let tokens = result_tokens(result);
            quote!(::core::option::Option::Some(#tokens))
        }
        None => quote!(::core::option::Option::None)
    };

    quote! {
        ::dao_core::ModuleQuery {
            method: #method,
            kind: #kind,
            catalog: #catalog,
            schema: #schema,
            name: #name,
            parameters: &[#(#parameters),*],
            bindable: &[#(#bindable),*],
            result: #result
        }
    }
}

fn parameter_tokens(meta: &QueryParameterMeta, param: &CallableParameter) -> TokenStream {
    let name = param.name();
    let variant = param.variant_name();
    let mode = mode_tokens(param.mode());
    let category = category_tokens(param.category());
    let declared_type = type_name(&meta.ty);
    let type_name = param.type_name();
    let basic = match param.basic_kind() {
        Some(kind) => {
            let kind = basic_kind_tokens(kind);
            quote!(::core::option::Option::Some(#kind))
        }
        None => quote!(::core::option::Option::None)
    };
    let nullable = param.is_nullable();
    quote! {
        ::dao_core::CallableParameter {
            name: #name,
            variant: #variant,
            mode: #mode,
            category: #category,
            type_name: #type_name,
            declared_type: #declared_type,
            basic: #basic,
            nullable: #nullable
        }
    }
}

fn result_tokens(result: &FunctionResult) -> TokenStream {
    let category = category_tokens(result.category());
    let type_name = result.type_name();
    match result {
        FunctionResult::Scalar(_) => quote! {
            ::dao_core::CallableResult::Scalar {
                category: #category,
                type_name: #type_name
            }
        },
        FunctionResult::ResultSet(_) => quote! {
            ::dao_core::CallableResult::ResultSet {
                category: #category,
                type_name: #type_name
            }
        }
    }
}

fn mode_tokens(mode: ParameterMode) -> TokenStream {
    match mode {
        ParameterMode::In => quote!(::dao_core::ParameterMode::In),
        ParameterMode::Out => quote!(::dao_core::ParameterMode::Out),
        ParameterMode::InOut => quote!(::dao_core::ParameterMode::InOut),
        ParameterMode::ResultSet => quote!(::dao_core::ParameterMode::ResultSet)
    }
}

fn category_tokens(category: TypeCategory) -> TokenStream {
    match category {
        TypeCategory::Basic => quote!(::dao_core::TypeCategory::Basic),
        TypeCategory::Enum => quote!(::dao_core::TypeCategory::Enum),
        TypeCategory::Domain => quote!(::dao_core::TypeCategory::Domain),
        TypeCategory::Entity => quote!(::dao_core::TypeCategory::Entity)
    }
}

fn basic_kind_tokens(kind: BasicKind) -> TokenStream {
    let variant = match kind {
        BasicKind::Bool => quote!(Bool),
        BasicKind::I16 => quote!(I16),
        BasicKind::I32 => quote!(I32),
        BasicKind::I64 => quote!(I64),
        BasicKind::F32 => quote!(F32),
        BasicKind::F64 => quote!(F64),
        BasicKind::String => quote!(String),
        BasicKind::Bytes => quote!(Bytes),
        BasicKind::Date => quote!(Date),
        BasicKind::Time => quote!(Time),
        BasicKind::DateTime => quote!(DateTime),
        BasicKind::Uuid => quote!(Uuid)
    };
    quote!(::dao_core::BasicKind::#variant)
}

fn optional_str(value: Option<&str>) -> TokenStream {
    match value {
        Some(value) => quote!(::core::option::Option::Some(#value)),
        None => quote!(::core::option::Option::None)
    }
}
