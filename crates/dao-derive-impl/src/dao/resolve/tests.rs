// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Resolver tests.
//!
//! | Category | Coverage |
//! |----------|----------|
//! | `In` | scalar categories accepted, everything else a shape mismatch |
//! | `Out` / `InOut` | reference shape, referent check |
//! | `ResultSet` | list shape, row categories, internal consistency |
//! | Missing role | independent of the declared type |
//! | Function results | procedures, scalars, row lists, mismatches |

use darling::{FromMeta, ast::NestedMeta};
use proc_macro2::Span;
use quote::quote;
use syn::{FnArg, TraitItemFn};

use super::*;
use crate::dao::{
    diagnostic::DiagnosticKind,
    parse::{DaoArgs, ParameterDef}
};

fn registry() -> TypeRegistry {
    let items = NestedMeta::parse_meta_list(quote!(
        entities(Employee),
        enums(JobKind),
        domains(Salary = i64)
    ))
    .unwrap();
    TypeRegistry::from_args(&DaoArgs::from_list(&items).unwrap()).unwrap()
}

fn meta(arg: FnArg) -> QueryParameterMeta {
    let FnArg::Typed(pat) = arg else {
        panic!("expected a typed parameter");
    };
    let def = ParameterDef::from_pat_type(&pat).unwrap();
    QueryParameterMeta::new("find", &def, &registry()).unwrap()
}

fn resolved(arg: FnArg) -> CallableParameter {
    resolve(&meta(arg)).unwrap()
}

fn illegal_state(arg: FnArg) -> IllegalState {
    match resolve(&meta(arg)) {
        Err(MetaError::IllegalState(state)) => state,
        other => panic!("expected an illegal state, got {other:?}")
    }
}

fn failure(arg: FnArg) -> Diagnostic {
    match resolve(&meta(arg)) {
        Err(MetaError::Diagnostic(diagnostic)) => diagnostic,
        other => panic!("expected a diagnostic, got {other:?}")
    }
}

#[test]
fn in_accepts_scalars() {
    let cases: [(FnArg, &str, &str); 3] = [
        (syn::parse_quote!(#[input] id: i32), "id", "BasicInParameter"),
        (syn::parse_quote!(#[input] kind: JobKind), "kind", "EnumInParameter"),
        (
            syn::parse_quote!(#[input] salary: Option<Salary>),
            "salary",
            "DomainInParameter"
        )
    ];
    for (arg, name, variant) in cases {
        let param = resolved(arg);
        assert_eq!(param.name(), name);
        assert_eq!(param.variant_name(), variant);
        assert_eq!(param.mode(), ParameterMode::In);
    }
}

#[test]
fn in_nullable_domain() {
    let param = resolved(syn::parse_quote!(#[input] salary: Option<Salary>));
    assert!(param.is_nullable());
    assert_eq!(param.category(), TypeCategory::Domain);
    assert_eq!(param.type_name(), "Salary");
    assert_eq!(param.basic_kind(), Some(BasicKind::I64));
}

#[test]
fn in_rejects_other_shapes() {
    let cases: [(FnArg, &str); 6] = [
        (syn::parse_quote!(#[input] employee: Employee), "Employee"),
        (syn::parse_quote!(#[input] ids: Vec<i32>), "Vec<i32>"),
        (syn::parse_quote!(#[input] grid: Vec<Vec<i32>>), "Vec<Vec<i32>>"),
        (
            syn::parse_quote!(#[input] boss: Option<Employee>),
            "Option<Employee>"
        ),
        (syn::parse_quote!(#[input] id: u128), "u128"),
        (
            syn::parse_quote!(#[input] total: &mut Reference<i32>),
            "&mut Reference<i32>"
        )
    ];
    for (arg, declared) in cases {
        let diagnostic = failure(arg);
        assert_eq!(diagnostic.code(), DiagnosticCode::InTypeMismatch);
        assert_eq!(diagnostic.kind(), DiagnosticKind::ShapeMismatch);
        assert_eq!(diagnostic.actual_type(), Some(declared));
    }
}

#[test]
fn out_requires_reference() {
    let param = resolved(syn::parse_quote!(#[output] total: &mut Reference<i64>));
    assert_eq!(param.variant_name(), "BasicOutParameter");
    assert_eq!(param.type_name(), "i64");

    let diagnostic = failure(syn::parse_quote!(#[output] total: i64));
    assert_eq!(diagnostic.code(), DiagnosticCode::OutNotReference);
    assert_eq!(diagnostic.kind(), DiagnosticKind::ShapeMismatch);
}

#[test]
fn out_unknown_type_is_not_reference() {
    let diagnostic = failure(syn::parse_quote!(
        #[output] totals: &mut std::collections::HashMap<i32, i32>
    ));
    assert_eq!(diagnostic.code(), DiagnosticCode::OutNotReference);
    assert_eq!(
        diagnostic.actual_type(),
        Some("&mut std::collections::HashMap<i32, i32>")
    );
    assert_eq!(diagnostic.expected_type(), Some("&mut Reference<T>"));
}

#[test]
fn out_referent_must_be_scalar() {
    let diagnostic = failure(syn::parse_quote!(#[output] boss: &mut Reference<Employee>));
    assert_eq!(diagnostic.code(), DiagnosticCode::ReferentMismatch);
    assert_eq!(diagnostic.kind(), DiagnosticKind::ReferentMismatch);
    assert_eq!(diagnostic.actual_type(), Some("Employee"));
    assert_eq!(diagnostic.parameter(), Some("boss"));
}

#[test]
fn unknown_referent_is_referent_mismatch() {
    let diagnostic = failure(syn::parse_quote!(#[output] total: &mut Reference<u128>));
    assert_eq!(diagnostic.code(), DiagnosticCode::ReferentMismatch);
    assert_eq!(diagnostic.actual_type(), Some("u128"));

    let diagnostic = failure(syn::parse_quote!(#[in_out] boss: &mut Reference<Option<Employee>>));
    assert_eq!(diagnostic.code(), DiagnosticCode::ReferentMismatch);
    assert_eq!(diagnostic.actual_type(), Some("Option<Employee>"));
}

#[test]
fn in_out_requires_reference() {
    let param = resolved(syn::parse_quote!(#[in_out] kind: &mut Reference<Option<JobKind>>));
    assert_eq!(param.variant_name(), "EnumInOutParameter");
    assert_eq!(param.mode(), ParameterMode::InOut);
    assert_eq!(param.basic_kind(), None);
    assert!(param.is_nullable());

    let diagnostic = failure(syn::parse_quote!(#[in_out] ids: &mut Vec<i32>));
    assert_eq!(diagnostic.code(), DiagnosticCode::InOutNotReference);

    let diagnostic = failure(syn::parse_quote!(#[in_out] ids: &mut Reference<Vec<i32>>));
    assert_eq!(diagnostic.code(), DiagnosticCode::ReferentMismatch);
    assert_eq!(diagnostic.actual_type(), Some("Vec<i32>"));
}

#[test]
fn result_set_rows() {
    let cases: [(FnArg, &str, TypeCategory); 4] = [
        (
            syn::parse_quote!(#[result_set] rows: &mut Vec<Employee>),
            "EntityListParameter",
            TypeCategory::Entity
        ),
        (
            syn::parse_quote!(#[result_set] ids: &mut Vec<i32>),
            "BasicListParameter",
            TypeCategory::Basic
        ),
        (
            syn::parse_quote!(#[result_set] kinds: &mut Vec<JobKind>),
            "EnumListParameter",
            TypeCategory::Enum
        ),
        (
            syn::parse_quote!(#[result_set] salaries: &mut Vec<Salary>),
            "DomainListParameter",
            TypeCategory::Domain
        )
    ];
    for (arg, variant, category) in cases {
        let param = resolved(arg);
        assert_eq!(param.variant_name(), variant);
        assert_eq!(param.category(), category);
        assert_eq!(param.mode(), ParameterMode::ResultSet);
    }
}

#[test]
fn result_set_requires_list() {
    let diagnostic = failure(syn::parse_quote!(#[result_set] row: Employee));
    assert_eq!(diagnostic.code(), DiagnosticCode::ResultSetNotList);
    assert_eq!(diagnostic.kind(), DiagnosticKind::ShapeMismatch);
    assert_eq!(diagnostic.actual_type(), Some("Employee"));

    let diagnostic = failure(syn::parse_quote!(#[result_set] blob: &mut Vec<u8>));
    assert_eq!(diagnostic.code(), DiagnosticCode::ResultSetNotList);

    let diagnostic = failure(syn::parse_quote!(
        #[result_set] rows: &mut std::collections::HashMap<i32, i32>
    ));
    assert_eq!(diagnostic.code(), DiagnosticCode::ResultSetNotList);
}

#[test]
fn result_set_of_references_is_illegal_state() {
    let state = illegal_state(syn::parse_quote!(#[result_set] rows: &mut Vec<Reference<i32>>));
    assert_eq!(state.parameter, "rows");
    assert_eq!(state.method, "find");
    assert!(state.detail.contains("Reference<i32>"));
    assert!(state.detail.contains("category Reference"));

    let state = illegal_state(syn::parse_quote!(#[result_set] rows: &mut Vec<u128>));
    assert!(state.detail.contains("`u128`"));
}

#[test]
fn result_set_element_outside_rows_is_illegal_state() {
    let ty: Type = syn::parse_quote!(Vec<Vec<i32>>);
    let data_type = DataType::classify(&ty, &registry()).unwrap();
    let param = QueryParameterMeta {
        method: "find".to_string(),
        name: "rows".to_string(),
        ty,
        data_type: Ok(data_type),
        role: Some(ParameterRole::ResultSet),
        span: Span::call_site()
    };
    let error = resolve(&param).unwrap_err();
    assert!(error.is_illegal_state());
    assert!(error.to_string().contains("`rows`"));
}

#[test]
fn missing_role_regardless_of_type() {
    let cases: [FnArg; 8] = [
        syn::parse_quote!(id: i32),
        syn::parse_quote!(employee: Employee),
        syn::parse_quote!(rows: &mut Vec<Employee>),
        syn::parse_quote!(total: &mut Reference<i32>),
        syn::parse_quote!(id: u128),
        syn::parse_quote!(filter: std::collections::HashMap<String, i32>),
        syn::parse_quote!(grid: Vec<Vec<i32>>),
        syn::parse_quote!(rows: &mut Vec<Vec<i32>>)
    ];
    for arg in cases {
        let diagnostic = failure(arg);
        assert_eq!(diagnostic.code(), DiagnosticCode::MissingRole);
        assert_eq!(diagnostic.kind(), DiagnosticKind::RoleMissing);
        assert_eq!(diagnostic.method(), Some("find"));
    }
}

fn method(item: TraitItemFn) -> MethodDef {
    MethodDef::from_trait_fn(&item).unwrap().unwrap()
}

fn result_code(item: TraitItemFn) -> DiagnosticCode {
    match resolve_result(&method(item), &registry()) {
        Err(MetaError::Diagnostic(diagnostic)) => diagnostic.code(),
        other => panic!("expected a diagnostic, got {other:?}")
    }
}

#[test]
fn procedures_return_unit() {
    let plain = method(syn::parse_quote! { #[procedure] fn run(&self); });
    assert!(resolve_result(&plain, &registry()).unwrap().is_none());

    let fallible = method(syn::parse_quote! {
        #[procedure] fn run(&self) -> Result<(), std::io::Error>;
    });
    assert!(resolve_result(&fallible, &registry()).unwrap().is_none());

    assert_eq!(
        result_code(syn::parse_quote! { #[procedure] fn run(&self) -> i32; }),
        DiagnosticCode::ProcedureReturnsValue
    );
}

#[test]
fn function_scalar_result() {
    let count = method(syn::parse_quote! { #[function] fn count(&self) -> i64; });
    let result = resolve_result(&count, &registry()).unwrap().unwrap();
    assert!(matches!(result, FunctionResult::Scalar(_)));
    assert_eq!(result.category(), TypeCategory::Basic);
    assert_eq!(result.type_name(), "i64");
}

#[test]
fn function_result_set() {
    let list = method(syn::parse_quote! {
        #[function] fn list(&self) -> Result<Vec<Employee>, std::io::Error>;
    });
    let result = resolve_result(&list, &registry()).unwrap().unwrap();
    assert!(matches!(result, FunctionResult::ResultSet(_)));
    assert_eq!(result.category(), TypeCategory::Entity);
    assert_eq!(result.type_name(), "Employee");
}

#[test]
fn function_result_failures() {
    assert_eq!(
        result_code(syn::parse_quote! { #[function] fn f(&self); }),
        DiagnosticCode::FunctionReturnsNothing
    );
    assert_eq!(
        result_code(syn::parse_quote! { #[function] fn f(&self) -> Result<(), String>; }),
        DiagnosticCode::FunctionReturnsNothing
    );
    assert_eq!(
        result_code(syn::parse_quote! { #[function] fn f(&self) -> Employee; }),
        DiagnosticCode::FunctionResultMismatch
    );
    assert_eq!(
        result_code(syn::parse_quote! { #[function] fn f(&self) -> Vec<Vec<i32>>; }),
        DiagnosticCode::UnsupportedListElement
    );
    assert_eq!(
        result_code(syn::parse_quote! { #[function] fn f(&self) -> u128; }),
        DiagnosticCode::UnsupportedType
    );
}
