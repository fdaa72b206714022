// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Classifier tests.
//!
//! Types are written with `syn::parse_quote!` and classified against a
//! registry built from `#[dao(...)]` arguments:
//!
//! ```rust,ignore
//! let ty: Type = syn::parse_quote!(Option<Salary>);
//! let data_type = DataType::classify(&ty, &registry()).unwrap();
//! assert_eq!(data_type.category(), Category::Domain);
//! ```

use darling::{FromMeta, ast::NestedMeta};
use quote::quote;
use syn::Type;

use super::*;
use crate::dao::diagnostic::DiagnosticCode;

fn registry() -> TypeRegistry {
    let items = NestedMeta::parse_meta_list(quote!(
        entities(Employee),
        enums(JobKind),
        domains(Salary = i64, Photo = "Vec<u8>")
    ))
    .unwrap();
    TypeRegistry::from_args(&DaoArgs::from_list(&items).unwrap()).unwrap()
}

fn classify(ty: Type) -> Result<DataType, Diagnostic> {
    DataType::classify(&ty, &registry())
}

fn category(ty: Type) -> Category {
    classify(ty).unwrap().category()
}

fn nullable(data_type: &DataType) -> bool {
    matches!(
        data_type,
        DataType::Basic(BasicType { nullable: true, .. })
            | DataType::Enum(EnumType { nullable: true, .. })
            | DataType::Domain(DomainType { nullable: true, .. })
    )
}

#[test]
fn basic_types() {
    let cases: [(Type, BasicKind); 13] = [
        (syn::parse_quote!(bool), BasicKind::Bool),
        (syn::parse_quote!(i16), BasicKind::I16),
        (syn::parse_quote!(i32), BasicKind::I32),
        (syn::parse_quote!(i64), BasicKind::I64),
        (syn::parse_quote!(f32), BasicKind::F32),
        (syn::parse_quote!(f64), BasicKind::F64),
        (syn::parse_quote!(String), BasicKind::String),
        (syn::parse_quote!(&str), BasicKind::String),
        (syn::parse_quote!(Vec<u8>), BasicKind::Bytes),
        (syn::parse_quote!(chrono::NaiveDate), BasicKind::Date),
        (syn::parse_quote!(NaiveTime), BasicKind::Time),
        (syn::parse_quote!(NaiveDateTime), BasicKind::DateTime),
        (syn::parse_quote!(uuid::Uuid), BasicKind::Uuid)
    ];
    for (ty, kind) in cases {
        let name = type_name(&ty);
        match classify(ty).unwrap() {
            DataType::Basic(basic) => {
                assert_eq!(basic.kind, kind, "{name}");
                assert!(!basic.nullable);
            }
            other => panic!("{name} classified as {:?}", other.category())
        }
    }
}

#[test]
fn registered_types() {
    assert_eq!(category(syn::parse_quote!(JobKind)), Category::Enum);
    assert_eq!(category(syn::parse_quote!(crate::model::Employee)), Category::Entity);
    match classify(syn::parse_quote!(Salary)).unwrap() {
        DataType::Domain(domain) => assert_eq!(domain.value, BasicKind::I64),
        other => panic!("classified as {:?}", other.category())
    }
    match classify(syn::parse_quote!(Photo)).unwrap() {
        DataType::Domain(domain) => assert_eq!(domain.value, BasicKind::Bytes),
        other => panic!("classified as {:?}", other.category())
    }
}

#[test]
fn option_marks_scalars_nullable() {
    let basic = classify(syn::parse_quote!(Option<i32>)).unwrap();
    assert_eq!(basic.category(), Category::Basic);
    assert!(nullable(&basic));
    assert_eq!(basic.name(), "i32");

    assert!(nullable(&classify(syn::parse_quote!(Option<JobKind>)).unwrap()));
    assert!(nullable(&classify(syn::parse_quote!(Option<Salary>)).unwrap()));
    assert!(!nullable(&classify(syn::parse_quote!(Salary)).unwrap()));
}

#[test]
fn option_around_non_scalars_is_unsupported() {
    let types: [Type; 3] = [
        syn::parse_quote!(Option<Employee>),
        syn::parse_quote!(Option<Vec<i32>>),
        syn::parse_quote!(Option<Option<i32>>)
    ];
    for ty in types {
        let error = classify(ty).unwrap_err();
        assert_eq!(error.code(), DiagnosticCode::UnsupportedType);
    }
}

#[test]
fn lists() {
    let list = classify(syn::parse_quote!(&mut Vec<Employee>)).unwrap();
    let DataType::List(list) = list else {
        panic!("expected a list");
    };
    assert_eq!(list.element().category(), Category::Entity);
    assert_eq!(type_name(&list.ty), "Vec<Employee>");

    let nested = classify(syn::parse_quote!(Vec<Vec<i32>>)).unwrap();
    let DataType::List(nested) = nested else {
        panic!("expected a list");
    };
    assert_eq!(nested.element().category(), Category::List);
}

#[test]
fn references() {
    let reference = classify(syn::parse_quote!(&mut Reference<Option<i64>>)).unwrap();
    let DataType::Reference(reference) = reference else {
        panic!("expected a reference");
    };
    assert_eq!(reference.referent().category(), Category::Basic);
    assert!(nullable(reference.referent()));

    let to_entity = classify(syn::parse_quote!(dao_core::Reference<Employee>)).unwrap();
    let DataType::Reference(to_entity) = to_entity else {
        panic!("expected a reference");
    };
    assert_eq!(to_entity.referent().category(), Category::Entity);
}

#[test]
fn borrow_rules() {
    assert_eq!(category(syn::parse_quote!(&Employee)), Category::Entity);
    let types: [Type; 3] = [
        syn::parse_quote!(&mut i32),
        syn::parse_quote!(&Reference<i32>),
        syn::parse_quote!(&Vec<Employee>)
    ];
    for ty in types {
        assert_eq!(
            classify(ty).unwrap_err().code(),
            DiagnosticCode::UnsupportedType
        );
    }
}

#[test]
fn unknown_shapes_are_unsupported() {
    let types: [Type; 6] = [
        syn::parse_quote!(u64),
        syn::parse_quote!(Department),
        syn::parse_quote!(HashMap<String, i32>),
        syn::parse_quote!((i32, i32)),
        syn::parse_quote!([i32; 4]),
        syn::parse_quote!(Box<i32>)
    ];
    for ty in types {
        let error = classify(ty).unwrap_err();
        assert_eq!(error.code(), DiagnosticCode::UnsupportedType);
        assert!(error.actual_type().is_some());
    }
}

#[test]
fn unsupported_names_the_type() {
    let error = classify(syn::parse_quote!(HashMap<String, i32>)).unwrap_err();
    assert_eq!(error.actual_type(), Some("HashMap<String, i32>"));
}

#[test]
fn registry_rejects_duplicates() {
    let items = NestedMeta::parse_meta_list(quote!(entities(Employee), enums(Employee))).unwrap();
    let error = TypeRegistry::from_args(&DaoArgs::from_list(&items).unwrap()).unwrap_err();
    assert_eq!(error.code(), DiagnosticCode::DuplicateRegistration);
}

#[test]
fn registry_rejects_non_basic_domains() {
    let items = NestedMeta::parse_meta_list(quote!(domains(Tags = "Vec<String>"))).unwrap();
    let error = TypeRegistry::from_args(&DaoArgs::from_list(&items).unwrap()).unwrap_err();
    assert_eq!(error.code(), DiagnosticCode::DomainValueNotBasic);
}

#[test]
fn registered_name_shadows_basic_name() {
    let items = NestedMeta::parse_meta_list(quote!(enums(Uuid))).unwrap();
    let registry = TypeRegistry::from_args(&DaoArgs::from_list(&items).unwrap()).unwrap();
    assert_eq!(registry.get("Uuid"), Some(Registered::Enum));
    let ty: Type = syn::parse_quote!(Uuid);
    assert_eq!(
        DataType::classify(&ty, &registry).unwrap().category(),
        Category::Enum
    );
}

#[test]
fn type_names_are_compact() {
    let ty: Type = syn::parse_quote!(&mut dao_core::Reference<Option<i32>>);
    assert_eq!(type_name(&ty), "&mut dao_core::Reference<Option<i32>>");
    let ty: Type = syn::parse_quote!(());
    assert_eq!(type_name(&ty), "()");
}

#[test]
fn wrapped_arguments_are_read_from_syntax() {
    let ty: Type = syn::parse_quote!(&mut Vec<std::collections::HashMap<i32, i32>>);
    assert_eq!(
        list_element(&ty).map(type_name).as_deref(),
        Some("std::collections::HashMap<i32, i32>")
    );
    let ty: Type = syn::parse_quote!(Reference<u128>);
    assert_eq!(reference_referent(&ty).map(type_name).as_deref(), Some("u128"));

    let cases: [Type; 4] = [
        syn::parse_quote!(&Vec<i32>),
        syn::parse_quote!(&mut Vec<u8>),
        syn::parse_quote!(Option<Vec<i32>>),
        syn::parse_quote!(&mut Reference<i32>)
    ];
    for ty in &cases {
        assert!(list_element(ty).is_none(), "{}", type_name(ty));
    }
    assert!(reference_referent(&cases[0]).is_none());
}
