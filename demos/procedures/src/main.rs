// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Statement building from generated metadata.
//!
//! Run with `RUST_LOG=demo_procedures=debug cargo run` inside this
//! directory. No database is contacted.

use chrono::NaiveDate;
use dao_derive::{
    DaoMeta, Entity, ModuleKind, ModuleQuery, PropertyDescriptor, PropertyError, Reference, dao
};
use tracing_subscriber::EnvFilter;

#[derive(Entity)]
#[entity(naming = "snake_upper_case")]
pub struct Employee {
    #[id]
    pub id: i32,

    #[column(name = "EMP_NAME")]
    pub name: String,

    pub hired_on: Option<NaiveDate>,

    #[version]
    pub version: i64,

    #[transient]
    pub display_name: Option<String>
}

pub struct Salary(pub i64);

#[dao(entities(Employee), domains(Salary = i64))]
pub trait EmployeeDao {
    #[procedure(name = "find_employees", schema = "hr")]
    fn find_by_id(&self, #[input] id: i32, #[result_set] results: &mut Vec<Employee>);

    #[procedure(schema = "hr")]
    fn raise_salary(
        &self,
        #[input] id: i32,
        #[in_out] salary: &mut Reference<Salary>,
        #[output] raised: &mut Reference<bool>
    );

    #[function(schema = "hr")]
    fn count_employees(&self, #[input] department: Option<i32>) -> i64;
}

/// `{call ...}` escape for a module call, one placeholder per parameter.
fn call_statement(query: &ModuleQuery) -> String {
    let placeholders = vec!["?"; query.parameters.len()].join(", ");
    match query.kind {
        ModuleKind::Procedure => {
            format!("{{call {}({placeholders})}}", query.qualified_name())
        }
        ModuleKind::Function => {
            format!("{{? = call {}({placeholders})}}", query.qualified_name())
        }
    }
}

fn insert_statement(table: &str, properties: &[PropertyDescriptor]) -> String {
    let insertable: Vec<_> = properties
        .iter()
        .filter(|p| p.is_insertable())
        .filter_map(|p| p.column_name().map(|column| (column, p.to_string())))
        .collect();
    let columns: Vec<_> = insertable.iter().map(|(column, _)| *column).collect();
    let values: Vec<_> = insertable.iter().map(|(_, value)| value.as_str()).collect();
    format!(
        "INSERT INTO {table} ({}) VALUES ({})",
        columns.join(", "),
        values.join(", ")
    )
}

fn main() -> Result<(), PropertyError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    for query in EmployeeDaoMeta::QUERIES {
        tracing::info!(method = query.method, statement = %call_statement(query));
        for param in query.parameters {
            tracing::debug!(
                method = query.method,
                parameter = param.name,
                mode = param.mode.as_str(),
                category = ?param.category,
                type_name = param.type_name,
                nullable = param.nullable
            );
        }
        if let Some(result) = query.result {
            tracing::debug!(method = query.method, ?result);
        }
    }

    let employee = Employee {
        id:           7,
        name:         "SMITH".to_string(),
        hired_on:     NaiveDate::from_ymd_opt(2021, 4, 12),
        version:      1,
        display_name: None
    };
    let properties = employee.property_descriptors()?;
    tracing::info!(
        statement = %insert_statement(Employee::TABLE_NAME, &properties),
        "entity insert"
    );

    match EmployeeDaoMeta::query("raise_salary") {
        Some(query) => {
            let bindable: Vec<_> = query.bindable.iter().map(|p| p.name).collect();
            tracing::info!(method = query.method, ?bindable, "named parameters");
        }
        None => tracing::warn!("raise_salary has no metadata")
    }

    let _ = Salary(0);
    Ok(())
}
