// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Procedures using every parameter role.

use dao_derive::{DaoMeta, Entity, ParameterMode, Reference, dao};

#[derive(Entity)]
pub struct Employee {
    #[id]
    pub id:   i32,
    pub name: Option<String>
}

pub enum JobKind {
    Clerk,
    Manager
}

pub struct Salary(pub i64);

#[dao(entities(Employee), enums(JobKind), domains(Salary = i64))]
pub trait EmployeeDao {
    #[procedure(name = "find_employees", schema = "hr")]
    fn find(&self, #[input] id: i32, #[result_set] rows: &mut Vec<Employee>);

    #[procedure]
    fn promote(
        &self,
        #[input] id: i32,
        #[input] job: Option<JobKind>,
        #[in_out] salary: &mut Reference<Salary>,
        #[output] updated: &mut Reference<bool>
    );

    fn not_a_module(&self) -> usize;
}

struct Noop;

impl EmployeeDao for Noop {
    fn find(&self, _id: i32, _rows: &mut Vec<Employee>) {}

    fn promote(
        &self,
        _id: i32,
        _job: Option<JobKind>,
        _salary: &mut Reference<Salary>,
        _updated: &mut Reference<bool>
    ) {
    }

    fn not_a_module(&self) -> usize {
        0
    }
}

fn main() {
    assert_eq!(EmployeeDaoMeta::QUERIES.len(), 2);
    assert_eq!(EmployeeDaoMeta::FIND.name, "find_employees");
    assert_eq!(
        EmployeeDaoMeta::PROMOTE.parameters[2].mode,
        ParameterMode::InOut
    );
    assert_eq!(Noop.not_a_module(), 0);
    let _ = (JobKind::Clerk, JobKind::Manager, Salary(0));
}
