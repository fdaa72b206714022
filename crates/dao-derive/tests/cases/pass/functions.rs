// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Functions returning scalars and result sets, plain or inside `Result`.

use dao_derive::{CallableResult, DaoMeta, dao};

#[derive(Debug)]
pub struct CallError;

#[dao]
pub trait ReportDao {
    #[function(catalog = "reports", schema = "hr")]
    fn count_employees(&self, #[input] department: &str) -> i64;

    #[function]
    fn salaries(&self, #[input] department: i32) -> Result<Vec<Option<i64>>, CallError>;
}

fn main() {
    let count = ReportDaoMeta::query("count_employees").unwrap();
    assert_eq!(count.qualified_name(), "reports.hr.count_employees");
    assert!(matches!(
        ReportDaoMeta::SALARIES.result,
        Some(CallableResult::ResultSet { .. })
    ));
}
