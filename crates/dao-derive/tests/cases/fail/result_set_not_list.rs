// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use dao_derive::dao;

/// Result sets are collected into a list.
#[dao]
pub trait EmployeeDao {
    #[procedure]
    fn count(&self, #[result_set] total: i64);
}

fn main() {}
