// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code, non_snake_case)]

use dao_derive::dao;

/// Both methods map to `FIND_ALL`.
#[dao]
pub trait EmployeeDao {
    #[procedure]
    fn findAll(&self);

    #[procedure]
    fn find_all(&self);
}

fn main() {}
