// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use dao_derive::dao;

/// Parameter without a binding role.
#[dao]
pub trait EmployeeDao {
    #[procedure]
    fn find(&self, id: u128);
}

fn main() {}
