// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use std::collections::HashMap;

use dao_derive::dao;

/// Output parameters are written back through a reference cell.
#[dao]
pub trait TotalsDao {
    #[procedure]
    fn totals(&self, #[output] map: &mut HashMap<i32, i32>);
}

fn main() {}
