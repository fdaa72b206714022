// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use dao_derive::dao;

/// Input parameters bind a single value.
#[dao]
pub trait GridDao {
    #[procedure]
    fn store(&self, #[input] grid: Vec<Vec<i32>>);
}

fn main() {}
