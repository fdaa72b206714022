// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use dao_derive::Entity;

/// Version counters must be numeric.
#[derive(Entity)]
pub struct Employee {
    #[id]
    pub id: i32,

    #[version]
    pub version: String
}

fn main() {}
