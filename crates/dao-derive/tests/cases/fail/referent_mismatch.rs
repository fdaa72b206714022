// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use dao_derive::{Reference, dao};

/// Reference cells hold a basic, enum or domain value.
#[dao]
pub trait TotalsDao {
    #[procedure]
    fn total(&self, #[output] sum: &mut Reference<u128>);
}

fn main() {}
