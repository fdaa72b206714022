// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `naming = "..."` option of `#[entity(...)]`.
//!
//! | Value | Convention |
//! |-------|------------|
//! | `"none"` (default) | Identifier unchanged |
//! | `"snake_upper_case"` | `EMPLOYEE_NAME` |
//! | `"snake_lower_case"` | `employee_name` |
//! | `"upper_case"` | `EMPLOYEENAME` |
//! | `"lower_case"` | `employeename` |

use dao_core::NamingConvention;
use darling::FromMeta;

const CONVENTIONS: [NamingConvention; 5] = [
    NamingConvention::None,
    NamingConvention::SnakeUpperCase,
    NamingConvention::SnakeLowerCase,
    NamingConvention::UpperCase,
    NamingConvention::LowerCase
];

/// Naming convention parsed from an attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Naming(pub NamingConvention);

impl FromMeta for Naming {
    /// Values are case-insensitive.
    fn from_string(value: &str) -> darling::Result<Self> {
        let value = value.to_lowercase();
        CONVENTIONS
            .into_iter()
            .find(|convention| convention.as_str() == value)
            .map(Self)
            .ok_or_else(|| darling::Error::unknown_value(&value))
    }
}
