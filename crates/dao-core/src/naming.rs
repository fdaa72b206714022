// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Naming conventions mapping Rust identifiers to database names.
//!
//! Used to derive column names from field names and table names from struct
//! names when they are not spelled out explicitly.
//!
//! | Convention | `employee_name` | `EmployeeAddress` |
//! |------------|-----------------|-------------------|
//! | `None` | `employee_name` | `EmployeeAddress` |
//! | `SnakeUpperCase` | `EMPLOYEE_NAME` | `EMPLOYEE_ADDRESS` |
//! | `SnakeLowerCase` | `employee_name` | `employee_address` |
//! | `UpperCase` | `EMPLOYEE_NAME` | `EMPLOYEEADDRESS` |
//! | `LowerCase` | `employee_name` | `employeeaddress` |

use convert_case::{Case, Casing};

/// Identifier to database name conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NamingConvention {
    /// Use the identifier unchanged.
    #[default]
    None,

    /// `snake_case` in upper case.
    SnakeUpperCase,

    /// `snake_case` in lower case.
    SnakeLowerCase,

    /// Upper case, word boundaries kept as written.
    UpperCase,

    /// Lower case, word boundaries kept as written.
    LowerCase
}

impl NamingConvention {
    /// Apply the convention to an identifier.
    #[must_use]
    pub fn apply(&self, name: &str) -> String {
        match self {
            Self::None => name.to_string(),
            Self::SnakeUpperCase => name.to_case(Case::Snake).to_uppercase(),
            Self::SnakeLowerCase => name.to_case(Case::Snake),
            Self::UpperCase => name.to_uppercase(),
            Self::LowerCase => name.to_lowercase()
        }
    }

    /// Attribute spelling of the convention.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::SnakeUpperCase => "snake_upper_case",
            Self::SnakeLowerCase => "snake_lower_case",
            Self::UpperCase => "upper_case",
            Self::LowerCase => "lower_case"
        }
    }
}
