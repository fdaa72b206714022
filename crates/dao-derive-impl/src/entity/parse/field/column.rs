// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[column(...)]` options.
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `name` | field name through the entity naming convention | Column name |
//! | `insertable` | `true` | Include in `INSERT` |
//! | `updatable` | `true` | Include in `UPDATE` |

use darling::FromMeta;
use syn::{Attribute, Meta};

/// Returns `true`.
///
/// Used by darling for the `insertable` and `updatable` defaults.
fn default_true() -> bool {
    true
}

/// Parsed `#[column(...)]`.
#[derive(Debug, Clone, FromMeta)]
pub struct ColumnConfig {
    /// Explicit column name.
    #[darling(default)]
    pub name: Option<String>,

    /// Include in `INSERT` statements.
    #[darling(default = "default_true")]
    pub insertable: bool,

    /// Include in `UPDATE` statements.
    #[darling(default = "default_true")]
    pub updatable: bool
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            name:       None,
            insertable: true,
            updatable:  true
        }
    }
}

impl ColumnConfig {
    /// Parse a bare `#[column]` or a `#[column(...)]` list.
    ///
    /// # Errors
    ///
    /// Returns error for unknown options and malformed values.
    pub fn from_attr(attr: &Attribute) -> darling::Result<Self> {
        match &attr.meta {
            Meta::Path(_) => Ok(Self::default()),
            Meta::List(_) | Meta::NameValue(_) => Self::from_meta(&attr.meta)
        }
    }
}
