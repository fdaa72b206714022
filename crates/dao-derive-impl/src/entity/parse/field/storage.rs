// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Property kind markers for entity fields.
//!
//! | Attribute | Kind | Effect |
//! |-----------|------|--------|
//! | none | `Basic` | Regular column |
//! | `#[id]` | `Id` | Identity column |
//! | `#[version]` | `Version` | Optimistic lock counter, numeric |
//! | `#[transient]` | `Transient` | No column, never inserted or updated |
//!
//! `#[id]` and `#[version]` exclude each other and `#[transient]`.

use dao_core::PropertyKind;

/// Marker attributes found on a field.
#[derive(Debug, Default, Clone, Copy)]
pub struct StorageConfig {
    /// `#[id]`.
    pub is_id: bool,

    /// `#[version]`.
    pub is_version: bool,

    /// `#[transient]`.
    pub is_transient: bool
}

impl StorageConfig {
    /// Names of the markers that are set.
    #[must_use]
    pub fn markers(&self) -> Vec<&'static str> {
        [
            (self.is_id, "id"),
            (self.is_version, "version"),
            (self.is_transient, "transient")
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }

    /// Property kind, `None` when more than one marker is set.
    #[must_use]
    pub fn kind(&self) -> Option<PropertyKind> {
        match (self.is_id, self.is_version, self.is_transient) {
            (false, false, false) => Some(PropertyKind::Basic),
            (true, false, false) => Some(PropertyKind::Id),
            (false, true, false) => Some(PropertyKind::Version),
            (false, false, true) => Some(PropertyKind::Transient),
            _ => None
        }
    }
}
