// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity with every field attribute and a generic parameter.

use chrono::NaiveDateTime;
use dao_derive::{BasicValue, Entity};
use uuid::Uuid;

#[derive(Entity)]
#[entity(table = "AUDIT_LOG", naming = "snake_upper_case")]
pub struct AuditLog<T: BasicValue> {
    #[id]
    pub id: Uuid,

    #[version]
    pub version: i64,

    #[column(name = "LOGGED_AT", updatable = false)]
    pub created_at: NaiveDateTime,

    #[column(insertable = false)]
    pub payload: Option<T>,

    #[transient]
    pub note: Option<String>
}

fn main() {
    assert_eq!(<AuditLog<String> as dao_derive::Entity>::TABLE_NAME, "AUDIT_LOG");
}
