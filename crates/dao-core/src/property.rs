// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Persistent entity property descriptors.
//!
//! One [`PropertyDescriptor`] describes one persistent field of an entity:
//! its name, storage column, typed value holder and statement flags. Row
//! mapping and statement building read descriptors; they never own them.
//!
//! # Kinds
//!
//! | [`PropertyKind`] | `is_id` | `is_version` | `is_transient` | Column |
//! |------------------|---------|--------------|----------------|--------|
//! | `Basic` | no | no | no | required |
//! | `Id` | yes | no | no | required |
//! | `Version` | no | yes | no | required |
//! | `Transient` | no | no | yes | none |
//!
//! Transient properties never take part in `INSERT` or `UPDATE` statements.
//!
//! # Column Names
//!
//! A non-transient property always ends up with a column name. When none is
//! given, [`ColumnPolicy`] decides: `Required` rejects the descriptor,
//! `Derive` applies a [`NamingConvention`] to the property name.

use std::fmt;

use crate::{naming::NamingConvention, wrapper::AnyWrapper};

/// Kind of a persistent property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PropertyKind {
    /// Regular column.
    #[default]
    Basic,

    /// Identity column.
    Id,

    /// Optimistic lock version column.
    Version,

    /// Field without a column.
    Transient
}

impl PropertyKind {
    /// Check if this is an identity property.
    #[must_use]
    pub const fn is_id(self) -> bool {
        matches!(self, Self::Id)
    }

    /// Check if this is a version property.
    #[must_use]
    pub const fn is_version(self) -> bool {
        matches!(self, Self::Version)
    }

    /// Check if this is a transient property.
    #[must_use]
    pub const fn is_transient(self) -> bool {
        matches!(self, Self::Transient)
    }
}

/// How to obtain a column name that was not given explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnPolicy {
    /// Missing column names are an error.
    #[default]
    Required,

    /// Derive the column name from the property name.
    Derive(NamingConvention)
}

/// Error building a property descriptor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
    /// A mandatory argument was absent.
    #[error("argument `{0}` is required")]
    MissingArgument(&'static str),

    /// A non-transient property has no column name.
    #[error("property `{property}` has no column name")]
    MissingColumn {
        /// Property name.
        property: String
    }
}

/// Descriptor of one persistent entity field.
///
/// # Example
///
/// ```rust
/// use dao_core::{PropertyDescriptor, StringWrapper};
///
/// let property = PropertyDescriptor::new(
///     "emp_name",
///     Some("EMP_NAME".to_string()),
///     StringWrapper::with_value("SMITH".to_string()),
///     true,
///     false
/// )
/// .unwrap();
///
/// assert_eq!(property.column_name(), Some("EMP_NAME"));
/// assert!(property.is_insertable());
/// assert!(!property.is_updatable());
/// assert!(!property.is_id());
/// assert_eq!(property.to_string(), "SMITH");
/// ```
#[derive(Debug)]
pub struct PropertyDescriptor {
    name:        String,
    column_name: Option<String>,
    wrapper:     Box<dyn AnyWrapper>,
    insertable:  bool,
    updatable:   bool,
    kind:        PropertyKind
}

impl PropertyDescriptor {
    /// Create a basic property.
    ///
    /// # Errors
    ///
    /// - [`PropertyError::MissingArgument`] if `name` is empty
    /// - [`PropertyError::MissingColumn`] if `column_name` is `None`
    pub fn new<W>(
        name: impl Into<String>,
        column_name: Option<String>,
        wrapper: W,
        insertable: bool,
        updatable: bool
    ) -> Result<Self, PropertyError>
    where
        W: AnyWrapper + 'static
    {
        let mut builder = Self::builder()
            .name(name)
            .wrapper(wrapper)
            .insertable(insertable)
            .updatable(updatable);
        if let Some(column_name) = column_name {
            builder = builder.column_name(column_name);
        }
        builder.build()
    }

    /// Start building a descriptor of any kind.
    #[must_use]
    pub fn builder() -> PropertyDescriptorBuilder {
        PropertyDescriptorBuilder::default()
    }

    /// Field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column name, `None` for transient properties.
    #[must_use]
    pub fn column_name(&self) -> Option<&str> {
        self.column_name.as_deref()
    }

    /// Value holder.
    #[must_use]
    pub fn wrapper(&self) -> &dyn AnyWrapper {
        self.wrapper.as_ref()
    }

    /// Mutable value holder, used when mapping a row into the entity.
    pub fn wrapper_mut(&mut self) -> &mut dyn AnyWrapper {
        self.wrapper.as_mut()
    }

    /// Check if the column belongs in `INSERT` statements.
    #[must_use]
    pub const fn is_insertable(&self) -> bool {
        self.insertable
    }

    /// Check if the column belongs in the `SET` clause of `UPDATE`.
    #[must_use]
    pub const fn is_updatable(&self) -> bool {
        self.updatable
    }

    /// Kind of this property.
    #[must_use]
    pub const fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// Check if this is an identity property.
    #[must_use]
    pub const fn is_id(&self) -> bool {
        self.kind.is_id()
    }

    /// Check if this is a version property.
    #[must_use]
    pub const fn is_version(&self) -> bool {
        self.kind.is_version()
    }

    /// Check if this is a transient property.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        self.kind.is_transient()
    }
}

impl fmt::Display for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.wrapper, f)
    }
}

/// Builder for [`PropertyDescriptor`].
///
/// `insertable` and `updatable` default to `true`, the kind to
/// [`PropertyKind::Basic`] and the column policy to
/// [`ColumnPolicy::Required`].
#[derive(Debug)]
pub struct PropertyDescriptorBuilder {
    name:          Option<String>,
    column_name:   Option<String>,
    wrapper:       Option<Box<dyn AnyWrapper>>,
    insertable:    bool,
    updatable:     bool,
    kind:          PropertyKind,
    column_policy: ColumnPolicy
}

impl Default for PropertyDescriptorBuilder {
    fn default() -> Self {
        Self {
            name:          None,
            column_name:   None,
            wrapper:       None,
            insertable:    true,
            updatable:     true,
            kind:          PropertyKind::Basic,
            column_policy: ColumnPolicy::Required
        }
    }
}

impl PropertyDescriptorBuilder {
    /// Set the field name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the column name.
    #[must_use]
    pub fn column_name(mut self, column_name: impl Into<String>) -> Self {
        self.column_name = Some(column_name.into());
        self
    }

    /// Set the value holder.
    #[must_use]
    pub fn wrapper<W>(self, wrapper: W) -> Self
    where
        W: AnyWrapper + 'static
    {
        self.boxed_wrapper(Box::new(wrapper))
    }

    /// Set an already boxed value holder.
    #[must_use]
    pub fn boxed_wrapper(mut self, wrapper: Box<dyn AnyWrapper>) -> Self {
        self.wrapper = Some(wrapper);
        self
    }

    /// Include the column in `INSERT` statements.
    #[must_use]
    pub fn insertable(mut self, insertable: bool) -> Self {
        self.insertable = insertable;
        self
    }

    /// Include the column in `UPDATE` statements.
    #[must_use]
    pub fn updatable(mut self, updatable: bool) -> Self {
        self.updatable = updatable;
        self
    }

    /// Set the property kind.
    #[must_use]
    pub fn kind(mut self, kind: PropertyKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set how a missing column name is handled.
    #[must_use]
    pub fn column_policy(mut self, policy: ColumnPolicy) -> Self {
        self.column_policy = policy;
        self
    }

    /// Validate and build the descriptor.
    ///
    /// # Errors
    ///
    /// - [`PropertyError::MissingArgument`] with `"name"` if the name is
    ///   absent or empty
    /// - [`PropertyError::MissingArgument`] with `"wrapper"` if no wrapper was
    ///   set
    /// - [`PropertyError::MissingColumn`] if a non-transient property has no
    ///   column name under [`ColumnPolicy::Required`]
    pub fn build(self) -> Result<PropertyDescriptor, PropertyError> {
        let name = self
            .name
            .filter(|name| !name.is_empty())
            .ok_or(PropertyError::MissingArgument("name"))?;
        let wrapper = self
            .wrapper
            .ok_or(PropertyError::MissingArgument("wrapper"))?;

        if self.kind.is_transient() {
            return Ok(PropertyDescriptor {
                name,
                column_name: None,
                wrapper,
                insertable: false,
                updatable: false,
                kind: self.kind
            });
        }

        let column_name = match (
            self.column_name.filter(|column| !column.is_empty()),
            self.column_policy
        ) {
            (Some(column), _) => column,
            (None, ColumnPolicy::Derive(naming)) => naming.apply(&name),
            (None, ColumnPolicy::Required) => {
                return Err(PropertyError::MissingColumn {
                    property: name
                });
            }
        };

        Ok(PropertyDescriptor {
            name,
            column_name: Some(column_name),
            wrapper,
            insertable: self.insertable,
            updatable: self.updatable,
            kind: self.kind
        })
    }
}
