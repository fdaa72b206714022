// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Mutable single-slot cell for output parameters.
//!
//! DAO methods declare `#[output]` and `#[in_out]` parameters as
//! `&mut Reference<T>` (or `Reference<T>`). The call implementation writes the
//! value returned by the database into the cell and the caller reads it back.
//!
//! ```rust
//! use dao_core::Reference;
//!
//! let mut count = Reference::<i32>::new();
//! assert!(count.get().is_none());
//!
//! count.set(42);
//! assert_eq!(count.get(), Some(&42));
//! assert_eq!(count.into_inner(), Some(42));
//! ```

/// Mutable output cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference<T> {
    value: Option<T>
}

impl<T> Reference<T> {
    /// Create an empty cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: None
        }
    }

    /// Create a cell holding an input value (for `#[in_out]` parameters).
    #[must_use]
    pub const fn with_value(value: T) -> Self {
        Self {
            value: Some(value)
        }
    }

    /// Borrow the current value.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Mutably borrow the current value.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    /// Store a value, replacing the previous one.
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    /// Remove and return the current value.
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Check if the cell holds a value.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Consume the cell and return its value.
    #[must_use]
    pub fn into_inner(self) -> Option<T> {
        self.value
    }
}

impl<T> Default for Reference<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<T> for Reference<T> {
    fn from(value: T) -> Self {
        Self::with_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_empty() {
        let cell = Reference::<String>::default();
        assert!(!cell.is_set());
        assert!(cell.get().is_none());
    }

    #[test]
    fn in_out_cell_is_overwritten() {
        let mut cell = Reference::from(10_i64);
        *cell.get_mut().unwrap() += 5;
        assert_eq!(cell.get(), Some(&15));

        cell.set(1);
        assert_eq!(cell.take(), Some(1));
        assert!(!cell.is_set());
    }
}
