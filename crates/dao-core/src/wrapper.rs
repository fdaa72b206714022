// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Typed value holders for basic column values.
//!
//! A [`Wrapper`] owns one runtime value of a basic type together with its
//! scalar conversion and textual rendering. Property descriptors hold their
//! wrapper through the object-safe [`AnyWrapper`] view, so row mapping and
//! statement building never need to know the concrete Rust type.
//!
//! # Basic Types
//!
//! | Rust type | [`BasicKind`] | Alias |
//! |-----------|---------------|-------|
//! | `bool` | `Bool` | [`BoolWrapper`] |
//! | `i16` | `I16` | [`I16Wrapper`] |
//! | `i32` | `I32` | [`I32Wrapper`] |
//! | `i64` | `I64` | [`I64Wrapper`] |
//! | `f32` | `F32` | [`F32Wrapper`] |
//! | `f64` | `F64` | [`F64Wrapper`] |
//! | `String` | `String` | [`StringWrapper`] |
//! | `Vec<u8>` | `Bytes` | [`BytesWrapper`] |
//! | `chrono::NaiveDate` | `Date` | [`DateWrapper`] |
//! | `chrono::NaiveTime` | `Time` | [`TimeWrapper`] |
//! | `chrono::NaiveDateTime` | `DateTime` | [`DateTimeWrapper`] |
//! | `uuid::Uuid` | `Uuid` | [`UuidWrapper`] |

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use uuid::Uuid;

/// Tag identifying the basic type held by a wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicKind {
    /// `bool`.
    Bool,
    /// `i16`.
    I16,
    /// `i32`.
    I32,
    /// `i64`.
    I64,
    /// `f32`.
    F32,
    /// `f64`.
    F64,
    /// `String`.
    String,
    /// `Vec<u8>`.
    Bytes,
    /// `chrono::NaiveDate`.
    Date,
    /// `chrono::NaiveTime`.
    Time,
    /// `chrono::NaiveDateTime`.
    DateTime,
    /// `uuid::Uuid`.
    Uuid
}

impl BasicKind {
    /// Rust spelling of the type.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::String => "String",
            Self::Bytes => "Vec<u8>",
            Self::Date => "NaiveDate",
            Self::Time => "NaiveTime",
            Self::DateTime => "NaiveDateTime",
            Self::Uuid => "Uuid"
        }
    }

    /// Check if this kind is an integer or floating point type.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::I16 | Self::I32 | Self::I64 | Self::F32 | Self::F64
        )
    }

    /// Check if this kind is a date or time type.
    #[must_use]
    pub const fn is_temporal(&self) -> bool {
        matches!(self, Self::Date | Self::Time | Self::DateTime)
    }
}

impl fmt::Display for BasicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Type-erased basic value.
///
/// Absence of a value is expressed as `Option<ScalarValue>` by the wrapper
/// API, so every variant here carries data.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    /// Boolean value.
    Bool(bool),
    /// 16-bit integer.
    I16(i16),
    /// 32-bit integer.
    I32(i32),
    /// 64-bit integer.
    I64(i64),
    /// 32-bit float.
    F32(f32),
    /// 64-bit float.
    F64(f64),
    /// UTF-8 text.
    String(String),
    /// Binary data.
    Bytes(Vec<u8>),
    /// Calendar date.
    Date(NaiveDate),
    /// Time of day.
    Time(NaiveTime),
    /// Date and time without offset.
    DateTime(NaiveDateTime),
    /// UUID.
    Uuid(Uuid)
}

impl ScalarValue {
    /// Kind of the held value.
    #[must_use]
    pub const fn kind(&self) -> BasicKind {
        match self {
            Self::Bool(_) => BasicKind::Bool,
            Self::I16(_) => BasicKind::I16,
            Self::I32(_) => BasicKind::I32,
            Self::I64(_) => BasicKind::I64,
            Self::F32(_) => BasicKind::F32,
            Self::F64(_) => BasicKind::F64,
            Self::String(_) => BasicKind::String,
            Self::Bytes(_) => BasicKind::Bytes,
            Self::Date(_) => BasicKind::Date,
            Self::Time(_) => BasicKind::Time,
            Self::DateTime(_) => BasicKind::DateTime,
            Self::Uuid(_) => BasicKind::Uuid
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::String(v) => f.write_str(v),
            Self::Bytes(v) => {
                f.write_str("0x")?;
                for byte in v {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
            Self::Date(v) => write!(f, "{v}"),
            Self::Time(v) => write!(f, "{v}"),
            Self::DateTime(v) => write!(f, "{v}"),
            Self::Uuid(v) => write!(f, "{v}")
        }
    }
}

/// Error raised when converting a scalar into a wrapper's value type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WrapperError {
    /// The scalar holds a different basic kind than the wrapper.
    #[error("cannot store a {actual} value in a {expected} wrapper")]
    KindMismatch {
        /// Kind accepted by the wrapper.
        expected: BasicKind,
        /// Kind of the offered scalar.
        actual:   BasicKind
    }
}

/// A Rust type with a direct scalar conversion.
pub trait BasicValue: Clone + fmt::Debug + Send + Sync + 'static {
    /// Kind tag of this type.
    const KIND: BasicKind;

    /// Convert into the type-erased scalar.
    fn into_scalar(self) -> ScalarValue;

    /// Convert back from a scalar of the same kind.
    ///
    /// # Errors
    ///
    /// Returns [`WrapperError::KindMismatch`] if the scalar holds another
    /// kind.
    fn from_scalar(value: ScalarValue) -> Result<Self, WrapperError>;
}

macro_rules! basic_value {
    ($($ty:ty => $kind:ident),* $(,)?) => {$(
        impl BasicValue for $ty {
            const KIND: BasicKind = BasicKind::$kind;

            fn into_scalar(self) -> ScalarValue {
                ScalarValue::$kind(self)
            }

            fn from_scalar(value: ScalarValue) -> Result<Self, WrapperError> {
                match value {
                    ScalarValue::$kind(v) => Ok(v),
                    other => Err(WrapperError::KindMismatch {
                        expected: BasicKind::$kind,
                        actual:   other.kind()
                    })
                }
            }
        }
    )*};
}

basic_value! {
    bool => Bool,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    String => String,
    Vec<u8> => Bytes,
    NaiveDate => Date,
    NaiveTime => Time,
    NaiveDateTime => DateTime,
    Uuid => Uuid,
}

/// Owned holder for one basic value.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveTime;
/// use dao_core::{AnyWrapper, BasicKind, TimeWrapper};
///
/// let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
/// let mut wrapper = TimeWrapper::with_value(noon);
/// assert_eq!(wrapper.kind(), BasicKind::Time);
/// assert_eq!(wrapper.to_string(), "12:00:00");
///
/// wrapper.set(None);
/// assert_eq!(wrapper.to_string(), "null");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Wrapper<T> {
    value: Option<T>
}

impl<T: BasicValue> Wrapper<T> {
    /// Create an empty wrapper.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: None
        }
    }

    /// Create a wrapper holding `value`.
    #[must_use]
    pub const fn with_value(value: T) -> Self {
        Self {
            value: Some(value)
        }
    }

    /// Create a wrapper from a nullable value.
    #[must_use]
    pub const fn from_option(value: Option<T>) -> Self {
        Self {
            value
        }
    }

    /// Borrow the held value.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Replace the held value.
    pub fn set(&mut self, value: Option<T>) {
        self.value = value;
    }

    /// Take the held value, leaving the wrapper empty.
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Consume the wrapper and return its value.
    #[must_use]
    pub fn into_inner(self) -> Option<T> {
        self.value
    }
}

impl<T: BasicValue> Default for Wrapper<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: BasicValue> fmt::Display for Wrapper<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => fmt::Display::fmt(&value.clone().into_scalar(), f),
            None => f.write_str("null")
        }
    }
}

/// Object-safe view of a [`Wrapper`].
///
/// Consumers see only the kind tag, scalar get/set and the textual
/// rendering through `Display`.
pub trait AnyWrapper: fmt::Debug + fmt::Display + Send + Sync {
    /// Kind of the value this wrapper accepts.
    fn kind(&self) -> BasicKind;

    /// Current value as a scalar, `None` when empty.
    fn scalar(&self) -> Option<ScalarValue>;

    /// Replace the current value from a scalar.
    ///
    /// # Errors
    ///
    /// Returns [`WrapperError::KindMismatch`] when the scalar kind differs
    /// from [`AnyWrapper::kind`]. The held value is left unchanged.
    fn set_scalar(&mut self, value: Option<ScalarValue>) -> Result<(), WrapperError>;

    /// Check if the wrapper is empty.
    fn is_null(&self) -> bool {
        self.scalar().is_none()
    }
}

impl<T: BasicValue> AnyWrapper for Wrapper<T> {
    fn kind(&self) -> BasicKind {
        T::KIND
    }

    fn scalar(&self) -> Option<ScalarValue> {
        self.value.clone().map(BasicValue::into_scalar)
    }

    fn set_scalar(&mut self, value: Option<ScalarValue>) -> Result<(), WrapperError> {
        self.value = value.map(T::from_scalar).transpose()?;
        Ok(())
    }

    fn is_null(&self) -> bool {
        self.value.is_none()
    }
}

/// Wrapper for `bool`.
pub type BoolWrapper = Wrapper<bool>;
/// Wrapper for `i16`.
pub type I16Wrapper = Wrapper<i16>;
/// Wrapper for `i32`.
pub type I32Wrapper = Wrapper<i32>;
/// Wrapper for `i64`.
pub type I64Wrapper = Wrapper<i64>;
/// Wrapper for `f32`.
pub type F32Wrapper = Wrapper<f32>;
/// Wrapper for `f64`.
pub type F64Wrapper = Wrapper<f64>;
/// Wrapper for `String`.
pub type StringWrapper = Wrapper<String>;
/// Wrapper for `Vec<u8>`.
pub type BytesWrapper = Wrapper<Vec<u8>>;
/// Wrapper for `chrono::NaiveDate`.
pub type DateWrapper = Wrapper<NaiveDate>;
/// Wrapper for `chrono::NaiveTime`.
pub type TimeWrapper = Wrapper<NaiveTime>;
/// Wrapper for `chrono::NaiveDateTime`.
pub type DateTimeWrapper = Wrapper<NaiveDateTime>;
/// Wrapper for `uuid::Uuid`.
pub type UuidWrapper = Wrapper<Uuid>;
