//! Field values as seen by the encoders
//!
//! [`FieldValue`] is the closed set of value kinds a record accessor can hand
//! back. Absence is not a variant: accessors return `Option<FieldValue>` and
//! `None` is the only thing treated as "no value". Empty text, `0` and
//! `false` are present values.

use crate::types::FieldKind;
use chrono::{DateTime, TimeZone, Utc};
use std::borrow::Cow;

/// A present field value
///
/// Text and bytes borrow from the record when they can.
///
/// Date-times are converted to UTC on construction, so two values naming the
/// same instant in different offsets are equal.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    /// UTF-8 text
    Text(Cow<'a, str>),
    /// Boolean
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point
    Float(f64),
    /// Instant in time, normalized to UTC
    DateTime(DateTime<Utc>),
    /// Raw binary payload
    Bytes(Cow<'a, [u8]>),
}

impl<'a> FieldValue<'a> {
    /// The semantic kind of this value
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Bool(_) => FieldKind::Bool,
            FieldValue::Int(_) => FieldKind::Int,
            FieldValue::Float(_) => FieldKind::Float,
            FieldValue::DateTime(_) => FieldKind::DateTime,
            FieldValue::Bytes(_) => FieldKind::Bytes,
        }
    }

    /// Try to get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as byte slice
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            FieldValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get as UTC date-time
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Detach from the record's lifetime
    pub fn into_owned(self) -> FieldValue<'static> {
        match self {
            FieldValue::Text(s) => FieldValue::Text(Cow::Owned(s.into_owned())),
            FieldValue::Bool(b) => FieldValue::Bool(b),
            FieldValue::Int(i) => FieldValue::Int(i),
            FieldValue::Float(f) => FieldValue::Float(f),
            FieldValue::DateTime(dt) => FieldValue::DateTime(dt),
            FieldValue::Bytes(b) => FieldValue::Bytes(Cow::Owned(b.into_owned())),
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(s: &'a str) -> Self {
        FieldValue::Text(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(s: &'a String) -> Self {
        FieldValue::Text(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for FieldValue<'static> {
    fn from(s: String) -> Self {
        FieldValue::Text(Cow::Owned(s))
    }
}

impl From<bool> for FieldValue<'static> {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<i32> for FieldValue<'static> {
    fn from(i: i32) -> Self {
        FieldValue::Int(i64::from(i))
    }
}

impl From<i64> for FieldValue<'static> {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<f64> for FieldValue<'static> {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for FieldValue<'static> {
    fn from(dt: DateTime<Tz>) -> Self {
        FieldValue::DateTime(dt.with_timezone(&Utc))
    }
}

impl<'a> From<&'a [u8]> for FieldValue<'a> {
    fn from(b: &'a [u8]) -> Self {
        FieldValue::Bytes(Cow::Borrowed(b))
    }
}

impl<'a> From<&'a Vec<u8>> for FieldValue<'a> {
    fn from(b: &'a Vec<u8>) -> Self {
        FieldValue::Bytes(Cow::Borrowed(b.as_slice()))
    }
}

impl From<Vec<u8>> for FieldValue<'static> {
    fn from(b: Vec<u8>) -> Self {
        FieldValue::Bytes(Cow::Owned(b))
    }
}
