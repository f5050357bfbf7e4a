//! Text forms shared by the XML and CSV encoders

use base64::Engine;
use chrono::{DateTime, Utc};
use forcewire_core::FieldValue;
use std::borrow::Cow;

/// Date-time layout expected by the API: UTC, second precision, literal `Z`
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Format an instant as `yyyy-MM-ddTHH:mm:ssZ` in UTC
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

/// Standard base64 of a binary payload
pub fn encode_base64(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

/// Default text form of a value
///
/// Text is returned as-is; numbers and booleans use their `Display` form.
pub fn default_text<'v>(value: &'v FieldValue<'_>) -> Cow<'v, str> {
    match value {
        FieldValue::Text(s) => Cow::Borrowed(s.as_ref()),
        FieldValue::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        FieldValue::Int(i) => Cow::Owned(i.to_string()),
        FieldValue::Float(f) => Cow::Owned(f.to_string()),
        FieldValue::DateTime(dt) => Cow::Owned(format_datetime(dt)),
        FieldValue::Bytes(b) => Cow::Owned(encode_base64(b)),
    }
}
