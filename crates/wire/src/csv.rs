//! CSV row encoding for bulk export
//!
//! One record becomes one comma-joined row. Readonly and ignored fields are
//! left out. There is no header row.
//!
//! | Value | Rendered |
//! |-------|----------|
//! | absent | empty |
//! | empty text | empty |
//! | text | quoted, inner `"` doubled |
//! | date-time at the epoch sentinel | empty |
//! | date-time | quoted UTC `yyyy-MM-ddTHH:mm:ssZ` |
//! | anything else | default text form, unquoted |

use crate::descriptor::{DescriptorRegistry, FieldFilter};
use crate::error::Result;
use crate::text::{default_text, format_datetime};
use chrono::{DateTime, Utc};
use forcewire_core::{FieldValue, SObject};
use std::borrow::Cow;

/// Encode one record as a CSV row with the global registry
pub fn encode_csv_row<T: SObject>(record: &T) -> Result<String> {
    CsvEncoder::new(DescriptorRegistry::global()).encode_row(record)
}

/// Encoder for bulk-export CSV rows
#[derive(Debug, Clone, Copy)]
pub struct CsvEncoder<'r> {
    registry: &'r DescriptorRegistry,
}

impl<'r> CsvEncoder<'r> {
    /// Create an encoder backed by `registry`
    pub fn new(registry: &'r DescriptorRegistry) -> Self {
        Self { registry }
    }

    /// Encode `record` as one row, no trailing newline
    pub fn encode_row<T: SObject>(&self, record: &T) -> Result<String> {
        let fields = self.registry.resolve::<T>(FieldFilter::CSV)?;

        let cells: Vec<String> = fields
            .iter()
            .map(|field| match record.field_value(field.name()) {
                Some(value) => csv_value(&value).into_owned(),
                None => String::new(),
            })
            .collect();

        tracing::trace!(
            type_name = T::TYPE_NAME,
            id = record.id().unwrap_or(""),
            columns = cells.len(),
            "record encoded as CSV"
        );
        Ok(cells.join(","))
    }

    /// Encode every record as a row, rows separated by `\n`
    pub fn encode_rows<'a, T, I>(&self, records: I) -> Result<String>
    where
        T: SObject,
        I: IntoIterator<Item = &'a T>,
    {
        let rows = records
            .into_iter()
            .map(|record| self.encode_row(record))
            .collect::<Result<Vec<_>>>()?;
        Ok(rows.join("\n"))
    }
}

/// Render one present value as a CSV cell
pub fn csv_value<'v>(value: &'v FieldValue<'_>) -> Cow<'v, str> {
    match value {
        FieldValue::Text(s) if s.is_empty() => Cow::Borrowed(""),
        FieldValue::Text(s) => Cow::Owned(format!("\"{}\"", s.replace('"', "\"\""))),
        FieldValue::DateTime(dt) if is_zero_datetime(dt) => Cow::Borrowed(""),
        FieldValue::DateTime(dt) => Cow::Owned(format!("\"{}\"", format_datetime(dt))),
        other => default_text(other),
    }
}

/// Zero sentinel for date-times: the Unix epoch
fn is_zero_datetime(dt: &DateTime<Utc>) -> bool {
    *dt == DateTime::<Utc>::default()
}
