//! SOAP XML fragment encoding for create/update/delete calls
//!
//! Produces the body of one `sObjects` element:
//!
//! ```xml
//! <type>Account</type>
//! <Name xmlns="urn:sobject.partner.soap.sforce.com">Acme</Name>
//! <Body>AP8=</Body>
//! <fieldsToNull xmlns="urn:sobject.partner.soap.sforce.com">Phone</fieldsToNull>
//! ```
//!
//! ## Field rules
//!
//! | Value | Emitted |
//! |-------|---------|
//! | absent, field clears when absent | wire name queued for `fieldsToNull` |
//! | absent, otherwise | nothing |
//! | date-time | UTC `yyyy-MM-ddTHH:mm:ssZ` in a namespaced element |
//! | bytes | base64 in an element without namespace |
//! | anything else | default text form in a namespaced element |
//!
//! `fieldsToNull` elements are written for every operation except insert.

use crate::descriptor::{DescriptorRegistry, FieldFilter};
use crate::error::Result;
use crate::text::{default_text, encode_base64};
use forcewire_core::{FieldValue, SObject};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::io::Write;

/// Namespace of sObject field elements in the partner API
pub const SOBJECT_NAMESPACE: &str = "urn:sobject.partner.soap.sforce.com";

const TYPE_ELEMENT: &str = "type";
const FIELDS_TO_NULL_ELEMENT: &str = "fieldsToNull";

/// Encode a record with the global registry and default namespace
pub fn encode_xml<T: SObject>(record: &T) -> Result<String> {
    XmlEncoder::new(DescriptorRegistry::global()).encode(record)
}

/// Encoder for the XML envelope body of one record
#[derive(Debug, Clone)]
pub struct XmlEncoder<'r> {
    registry: &'r DescriptorRegistry,
    namespace: Cow<'static, str>,
}

impl<'r> XmlEncoder<'r> {
    /// Create an encoder using the partner sObject namespace
    pub fn new(registry: &'r DescriptorRegistry) -> Self {
        Self {
            registry,
            namespace: Cow::Borrowed(SOBJECT_NAMESPACE),
        }
    }

    /// Use a different namespace for field and `fieldsToNull` elements
    pub fn with_namespace(mut self, namespace: impl Into<Cow<'static, str>>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Namespace written on field elements
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Encode `record` into an XML fragment string
    pub fn encode<T: SObject>(&self, record: &T) -> Result<String> {
        let mut buffer = Vec::new();
        self.encode_to_writer(record, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Stream the XML fragment for `record` into `sink`
    pub fn encode_to_writer<T: SObject, W: Write>(&self, record: &T, sink: W) -> Result<()> {
        let operation = record.operation();
        let fields = self.registry.resolve::<T>(FieldFilter::xml(operation))?;

        let mut writer = Writer::new(sink);
        write_element(&mut writer, TYPE_ELEMENT, None, T::TYPE_NAME)?;

        let mut fields_to_null: SmallVec<[&'static str; 8]> = SmallVec::new();
        let mut written = 0usize;

        for field in fields.iter() {
            let value = match record.field_value(field.name()) {
                Some(value) => value,
                None => {
                    if field.clears_when_absent(operation) && !fields_to_null.contains(&field.wire())
                    {
                        fields_to_null.push(field.wire());
                    }
                    continue;
                }
            };

            if value.kind() != field.kind() {
                tracing::trace!(
                    type_name = T::TYPE_NAME,
                    field = field.name(),
                    declared = field.kind().name(),
                    actual = value.kind().name(),
                    "value kind differs from declaration"
                );
            }

            match &value {
                FieldValue::Bytes(bytes) => {
                    write_element(&mut writer, field.wire(), None, &encode_base64(bytes))?;
                }
                other => {
                    write_element(
                        &mut writer,
                        field.wire(),
                        Some(self.namespace.as_ref()),
                        &default_text(other),
                    )?;
                }
            }
            written += 1;
        }

        tracing::trace!(
            type_name = T::TYPE_NAME,
            id = record.id().unwrap_or(""),
            %operation,
            fields = written,
            fields_to_null = fields_to_null.len(),
            "record encoded as XML"
        );

        if operation.is_insert() {
            return Ok(());
        }

        for wire_name in &fields_to_null {
            write_element(
                &mut writer,
                FIELDS_TO_NULL_ELEMENT,
                Some(self.namespace.as_ref()),
                wire_name,
            )?;
        }
        Ok(())
    }
}

fn write_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    namespace: Option<&str>,
    text: &str,
) -> Result<()> {
    let mut start = BytesStart::new(name);
    if let Some(ns) = namespace {
        start.push_attribute(("xmlns", ns));
    }
    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
