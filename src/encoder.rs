//! Main encoding entry point for forcewire.
//!
//! This module provides the `Encoder` struct, which owns the encoding
//! configuration and hands records to the XML and CSV encoders.

use crate::error::Result;
use forcewire_core::SObject;
use forcewire_wire::{CsvEncoder, DescriptorRegistry, XmlEncoder, SOBJECT_NAMESPACE};
use std::borrow::Cow;
use std::io::Write;
use std::sync::Arc;

/// Encoder for CRM records.
///
/// Create one with [`Encoder::new`] for the defaults or [`Encoder::builder`]
/// to configure the namespace or descriptor registry. An `Encoder` is cheap
/// to clone and safe to share across threads.
///
/// # Example
///
/// ```ignore
/// use forcewire::prelude::*;
///
/// let encoder = Encoder::new();
///
/// account.operation = OperationKind::Update;
/// let envelope_body = encoder.to_xml(&account)?;
/// let export_row = encoder.to_csv_row(&account)?;
/// ```
#[derive(Debug, Clone)]
pub struct Encoder {
    registry: Registry,
    namespace: Cow<'static, str>,
}

#[derive(Debug, Clone)]
enum Registry {
    Global,
    Shared(Arc<DescriptorRegistry>),
}

impl Encoder {
    /// Create an encoder with the default settings.
    ///
    /// Uses the process-wide descriptor registry and the partner sObject
    /// namespace.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for encoder configuration.
    pub fn builder() -> EncoderBuilder {
        EncoderBuilder::new()
    }

    /// The descriptor registry this encoder resolves fields through.
    pub fn registry(&self) -> &DescriptorRegistry {
        match &self.registry {
            Registry::Global => DescriptorRegistry::global(),
            Registry::Shared(registry) => registry.as_ref(),
        }
    }

    /// Namespace written on XML field elements.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Encode a record as the body of an XML `sObjects` element.
    ///
    /// # Errors
    ///
    /// Fails when the record type's field metadata is unusable.
    pub fn to_xml<T: SObject>(&self, record: &T) -> Result<String> {
        Ok(self.xml_encoder().encode(record)?)
    }

    /// Stream the XML fragment for a record into `sink`.
    pub fn write_xml<T: SObject, W: Write>(&self, record: &T, sink: W) -> Result<()> {
        Ok(self.xml_encoder().encode_to_writer(record, sink)?)
    }

    /// Encode a record as one bulk-export CSV row.
    pub fn to_csv_row<T: SObject>(&self, record: &T) -> Result<String> {
        Ok(CsvEncoder::new(self.registry()).encode_row(record)?)
    }

    /// Encode records as CSV rows separated by `\n`.
    ///
    /// No header row and no trailing newline are written.
    pub fn to_csv_rows<'a, T, I>(&self, records: I) -> Result<String>
    where
        T: SObject,
        I: IntoIterator<Item = &'a T>,
    {
        Ok(CsvEncoder::new(self.registry()).encode_rows(records)?)
    }

    fn xml_encoder(&self) -> XmlEncoder<'_> {
        XmlEncoder::new(self.registry()).with_namespace(self.namespace.clone())
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for encoder configuration.
///
/// # Example
///
/// ```ignore
/// // Isolated registry, e.g. per test
/// let encoder = Encoder::builder()
///     .registry(Arc::new(DescriptorRegistry::new()))
///     .build();
///
/// // Enterprise API namespace
/// let encoder = Encoder::builder()
///     .namespace("urn:enterprise.soap.sforce.com")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct EncoderBuilder {
    registry: Registry,
    namespace: Cow<'static, str>,
}

impl EncoderBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            registry: Registry::Global,
            namespace: Cow::Borrowed(SOBJECT_NAMESPACE),
        }
    }

    /// Namespace for XML field and `fieldsToNull` elements.
    pub fn namespace(mut self, namespace: impl Into<Cow<'static, str>>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Resolve descriptors through `registry` instead of the global one.
    pub fn registry(mut self, registry: Arc<DescriptorRegistry>) -> Self {
        self.registry = Registry::Shared(registry);
        self
    }

    /// Use the process-wide registry (default).
    pub fn global_registry(mut self) -> Self {
        self.registry = Registry::Global;
        self
    }

    /// Build the encoder.
    pub fn build(self) -> Encoder {
        tracing::debug!(
            namespace = %self.namespace,
            shared_registry = matches!(self.registry, Registry::Shared(_)),
            "encoder configured"
        );
        Encoder {
            registry: self.registry,
            namespace: self.namespace,
        }
    }
}

impl Default for EncoderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
