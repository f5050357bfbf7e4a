//! Record model: field declarations and the [`SObject`] trait
//!
//! A record type registers its fields once, as a static table of
//! [`FieldDescriptor`]s in declaration order. Encoders never inspect types at
//! runtime; they walk that table and pull values through
//! [`SObject::field_value`].

use crate::types::{FieldKind, FilterFlags, OperationKind};
use crate::value::FieldValue;

/// Declared metadata for one field of a record type
///
/// Immutable and free of per-instance state, so one table serves every
/// record of the type.
///
/// # Examples
///
/// ```
/// use forcewire_core::{FieldDescriptor, FieldKind, FilterFlags};
///
/// const FIELDS: &[FieldDescriptor] = &[
///     FieldDescriptor::new("name", FieldKind::Text).wire_name("Name"),
///     FieldDescriptor::new("created_date", FieldKind::DateTime)
///         .wire_name("CreatedDate")
///         .flags(FilterFlags::READONLY),
/// ];
///
/// assert_eq!(FIELDS[0].wire(), "Name");
/// assert!(FIELDS[1].is_readonly());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    name: &'static str,
    wire_name: &'static str,
    kind: FieldKind,
    flags: FilterFlags,
}

impl FieldDescriptor {
    /// Declare a field whose wire name equals its identifier and has no rules
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            wire_name: name,
            kind,
            flags: FilterFlags::NONE,
        }
    }

    /// Override the name used in serialized output
    pub const fn wire_name(mut self, wire_name: &'static str) -> Self {
        self.wire_name = wire_name;
        self
    }

    /// Attach filter rules
    pub const fn flags(mut self, flags: FilterFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Identifier passed to [`SObject::field_value`]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Name used in serialized output
    pub fn wire(&self) -> &'static str {
        self.wire_name
    }

    /// Declared semantic type
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Declared filter rules
    pub fn filter_flags(&self) -> FilterFlags {
        self.flags
    }

    /// True when no XML filter option is declared
    pub fn is_unfiltered(&self) -> bool {
        !self.flags.intersects(FilterFlags::FILTER_OPTIONS)
    }

    /// Skip the field when it has no value
    pub fn ignore_if_null(&self) -> bool {
        self.flags.contains(FilterFlags::IGNORE_IF_NULL)
    }

    /// Send the field on insert only
    pub fn save_on_insert_only(&self) -> bool {
        self.flags.contains(FilterFlags::SAVE_ON_INSERT_ONLY)
    }

    /// Server-computed field
    pub fn is_readonly(&self) -> bool {
        self.flags.contains(FilterFlags::READONLY)
    }

    /// Bookkeeping field, never sent
    pub fn is_ignored(&self) -> bool {
        self.flags.contains(FilterFlags::IGNORE)
    }

    /// Whether an absent value for this field should be cleared server-side
    ///
    /// True for unfiltered fields, for fields that do not ask to be ignored
    /// when null, and for insert-only fields while inserting.
    pub fn clears_when_absent(&self, operation: OperationKind) -> bool {
        self.is_unfiltered()
            || !self.ignore_if_null()
            || (operation.is_insert() && self.save_on_insert_only())
    }
}

/// A record type that can be encoded for the CRM API
///
/// Implementations provide a static field table and a by-name accessor.
///
/// # Examples
///
/// ```
/// use forcewire_core::{FieldDescriptor, FieldKind, FieldValue, OperationKind, SObject};
///
/// struct Contact {
///     id: Option<String>,
///     last_name: Option<String>,
///     operation: OperationKind,
/// }
///
/// impl SObject for Contact {
///     const TYPE_NAME: &'static str = "Contact";
///
///     fn field_descriptors() -> &'static [FieldDescriptor] {
///         const FIELDS: &[FieldDescriptor] = &[
///             FieldDescriptor::new("Id", FieldKind::Text),
///             FieldDescriptor::new("LastName", FieldKind::Text),
///         ];
///         FIELDS
///     }
///
///     fn id(&self) -> Option<&str> {
///         self.id.as_deref()
///     }
///
///     fn operation(&self) -> OperationKind {
///         self.operation
///     }
///
///     fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
///         match name {
///             "Id" => self.id.as_ref().map(FieldValue::from),
///             "LastName" => self.last_name.as_ref().map(FieldValue::from),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait SObject: 'static {
    /// Type name written in the `<type>` element
    const TYPE_NAME: &'static str;

    /// Field table in declaration order
    ///
    /// Must return the same table on every call.
    fn field_descriptors() -> &'static [FieldDescriptor];

    /// Server-side identifier, if the record has one
    fn id(&self) -> Option<&str>;

    /// The operation this record is being sent for
    fn operation(&self) -> OperationKind;

    /// Current value of the field with identifier `name`
    ///
    /// `None` means the field has no value.
    fn field_value(&self, name: &str) -> Option<FieldValue<'_>>;
}
