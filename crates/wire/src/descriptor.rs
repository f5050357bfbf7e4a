//! Descriptor resolution and caching
//!
//! Resolves the ordered list of fields an encoder should walk for a record
//! type under a given [`FieldFilter`], and caches it.
//!
//! # Design
//!
//! - DashMap keyed by `(TypeId, FieldFilter)`, Fx hasher
//! - Lists are built completely before being published through the entry
//!   API, so readers never see a partial list
//! - Racing first use may build a list twice; only one copy is published
//! - Metadata failures are returned to every caller and never cached

use crate::error::{EncodeError, Result};
use dashmap::DashMap;
use forcewire_core::{FieldDescriptor, FilterFlags, OperationKind, SObject};
use once_cell::sync::Lazy;
use rustc_hash::{FxHashSet, FxHasher};
use std::any::TypeId;
use std::hash::BuildHasherDefault;
use std::sync::Arc;

/// Shared, immutable list of descriptors in declaration order
pub type Descriptors = Arc<[FieldDescriptor]>;

/// Field selection applied when resolving descriptors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldFilter {
    /// Admit a field when every filter option it carries is in the mask
    ///
    /// Fields without filter options are always admitted. `READONLY` is not
    /// a filter option and does not affect admission.
    Permit(FilterFlags),
    /// Admit a field carrying none of the mask's flags
    Exclude(FilterFlags),
}

impl FieldFilter {
    /// Selection for bulk CSV export: no readonly or ignored fields
    pub const CSV: FieldFilter =
        FieldFilter::Exclude(FilterFlags::READONLY.union(FilterFlags::IGNORE));

    /// Selection for the XML envelope of `operation`
    ///
    /// Insert-only fields are visible only when inserting.
    pub fn xml(operation: OperationKind) -> Self {
        let mut mask = FilterFlags::IGNORE_IF_NULL;
        if operation.is_insert() {
            mask |= FilterFlags::SAVE_ON_INSERT_ONLY;
        }
        FieldFilter::Permit(mask)
    }

    /// Whether `field` passes this selection
    pub fn admits(&self, field: &FieldDescriptor) -> bool {
        let flags = field.filter_flags();
        match self {
            FieldFilter::Permit(mask) => flags
                .intersection(FilterFlags::FILTER_OPTIONS)
                .difference(*mask)
                .is_empty(),
            FieldFilter::Exclude(mask) => !flags.intersects(*mask),
        }
    }
}

type CacheKey = (TypeId, FieldFilter);

static GLOBAL: Lazy<DescriptorRegistry> = Lazy::new(DescriptorRegistry::new);

/// Resolver and cache of per-type descriptor lists
///
/// # Examples
///
/// ```ignore
/// use forcewire_wire::{DescriptorRegistry, FieldFilter};
///
/// let fields = DescriptorRegistry::global().resolve::<Account>(FieldFilter::CSV)?;
/// for field in fields.iter() {
///     println!("{}", field.wire());
/// }
/// ```
#[derive(Debug, Default)]
pub struct DescriptorRegistry {
    cache: DashMap<CacheKey, Descriptors, BuildHasherDefault<FxHasher>>,
}

impl DescriptorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry used when no other is configured
    pub fn global() -> &'static DescriptorRegistry {
        &GLOBAL
    }

    /// Resolve the descriptors of `T` admitted by `filter`
    ///
    /// Returns the cached list when present. Otherwise validates the type's
    /// declared metadata, builds the list and publishes it.
    ///
    /// # Errors
    ///
    /// [`EncodeError::Metadata`] when the type's declarations are unusable:
    /// an empty or malformed type name or wire name, or a duplicated field
    /// identifier.
    pub fn resolve<T: SObject>(&self, filter: FieldFilter) -> Result<Descriptors> {
        let key = (TypeId::of::<T>(), filter);
        if let Some(hit) = self.cache.get(&key) {
            return Ok(Arc::clone(hit.value()));
        }

        let built = build::<T>(filter).map_err(|err| {
            tracing::error!(type_name = T::TYPE_NAME, error = %err, "field metadata rejected");
            err
        })?;

        let published = self.cache.entry(key).or_insert_with(|| {
            tracing::debug!(
                type_name = T::TYPE_NAME,
                ?filter,
                fields = built.len(),
                "descriptor list published"
            );
            Arc::clone(&built)
        });
        Ok(Arc::clone(published.value()))
    }

    /// Number of cached lists
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Drop every cached list
    pub fn clear(&self) {
        self.cache.clear();
    }
}

fn build<T: SObject>(filter: FieldFilter) -> Result<Descriptors> {
    let type_name = T::TYPE_NAME;
    if !is_xml_name(type_name) {
        return Err(EncodeError::metadata(
            type_name,
            format!("type name {:?} is not a valid XML name", type_name),
        ));
    }

    let declared = T::field_descriptors();
    let mut seen = FxHashSet::default();
    for field in declared {
        if !seen.insert(field.name()) {
            return Err(EncodeError::metadata(
                type_name,
                format!("field `{}` is declared more than once", field.name()),
            ));
        }
        if field.wire().is_empty() {
            return Err(EncodeError::metadata(
                type_name,
                format!("field `{}` has an empty wire name", field.name()),
            ));
        }
        if !is_xml_name(field.wire()) {
            return Err(EncodeError::metadata(
                type_name,
                format!(
                    "wire name {:?} of field `{}` is not a valid XML name",
                    field.wire(),
                    field.name()
                ),
            ));
        }
    }

    Ok(declared
        .iter()
        .filter(|field| filter.admits(field))
        .copied()
        .collect())
}

/// Unprefixed XML element name check
fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
