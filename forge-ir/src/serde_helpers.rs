//! Serde helpers for types whose wire form differs from their Rust shape.

use serde::{Serialize, Serializer};

use crate::StorageType;

/// Serialize a StorageType as its declaration string, or null when unspecified.
pub fn serialize_storage_type<S>(storage: &StorageType, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    storage.declaration().serialize(serializer)
}
