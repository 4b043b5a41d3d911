//! # Metadata module
//!
//! ## Description
//! Vertices carry an opaque, caller-owned metadata mapping that the core never
//! interprets. This module provides [`Metadata`], a cheap-to-clone handle around
//! a key-to-value map of dynamically typed, type-erased values.
//!
//! ## Details
//! A cloned [`Metadata`] shares the same underlying map as its source (clone is an
//! `Arc` bump, not a deep copy) — this is what "shallow copy of the metadata
//! reference" means for [`Graph::clone`][crate::Graph] and the derived views: two
//! `Vertex` records that descend from the same `add_vertex` call observe each
//! other's metadata writes.
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use parking_lot::RwLock;

// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * METADATA VALUE                                                                    *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *

/// A single type-erased metadata value. Safe to downcast via [`Metadata::get`].
pub type MetadataValue = Arc<dyn Any + Send + Sync>;

type MetadataMap = HashMap<String, MetadataValue>;

// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * METADATA                                                                          *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *

/// # Opaque vertex metadata
///
/// ## Description
/// A key-to-arbitrary-value mapping owned by the caller. The core stores it,
/// copies the handle on clone, and never reads or mutates its contents.
#[derive(Clone, Default)]
pub struct Metadata(Arc<RwLock<MetadataMap>>);

impl Metadata {
    /// Create an empty metadata map.
    pub fn new() -> Self {
        Self(Arc::new(RwLock::new(HashMap::new())))
    }

    /// Insert or overwrite a value under `key`.
    pub fn set<K>(&self, key: K, value: MetadataValue)
    where
        K: Into<String>,
    {
        self.0.write().insert(key.into(), value);
    }

    /// Fetch the raw, type-erased value stored under `key`.
    pub fn get_raw(&self, key: &str) -> Option<MetadataValue> {
        self.0.read().get(key).cloned()
    }

    /// Fetch and downcast the value stored under `key`. Returns `None` if the key
    /// is absent or the stored value is not a `T`.
    pub fn get<T: Any + Send + Sync>(&self, key: &str) -> Option<Arc<T>> {
        self.get_raw(key).and_then(|value| value.downcast::<T>().ok())
    }

    /// Remove and return the value previously stored under `key`, if any.
    pub fn remove(&self, key: &str) -> Option<MetadataValue> {
        self.0.write().remove(key)
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    /// Whether the metadata map currently holds no entries.
    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }

    /// Collect the currently stored keys into a freshly allocated vector.
    pub fn keys(&self) -> Vec<String> {
        self.0.read().keys().cloned().collect()
    }
}

impl std::fmt::Debug for Metadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metadata").field("len", &self.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_roundtrip() {
        let metadata = Metadata::new();
        metadata.set("label", Arc::new(String::from("hub")));
        assert_eq!(metadata.get::<String>("label").map(|v| (*v).clone()), Some("hub".to_string()));
    }

    #[test]
    fn downcast_mismatch_returns_none() {
        let metadata = Metadata::new();
        metadata.set("label", Arc::new(42u32));
        assert!(metadata.get::<String>("label").is_none());
    }

    #[test]
    fn clone_shares_underlying_map() {
        let metadata = Metadata::new();
        let handle = metadata.clone();
        handle.set("weight", Arc::new(7i64));
        assert_eq!(metadata.get::<i64>("weight").map(|v| *v), Some(7));
    }

    #[test]
    fn remove_deletes_entry() {
        let metadata = Metadata::new();
        metadata.set("k", Arc::new(1u8));
        assert!(metadata.remove("k").is_some());
        assert!(metadata.get::<u8>("k").is_none());
    }
}
