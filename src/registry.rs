//! The variant registry: caller-owned resolution of polymorphic tuples.

use std::collections::HashMap;

use crate::schema::{Record, RecordShape};

/// Maps a variant name (the first atom of a tuple) to the record type that
/// decodes it.
///
/// The registry has an explicit lifecycle: construct it, register every
/// variant the documents may contain, then pass it by reference into the
/// decode/encode/merge calls. It is read-only during a pass and is never
/// mutated by the codec. It carries no interior synchronization; callers
/// sharing one across threads must add their own locking and must not
/// register concurrently with a running pass.
///
/// An empty registry leaves polymorphic fields unresolvable: a polymorphic
/// list decode stops at the first unresolved variant, and top-level
/// statements with unregistered names are dropped without error.
///
/// ```rust
/// use erlterm::{records, Registry};
///
/// records! {
///     #[derive(Debug, Default)]
///     pub struct Fruit {
///         name: String => "string",
///         count: i64 => "int",
///     }
/// }
///
/// let mut registry = Registry::new();
/// registry.register::<Fruit>("fruit");
/// assert!(registry.contains("fruit"));
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    variants: HashMap<String, RecordShape>,
}

impl Registry {
    pub fn new() -> Self {
        Registry {
            variants: HashMap::new(),
        }
    }

    /// Register record type `R` under `name`. A repeated name replaces the
    /// earlier entry.
    pub fn register<R: Record + Default>(&mut self, name: impl Into<String>) {
        self.variants.insert(name.into(), RecordShape::of::<R>());
    }

    /// Whether a variant is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.variants.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub(crate) fn get(&self, name: &str) -> Option<&RecordShape> {
        self.variants.get(name)
    }
}
