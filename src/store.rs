//! Identifier-indexed storage for mesh entities
//!
//! The mesh cross-references its entities by integer id instead of by direct
//! reference, so appends that relocate backing storage can never invalidate
//! anything. `IdStore` is the one container primitive behind the vertex,
//! line, and edge lists: append-with-returned-id, O(1) indexed access that
//! fails on a bad id, size query, clear, and insertion-ordered iteration.

use crate::types::EntityId;
use std::marker::PhantomData;

/// Generic append-only arena with insertion-order ids
///
/// Ids are handed out monotonically starting at the current size; only
/// `clear` ever invalidates them, there is no per-item removal.
#[derive(Debug, Clone)]
pub struct IdStore<I: EntityId, T> {
    items: Vec<T>,
    _id: PhantomData<I>,
}

impl<I: EntityId, T> IdStore<I, T> {
    /// Create a new empty store
    pub fn new() -> Self {
        IdStore {
            items: Vec::new(),
            _id: PhantomData,
        }
    }

    /// Create a store with preallocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        IdStore {
            items: Vec::with_capacity(capacity),
            _id: PhantomData,
        }
    }

    /// Append an item, returning its new id (`== len()` before the call)
    pub fn insert(&mut self, item: T) -> I {
        let id = I::from_index(self.items.len());
        self.items.push(item);
        id
    }

    /// Get an item by id, `None` if the id is out of range
    pub fn get(&self, id: I) -> Option<&T> {
        self.items.get(id.index())
    }

    /// Check whether an id is currently valid
    pub fn contains(&self, id: I) -> bool {
        id.index() < self.items.len()
    }

    /// Get the number of stored items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop all items, invalidating every previously returned id
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate over all items in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Iterate over `(id, item)` pairs in insertion order
    pub fn iter_with_ids(&self) -> impl Iterator<Item = (I, &T)> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| (I::from_index(index), item))
    }
}

impl<I: EntityId, T> Default for IdStore<I, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Vector2, VertexId};

    #[test]
    fn test_insert_returns_monotonic_ids() {
        let mut store: IdStore<VertexId, Vector2> = IdStore::new();
        let a = store.insert(Vector2::new(1.0, 1.0));
        let b = store.insert(Vector2::new(2.0, 2.0));
        assert_eq!(a, VertexId::new(0));
        assert_eq!(b, VertexId::new(1));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_get_out_of_range() {
        let mut store: IdStore<VertexId, Vector2> = IdStore::new();
        store.insert(Vector2::ZERO);
        assert!(store.get(VertexId::new(0)).is_some());
        assert!(store.get(VertexId::new(1)).is_none());
        assert!(!store.contains(VertexId::new(1)));
    }

    #[test]
    fn test_clear_restarts_ids() {
        let mut store: IdStore<VertexId, Vector2> = IdStore::new();
        store.insert(Vector2::ZERO);
        store.insert(Vector2::UNIT_X);
        store.clear();
        assert!(store.is_empty());

        let id = store.insert(Vector2::UNIT_Y);
        assert_eq!(id, VertexId::new(0));
    }

    #[test]
    fn test_iteration_order() {
        let mut store: IdStore<VertexId, Vector2> = IdStore::new();
        for i in 0..5 {
            store.insert(Vector2::new(i as f64, 0.0));
        }
        let xs: Vec<f64> = store.iter().map(|v| v.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0, 4.0]);

        for (id, item) in store.iter_with_ids() {
            assert_eq!(id.0 as f64, item.x);
        }
    }
}
