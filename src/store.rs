// Copyright 2025 Cowboy AI, LLC.

//! Insertion-ordered in-memory storage shared by the services

use crate::entity::{DomainEntity, EntityId};
use crate::errors::{HotelError, HotelResult};
use indexmap::IndexMap;

/// In-memory collection of one entity type, keyed by id
///
/// Iteration follows insertion order; removal keeps the order of the
/// remaining entries. Reads hand out owned snapshots or shared references,
/// so a caller can never mutate the collection behind the owning service.
#[derive(Debug, Clone)]
pub struct EntityStore<E: DomainEntity> {
    entries: IndexMap<EntityId<E::Marker>, E>,
}

impl<E: DomainEntity> Default for EntityStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: DomainEntity> EntityStore<E> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Insert a new entity; fails with `DuplicateId` if the id is taken
    pub fn insert(&mut self, entity: E) -> HotelResult<()> {
        let id = entity.id();
        if self.entries.contains_key(&id) {
            return Err(HotelError::DuplicateId {
                entity_type: E::ENTITY_TYPE,
                id: id.value(),
            });
        }
        self.entries.insert(id, entity);
        Ok(())
    }

    /// Look up an entity
    pub fn find(&self, id: EntityId<E::Marker>) -> Option<&E> {
        self.entries.get(&id)
    }

    /// Look up an entity or fail with `NotFound`
    pub fn get(&self, id: EntityId<E::Marker>) -> HotelResult<&E> {
        self.entries
            .get(&id)
            .ok_or_else(|| HotelError::not_found(E::ENTITY_TYPE, id.value()))
    }

    /// Mutable lookup or `NotFound`
    pub fn get_mut(&mut self, id: EntityId<E::Marker>) -> HotelResult<&mut E> {
        self.entries
            .get_mut(&id)
            .ok_or_else(|| HotelError::not_found(E::ENTITY_TYPE, id.value()))
    }

    /// Whether an entity with this id is stored
    pub fn contains(&self, id: EntityId<E::Marker>) -> bool {
        self.entries.contains_key(&id)
    }

    /// Replace the entity with the same id in place, returning the old one
    pub fn replace(&mut self, entity: E) -> HotelResult<E> {
        let slot = self.get_mut(entity.id())?;
        Ok(std::mem::replace(slot, entity))
    }

    /// Remove and return an entity, keeping the order of the rest
    pub fn remove(&mut self, id: EntityId<E::Marker>) -> HotelResult<E> {
        self.entries
            .shift_remove(&id)
            .ok_or_else(|| HotelError::not_found(E::ENTITY_TYPE, id.value()))
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.entries.values()
    }

    /// Ids in insertion order
    pub fn ids(&self) -> impl Iterator<Item = EntityId<E::Marker>> + '_ {
        self.entries.keys().copied()
    }

    /// Owned copy of every entity in insertion order
    pub fn snapshot(&self) -> Vec<E> {
        self.entries.values().cloned().collect()
    }

    /// Owned copy of the entities matching `predicate`
    pub fn snapshot_where<P>(&self, mut predicate: P) -> Vec<E>
    where
        P: FnMut(&E) -> bool,
    {
        self.entries
            .values()
            .filter(|e| predicate(e))
            .cloned()
            .collect()
    }

    /// Number of stored entities
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
