// Copyright 2025 Cowboy AI, LLC.

//! Entity identity for rooms, reservations and users

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A typed entity ID using phantom types for type safety
///
/// Ids are plain positive integers chosen by the caller. The phantom type
/// parameter ensures that a room id can never be passed where a user id is
/// expected.
///
/// # Examples
///
/// ```rust
/// use hotel_domain::{RoomId, UserId};
///
/// let room = RoomId::new(101);
/// let user = UserId::new(3);
/// assert_eq!(room.value(), 101);
/// assert!(user.is_valid());
///
/// // These are different types - won't compile if mixed up:
/// // let _: RoomId = user; // ERROR!
/// assert!(!RoomId::new(0).is_valid());
/// ```
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId<T> {
    id: i64,
    #[serde(skip)]
    _phantom: PhantomData<T>,
}

impl<T> EntityId<T> {
    /// Wrap a raw id; validity is checked where the id is used
    pub const fn new(id: i64) -> Self {
        Self {
            id,
            _phantom: PhantomData,
        }
    }

    /// Get the underlying integer
    pub const fn value(&self) -> i64 {
        self.id
    }

    /// Ids must be strictly positive
    pub const fn is_valid(&self) -> bool {
        self.id > 0
    }
}

// Manual impls so the marker types need no derives of their own.
impl<T> Clone for EntityId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EntityId<T> {}

impl<T> PartialEq for EntityId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for EntityId<T> {}

impl<T> PartialOrd for EntityId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for EntityId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl<T> Hash for EntityId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T> fmt::Debug for EntityId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EntityId").field(&self.id).finish()
    }
}

impl<T> fmt::Display for EntityId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl<T> From<i64> for EntityId<T> {
    fn from(id: i64) -> Self {
        Self::new(id)
    }
}

impl<T> From<EntityId<T>> for i64 {
    fn from(id: EntityId<T>) -> Self {
        id.id
    }
}

/// Marker type for rooms
#[derive(Debug, Clone, Copy)]
pub struct RoomMarker;

/// Marker type for reservations
#[derive(Debug, Clone, Copy)]
pub struct ReservationMarker;

/// Marker type for user accounts
#[derive(Debug, Clone, Copy)]
pub struct UserMarker;

/// Id of a room in the catalog
pub type RoomId = EntityId<RoomMarker>;
/// Id of a reservation in the ledger
pub type ReservationId = EntityId<ReservationMarker>;
/// Id of an account in the directory
pub type UserId = EntityId<UserMarker>;

/// Trait for domain entities with identity
///
/// Implemented by every entity that a service stores, so the shared
/// [`EntityStore`](crate::store::EntityStore) can key and report on it.
pub trait DomainEntity: Clone {
    /// The marker type for this entity
    type Marker;

    /// Name used in error messages and logs
    const ENTITY_TYPE: &'static str;

    /// Get the entity's ID
    fn id(&self) -> EntityId<Self::Marker>;
}
