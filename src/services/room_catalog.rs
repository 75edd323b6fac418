// Copyright 2025 Cowboy AI, LLC.

//! Room catalog service

use crate::domain::Room;
use crate::entity::RoomId;
use crate::errors::{HotelError, HotelResult};
use crate::store::EntityStore;
use crate::validation::{is_valid_id, is_valid_string};
use tracing::{debug, info};

/// The authoritative collection of rooms
///
/// Enforces unique room ids and owns every availability transition.
#[derive(Debug, Clone, Default)]
pub struct RoomCatalog {
    rooms: EntityStore<Room>,
}

fn ensure_room_id(id: RoomId) -> HotelResult<()> {
    if is_valid_id(id.value()) {
        Ok(())
    } else {
        Err(HotelError::invalid_input("Room ID must be positive"))
    }
}

impl RoomCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room; fails with `DuplicateId` if the id is taken
    pub fn add(&mut self, room: Room) -> HotelResult<()> {
        let id = room.id();
        self.rooms.insert(room)?;
        info!(room_id = %id, "Room added");
        Ok(())
    }

    /// Replace the room with the same id, keeping its catalog position
    pub fn update(&mut self, room: Room) -> HotelResult<()> {
        let id = room.id();
        self.rooms.replace(room)?;
        info!(room_id = %id, "Room updated");
        Ok(())
    }

    /// Look up a room
    pub fn get(&self, id: RoomId) -> HotelResult<&Room> {
        ensure_room_id(id)?;
        self.rooms.get(id)
    }

    /// Whether a room is free to book
    pub fn is_available(&self, id: RoomId) -> HotelResult<bool> {
        Ok(self.get(id)?.is_available())
    }

    /// Take a room; fails with `RoomUnavailable` if it is already occupied
    pub fn mark_occupied(&mut self, id: RoomId) -> HotelResult<()> {
        ensure_room_id(id)?;
        self.rooms.get_mut(id)?.mark_occupied()?;
        debug!(room_id = %id, "Room occupied");
        Ok(())
    }

    /// Free a room (idempotent)
    pub fn mark_available(&mut self, id: RoomId) -> HotelResult<()> {
        ensure_room_id(id)?;
        self.rooms.get_mut(id)?.mark_available();
        debug!(room_id = %id, "Room available");
        Ok(())
    }

    /// Force the availability flag without transition checks
    pub fn set_availability(&mut self, id: RoomId, available: bool) -> HotelResult<()> {
        ensure_room_id(id)?;
        let room = self.rooms.get_mut(id)?;
        if available {
            room.mark_available();
        } else if room.is_available() {
            room.mark_occupied()?;
        }
        debug!(room_id = %id, available, "Room availability set");
        Ok(())
    }

    /// Remove a room and return it
    pub fn remove(&mut self, id: RoomId) -> HotelResult<Room> {
        ensure_room_id(id)?;
        let room = self.rooms.remove(id)?;
        info!(room_id = %id, "Room removed");
        Ok(room)
    }

    /// Whether a room with this id exists
    pub fn contains(&self, id: RoomId) -> bool {
        self.rooms.contains(id)
    }

    /// Every room in insertion order
    pub fn list_all(&self) -> Vec<Room> {
        self.rooms.snapshot()
    }

    /// Rooms that can be booked, in insertion order
    pub fn list_available(&self) -> Vec<Room> {
        self.rooms.snapshot_where(Room::is_available)
    }

    /// Number of rooms that can be booked
    pub fn count_available(&self) -> usize {
        self.rooms.iter().filter(|room| room.is_available()).count()
    }

    /// Rooms whose type matches ignoring case; blank input matches nothing
    pub fn find_by_type(&self, room_type: &str) -> Vec<Room> {
        if !is_valid_string(room_type) {
            return Vec::new();
        }
        let wanted = room_type.trim().to_lowercase();
        self.rooms
            .snapshot_where(|room| room.room_type().to_lowercase() == wanted)
    }

    /// Number of rooms
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the catalog has no rooms
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RoomStatus;
    use pretty_assertions::assert_eq;

    fn room(id: i64, room_type: &str, price: f64) -> Room {
        Room::new(RoomId::new(id), room_type, price, true).unwrap()
    }

    fn seeded() -> RoomCatalog {
        let mut catalog = RoomCatalog::new();
        catalog.add(room(1, "Single", 100.0)).unwrap();
        catalog.add(room(2, "Double", 150.0)).unwrap();
        catalog.add(room(3, "Suite", 300.0)).unwrap();
        catalog
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let catalog = seeded();
        let ids: Vec<i64> = catalog.list_all().iter().map(|r| r.id().value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_add_duplicate_leaves_catalog_unchanged() {
        let mut catalog = seeded();
        let err = catalog.add(room(2, "Penthouse", 900.0)).unwrap_err();

        assert_eq!(
            err,
            HotelError::DuplicateId {
                entity_type: "Room",
                id: 2
            }
        );
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(RoomId::new(2)).unwrap().room_type(), "Double");
    }

    #[test]
    fn test_get_errors() {
        let catalog = seeded();
        assert!(catalog.get(RoomId::new(9)).unwrap_err().is_not_found());
        assert!(matches!(
            catalog.get(RoomId::new(0)),
            Err(HotelError::InvalidInput(_))
        ));
        assert!(catalog.is_available(RoomId::new(9)).is_err());
    }

    #[test]
    fn test_occupancy_transitions() {
        let mut catalog = seeded();
        let id = RoomId::new(1);

        catalog.mark_occupied(id).unwrap();
        assert!(!catalog.is_available(id).unwrap());
        assert_eq!(
            catalog.mark_occupied(id).unwrap_err(),
            HotelError::RoomUnavailable { room_id: 1 }
        );

        catalog.mark_available(id).unwrap();
        catalog.mark_available(id).unwrap();
        assert!(catalog.is_available(id).unwrap());

        assert!(catalog.mark_available(RoomId::new(42)).unwrap_err().is_not_found());
        assert!(catalog.mark_occupied(RoomId::new(42)).unwrap_err().is_not_found());
    }

    #[test]
    fn test_set_availability_is_forceful() {
        let mut catalog = seeded();
        let id = RoomId::new(3);

        catalog.set_availability(id, false).unwrap();
        catalog.set_availability(id, false).unwrap();
        assert_eq!(catalog.get(id).unwrap().status(), RoomStatus::Occupied);

        catalog.set_availability(id, true).unwrap();
        assert!(catalog.is_available(id).unwrap());
    }

    #[test]
    fn test_available_views() {
        let mut catalog = seeded();
        catalog.mark_occupied(RoomId::new(2)).unwrap();

        let available: Vec<i64> = catalog
            .list_available()
            .iter()
            .map(|r| r.id().value())
            .collect();
        assert_eq!(available, vec![1, 3]);
        assert_eq!(catalog.count_available(), 2);
    }

    #[test]
    fn test_remove() {
        let mut catalog = seeded();
        let removed = catalog.remove(RoomId::new(2)).unwrap();
        assert_eq!(removed.room_type(), "Double");
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.contains(RoomId::new(2)));
        assert!(catalog.remove(RoomId::new(2)).unwrap_err().is_not_found());
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut catalog = seeded();
        catalog.update(room(1, "Single", 110.0)).unwrap();
        assert_eq!(catalog.list_all()[0].price(), 110.0);
        assert!(catalog.update(room(8, "Loft", 10.0)).unwrap_err().is_not_found());
    }

    #[test]
    fn test_find_by_type_ignores_case() {
        let mut catalog = seeded();
        catalog.add(room(4, "suite", 320.0)).unwrap();

        let suites: Vec<i64> = catalog
            .find_by_type("SUITE")
            .iter()
            .map(|r| r.id().value())
            .collect();
        assert_eq!(suites, vec![3, 4]);
        assert!(catalog.find_by_type("  ").is_empty());
        assert!(catalog.find_by_type("Loft").is_empty());
    }
}
