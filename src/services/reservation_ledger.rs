// Copyright 2025 Cowboy AI, LLC.

//! Reservation ledger service

use crate::domain::Reservation;
use crate::entity::{ReservationId, RoomId, UserId};
use crate::errors::{HotelError, HotelResult};
use crate::store::EntityStore;
use tracing::info;

/// The authoritative collection of reservations
///
/// Stores reservations and answers queries over them. It does not know
/// whether a room is free or a user exists; the booking workflow checks
/// that before calling [`make`](Self::make).
#[derive(Debug, Clone, Default)]
pub struct ReservationLedger {
    reservations: EntityStore<Reservation>,
}

fn ensure_reservation_id(id: ReservationId) -> HotelResult<()> {
    if id.is_valid() {
        Ok(())
    } else {
        Err(HotelError::invalid_input("Reservation ID must be positive"))
    }
}

impl ReservationLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reservation; fails with `DuplicateId` if the id is taken
    pub fn make(&mut self, reservation: Reservation) -> HotelResult<()> {
        let id = reservation.id();
        let room_id = reservation.room_id();
        self.reservations.insert(reservation)?;
        info!(reservation_id = %id, room_id = %room_id, "Reservation recorded");
        Ok(())
    }

    /// Remove a reservation and return it
    pub fn cancel(&mut self, id: ReservationId) -> HotelResult<Reservation> {
        ensure_reservation_id(id)?;
        let reservation = self.reservations.remove(id)?;
        info!(reservation_id = %id, "Reservation removed");
        Ok(reservation)
    }

    /// Look up a reservation
    pub fn get(&self, id: ReservationId) -> HotelResult<&Reservation> {
        ensure_reservation_id(id)?;
        self.reservations.get(id)
    }

    /// Whether a reservation with this id exists
    pub fn exists(&self, id: ReservationId) -> bool {
        self.reservations.contains(id)
    }

    /// Replace the reservation with the same id
    pub fn update(&mut self, reservation: Reservation) -> HotelResult<()> {
        let id = reservation.id();
        self.reservations.replace(reservation)?;
        info!(reservation_id = %id, "Reservation updated");
        Ok(())
    }

    /// Every reservation in insertion order
    pub fn list_all(&self) -> Vec<Reservation> {
        self.reservations.snapshot()
    }

    /// Reservations held by a user; a non-positive id matches nothing
    pub fn list_by_user(&self, user_id: UserId) -> Vec<Reservation> {
        if !user_id.is_valid() {
            return Vec::new();
        }
        self.reservations
            .snapshot_where(|r| r.user_id() == user_id)
    }

    /// Reservations on a room; a non-positive id matches nothing
    pub fn list_by_room(&self, room_id: RoomId) -> Vec<Reservation> {
        if !room_id.is_valid() {
            return Vec::new();
        }
        self.reservations
            .snapshot_where(|r| r.room_id() == room_id)
    }

    /// Number of reservations on a room
    pub fn count_by_room(&self, room_id: RoomId) -> usize {
        self.reservations
            .iter()
            .filter(|r| r.room_id() == room_id)
            .count()
    }

    /// Sum of the total cost of every current reservation
    pub fn total_revenue(&self) -> f64 {
        self.reservations.iter().map(Reservation::total_cost).sum()
    }

    /// Number of reservations
    pub fn count(&self) -> usize {
        self.reservations.len()
    }
}
