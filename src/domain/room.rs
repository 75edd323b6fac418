// Copyright 2025 Cowboy AI, LLC.

//! Room entity and its occupancy state machine

use crate::entity::{DomainEntity, RoomId, RoomMarker};
use crate::errors::{HotelError, HotelResult};
use crate::state_machine::{MealyStateTransitions, State, TransitionInput};
use crate::validation::{is_valid_id, is_valid_price, is_valid_string};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Occupancy of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomStatus {
    /// Free to book
    Available,
    /// Held by a reservation
    Occupied,
}

impl State for RoomStatus {
    fn name(&self) -> &'static str {
        match self {
            RoomStatus::Available => "Available",
            RoomStatus::Occupied => "Occupied",
        }
    }
}

/// Inputs that drive occupancy transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomInput {
    /// A reservation takes the room
    Occupy,
    /// The room is handed back
    Release,
}

impl TransitionInput for RoomInput {
    fn description(&self) -> String {
        format!("{self:?}")
    }
}

impl MealyStateTransitions for RoomStatus {
    type Input = RoomInput;

    // Release is accepted from either state; Occupy only from Available.
    fn transition(&self, input: &RoomInput) -> Option<Self> {
        match (self, input) {
            (RoomStatus::Available, RoomInput::Occupy) => Some(RoomStatus::Occupied),
            (_, RoomInput::Release) => Some(RoomStatus::Available),
            (RoomStatus::Occupied, RoomInput::Occupy) => None,
        }
    }
}

/// A hotel room
///
/// # Examples
///
/// ```rust
/// use hotel_domain::{Room, RoomId};
///
/// let mut room = Room::new(RoomId::new(1), "Single", 100.0, true).unwrap();
/// room.mark_occupied().unwrap();
/// assert!(!room.is_available());
/// assert!(room.mark_occupied().is_err());
///
/// room.mark_available();
/// assert!(room.is_available());
/// assert_eq!(room.calculate_cost(3).unwrap(), 300.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    id: RoomId,
    room_type: String,
    price: f64,
    status: RoomStatus,
}

impl Room {
    /// Create a room, rejecting a non-positive id, blank type or non-positive price
    pub fn new(
        id: RoomId,
        room_type: impl Into<String>,
        price: f64,
        available: bool,
    ) -> HotelResult<Self> {
        if !is_valid_id(id.value()) {
            return Err(HotelError::InvalidRoom("Room ID must be positive".to_string()));
        }
        let room_type = room_type.into();
        if !is_valid_string(&room_type) {
            return Err(HotelError::InvalidRoom(
                "Room type cannot be empty".to_string(),
            ));
        }
        if !is_valid_price(price) {
            return Err(HotelError::InvalidRoom(
                "Price must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            id,
            room_type,
            price,
            status: if available {
                RoomStatus::Available
            } else {
                RoomStatus::Occupied
            },
        })
    }

    /// Room id (immutable)
    pub fn id(&self) -> RoomId {
        self.id
    }

    /// Room type, e.g. "Single"
    pub fn room_type(&self) -> &str {
        &self.room_type
    }

    /// Nightly price
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Current occupancy
    pub fn status(&self) -> RoomStatus {
        self.status
    }

    /// Whether the room can be booked
    pub fn is_available(&self) -> bool {
        self.status == RoomStatus::Available
    }

    /// Change the room type
    pub fn set_room_type(&mut self, room_type: impl Into<String>) -> HotelResult<()> {
        let room_type = room_type.into();
        if !is_valid_string(&room_type) {
            return Err(HotelError::InvalidRoom(
                "Room type cannot be empty".to_string(),
            ));
        }
        self.room_type = room_type;
        Ok(())
    }

    /// Change the nightly price
    pub fn set_price(&mut self, price: f64) -> HotelResult<()> {
        if !is_valid_price(price) {
            return Err(HotelError::InvalidRoom(
                "Price must be greater than zero".to_string(),
            ));
        }
        self.price = price;
        Ok(())
    }

    /// Take the room; fails with `RoomUnavailable` if already occupied
    pub fn mark_occupied(&mut self) -> HotelResult<()> {
        self.status = self
            .status
            .transition(&RoomInput::Occupy)
            .ok_or(HotelError::RoomUnavailable {
                room_id: self.id.value(),
            })?;
        Ok(())
    }

    /// Hand the room back (idempotent)
    pub fn mark_available(&mut self) {
        self.status = RoomStatus::Available;
    }

    /// Price for a stay of `nights`; nights must be positive
    pub fn calculate_cost(&self, nights: i64) -> HotelResult<f64> {
        if nights <= 0 {
            return Err(HotelError::invalid_input(
                "Number of nights must be positive",
            ));
        }
        let cost = self.price * nights as f64;
        if !cost.is_finite() {
            return Err(HotelError::invalid_input("Stay cost is out of range"));
        }
        Ok(cost)
    }
}

impl DomainEntity for Room {
    type Marker = RoomMarker;
    const ENTITY_TYPE: &'static str = "Room";

    fn id(&self) -> RoomId {
        self.id
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room {} ({}) ${:.2}/night, {}",
            self.id,
            self.room_type,
            self.price,
            self.status.name()
        )
    }
}
