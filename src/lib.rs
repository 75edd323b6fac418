// Copyright 2025 Cowboy AI, LLC.

//! # Hotel Domain
//!
//! Domain layer of a small hotel reservation system: rooms, reservations and
//! user accounts, the services that own them, and the workflows that keep
//! them consistent.
//!
//! - **Entities**: [`Room`], [`Reservation`] and [`User`] validate their own
//!   fields on construction and on every mutation
//! - **Services**: [`RoomCatalog`], [`ReservationLedger`] and
//!   [`UserDirectory`] each own one insertion-ordered collection
//! - **Workflows**: [`workflow`] coordinates the services for booking,
//!   cancellation, room removal and account administration
//! - **Access**: [`AccessPolicy`] maps each [`Role`] to a set of
//!   [`Capability`] flags
//! - **Facade**: [`Hotel`] ties it together behind a logged-in [`Session`]
//!
//! ## Design Principles
//!
//! 1. **Type Safety**: Room, reservation and user ids are distinct types
//! 2. **No partial writes**: A failed workflow leaves every service as it was
//! 3. **Explicit state**: Room availability is a two-state machine
//! 4. **Errors as values**: Every expected failure is a [`HotelError`]
//!
//! ## Example
//!
//! ```
//! use hotel_domain::{Hotel, HotelConfig, HotelError, ReservationId, RoomId};
//! use hotel_domain::dates::parse_date;
//!
//! let mut hotel = Hotel::from_config(&HotelConfig::default()).unwrap();
//! let guest = hotel.login("customer", "customer123").unwrap();
//! let check_in = parse_date("2025-01-01").unwrap();
//! let check_out = parse_date("2025-01-04").unwrap();
//!
//! hotel.book(&guest, ReservationId::new(10), RoomId::new(1), check_in, check_out).unwrap();
//!
//! let again = hotel.book(&guest, ReservationId::new(11), RoomId::new(1), check_in, check_out);
//! assert_eq!(again.unwrap_err(), HotelError::RoomUnavailable { room_id: 1 });
//! ```

#![warn(missing_docs)]

mod entity;
mod errors;
mod store;

pub mod access;
pub mod config;
pub mod dates;
pub mod domain;
pub mod hotel;
pub mod services;
pub mod state_machine;
pub mod validation;
pub mod workflow;

pub use access::{AccessPolicy, Capability};
pub use config::{HotelConfig, RoomSeed, UserSeed};
pub use domain::{Reservation, Role, Room, RoomInput, RoomStatus, User};
pub use entity::{
    DomainEntity, EntityId, ReservationId, ReservationMarker, RoomId, RoomMarker, UserId,
    UserMarker,
};
pub use errors::{HotelError, HotelResult};
pub use hotel::{Hotel, HotelSummary, Session, UserProfile};
pub use services::{ReservationLedger, RoomCatalog, UserDirectory};
pub use state_machine::{MealyStateTransitions, State, TransitionInput};
pub use store::EntityStore;
pub use workflow::{BookingRequest, CancellationOutcome};
