// Copyright 2025 Cowboy AI, LLC.

//! Hotel entities
//!
//! Rooms, reservations and user accounts. Each entity validates its own
//! fields on construction and on every mutation; cross-entity rules live in
//! the services and workflows.

pub mod reservation;
pub mod role;
pub mod room;
pub mod user;

pub use reservation::Reservation;
pub use role::Role;
pub use room::{Room, RoomInput, RoomStatus};
pub use user::User;
