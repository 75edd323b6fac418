// Copyright 2025 Cowboy AI, LLC.

//! Workflows that span more than one service
//!
//! Services own their collections and never call each other. Anything that
//! touches two of them (booking a room, cancelling a stay, removing a room
//! that may still be referenced) is a free function here taking each service
//! by reference.
//!
//! ```mermaid
//! graph LR
//!     B[make_reservation] --> RC[RoomCatalog]
//!     B --> RL[ReservationLedger]
//!     B --> UD[UserDirectory]
//!     C[cancel_reservation] --> RL
//!     C --> RC
//!     R[remove_room] --> RL
//!     R --> RC
//!     A[accounts] --> UD
//! ```

pub mod accounts;
pub mod booking;
pub mod cancellation;
pub mod rooms;

pub use accounts::{change_role, delete_user, register_customer};
pub use booking::{make_reservation, BookingRequest};
pub use cancellation::{cancel_reservation, CancellationOutcome};
pub use rooms::remove_room;
