// Copyright 2025 Cowboy AI, LLC.

//! Domain services
//!
//! Each service exclusively owns one collection. Services never hold
//! references into each other; cross references are id values resolved by
//! the workflows.

pub mod reservation_ledger;
pub mod room_catalog;
pub mod user_directory;

pub use reservation_ledger::ReservationLedger;
pub use room_catalog::RoomCatalog;
pub use user_directory::UserDirectory;
