// Copyright 2025 Cowboy AI, LLC.

//! Remove-room workflow

use crate::domain::Room;
use crate::entity::RoomId;
use crate::errors::{HotelError, HotelResult};
use crate::services::{ReservationLedger, RoomCatalog};

/// Remove a room that no reservation points at
///
/// Fails with `RoomHasReservations` while the ledger still references the
/// room, so a later cancellation always finds the room it has to release.
pub fn remove_room(
    rooms: &mut RoomCatalog,
    ledger: &ReservationLedger,
    room_id: RoomId,
) -> HotelResult<Room> {
    let count = ledger.count_by_room(room_id);
    if count > 0 {
        return Err(HotelError::RoomHasReservations {
            room_id: room_id.value(),
            count,
        });
    }
    rooms.remove(room_id)
}
