// Copyright 2025 Cowboy AI, LLC.

//! Make-reservation workflow

use crate::dates::{ensure_valid_range, nights_between};
use crate::domain::Reservation;
use crate::entity::{ReservationId, RoomId, UserId};
use crate::errors::{HotelError, HotelResult};
use crate::services::{ReservationLedger, RoomCatalog, UserDirectory};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

/// Everything needed to book a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Id for the new reservation
    pub reservation_id: ReservationId,
    /// Guest the room is booked for
    pub user_id: UserId,
    /// Room to book
    pub room_id: RoomId,
    /// First night
    pub check_in: NaiveDate,
    /// Departure day
    pub check_out: NaiveDate,
}

/// Book a room
///
/// Steps run in order and the first failure aborts with no change to
/// either service:
///
/// 1. the room exists (`NotFound`)
/// 2. the room is available (`RoomUnavailable`)
/// 3. check-out is after check-in (`InvalidDateRange`)
/// 4. cost = nightly price × nights
/// 5. the guest exists (`NotFound`)
/// 6. the ledger accepts the id (`DuplicateId`)
/// 7. the room is marked occupied; on failure the ledger insert is undone
pub fn make_reservation(
    rooms: &mut RoomCatalog,
    ledger: &mut ReservationLedger,
    users: &UserDirectory,
    request: BookingRequest,
) -> HotelResult<Reservation> {
    let room = rooms.get(request.room_id)?;
    if !room.is_available() {
        return Err(HotelError::RoomUnavailable {
            room_id: request.room_id.value(),
        });
    }
    ensure_valid_range(request.check_in, request.check_out)?;
    let total_cost = room.calculate_cost(nights_between(request.check_in, request.check_out))?;
    users.get(request.user_id)?;

    let reservation = Reservation::new(
        request.reservation_id,
        request.user_id,
        request.room_id,
        request.check_in,
        request.check_out,
        total_cost,
    )?;
    ledger.make(reservation.clone())?;

    if let Err(err) = rooms.mark_occupied(request.room_id) {
        warn!(
            reservation_id = %request.reservation_id,
            room_id = %request.room_id,
            error = %err,
            "Room could not be occupied, rolling back reservation"
        );
        if let Err(rollback) = ledger.cancel(request.reservation_id) {
            error!(
                reservation_id = %request.reservation_id,
                error = %rollback,
                "Rollback of reservation failed"
            );
        }
        return Err(err);
    }

    info!(
        reservation_id = %reservation.id(),
        user_id = %reservation.user_id(),
        room_id = %reservation.room_id(),
        nights = reservation.nights(),
        total_cost = reservation.total_cost(),
        "Reservation made"
    );
    Ok(reservation)
}
