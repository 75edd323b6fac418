// Copyright 2025 Cowboy AI, LLC.

//! Cancel-reservation workflow

use crate::domain::Reservation;
use crate::entity::ReservationId;
use crate::errors::{HotelError, HotelResult};
use crate::services::{ReservationLedger, RoomCatalog};
use tracing::{info, warn};

/// Result of a successful cancellation
#[derive(Debug, Clone, PartialEq)]
pub struct CancellationOutcome {
    /// The reservation that was removed
    pub reservation: Reservation,
    /// Why the room could not be released, if it could not
    pub release_error: Option<HotelError>,
}

impl CancellationOutcome {
    /// Whether the booked room was returned to the available pool
    pub fn room_released(&self) -> bool {
        self.release_error.is_none()
    }
}

/// Cancel a reservation and release its room
///
/// The reservation is removed first. If the room has since been deleted
/// the cancellation still stands and the failure is reported in the
/// outcome.
pub fn cancel_reservation(
    rooms: &mut RoomCatalog,
    ledger: &mut ReservationLedger,
    reservation_id: ReservationId,
) -> HotelResult<CancellationOutcome> {
    let reservation = ledger.cancel(reservation_id)?;

    let release_error = match rooms.mark_available(reservation.room_id()) {
        Ok(()) => None,
        Err(err) => {
            warn!(
                reservation_id = %reservation_id,
                room_id = %reservation.room_id(),
                error = %err,
                "Reservation cancelled but room was not released"
            );
            Some(err)
        }
    };

    info!(reservation_id = %reservation_id, "Reservation cancelled");
    Ok(CancellationOutcome {
        reservation,
        release_error,
    })
}
