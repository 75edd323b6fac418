// Copyright 2025 Cowboy AI, LLC.

//! Reservation entity

use crate::dates::{ensure_valid_range, nights_between};
use crate::entity::{DomainEntity, ReservationId, ReservationMarker, RoomId, UserId};
use crate::errors::{HotelError, HotelResult};
use crate::validation::{is_valid_id, is_valid_price};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// A booking of one room by one user for a range of nights
///
/// The user and room are plain id references; whether they exist is the
/// booking workflow's concern, not the entity's.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reservation {
    id: ReservationId,
    user_id: UserId,
    room_id: RoomId,
    check_in: NaiveDate,
    check_out: NaiveDate,
    total_cost: f64,
}

fn ensure_positive(id: i64, what: &str) -> HotelResult<()> {
    if is_valid_id(id) {
        Ok(())
    } else {
        Err(HotelError::invalid_input(format!("{what} must be positive")))
    }
}

fn ensure_cost(total_cost: f64) -> HotelResult<()> {
    if total_cost.is_finite() && total_cost >= 0.0 {
        Ok(())
    } else {
        Err(HotelError::invalid_input("Total cost must be finite and not negative"))
    }
}

impl Reservation {
    /// Create a reservation, validating ids, the date range and the cost
    pub fn new(
        id: ReservationId,
        user_id: UserId,
        room_id: RoomId,
        check_in: NaiveDate,
        check_out: NaiveDate,
        total_cost: f64,
    ) -> HotelResult<Self> {
        ensure_positive(id.value(), "Reservation ID")?;
        ensure_positive(user_id.value(), "User ID")?;
        ensure_positive(room_id.value(), "Room ID")?;
        ensure_valid_range(check_in, check_out)?;
        ensure_cost(total_cost)?;

        Ok(Self {
            id,
            user_id,
            room_id,
            check_in,
            check_out,
            total_cost,
        })
    }

    /// Reservation id (immutable)
    pub fn id(&self) -> ReservationId {
        self.id
    }

    /// Booking user
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Booked room
    pub fn room_id(&self) -> RoomId {
        self.room_id
    }

    /// First night
    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    /// Departure day
    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Price of the whole stay
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Number of nights booked
    pub fn nights(&self) -> i64 {
        nights_between(self.check_in, self.check_out)
    }

    /// Reassign to another user
    pub fn set_user_id(&mut self, user_id: UserId) -> HotelResult<()> {
        ensure_positive(user_id.value(), "User ID")?;
        self.user_id = user_id;
        Ok(())
    }

    /// Move to another room
    pub fn set_room_id(&mut self, room_id: RoomId) -> HotelResult<()> {
        ensure_positive(room_id.value(), "Room ID")?;
        self.room_id = room_id;
        Ok(())
    }

    /// Change the check-in day; must stay before check-out
    pub fn set_check_in(&mut self, check_in: NaiveDate) -> HotelResult<()> {
        ensure_valid_range(check_in, self.check_out)?;
        self.check_in = check_in;
        Ok(())
    }

    /// Change the check-out day; must stay after check-in
    pub fn set_check_out(&mut self, check_out: NaiveDate) -> HotelResult<()> {
        ensure_valid_range(self.check_in, check_out)?;
        self.check_out = check_out;
        Ok(())
    }

    /// Replace both dates at once
    ///
    /// Moving a stay past its current check-out cannot be expressed as two
    /// single-date edits, each of which must keep the range valid.
    pub fn reschedule(&mut self, check_in: NaiveDate, check_out: NaiveDate) -> HotelResult<()> {
        ensure_valid_range(check_in, check_out)?;
        self.check_in = check_in;
        self.check_out = check_out;
        Ok(())
    }

    /// Override the stored cost
    pub fn set_total_cost(&mut self, total_cost: f64) -> HotelResult<()> {
        ensure_cost(total_cost)?;
        self.total_cost = total_cost;
        Ok(())
    }

    /// Reprice the stay at `room_price` per night
    pub fn recalculate_cost(&mut self, room_price: f64) -> HotelResult<()> {
        if !is_valid_price(room_price) {
            return Err(HotelError::invalid_input("Price must be greater than zero"));
        }
        self.total_cost = room_price * self.nights() as f64;
        Ok(())
    }
}

impl DomainEntity for Reservation {
    type Marker = ReservationMarker;
    const ENTITY_TYPE: &'static str = "Reservation";

    fn id(&self) -> ReservationId {
        self.id
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reservation {}: user {} room {} from {} to {} ({} nights) ${:.2}",
            self.id,
            self.user_id,
            self.room_id,
            self.check_in,
            self.check_out,
            self.nights(),
            self.total_cost
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Reservation {
        Reservation::new(
            ReservationId::new(10),
            UserId::new(3),
            RoomId::new(1),
            date(2025, 1, 1),
            date(2025, 1, 4),
            300.0,
        )
        .unwrap()
    }

    #[test]
    fn test_new_and_nights() {
        let reservation = sample();
        assert_eq!(reservation.nights(), 3);
        assert_eq!(reservation.total_cost(), 300.0);
        assert_eq!(reservation.user_id(), UserId::new(3));
        assert_eq!(reservation.room_id(), RoomId::new(1));
    }

    #[test_case(0, 3, 1 ; "reservation id")]
    #[test_case(10, -1, 1 ; "user id")]
    #[test_case(10, 3, 0 ; "room id")]
    fn test_new_rejects_non_positive_ids(id: i64, user: i64, room: i64) {
        let err = Reservation::new(
            ReservationId::new(id),
            UserId::new(user),
            RoomId::new(room),
            date(2025, 1, 1),
            date(2025, 1, 2),
            100.0,
        )
        .unwrap_err();
        assert!(matches!(err, HotelError::InvalidInput(_)));
    }

    #[test]
    fn test_new_rejects_bad_range_and_cost() {
        let same_day = Reservation::new(
            ReservationId::new(1),
            UserId::new(1),
            RoomId::new(1),
            date(2025, 1, 1),
            date(2025, 1, 1),
            0.0,
        );
        assert!(matches!(same_day, Err(HotelError::InvalidDateRange { .. })));

        let negative = Reservation::new(
            ReservationId::new(1),
            UserId::new(1),
            RoomId::new(1),
            date(2025, 1, 1),
            date(2025, 1, 2),
            -1.0,
        );
        assert!(matches!(negative, Err(HotelError::InvalidInput(_))));

        let infinite = Reservation::new(
            ReservationId::new(1),
            UserId::new(1),
            RoomId::new(1),
            date(2025, 1, 1),
            date(2025, 1, 2),
            f64::INFINITY,
        );
        assert!(matches!(infinite, Err(HotelError::InvalidInput(_))));
    }

    #[test]
    fn test_date_setters_keep_range_valid() {
        let mut reservation = sample();

        assert!(reservation.set_check_in(date(2025, 1, 4)).is_err());
        assert!(reservation.set_check_out(date(2024, 12, 31)).is_err());
        assert_eq!(reservation.nights(), 3);

        reservation.set_check_out(date(2025, 1, 6)).unwrap();
        reservation.set_check_in(date(2025, 1, 2)).unwrap();
        assert_eq!(reservation.nights(), 4);
    }

    #[test]
    fn test_reschedule_moves_both_dates() {
        let mut reservation = sample();
        reservation
            .reschedule(date(2025, 2, 10), date(2025, 2, 12))
            .unwrap();
        assert_eq!(reservation.check_in(), date(2025, 2, 10));
        assert_eq!(reservation.nights(), 2);

        let err = reservation
            .reschedule(date(2025, 3, 2), date(2025, 3, 1))
            .unwrap_err();
        assert!(matches!(err, HotelError::InvalidDateRange { .. }));
        assert_eq!(reservation.check_in(), date(2025, 2, 10));
    }

    #[test]
    fn test_recalculate_cost() {
        let mut reservation = sample();
        reservation.recalculate_cost(150.0).unwrap();
        assert_eq!(reservation.total_cost(), 450.0);

        assert!(reservation.recalculate_cost(0.0).is_err());
        assert!(reservation.set_total_cost(-5.0).is_err());
        assert_eq!(reservation.total_cost(), 450.0);
    }

    #[test]
    fn test_id_setters_validate() {
        let mut reservation = sample();
        assert!(reservation.set_user_id(UserId::new(0)).is_err());
        assert!(reservation.set_room_id(RoomId::new(-2)).is_err());
        reservation.set_room_id(RoomId::new(2)).unwrap();
        assert_eq!(reservation.room_id(), RoomId::new(2));
    }
}
