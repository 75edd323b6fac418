// Copyright 2025 Cowboy AI, LLC.

//! Role-aware operations through the `Hotel` facade

#[macro_use]
extern crate pretty_assertions;

use chrono::NaiveDate;
use hotel_domain::{
    AccessPolicy, Capability, Hotel, HotelConfig, HotelError, ReservationId, Role, RoomId, UserId,
};
use test_case::test_case;

fn seeded() -> Hotel {
    Hotel::from_config(&HotelConfig::default()).unwrap()
}

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
}

#[test_case("admin", "admin123", Role::Admin ; "admin account")]
#[test_case("staff", "staff123", Role::Staff ; "staff account")]
#[test_case("customer", "customer123", Role::Customer ; "customer account")]
fn seeded_accounts_can_log_in(username: &str, password: &str, role: Role) {
    let session = seeded().login(username, password).unwrap();
    assert_eq!(session.role(), role);
}

#[test_case("", "x" => HotelError::InvalidCredentials ; "blank username")]
#[test_case("ghost", "x" => HotelError::UserNotFound("ghost".to_string()) ; "unknown user")]
#[test_case("admin", "x" => HotelError::WrongPassword ; "wrong password")]
fn login_failures(username: &str, password: &str) -> HotelError {
    seeded().login(username, password).unwrap_err()
}

#[test]
fn customer_with_manage_rooms_is_unauthorized() {
    let err = AccessPolicy::require(Role::Customer, Capability::MANAGE_ROOMS).unwrap_err();
    assert_eq!(err.to_string(), "Unauthorized: Customer lacks MANAGE_ROOMS");
}

#[test]
fn registration_then_booking_flow() {
    let mut hotel = seeded();

    let user = hotel.register_customer("dana", "pw1", "pw1").unwrap();
    assert_eq!(user.id(), UserId::new(4));
    assert_eq!(
        hotel.register_customer("dana", "pw1", "pw1").unwrap_err(),
        HotelError::UsernameTaken("dana".to_string())
    );
    assert_eq!(
        hotel.register_customer("erin", "a", "b").unwrap_err(),
        HotelError::PasswordMismatch
    );

    let session = hotel.login("dana", "pw1").unwrap();
    let reservation = hotel
        .book(&session, ReservationId::new(1), RoomId::new(2), date(10), date(12))
        .unwrap();
    assert_eq!(reservation.user_id(), UserId::new(4));
    assert_eq!(reservation.total_cost(), 300.0);

    let available: Vec<i64> = hotel
        .available_rooms(&session)
        .unwrap()
        .iter()
        .map(|r| r.id().value())
        .collect();
    assert_eq!(available, vec![1, 3]);

    let outcome = hotel.cancel(&session, ReservationId::new(1)).unwrap();
    assert!(outcome.room_released());
    assert_eq!(hotel.available_rooms(&session).unwrap().len(), 3);
}

#[test]
fn admin_user_management() {
    let mut hotel = seeded();
    let admin = hotel.login("admin", "admin123").unwrap();
    let staff = hotel.login("staff", "staff123").unwrap();

    assert!(matches!(
        hotel.delete_user(&staff, UserId::new(3)),
        Err(HotelError::Unauthorized { .. })
    ));
    assert_eq!(
        hotel.delete_user(&admin, admin.user_id()).unwrap_err(),
        HotelError::SelfDeletion { user_id: 1 }
    );

    hotel.change_role(&admin, UserId::new(3), Role::Staff).unwrap();
    let names: Vec<(String, Role)> = hotel
        .users(&admin)
        .unwrap()
        .into_iter()
        .map(|u| (u.username().to_string(), u.role()))
        .collect();
    assert_eq!(
        names,
        vec![
            ("admin".to_string(), Role::Admin),
            ("staff".to_string(), Role::Staff),
            ("customer".to_string(), Role::Staff),
        ]
    );

    hotel.delete_user(&admin, UserId::new(2)).unwrap();
    assert_eq!(hotel.directory().count(), 2);
    assert!(hotel.rooms(&staff).unwrap_err().is_not_found());
}

#[test]
fn deleting_a_customer_keeps_their_reservations() {
    let mut hotel = seeded();
    let admin = hotel.login("admin", "admin123").unwrap();
    let guest = hotel.login("customer", "customer123").unwrap();
    hotel
        .book(&guest, ReservationId::new(5), RoomId::new(1), date(1), date(2))
        .unwrap();

    hotel.delete_user(&admin, guest.user_id()).unwrap();

    let all = hotel.reservations_for(&admin).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].user_id(), UserId::new(3));
}

#[test]
fn staff_cannot_remove_booked_room() {
    let mut hotel = seeded();
    let staff = hotel.login("staff", "staff123").unwrap();
    let guest = hotel.login("customer", "customer123").unwrap();
    hotel
        .book(&guest, ReservationId::new(5), RoomId::new(3), date(1), date(2))
        .unwrap();

    assert_eq!(
        hotel.remove_room(&staff, RoomId::new(3)).unwrap_err(),
        HotelError::RoomHasReservations { room_id: 3, count: 1 }
    );
    hotel.cancel(&staff, ReservationId::new(5)).unwrap();
    hotel.remove_room(&staff, RoomId::new(3)).unwrap();
    assert_eq!(hotel.rooms(&staff).unwrap().len(), 2);
}
