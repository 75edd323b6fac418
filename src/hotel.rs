// Copyright 2025 Cowboy AI, LLC.

//! The hotel facade
//!
//! [`Hotel`] owns the three services and exposes every operation behind a
//! [`Session`]. Each call re-reads the acting account from the directory, so
//! a role change or deletion takes effect on that account's next call.
//!
//! ```mermaid
//! sequenceDiagram
//!     participant C as Caller
//!     participant H as Hotel
//!     participant P as AccessPolicy
//!     participant W as workflow
//!     C->>H: login(username, password)
//!     H-->>C: Session
//!     C->>H: book(&session, ...)
//!     H->>P: require(role, BOOK_FOR_SELF)
//!     H->>W: make_reservation(...)
//!     W-->>C: Reservation
//! ```
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use hotel_domain::{Hotel, HotelConfig, ReservationId, RoomId};
//!
//! let mut hotel = Hotel::from_config(&HotelConfig::default()).unwrap();
//! let guest = hotel.login("customer", "customer123").unwrap();
//!
//! let reservation = hotel
//!     .book(
//!         &guest,
//!         ReservationId::new(10),
//!         RoomId::new(1),
//!         NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
//!         NaiveDate::from_ymd_opt(2025, 1, 4).unwrap(),
//!     )
//!     .unwrap();
//! assert_eq!(reservation.total_cost(), 300.0);
//! ```

use crate::access::{AccessPolicy, Capability};
use crate::config::HotelConfig;
use crate::domain::{Reservation, Role, Room, User};
use crate::entity::{ReservationId, RoomId, UserId};
use crate::errors::HotelResult;
use crate::services::{ReservationLedger, RoomCatalog, UserDirectory};
use crate::workflow::{self, BookingRequest, CancellationOutcome};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

/// An authenticated account, as returned by [`Hotel::login`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    user_id: UserId,
    username: String,
    role: Role,
}

impl Session {
    fn for_user(user: &User) -> Self {
        Self {
            user_id: user.id(),
            username: user.username().to_string(),
            role: user.role(),
        }
    }

    /// Id of the logged-in account
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Username at login time
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Role at login time; operations use the current role
    pub fn role(&self) -> Role {
        self.role
    }
}

/// An account together with how many reservations it holds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    /// The account
    pub user: User,
    /// Reservations held by the account
    pub reservation_count: usize,
}

/// Occupancy and revenue figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HotelSummary {
    /// Rooms in the catalog
    pub room_count: usize,
    /// Rooms that can be booked
    pub available_rooms: usize,
    /// Current reservations
    pub reservation_count: usize,
    /// Sum of all reservation costs
    pub total_revenue: f64,
    /// Registered accounts
    pub user_count: usize,
}

/// Rooms, reservations and accounts of one hotel
#[derive(Debug, Clone, Default)]
pub struct Hotel {
    rooms: RoomCatalog,
    reservations: ReservationLedger,
    users: UserDirectory,
}

impl Hotel {
    /// A hotel with no rooms and no accounts
    pub fn new() -> Self {
        Self::default()
    }

    /// A hotel seeded from configuration
    ///
    /// Fails on the first seed that the catalog or directory rejects.
    pub fn from_config(config: &HotelConfig) -> HotelResult<Self> {
        let mut hotel = Self::new();
        for seed in &config.rooms {
            let room = Room::new(
                RoomId::new(seed.id),
                seed.room_type.clone(),
                seed.price,
                seed.available,
            )?;
            hotel.rooms.add(room)?;
        }
        for seed in &config.users {
            hotel.users.register(
                UserId::new(seed.id),
                &seed.username,
                &seed.password,
                seed.role,
            )?;
        }
        info!(
            rooms = hotel.rooms.len(),
            users = hotel.users.count(),
            "Hotel initialized"
        );
        Ok(hotel)
    }

    /// Read access to the room catalog
    pub fn catalog(&self) -> &RoomCatalog {
        &self.rooms
    }

    /// Read access to the reservation ledger
    pub fn ledger(&self) -> &ReservationLedger {
        &self.reservations
    }

    /// Read access to the user directory
    pub fn directory(&self) -> &UserDirectory {
        &self.users
    }

    /// Authenticate and open a session
    pub fn login(&self, username: &str, password: &str) -> HotelResult<Session> {
        let user = self.users.authenticate(username, password)?;
        info!(user_id = %user.id(), username, role = %user.role(), "Login");
        Ok(Session::for_user(&user))
    }

    /// Self-service registration of a customer account
    pub fn register_customer(
        &mut self,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> HotelResult<User> {
        workflow::register_customer(&mut self.users, username, password, confirm_password)
    }

    fn actor(&self, session: &Session) -> HotelResult<User> {
        self.users.get(session.user_id).cloned()
    }

    fn authorize(&self, session: &Session, required: Capability) -> HotelResult<User> {
        let actor = self.actor(session)?;
        AccessPolicy::require(actor.role(), required)?;
        Ok(actor)
    }

    /// Every room
    pub fn rooms(&self, session: &Session) -> HotelResult<Vec<Room>> {
        self.authorize(session, Capability::VIEW_ROOMS)?;
        Ok(self.rooms.list_all())
    }

    /// Rooms that can be booked
    pub fn available_rooms(&self, session: &Session) -> HotelResult<Vec<Room>> {
        self.authorize(session, Capability::VIEW_ROOMS)?;
        Ok(self.rooms.list_available())
    }

    /// Add a bookable room
    pub fn add_room(
        &mut self,
        session: &Session,
        id: RoomId,
        room_type: &str,
        price: f64,
    ) -> HotelResult<Room> {
        self.authorize(session, Capability::MANAGE_ROOMS)?;
        let room = Room::new(id, room_type, price, true)?;
        self.rooms.add(room.clone())?;
        Ok(room)
    }

    /// Change a room's type and price; availability is kept
    pub fn update_room(
        &mut self,
        session: &Session,
        id: RoomId,
        room_type: &str,
        price: f64,
    ) -> HotelResult<Room> {
        self.authorize(session, Capability::MANAGE_ROOMS)?;
        let mut room = self.rooms.get(id)?.clone();
        room.set_room_type(room_type)?;
        room.set_price(price)?;
        self.rooms.update(room.clone())?;
        Ok(room)
    }

    /// Remove a room no reservation refers to
    pub fn remove_room(&mut self, session: &Session, id: RoomId) -> HotelResult<Room> {
        self.authorize(session, Capability::MANAGE_ROOMS)?;
        workflow::remove_room(&mut self.rooms, &self.reservations, id)
    }

    /// Book a room for the session's own account
    pub fn book(
        &mut self,
        session: &Session,
        reservation_id: ReservationId,
        room_id: RoomId,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> HotelResult<Reservation> {
        let actor = self.authorize(session, Capability::BOOK_FOR_SELF)?;
        let request = BookingRequest {
            reservation_id,
            user_id: actor.id(),
            room_id,
            check_in,
            check_out,
        };
        workflow::make_reservation(&mut self.rooms, &mut self.reservations, &self.users, request)
    }

    /// Cancel a reservation
    ///
    /// Staff and admins may cancel any reservation; anyone else only their
    /// own.
    pub fn cancel(
        &mut self,
        session: &Session,
        reservation_id: ReservationId,
    ) -> HotelResult<CancellationOutcome> {
        let actor = self.actor(session)?;
        let holder = self.reservations.get(reservation_id)?.user_id();
        if holder != actor.id() {
            AccessPolicy::require(actor.role(), Capability::CANCEL_ANY)?;
        }
        workflow::cancel_reservation(&mut self.rooms, &mut self.reservations, reservation_id)
    }

    /// All reservations for staff and admins, otherwise the caller's own
    pub fn reservations_for(&self, session: &Session) -> HotelResult<Vec<Reservation>> {
        let actor = self.actor(session)?;
        if AccessPolicy::permits(actor.role(), Capability::VIEW_ALL_RESERVATIONS) {
            Ok(self.reservations.list_all())
        } else {
            Ok(self.reservations.list_by_user(actor.id()))
        }
    }

    /// Every account
    pub fn users(&self, session: &Session) -> HotelResult<Vec<User>> {
        self.authorize(session, Capability::MANAGE_USERS)?;
        Ok(self.users.list_all())
    }

    /// Give an account a new role
    pub fn change_role(&mut self, session: &Session, target: UserId, role: Role) -> HotelResult<()> {
        let actor = self.actor(session)?;
        workflow::change_role(&mut self.users, &actor, target, role)
    }

    /// Delete another account
    pub fn delete_user(&mut self, session: &Session, target: UserId) -> HotelResult<User> {
        let actor = self.actor(session)?;
        workflow::delete_user(&mut self.users, &actor, target)
    }

    /// Change the session's own password
    pub fn change_password(
        &mut self,
        session: &Session,
        old_password: &str,
        new_password: &str,
    ) -> HotelResult<()> {
        let actor = self.actor(session)?;
        self.users
            .change_password(actor.id(), old_password, new_password)
    }

    /// The session's own account and reservation count
    pub fn profile(&self, session: &Session) -> HotelResult<UserProfile> {
        let user = self.actor(session)?;
        let reservation_count = self.reservations.list_by_user(user.id()).len();
        Ok(UserProfile {
            user,
            reservation_count,
        })
    }

    /// Occupancy and revenue figures; requires `VIEW_ALL_RESERVATIONS`
    pub fn summary(&self, session: &Session) -> HotelResult<HotelSummary> {
        self.authorize(session, Capability::VIEW_ALL_RESERVATIONS)?;
        let summary = HotelSummary {
            room_count: self.rooms.len(),
            available_rooms: self.rooms.count_available(),
            reservation_count: self.reservations.count(),
            total_revenue: self.reservations.total_revenue(),
            user_count: self.users.count(),
        };
        debug!(?summary, "Summary computed");
        Ok(summary)
    }
}
