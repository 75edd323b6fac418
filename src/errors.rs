// Copyright 2025 Cowboy AI, LLC.

//! Error types for hotel domain operations

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur in hotel domain operations
///
/// Every variant is recoverable. Services return the specific kind and
/// workflows propagate the first failure unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HotelError {
    /// Lookup miss for a room, reservation or user
    #[error("{entity_type} not found with id {id}")]
    NotFound {
        /// Kind of entity that wasn't found
        entity_type: &'static str,
        /// Id that was searched for
        id: i64,
    },

    /// Id collision on insert
    #[error("{entity_type} with id {id} already exists")]
    DuplicateId {
        /// Kind of entity being inserted
        entity_type: &'static str,
        /// Colliding id
        id: i64,
    },

    /// Non-positive id, blank string, non-positive price, malformed date
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Room attributes rejected on construction or edit
    #[error("Invalid room: {0}")]
    InvalidRoom(String),

    /// Check-out is not strictly after check-in
    #[error("Check-out date {check_out} must be after check-in date {check_in}")]
    InvalidDateRange {
        /// Requested check-in
        check_in: NaiveDate,
        /// Requested check-out
        check_out: NaiveDate,
    },

    /// Booking attempt on an occupied room
    #[error("Room {room_id} is not available")]
    RoomUnavailable {
        /// Occupied room
        room_id: i64,
    },

    /// Registration with a username already in the directory
    #[error("Username already exists: {0}")]
    UsernameTaken(String),

    /// Blank username or password on login
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No account with this username
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Password did not match the stored one
    #[error("Invalid password")]
    WrongPassword,

    /// Password and its confirmation differ
    #[error("Passwords don't match")]
    PasswordMismatch,

    /// Role lacks the capability the operation needs
    #[error("Unauthorized: {role} lacks {required}")]
    Unauthorized {
        /// Display name of the acting role
        role: String,
        /// Name of the missing capability
        required: String,
    },

    /// An account tried to delete itself
    #[error("User {user_id} cannot delete their own account")]
    SelfDeletion {
        /// Acting user
        user_id: i64,
    },

    /// Room removal blocked by outstanding reservations
    #[error("Room {room_id} still has {count} reservation(s)")]
    RoomHasReservations {
        /// Room that was to be removed
        room_id: i64,
        /// Reservations referencing it
        count: usize,
    },
}

/// Result type for hotel domain operations
pub type HotelResult<T> = Result<T, HotelError>;

impl HotelError {
    /// Shorthand for a lookup miss
    pub fn not_found(entity_type: &'static str, id: i64) -> Self {
        HotelError::NotFound { entity_type, id }
    }

    /// Shorthand for an invalid input with a message
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        HotelError::InvalidInput(msg.into())
    }

    /// Check if this is a lookup miss
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            HotelError::NotFound { .. } | HotelError::UserNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            HotelError::InvalidInput(_)
                | HotelError::InvalidRoom(_)
                | HotelError::InvalidDateRange { .. }
                | HotelError::PasswordMismatch
        )
    }

    /// Check if this is a failed login or password check
    pub fn is_authentication_error(&self) -> bool {
        matches!(
            self,
            HotelError::InvalidCredentials
                | HotelError::UserNotFound(_)
                | HotelError::WrongPassword
        )
    }
}
