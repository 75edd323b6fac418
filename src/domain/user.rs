// Copyright 2025 Cowboy AI, LLC.

//! User account entity

use super::role::Role;
use crate::entity::{DomainEntity, UserId, UserMarker};
use crate::errors::{HotelError, HotelResult};
use crate::validation::{is_valid_id, is_valid_string};
use serde::Serialize;
use std::fmt;

/// A user account
///
/// The password is compared by exact match and never leaves the entity:
/// it is skipped by `Serialize`, redacted by `Debug` and absent from
/// `Display`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: UserId,
    username: String,
    #[serde(skip_serializing)]
    password: String,
    role: Role,
}

impl User {
    /// Create an account, rejecting a non-positive id or blank credentials
    pub fn new(
        id: UserId,
        username: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> HotelResult<Self> {
        if !is_valid_id(id.value()) {
            return Err(HotelError::invalid_input("User ID must be positive"));
        }
        let username = username.into();
        if !is_valid_string(&username) {
            return Err(HotelError::invalid_input("Username cannot be empty"));
        }
        let password = password.into();
        if !is_valid_string(&password) {
            return Err(HotelError::invalid_input("Password cannot be empty"));
        }

        Ok(Self {
            id,
            username,
            password,
            role,
        })
    }

    /// User id (immutable)
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Login name
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Current role
    pub fn role(&self) -> Role {
        self.role
    }

    /// Exact-match password check
    pub fn verify_password(&self, password: &str) -> bool {
        self.password == password
    }

    /// Rename the account
    pub fn set_username(&mut self, username: impl Into<String>) -> HotelResult<()> {
        let username = username.into();
        if !is_valid_string(&username) {
            return Err(HotelError::invalid_input("Username cannot be empty"));
        }
        self.username = username;
        Ok(())
    }

    /// Replace the role
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    /// Replace the password after checking the old one
    pub fn change_password(&mut self, old_password: &str, new_password: &str) -> HotelResult<()> {
        if !self.verify_password(old_password) {
            return Err(HotelError::WrongPassword);
        }
        if !is_valid_string(new_password) {
            return Err(HotelError::invalid_input("New password cannot be empty"));
        }
        self.password = new_password.to_string();
        Ok(())
    }
}

impl DomainEntity for User {
    type Marker = UserMarker;
    const ENTITY_TYPE: &'static str = "User";

    fn id(&self) -> UserId {
        self.id
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User {} '{}' ({})", self.id, self.username, self.role)
    }
}
