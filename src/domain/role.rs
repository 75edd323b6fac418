// Copyright 2025 Cowboy AI, LLC.

//! Account roles

use crate::errors::HotelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Books rooms for themselves and manages their own reservations
    Customer,
    /// Manages rooms and all reservations
    Staff,
    /// Everything staff can do plus user management
    Admin,
}

impl Role {
    /// All roles, lowest privilege first
    pub const ALL: [Role; 3] = [Role::Customer, Role::Staff, Role::Admin];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Customer => "Customer",
            Role::Staff => "Staff",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Role {
    type Err = HotelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| HotelError::invalid_input(format!("unknown role '{s}'")))
    }
}
