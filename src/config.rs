// Copyright 2025 Cowboy AI, LLC.

//! Seed configuration for a [`Hotel`](crate::Hotel)
//!
//! ```json
//! {
//!   "rooms": [{ "id": 1, "room_type": "Single", "price": 100.0 }],
//!   "users": [{ "id": 1, "username": "admin", "password": "admin123", "role": "Admin" }]
//! }
//! ```

use crate::domain::Role;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A room to create at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSeed {
    /// Room number
    pub id: i64,
    /// Free-form type label
    pub room_type: String,
    /// Nightly price
    pub price: f64,
    /// Whether the room starts bookable
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

/// An account to create at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSeed {
    /// User id
    pub id: i64,
    /// Login name
    pub username: String,
    /// Initial password
    pub password: String,
    /// Role
    pub role: Role,
}

/// Rooms and accounts a hotel starts with
///
/// `Default` is the stock demo data: three rooms and one account per role.
/// A JSON document that omits a section gets an empty list for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelConfig {
    /// Seed rooms, in insertion order
    #[serde(default)]
    pub rooms: Vec<RoomSeed>,
    /// Seed accounts, in insertion order
    #[serde(default)]
    pub users: Vec<UserSeed>,
}

impl Default for HotelConfig {
    fn default() -> Self {
        let room = |id, room_type: &str, price| RoomSeed {
            id,
            room_type: room_type.to_string(),
            price,
            available: true,
        };
        let user = |id, username: &str, password: &str, role| UserSeed {
            id,
            username: username.to_string(),
            password: password.to_string(),
            role,
        };
        Self {
            rooms: vec![
                room(1, "Single", 100.0),
                room(2, "Double", 150.0),
                room(3, "Suite", 300.0),
            ],
            users: vec![
                user(1, "admin", "admin123", Role::Admin),
                user(2, "staff", "staff123", Role::Staff),
                user(3, "customer", "customer123", Role::Customer),
            ],
        }
    }
}

impl HotelConfig {
    /// A configuration with no rooms and no accounts
    pub fn empty() -> Self {
        Self {
            rooms: Vec::new(),
            users: Vec::new(),
        }
    }

    /// Parse a JSON document
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Invalid hotel configuration")
    }

    /// Read and parse a JSON file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read hotel configuration from {}", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("Failed to load hotel configuration from {}", path.display()))
    }
}
