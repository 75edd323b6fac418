// Copyright 2025 Cowboy AI, LLC.

//! Role-based access policy
//!
//! A role maps to a fixed set of capabilities. Callers check the set before
//! running a workflow and get `Unauthorized` instead of a degraded result.
//!
//! | Capability | Customer | Staff | Admin |
//! |------------|----------|-------|-------|
//! | [`VIEW_ROOMS`](Capability::VIEW_ROOMS) | ✓ | ✓ | ✓ |
//! | [`MANAGE_ROOMS`](Capability::MANAGE_ROOMS) | | ✓ | ✓ |
//! | [`BOOK_FOR_SELF`](Capability::BOOK_FOR_SELF) | ✓ | | |
//! | [`VIEW_ALL_RESERVATIONS`](Capability::VIEW_ALL_RESERVATIONS) | | ✓ | ✓ |
//! | [`CANCEL_ANY`](Capability::CANCEL_ANY) | | ✓ | ✓ |
//! | [`MANAGE_USERS`](Capability::MANAGE_USERS) | | | ✓ |
//!
//! # Example
//!
//! ```
//! use hotel_domain::{AccessPolicy, Capability, Role};
//!
//! assert!(AccessPolicy::permits(Role::Staff, Capability::MANAGE_ROOMS));
//! assert!(AccessPolicy::require(Role::Customer, Capability::MANAGE_ROOMS).is_err());
//! ```

use crate::domain::Role;
use crate::errors::{HotelError, HotelResult};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use tracing::warn;

bitflags! {
    /// Named permissions granted to roles
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Capability: u8 {
        /// List rooms and their availability
        const VIEW_ROOMS            = 0b0000_0001;
        /// Add, edit and remove rooms
        const MANAGE_ROOMS          = 0b0000_0010;
        /// Book a room in one's own name
        const BOOK_FOR_SELF         = 0b0000_0100;
        /// See every reservation, revenue included
        const VIEW_ALL_RESERVATIONS = 0b0000_1000;
        /// Cancel reservations held by anyone
        const CANCEL_ANY            = 0b0001_0000;
        /// List, re-role and delete accounts
        const MANAGE_USERS          = 0b0010_0000;
    }
}

impl Capability {
    /// Human-readable list of capability names
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        self.iter_names().map(|(name, _)| name).collect()
    }
}

/// Role → capability mapping
pub struct AccessPolicy;

impl AccessPolicy {
    /// Capabilities granted to `role`
    #[must_use]
    pub fn capabilities(role: Role) -> Capability {
        match role {
            Role::Customer => Capability::VIEW_ROOMS | Capability::BOOK_FOR_SELF,
            Role::Staff => {
                Capability::VIEW_ROOMS
                    | Capability::MANAGE_ROOMS
                    | Capability::VIEW_ALL_RESERVATIONS
                    | Capability::CANCEL_ANY
            }
            Role::Admin => {
                Capability::VIEW_ROOMS
                    | Capability::MANAGE_ROOMS
                    | Capability::VIEW_ALL_RESERVATIONS
                    | Capability::CANCEL_ANY
                    | Capability::MANAGE_USERS
            }
        }
    }

    /// Whether `role` holds every capability in `required`
    #[must_use]
    pub fn permits(role: Role, required: Capability) -> bool {
        Self::capabilities(role).contains(required)
    }

    /// Fails with `Unauthorized` unless `role` holds `required`
    pub fn require(role: Role, required: Capability) -> HotelResult<()> {
        if Self::permits(role, required) {
            return Ok(());
        }
        let missing = required.difference(Self::capabilities(role));
        warn!(%role, missing = ?missing.names(), "Access denied");
        Err(HotelError::Unauthorized {
            role: role.to_string(),
            required: missing.names().join(" | "),
        })
    }
}
