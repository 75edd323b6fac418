// Copyright 2025 Cowboy AI, LLC.

//! Account workflows: self-registration and user administration

use crate::access::{AccessPolicy, Capability};
use crate::domain::{Role, User};
use crate::entity::UserId;
use crate::errors::{HotelError, HotelResult};
use crate::services::UserDirectory;
use tracing::info;

/// Register a new customer account
///
/// The password has to be typed twice. The id is the directory's
/// [`next_id`](UserDirectory::next_id).
pub fn register_customer(
    users: &mut UserDirectory,
    username: &str,
    password: &str,
    confirm_password: &str,
) -> HotelResult<User> {
    if users.username_exists(username) {
        return Err(HotelError::UsernameTaken(username.to_string()));
    }
    if password != confirm_password {
        return Err(HotelError::PasswordMismatch);
    }
    let id = users.next_id()?;
    users.register(id, username, password, Role::Customer)
}

/// Give another account a new role; requires `MANAGE_USERS`
pub fn change_role(
    users: &mut UserDirectory,
    actor: &User,
    target: UserId,
    role: Role,
) -> HotelResult<()> {
    AccessPolicy::require(actor.role(), Capability::MANAGE_USERS)?;
    users.update_role(target, role)?;
    info!(actor = %actor.id(), target = %target, %role, "Role changed by administrator");
    Ok(())
}

/// Delete an account; requires `MANAGE_USERS` and refuses the actor's own
///
/// Reservations held by the deleted account are left in place.
pub fn delete_user(users: &mut UserDirectory, actor: &User, target: UserId) -> HotelResult<User> {
    AccessPolicy::require(actor.role(), Capability::MANAGE_USERS)?;
    if target == actor.id() {
        return Err(HotelError::SelfDeletion {
            user_id: target.value(),
        });
    }
    users.delete(target)
}
