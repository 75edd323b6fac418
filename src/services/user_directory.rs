// Copyright 2025 Cowboy AI, LLC.

//! User directory service

use crate::domain::{Role, User};
use crate::entity::UserId;
use crate::errors::{HotelError, HotelResult};
use crate::store::EntityStore;
use crate::validation::is_valid_string;
use tracing::{debug, info};

/// The authoritative collection of user accounts
///
/// Usernames are unique (exact, case-sensitive match). Ids are chosen by the
/// caller, normally through [`next_id`](Self::next_id).
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: EntityStore<User>,
}

impl UserDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and store an account
    ///
    /// Fails with `UsernameTaken` if the username exists, `InvalidInput`
    /// for invalid fields and `DuplicateId` if the id is already used.
    pub fn register(
        &mut self,
        id: UserId,
        username: &str,
        password: &str,
        role: Role,
    ) -> HotelResult<User> {
        if self.username_exists(username) {
            return Err(HotelError::UsernameTaken(username.to_string()));
        }
        let user = User::new(id, username, password, role)?;
        self.users.insert(user.clone())?;
        info!(user_id = %id, username, %role, "User registered");
        Ok(user)
    }

    /// Check credentials and return the matching account
    pub fn authenticate(&self, username: &str, password: &str) -> HotelResult<User> {
        if !is_valid_string(username) || !is_valid_string(password) {
            return Err(HotelError::InvalidCredentials);
        }
        let user = self
            .find_by_username(username)
            .ok_or_else(|| HotelError::UserNotFound(username.to_string()))?;
        if !user.verify_password(password) {
            debug!(username, "Password mismatch");
            return Err(HotelError::WrongPassword);
        }
        Ok(user.clone())
    }

    fn find_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|user| user.username() == username)
    }

    /// Look up an account
    pub fn get(&self, id: UserId) -> HotelResult<&User> {
        self.users.get(id)
    }

    /// Whether an account with this exact username exists
    pub fn username_exists(&self, username: &str) -> bool {
        self.find_by_username(username).is_some()
    }

    /// One more than the highest id in use, or 1 for an empty directory
    ///
    /// Gaps left by deleted accounts are never reused. Fails with
    /// `InvalidInput` once `i64::MAX` is taken.
    pub fn next_id(&self) -> HotelResult<UserId> {
        let max = self.users.ids().map(|id| id.value()).max().unwrap_or(0);
        max.checked_add(1)
            .map(UserId::new)
            .ok_or_else(|| HotelError::invalid_input("User ID space exhausted"))
    }

    /// Replace an account's role
    pub fn update_role(&mut self, id: UserId, role: Role) -> HotelResult<()> {
        self.users.get_mut(id)?.set_role(role);
        info!(user_id = %id, %role, "User role updated");
        Ok(())
    }

    /// Replace an account's password after checking the old one
    pub fn change_password(
        &mut self,
        id: UserId,
        old_password: &str,
        new_password: &str,
    ) -> HotelResult<()> {
        self.users
            .get_mut(id)?
            .change_password(old_password, new_password)?;
        info!(user_id = %id, "Password changed");
        Ok(())
    }

    /// Remove an account and return it
    pub fn delete(&mut self, id: UserId) -> HotelResult<User> {
        let user = self.users.remove(id)?;
        info!(user_id = %id, username = user.username(), "User deleted");
        Ok(user)
    }

    /// Every account in registration order
    pub fn list_all(&self) -> Vec<User> {
        self.users.snapshot()
    }

    /// Number of accounts
    pub fn count(&self) -> usize {
        self.users.len()
    }
}
