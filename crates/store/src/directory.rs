//! User repository.

use tresor_core::teller::store::Directory;
use tresor_core::teller::types::User;
use tresor_shared::types::UserId;

use crate::demo;

/// Input for creating a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Login-style handle (non-empty).
    pub user_name: String,
    /// Given name (non-empty).
    pub first_name: String,
    /// Family name (non-empty).
    pub family_name: String,
    /// Initial activity flag; defaults to active when not supplied.
    pub is_active: Option<bool>,
}

/// Partial update for a user. Non-empty fields replace stored values.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    /// New handle; `None` or empty leaves the stored value.
    pub user_name: Option<String>,
    /// New given name; `None` or empty leaves the stored value.
    pub first_name: Option<String>,
    /// New family name; `None` or empty leaves the stored value.
    pub family_name: Option<String>,
    /// New activity flag, when supplied.
    pub is_active: Option<bool>,
}

/// In-memory user repository, insertion-ordered.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new user, assigning the next sequential id.
    ///
    /// Ids are computed as `count + 1` at insertion time, matching the
    /// ledger's allocation scheme.
    pub fn insert(&mut self, new_user: NewUser) -> User {
        let id = UserId::new(self.users.len() as u64 + 1);
        let user = User {
            id,
            user_name: new_user.user_name,
            first_name: new_user.first_name,
            family_name: new_user.family_name,
            is_active: new_user.is_active.unwrap_or(true),
        };
        self.users.push(user.clone());
        user
    }

    /// Returns the user with the given id, if any.
    #[must_use]
    pub fn find(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// All users, in insertion order.
    #[must_use]
    pub fn list(&self) -> &[User] {
        &self.users
    }

    /// Applies a partial update; returns the updated user.
    ///
    /// Non-empty incoming fields replace stored values; empty or absent
    /// fields leave them unchanged.
    pub fn update(&mut self, id: UserId, changes: UserChanges) -> Option<User> {
        let user = self.users.iter_mut().find(|u| u.id == id)?;
        if let Some(name) = changes.user_name
            && !name.is_empty()
        {
            user.user_name = name;
        }
        if let Some(name) = changes.first_name
            && !name.is_empty()
        {
            user.first_name = name;
        }
        if let Some(name) = changes.family_name
            && !name.is_empty()
        {
            user.family_name = name;
        }
        if let Some(active) = changes.is_active {
            user.is_active = active;
        }
        Some(user.clone())
    }

    /// Removes the user; returns whether it existed.
    pub fn remove(&mut self, id: UserId) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        self.users.len() < before
    }

    /// Drops all users and repopulates the demo fixtures.
    pub fn reset_with_demo_data(&mut self) {
        self.users = demo::demo_users();
    }
}

impl Directory for UserDirectory {
    fn resolve_owner(&self, id: UserId) -> Option<User> {
        self.find(id).cloned()
    }
}
