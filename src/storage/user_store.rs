use crate::{
    error::{Result, UserqlError},
    model::User,
};
use std::collections::HashSet;

/// Number of records in the reference dataset.
pub const REFERENCE_USER_COUNT: usize = 10;

/// Age shared by every record in the reference dataset.
pub const REFERENCE_AGE: i32 = 28;

/// Ordered, read-only collection of users.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    /// Builds a store from `users`, keeping their order.
    ///
    /// Fails with [`UserqlError::DuplicateId`] if two records share an ID.
    pub fn new(users: Vec<User>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(users.len());
        for user in &users {
            if !seen.insert(user.id.as_str()) {
                return Err(UserqlError::DuplicateId(user.id.clone()));
            }
        }
        Ok(Self { users })
    }

    /// The reference dataset: `user-1` through `user-10`.
    pub fn reference() -> Self {
        let users = (1..=REFERENCE_USER_COUNT)
            .map(|n| {
                User::new(
                    format!("user-{}", n),
                    format!("Michael{}", n),
                    format!("michaeldouglasdev{}@gmail.com", n),
                    REFERENCE_AGE,
                )
            })
            .collect();
        Self { users }
    }

    pub fn all_users(&self) -> &[User] {
        &self.users
    }

    /// First record whose ID matches exactly. Case-sensitive, no trimming.
    pub fn find(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// The first `min(limit, len)` records in store order.
    pub fn first(&self, limit: usize) -> &[User] {
        &self.users[..limit.min(self.users.len())]
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
