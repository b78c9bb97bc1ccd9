//! Query operations as plain functions over a [`UserStore`].
//!
//! These are total: every well-typed input produces a value, and absence of
//! a match is expressed as `None` or an empty list rather than an error.

use super::types::User;
use crate::storage::UserStore;

/// Page size used by `listUsers` when no `limit` is given.
pub const DEFAULT_LIST_LIMIT: i32 = 10;

pub fn get_user(store: &UserStore, id: &str) -> Option<User> {
    store.find(id).map(User::from)
}

/// Negative limits behave like zero.
pub fn list_users(store: &UserStore, limit: Option<i32>) -> Vec<User> {
    let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT);
    if limit <= 0 {
        return Vec::new();
    }
    let limit = usize::try_from(limit).unwrap_or_default();
    store.first(limit).iter().map(User::from).collect()
}
