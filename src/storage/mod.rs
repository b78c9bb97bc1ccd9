//! In-memory user storage.
//!
//! The store is built once before the server accepts traffic and is never
//! mutated afterwards, so it can be shared across requests behind an `Arc`.

mod user_store;

pub use user_store::{REFERENCE_AGE, REFERENCE_USER_COUNT, UserStore};
