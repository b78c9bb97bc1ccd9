//! Data models for userql.
//!
//! - [`User`]: a person record served by the query API

mod user;

pub use user::User;
