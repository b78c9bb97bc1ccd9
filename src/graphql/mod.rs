//! GraphQL schema and resolvers for userql.
//!
//! Exposes a read-only API over the in-memory [`UserStore`](crate::storage::UserStore).
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! userql serve --port 4000
//!
//! # Execute a query from CLI
//! userql query '{ getUser(id: "user-1") { name email } }'
//!
//! # Print the schema
//! userql schema
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `getUser`, `listUsers`

mod extensions;
pub mod resolvers;
mod schema;
mod server;
mod types;

pub use extensions::{SYNTAX_ERROR_PREFIX, SyntaxErrors};
pub use resolvers::DEFAULT_LIST_LIMIT;
pub use schema::{QueryRoot, UserSchema, build_schema, export_sdl};
pub use server::{router, run_server};
pub use types::*;
