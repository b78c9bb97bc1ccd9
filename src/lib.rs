//! # userql - a read-only GraphQL user directory
//!
//! Serves two queries, `getUser` and `listUsers`, over a fixed set of user
//! records held in memory. The records are built once at startup and never
//! change, so requests can be resolved concurrently without locking.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve the API (GraphiQL on http://127.0.0.1:4000)
//! userql serve
//!
//! # Run a query without starting a server
//! userql query '{ listUsers(limit: 3) { id name } }'
//!
//! # Export the schema
//! userql schema --output schema.graphql
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models
//! - [`storage`]: In-memory user store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `userql.toml` configuration files and their discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `UserqlError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and HTTP transport.
pub mod graphql;

pub mod logging;

/// Data models for userql.
pub mod model;

/// In-memory user store.
pub mod storage;
