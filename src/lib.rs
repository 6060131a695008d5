//! # blogql - a GraphQL blog API over SQLite
//!
//! Users write posts, users comment on posts. All three entities live in
//! SQLite tables with store-assigned integer keys and are exposed through a
//! GraphQL query/mutation API, either over HTTP or straight from the CLI.
//!
//! ## Quick Start
//!
//! ```bash
//! # Create .blogql.toml and blog.db
//! blogql init
//!
//! blogql mutate 'addUser(email: "a@x.com", name: "Alice")'
//! blogql mutate 'addPost(userId: 1, title: "Hi", content: "Body")'
//! blogql query '{ post(postId: 1) { title user { name } } }'
//!
//! # Serve POST /graphql (and GraphiQL on GET /graphql)
//! blogql serve --port 4000
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Row types (User, Post, Comment)
//! - [`storage`]: SQLite store handle and queries

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.blogql.toml` configuration files and project discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BlogError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum server exposing it.
pub mod graphql;

/// Data models for the blog.
pub mod model;

/// SQLite storage layer.
///
/// One parameterized statement per operation, no caching.
pub mod storage;

pub mod logging;
