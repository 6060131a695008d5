//! GraphQL schema and resolvers for the blog.
//!
//! Every field resolver issues its own store query: listing N posts with
//! their authors costs N+1 queries. Setting `graphql.batch_relations = true`
//! installs a cache-less `DataLoader` that merges relation lookups of the
//! same execution tick into one query each; responses are identical.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! blogql serve --port 4000
//!
//! # Execute a query from CLI
//! blogql query '{ posts { title user { name } } }'
//!
//! # Execute a mutation from CLI
//! blogql mutate 'addUser(email: "a@x.com", name: "Alice")'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `user`, `users`, `post`, `posts`, `comment`, `comments`
//! - **Mutations**: `addUser`, `addPost`, `addComment`

mod loaders;
mod schema;
mod server;
mod types;

pub use loaders::BlogLoader;
pub use schema::{BlogSchema, MutationRoot, QueryRoot, build_schema, schema_sdl};
pub use server::{GRAPHQL_PATH, build_router, run_server, serve};
pub use types::{Comment, Post, User};
