//! SQLite storage layer for the blog.
//!
//! Three tables, one per entity, with store-assigned integer keys:
//!
//! ```sql
//! "user"    ("userId", "email", "name")
//! "post"    ("postId", "userId", "title", "content")
//! "comment" ("commentId", "userId", "postId", "content")
//! ```
//!
//! Every operation on [`Store`] is a single parameterized statement. Foreign
//! keys are not checked, rows are never updated or deleted, and nothing is
//! cached between calls.
//!
//! ## Components
//!
//! - [`Store`]: pool handle, migrations and explicit shutdown
//! - `users`, `posts`, `comments`: get, list, filtered list, insert and
//!   batched `IN (...)` reads per table

mod comments;
mod posts;
mod store;
mod users;

pub use store::Store;

#[cfg(test)]
pub(crate) use store::test_support;
