//! Data models for the blog.
//!
//! Each entity mirrors one table row:
//!
//! - [`User`]: an author, keyed by `userId`
//! - [`Post`]: a post written by a user, keyed by `postId`
//! - [`Comment`]: a comment by a user on a post, keyed by `commentId`
//!
//! The `New*` payloads carry everything except the store-assigned key.

mod comment;
mod post;
mod user;

pub use comment::{Comment, NewComment};
pub use post::{NewPost, Post};
pub use user::{NewUser, User};
