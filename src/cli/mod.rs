//! Command-line interface: clap definitions in [`commands`], one handler per
//! command in [`handlers`].

pub mod commands;
pub mod handlers;

pub use commands::{Cli, CommentAction, Commands, PostAction, UserAction};
