mod comment;
mod init;
mod migrate;
mod mutate;
mod post;
mod query;
mod schema;
mod serve;
mod user;
mod utils;

pub use comment::handle_comment;
pub use init::handle_init;
pub use migrate::handle_migrate;
pub use mutate::handle_mutate;
pub use post::handle_post;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;
pub use user::handle_user;

use crate::config::BlogConfig;
use crate::error::BlogError;
use crate::graphql::{BlogSchema, build_schema};
use crate::storage::Store;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BlogConfig,
    pub root: PathBuf,
    pub store: Store,
}

impl CommandContext {
    /// Loads the project config and opens its database.
    ///
    /// With a `database` override and no project on disk, defaults are used
    /// and the current directory acts as the project root.
    pub async fn open(config_path: Option<&str>, database: Option<String>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let loaded = match config_path {
            Some(p) => BlogConfig::load_from(Path::new(p)),
            None => BlogConfig::load(&cwd),
        };

        let (mut config, root) = match (loaded, &database) {
            (Ok(found), _) => found,
            (Err(BlogError::NotInitialized), Some(_)) => (BlogConfig::default(), cwd),
            (Err(e), _) => return Err(e).context("Failed to load blogql configuration"),
        };

        if let Some(db) = database {
            config.database.path = db;
        }

        let store = Store::open(&config.database, &root)
            .await
            .with_context(|| format!("Failed to open database {}", config.database.path))?;

        Ok(Self {
            config,
            root,
            store,
        })
    }

    pub fn schema(&self) -> BlogSchema {
        build_schema(self.store.clone(), &self.config.graphql)
    }
}
