use std::path::Path;
use std::str::FromStr;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite};

use crate::config::DatabaseSettings;
use crate::error::Result;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Handle to the blog database.
///
/// Cloning is cheap and every clone shares the same pool. The handle is
/// created once at startup with [`Store::open`] and released with
/// [`Store::close`]; nothing here caches rows between calls.
#[derive(Clone, Debug)]
pub struct Store {
    pub(super) pool: SqlitePool,
}

impl Store {
    /// Opens (creating if missing) the configured database and applies migrations.
    pub async fn open(settings: &DatabaseSettings, project_root: &Path) -> Result<Self> {
        let pool = if settings.is_in_memory() {
            memory_pool(SqliteConnectOptions::from_str("sqlite::memory:")?).await?
        } else {
            let path = settings.resolve_path(project_root);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let options = SqliteConnectOptions::new()
                .filename(&path)
                .create_if_missing(true);
            SqlitePoolOptions::new()
                .max_connections(settings.max_connections.max(1))
                .connect_with(options)
                .await?
        };

        tracing::info!(path = %settings.path, "Opened blog database");

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Connects to a `sqlite:` URL and applies migrations.
    ///
    /// `sqlite::memory:` gets the same single-connection pool as `open`.
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let in_memory = url.contains(":memory:") || url.contains("mode=memory");
        let pool = if in_memory {
            memory_pool(options).await?
        } else {
            SqlitePoolOptions::new().connect_with(options).await?
        };

        tracing::info!(%url, "Connected to blog database");

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Applies any pending schema migrations.
    pub async fn migrate(&self) -> Result<()> {
        MIGRATOR.run(&self.pool).await?;
        tracing::debug!("Migrations applied");
        Ok(())
    }

    /// Closes every pooled connection. Clones of this handle become unusable.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Closed blog database");
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}

// Every connection to `:memory:` is a separate database, so pin the pool to one.
async fn memory_pool(options: SqliteConnectOptions) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Appends `(?, ?, ...)` for `ids` to a query ending in `IN `.
pub(super) fn push_in_list(qb: &mut QueryBuilder<'_, Sqlite>, ids: &[i64]) {
    qb.push("(");
    let mut separated = qb.separated(", ");
    for id in ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(")");
}
