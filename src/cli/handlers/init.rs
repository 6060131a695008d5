use crate::config::{BlogConfig, CONFIG_FILE, DatabaseSettings};
use crate::error::BlogError;
use crate::storage::Store;
use anyhow::{Context, Result};
use colored::Colorize;

pub async fn handle_init(database: Option<String>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE);

    if config_path.exists() {
        return Err(BlogError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let config = BlogConfig {
        database: DatabaseSettings {
            path: database.unwrap_or_else(|| DatabaseSettings::default().path),
            ..Default::default()
        },
        ..Default::default()
    };

    // Create the database and its tables
    let store = Store::open(&config.database, &cwd)
        .await
        .context("Failed to create database")?;
    store.close().await;

    config.save(&config_path)?;

    println!(
        "{} blogql project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config:   {}", config_path.display());
    println!("  Database: {}", config.database.location(&cwd));

    Ok(())
}
