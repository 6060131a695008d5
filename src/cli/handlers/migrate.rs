use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub async fn handle_migrate(ctx: &CommandContext) -> Result<()> {
    ctx.store.migrate().await?;
    println!(
        "{} {}",
        "Migrated".green(),
        ctx.config.database.location(&ctx.root)
    );
    Ok(())
}
