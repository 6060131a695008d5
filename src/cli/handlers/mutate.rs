use anyhow::Result;

use super::CommandContext;
use super::query::execute;

pub async fn handle_mutate(
    ctx: &CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    // Auto-wrap in mutation { }
    let query = format!("mutation {{ {} }}", mutation);
    let response = execute(ctx, &query, variables).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
