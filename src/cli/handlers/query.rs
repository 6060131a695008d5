use anyhow::Result;

use super::CommandContext;

pub async fn handle_query(
    ctx: &CommandContext,
    query: String,
    variables: Option<String>,
) -> Result<()> {
    let response = execute(ctx, &query, variables).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Runs one request against a fresh schema over the context's store.
pub(super) async fn execute(
    ctx: &CommandContext,
    query: &str,
    variables: Option<String>,
) -> Result<async_graphql::Response> {
    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v)?
    } else {
        async_graphql::Variables::default()
    };

    let request = async_graphql::Request::new(query).variables(vars);
    Ok(ctx.schema().execute(request).await)
}
