use crate::config::ServerSettings;
use crate::graphql::{GRAPHQL_PATH, build_schema, run_server};
use anyhow::Result;

use super::CommandContext;

pub async fn handle_serve(
    ctx: &CommandContext,
    port: Option<u16>,
    host: Option<String>,
    batch: bool,
) -> Result<()> {
    let mut settings = ctx.config.server.clone();
    apply_overrides(&mut settings, port, host);

    let mut graphql = ctx.config.graphql.clone();
    graphql.batch_relations |= batch;
    let schema = build_schema(ctx.store.clone(), &graphql);

    println!(
        "Starting GraphQL server on http://{}:{}{}",
        settings.host, settings.port, GRAPHQL_PATH
    );
    if settings.playground {
        println!(
            "GraphiQL: http://{}:{}{}",
            settings.host, settings.port, GRAPHQL_PATH
        );
    }

    run_server(schema, ctx.store.clone(), &settings).await?;
    Ok(())
}

fn apply_overrides(settings: &mut ServerSettings, port: Option<u16>, host: Option<String>) {
    if let Some(p) = port {
        settings.port = p;
    }
    if let Some(h) = host {
        settings.host = h;
    }
}
