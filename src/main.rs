use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use blogql::cli::handlers::{
    CommandContext, handle_comment, handle_init, handle_migrate, handle_mutate, handle_post,
    handle_query, handle_schema, handle_serve, handle_user,
};
use blogql::cli::{Cli, Commands};
use blogql::logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.map(PathBuf::from));

    match cli.command {
        Commands::Init => handle_init(cli.database).await,
        Commands::Schema => handle_schema(),
        command => {
            let ctx = CommandContext::open(cli.config.as_deref(), cli.database).await?;
            let result = run(&ctx, command).await;
            ctx.store.close().await;
            result
        }
    }
}

async fn run(ctx: &CommandContext, command: Commands) -> Result<()> {
    match command {
        Commands::Migrate => handle_migrate(ctx).await,
        Commands::Serve { port, host, batch } => handle_serve(ctx, port, host, batch).await,
        Commands::Query { query, variables } => handle_query(ctx, query, variables).await,
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(ctx, mutation, variables).await,
        Commands::User { action } => handle_user(ctx, action).await,
        Commands::Post { action } => handle_post(ctx, action).await,
        Commands::Comment { action } => handle_comment(ctx, action).await,
        Commands::Init | Commands::Schema => unreachable!("handled before opening the store"),
    }
}
