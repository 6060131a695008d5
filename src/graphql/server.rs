//! HTTP transport for the schema.
//!
//! `POST /graphql` executes requests, `GET /graphql` serves GraphiQL when the
//! playground is enabled, and `GET /health` answers `ok`.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::Router;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post_service};

use crate::config::ServerSettings;
use crate::error::Result;
use crate::storage::Store;

use super::schema::BlogSchema;

pub const GRAPHQL_PATH: &str = "/graphql";

pub fn build_router(schema: BlogSchema, playground: bool) -> Router {
    let endpoint = if playground {
        get(graphiql).post_service(GraphQL::new(schema))
    } else {
        post_service(GraphQL::new(schema))
    };

    Router::new()
        .route(GRAPHQL_PATH, endpoint)
        .route("/health", get(health))
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

async fn health() -> &'static str {
    "ok"
}

/// Serves until Ctrl-C, then closes the store.
pub async fn run_server(schema: BlogSchema, store: Store, settings: &ServerSettings) -> Result<()> {
    let addr = format!("{}:{}", settings.host, settings.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    serve(listener, schema, store, settings.playground, shutdown_signal()).await
}

/// Serves on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(
    listener: tokio::net::TcpListener,
    schema: BlogSchema,
    store: Store,
    playground: bool,
    shutdown: F,
) -> Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!(%addr, playground, "GraphQL server listening");

    let served = axum::serve(listener, build_router(schema, playground))
        .with_graceful_shutdown(shutdown)
        .await;

    // Release the pool whether or not the server exited cleanly
    store.close().await;
    served?;
    tracing::info!("GraphQL server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
