use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::get,
};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::ServerSettings;
use crate::error::Result;

use super::schema::UserSchema;

/// Routes: GraphQL on `/` (GraphiQL on GET when enabled) and `/health`.
pub fn router(schema: UserSchema, graphiql: bool) -> Router {
    let graphql = GraphQL::new(schema);
    let router = if graphiql {
        Router::new().route("/", get(graphiql_page).post_service(graphql))
    } else {
        Router::new().route_service("/", graphql)
    };
    router.route("/health", get(health))
}

pub async fn run_server(schema: UserSchema, settings: &ServerSettings) -> Result<()> {
    let listener = TcpListener::bind(settings.bind_address()).await?;
    let address = listener.local_addr()?;
    info!(%address, graphiql = settings.graphiql, "GraphQL server listening");

    axum::serve(listener, router(schema, settings.graphiql))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("GraphQL server stopped");
    Ok(())
}

async fn graphiql_page() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

async fn health() -> &'static str {
    "ok"
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
