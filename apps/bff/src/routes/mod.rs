pub mod health;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{http::Uri, response::Html, routing::get, Router};

use crate::errors::AppError;
use crate::graphql::BffSchema;

/// GET /graphql
/// Interactive explorer pointed at the POST endpoint.
async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

async fn not_found(uri: Uri) -> Result<(), AppError> {
    Err(AppError::NotFound(format!("No route for {uri}")))
}

pub fn build_router(schema: BffSchema) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/graphql", get(graphiql).post_service(GraphQL::new(schema)))
        .fallback(not_found)
}
