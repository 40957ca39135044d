use axum::{
    Json, Router,
    http::StatusCode,
    middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::{
    dispatch::handle_action, middleware::cors::cross_origin_headers, openapi::ApiDoc,
    state::AppState,
};

/// Builds the application router. The action entry point is mounted both at
/// `/` and at `/api`, and reads the action body for GET as well as POST.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", post(handle_action).get(handle_action).options(preflight))
        .route(
            "/api",
            post(handle_action).get(handle_action).options(preflight),
        )
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(middleware::from_fn(cross_origin_headers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn health() -> Json<&'static str> {
    Json("ok")
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
