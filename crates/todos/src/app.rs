use axum::{
    http::{header, HeaderName, Method, StatusCode},
    routing::{get, patch, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    context::USER_ID_HEADER,
    handlers::{
        health::livez,
        todos::{create_attachment_url, create_todo, delete_todo, list_todos, update_todo},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(USER_ID_HEADER),
        ]);

    let api_routes = Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{todo_id}", patch(update_todo).delete(delete_todo))
        .route("/todos/{todo_id}/attachment", post(create_attachment_url))
        .layer(cors);

    let request_timeout = state.request_timeout;

    Router::new()
        .route("/livez", get(livez))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}
