use axum::{
    body::Bytes,
    extract::State,
    http::{Method, Uri},
    response::{IntoResponse, Response},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{
        feedback::{list_feedback, persist_feedback},
        pages::index,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// The whole surface is one dispatcher, so every request lands in the
/// fallback regardless of path.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .fallback(dispatch)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Route a request by method and path.
///
/// - POST (any path, method matched case-insensitively): persist the body.
/// - Any other method on a path containing "feedback": list all records.
/// - Everything else: the static index page.
async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    if method.as_str().eq_ignore_ascii_case("post") {
        persist_feedback(&state, body).await.into_response()
    } else if uri.path().contains("feedback") {
        list_feedback(&state).await.into_response()
    } else {
        index(&state).await.into_response()
    }
}
