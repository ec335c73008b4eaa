//! Static index page handler.

use std::fs;

use axum::response::Html;

use crate::state::AppState;

/// Serve the index document (any non-POST request whose path does not
/// mention feedback).
///
/// The file is read per request from alongside the deployed artifact. A
/// missing or unreadable file degrades to a 200 with an empty body - the
/// page surface never answers with an error status - and the failure is
/// logged. This silent-degradation policy is deliberate, not an accident.
pub async fn index(state: &AppState) -> Html<String> {
    match fs::read_to_string(&state.config.index_path) {
        Ok(contents) => Html(contents),
        Err(err) => {
            tracing::error!(
                path = %state.config.index_path,
                error = %err,
                "Failed to read index file"
            );
            Html(String::new())
        }
    }
}
