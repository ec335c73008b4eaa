use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use feedbox_core::storage::{repository_error_to_status_code, RepositoryError};

/// Adapter turning propagated errors into HTTP responses.
///
/// Repository errors map to distinct status codes; anything else is a 500.
/// The dispatcher layer owns this policy, so failures inside the storage
/// path are never silently converted into empty 200s.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        tracing::error!(status = %status_code, error = %self.0, "Request failed");

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
