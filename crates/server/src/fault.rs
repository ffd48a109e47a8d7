use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::error::RenderError;
use thiserror::Error;
use tracing::error;

/// Anything that aborts a response. Clients only ever see a generic 500.
#[derive(Debug, Error)]
pub(crate) enum ServerFault {
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl IntoResponse for ServerFault {
    fn into_response(self) -> Response {
        match &self {
            ServerFault::Render(err) => {
                error!(fragment = %err.fragment(), error = %err, "failed to render response");
            }
        }
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
