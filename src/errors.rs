use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::pkg::server::uispec::{NotFound, ServerError};

#[derive(Error, Debug)]
pub enum Error {
    #[error("job not found: {0}")]
    JobNotFound(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    #[error("malformed fixture: {0}")]
    Fixture(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::JobNotFound(ref id) => {
                tracing::warn!("job {} not found", id);
                let body = NotFound {}
                    .render()
                    .unwrap_or_else(|_| "404: not found".to_string());
                (StatusCode::NOT_FOUND, Html(body)).into_response()
            }
            err => {
                tracing::error!("request failed: {}", err);
                let body = ServerError {}
                    .render()
                    .unwrap_or_else(|_| "500: something went wrong".to_string());
                (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
            }
        }
    }
}
