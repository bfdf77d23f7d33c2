//! Error types for the database facade.
//!
//! The facade owns a single error kind of its own, [`Error::NotInitialized`]. Configuration
//! problems are reported through [`ConfigError`], and every other failure is the ORM's own
//! [`sea_orm::DbErr`], passed through unmodified. All errors implement `IntoResponse` so
//! handlers can propagate them with `?`.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{error::config::ConfigError, model::api::ErrorDto};

/// Main error type for the facade.
#[derive(Error, Debug)]
pub enum Error {
    /// An operation that needs the engine was called before [`crate::Db::init_app`].
    #[error("Database not initialized, call Db::init_app() first")]
    NotInitialized,
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Database error (connection failures, constraint violations, query errors).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Converts facade errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For `DbErr::RecordNotFound`
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::DbErr(sea_orm::DbErr::RecordNotFound(message)) => {
                tracing::debug!("Record not found: {}", message);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Not found".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged, the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
