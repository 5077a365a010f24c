//! Error types shared across the Vendora crates.

use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::types::ApiResponse;

pub type VndResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// Vendor or category row absent
	NotFound,
	/// Malformed or missing field, caught at the API boundary
	ValidationError(String),
	/// Uniqueness violation (category_key per vendor)
	Conflict(String),
	/// Connection or statement failure in the relational store
	DbError,
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::Conflict(msg) => write!(f, "conflict: {}", msg),
			Error::DbError => write!(f, "database failure"),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		let (status, body) = match self {
			Error::NotFound => {
				(StatusCode::NOT_FOUND, ApiResponse::<()>::failure("Not found"))
			}
			Error::ValidationError(msg) => (StatusCode::BAD_REQUEST, ApiResponse::failure(msg)),
			Error::Conflict(msg) => (StatusCode::CONFLICT, ApiResponse::failure(msg)),
			err => {
				// The underlying detail goes to the log, not the client
				tracing::error!("internal error: {}", err);
				(
					StatusCode::INTERNAL_SERVER_ERROR,
					ApiResponse::failure("Internal server error").with_error(err.to_string()),
				)
			}
		};
		(status, Json(body)).into_response()
	}
}

// vim: ts=4
