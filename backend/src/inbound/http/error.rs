//! HTTP boundary mapping for domain errors.
//!
//! This is the single place where failures become wire payloads. Every
//! failed request, whatever layer raised it, is rendered here exactly once
//! into the fixed [`ErrorBody`] shape. Internal detail is logged and never
//! serialised into 500-class responses.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode};
use crate::middleware::trace::{RequestContext, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message returned for every 500-class response.
const GENERIC_INTERNAL_MESSAGE: &str = "An unexpected error occurred";

/// Wire error payload, identical across all failure paths.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// HTTP status code of the response.
    #[schema(example = 404)]
    pub status: u16,
    /// Reason phrase matching the status code.
    #[schema(example = "Not Found")]
    pub error: String,
    /// Human-readable detail; generic for internal failures.
    #[schema(example = "Cart with ID '68a1c0ffee' not found")]
    pub message: String,
    /// Path of the failed request.
    #[schema(example = "/carts/68a1c0ffee")]
    pub path: String,
    /// ISO-8601 instant at which the error response was built.
    #[schema(example = "2026-08-06T12:00:00.000Z")]
    pub timestamp: String,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Message exposed to the client; internal detail is replaced wholesale.
fn client_message(error: &Error) -> String {
    if matches!(error.code(), ErrorCode::InternalError) {
        GENERIC_INTERNAL_MESSAGE.to_owned()
    } else {
        error.message().to_owned()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let context = RequestContext::current();

        if matches!(self.code(), ErrorCode::InternalError) {
            error!(detail = %self.message(), "internal error reached the boundary");
        }

        let body = ErrorBody {
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_owned(),
            message: client_message(self),
            path: context
                .as_ref()
                .map(|ctx| ctx.path().to_owned())
                .unwrap_or_default(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        let mut builder = HttpResponse::build(status);
        if let Some(ctx) = context {
            builder.insert_header((TRACE_ID_HEADER, ctx.trace_id().to_string()));
        }
        builder.json(body)
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Foreign framework errors carry implementation detail; promote and
        // let the boundary redact.
        error!(error = %err, "actix error promoted to domain error");
        Self::internal(format!("promoted framework error: {err}"))
    }
}

/// Map JSON body deserialisation failures into the domain taxonomy so
/// malformed payloads share the wire error shape with every other failure.
///
/// The response is built here, while the request context is still in scope,
/// so the payload carries the request path like every other failure.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let error = Error::invalid_request(format!("invalid request body: {err}"));
    let response = error.error_response();
    actix_web::error::InternalError::from_response(error, response).into()
}
