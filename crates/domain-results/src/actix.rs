//! Actix adapter for response descriptors.
//!
//! Purpose: let Actix handlers return a [`Response`] directly while the domain
//! and the mapper stay free of any HTTP framework types.

use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::http::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;

use crate::{Body, Response, Status};

/// Media type of RFC 7807 problem bodies.
const PROBLEM_JSON: &str = "application/problem+json";

fn status_for(status: Status) -> StatusCode {
    StatusCode::from_u16(status.as_u16()).unwrap_or_else(|err| {
        // Do not leak implementation details to clients.
        error!(status = %status, error = %err, "response status is not a valid HTTP status");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

impl<T: Serialize> Response<T> {
    /// Build the Actix response for this descriptor.
    ///
    /// Payloads are sent as `application/json`, problem bodies as
    /// `application/problem+json`. Headers that Actix rejects are logged and
    /// skipped.
    #[must_use]
    pub fn into_http_response(self) -> HttpResponse {
        let (status, body, headers) = self.into_parts();
        let mut builder = HttpResponse::build(status_for(status));
        for (name, value) in headers {
            match (
                HeaderName::try_from(name.as_str()),
                HeaderValue::try_from(value.as_str()),
            ) {
                (Ok(name), Ok(value)) => {
                    builder.append_header((name, value));
                }
                _ => error!(header = %name, "dropping header that is not valid HTTP"),
            }
        }

        match body {
            Some(Body::Payload(value)) => builder.json(value),
            Some(Body::Problem(problem)) => builder
                .insert_header((CONTENT_TYPE, PROBLEM_JSON))
                .json(problem),
            None => builder.finish(),
        }
    }
}

impl<T: Serialize> From<Response<T>> for HttpResponse {
    fn from(response: Response<T>) -> Self {
        response.into_http_response()
    }
}

impl<T: Serialize> Responder for Response<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        self.into_http_response()
    }
}
