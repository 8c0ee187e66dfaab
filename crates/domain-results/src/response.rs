//! Transport-level response descriptor.
//!
//! A [`Response`] is the minimal capability surface a wire framework needs:
//! a status code, an optional body and optional headers. Serialising it is
//! the boundary layer's job.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ProblemDetails;

/// Name of the header carrying the URI of a created resource.
pub const LOCATION: &str = "Location";

/// Numeric response status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Status(u16);

impl Status {
    /// `200 OK`.
    pub const OK: Self = Self(200);
    /// `201 Created`.
    pub const CREATED: Self = Self(201);
    /// `202 Accepted`.
    pub const ACCEPTED: Self = Self(202);
    /// `204 No Content`.
    pub const NO_CONTENT: Self = Self(204);
    /// `400 Bad Request`.
    pub const BAD_REQUEST: Self = Self(400);
    /// `403 Forbidden`.
    pub const FORBIDDEN: Self = Self(403);
    /// `404 Not Found`.
    pub const NOT_FOUND: Self = Self(404);

    /// Wrap a raw status code.
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// The raw status code.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Whether the code is in the `2xx` range.
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.0 >= 200 && self.0 < 300
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Status> for u16 {
    fn from(status: Status) -> Self {
        status.0
    }
}

/// Response body: either the operation payload or a problem description.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Body<T> {
    /// Payload produced by a successful operation.
    Payload(T),
    /// Problem details describing an unsuccessful operation.
    Problem(ProblemDetails),
}

/// Status, body and headers handed to the transport layer.
///
/// # Examples
/// ```
/// use domain_results::{LOCATION, Response, Status};
///
/// let response = Response::created("widget", "https://example.test/widgets/1");
/// assert_eq!(response.status(), Status::CREATED);
/// assert_eq!(response.header(LOCATION), Some("https://example.test/widgets/1"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Response<T> {
    status: Status,
    body: Option<Body<T>>,
    headers: Vec<(String, String)>,
}

impl<T> Response<T> {
    /// `200 OK` carrying `value`.
    #[must_use]
    pub const fn ok(value: T) -> Self {
        Self::with_status(Status::OK, value)
    }

    /// `201 Created` carrying `value` with a `Location` header.
    #[must_use]
    pub fn created(value: T, location: impl AsRef<str>) -> Self {
        Self::with_status(Status::CREATED, value).with_header(LOCATION, location.as_ref())
    }

    /// Caller-chosen status carrying `value`, e.g. `202 Accepted`.
    #[must_use]
    pub const fn with_status(status: Status, value: T) -> Self {
        Self {
            status,
            body: Some(Body::Payload(value)),
            headers: Vec::new(),
        }
    }

    /// `204 No Content` without a body.
    #[must_use]
    pub const fn no_content() -> Self {
        Self {
            status: Status::NO_CONTENT,
            body: None,
            headers: Vec::new(),
        }
    }

    pub(crate) const fn rejected(status: Status, problem: ProblemDetails) -> Self {
        Self {
            status,
            body: Some(Body::Problem(problem)),
            headers: Vec::new(),
        }
    }

    /// Append a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Response status code.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Response body, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&Body<T>> {
        self.body.as_ref()
    }

    /// Headers in insertion order.
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// First header named `name`, compared case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Payload body, if the response carries one.
    #[must_use]
    pub const fn payload(&self) -> Option<&T> {
        match &self.body {
            Some(Body::Payload(value)) => Some(value),
            Some(Body::Problem(_)) | None => None,
        }
    }

    /// Problem body, if the response carries one.
    #[must_use]
    pub const fn problem(&self) -> Option<&ProblemDetails> {
        match &self.body {
            Some(Body::Problem(problem)) => Some(problem),
            Some(Body::Payload(_)) | None => None,
        }
    }

    /// Consume the descriptor into its parts.
    #[must_use]
    pub fn into_parts(self) -> (Status, Option<Body<T>>, Vec<(String, String)>) {
        (self.status, self.body, self.headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn ok_carries_the_payload() {
        let response = Response::ok(5);
        assert_eq!(response.status(), Status::OK);
        assert_eq!(response.payload(), Some(&5));
        assert!(response.problem().is_none());
    }

    #[rstest]
    fn rejected_carries_only_the_problem() {
        let problem = ProblemDetails::new(Status::FORBIDDEN, "Forbidden");
        let response: Response<u8> = Response::rejected(Status::FORBIDDEN, problem);
        assert_eq!(response.status(), Status::FORBIDDEN);
        assert!(response.payload().is_none());
        assert_eq!(
            response.problem().map(ProblemDetails::title),
            Some("Forbidden")
        );
    }

    #[rstest]
    fn no_content_has_no_body() {
        let response: Response<u8> = Response::no_content();
        assert_eq!(response.status(), Status::NO_CONTENT);
        assert!(response.body().is_none());
        assert!(response.headers().is_empty());
    }

    #[rstest]
    fn header_lookup_ignores_case() {
        let response = Response::ok(()).with_header("X-Trace", "abc");
        assert_eq!(response.header("x-trace"), Some("abc"));
        assert_eq!(response.header("missing"), None);
    }

    #[rstest]
    #[case(Status::OK, true)]
    #[case(Status::NO_CONTENT, true)]
    #[case(Status::new(302), false)]
    #[case(Status::NOT_FOUND, false)]
    fn success_range(#[case] status: Status, #[case] expected: bool) {
        assert_eq!(status.is_success(), expected);
    }

    #[rstest]
    fn caller_chosen_status_is_kept() {
        let response = Response::with_status(Status::ACCEPTED, "queued");
        assert_eq!(response.status().as_u16(), 202);
        assert_eq!(response.payload(), Some(&"queued"));
    }
}
