//! Outcome to response mapping.
//!
//! Purpose: give the boundary layer one total, deterministic translation from
//! an [`Outcome`] to a [`Response`] descriptor.
//!
//! | Classification | Payload                  | Status | Body                        |
//! |----------------|--------------------------|--------|-----------------------------|
//! | `Success`      | absent or sentinel       | 204    | none                        |
//! | `Success`      | present                  | 200¹   | `payload_to_response` value |
//! | `NotFound`     | ignored                  | 404    | problem, "Not Found"        |
//! | `Failed`       | ignored                  | 400    | problem, "Bad Request"      |
//! | `Unauthorized` | ignored                  | 403    | problem, "Forbidden"        |
//!
//! ¹ or whatever the caller's `payload_to_response` chooses, e.g. 201.

use tracing::debug;

use crate::config::DEFAULT_DETAIL_SEPARATOR;
use crate::{
    Classification, NoContent, Outcome, ProblemBody, ProblemDetails, ProblemSettings, Response,
    Status,
};

const NOT_FOUND_TITLE: &str = "Not Found";
const BAD_REQUEST_TITLE: &str = "Bad Request";
const FORBIDDEN_TITLE: &str = "Forbidden";

/// Status and title for unsuccessful classifications; `None` for success.
const fn rejection(classification: Classification) -> Option<(Status, &'static str)> {
    match classification {
        Classification::Success => None,
        Classification::NotFound => Some((Status::NOT_FOUND, NOT_FOUND_TITLE)),
        Classification::Failed => Some((Status::BAD_REQUEST, BAD_REQUEST_TITLE)),
        Classification::Unauthorized => Some((Status::FORBIDDEN, FORBIDDEN_TITLE)),
    }
}

fn no_action<U>(_problem: &mut ProblemBody<'_>, _outcome: &Outcome<U>) {}

/// Translates outcomes into response descriptors.
///
/// A mapper holds only rendering settings and is cheap to share across
/// threads. Every method is a pure, single-shot translation.
///
/// # Examples
/// ```
/// use domain_results::{Mapper, Outcome, Response, Status};
///
/// let mapper = Mapper::default();
///
/// let created = mapper.created((7_u32, Outcome::<()>::success_empty()), "/items/7");
/// assert_eq!(created.status(), Status::CREATED);
///
/// let accepted = mapper.map(Outcome::success("job-1"), |id| {
///     Response::with_status(Status::ACCEPTED, id)
/// });
/// assert_eq!(accepted.status(), Status::ACCEPTED);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapper {
    detail_separator: String,
    problem_type: Option<String>,
}

impl Default for Mapper {
    fn default() -> Self {
        Self {
            detail_separator: DEFAULT_DETAIL_SEPARATOR.to_owned(),
            problem_type: None,
        }
    }
}

impl Mapper {
    /// Mapper rendering problem bodies according to `settings`.
    #[must_use]
    pub fn from_settings(settings: &ProblemSettings) -> Self {
        Self {
            detail_separator: settings.detail_separator().to_owned(),
            problem_type: settings.problem_type().map(ToOwned::to_owned),
        }
    }

    /// `200 OK` with the payload, `204` without one, `4xx` otherwise.
    pub fn ok<T: NoContent>(&self, outcome: Outcome<T>) -> Response<T> {
        self.map(outcome, Response::ok)
    }

    /// Like [`Mapper::ok`], running `error_action` on unsuccessful outcomes.
    pub fn ok_with<T, A>(&self, outcome: Outcome<T>, error_action: A) -> Response<T>
    where
        T: NoContent,
        A: FnOnce(&mut ProblemBody<'_>, &Outcome<T>),
    {
        self.map_with(outcome, Response::ok, error_action)
    }

    /// Map `outcome`, building successful responses with `payload_to_response`.
    pub fn map<T, R, F>(&self, outcome: Outcome<T>, payload_to_response: F) -> Response<R>
    where
        T: NoContent,
        F: FnOnce(T) -> Response<R>,
    {
        self.map_with(outcome, payload_to_response, no_action)
    }

    /// Map `outcome`, letting `error_action` enrich the problem body.
    ///
    /// The action runs only for unsuccessful outcomes, after the status has
    /// been fixed, and sees the body through a handle that cannot change it.
    pub fn map_with<T, R, F, A>(
        &self,
        outcome: Outcome<T>,
        payload_to_response: F,
        error_action: A,
    ) -> Response<R>
    where
        T: NoContent,
        F: FnOnce(T) -> Response<R>,
        A: FnOnce(&mut ProblemBody<'_>, &Outcome<T>),
    {
        let classification = outcome.classification();
        let response = match rejection(classification) {
            None => accept(outcome.into_payload(), payload_to_response),
            Some((status, title)) => self.reject(&outcome, status, title, error_action),
        };
        debug!(%classification, status = %response.status(), "mapped domain outcome");
        response
    }

    /// Map a payload reported alongside a payload-less outcome.
    ///
    /// The payload is only consulted when the outcome succeeded.
    pub fn map_pair<V, U, R, F>(&self, pair: (V, Outcome<U>), payload_to_response: F) -> Response<R>
    where
        V: NoContent,
        F: FnOnce(V) -> Response<R>,
    {
        self.map_pair_with(pair, payload_to_response, no_action)
    }

    /// Like [`Mapper::map_pair`], running `error_action` on unsuccessful
    /// outcomes.
    pub fn map_pair_with<V, U, R, F, A>(
        &self,
        pair: (V, Outcome<U>),
        payload_to_response: F,
        error_action: A,
    ) -> Response<R>
    where
        V: NoContent,
        F: FnOnce(V) -> Response<R>,
        A: FnOnce(&mut ProblemBody<'_>, &Outcome<U>),
    {
        let (value, outcome) = pair;
        let classification = outcome.classification();
        let response = match rejection(classification) {
            None => accept(Some(value), payload_to_response),
            Some((status, title)) => self.reject(&outcome, status, title, error_action),
        };
        debug!(%classification, status = %response.status(), "mapped paired domain outcome");
        response
    }

    /// `201 Created` with the payload and a `Location` header.
    ///
    /// `location` is ignored for unsuccessful outcomes and for sentinel
    /// payloads, which still map to `4xx` and `204` respectively.
    pub fn created<V, U>(&self, pair: (V, Outcome<U>), location: impl AsRef<str>) -> Response<V>
    where
        V: NoContent,
    {
        self.map_pair(pair, |value| Response::created(value, location))
    }

    /// Like [`Mapper::created`], running `error_action` on unsuccessful
    /// outcomes.
    pub fn created_with_action<V, U, A>(
        &self,
        pair: (V, Outcome<U>),
        location: impl AsRef<str>,
        error_action: A,
    ) -> Response<V>
    where
        V: NoContent,
        A: FnOnce(&mut ProblemBody<'_>, &Outcome<U>),
    {
        self.map_pair_with(
            pair,
            |value| Response::created(value, location),
            error_action,
        )
    }

    /// `201 Created` with a `Location` derived from the payload.
    ///
    /// `locate` is only called for successful, non-sentinel payloads.
    pub fn created_with<V, U, L, G>(&self, pair: (V, Outcome<U>), locate: G) -> Response<V>
    where
        V: NoContent,
        L: AsRef<str>,
        G: FnOnce(&V) -> L,
    {
        self.map_pair(pair, |value| {
            let location = locate(&value);
            Response::created(value, location)
        })
    }

    fn reject<U, R, A>(
        &self,
        outcome: &Outcome<U>,
        status: Status,
        title: &str,
        error_action: A,
    ) -> Response<R>
    where
        A: FnOnce(&mut ProblemBody<'_>, &Outcome<U>),
    {
        let mut problem = ProblemDetails::new(status, title);
        let mut body = ProblemBody::new(&mut problem);
        if let Some(problem_type) = &self.problem_type {
            body.set_problem_type(problem_type.as_str());
        }
        body.set_detail(self.detail(outcome.messages()));
        error_action(&mut body, outcome);
        Response::rejected(status, problem)
    }

    fn detail(&self, messages: &[String]) -> Option<String> {
        if messages.is_empty() {
            None
        } else {
            Some(messages.join(self.detail_separator.as_str()))
        }
    }
}

fn accept<V, R, F>(value: Option<V>, payload_to_response: F) -> Response<R>
where
    V: NoContent,
    F: FnOnce(V) -> Response<R>,
{
    match value {
        Some(value) if !value.is_no_content() => payload_to_response(value),
        Some(_) | None => Response::no_content(),
    }
}

impl<T: NoContent> Outcome<T> {
    /// Map with the default [`Mapper`]: `200`, `204` or a `4xx` problem.
    ///
    /// # Examples
    /// ```
    /// use domain_results::{Outcome, Status};
    ///
    /// assert_eq!(Outcome::success(3).into_response().status(), Status::OK);
    /// assert_eq!(Outcome::success(0).into_response().status(), Status::NO_CONTENT);
    /// assert_eq!(Outcome::<u8>::unauthorized().into_response().status(), Status::FORBIDDEN);
    /// ```
    #[must_use]
    pub fn into_response(self) -> Response<T> {
        Mapper::default().ok(self)
    }
}

#[cfg(test)]
mod tests;
