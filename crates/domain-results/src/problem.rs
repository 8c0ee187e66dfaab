//! Machine-readable problem bodies for unsuccessful outcomes.
//!
//! The JSON shape follows RFC 7807: `type`, `title`, `status`, `detail`,
//! `instance`, plus free-form extension members flattened alongside them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::{ProblemBodyError, Status};

const RESERVED_MEMBERS: [&str; 5] = ["type", "title", "status", "detail", "instance"];

/// Problem details returned with `4xx` responses.
///
/// # Examples
/// ```
/// use domain_results::{Outcome, Status};
///
/// let response = Outcome::<()>::error_with_message("bad").into_response();
/// let problem = response.problem().expect("failed outcomes carry a problem body");
/// assert_eq!(problem.title(), "Bad Request");
/// assert_eq!(problem.status(), Status::BAD_REQUEST);
/// assert_eq!(problem.detail(), Some("bad"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemDetails {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    title: String,
    status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instance: Option<String>,
    #[serde(flatten)]
    extensions: Map<String, Value>,
}

impl ProblemDetails {
    pub(crate) fn new(status: Status, title: impl Into<String>) -> Self {
        Self {
            kind: None,
            title: title.into(),
            status,
            detail: None,
            instance: None,
            extensions: Map::new(),
        }
    }

    /// URI reference identifying the problem type.
    #[must_use]
    pub fn problem_type(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Short summary of the problem type.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Status code mirrored from the response.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Joined diagnostic messages; absent when the outcome had none.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// URI reference identifying this occurrence.
    #[must_use]
    pub fn instance(&self) -> Option<&str> {
        self.instance.as_deref()
    }

    /// Extension members added by error actions.
    #[must_use]
    pub const fn extensions(&self) -> &Map<String, Value> {
        &self.extensions
    }

    /// Look up a single extension member.
    #[must_use]
    pub fn extension(&self, name: &str) -> Option<&Value> {
        self.extensions.get(name)
    }
}

/// Body-only handle passed to error actions.
///
/// Everything except the status can be edited. The status has already been
/// chosen from the outcome classification by the time an action runs.
#[derive(Debug)]
pub struct ProblemBody<'a> {
    problem: &'a mut ProblemDetails,
}

impl<'a> ProblemBody<'a> {
    pub(crate) const fn new(problem: &'a mut ProblemDetails) -> Self {
        Self { problem }
    }

    /// Current title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.problem.title()
    }

    /// Replace the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.problem.title = title.into();
    }

    /// Current detail.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.problem.detail()
    }

    /// Replace or clear the detail.
    pub fn set_detail(&mut self, detail: Option<String>) {
        self.problem.detail = detail;
    }

    /// Set the problem type URI.
    pub fn set_problem_type(&mut self, problem_type: impl Into<String>) {
        self.problem.kind = Some(problem_type.into());
    }

    /// Set the occurrence URI.
    pub fn set_instance(&mut self, instance: impl Into<String>) {
        self.problem.instance = Some(instance.into());
    }

    /// Current value of an extension member.
    #[must_use]
    pub fn extension(&self, name: &str) -> Option<&Value> {
        self.problem.extension(name)
    }

    /// Add or replace an extension member, returning the previous value.
    ///
    /// # Errors
    /// Returns [`ProblemBodyError::ReservedMember`] when `name` collides with
    /// a standard member; the body is left untouched.
    ///
    /// # Examples
    /// ```
    /// use domain_results::{Mapper, Outcome, Response, Status};
    /// use serde_json::json;
    ///
    /// let response = Mapper::default().map_with(
    ///     Outcome::<u8>::error_with_message("x"),
    ///     Response::ok,
    ///     |problem, _outcome| {
    ///         problem
    ///             .insert_extension("traceId", json!("abc"))
    ///             .expect("traceId is not reserved");
    ///         assert!(problem.insert_extension("status", json!(200)).is_err());
    ///     },
    /// );
    /// assert_eq!(response.status(), Status::BAD_REQUEST);
    /// ```
    pub fn insert_extension(
        &mut self,
        name: impl Into<String>,
        value: Value,
    ) -> Result<Option<Value>, ProblemBodyError> {
        let name = name.into();
        if RESERVED_MEMBERS.contains(&name.as_str()) {
            warn!(member = %name, "error action tried to overwrite a reserved problem member");
            return Err(ProblemBodyError::ReservedMember { name });
        }
        Ok(self.problem.extensions.insert(name, value))
    }

    /// Remove an extension member, returning its value.
    pub fn remove_extension(&mut self, name: &str) -> Option<Value> {
        self.problem.extensions.remove(name)
    }
}
