//! Structured validation issues accepted by [`Outcome::invalid`](crate::Outcome::invalid).

use serde::{Deserialize, Serialize};

/// A single validation failure as reported by a validator.
///
/// Only the message reaches the outcome; member names stay available for
/// callers that log or inspect issues before building the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    members: Vec<String>,
}

impl ValidationIssue {
    /// Issue with validator-supplied `message` and no member names.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            members: Vec::new(),
        }
    }

    /// Attach the names of the members that failed validation.
    #[must_use]
    pub fn with_members<I>(mut self, members: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.members = members.into_iter().map(Into::into).collect();
        self
    }

    /// Validator-supplied message text.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Names of the members the issue refers to.
    #[must_use]
    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub(crate) fn into_message(self) -> String {
        self.message
    }
}

impl From<String> for ValidationIssue {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for ValidationIssue {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
