//! Error types for the domain-results crate.
//!
//! Business failures are never errors here: they travel inside an
//! [`Outcome`](crate::Outcome). The enums below only report contract
//! violations detected while decoding outcomes or enriching problem bodies.

use thiserror::Error;

use crate::Classification;

/// A classification name outside the closed set was encountered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown outcome classification: '{value}'")]
pub struct UnknownClassification {
    /// The rejected input.
    pub value: String,
}

/// Errors raised when a decoded outcome breaks its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutcomeValidationError {
    /// A successful outcome arrived with diagnostic messages attached.
    #[error("successful outcomes must not carry messages (found {count})")]
    MessagesOnSuccess {
        /// Number of messages supplied.
        count: usize,
    },

    /// A failed outcome arrived with a payload attached.
    #[error("{classification} outcomes must not carry a payload")]
    PayloadOnFailure {
        /// Classification of the offending outcome.
        classification: Classification,
    },
}

/// Errors raised by [`ProblemBody`](crate::ProblemBody) mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProblemBodyError {
    /// The extension member would shadow a standard problem member.
    #[error("'{name}' is a reserved problem details member")]
    ReservedMember {
        /// The rejected member name.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_classification_formats_correctly() {
        let err = UnknownClassification {
            value: "conflict".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "unknown outcome classification: 'conflict'"
        );
    }

    #[test]
    fn messages_on_success_formats_correctly() {
        let err = OutcomeValidationError::MessagesOnSuccess { count: 2 };
        assert_eq!(
            err.to_string(),
            "successful outcomes must not carry messages (found 2)"
        );
    }

    #[test]
    fn payload_on_failure_formats_correctly() {
        let err = OutcomeValidationError::PayloadOnFailure {
            classification: Classification::NotFound,
        };
        assert_eq!(
            err.to_string(),
            "not_found outcomes must not carry a payload"
        );
    }

    #[test]
    fn reserved_member_formats_correctly() {
        let err = ProblemBodyError::ReservedMember {
            name: "status".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "'status' is a reserved problem details member"
        );
    }
}
