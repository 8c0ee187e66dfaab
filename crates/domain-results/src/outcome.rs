//! The outcome of a domain operation.
//!
//! Outcomes are transport agnostic. Inbound adapters turn them into HTTP
//! responses through [`Mapper`](crate::Mapper), or into any other
//! protocol-specific envelope.

use serde::{Deserialize, Serialize};

use crate::{Classification, OutcomeValidationError};

/// Classification, payload and diagnostics of a completed domain operation.
///
/// `Outcome<()>` is the payload-less form used by operations that only
/// report a status.
///
/// ## Invariants
/// - `messages` is empty when `classification` is
///   [`Classification::Success`].
/// - `payload` is absent unless `classification` is
///   [`Classification::Success`].
/// - No method mutates an outcome after construction.
///
/// ## Wire format
/// A payload that serialises to `null`, such as `()` or `None`, is written
/// as `"payload": null` and read back as an absent payload. The decoded
/// outcome therefore compares unequal to `Outcome::success(())`, but both
/// map to `204 No Content`.
///
/// # Examples
/// ```
/// use domain_results::{Classification, Outcome};
///
/// let outcome: Outcome<()> = Outcome::error_with_message("name is required");
/// assert_eq!(outcome.classification(), Classification::Failed);
/// assert_eq!(outcome.messages(), ["name is required"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "OutcomeDto<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct Outcome<T = ()> {
    classification: Classification,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    messages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<T>,
}

impl<T> Outcome<T> {
    /// Assemble an outcome whose parts already satisfy the invariants.
    pub(crate) const fn from_parts(
        classification: Classification,
        messages: Vec<String>,
        payload: Option<T>,
    ) -> Self {
        Self {
            classification,
            messages,
            payload,
        }
    }

    /// How the operation ended.
    #[must_use]
    pub const fn classification(&self) -> Classification {
        self.classification
    }

    /// Diagnostic messages in the order they were supplied.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Value returned by the operation, if any.
    #[must_use]
    pub const fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    /// Whether the operation succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.classification.is_success()
    }

    /// Consume the outcome, keeping only its payload.
    #[must_use]
    pub fn into_payload(self) -> Option<T> {
        self.payload
    }

    /// Consume the outcome into its classification, messages and payload.
    #[must_use]
    pub fn into_parts(self) -> (Classification, Vec<String>, Option<T>) {
        (self.classification, self.messages, self.payload)
    }

    /// Transform the payload, keeping classification and messages.
    ///
    /// # Examples
    /// ```
    /// use domain_results::Outcome;
    ///
    /// let outcome = Outcome::success(21).map_payload(|n| n * 2);
    /// assert_eq!(outcome.payload(), Some(&42));
    /// ```
    #[must_use]
    pub fn map_payload<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        Outcome {
            classification: self.classification,
            messages: self.messages,
            payload: self.payload.map(f),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OutcomeDto<T> {
    classification: Classification,
    #[serde(default)]
    messages: Vec<String>,
    payload: Option<T>,
}

impl<T> TryFrom<OutcomeDto<T>> for Outcome<T> {
    type Error = OutcomeValidationError;

    fn try_from(value: OutcomeDto<T>) -> Result<Self, Self::Error> {
        let OutcomeDto {
            classification,
            messages,
            payload,
        } = value;

        if classification.is_success() {
            if !messages.is_empty() {
                return Err(OutcomeValidationError::MessagesOnSuccess {
                    count: messages.len(),
                });
            }
        } else if payload.is_some() {
            return Err(OutcomeValidationError::PayloadOnFailure { classification });
        }

        Ok(Self::from_parts(classification, messages, payload))
    }
}
