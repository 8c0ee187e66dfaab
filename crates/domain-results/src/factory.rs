//! Constructors for every [`Classification`].
//!
//! Construction is total: an absent message simply yields an outcome with no
//! diagnostics.

use crate::{Classification, Outcome, ValidationIssue};

fn collect<I>(messages: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    messages.into_iter().map(Into::into).collect()
}

impl<T> Outcome<T> {
    /// Successful outcome carrying `payload`. Maps to `200 OK`, or `204` when
    /// the payload is a [`NoContent`](crate::NoContent) sentinel.
    #[must_use]
    pub const fn success(payload: T) -> Self {
        Self::from_parts(Classification::Success, Vec::new(), Some(payload))
    }

    /// Successful outcome with nothing to return. Maps to `204 No Content`.
    #[must_use]
    pub const fn success_empty() -> Self {
        Self::from_parts(Classification::Success, Vec::new(), None)
    }

    /// Not-found outcome without diagnostics. Maps to `404 Not Found`.
    #[must_use]
    pub const fn not_found() -> Self {
        Self::from_parts(Classification::NotFound, Vec::new(), None)
    }

    /// Not-found outcome explaining what is missing.
    #[must_use]
    pub fn not_found_with_message(message: impl Into<String>) -> Self {
        Self::not_found_with_messages([message])
    }

    /// Not-found outcome with several diagnostics, order preserved.
    #[must_use]
    pub fn not_found_with_messages<I>(messages: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::from_parts(Classification::NotFound, collect(messages), None)
    }

    /// Failed outcome without diagnostics. Maps to `400 Bad Request`.
    #[must_use]
    pub const fn error() -> Self {
        Self::from_parts(Classification::Failed, Vec::new(), None)
    }

    /// Failed outcome with a single diagnostic.
    #[must_use]
    pub fn error_with_message(message: impl Into<String>) -> Self {
        Self::error_with_messages([message])
    }

    /// Failed outcome with several diagnostics, order preserved.
    #[must_use]
    pub fn error_with_messages<I>(messages: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::from_parts(Classification::Failed, collect(messages), None)
    }

    /// Failed outcome built from validation issues.
    ///
    /// Each issue contributes exactly one message, verbatim and in order.
    ///
    /// # Examples
    /// ```
    /// use domain_results::{Outcome, ValidationIssue};
    ///
    /// let outcome: Outcome<()> = Outcome::invalid([
    ///     ValidationIssue::new("name is required").with_members(["name"]),
    ///     ValidationIssue::new("age must be positive"),
    /// ]);
    /// assert_eq!(outcome.messages(), ["name is required", "age must be positive"]);
    /// ```
    #[must_use]
    pub fn invalid<I>(issues: I) -> Self
    where
        I: IntoIterator<Item = ValidationIssue>,
    {
        Self::error_with_messages(issues.into_iter().map(ValidationIssue::into_message))
    }

    /// Unauthorised outcome without diagnostics. Maps to `403 Forbidden`.
    #[must_use]
    pub const fn unauthorized() -> Self {
        Self::from_parts(Classification::Unauthorized, Vec::new(), None)
    }

    /// Unauthorised outcome with a single diagnostic.
    #[must_use]
    pub fn unauthorized_with_message(message: impl Into<String>) -> Self {
        Self::unauthorized_with_messages([message])
    }

    /// Unauthorised outcome with several diagnostics, order preserved.
    #[must_use]
    pub fn unauthorized_with_messages<I>(messages: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::from_parts(Classification::Unauthorized, collect(messages), None)
    }
}
