//! Protocol-agnostic domain operation outcomes.
//!
//! Business logic reports what happened through an [`Outcome`]: a closed
//! [`Classification`], an optional payload, and an ordered list of diagnostic
//! messages. The boundary layer hands that outcome to a [`Mapper`], which
//! translates it into a transport-level [`Response`] descriptor without the
//! domain ever naming a status code.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Building outcomes for each classification, including from validation
//!   issues
//! - Mapping outcomes to `200`/`204`/`201` responses or RFC 7807 problem
//!   bodies (`404`, `400`, `403`)
//! - Enriching problem bodies through an error action that cannot touch the
//!   status code
//! - Mapping pending outcomes once they resolve
//! - Serving descriptors straight from actix-web handlers (feature `actix`)
//!
//! # Example
//!
//! ```
//! use domain_results::{Outcome, Status};
//!
//! let found: Outcome<u32> = Outcome::success(7);
//! assert_eq!(found.into_response().status(), Status::OK);
//!
//! let missing: Outcome<u32> = Outcome::not_found_with_messages(["a", "b"]);
//! let response = missing.into_response();
//! assert_eq!(response.status(), Status::NOT_FOUND);
//! assert_eq!(
//!     response.problem().and_then(|problem| problem.detail()),
//!     Some("a, b")
//! );
//! ```

#[cfg(feature = "actix")]
mod actix;
mod classification;
mod config;
mod error;
mod factory;
mod future;
mod mapper;
mod no_content;
mod outcome;
mod problem;
mod response;
mod validation;

pub use classification::Classification;
pub use config::ProblemSettings;
pub use error::{OutcomeValidationError, ProblemBodyError, UnknownClassification};
pub use mapper::Mapper;
pub use no_content::NoContent;
pub use outcome::Outcome;
pub use problem::{ProblemBody, ProblemDetails};
pub use response::{Body, LOCATION, Response, Status};
pub use validation::ValidationIssue;
