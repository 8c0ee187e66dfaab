//! Closed classification of a completed domain operation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::UnknownClassification;

/// How a domain operation ended.
///
/// The set is closed on purpose: the mapper matches it exhaustively, so adding
/// a variant without a response rule does not compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// The operation completed; a payload may accompany it.
    Success,
    /// The entity the operation addressed does not exist.
    NotFound,
    /// The operation was refused, typically because the input was invalid.
    Failed,
    /// The caller is not permitted to perform the operation.
    Unauthorized,
}

impl Classification {
    /// Stable `snake_case` name, identical to the serialised form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::NotFound => "not_found",
            Self::Failed => "failed",
            Self::Unauthorized => "unauthorized",
        }
    }

    /// Whether this is [`Classification::Success`].
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Classification {
    type Err = UnknownClassification;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "success" => Ok(Self::Success),
            "not_found" => Ok(Self::NotFound),
            "failed" => Ok(Self::Failed),
            "unauthorized" => Ok(Self::Unauthorized),
            other => Err(UnknownClassification {
                value: other.to_owned(),
            }),
        }
    }
}
