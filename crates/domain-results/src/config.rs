//! Problem body configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Separator placed between joined diagnostic messages.
pub(crate) const DEFAULT_DETAIL_SEPARATOR: &str = ", ";

/// Settings controlling how problem bodies are rendered.
///
/// The defaults produce `detail` values joined with `", "` and no `type`
/// member.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DOMAIN_RESULTS")]
pub struct ProblemSettings {
    /// Separator used when joining outcome messages into `detail`.
    ///
    /// Values read from `DOMAIN_RESULTS_DETAIL_SEPARATOR` are trimmed, so a
    /// separator set from the environment cannot start or end with
    /// whitespace.
    #[ortho_config(default = ", ".to_owned())]
    pub detail_separator: String,
    /// URI reference emitted as the `type` member of every problem body.
    pub problem_type: Option<String>,
}

impl ProblemSettings {
    /// Return the configured separator.
    #[must_use]
    pub fn detail_separator(&self) -> &str {
        &self.detail_separator
    }

    /// Return the configured problem type, if any.
    #[must_use]
    pub fn problem_type(&self) -> Option<&str> {
        self.problem_type.as_deref()
    }
}
