//! Suspicion verdict attached to every attendance record

use serde::Serialize;

/// Whether a submission is trusted, and why not
///
/// Reasons keep detection order and are never reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SuspicionVerdict {
    suspicious: bool,
    reasons: Vec<String>,
}

impl SuspicionVerdict {
    /// A verdict with no findings
    #[must_use]
    pub const fn trusted() -> Self {
        Self {
            suspicious: false,
            reasons: Vec::new(),
        }
    }

    /// Rebuild a verdict from stored parts
    #[must_use]
    pub const fn from_parts(suspicious: bool, reasons: Vec<String>) -> Self {
        Self {
            suspicious,
            reasons,
        }
    }

    /// Mark the submission suspicious and record why
    pub fn flag(&mut self, reason: impl Into<String>) {
        self.suspicious = true;
        self.reasons.push(reason.into());
    }

    /// Whether any check fired
    #[must_use]
    pub const fn is_suspicious(&self) -> bool {
        self.suspicious
    }

    /// Reasons in detection order
    #[must_use]
    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }
}
