use std::fmt;

use serde::Serialize;

/// Where a draw stands in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Never validated
    #[default]
    Indefinite,
    /// Legal draw, not searched yet
    Valid,
    /// Search in progress
    Resolving,
    /// The target was reached ("le compte est bon")
    ExactMatch,
    /// The closest reachable value misses the target
    ApproximateMatch,
    /// Target or tiles break the rules
    Invalid,
}

impl Status {
    /// Whether a search completed and solutions can be read
    pub fn is_resolved(&self) -> bool {
        matches!(self, Status::ExactMatch | Status::ApproximateMatch)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Indefinite => "Indefinite",
            Status::Valid => "Valid",
            Status::Resolving => "Resolving",
            Status::ExactMatch => "Exact match",
            Status::ApproximateMatch => "Approximate match",
            Status::Invalid => "Invalid",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
