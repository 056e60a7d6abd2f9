use serde::Serialize;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Every position recovered
    Complete,
    /// Some positions left as '?'
    Partial,
    /// Length discovery exhausted its range; nothing extracted
    LengthNotFound,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Complete => write!(f, "Complete"),
            Outcome::Partial => write!(f, "Partial"),
            Outcome::LengthNotFound => write!(f, "Length not found"),
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Verification {
    Verified,
    Rejected,
    /// Not attempted (partial or no extraction)
    Skipped,
}

impl From<bool> for Verification {
    fn from(verified: bool) -> Self {
        if verified {
            Verification::Verified
        } else {
            Verification::Rejected
        }
    }
}

impl std::fmt::Display for Verification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verification::Verified => write!(f, "Verified"),
            Verification::Rejected => write!(f, "Rejected"),
            Verification::Skipped => write!(f, "Skipped"),
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct ExtractionReport {
    pub target: String,
    pub username: String,
    pub outcome: Outcome,
    pub length: Option<usize>,
    pub password: Option<String>,
    pub unknown_positions: Vec<usize>,
    pub verification: Verification,
    pub requests: usize,
    pub elapsed_ms: u128,
}
