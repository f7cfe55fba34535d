//! Assertion error types.
//!
//! Configuration errors mean the assertion itself is malformed and are
//! reported before any itinerary is looked at. A failed match carries the
//! full per-itinerary diagnostics.

use super::ItineraryMatchResult;

/// The assertion was set up incorrectly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No `has_leg()` call was made
    #[error("no leg criteria specified")]
    NoCriteria,

    /// A criteria set (1-based) has no criteria in it
    #[error("no leg criteria specified for criteria set {0}")]
    EmptyCriteriaSet(usize),

    /// A criterion was added before the first `has_leg()`
    #[error("criterion '{0}' added before has_leg()")]
    CriterionWithoutLeg(String),
}

/// No itinerary in the plan satisfied every criteria set.
///
/// `message` is the human-readable report; `failed_results` holds one
/// result per itinerary, in plan order, for programmatic inspection.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ItineraryAssertionError {
    message: String,
    failed_results: Vec<ItineraryMatchResult>,
}

impl ItineraryAssertionError {
    /// Creates an error from a rendered report and the results behind it.
    pub fn new(message: String, failed_results: Vec<ItineraryMatchResult>) -> Self {
        Self {
            message,
            failed_results,
        }
    }

    /// Returns the rendered failure report.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the match result of every itinerary that was tried.
    pub fn failed_results(&self) -> &[ItineraryMatchResult] {
        &self.failed_results
    }
}

/// Error returned by [`ItineraryAssertions::assert_matches`](super::ItineraryAssertions::assert_matches).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssertionError {
    #[error("invalid itinerary assertion: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    NoMatch(#[from] ItineraryAssertionError),
}

impl AssertionError {
    /// Returns the match failure, if this is one.
    pub fn as_no_match(&self) -> Option<&ItineraryAssertionError> {
        match self {
            AssertionError::NoMatch(err) => Some(err),
            AssertionError::Config(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ConfigError::NoCriteria;
        assert_eq!(err.to_string(), "no leg criteria specified");

        let err = ConfigError::EmptyCriteriaSet(2);
        assert_eq!(
            err.to_string(),
            "no leg criteria specified for criteria set 2"
        );

        let err = ConfigError::CriterionWithoutLeg("mode BUS".into());
        assert_eq!(err.to_string(), "criterion 'mode BUS' added before has_leg()");

        let err = AssertionError::from(ConfigError::NoCriteria);
        assert_eq!(
            err.to_string(),
            "invalid itinerary assertion: no leg criteria specified"
        );
    }

    #[test]
    fn no_match_keeps_message_and_results() {
        let failed_results = vec![ItineraryMatchResult::success(Vec::new())];
        let err = ItineraryAssertionError::new("boom".into(), failed_results.clone());

        assert_eq!(err.to_string(), "boom");
        assert_eq!(err.failed_results(), failed_results.as_slice());

        let err = AssertionError::from(err);
        assert_eq!(err.to_string(), "boom");
        assert_eq!(err.as_no_match().map(|e| e.message()), Some("boom"));
    }
}
