//! Match state for single legs and whole itineraries.

use super::CriterionOutcome;
use crate::model::Leg;

/// Which criteria of one set a particular leg satisfied.
///
/// Built fresh for every (criteria set, candidate leg) pair during the
/// search and not changed after the search step that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct LegMatch {
    leg: Leg,
    matching: Vec<String>,
    missing: Vec<String>,
}

impl LegMatch {
    /// Create an empty match state for `leg`.
    pub fn new(leg: Leg) -> Self {
        Self {
            leg,
            matching: Vec::new(),
            missing: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, outcome: CriterionOutcome) {
        if outcome.satisfied {
            self.matching.push(outcome.description);
        } else {
            self.missing.push(outcome.description);
        }
    }

    /// Returns the leg under test.
    pub fn leg(&self) -> &Leg {
        &self.leg
    }

    /// Descriptions of the satisfied criteria, in declaration order.
    pub fn matching_criteria(&self) -> &[String] {
        &self.matching
    }

    /// Descriptions of the unsatisfied criteria, in declaration order.
    pub fn missing_criteria(&self) -> &[String] {
        &self.missing
    }

    /// True if at least one criterion was checked and none failed.
    pub fn is_full_match(&self) -> bool {
        self.missing.is_empty() && !self.matching.is_empty()
    }

    /// True if any criterion was satisfied.
    pub fn has_any_match(&self) -> bool {
        !self.matching.is_empty()
    }
}

/// Outcome of matching one itinerary against every criteria set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItineraryMatchResult {
    /// One full match per satisfied criteria set, in set order.
    pub successful_matches: Vec<LegMatch>,

    /// Candidates that satisfied some but not all criteria of a set that
    /// found no full match.
    pub partial_matches: Vec<LegMatch>,

    /// Transit legs left unclaimed in strict mode.
    pub extra_matches: Vec<Leg>,

    /// Human-readable reasons this itinerary failed.
    pub errors: Vec<String>,
}

impl ItineraryMatchResult {
    /// A result where every criteria set found its leg.
    pub fn success(successful_matches: Vec<LegMatch>) -> Self {
        Self {
            successful_matches,
            ..Self::default()
        }
    }

    /// Whether this itinerary satisfied the assertion.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
            && !self.successful_matches.is_empty()
            && self.partial_matches.is_empty()
            && self.extra_matches.is_empty()
    }
}
