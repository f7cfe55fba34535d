//! Greedy leg-to-criteria matching.
//!
//! Each criteria set, in declaration order, claims the first not-yet-claimed
//! leg (in itinerary order) that satisfies all of its criteria. A claimed leg
//! is never reconsidered, so an earlier set can take a leg a later set needed
//! even when some other assignment would satisfy both.

use tracing::{debug, trace};

use super::config::MatchConfig;
use super::error::{AssertionError, ConfigError, ItineraryAssertionError};
use super::report::FailureReport;
use super::{CriteriaSet, ItineraryMatchResult};
use crate::model::{Itinerary, Leg, TripPlan};

/// Check that there is something to match and every set is non-empty.
pub fn validate_criteria(criteria: &[CriteriaSet]) -> Result<(), ConfigError> {
    if criteria.is_empty() {
        return Err(ConfigError::NoCriteria);
    }
    match criteria.iter().position(CriteriaSet::is_empty) {
        Some(idx) => Err(ConfigError::EmptyCriteriaSet(idx + 1)),
        None => Ok(()),
    }
}

/// Match one itinerary against every criteria set.
///
/// Expects criteria that passed [`validate_criteria`]; an empty criteria set
/// can never be satisfied and is reported as unmatched.
pub fn match_itinerary(
    itinerary: &Itinerary,
    criteria: &[CriteriaSet],
    config: &MatchConfig,
) -> ItineraryMatchResult {
    let mut remaining: Vec<&Leg> = itinerary.legs.iter().collect();
    let mut successful_matches = Vec::new();
    let mut partial_matches = Vec::new();
    let mut errors = Vec::new();

    for (set_idx, set) in criteria.iter().enumerate() {
        let mut partials = Vec::new();
        let mut found = None;

        for (pos, leg) in remaining.iter().enumerate() {
            let state = set.evaluate(leg);
            trace!(
                set = set_idx + 1,
                leg = leg.route_display_name(),
                matching = state.matching_criteria().len(),
                missing = state.missing_criteria().len(),
                "evaluated candidate leg"
            );

            if state.is_full_match() {
                found = Some((pos, state));
                break;
            }
            if state.has_any_match() {
                partials.push(state);
            }
        }

        match found {
            Some((pos, state)) => {
                remaining.remove(pos);
                successful_matches.push(state);
            }
            None => {
                errors.push(format!(
                    "No leg found matching criteria set {}: {}",
                    set_idx + 1,
                    set.descriptions().collect::<Vec<_>>().join(", ")
                ));
                partial_matches.extend(partials);
            }
        }
    }

    let mut extra_matches = Vec::new();
    if config.strict_transit_matching && errors.is_empty() {
        extra_matches = remaining
            .into_iter()
            .filter(|leg| leg.is_transit())
            .cloned()
            .collect::<Vec<Leg>>();

        if !extra_matches.is_empty() {
            let names = extra_matches
                .iter()
                .map(Leg::route_display_name)
                .collect::<Vec<_>>()
                .join(" ");
            errors.push(format!(
                "Itinerary contains additional transit legs when strict matching is enabled: {names}"
            ));
        }
    }

    if errors.is_empty() {
        return ItineraryMatchResult::success(successful_matches);
    }

    ItineraryMatchResult {
        successful_matches,
        partial_matches,
        extra_matches,
        errors,
    }
}

/// Succeeds if any itinerary of `plan` satisfies every criteria set.
///
/// Itineraries are tried in plan order and the search stops at the first
/// success. Otherwise the error carries one result per itinerary.
pub fn assert_plan(
    plan: &TripPlan,
    criteria: &[CriteriaSet],
    config: &MatchConfig,
) -> Result<(), AssertionError> {
    validate_criteria(criteria)?;

    let mut failed_results = Vec::with_capacity(plan.itineraries.len());

    for (idx, itinerary) in plan.itineraries.iter().enumerate() {
        let result = match_itinerary(itinerary, criteria, config);
        if result.is_success() {
            debug!(
                itinerary = idx + 1,
                total = plan.itineraries.len(),
                "itinerary matched all criteria sets"
            );
            return Ok(());
        }
        debug!(
            itinerary = idx + 1,
            errors = result.errors.len(),
            partial_matches = result.partial_matches.len(),
            extra_legs = result.extra_matches.len(),
            "itinerary did not match"
        );
        failed_results.push(result);
    }

    debug!(itineraries = plan.itineraries.len(), "no itinerary matched");

    let message = FailureReport {
        plan,
        criteria,
        config,
        results: &failed_results,
    }
    .to_string();

    Err(ItineraryAssertionError::new(message, failed_results).into())
}
