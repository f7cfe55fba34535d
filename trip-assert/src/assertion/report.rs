//! Failure report rendering.

use std::fmt;

use super::config::MatchConfig;
use super::{CriteriaSet, ItineraryMatchResult, LegMatch};
use crate::model::{Leg, TripPlan};

/// Human-readable explanation of why no itinerary matched.
///
/// `results[i]` must be the result for `plan.itineraries[i]`.
pub(crate) struct FailureReport<'a> {
    pub plan: &'a TripPlan,
    pub criteria: &'a [CriteriaSet],
    pub config: &'a MatchConfig,
    pub results: &'a [ItineraryMatchResult],
}

impl fmt::Display for FailureReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strict = if self.config.strict_transit_matching {
            " with strict transit matching"
        } else {
            ""
        };
        writeln!(f, "No itinerary found matching all required legs{strict}:")?;

        for (idx, set) in self.criteria.iter().enumerate() {
            writeln!(f, "Leg {} criteria:", idx + 1)?;
            for description in set.descriptions() {
                writeln!(f, "{description}")?;
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        writeln!(f, "Failures by itinerary:")?;

        for (idx, (result, itinerary)) in self
            .results
            .iter()
            .zip(&self.plan.itineraries)
            .enumerate()
        {
            writeln!(f, "Itinerary {}:", idx + 1)?;

            for error in &result.errors {
                writeln!(f, "  - {error}")?;
            }

            if !result.partial_matches.is_empty() {
                writeln!(f, "  Partial matches:")?;
                for partial in &result.partial_matches {
                    writeln!(f, "    - {}", PartialLine(partial))?;
                }
            }

            writeln!(f, "  Actual itinerary:")?;
            for (leg_idx, leg) in itinerary.legs.iter().enumerate() {
                writeln!(f, "    Leg {}: {}", leg_idx + 1, LegLine(leg))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// `Leg 10 matching: [mode BUS], missing: [route '[11]']`
struct PartialLine<'a>(&'a LegMatch);

impl fmt::Display for PartialLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Leg {} matching: [{}], missing: [{}]",
            self.0.leg().route_display_name(),
            self.0.matching_criteria().join(", "),
            self.0.missing_criteria().join(", ")
        )
    }
}

/// One line of the actual-itinerary listing.
struct LegLine<'a>(&'a Leg);

impl fmt::Display for LegLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let leg = self.0;
        if leg.is_transit() {
            let interlined = if leg.interline_with_previous_leg {
                " (interlined)"
            } else {
                ""
            };
            write!(
                f,
                "TRANSIT - Route: {}{interlined}, From: {}, To: {}",
                leg.route_display_name(),
                leg.from.name(),
                leg.to.name()
            )
        } else {
            write!(
                f,
                "{} - From: {}, To: {}, Distance: {:.0}m",
                leg.mode,
                leg.from.name(),
                leg.to.name(),
                leg.distance
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assertion::LegCriterion;
    use crate::model::{Itinerary, LegMode, Place, Route};
    use chrono::Duration;

    fn bus(short: &str) -> Leg {
        Leg::new(
            LegMode::Bus,
            Place::new("Pine St"),
            Place::new("Broadway"),
            Duration::minutes(12),
        )
        .with_route(Route::new("kcm").with_short_name(short))
    }

    fn walk() -> Leg {
        Leg::new(
            LegMode::Walk,
            Place::new("Origin"),
            Place::new("Pine St"),
            Duration::minutes(3),
        )
        .with_distance(249.6)
    }

    #[test]
    fn leg_lines() {
        assert_eq!(
            LegLine(&bus("10")).to_string(),
            "TRANSIT - Route: 10, From: Pine St, To: Broadway"
        );
        assert_eq!(
            LegLine(&bus("10").interlined()).to_string(),
            "TRANSIT - Route: 10 (interlined), From: Pine St, To: Broadway"
        );
        assert_eq!(
            LegLine(&walk()).to_string(),
            "WALK - From: Origin, To: Pine St, Distance: 250m"
        );
    }

    #[test]
    fn full_report_layout() {
        let plan = TripPlan::new(vec![Itinerary::new(vec![walk(), bus("10")])]);
        let criteria: Vec<CriteriaSet> = vec![
            [LegCriterion::mode(LegMode::Tram), LegCriterion::route_short_name(["10"])]
                .into_iter()
                .collect(),
        ];

        let mut partial = LegMatch::new(bus("10"));
        partial.record(LegCriterion::mode(LegMode::Tram).evaluate(&bus("10")));
        partial.record(LegCriterion::route_short_name(["10"]).evaluate(&bus("10")));

        let results = vec![ItineraryMatchResult {
            partial_matches: vec![partial],
            errors: vec!["No leg found matching criteria set 1: mode TRAM, route '[10]'".into()],
            ..ItineraryMatchResult::default()
        }];

        let report = FailureReport {
            plan: &plan,
            criteria: &criteria,
            config: &MatchConfig::strict(),
            results: &results,
        }
        .to_string();

        let expected = "\
No itinerary found matching all required legs with strict transit matching:
Leg 1 criteria:
mode TRAM
route '[10]'


Failures by itinerary:
Itinerary 1:
  - No leg found matching criteria set 1: mode TRAM, route '[10]'
  Partial matches:
    - Leg 10 matching: [route '[10]'], missing: [mode TRAM]
  Actual itinerary:
    Leg 1: WALK - From: Origin, To: Pine St, Distance: 250m
    Leg 2: TRANSIT - Route: 10, From: Pine St, To: Broadway

";
        assert_eq!(report, expected);
    }
}
