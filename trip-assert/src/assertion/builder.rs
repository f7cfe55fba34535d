//! Fluent itinerary assertion builder.

use chrono::Duration;

use super::config::MatchConfig;
use super::engine::assert_plan;
use super::error::{AssertionError, ConfigError};
use super::{CriteriaSet, LegCriterion};
use crate::model::{Leg, LegMode, TripPlan};

/// Asserts that a trip plan contains an itinerary with the expected legs.
///
/// Each [`has_leg`](Self::has_leg) starts a new criteria set; the `with_*`
/// methods that follow add conditions that one single leg must satisfy.
/// Sets are matched in declaration order, each claiming the first unclaimed
/// leg that satisfies it.
///
/// The builder is consumed by value at every step. Once built it holds no
/// interior mutability, so a finished assertion can be shared by reference
/// and checked against many plans, from any thread.
///
/// # Examples
///
/// ```
/// use trip_assert::ItineraryAssertions;
/// use trip_assert::model::{Itinerary, Leg, LegMode, Place, Route, TripPlan};
/// use chrono::Duration;
///
/// let bus = Leg::new(LegMode::Bus, Place::new("Pine St"), Place::new("Broadway"), Duration::minutes(20))
///     .with_route(Route::new("kcm:10").with_short_name("10"));
/// let plan = TripPlan::new(vec![Itinerary::new(vec![bus])]);
///
/// ItineraryAssertions::new()
///     .has_leg()
///     .with_mode(LegMode::Bus)
///     .with_route_short_name(["10"])
///     .assert_matches(&plan)
///     .unwrap();
///
/// let err = ItineraryAssertions::new()
///     .has_leg()
///     .with_mode(LegMode::Tram)
///     .assert_matches(&plan)
///     .unwrap_err();
/// assert!(err.to_string().contains("No leg found matching criteria set 1: mode TRAM"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ItineraryAssertions {
    criteria: Vec<CriteriaSet>,
    current: Option<usize>,
    config: MatchConfig,
    misuse: Option<ConfigError>,
}

impl ItineraryAssertions {
    /// Create an assertion with no criteria and default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new criteria set; later criteria apply to it.
    pub fn has_leg(mut self) -> Self {
        self.criteria.push(CriteriaSet::new());
        self.current = Some(self.criteria.len() - 1);
        self
    }

    /// Adds a criterion to the current set.
    ///
    /// Called before any [`has_leg`](Self::has_leg), the criterion is dropped
    /// and [`assert_matches`](Self::assert_matches) reports
    /// [`ConfigError::CriterionWithoutLeg`].
    pub fn with(mut self, criterion: LegCriterion) -> Self {
        match self.current {
            Some(idx) => self.criteria[idx].push(criterion),
            None => {
                if self.misuse.is_none() {
                    self.misuse = Some(ConfigError::CriterionWithoutLeg(
                        criterion.description().to_string(),
                    ));
                }
            }
        }
        self
    }

    /// Adds a custom criterion built from a description and a predicate.
    pub fn with_criterion<F>(self, description: impl Into<String>, test: F) -> Self
    where
        F: Fn(&Leg) -> bool + Send + Sync + 'static,
    {
        self.with(LegCriterion::new(description, test))
    }

    /// Requires a transit leg on a route with one of these short names.
    pub fn with_route_short_name<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(LegCriterion::route_short_name(names))
    }

    /// Requires a transit leg on a route with one of these long names.
    pub fn with_route_long_name<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(LegCriterion::route_long_name(names))
    }

    /// Requires a transit leg lasting at most `max`.
    pub fn with_max_duration(self, max: Duration) -> Self {
        self.with(LegCriterion::max_duration(max))
    }

    /// Requires a leg in `mode`.
    pub fn with_mode(self, mode: LegMode) -> Self {
        self.with(LegCriterion::mode(mode))
    }

    /// Requires a fare product with this price for the rider category and medium.
    pub fn with_fare_price(
        self,
        price: f32,
        rider_category_id: impl Into<String>,
        medium_id: impl Into<String>,
    ) -> Self {
        self.with(LegCriterion::fare_price(price, rider_category_id, medium_id))
    }

    /// Requires a leg that continues on the previous leg's vehicle.
    pub fn interlined_with_previous_leg(self) -> Self {
        self.with(LegCriterion::interlined_with_previous_leg())
    }

    /// Requires that no transit leg of the matching itinerary is left
    /// unclaimed by a criteria set.
    pub fn with_strict_transit_matching(mut self) -> Self {
        self.config.strict_transit_matching = true;
        self
    }

    /// Replaces the matching configuration.
    pub fn with_config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the criteria sets in declaration order.
    pub fn criteria(&self) -> &[CriteriaSet] {
        &self.criteria
    }

    /// Returns the matching configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Checks that at least one itinerary of `plan` satisfies every criteria set.
    ///
    /// # Errors
    ///
    /// - [`AssertionError::Config`] if the assertion is malformed; no
    ///   itinerary is examined.
    /// - [`AssertionError::NoMatch`] if every itinerary failed, with a report
    ///   and the per-itinerary results.
    pub fn assert_matches(&self, plan: &TripPlan) -> Result<(), AssertionError> {
        if let Some(misuse) = &self.misuse {
            return Err(misuse.clone().into());
        }
        assert_plan(plan, &self.criteria, &self.config)
    }
}
