//! Leg criteria and criteria sets.
//!
//! A criterion is a named, pure test over a single leg. A criteria set is
//! everything one leg has to satisfy at once; evaluating a set against a leg
//! folds each criterion's outcome into a [`LegMatch`].

use std::fmt;
use std::sync::Arc;

use chrono::Duration;

use super::LegMatch;
use crate::model::{Leg, LegMode};

type LegTest = dyn Fn(&Leg) -> bool + Send + Sync;

/// Result of applying one criterion to one leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriterionOutcome {
    pub satisfied: bool,
    pub description: String,
}

/// One condition a leg must satisfy.
///
/// The description is what appears in failure reports, so two criteria with
/// the same description are indistinguishable there.
#[derive(Clone)]
pub struct LegCriterion {
    description: String,
    test: Arc<LegTest>,
}

impl LegCriterion {
    /// Create a criterion from a description and a predicate over a leg.
    pub fn new<F>(description: impl Into<String>, test: F) -> Self
    where
        F: Fn(&Leg) -> bool + Send + Sync + 'static,
    {
        Self {
            description: description.into(),
            test: Arc::new(test),
        }
    }

    /// Transit leg whose route short name is one of `names`.
    pub fn route_short_name<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        Self::new(route_description(&names), move |leg| {
            leg.is_transit()
                && leg
                    .route_short_name()
                    .is_some_and(|name| names.iter().any(|n| n == name))
        })
    }

    /// Transit leg whose route long name is one of `names`.
    pub fn route_long_name<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        Self::new(route_description(&names), move |leg| {
            leg.is_transit()
                && leg
                    .route_long_name()
                    .is_some_and(|name| names.iter().any(|n| n == name))
        })
    }

    /// Transit leg taking at most `max`.
    pub fn max_duration(max: Duration) -> Self {
        Self::new(format!("duration '{max}'"), move |leg| {
            leg.is_transit() && leg.duration <= max
        })
    }

    /// Leg travelled in `mode`.
    pub fn mode(mode: LegMode) -> Self {
        Self::new(format!("mode {mode}"), move |leg| leg.mode == mode)
    }

    /// Leg with a fare product priced at `price` for the given rider
    /// category and fare medium.
    ///
    /// Prices are compared at `f32` precision, so `2.75` matches a product
    /// whose amount is `2.75` but not `2.7500001`.
    pub fn fare_price(
        price: f32,
        rider_category_id: impl Into<String>,
        medium_id: impl Into<String>,
    ) -> Self {
        let rider_category_id = rider_category_id.into();
        let medium_id = medium_id.into();
        Self::new(format!("fare ${price:.2}"), move |leg| {
            leg.fare_products.iter().any(|fare| {
                fare.product.is_for(&rider_category_id, &medium_id)
                    && fare.product.price.amount as f32 == price
            })
        })
    }

    /// Leg that continues on the previous leg's vehicle.
    pub fn interlined_with_previous_leg() -> Self {
        Self::new("interlined with previous leg", |leg| {
            leg.interline_with_previous_leg
        })
    }

    /// Returns the description shown in reports.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Applies this criterion to `leg`.
    pub fn evaluate(&self, leg: &Leg) -> CriterionOutcome {
        CriterionOutcome {
            satisfied: (self.test)(leg),
            description: self.description.clone(),
        }
    }
}

impl fmt::Debug for LegCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LegCriterion")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

fn route_description(names: &[String]) -> String {
    format!("route '[{}]'", names.join(", "))
}

/// Everything one leg must satisfy simultaneously.
#[derive(Debug, Clone, Default)]
pub struct CriteriaSet {
    criteria: Vec<LegCriterion>,
}

impl CriteriaSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a criterion.
    pub fn push(&mut self, criterion: LegCriterion) {
        self.criteria.push(criterion);
    }

    /// Returns true if the set has no criteria.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Returns the number of criteria.
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Returns the criteria in declaration order.
    pub fn criteria(&self) -> &[LegCriterion] {
        &self.criteria
    }

    /// Returns the descriptions in declaration order.
    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.criteria.iter().map(LegCriterion::description)
    }

    /// Applies every criterion to `leg`.
    ///
    /// All criteria run even after one fails, so the result lists both what
    /// matched and what did not.
    pub fn evaluate(&self, leg: &Leg) -> LegMatch {
        self.criteria
            .iter()
            .map(|criterion| criterion.evaluate(leg))
            .fold(LegMatch::new(leg.clone()), |mut state, outcome| {
                state.record(outcome);
                state
            })
    }
}

impl FromIterator<LegCriterion> for CriteriaSet {
    fn from_iter<T: IntoIterator<Item = LegCriterion>>(iter: T) -> Self {
        Self {
            criteria: iter.into_iter().collect(),
        }
    }
}
