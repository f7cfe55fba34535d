//! Itinerary assertions.
//!
//! Declare the legs a trip plan must contain, then check a plan against
//! them. Matching is greedy: criteria sets are tried in declaration order
//! and each claims the first unclaimed leg that fits. When nothing matches,
//! the error explains for every itinerary which criteria matched, which
//! were missing, and which transit legs were left over.

mod builder;
mod config;
mod criterion;
mod engine;
mod error;
mod report;
mod result;

pub use builder::ItineraryAssertions;
pub use config::MatchConfig;
pub use criterion::{CriteriaSet, CriterionOutcome, LegCriterion};
pub use engine::{assert_plan, match_itinerary, validate_criteria};
pub use error::{AssertionError, ConfigError, ItineraryAssertionError};
pub use result::{ItineraryMatchResult, LegMatch};
