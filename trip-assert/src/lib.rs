//! Itinerary assertions for trip-planning results.
//!
//! Checks that a trip plan returned by a planning service contains an
//! itinerary with the expected legs, and explains in detail when it does
//! not.

pub mod assertion;
pub mod model;

pub use assertion::{AssertionError, ItineraryAssertionError, ItineraryAssertions};
