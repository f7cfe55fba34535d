//! Itineraries and trip plans.

use serde::Deserialize;

use super::Leg;

/// One way of making the trip: an ordered list of legs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Itinerary {
    pub legs: Vec<Leg>,
}

impl Itinerary {
    /// Creates an itinerary from its legs, in travel order.
    pub fn new(legs: Vec<Leg>) -> Self {
        Self { legs }
    }

    /// Does this itinerary contain any public transport?
    pub fn has_transit(&self) -> bool {
        self.legs.iter().any(Leg::is_transit)
    }

    /// Returns the legs using public transport, in travel order.
    pub fn transit_legs(&self) -> impl Iterator<Item = &Leg> {
        self.legs.iter().filter(|leg| leg.is_transit())
    }
}

/// The planning service's answer: itineraries ordered by relevance.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlan {
    pub itineraries: Vec<Itinerary>,
}

impl TripPlan {
    /// Creates a plan from its itineraries, most relevant first.
    pub fn new(itineraries: Vec<Itinerary>) -> Self {
        Self { itineraries }
    }

    /// Parses the `plan` object of a planning response.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Returns the itineraries that contain public transport.
    pub fn transit_itineraries(&self) -> impl Iterator<Item = &Itinerary> {
        self.itineraries.iter().filter(|i| i.has_transit())
    }
}
