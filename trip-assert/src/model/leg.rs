//! Itinerary leg type.
//!
//! A `Leg` is one segment of an itinerary: a ride on a single transit
//! vehicle, or a walk/cycle/drive between two places.

use chrono::Duration;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use super::{FareProductUse, LegMode, Place, Route};

/// A leg of an itinerary.
///
/// Field names follow the planning service's response so a `plan` payload
/// deserializes directly; fields the matcher never reads are not modelled.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    pub from: Place,
    pub to: Place,
    pub mode: LegMode,

    /// Time spent on this leg. Sent as seconds.
    #[serde(deserialize_with = "duration_from_seconds")]
    pub duration: Duration,

    /// Distance in metres.
    #[serde(default)]
    pub distance: f64,

    /// True if the rider stays on the same vehicle as the previous leg.
    #[serde(default)]
    pub interline_with_previous_leg: bool,

    pub route: Option<Route>,

    pub headsign: Option<String>,

    #[serde(default)]
    pub fare_products: Vec<FareProductUse>,
}

impl Leg {
    /// Creates a leg with no route, no fares and zero distance.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_assert::model::{Leg, LegMode, Place, Route};
    /// use chrono::Duration;
    ///
    /// let leg = Leg::new(LegMode::Bus, Place::new("Pine St"), Place::new("Broadway"), Duration::minutes(12))
    ///     .with_route(Route::new("kcm:10").with_short_name("10"));
    ///
    /// assert!(leg.is_transit());
    /// assert_eq!(leg.route_display_name(), "10");
    /// ```
    pub fn new(mode: LegMode, from: Place, to: Place, duration: Duration) -> Self {
        Self {
            from,
            to,
            mode,
            duration,
            distance: 0.0,
            interline_with_previous_leg: false,
            route: None,
            headsign: None,
            fare_products: Vec::new(),
        }
    }

    /// Sets the route.
    pub fn with_route(mut self, route: Route) -> Self {
        self.route = Some(route);
        self
    }

    /// Sets the distance in metres.
    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    /// Marks this leg as interlined with the previous one.
    pub fn interlined(mut self) -> Self {
        self.interline_with_previous_leg = true;
        self
    }

    /// Replaces the fare products.
    pub fn with_fare_products(mut self, fare_products: Vec<FareProductUse>) -> Self {
        self.fare_products = fare_products;
        self
    }

    /// Is this leg using public transport?
    pub fn is_transit(&self) -> bool {
        self.mode.is_transit()
    }

    /// Returns the route short name, if any.
    pub fn route_short_name(&self) -> Option<&str> {
        self.route.as_ref().and_then(|r| r.short_name.as_deref())
    }

    /// Returns the route long name, if any.
    pub fn route_long_name(&self) -> Option<&str> {
        self.route.as_ref().and_then(|r| r.long_name.as_deref())
    }

    /// Name used when describing this leg: route short name, else long
    /// name, else the mode.
    pub fn route_display_name(&self) -> &str {
        self.route
            .as_ref()
            .and_then(Route::name)
            .unwrap_or(self.mode.as_str())
    }
}

fn duration_from_seconds<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let seconds = f64::deserialize(deserializer)?;
    let millis = (seconds * 1000.0).round();
    if !millis.is_finite() || millis < i64::MIN as f64 || millis >= i64::MAX as f64 {
        return Err(D::Error::custom(format!(
            "leg duration out of range: {seconds} seconds"
        )));
    }
    Duration::try_milliseconds(millis as i64).ok_or_else(|| {
        D::Error::custom(format!("leg duration out of range: {seconds} seconds"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bus(short: Option<&str>, long: Option<&str>) -> Leg {
        let mut route = Route::new("r");
        route.short_name = short.map(str::to_string);
        route.long_name = long.map(str::to_string);
        Leg::new(
            LegMode::Bus,
            Place::new("A"),
            Place::new("B"),
            Duration::minutes(10),
        )
        .with_route(route)
    }

    #[test]
    fn display_name_fallbacks() {
        assert_eq!(bus(Some("10"), Some("Route 10")).route_display_name(), "10");
        assert_eq!(bus(None, Some("Route 10")).route_display_name(), "Route 10");
        assert_eq!(bus(None, None).route_display_name(), "BUS");

        let walk = Leg::new(
            LegMode::Walk,
            Place::new("A"),
            Place::new("B"),
            Duration::minutes(3),
        );
        assert_eq!(walk.route_display_name(), "WALK");
        assert!(!walk.is_transit());
    }

    #[test]
    fn deserialize_transit_leg() {
        let json = r#"{
            "from": {"name": "Westlake"},
            "to": {"name": "Capitol Hill"},
            "mode": "TRAM",
            "duration": 540.0,
            "distance": 2210.4,
            "interlineWithPreviousLeg": true,
            "route": {"gtfsId": "st:100479", "shortName": "1", "longName": "Line 1"},
            "headsign": "Northgate",
            "fareProducts": []
        }"#;

        let leg: Leg = serde_json::from_str(json).unwrap();

        assert_eq!(leg.mode, LegMode::Tram);
        assert_eq!(leg.duration, Duration::minutes(9));
        assert!(leg.interline_with_previous_leg);
        assert_eq!(leg.route_short_name(), Some("1"));
        assert_eq!(leg.route_long_name(), Some("Line 1"));
        assert_eq!(leg.from.name(), "Westlake");
        assert_eq!(leg.headsign.as_deref(), Some("Northgate"));
    }

    #[test]
    fn deserialize_walk_leg_with_defaults() {
        let json = r#"{
            "from": {"name": "Origin"},
            "to": {"name": "Westlake"},
            "mode": "WALK",
            "duration": 95,
            "route": null
        }"#;

        let leg: Leg = serde_json::from_str(json).unwrap();

        assert_eq!(leg.duration, Duration::seconds(95));
        assert_eq!(leg.distance, 0.0);
        assert!(!leg.interline_with_previous_leg);
        assert!(leg.fare_products.is_empty());
        assert!(leg.route.is_none());
    }

    #[test]
    fn out_of_range_duration_is_an_error() {
        for duration in ["-1e30", "1e300"] {
            let json = format!(
                r#"{{"itineraries":[{{"legs":[{{"from":{{"name":"A"}},"to":{{"name":"B"}},"mode":"WALK","duration":{duration}}}]}}]}}"#
            );

            let err = crate::model::TripPlan::from_json(&json).unwrap_err();
            assert!(
                err.to_string().contains("leg duration out of range"),
                "unexpected error for {duration}: {err}"
            );
        }
    }
}
