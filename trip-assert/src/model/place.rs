//! Places and routes.

use serde::Deserialize;

/// Where a leg starts or ends.
///
/// The planning service distinguishes stops, rental stations, parking and
/// bare coordinates; for matching and reporting only the name matters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Place {
    pub name: String,
}

impl Place {
    /// Creates a place with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A transit route as returned with a leg.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Feed-scoped identifier (e.g. `"kcm:100252"`).
    pub gtfs_id: String,

    /// Public-facing short name, such as `"10"` or `"E"`.
    pub short_name: Option<String>,

    /// Descriptive long name, such as `"Capitol Hill - Downtown"`.
    pub long_name: Option<String>,
}

impl Route {
    /// Creates a route with neither name set.
    pub fn new(gtfs_id: impl Into<String>) -> Self {
        Self {
            gtfs_id: gtfs_id.into(),
            short_name: None,
            long_name: None,
        }
    }

    /// Sets the short name.
    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }

    /// Sets the long name.
    pub fn with_long_name(mut self, long_name: impl Into<String>) -> Self {
        self.long_name = Some(long_name.into());
        self
    }

    /// Returns the short name if present, otherwise the long name.
    pub fn name(&self) -> Option<&str> {
        self.short_name.as_deref().or(self.long_name.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_name_prefers_short_name() {
        let route = Route::new("r1")
            .with_short_name("10")
            .with_long_name("Route 10");
        assert_eq!(route.name(), Some("10"));
    }

    #[test]
    fn route_name_falls_back_to_long_name() {
        let route = Route::new("r1").with_long_name("Link Light Rail");
        assert_eq!(route.name(), Some("Link Light Rail"));

        assert_eq!(Route::new("r2").name(), None);
    }

    #[test]
    fn deserialize_route() {
        let json = r#"{"gtfsId": "kcm:100252", "shortName": "10", "longName": null}"#;
        let route: Route = serde_json::from_str(json).unwrap();

        assert_eq!(route.gtfs_id, "kcm:100252");
        assert_eq!(route.short_name.as_deref(), Some("10"));
        assert!(route.long_name.is_none());
    }

    #[test]
    fn deserialize_place_ignores_extra_fields() {
        let json = r#"{"name": "Pine St", "lat": 47.61, "lon": -122.33, "vertexType": "TRANSIT"}"#;
        let place: Place = serde_json::from_str(json).unwrap();
        assert_eq!(place.name(), "Pine St");
    }
}
