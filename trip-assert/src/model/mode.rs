//! Leg mode type.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Error returned when parsing an unknown leg mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid leg mode: {name}")]
pub struct InvalidLegMode {
    name: String,
}

/// How a leg is travelled.
///
/// The wire form is the planning service's upper-case name (`"BUS"`,
/// `"CABLE_CAR"`), which is also what `Display` prints and `FromStr` accepts.
///
/// # Examples
///
/// ```
/// use trip_assert::model::LegMode;
///
/// let mode: LegMode = "CABLE_CAR".parse().unwrap();
/// assert_eq!(mode, LegMode::CableCar);
/// assert!(mode.is_transit());
///
/// assert!(!LegMode::Walk.is_transit());
/// assert!("bus".parse::<LegMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LegMode {
    Airplane,
    Bicycle,
    Bus,
    CableCar,
    Car,
    Carpool,
    Coach,
    Ferry,
    Flex,
    Funicular,
    Gondola,
    Monorail,
    Rail,
    Scooter,
    Subway,
    Taxi,
    Tram,
    Transit,
    Trolleybus,
    Walk,
}

impl LegMode {
    /// Every mode, in wire-name order.
    pub const ALL: [LegMode; 20] = [
        LegMode::Airplane,
        LegMode::Bicycle,
        LegMode::Bus,
        LegMode::CableCar,
        LegMode::Car,
        LegMode::Carpool,
        LegMode::Coach,
        LegMode::Ferry,
        LegMode::Flex,
        LegMode::Funicular,
        LegMode::Gondola,
        LegMode::Monorail,
        LegMode::Rail,
        LegMode::Scooter,
        LegMode::Subway,
        LegMode::Taxi,
        LegMode::Tram,
        LegMode::Transit,
        LegMode::Trolleybus,
        LegMode::Walk,
    ];

    /// Returns the wire name of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            LegMode::Airplane => "AIRPLANE",
            LegMode::Bicycle => "BICYCLE",
            LegMode::Bus => "BUS",
            LegMode::CableCar => "CABLE_CAR",
            LegMode::Car => "CAR",
            LegMode::Carpool => "CARPOOL",
            LegMode::Coach => "COACH",
            LegMode::Ferry => "FERRY",
            LegMode::Flex => "FLEX",
            LegMode::Funicular => "FUNICULAR",
            LegMode::Gondola => "GONDOLA",
            LegMode::Monorail => "MONORAIL",
            LegMode::Rail => "RAIL",
            LegMode::Scooter => "SCOOTER",
            LegMode::Subway => "SUBWAY",
            LegMode::Taxi => "TAXI",
            LegMode::Tram => "TRAM",
            LegMode::Transit => "TRANSIT",
            LegMode::Trolleybus => "TROLLEYBUS",
            LegMode::Walk => "WALK",
        }
    }

    /// Is this mode public transport?
    ///
    /// Everything except walking, cycling, scooters and private cars counts.
    pub fn is_transit(&self) -> bool {
        !matches!(
            self,
            LegMode::Walk | LegMode::Bicycle | LegMode::Scooter | LegMode::Car
        )
    }
}

impl fmt::Display for LegMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LegMode {
    type Err = InvalidLegMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LegMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| InvalidLegMode { name: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn non_transit_modes() {
        for mode in [LegMode::Walk, LegMode::Bicycle, LegMode::Scooter, LegMode::Car] {
            assert!(!mode.is_transit(), "{mode} should not be transit");
        }
    }

    #[test]
    fn transit_modes() {
        for mode in [LegMode::Bus, LegMode::Tram, LegMode::Rail, LegMode::Ferry] {
            assert!(mode.is_transit(), "{mode} should be transit");
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "HOVERCRAFT".parse::<LegMode>().unwrap_err();
        assert_eq!(err.to_string(), "invalid leg mode: HOVERCRAFT");
    }

    #[test]
    fn deserialize_wire_name() {
        let mode: LegMode = serde_json::from_str("\"CABLE_CAR\"").unwrap();
        assert_eq!(mode, LegMode::CableCar);

        let mode: LegMode = serde_json::from_str("\"TROLLEYBUS\"").unwrap();
        assert_eq!(mode, LegMode::Trolleybus);
    }

    proptest! {
        /// Property: the printed name parses back to the same mode, and serde agrees.
        #[test]
        fn display_parse_and_serde_agree(idx in 0usize..LegMode::ALL.len()) {
            let mode = LegMode::ALL[idx];
            let name = mode.to_string();

            prop_assert_eq!(name.parse::<LegMode>().unwrap(), mode);

            let from_json: LegMode = serde_json::from_str(&format!("\"{name}\"")).unwrap();
            prop_assert_eq!(from_json, mode);
        }
    }
}
