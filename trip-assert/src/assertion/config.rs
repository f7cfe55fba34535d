//! Matching configuration.

/// Configuration parameters for itinerary matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchConfig {
    /// Require that every transit leg of the chosen itinerary is claimed by
    /// some criteria set. Walking and other non-transit legs are never
    /// counted as extra.
    pub strict_transit_matching: bool,
}

impl MatchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(strict_transit_matching: bool) -> Self {
        Self {
            strict_transit_matching,
        }
    }

    /// Returns the configuration with strict transit matching turned on.
    pub fn strict() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = MatchConfig::default();

        assert!(!config.strict_transit_matching);
    }

    #[test]
    fn custom_config() {
        assert!(MatchConfig::new(true).strict_transit_matching);
        assert_eq!(MatchConfig::strict(), MatchConfig::new(true));
    }
}
