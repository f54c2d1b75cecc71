//! Search configuration for the route planner.

use chrono::TimeDelta;

/// Configuration parameters for route search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Minimum time between landing and the next departure (minutes).
    /// Tighter connections are rejected.
    pub min_connection_mins: i64,

    /// Maximum time between landing and the next departure (minutes).
    /// Longer layovers are rejected.
    pub max_connection_mins: i64,

    /// Leg limit used when a request doesn't specify one.
    pub default_max_legs: usize,

    /// Route limit used when a request doesn't specify one.
    pub default_max_routes: usize,

    /// Hard ceiling on legs per route. Larger requests are clamped.
    pub max_allowed_legs: usize,

    /// Hard ceiling on routes returned. Larger requests are clamped.
    pub max_allowed_routes: usize,
}

impl SearchConfig {
    /// Returns the minimum connection time as a Duration.
    pub fn min_connection(&self) -> TimeDelta {
        TimeDelta::minutes(self.min_connection_mins)
    }

    /// Returns the maximum connection time as a Duration.
    pub fn max_connection(&self) -> TimeDelta {
        TimeDelta::minutes(self.max_connection_mins)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_connection_mins: 45,
            max_connection_mins: 360, // 6 hours
            default_max_legs: 3,
            default_max_routes: 10,
            max_allowed_legs: 4,
            max_allowed_routes: 15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();

        assert_eq!(config.min_connection_mins, 45);
        assert_eq!(config.max_connection_mins, 360);
        assert_eq!(config.default_max_legs, 3);
        assert_eq!(config.default_max_routes, 10);
        assert_eq!(config.max_allowed_legs, 4);
        assert_eq!(config.max_allowed_routes, 15);
    }

    #[test]
    fn duration_methods() {
        let config = SearchConfig::default();

        assert_eq!(config.min_connection(), TimeDelta::minutes(45));
        assert_eq!(config.max_connection(), TimeDelta::hours(6));
    }

    #[test]
    fn custom_config() {
        let config = SearchConfig {
            min_connection_mins: 30,
            max_connection_mins: 120,
            ..SearchConfig::default()
        };

        assert_eq!(config.min_connection(), TimeDelta::minutes(30));
        assert_eq!(config.max_connection(), TimeDelta::hours(2));
        assert_eq!(config.max_allowed_legs, 4);
    }
}
