//! Flight synthesis configuration.

use std::collections::HashMap;

use chrono::NaiveTime;

use super::error::ProviderError;
use super::pricing::Tariff;

/// Cruise speeds (km/h) for known aircraft type codes.
const AIRCRAFT_SPEEDS_KMH: &[(&str, f64)] = &[
    ("DH8", 550.0),
    ("AT7", 550.0),
    ("320", 840.0),
    ("321", 840.0),
    ("738", 840.0),
    ("739", 840.0),
    ("777", 900.0),
    ("788", 900.0),
    ("789", 900.0),
    ("332", 880.0),
    ("333", 880.0),
];

/// Configuration parameters for synthesizing and pricing flights.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Local time of the single daily departure for every template.
    pub departure_slot: NaiveTime,

    /// Minutes added to every flight for taxi, climb and descent.
    pub ground_buffer_mins: f64,

    /// Cruise speed (km/h) when no equipment code is recognised.
    pub default_cruise_speed_kmh: f64,

    /// Cruise speed (km/h) by aircraft type code.
    pub cruise_speeds_kmh: HashMap<String, f64>,

    /// Fare rules.
    pub tariff: Tariff,
}

impl ProviderConfig {
    /// Resolve the cruise speed for a list of equipment codes.
    ///
    /// The first code with a known speed wins.
    pub fn cruise_speed_kmh(&self, equipment: &[String]) -> f64 {
        equipment
            .iter()
            .find_map(|code| self.cruise_speeds_kmh.get(code).copied())
            .unwrap_or(self.default_cruise_speed_kmh)
    }

    /// Check that every value can produce a valid flight and price.
    pub fn validate(&self) -> Result<(), ProviderError> {
        if !(self.ground_buffer_mins.is_finite() && self.ground_buffer_mins > 0.0) {
            return Err(ProviderError::InvalidConfig(format!(
                "ground buffer must be positive, got {}",
                self.ground_buffer_mins
            )));
        }

        if !is_positive(self.default_cruise_speed_kmh) {
            return Err(ProviderError::InvalidConfig(format!(
                "default cruise speed must be positive, got {}",
                self.default_cruise_speed_kmh
            )));
        }

        if let Some((code, speed)) = self
            .cruise_speeds_kmh
            .iter()
            .find(|(_, speed)| !is_positive(**speed))
        {
            return Err(ProviderError::InvalidConfig(format!(
                "cruise speed for {code} must be positive, got {speed}"
            )));
        }

        self.tariff.validate()
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            departure_slot: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            ground_buffer_mins: 20.0,
            default_cruise_speed_kmh: 850.0,
            cruise_speeds_kmh: AIRCRAFT_SPEEDS_KMH
                .iter()
                .map(|(code, speed)| ((*code).to_string(), *speed))
                .collect(),
            tariff: Tariff::default(),
        }
    }
}
