//! Tariff-based itinerary pricing.
//!
//! A price is built from three components: a flat fare per leg, a rate per
//! kilometre flown, and a penalty per hour spent waiting between legs.

use crate::domain::{CurrencyCode, Flight, FlightRoute, Price, duration_hours};

use super::error::ProviderError;

/// Pricing rates applied to every itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct Tariff {
    /// Flat fare charged for each leg.
    pub base_fare_per_leg: f64,

    /// Fare per great-circle kilometre.
    pub price_per_km: f64,

    /// Fare per hour of layover.
    pub layover_penalty_per_hour: f64,

    /// Currency all amounts are quoted in.
    pub currency: CurrencyCode,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            base_fare_per_leg: 50.0,
            price_per_km: 0.12,
            layover_penalty_per_hour: 15.0,
            currency: CurrencyCode::USD,
        }
    }
}

impl Tariff {
    /// Check that every rate is finite and non-negative.
    pub fn validate(&self) -> Result<(), ProviderError> {
        let rates = [
            ("base fare per leg", self.base_fare_per_leg),
            ("price per km", self.price_per_km),
            ("layover penalty per hour", self.layover_penalty_per_hour),
        ];

        for (name, rate) in rates {
            if !rate.is_finite() || rate < 0.0 {
                return Err(ProviderError::InvalidConfig(format!(
                    "{name} must be non-negative, got {rate}"
                )));
            }
        }

        Ok(())
    }

    /// Price a completed route.
    ///
    /// `leg_distance` resolves the great-circle distance of each leg; its
    /// errors abort pricing. The route itself is not modified.
    pub fn price<F>(&self, route: &FlightRoute, mut leg_distance: F) -> Result<Price, ProviderError>
    where
        F: FnMut(&Flight) -> Result<f64, ProviderError>,
    {
        let mut base = 0.0;
        let mut distance = 0.0;

        for flight in route.flights() {
            base += self.base_fare_per_leg;
            distance += leg_distance(flight)? * self.price_per_km;
        }

        let layover: f64 = route
            .layovers()
            .into_iter()
            .map(|gap| duration_hours(gap) * self.layover_penalty_per_hour)
            .sum();

        Ok(Price::from_components(
            self.currency,
            base,
            distance,
            layover,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{DateTime, FixedOffset, TimeDelta};

    use super::*;
    use crate::domain::{AirlineCode, Airport, DomainError, IataCode};

    fn airport(code: &str) -> Airport {
        Airport::new(IataCode::parse(code).unwrap(), code, code, "Australia", -30.0, 150.0, 10.0)
            .unwrap()
    }

    fn at(rfc3339: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap()
    }

    fn flight(from: &str, to: &str, dep: &str, mins: i64, km: f64) -> Arc<Flight> {
        let dep = at(dep);
        Arc::new(
            Flight::new(
                format!("QF-{from}-{to}"),
                &airport(from),
                &airport(to),
                dep,
                dep + TimeDelta::minutes(mins),
                AirlineCode::parse("QF").unwrap(),
                "Qantas",
            )
            .unwrap()
            .with_distance_km(km),
        )
    }

    fn recorded(flight: &Flight) -> Result<f64, ProviderError> {
        Ok(flight.distance_km().unwrap_or_default())
    }

    #[test]
    fn direct_flight() {
        let route = FlightRoute::new(vec![flight(
            "SYD",
            "MEL",
            "2026-03-01T09:00:00+10:00",
            70,
            705.0,
        )])
        .unwrap();

        let price = Tariff::default().price(&route, recorded).unwrap();

        assert_eq!(price.base(), 50.0);
        assert_eq!(price.distance(), 84.6);
        assert_eq!(price.layover(), 0.0);
        assert_eq!(price.amount(), 134.6);
        assert_eq!(price.currency(), CurrencyCode::USD);
    }

    #[test]
    fn two_legs_with_layover() {
        let route = FlightRoute::new(vec![
            flight("SYD", "MEL", "2026-03-01T07:00:00+10:00", 70, 700.0),
            // Departs 90 minutes after the first leg lands
            flight("MEL", "ADL", "2026-03-01T09:40:00+10:00", 80, 650.0),
        ])
        .unwrap();

        let price = Tariff::default().price(&route, recorded).unwrap();

        assert_eq!(price.base(), 100.0);
        assert_eq!(price.distance(), 162.0);
        assert_eq!(price.layover(), 22.5);
        assert_eq!(price.amount(), 284.5);
    }

    #[test]
    fn components_sum_within_cent_tolerance() {
        let route = FlightRoute::new(vec![
            flight("SYD", "MEL", "2026-03-01T07:00:00+10:00", 70, 705.123),
            flight("MEL", "ADL", "2026-03-01T09:17:00+10:00", 80, 642.777),
            flight("ADL", "PER", "2026-03-01T12:01:00+10:00", 200, 2120.555),
        ])
        .unwrap();

        let price = Tariff::default().price(&route, recorded).unwrap();

        assert!((price.amount() - price.components_sum()).abs() <= 0.01 * 3.0);
    }

    #[test]
    fn distance_errors_propagate() {
        let route = FlightRoute::new(vec![flight(
            "SYD",
            "MEL",
            "2026-03-01T09:00:00+10:00",
            70,
            705.0,
        )])
        .unwrap();

        let result = Tariff::default().price(&route, |f| {
            Err(ProviderError::UnknownAirport(*f.destination()))
        });

        assert!(matches!(result, Err(ProviderError::UnknownAirport(code)) if code.as_str() == "MEL"));
    }

    #[test]
    fn negative_distance_is_rejected() {
        let route = FlightRoute::new(vec![flight(
            "SYD",
            "MEL",
            "2026-03-01T09:00:00+10:00",
            70,
            705.0,
        )])
        .unwrap();

        let result = Tariff::default().price(&route, |_| Ok(-1.0));

        assert!(matches!(
            result,
            Err(ProviderError::Domain(DomainError::InvalidPrice(_)))
        ));
    }

    #[test]
    fn custom_currency_and_rates() {
        let tariff = Tariff {
            base_fare_per_leg: 10.0,
            price_per_km: 0.0,
            layover_penalty_per_hour: 0.0,
            currency: CurrencyCode::parse("AUD").unwrap(),
        };
        let route = FlightRoute::new(vec![flight(
            "SYD",
            "MEL",
            "2026-03-01T09:00:00+10:00",
            70,
            705.0,
        )])
        .unwrap();

        let price = tariff.price(&route, recorded).unwrap();
        assert_eq!(price.amount(), 10.0);
        assert_eq!(price.currency().as_str(), "AUD");
    }

    #[test]
    fn validate_rates() {
        assert!(Tariff::default().validate().is_ok());

        let tariff = Tariff {
            layover_penalty_per_hour: f64::NAN,
            ..Tariff::default()
        };
        assert!(matches!(tariff.validate(), Err(ProviderError::InvalidConfig(_))));

        let tariff = Tariff {
            base_fare_per_leg: -5.0,
            ..Tariff::default()
        };
        assert!(tariff.validate().is_err());
    }
}
