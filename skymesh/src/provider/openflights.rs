//! Flight synthesis from OpenFlights-style route templates.
//!
//! OpenFlights routes have no timetable. Each template is turned into one
//! concrete flight per day, departing at the configured local slot, with a
//! block time derived from great-circle distance and aircraft type.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};
use tracing::trace;

use crate::dataset::Dataset;
use crate::domain::{Airport, Flight, FlightRoute, IataCode, Price, RouteTemplate};

use super::FlightProvider;
use super::config::ProviderConfig;
use super::error::ProviderError;
use super::geo::distance_between;
use super::schedule::{block_time, next_departure};

/// Provider that synthesizes dated flights from a [`Dataset`].
#[derive(Debug, Clone)]
pub struct OpenFlightsProvider {
    dataset: Dataset,
    config: ProviderConfig,
}

impl OpenFlightsProvider {
    /// Create a provider with the default configuration.
    pub fn new(dataset: Dataset) -> Result<Self, ProviderError> {
        Self::with_config(dataset, ProviderConfig::default())
    }

    /// Create a provider with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the configuration could produce flights that do not
    /// move forward in time or negative prices.
    pub fn with_config(dataset: Dataset, config: ProviderConfig) -> Result<Self, ProviderError> {
        config.validate()?;
        Ok(Self { dataset, config })
    }

    /// Returns the underlying dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn airport(&self, code: &IataCode) -> Result<&Airport, ProviderError> {
        self.dataset
            .airport(code)
            .ok_or(ProviderError::UnknownAirport(*code))
    }

    /// Build the first flight of `template` departing after `not_before`.
    pub fn synthesize(
        &self,
        template: &RouteTemplate,
        not_before: DateTime<FixedOffset>,
    ) -> Result<Flight, ProviderError> {
        let origin = self.airport(&template.origin)?;
        let destination = self.airport(&template.destination)?;

        let departure = next_departure(not_before, origin.timezone()?, self.config.departure_slot);

        let distance_km = distance_between(origin, destination);
        let speed_kmh = self.config.cruise_speed_kmh(&template.equipment);
        let arrival = departure
            + block_time(distance_km, speed_kmh, self.config.ground_buffer_mins);

        let airline_name = self
            .dataset
            .airline_name(&template.airline)
            .unwrap_or(template.airline.as_str());

        let id = format!(
            "{}-{}-{}-{}",
            template.airline,
            template.origin,
            template.destination,
            departure.with_timezone(&Utc).format("%Y%m%dT%H%MZ"),
        );

        let flight = Flight::new(
            id,
            origin,
            destination,
            departure,
            arrival,
            template.airline,
            airline_name,
        )?
        .with_distance_km(distance_km);

        Ok(flight)
    }
}

impl FlightProvider for OpenFlightsProvider {
    fn outbound_flights(
        &self,
        origin: &IataCode,
        not_before: DateTime<FixedOffset>,
    ) -> Result<Vec<Arc<Flight>>, ProviderError> {
        let templates = self.dataset.routes_from(origin);

        let flights = templates
            .iter()
            .map(|template| self.synthesize(template, not_before).map(Arc::new))
            .collect::<Result<Vec<_>, _>>()?;

        trace!(
            origin = %origin,
            not_before = %not_before,
            flights = flights.len(),
            "Synthesized outbound flights"
        );

        Ok(flights)
    }

    fn price(&self, route: &FlightRoute) -> Result<Price, ProviderError> {
        // Distance is recomputed from the dataset so a route assembled
        // elsewhere is priced against the same coordinates.
        self.config.tariff.price(route, |flight| {
            let origin = self.airport(flight.origin())?;
            let destination = self.airport(flight.destination())?;
            Ok(distance_between(origin, destination))
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::*;
    use crate::domain::AirlineCode;

    fn iata(s: &str) -> IataCode {
        IataCode::parse(s).unwrap()
    }

    fn airline(s: &str) -> AirlineCode {
        AirlineCode::parse(s).unwrap()
    }

    fn at(rfc3339: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap()
    }

    fn syd() -> Airport {
        Airport::new(
            iata("SYD"),
            "Sydney Kingsford Smith International Airport",
            "Sydney",
            "Australia",
            -33.9461,
            151.177,
            10.0,
        )
        .unwrap()
    }

    fn mel() -> Airport {
        Airport::new(
            iata("MEL"),
            "Melbourne International Airport",
            "Melbourne",
            "Australia",
            -37.6733,
            144.843,
            10.0,
        )
        .unwrap()
    }

    fn akl() -> Airport {
        Airport::new(
            iata("AKL"),
            "Auckland International Airport",
            "Auckland",
            "New Zealand",
            -37.0082,
            174.792,
            12.0,
        )
        .unwrap()
    }

    fn dataset() -> Dataset {
        Dataset::builder()
            .airport(syd())
            .airport(mel())
            .airport(akl())
            .airline(airline("QF"), "Qantas")
            .route(RouteTemplate::new(iata("SYD"), iata("MEL"), airline("QF"), ["738"]))
            .route(RouteTemplate::new(iata("SYD"), iata("AKL"), airline("NZ"), ["789"]))
            .build()
    }

    fn provider() -> OpenFlightsProvider {
        OpenFlightsProvider::new(dataset()).unwrap()
    }

    #[test]
    fn synthesizes_morning_slot() {
        let template = RouteTemplate::new(iata("SYD"), iata("MEL"), airline("QF"), ["738"]);
        let flight = provider()
            .synthesize(&template, at("2026-03-01T06:00:00+10:00"))
            .unwrap();

        assert_eq!(flight.departure_time().to_rfc3339(), "2026-03-01T09:00:00+10:00");
        assert_eq!(flight.airline_name(), "Qantas");
        assert_eq!(flight.origin_place().city, "Sydney");
        assert_eq!(flight.destination_place().city, "Melbourne");

        // ~705 km at 840 km/h is ~50 minutes, plus 20 on the ground
        let mins = flight.duration().num_minutes();
        assert!((69..=71).contains(&mins), "duration {mins} min");

        let km = flight.distance_km().unwrap();
        assert!((km - 705.4).abs() < 1.0, "distance {km}");
    }

    #[test]
    fn rolls_to_next_day_after_slot() {
        let template = RouteTemplate::new(iata("SYD"), iata("MEL"), airline("QF"), ["738"]);
        let flight = provider()
            .synthesize(&template, at("2026-03-01T09:00:00+10:00"))
            .unwrap();

        assert_eq!(flight.departure_time().to_rfc3339(), "2026-03-02T09:00:00+10:00");
    }

    #[test]
    fn arrival_in_destination_offset() {
        let template = RouteTemplate::new(iata("SYD"), iata("AKL"), airline("NZ"), ["789"]);
        let flight = provider()
            .synthesize(&template, at("2026-03-01T06:00:00+10:00"))
            .unwrap();

        assert_eq!(flight.departure_time().offset().local_minus_utc(), 10 * 3600);
        assert_eq!(flight.arrival_time().offset().local_minus_utc(), 12 * 3600);
        assert!(flight.arrival_time() > flight.departure_time());
    }

    #[test]
    fn unknown_airline_uses_code() {
        let template = RouteTemplate::new(iata("SYD"), iata("AKL"), airline("NZ"), ["789"]);
        let flight = provider()
            .synthesize(&template, at("2026-03-01T06:00:00+10:00"))
            .unwrap();

        assert_eq!(flight.airline_name(), "NZ");
    }

    #[test]
    fn ids_include_departure_instant() {
        let template = RouteTemplate::new(iata("SYD"), iata("MEL"), airline("QF"), ["738"]);
        let provider = provider();

        let first = provider
            .synthesize(&template, at("2026-03-01T06:00:00+10:00"))
            .unwrap();
        let second = provider
            .synthesize(&template, at("2026-03-01T12:00:00+10:00"))
            .unwrap();

        assert_eq!(first.id(), "QF-SYD-MEL-20260228T2300Z");
        assert_eq!(second.id(), "QF-SYD-MEL-20260301T2300Z");
    }

    #[test]
    fn unknown_airport_fails_fast() {
        let template = RouteTemplate::new(iata("SYD"), iata("PER"), airline("QF"), ["738"]);
        let result = provider().synthesize(&template, at("2026-03-01T06:00:00+10:00"));

        assert!(matches!(result, Err(ProviderError::UnknownAirport(code)) if code == iata("PER")));
    }

    #[test]
    fn outbound_flights_cover_every_template() {
        let provider = provider();
        let flights = provider
            .outbound_flights(&iata("SYD"), at("2026-03-01T06:00:00+10:00"))
            .unwrap();

        assert_eq!(flights.len(), 2);
        assert!(flights.iter().all(|f| f.origin() == &iata("SYD")));
        assert!(flights.iter().all(|f| f.arrival_time() > f.departure_time()));
    }

    #[test]
    fn no_templates_is_empty() {
        let flights = provider()
            .outbound_flights(&iata("MEL"), at("2026-03-01T06:00:00+10:00"))
            .unwrap();
        assert!(flights.is_empty());

        let flights = provider()
            .outbound_flights(&iata("ZZZ"), at("2026-03-01T06:00:00+10:00"))
            .unwrap();
        assert!(flights.is_empty());
    }

    #[test]
    fn prices_direct_route() {
        let provider = provider();
        let flights = provider
            .outbound_flights(&iata("SYD"), at("2026-03-01T06:00:00+10:00"))
            .unwrap();
        let to_mel = flights
            .into_iter()
            .find(|f| f.destination() == &iata("MEL"))
            .unwrap();

        let route = FlightRoute::new(vec![to_mel]).unwrap();
        let price = provider.price(&route).unwrap();

        assert_eq!(price.base(), 50.0);
        assert!((price.distance() - 84.65).abs() < 0.2, "distance {}", price.distance());
        assert_eq!(price.layover(), 0.0);
        assert!(route.price().is_none());
    }

    #[test]
    fn pricing_unknown_airport_fails() {
        let perth = Airport::new(iata("PER"), "Perth", "Perth", "Australia", -31.94, 115.97, 8.0)
            .unwrap();
        let dep = at("2026-03-01T09:00:00+10:00");
        let flight = Flight::new(
            "QF-SYD-PER",
            &syd(),
            &perth,
            dep,
            dep + TimeDelta::hours(5),
            airline("QF"),
            "Qantas",
        )
        .unwrap();
        let route = FlightRoute::new(vec![Arc::new(flight)]).unwrap();

        assert!(matches!(
            provider().price(&route),
            Err(ProviderError::UnknownAirport(code)) if code == iata("PER")
        ));
    }

    #[test]
    fn rejects_invalid_config() {
        let config = ProviderConfig {
            default_cruise_speed_kmh: 0.0,
            ..ProviderConfig::default()
        };
        assert!(matches!(
            OpenFlightsProvider::with_config(dataset(), config),
            Err(ProviderError::InvalidConfig(_))
        ));
    }

    #[test]
    fn antipodal_airports_get_a_flight() {
        let a = Airport::new(iata("AAA"), "A", "A", "X", -5.63, -178.89, 0.0).unwrap();
        let b = Airport::new(iata("BBB"), "B", "B", "X", 5.63, 1.11, 0.0).unwrap();
        let dataset = Dataset::builder()
            .airport(a)
            .airport(b)
            .route(RouteTemplate::new(iata("AAA"), iata("BBB"), airline("QF"), ["789"]))
            .build();
        let provider = OpenFlightsProvider::new(dataset).unwrap();

        let flights = provider
            .outbound_flights(&iata("AAA"), at("2026-03-01T06:00:00+00:00"))
            .unwrap();

        assert_eq!(flights.len(), 1);
        let km = flights[0].distance_km().unwrap();
        assert!((km - std::f64::consts::PI * 6371.0).abs() < 1e-3, "distance {km}");
        // Half the globe at 900 km/h, plus the ground buffer
        assert!(flights[0].duration() > TimeDelta::hours(22));
    }

    #[test]
    fn custom_departure_slot() {
        let config = ProviderConfig {
            departure_slot: chrono::NaiveTime::from_hms_opt(6, 30, 0).unwrap(),
            ..ProviderConfig::default()
        };
        let provider = OpenFlightsProvider::with_config(dataset(), config).unwrap();
        let template = RouteTemplate::new(iata("SYD"), iata("MEL"), airline("QF"), ["738"]);

        let flight = provider
            .synthesize(&template, at("2026-03-01T06:00:00+10:00"))
            .unwrap();
        assert_eq!(flight.departure_time().to_rfc3339(), "2026-03-01T06:30:00+10:00");
    }
}
