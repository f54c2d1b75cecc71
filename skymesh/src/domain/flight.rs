//! Flight type.
//!
//! A `Flight` is one concrete, dated departure between two airports. The
//! search engine shares flights between partial paths as `Arc<Flight>`.

use chrono::{DateTime, FixedOffset, TimeDelta};

use super::{AirlineCode, Airport, DomainError, IataCode};

/// Display metadata for one end of a flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    pub name: String,
    pub city: String,
    pub country: String,
}

impl From<&Airport> for Place {
    fn from(airport: &Airport) -> Self {
        Self {
            name: airport.name.clone(),
            city: airport.city.clone(),
            country: airport.country.clone(),
        }
    }
}

/// A single dated flight.
///
/// # Invariants
///
/// - Origin and destination differ
/// - Arrival instant is strictly after the departure instant
/// - Departure is expressed in the origin's offset, arrival in the
///   destination's
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    id: String,
    origin: IataCode,
    destination: IataCode,
    origin_place: Place,
    destination_place: Place,
    departure: DateTime<FixedOffset>,
    arrival: DateTime<FixedOffset>,
    airline: AirlineCode,
    airline_name: String,
    distance_km: Option<f64>,
}

impl Flight {
    /// Construct a flight between two airports.
    ///
    /// The given instants may be in any offset; they are re-expressed in the
    /// local offset of their airport.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the airports are the same or the flight does not
    /// arrive after it departs.
    ///
    /// # Examples
    ///
    /// ```
    /// use skymesh::domain::{AirlineCode, Airport, Flight, IataCode};
    /// use chrono::{DateTime, TimeDelta};
    ///
    /// let syd = Airport::new(IataCode::parse("SYD").unwrap(), "Sydney", "Sydney", "Australia", -33.95, 151.18, 10.0).unwrap();
    /// let mel = Airport::new(IataCode::parse("MEL").unwrap(), "Melbourne", "Melbourne", "Australia", -37.67, 144.84, 10.0).unwrap();
    ///
    /// let dep = DateTime::parse_from_rfc3339("2026-03-01T09:00:00+10:00").unwrap();
    /// let flight = Flight::new(
    ///     "QF-SYD-MEL",
    ///     &syd,
    ///     &mel,
    ///     dep,
    ///     dep + TimeDelta::minutes(85),
    ///     AirlineCode::parse("QF").unwrap(),
    ///     "Qantas",
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(flight.duration(), TimeDelta::minutes(85));
    /// assert_eq!(flight.destination_place().city, "Melbourne");
    /// ```
    pub fn new(
        id: impl Into<String>,
        origin: &Airport,
        destination: &Airport,
        departure: DateTime<FixedOffset>,
        arrival: DateTime<FixedOffset>,
        airline: AirlineCode,
        airline_name: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let id = id.into();

        if origin.code == destination.code {
            return Err(DomainError::InvalidFlight(
                "origin and destination must differ",
            ));
        }

        if arrival <= departure {
            return Err(DomainError::NonPositiveDuration { flight_id: id });
        }

        origin.validate()?;
        destination.validate()?;
        let origin_tz = origin.timezone()?;
        let destination_tz = destination.timezone()?;

        Ok(Flight {
            id,
            origin: origin.code,
            destination: destination.code,
            origin_place: Place::from(origin),
            destination_place: Place::from(destination),
            departure: departure.with_timezone(&origin_tz),
            arrival: arrival.with_timezone(&destination_tz),
            airline,
            airline_name: airline_name.into(),
            distance_km: None,
        })
    }

    /// Record the great-circle distance of this flight.
    pub fn with_distance_km(mut self, distance_km: f64) -> Self {
        self.distance_km = Some(distance_km);
        self
    }

    /// Returns the flight identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the origin airport code.
    pub fn origin(&self) -> &IataCode {
        &self.origin
    }

    /// Returns the destination airport code.
    pub fn destination(&self) -> &IataCode {
        &self.destination
    }

    /// Returns the origin's display metadata.
    pub fn origin_place(&self) -> &Place {
        &self.origin_place
    }

    /// Returns the destination's display metadata.
    pub fn destination_place(&self) -> &Place {
        &self.destination_place
    }

    /// Returns the departure instant, in the origin's local offset.
    pub fn departure_time(&self) -> DateTime<FixedOffset> {
        self.departure
    }

    /// Returns the arrival instant, in the destination's local offset.
    pub fn arrival_time(&self) -> DateTime<FixedOffset> {
        self.arrival
    }

    /// Returns the operating airline's code.
    pub fn airline(&self) -> &AirlineCode {
        &self.airline
    }

    /// Returns the operating airline's display name.
    pub fn airline_name(&self) -> &str {
        &self.airline_name
    }

    /// Returns the great-circle distance in kilometres, if recorded.
    pub fn distance_km(&self) -> Option<f64> {
        self.distance_km
    }

    /// Returns the time in the air, including ground buffer.
    pub fn duration(&self) -> TimeDelta {
        self.arrival - self.departure
    }
}
