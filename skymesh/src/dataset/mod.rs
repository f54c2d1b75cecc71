//! Pre-parsed airport, airline and route lookups.
//!
//! A `Dataset` is built once and never mutated afterwards. Route templates
//! are indexed by origin so providers can fan out from an airport with a
//! single map lookup.

mod error;
mod snapshot;

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::domain::{AirlineCode, Airport, IataCode, RouteTemplate};

pub use error::DatasetError;

/// Read-only flight network metadata.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    airports: HashMap<IataCode, Airport>,
    airlines: HashMap<AirlineCode, String>,
    routes: HashMap<IataCode, Vec<RouteTemplate>>,
}

impl Dataset {
    /// Start building a dataset.
    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::new()
    }

    /// Look up an airport by code.
    pub fn airport(&self, code: &IataCode) -> Option<&Airport> {
        self.airports.get(code)
    }

    /// Look up an airline's display name.
    pub fn airline_name(&self, code: &AirlineCode) -> Option<&str> {
        self.airlines.get(code).map(String::as_str)
    }

    /// Returns every template departing from `origin`.
    ///
    /// Unknown origins have no templates.
    pub fn routes_from(&self, origin: &IataCode) -> &[RouteTemplate] {
        self.routes.get(origin).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over all airports.
    pub fn airports(&self) -> impl Iterator<Item = &Airport> {
        self.airports.values()
    }

    /// Returns the number of airports.
    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }

    /// Returns the number of airlines with a known name.
    pub fn airline_count(&self) -> usize {
        self.airlines.len()
    }

    /// Returns the number of airports with at least one outbound template.
    pub fn origin_count(&self) -> usize {
        self.routes.len()
    }

    /// Returns the total number of templates.
    pub fn route_count(&self) -> usize {
        self.routes.values().map(Vec::len).sum()
    }
}

/// Builder for a [`Dataset`].
///
/// Templates are only indexed in [`DatasetBuilder::build`], after every
/// airport is known, so insertion order does not matter.
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    airports: HashMap<IataCode, Airport>,
    airlines: HashMap<AirlineCode, String>,
    templates: Vec<RouteTemplate>,
}

impl DatasetBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an airport, replacing any earlier record with the same code.
    pub fn airport(mut self, airport: Airport) -> Self {
        self.airports.insert(airport.code, airport);
        self
    }

    /// Add an airline display name.
    pub fn airline(mut self, code: AirlineCode, name: impl Into<String>) -> Self {
        self.airlines.insert(code, name.into());
        self
    }

    /// Add a route template.
    pub fn route(mut self, template: RouteTemplate) -> Self {
        self.templates.push(template);
        self
    }

    /// Index the templates and freeze the dataset.
    ///
    /// Airports with out-of-range coordinates or offsets are dropped.
    /// Templates whose origin or destination is not a known airport, and
    /// templates that loop back to their origin, are dropped.
    pub fn build(self) -> Dataset {
        let mut airports = self.airports;
        airports.retain(|code, airport| match airport.validate() {
            Ok(()) => true,
            Err(error) => {
                warn!(airport = %code, %error, "Dropped airport with invalid metadata");
                false
            }
        });

        let mut routes: HashMap<IataCode, Vec<RouteTemplate>> = HashMap::new();
        let mut dropped = 0usize;

        for template in self.templates {
            let known = airports.contains_key(&template.origin)
                && airports.contains_key(&template.destination);

            if !known || template.is_loop() {
                dropped += 1;
                continue;
            }

            routes.entry(template.origin).or_default().push(template);
        }

        if dropped > 0 {
            warn!(dropped, "Dropped route templates with unknown or looping endpoints");
        }

        let dataset = Dataset {
            airports,
            airlines: self.airlines,
            routes,
        };

        debug!(
            airports = dataset.airport_count(),
            airlines = dataset.airline_count(),
            origins = dataset.origin_count(),
            routes = dataset.route_count(),
            "Dataset built"
        );

        dataset
    }
}
