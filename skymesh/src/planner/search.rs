//! Iterative-deepening route search.
//!
//! Routes are found one depth tier at a time: all direct flights, then all
//! two-leg routes, and so on up to the leg limit. Each tier is a fresh
//! depth-first search that only records routes using exactly that many
//! legs, so a route never appears twice and results are naturally grouped
//! by leg count.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use tracing::{debug, trace};

use crate::domain::{DomainError, Flight, FlightRoute, IataCode};
use crate::provider::{FlightProvider, ProviderError};

use super::config::SearchConfig;
use super::constraints::{ConnectionWindow, Rejection, check_extension};

/// Error from route search.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    /// Invalid search request
    #[error("invalid search request: {0}")]
    InvalidRequest(String),

    /// The provider failed to list or price flights
    #[error("flight provider failed: {0}")]
    Provider(#[from] ProviderError),

    /// A discovered path could not be turned into a route
    #[error("failed to build route: {0}")]
    Domain(#[from] DomainError),
}

/// Request for route search.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Departure airport.
    pub origin: IataCode,

    /// Arrival airport.
    pub destination: IataCode,

    /// Earliest acceptable departure.
    pub not_before: DateTime<FixedOffset>,

    /// Leg limit; the configured default when `None`.
    pub max_legs: Option<usize>,

    /// Route limit; the configured default when `None`.
    pub max_routes: Option<usize>,

    /// Stop deepening once a finished tier brings the total to this many.
    pub min_routes: Option<usize>,
}

impl SearchRequest {
    /// Create a new search request with default limits.
    pub fn new(origin: IataCode, destination: IataCode, not_before: DateTime<FixedOffset>) -> Self {
        Self {
            origin,
            destination,
            not_before,
            max_legs: None,
            max_routes: None,
            min_routes: None,
        }
    }

    /// Set the maximum number of legs per route.
    pub fn with_max_legs(mut self, max_legs: usize) -> Self {
        self.max_legs = Some(max_legs);
        self
    }

    /// Set the maximum number of routes returned.
    pub fn with_max_routes(mut self, max_routes: usize) -> Self {
        self.max_routes = Some(max_routes);
        self
    }

    /// Stop searching deeper tiers once this many routes are found.
    pub fn with_min_routes(mut self, min_routes: usize) -> Self {
        self.min_routes = Some(min_routes);
        self
    }

    /// Validate the search request.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.origin == self.destination {
            return Err(SearchError::InvalidRequest(format!(
                "origin and destination are both {}",
                self.origin
            )));
        }

        if self.max_legs == Some(0) {
            return Err(SearchError::InvalidRequest(
                "max_legs must be at least 1".to_string(),
            ));
        }

        if self.max_routes == Some(0) {
            return Err(SearchError::InvalidRequest(
                "max_routes must be at least 1".to_string(),
            ));
        }

        if self.min_routes == Some(0) {
            return Err(SearchError::InvalidRequest(
                "min_routes must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Counters describing how much work a search did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Search nodes visited, across all tiers.
    pub branches_explored: usize,

    /// Calls to [`FlightProvider::outbound_flights`].
    pub provider_calls: usize,

    /// Branches cut because the path reached the tier's leg limit.
    pub pruned_by_depth: usize,

    /// Candidate flights rejected for revisiting an airport.
    pub pruned_by_cycle: usize,

    /// Candidate flights rejected for a too-short or too-long connection.
    pub pruned_by_connection: usize,

    /// Completed routes priced by the provider.
    pub routes_priced: usize,
}

/// Result of route search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Priced routes, grouped by leg count then ordered by duration.
    pub routes: Vec<FlightRoute>,

    /// Work done during the search.
    pub stats: SearchStats,
}

/// Route planner using iterative-deepening DFS.
pub struct Planner<'a, P: FlightProvider> {
    provider: &'a P,
    config: &'a SearchConfig,
}

impl<'a, P: FlightProvider> Planner<'a, P> {
    /// Create a new planner.
    pub fn new(provider: &'a P, config: &'a SearchConfig) -> Self {
        Self { provider, config }
    }

    /// Search for priced routes from origin to destination.
    ///
    /// An empty result is not an error. Provider failures abort the whole
    /// search; no partially built route is returned.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResult, SearchError> {
        request.validate()?;

        let max_legs = self.max_legs(request);
        let max_routes = self.max_routes(request);
        let window = ConnectionWindow::from(self.config);

        let mut routes: Vec<FlightRoute> = Vec::new();
        let mut stats = SearchStats::default();

        for depth in 1..=max_legs {
            let mut tier = TierSearch {
                provider: self.provider,
                window,
                destination: request.destination,
                depth,
                path: Vec::with_capacity(depth),
                visited: HashSet::from([request.origin]),
                found: Vec::new(),
                stats: &mut stats,
            };
            tier.explore(request.origin, request.not_before)?;

            let mut found = tier.found;
            // Stable, so equal durations keep discovery order
            found.sort_by_key(FlightRoute::total_duration);

            debug!(
                depth,
                found = found.len(),
                total = routes.len() + found.len(),
                "Depth tier complete"
            );

            let room = max_routes - routes.len();
            routes.extend(found.into_iter().take(room));

            if routes.len() >= max_routes {
                debug!(max_routes, "Route limit reached");
                break;
            }

            if let Some(min_routes) = request.min_routes
                && routes.len() >= min_routes
            {
                debug!(min_routes, depth, "Enough routes found, not deepening");
                break;
            }
        }

        debug!(
            origin = %request.origin,
            destination = %request.destination,
            routes = routes.len(),
            branches = stats.branches_explored,
            provider_calls = stats.provider_calls,
            "Search complete"
        );

        Ok(SearchResult { routes, stats })
    }

    /// Requested leg limit, clamped to the configured ceiling.
    fn max_legs(&self, request: &SearchRequest) -> usize {
        let requested = request.max_legs.unwrap_or(self.config.default_max_legs);
        if requested > self.config.max_allowed_legs {
            debug!(
                requested,
                allowed = self.config.max_allowed_legs,
                "Clamping max_legs"
            );
        }
        requested.min(self.config.max_allowed_legs)
    }

    /// Requested route limit, clamped to the configured ceiling.
    fn max_routes(&self, request: &SearchRequest) -> usize {
        let requested = request.max_routes.unwrap_or(self.config.default_max_routes);
        if requested > self.config.max_allowed_routes {
            debug!(
                requested,
                allowed = self.config.max_allowed_routes,
                "Clamping max_routes"
            );
        }
        requested.min(self.config.max_allowed_routes)
    }
}

/// State of one depth-limited DFS.
///
/// `path` and `visited` are pushed before recursing and popped after, so
/// they always describe the branch currently being explored.
struct TierSearch<'a, 's, P: FlightProvider> {
    provider: &'a P,
    window: ConnectionWindow,
    destination: IataCode,
    depth: usize,
    path: Vec<Arc<Flight>>,
    visited: HashSet<IataCode>,
    found: Vec<FlightRoute>,
    stats: &'s mut SearchStats,
}

impl<P: FlightProvider> TierSearch<'_, '_, P> {
    fn explore(
        &mut self,
        airport: IataCode,
        not_before: DateTime<FixedOffset>,
    ) -> Result<(), SearchError> {
        self.stats.branches_explored += 1;

        if airport == self.destination && !self.path.is_empty() {
            // Shorter routes were recorded by an earlier tier
            if self.path.len() == self.depth {
                self.record()?;
            }
            return Ok(());
        }

        if self.path.len() >= self.depth {
            self.stats.pruned_by_depth += 1;
            return Ok(());
        }

        self.stats.provider_calls += 1;
        let flights = self.provider.outbound_flights(&airport, not_before)?;

        trace!(
            airport = %airport,
            depth = self.depth,
            legs = self.path.len(),
            flights = flights.len(),
            "Exploring airport"
        );

        for flight in flights {
            match check_extension(&self.path, &self.visited, &flight, &self.window) {
                Ok(()) => {}
                Err(Rejection::Revisit(_)) => {
                    self.stats.pruned_by_cycle += 1;
                    continue;
                }
                Err(rejection) => {
                    trace!(flight = flight.id(), %rejection, "Connection rejected");
                    self.stats.pruned_by_connection += 1;
                    continue;
                }
            }

            let next = *flight.destination();
            let arrival = flight.arrival_time();

            self.visited.insert(next);
            self.path.push(flight);
            let result = self.explore(next, arrival);
            self.path.pop();
            self.visited.remove(&next);

            result?;
        }

        Ok(())
    }

    /// Price the current path and keep it.
    fn record(&mut self) -> Result<(), SearchError> {
        let route = FlightRoute::new(self.path.clone())?;
        let price = self.provider.price(&route)?;
        self.stats.routes_priced += 1;

        trace!(
            legs = route.leg_count(),
            duration_mins = route.total_duration().num_minutes(),
            price = price.amount(),
            "Found route"
        );

        self.found.push(route.with_price(price));
        Ok(())
    }
}
