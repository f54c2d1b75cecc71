//! Rules deciding whether a flight may extend a partial route.
//!
//! All checks are pure: they look at the path so far and the candidate
//! flight and never touch a provider.

use std::collections::HashSet;
use std::fmt;

use chrono::TimeDelta;

use crate::domain::{Flight, IataCode};

use super::config::SearchConfig;

/// Allowed range for the gap between landing and the next departure.
///
/// Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionWindow {
    pub min: TimeDelta,
    pub max: TimeDelta,
}

impl ConnectionWindow {
    /// Create a window from explicit bounds.
    pub fn new(min: TimeDelta, max: TimeDelta) -> Self {
        Self { min, max }
    }

    /// Check a layover against the window.
    pub fn check(&self, layover: TimeDelta) -> Result<(), Rejection> {
        if layover < self.min {
            Err(Rejection::ConnectionTooShort(layover))
        } else if layover > self.max {
            Err(Rejection::ConnectionTooLong(layover))
        } else {
            Ok(())
        }
    }
}

impl From<&SearchConfig> for ConnectionWindow {
    fn from(config: &SearchConfig) -> Self {
        Self::new(config.min_connection(), config.max_connection())
    }
}

impl Default for ConnectionWindow {
    fn default() -> Self {
        Self::from(&SearchConfig::default())
    }
}

/// Why a candidate flight cannot extend the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The flight lands at an airport the path already visited.
    Revisit(IataCode),
    /// Not enough time to make the connection.
    ConnectionTooShort(TimeDelta),
    /// The layover exceeds the allowed maximum.
    ConnectionTooLong(TimeDelta),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Revisit(code) => write!(f, "revisits {code}"),
            Rejection::ConnectionTooShort(gap) => {
                write!(f, "connection too short ({} min)", gap.num_minutes())
            }
            Rejection::ConnectionTooLong(gap) => {
                write!(f, "connection too long ({} min)", gap.num_minutes())
            }
        }
    }
}

/// Returns true if `next` can be boarded after landing on `previous`.
///
/// The first leg of a route has no previous flight and always passes.
pub fn is_connection_time_valid(
    previous: Option<&Flight>,
    next: &Flight,
    window: &ConnectionWindow,
) -> bool {
    match previous {
        Some(previous) => window
            .check(next.departure_time() - previous.arrival_time())
            .is_ok(),
        None => true,
    }
}

/// Returns true if `candidate` lands somewhere new.
pub fn is_cycle_free(visited: &HashSet<IataCode>, candidate: &Flight) -> bool {
    !visited.contains(candidate.destination())
}

/// Decide whether `candidate` may be appended to `path`.
///
/// `visited` holds the route's origin and the destination of every flight
/// in `path`. Revisits are rejected before the connection is timed.
pub fn check_extension(
    path: &[impl AsRef<Flight>],
    visited: &HashSet<IataCode>,
    candidate: &Flight,
    window: &ConnectionWindow,
) -> Result<(), Rejection> {
    if !is_cycle_free(visited, candidate) {
        return Err(Rejection::Revisit(*candidate.destination()));
    }

    match path.last() {
        Some(previous) => {
            window.check(candidate.departure_time() - previous.as_ref().arrival_time())
        }
        None => Ok(()),
    }
}

/// Boolean form of [`check_extension`].
pub fn is_flight_sequence_valid(
    path: &[impl AsRef<Flight>],
    visited: &HashSet<IataCode>,
    candidate: &Flight,
    window: &ConnectionWindow,
) -> bool {
    check_extension(path, visited, candidate, window).is_ok()
}
