//! Route templates: undated origin→destination services.

use serde::{Deserialize, Serialize};

use super::{AirlineCode, IataCode};

/// A scheduled route with no concrete date or time.
///
/// Providers turn templates into concrete [`Flight`](super::Flight)s on
/// demand. Equipment codes are kept in dataset order because the first
/// recognised code decides the cruise speed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTemplate {
    pub origin: IataCode,
    pub destination: IataCode,
    pub airline: AirlineCode,
    /// Aircraft type codes, e.g. `["738", "73H"]`.
    #[serde(default)]
    pub equipment: Vec<String>,
}

impl RouteTemplate {
    /// Creates a template.
    pub fn new<I, S>(origin: IataCode, destination: IataCode, airline: AirlineCode, equipment: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            origin,
            destination,
            airline,
            equipment: equipment.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if the template starts and ends at the same airport.
    pub fn is_loop(&self) -> bool {
        self.origin == self.destination
    }
}
