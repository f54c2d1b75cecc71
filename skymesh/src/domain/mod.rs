//! Domain types for the flight route planner.
//!
//! This module contains the core domain model types: validated codes,
//! airport metadata, route templates, dated flights, itineraries and prices.
//! All types enforce their invariants at construction time, so code that
//! receives these types can trust their validity.

mod airline;
mod airport;
mod code;
mod error;
mod flight;
mod price;
mod route;
mod template;
mod time;

pub use airline::{AirlineCode, InvalidAirlineCode};
pub use airport::{Airport, IataCode, InvalidIataCode};
pub use error::DomainError;
pub use flight::{Flight, Place};
pub use price::{CurrencyCode, InvalidCurrencyCode, Price, round_cents};
pub use route::FlightRoute;
pub use template::RouteTemplate;
pub use time::{duration_from_minutes, duration_hours, format_duration, from_local};
