//! Route planner using iterative-deepening search.
//!
//! This module implements the core planning algorithm that answers:
//! "Which flights can take me from A to B, leaving after a given time?"
//!
//! Routes with fewer legs are always preferred. Within a leg count, routes
//! are ordered by total trip time.

mod config;
mod constraints;
mod search;


pub use config::SearchConfig;
pub use constraints::{
    ConnectionWindow, Rejection, check_extension, is_connection_time_valid, is_cycle_free,
    is_flight_sequence_valid,
};
pub use search::{Planner, SearchError, SearchRequest, SearchResult, SearchStats};
