//! Multi-leg flight itinerary search.
//!
//! Answers: "How can I fly from A to B, leaving after a given time?"
//! Flights are synthesized on demand from undated route templates, chained
//! under connection-time rules, and priced with a simple tariff.
//!
//! ```
//! use skymesh::dataset::Dataset;
//! use skymesh::domain::{AirlineCode, Airport, IataCode, RouteTemplate};
//! use skymesh::planner::{Planner, SearchConfig, SearchRequest};
//! use skymesh::provider::OpenFlightsProvider;
//! use chrono::DateTime;
//!
//! let syd = IataCode::parse("SYD").unwrap();
//! let mel = IataCode::parse("MEL").unwrap();
//! let qf = AirlineCode::parse("QF").unwrap();
//!
//! let dataset = Dataset::builder()
//!     .airport(Airport::new(syd, "Sydney", "Sydney", "Australia", -33.9461, 151.177, 10.0).unwrap())
//!     .airport(Airport::new(mel, "Melbourne", "Melbourne", "Australia", -37.6733, 144.843, 10.0).unwrap())
//!     .airline(qf, "Qantas")
//!     .route(RouteTemplate::new(syd, mel, qf, ["738"]))
//!     .build();
//!
//! let provider = OpenFlightsProvider::new(dataset).unwrap();
//! let config = SearchConfig::default();
//! let planner = Planner::new(&provider, &config);
//!
//! let not_before = DateTime::parse_from_rfc3339("2026-03-01T06:00:00+10:00").unwrap();
//! let result = planner
//!     .search(&SearchRequest::new(syd, mel, not_before).with_max_legs(2))
//!     .unwrap();
//!
//! assert_eq!(result.routes.len(), 1);
//! assert_eq!(result.routes[0].flights()[0].airline_name(), "Qantas");
//! ```

pub mod dataset;
pub mod domain;
pub mod planner;
pub mod provider;
pub mod report;
