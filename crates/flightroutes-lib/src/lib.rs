//! Flight-route search library.
//!
//! This crate exposes helpers to load a flight network dataset into memory,
//! search it for loop-free routes between two airports under a chosen
//! optimization criterion, and summarise the results for display.
//! Higher-level consumers (the CLI, embedders) should only depend on the
//! types exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod output;
pub mod route;
pub mod search;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use dataset::{Airport, AirportId, Flight, FlightNetwork, MapPosition};
pub use error::{Error, Result};
pub use output::{format_duration, RouteRenderMode, RouteSummary};
pub use route::{Route, Segment};
pub use search::{find_routes, Criterion, SearchRequest};
