use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::dataset::{Flight, FlightNetwork};
use crate::error::Result;
use crate::route::{assemble, Route};

/// Optimization metric used to rank partial paths during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    /// Minimize the summed fare.
    Price,
    /// Minimize the summed flight time.
    #[default]
    Duration,
    /// Minimize the number of flights taken.
    Stops,
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Criterion::Price => "price",
            Criterion::Duration => "duration",
            Criterion::Stops => "stops",
        };
        f.write_str(value)
    }
}

impl FromStr for Criterion {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value {
            "price" => Ok(Criterion::Price),
            "duration" => Ok(Criterion::Duration),
            "stops" => Ok(Criterion::Stops),
            other => Err(format!(
                "unknown criterion '{other}' (expected price, duration, or stops)"
            )),
        }
    }
}

/// Route-search request.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Origin airport id.
    pub from: String,
    /// Destination airport id.
    pub to: String,
    pub criterion: Criterion,
    /// Upper bound on the number of routes returned.
    pub max_results: usize,
}

impl SearchRequest {
    /// Request with the default criterion (duration) and result limit.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            criterion: Criterion::default(),
            max_results: 5,
        }
    }

    /// Override the optimization criterion.
    pub fn optimize(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }

    /// Override the result limit.
    pub fn limit(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

/// Accumulated cost of an edge list under the active criterion.
fn path_cost(path: &[Flight], criterion: Criterion) -> u64 {
    match criterion {
        Criterion::Price => path.iter().map(|flight| u64::from(flight.price)).sum(),
        Criterion::Duration => path.iter().map(|flight| u64::from(flight.duration)).sum(),
        // Flight count stands in for stop count + 1.
        Criterion::Stops => path.len() as u64,
    }
}

/// Partial path under consideration: the airport reached so far, the edges
/// taken to get there, and their accumulated cost.
#[derive(Debug, Clone)]
struct FrontierItem {
    airport: String,
    path: Vec<Flight>,
    cost: u64,
}

impl FrontierItem {
    /// Key used to suppress reprocessing of an already-seen search state.
    ///
    /// Deliberately `(airport, path length)` rather than airport alone:
    /// revisiting an airport at a different path length stays allowed, which
    /// is what lets alternate itineraries of different lengths both reach
    /// the result set.
    fn visited_key(&self) -> (String, usize) {
        (self.airport.clone(), self.path.len())
    }
}

impl PartialEq for FrontierItem {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
            && self.airport == other.airport
            && self.path.len() == other.path.len()
    }
}

impl Eq for FrontierItem {}

impl Ord for FrontierItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        // Relative order among equal-cost items is not part of the contract.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.airport.cmp(&self.airport))
            .then_with(|| other.path.len().cmp(&self.path.len()))
    }
}

impl PartialOrd for FrontierItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find up to `max_results` loop-free routes between two airports, cheapest
/// under the requested criterion expanded first.
///
/// Best-first expansion over the network's adjacency, not an exact
/// K-shortest-paths algorithm: completed routes tend toward cheapest-first
/// but global ordering across routes of different lengths is not
/// guaranteed. "No route" is the empty vector, never an error; `Err` is
/// reserved for dataset-integrity faults hit while assembling a result.
///
/// Unknown origin or destination ids simply find no successors. Searching
/// from an airport to itself yields no routes (a route has at least one
/// flight). The loop runs with no deadline; the bundled network is small
/// and bounded, so an iteration cap would be dead weight here.
pub fn find_routes(network: &FlightNetwork, request: &SearchRequest) -> Result<Vec<Route>> {
    let mut visited: HashSet<(String, usize)> = HashSet::new();
    let mut queue: BinaryHeap<FrontierItem> = BinaryHeap::new();
    let mut results: Vec<Route> = Vec::new();
    let mut expanded = 0usize;

    queue.push(FrontierItem {
        airport: request.from.clone(),
        path: Vec::new(),
        cost: 0,
    });

    while let Some(current) = queue.pop() {
        if results.len() >= request.max_results {
            break;
        }

        if !visited.insert(current.visited_key()) {
            continue;
        }

        if current.airport == request.to && !current.path.is_empty() {
            results.push(assemble(network, &current.path)?);
            continue;
        }

        expanded += 1;
        for flight in network.flights_from(&current.airport) {
            // Approximate loop check carried over from the route model: the
            // candidate's destination is compared against the origins of
            // edges already in the path, not against every airport touched.
            if current.path.iter().any(|taken| taken.from == flight.to) {
                continue;
            }

            let mut extended = current.path.clone();
            extended.push(flight.clone());
            let cost = path_cost(&extended, request.criterion);
            queue.push(FrontierItem {
                airport: flight.to.clone(),
                path: extended,
                cost,
            });
        }
    }

    debug!(
        from = %request.from,
        to = %request.to,
        criterion = %request.criterion,
        expanded,
        found = results.len(),
        "route search finished"
    );

    Ok(results)
}
