use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Identifier for an airport. Matches the IATA-style code used by the
/// bundled dataset (e.g. `"DEL"`).
pub type AirportId = String;

/// Number of fuzzy suggestions attached to an unknown-airport error.
const MAX_SUGGESTIONS: usize = 3;

/// 2D position of an airport on the schematic route map.
///
/// Display metadata only; routing never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPosition {
    pub x: f64,
    pub y: f64,
}

/// A node in the flight network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub id: AirportId,
    pub name: String,
    pub city: String,
    pub code: String,
    pub position: MapPosition,
}

/// A directed edge in the flight network: one scheduled flight between an
/// ordered pair of airports. Multiple flights may share the same pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub id: String,
    pub from: AirportId,
    pub to: AirportId,
    pub airline: String,
    pub flight_number: String,
    /// Local time of day, `HH:MM`. No date or timezone modelling.
    pub departure_time: String,
    pub arrival_time: String,
    /// Flight time in minutes.
    pub duration: u32,
    /// Fare in a single currency unit (INR in the bundled dataset).
    pub price: u32,
}

#[derive(Debug, Deserialize)]
struct NetworkFile {
    airports: Vec<Airport>,
    flights: Vec<Flight>,
}

/// In-memory flight network: airport records plus an adjacency map of
/// outgoing flights per airport.
///
/// Read-only after construction. Callers hold one instance and pass it by
/// reference into the search; there is no process-wide singleton.
#[derive(Debug, Clone, Default)]
pub struct FlightNetwork {
    airports: HashMap<AirportId, Airport>,
    departures: HashMap<AirportId, Vec<Flight>>,
    flight_count: usize,
}

/// Dataset bundled with the crate: a ten-airport Indian domestic network.
const BUILTIN_NETWORK: &str = include_str!("../data/network.json");

impl FlightNetwork {
    /// Load the dataset bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_NETWORK)
    }

    /// Load a network from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Parse a network from JSON text.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let file: NetworkFile = serde_json::from_str(raw)?;
        Ok(Self::from_parts(file.airports, file.flights))
    }

    /// Assemble a network from already-constructed records.
    pub fn from_parts(airports: Vec<Airport>, flights: Vec<Flight>) -> Self {
        let flight_count = flights.len();
        let mut departures: HashMap<AirportId, Vec<Flight>> = HashMap::new();
        for flight in flights {
            departures.entry(flight.from.clone()).or_default().push(flight);
        }

        let airports: HashMap<AirportId, Airport> = airports
            .into_iter()
            .map(|airport| (airport.id.clone(), airport))
            .collect();

        debug!(
            airports = airports.len(),
            flights = flight_count,
            "flight network loaded"
        );

        Self {
            airports,
            departures,
            flight_count,
        }
    }

    /// All flights departing from the given airport. An unknown id yields an
    /// empty slice, never an error.
    pub fn flights_from(&self, airport_id: &str) -> &[Flight] {
        self.departures
            .get(airport_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Non-stop flights between an ordered airport pair.
    pub fn direct_flights(&self, from: &str, to: &str) -> Vec<&Flight> {
        self.flights_from(from)
            .iter()
            .filter(|flight| flight.to == to)
            .collect()
    }

    /// Lookup an airport record by identifier.
    pub fn airport(&self, id: &str) -> Option<&Airport> {
        self.airports.get(id)
    }

    /// Lookup an airport by city name, case-insensitive.
    pub fn airport_by_city(&self, city: &str) -> Option<&Airport> {
        self.airports
            .values()
            .find(|airport| airport.city.eq_ignore_ascii_case(city))
    }

    /// Resolve user input to an airport: exact id/code first, then city name.
    ///
    /// Unknown input produces [`Error::UnknownAirport`] carrying fuzzy
    /// suggestions so the caller can hint at likely typos.
    pub fn resolve_airport(&self, query: &str) -> Result<&Airport> {
        if let Some(airport) = self.airports.get(&query.to_ascii_uppercase()) {
            return Ok(airport);
        }
        if let Some(airport) = self.airport_by_city(query) {
            return Ok(airport);
        }
        Err(Error::UnknownAirport {
            query: query.to_string(),
            suggestions: self.fuzzy_airport_matches(query, MAX_SUGGESTIONS),
        })
    }

    /// Closest airport codes and city names to `query` by Jaro-Winkler
    /// similarity, best match first. Each airport contributes at most one
    /// suggestion (its better-matching label), so a single airport cannot
    /// crowd out other candidates.
    pub fn fuzzy_airport_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let query = query.to_lowercase();
        let mut scored: Vec<(f64, String)> = self
            .airports
            .values()
            .filter_map(|airport| {
                let by_code = strsim::jaro_winkler(&query, &airport.code.to_lowercase());
                let by_city = strsim::jaro_winkler(&query, &airport.city.to_lowercase());
                let (score, label) = if by_city >= by_code {
                    (by_city, airport.city.clone())
                } else {
                    (by_code, airport.code.clone())
                };
                (score > 0.6).then_some((score, label))
            })
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(limit);
        scored.into_iter().map(|(_, name)| name).collect()
    }

    /// All airports, sorted by identifier for stable listings.
    pub fn airports(&self) -> Vec<&Airport> {
        let mut all: Vec<&Airport> = self.airports.values().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    /// Number of airports in the network.
    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }

    /// Number of flights in the network.
    pub fn flight_count(&self) -> usize {
        self.flight_count
    }
}
