use serde::Serialize;

use crate::dataset::{Airport, Flight, FlightNetwork};
use crate::error::{Error, Result};

/// One flight within a route, paired with its resolved endpoint airports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub flight: Flight,
    pub from: Airport,
    pub to: Airport,
}

/// A complete itinerary: a contiguous chain of one or more flights plus
/// derived aggregates.
///
/// Invariants: segment `i`'s destination equals segment `i + 1`'s origin,
/// `stops == segments.len() - 1`, and the totals are sums over the segment
/// flights. Constructed once by [`assemble`] and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub segments: Vec<Segment>,
    /// Total flight time in minutes.
    pub total_duration: u32,
    pub total_price: u32,
    pub stops: usize,
}

impl Route {
    /// Airport record at the start of the itinerary.
    pub fn origin(&self) -> &Airport {
        &self.segments[0].from
    }

    /// Airport record at the end of the itinerary.
    pub fn destination(&self) -> &Airport {
        &self.segments[self.segments.len() - 1].to
    }
}

/// Build a [`Route`] from an ordered chain of flights, resolving each
/// endpoint through the network.
///
/// The caller guarantees the chain is non-empty and contiguous (the search
/// loop's expansion rules enforce both); neither is re-validated here. Fails
/// only when a flight references an airport the network cannot resolve,
/// which indicates a corrupt dataset.
pub fn assemble(network: &FlightNetwork, flights: &[Flight]) -> Result<Route> {
    let mut segments = Vec::with_capacity(flights.len());
    for flight in flights {
        let from = resolve(network, &flight.from)?;
        let to = resolve(network, &flight.to)?;
        segments.push(Segment {
            flight: flight.clone(),
            from,
            to,
        });
    }

    let total_duration = flights.iter().map(|flight| flight.duration).sum();
    let total_price = flights.iter().map(|flight| flight.price).sum();
    let stops = flights.len().saturating_sub(1);

    Ok(Route {
        segments,
        total_duration,
        total_price,
        stops,
    })
}

fn resolve(network: &FlightNetwork, id: &str) -> Result<Airport> {
    network
        .airport(id)
        .cloned()
        .ok_or_else(|| Error::AirportNotInDataset { id: id.to_string() })
}
