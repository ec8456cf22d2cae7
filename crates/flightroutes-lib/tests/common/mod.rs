use flightroutes_lib::{Airport, Flight, FlightNetwork, MapPosition};

pub fn airport(id: &str) -> Airport {
    Airport {
        id: id.to_string(),
        name: format!("{id} International"),
        city: format!("{id} City"),
        code: id.to_string(),
        position: MapPosition { x: 0.0, y: 0.0 },
    }
}

pub fn flight(id: &str, from: &str, to: &str, price: u32, duration: u32) -> Flight {
    Flight {
        id: id.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        airline: "TestAir".to_string(),
        flight_number: id.to_string(),
        departure_time: "08:00".to_string(),
        arrival_time: "10:00".to_string(),
        duration,
        price,
    }
}

pub fn network_from(airports: Vec<Airport>, flights: Vec<Flight>) -> FlightNetwork {
    FlightNetwork::from_parts(airports, flights)
}
