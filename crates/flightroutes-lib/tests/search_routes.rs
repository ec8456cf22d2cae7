//! Route-search behaviour against the bundled dataset and small synthetic
//! networks, exercised through the public API only.

mod common;

use common::{airport, flight, network_from};
use flightroutes_lib::{find_routes, Criterion, FlightNetwork, SearchRequest};

#[test]
fn delhi_to_chennai_has_direct_and_connecting_options() {
    let network = FlightNetwork::builtin().expect("bundled dataset parses");
    let request = SearchRequest::new("DEL", "MAA")
        .optimize(Criterion::Price)
        .limit(5);

    let routes = find_routes(&network, &request).expect("search succeeds");

    assert!(!routes.is_empty());
    assert!(routes.len() <= 5);
    assert!(routes.iter().any(|route| route.stops == 0));
}

#[test]
fn port_blair_is_reachable_only_through_its_gateways() {
    let network = FlightNetwork::builtin().expect("bundled dataset parses");
    let request = SearchRequest::new("DEL", "IXZ")
        .optimize(Criterion::Duration)
        .limit(5);

    let routes = find_routes(&network, &request).expect("search succeeds");

    // Every itinerary into Port Blair connects via Chennai or Kolkata.
    assert!(!routes.is_empty());
    for route in &routes {
        let gateway = &route.segments[route.segments.len() - 1].from.id;
        assert!(
            gateway == "MAA" || gateway == "CCU",
            "unexpected gateway {gateway}"
        );
        assert!(route.stops >= 1);
    }
}

#[test]
fn aggregates_are_consistent_for_every_returned_route() {
    let network = FlightNetwork::builtin().expect("bundled dataset parses");
    for criterion in [Criterion::Price, Criterion::Duration, Criterion::Stops] {
        let request = SearchRequest::new("AMD", "CCU").optimize(criterion).limit(5);
        let routes = find_routes(&network, &request).expect("search succeeds");
        assert!(!routes.is_empty());

        for route in &routes {
            for pair in route.segments.windows(2) {
                assert_eq!(pair[0].to.id, pair[1].from.id, "chain must be contiguous");
            }
            assert_eq!(route.stops, route.segments.len() - 1);
            assert_eq!(
                route.total_price,
                route.segments.iter().map(|s| s.flight.price).sum::<u32>()
            );
            assert_eq!(
                route.total_duration,
                route.segments.iter().map(|s| s.flight.duration).sum::<u32>()
            );
        }
    }
}

#[test]
fn duration_criterion_ranks_the_quickest_itinerary_first() {
    let network = network_from(
        vec![airport("A"), airport("B"), airport("C")],
        vec![
            flight("SLOW", "A", "C", 100, 300),
            flight("HOP1", "A", "B", 100, 60),
            flight("HOP2", "B", "C", 100, 60),
        ],
    );
    let request = SearchRequest::new("A", "C")
        .optimize(Criterion::Duration)
        .limit(5);

    let routes = find_routes(&network, &request).expect("search succeeds");

    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0].total_duration, 120);
    assert_eq!(routes[1].total_duration, 300);
}

#[test]
fn searching_to_the_origin_itself_finds_nothing() {
    let network = FlightNetwork::builtin().expect("bundled dataset parses");
    let routes =
        find_routes(&network, &SearchRequest::new("DEL", "DEL")).expect("search succeeds");
    assert!(routes.is_empty());
}

#[test]
fn unreachable_pair_returns_empty_without_error() {
    let network = network_from(
        vec![airport("A"), airport("B"), airport("Z")],
        vec![flight("F1", "A", "B", 100, 60)],
    );
    let routes = find_routes(&network, &SearchRequest::new("A", "Z")).expect("search succeeds");
    assert!(routes.is_empty());
}

#[test]
fn visited_key_admits_one_route_per_itinerary_length() {
    // DEL -> BOM is served by three carriers, but the duplicate-state key is
    // (airport, path length): once the cheapest direct arrival at BOM is
    // processed, the other two direct flights are suppressed. Additional
    // results have to come from longer itineraries instead.
    let network = FlightNetwork::builtin().expect("bundled dataset parses");
    let request = SearchRequest::new("DEL", "BOM")
        .optimize(Criterion::Price)
        .limit(3);

    let routes = find_routes(&network, &request).expect("search succeeds");

    assert_eq!(routes.len(), 3);
    let direct: Vec<&str> = routes
        .iter()
        .filter(|route| route.stops == 0)
        .map(|route| route.segments[0].flight.flight_number.as_str())
        .collect();
    assert_eq!(direct, vec!["SJ201"], "only the cheapest direct survives");
    assert!(routes.iter().any(|route| route.stops >= 1));
}
