use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use flightroutes_lib::{
    find_routes, format_duration, Criterion, FlightNetwork, RouteRenderMode, RouteSummary,
    SearchRequest,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Flight network listings and route search")]
struct Cli {
    /// Load a network JSON file instead of the bundled dataset.
    #[arg(long)]
    network: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every airport in the network.
    Airports,
    /// List scheduled departures from an airport.
    Flights {
        /// Airport code or city name.
        #[arg(long = "from")]
        from: String,
    },
    /// Search for routes between two airports.
    Route {
        /// Origin airport code or city name.
        #[arg(long = "from")]
        from: String,
        /// Destination airport code or city name.
        #[arg(long = "to")]
        to: String,
        /// Metric used to rank itineraries.
        #[arg(long, value_enum, default_value = "duration")]
        optimize: Optimize,
        /// Maximum number of itineraries to return.
        #[arg(long = "max-results", default_value_t = 5)]
        max_results: usize,
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Optimize {
    Price,
    Duration,
    Stops,
}

impl From<Optimize> for Criterion {
    fn from(value: Optimize) -> Self {
        match value {
            Optimize::Price => Criterion::Price,
            Optimize::Duration => Criterion::Duration,
            Optimize::Stops => Criterion::Stops,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Format {
    Text,
    Rich,
    Json,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Airports => handle_airports(cli.network.as_deref()),
        Command::Flights { from } => handle_flights(cli.network.as_deref(), &from),
        Command::Route {
            from,
            to,
            optimize,
            max_results,
            format,
        } => handle_route(
            cli.network.as_deref(),
            &from,
            &to,
            optimize.into(),
            max_results,
            format,
        ),
    }
}

fn load_network(path: Option<&Path>) -> Result<FlightNetwork> {
    match path {
        Some(path) => FlightNetwork::from_path(path)
            .with_context(|| format!("failed to load network from {}", path.display())),
        None => FlightNetwork::builtin().context("failed to load the bundled network"),
    }
}

fn handle_airports(path: Option<&Path>) -> Result<()> {
    let network = load_network(path)?;
    for airport in network.airports() {
        println!("{}  {} ({})", airport.code, airport.name, airport.city);
    }
    Ok(())
}

fn handle_flights(path: Option<&Path>, from: &str) -> Result<()> {
    let network = load_network(path)?;
    let airport = network.resolve_airport(from)?;

    let departures = network.flights_from(&airport.id);
    if departures.is_empty() {
        println!("No departures from {} ({}).", airport.code, airport.city);
        return Ok(());
    }

    println!("Departures from {} ({}):", airport.code, airport.city);
    for flight in departures {
        println!(
            "{} {}  {} -> {}  {} ({}, Rs.{})",
            flight.airline,
            flight.flight_number,
            flight.departure_time,
            flight.to,
            flight.arrival_time,
            format_duration(flight.duration),
            flight.price
        );
    }
    Ok(())
}

fn handle_route(
    path: Option<&Path>,
    from: &str,
    to: &str,
    criterion: Criterion,
    max_results: usize,
    format: Format,
) -> Result<()> {
    let network = load_network(path)?;
    let origin = network.resolve_airport(from)?.id.clone();
    let destination = network.resolve_airport(to)?.id.clone();

    let request = SearchRequest::new(origin, destination)
        .optimize(criterion)
        .limit(max_results);
    let routes = find_routes(&network, &request)?;

    let summaries: Vec<RouteSummary> = routes
        .iter()
        .enumerate()
        .map(|(index, route)| RouteSummary::from_route(index + 1, criterion, route))
        .collect();

    match format {
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
        Format::Text | Format::Rich => {
            if summaries.is_empty() {
                println!("No routes found between {} and {}.", from, to);
                return Ok(());
            }
            let mode = match format {
                Format::Rich => RouteRenderMode::RichText,
                _ => RouteRenderMode::PlainText,
            };
            println!("Routes optimized by {criterion}:");
            for summary in &summaries {
                print!("{}", summary.render(mode));
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
