use std::fmt::Write;

use serde::Serialize;

use crate::route::Route;
use crate::search::Criterion;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// One flight within a summary, flattened for display.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SegmentSummary {
    pub airline: String,
    pub flight_number: String,
    pub from_code: String,
    pub from_city: String,
    pub to_code: String,
    pub to_city: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration_minutes: u32,
    pub price: u32,
}

/// Structured representation of a found route that higher-level consumers
/// can serialise or render as text.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    /// 1-based rank within the result set.
    pub rank: usize,
    pub criterion: Criterion,
    pub from_code: String,
    pub to_code: String,
    pub stops: usize,
    pub total_duration_minutes: u32,
    pub total_price: u32,
    pub segments: Vec<SegmentSummary>,
}

impl RouteSummary {
    /// Flatten a [`Route`] into a display summary.
    pub fn from_route(rank: usize, criterion: Criterion, route: &Route) -> Self {
        let segments = route
            .segments
            .iter()
            .map(|segment| SegmentSummary {
                airline: segment.flight.airline.clone(),
                flight_number: segment.flight.flight_number.clone(),
                from_code: segment.from.code.clone(),
                from_city: segment.from.city.clone(),
                to_code: segment.to.code.clone(),
                to_city: segment.to.city.clone(),
                departure_time: segment.flight.departure_time.clone(),
                arrival_time: segment.flight.arrival_time.clone(),
                duration_minutes: segment.flight.duration,
                price: segment.flight.price,
            })
            .collect();

        Self {
            rank,
            criterion,
            from_code: route.origin().code.clone(),
            to_code: route.destination().code.clone(),
            stops: route.stops,
            total_duration_minutes: route.total_duration,
            total_price: route.total_price,
            segments,
        }
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn headline(&self) -> String {
        format!(
            "{} -> {} ({}, {}, Rs.{})",
            self.from_code,
            self.to_code,
            describe_stops(self.stops),
            format_duration(self.total_duration_minutes),
            self.total_price
        )
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "{}. {}", self.rank, self.headline());
        for segment in &self.segments {
            let _ = writeln!(
                buffer,
                "   {} {}  {} {} -> {} {}  ({}, Rs.{})",
                segment.airline,
                segment.flight_number,
                segment.from_code,
                segment.departure_time,
                segment.to_code,
                segment.arrival_time,
                format_duration(segment.duration_minutes),
                segment.price
            );
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "**{}.** {}", self.rank, self.headline());
        for segment in &self.segments {
            let _ = writeln!(
                buffer,
                "* **{} {}** `{} {} -> {} {}` ({}, Rs.{})",
                segment.airline,
                segment.flight_number,
                segment.from_code,
                segment.departure_time,
                segment.to_code,
                segment.arrival_time,
                format_duration(segment.duration_minutes),
                segment.price
            );
        }
        buffer
    }
}

/// Format a duration in minutes as `"2h 15m"` (or `"45m"` under an hour).
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let remainder = minutes % 60;
    if hours == 0 {
        format!("{remainder}m")
    } else if remainder == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {remainder}m")
    }
}

/// Human label for a stop count.
pub fn describe_stops(stops: usize) -> String {
    match stops {
        0 => "non-stop".to_string(),
        1 => "1 stop".to_string(),
        n => format!("{n} stops"),
    }
}
