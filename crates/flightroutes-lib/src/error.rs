use thiserror::Error;

/// Convenient result alias for the flightroutes library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when user input could not be resolved to an airport.
    #[error("unknown airport: {query}{}", format_suggestions(.suggestions))]
    UnknownAirport {
        query: String,
        suggestions: Vec<String>,
    },

    /// Raised when a flight references an airport id absent from the
    /// dataset. A data-integrity fault, not a user-facing condition.
    #[error("flight references airport {id} which is not in the dataset")]
    AirportNotInDataset { id: String },

    /// Wrapper for dataset parse errors.
    #[error(transparent)]
    Dataset(#[from] serde_json::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_airport_lists_suggestions() {
        let error = Error::UnknownAirport {
            query: "Mumbia".to_string(),
            suggestions: vec!["Mumbai".to_string(), "BOM".to_string()],
        };
        let rendered = format!("{error}");
        assert!(rendered.contains("'Mumbai'"));
        assert!(rendered.contains("'BOM'"));
    }

    #[test]
    fn unknown_airport_without_suggestions_is_terse() {
        let error = Error::UnknownAirport {
            query: "Atlantis".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(format!("{error}"), "unknown airport: Atlantis");
    }
}
