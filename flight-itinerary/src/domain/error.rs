//! Domain error types.
//!
//! Every variant is a contract violation by the caller. A connection that
//! is too short is not an error: the validity checks report it as `false`.

/// Domain-level errors for leg construction and itinerary queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItineraryError {
    /// Invalid leg construction (e.g., blank airport, arrive before depart)
    #[error("invalid leg: {0}")]
    InvalidLeg(&'static str),

    /// Removal from an itinerary with no legs
    #[error("itinerary is empty")]
    EmptySequence,

    /// Layover queries need exactly one connection
    #[error("itinerary must have exactly 2 legs, found {actual}")]
    WrongLegCount { actual: usize },

    /// A minimum layover threshold was below zero
    #[error("{name} must be non-negative, got {value}")]
    NegativeThreshold { name: &'static str, value: i64 },
}
