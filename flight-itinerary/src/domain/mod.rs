//! Domain types for flight itineraries.
//!
//! This module contains the core domain model: validated flight legs, the
//! itinerary that sequences them and the baggage policy used to judge a
//! connection. Legs enforce their invariants at construction time, so code
//! that receives a `Leg` can trust its validity.

mod airport;
mod error;
mod itinerary;
mod leg;
mod policy;

pub use airport::{AirportCode, InvalidAirportCode};
pub use error::ItineraryError;
pub use itinerary::Itinerary;
pub use leg::Leg;
pub use policy::{BaggagePolicy, UnknownBaggagePolicy};
