//! Flight itinerary model.
//!
//! Answers: "Given these two flights and how my bags are handled, is the
//! connection long enough?"

pub mod config;
pub mod domain;
pub mod rules;
