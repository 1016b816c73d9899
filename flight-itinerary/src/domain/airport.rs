//! Airport code types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code: {reason}")]
pub struct InvalidAirportCode {
    reason: &'static str,
}

/// A normalized airport identifier.
///
/// Input is trimmed and uppercased, so `" cmh "` and `"CMH"` compare equal.
/// Blank input is rejected. No length or alphabet restriction is applied:
/// IATA, ICAO and private codes are all accepted.
///
/// # Examples
///
/// ```
/// use flight_itinerary::domain::AirportCode;
///
/// let ord = AirportCode::parse(" ord ").unwrap();
/// assert_eq!(ord.as_str(), "ORD");
///
/// // Blank input is rejected
/// assert!(AirportCode::parse("").is_err());
/// assert!(AirportCode::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AirportCode(String);

impl AirportCode {
    /// Parse an airport code, trimming whitespace and folding to uppercase.
    pub fn parse(s: &str) -> Result<Self, InvalidAirportCode> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidAirportCode {
                reason: "must not be blank",
            });
        }

        Ok(AirportCode(trimmed.to_uppercase()))
    }

    /// Returns the canonical code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AirportCode {
    type Error = InvalidAirportCode;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        AirportCode::parse(&s)
    }
}

impl From<AirportCode> for String {
    fn from(code: AirportCode) -> Self {
        code.0
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.as_str())
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
