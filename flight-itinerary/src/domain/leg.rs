//! Flight leg type.
//!
//! A `Leg` represents a single flight segment from departure to arrival.
//! It is immutable once built, so it can be cloned into several
//! itineraries without any aliasing concerns.

use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::{AirportCode, ItineraryError};

/// A leg of an itinerary (one flight).
///
/// Times are minutes since a caller-chosen reference instant.
///
/// # Invariants
///
/// - Both airport codes are non-blank and normalized
/// - `arrive_minute >= depart_minute >= 0`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LegRecord", into = "LegRecord")]
pub struct Leg {
    from_airport: AirportCode,
    to_airport: AirportCode,
    depart_minute: i64,
    arrive_minute: i64,
}

impl Leg {
    /// Construct a leg, normalizing airport codes and validating times.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - Either airport code is blank
    /// - Either time is negative
    /// - `arrive_minute < depart_minute`
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_itinerary::domain::Leg;
    ///
    /// let leg = Leg::new("cmh", "ORD", 440, 515).unwrap();
    /// assert_eq!(leg.from_airport().as_str(), "CMH");
    /// assert_eq!(leg.flight_minutes(), 75);
    ///
    /// assert!(Leg::new("CMH", "ORD", 515, 440).is_err());
    /// ```
    pub fn new(
        from_airport: &str,
        to_airport: &str,
        depart_minute: i64,
        arrive_minute: i64,
    ) -> Result<Self, ItineraryError> {
        let from_airport = AirportCode::parse(from_airport)
            .map_err(|_| ItineraryError::InvalidLeg("from_airport must not be blank"))?;
        let to_airport = AirportCode::parse(to_airport)
            .map_err(|_| ItineraryError::InvalidLeg("to_airport must not be blank"))?;

        if depart_minute < 0 {
            return Err(ItineraryError::InvalidLeg(
                "depart_minute must be non-negative",
            ));
        }
        if arrive_minute < 0 {
            return Err(ItineraryError::InvalidLeg(
                "arrive_minute must be non-negative",
            ));
        }
        if arrive_minute < depart_minute {
            return Err(ItineraryError::InvalidLeg(
                "arrive_minute must not precede depart_minute",
            ));
        }

        Ok(Leg {
            from_airport,
            to_airport,
            depart_minute,
            arrive_minute,
        })
    }

    /// Returns the departure airport.
    pub fn from_airport(&self) -> &AirportCode {
        &self.from_airport
    }

    /// Returns the arrival airport.
    pub fn to_airport(&self) -> &AirportCode {
        &self.to_airport
    }

    /// Returns the departure time in minutes.
    pub fn depart_minute(&self) -> i64 {
        self.depart_minute
    }

    /// Returns the arrival time in minutes.
    pub fn arrive_minute(&self) -> i64 {
        self.arrive_minute
    }

    /// Returns the time in the air, in minutes (never negative).
    pub fn flight_minutes(&self) -> i64 {
        self.arrive_minute - self.depart_minute
    }

    /// Returns the time in the air as a Duration.
    ///
    /// `None` if the minutes exceed what `Duration` can hold.
    pub fn flight_duration(&self) -> Option<Duration> {
        Duration::try_minutes(self.flight_minutes())
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}->{} ({}→{})",
            self.from_airport, self.to_airport, self.depart_minute, self.arrive_minute
        )
    }
}

/// Wire shape of a leg. Deserializing goes through `Leg::new`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LegRecord {
    from: String,
    to: String,
    depart_minute: i64,
    arrive_minute: i64,
}

impl TryFrom<LegRecord> for Leg {
    type Error = ItineraryError;

    fn try_from(record: LegRecord) -> Result<Self, Self::Error> {
        Leg::new(
            &record.from,
            &record.to,
            record.depart_minute,
            record.arrive_minute,
        )
    }
}

impl From<Leg> for LegRecord {
    fn from(leg: Leg) -> Self {
        LegRecord {
            from: leg.from_airport.into(),
            to: leg.to_airport.into(),
            depart_minute: leg.depart_minute,
            arrive_minute: leg.arrive_minute,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: construction succeeds exactly when 0 <= depart <= arrive.
        #[test]
        fn time_ordering_decides_validity(
            depart in -100i64..2000,
            arrive in -100i64..2000,
        ) {
            let result = Leg::new("AAA", "BBB", depart, arrive);
            let expected_ok = depart >= 0 && arrive >= depart;
            prop_assert_eq!(result.is_ok(), expected_ok);
        }

        /// Property: flight_minutes() is never negative and matches the times.
        #[test]
        fn flight_minutes_non_negative(
            depart in 0i64..10_000,
            length in 0i64..1_000,
        ) {
            let leg = Leg::new("AAA", "BBB", depart, depart + length).unwrap();
            prop_assert_eq!(leg.flight_minutes(), length);
            prop_assert!(leg.flight_minutes() >= 0);
        }

        /// Property: airport codes come out trimmed and uppercase.
        #[test]
        fn airports_normalized(code in "[ ]{0,3}[a-zA-Z]{1,4}[ ]{0,3}") {
            let leg = Leg::new(&code, &code, 0, 1).unwrap();
            let expected = code.trim().to_uppercase();
            prop_assert_eq!(leg.from_airport().as_str(), expected.as_str());
            prop_assert_eq!(leg.to_airport().as_str(), expected.as_str());
        }
    }
}
