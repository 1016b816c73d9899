//! Itinerary type.
//!
//! An `Itinerary` is an ordered, double-ended sequence of flight legs.
//! It exposes a small kernel (push/pop at either end, length, clear) and
//! a secondary layer of queries derived from it: origin, destination,
//! the layover between two legs and baggage-policy connection checks.

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::{AirportCode, BaggagePolicy, ItineraryError, Leg};

/// A journey made of flight legs, in travel order.
///
/// The itinerary owns its legs. It does not check that consecutive legs
/// are chronologically consistent; a bad pair shows up as a negative
/// layover.
///
/// # Examples
///
/// ```
/// use flight_itinerary::domain::{BaggagePolicy, Itinerary, Leg};
///
/// let mut itinerary = Itinerary::new();
/// itinerary.add_to_end(Leg::new("CMH", "ORD", 440, 515).unwrap());
/// itinerary.add_to_end(Leg::new("ORD", "SFO", 600, 775).unwrap());
///
/// assert_eq!(itinerary.origin(), "CMH");
/// assert_eq!(itinerary.destination(), "SFO");
/// assert_eq!(itinerary.layover_time().unwrap(), 85);
/// assert!(itinerary
///     .is_connection_valid_for_policy(BaggagePolicy::ThroughCheck, 60, 120)
///     .unwrap());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Itinerary {
    legs: VecDeque<Leg>,
}

impl Itinerary {
    /// Creates an empty itinerary.
    pub fn new() -> Self {
        Self::default()
    }

    // Kernel

    /// Inserts a leg as the new first leg.
    pub fn add_to_front(&mut self, leg: Leg) {
        trace!(leg = %leg, "add_to_front");
        self.legs.push_front(leg);
    }

    /// Removes and returns the first leg.
    ///
    /// # Errors
    ///
    /// Returns `EmptySequence` if the itinerary has no legs.
    pub fn remove_from_front(&mut self) -> Result<Leg, ItineraryError> {
        self.legs.pop_front().ok_or(ItineraryError::EmptySequence)
    }

    /// Inserts a leg as the new last leg.
    pub fn add_to_end(&mut self, leg: Leg) {
        trace!(leg = %leg, "add_to_end");
        self.legs.push_back(leg);
    }

    /// Removes and returns the last leg.
    ///
    /// # Errors
    ///
    /// Returns `EmptySequence` if the itinerary has no legs.
    pub fn remove_from_end(&mut self) -> Result<Leg, ItineraryError> {
        self.legs.pop_back().ok_or(ItineraryError::EmptySequence)
    }

    /// Returns the number of legs.
    pub fn length(&self) -> usize {
        self.legs.len()
    }

    /// Returns true if there are no legs.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Removes all legs.
    pub fn clear(&mut self) {
        self.legs.clear();
    }

    /// Iterates over the legs in travel order.
    pub fn legs(&self) -> impl ExactSizeIterator<Item = &Leg> + '_ {
        self.legs.iter()
    }

    // Secondary layer

    /// Returns the departure airport of the first leg, or `""` if empty.
    pub fn origin(&self) -> &str {
        self.legs
            .front()
            .map_or("", |leg| leg.from_airport().as_str())
    }

    /// Returns the arrival airport of the last leg, or `""` if empty.
    pub fn destination(&self) -> &str {
        self.legs
            .back()
            .map_or("", |leg| leg.to_airport().as_str())
    }

    /// Returns the airport where the single connection happens.
    ///
    /// # Errors
    ///
    /// Returns `WrongLegCount` unless exactly two legs are present.
    pub fn connection_airport(&self) -> Result<&AirportCode, ItineraryError> {
        let (first, _) = self.connection()?;
        Ok(first.to_airport())
    }

    /// Returns the layover in minutes between the first and second leg.
    ///
    /// The result is negative when the second leg departs before the first
    /// one arrives; that is reported, not rejected.
    ///
    /// # Errors
    ///
    /// Returns `WrongLegCount` unless exactly two legs are present.
    pub fn layover_time(&self) -> Result<i64, ItineraryError> {
        let (first, second) = self.connection()?;
        Ok(second.depart_minute() - first.arrive_minute())
    }

    /// Returns true if the layover is at least `min_layover_minutes`.
    ///
    /// # Errors
    ///
    /// Returns `NegativeThreshold` if `min_layover_minutes < 0`, or
    /// `WrongLegCount` unless exactly two legs are present.
    pub fn is_connection_valid(&self, min_layover_minutes: i64) -> Result<bool, ItineraryError> {
        require_non_negative("min_layover_minutes", min_layover_minutes)?;

        let layover = self.layover_time()?;
        let valid = layover >= min_layover_minutes;
        debug!(
            layover,
            min_layover = min_layover_minutes,
            valid,
            "Checked connection"
        );
        Ok(valid)
    }

    /// Checks the connection against the threshold chosen by `policy`.
    ///
    /// `min_through` applies to `ThroughCheck`, `min_recheck` to
    /// `RecheckRequired`. Both thresholds are validated whichever applies.
    ///
    /// # Errors
    ///
    /// Returns `NegativeThreshold` if either threshold is negative, or
    /// `WrongLegCount` unless exactly two legs are present.
    pub fn is_connection_valid_for_policy(
        &self,
        policy: BaggagePolicy,
        min_through: i64,
        min_recheck: i64,
    ) -> Result<bool, ItineraryError> {
        require_non_negative("min_through", min_through)?;
        require_non_negative("min_recheck", min_recheck)?;

        debug!(%policy, min_through, min_recheck, "Selecting threshold");
        self.is_connection_valid(policy.select(min_through, min_recheck))
    }

    /// Checks the connection against a threshold looked up per airport.
    ///
    /// `threshold` receives the connection airport and the policy and
    /// returns the minimum layover in minutes (see
    /// `LayoverRules::as_lookup`).
    ///
    /// # Errors
    ///
    /// Returns `WrongLegCount` unless exactly two legs are present, or
    /// `NegativeThreshold` if the lookup yields a negative value.
    pub fn is_connection_valid_with<F>(
        &self,
        policy: BaggagePolicy,
        threshold: F,
    ) -> Result<bool, ItineraryError>
    where
        F: Fn(&AirportCode, BaggagePolicy) -> i64,
    {
        let airport = self.connection_airport()?;
        let min_layover = threshold(airport, policy);
        debug!(airport = %airport, %policy, min_layover, "Looked up threshold");
        self.is_connection_valid(min_layover)
    }

    /// Borrows the two legs of a one-connection itinerary.
    fn connection(&self) -> Result<(&Leg, &Leg), ItineraryError> {
        match (self.legs.len(), self.legs.front(), self.legs.get(1)) {
            (2, Some(first), Some(second)) => Ok((first, second)),
            (actual, _, _) => Err(ItineraryError::WrongLegCount { actual }),
        }
    }
}

impl FromIterator<Leg> for Itinerary {
    fn from_iter<I: IntoIterator<Item = Leg>>(iter: I) -> Self {
        Itinerary {
            legs: iter.into_iter().collect(),
        }
    }
}

impl Extend<Leg> for Itinerary {
    fn extend<I: IntoIterator<Item = Leg>>(&mut self, iter: I) {
        self.legs.extend(iter);
    }
}

fn require_non_negative(name: &'static str, value: i64) -> Result<(), ItineraryError> {
    if value < 0 {
        return Err(ItineraryError::NegativeThreshold { name, value });
    }
    Ok(())
}
