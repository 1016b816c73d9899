//! Per-airport minimum layover rules.
//!
//! Some airports need more time than the configured default to make a
//! connection (terminal changes, customs, bag recheck). This module
//! provides lookup of airport and policy specific thresholds with a
//! fallback for airports that have no rule.

use std::collections::HashMap;

use chrono::Duration;

use crate::config::ConnectionConfig;
use crate::domain::{AirportCode, BaggagePolicy};

/// A collection of minimum layover rules keyed by airport and policy.
#[derive(Debug, Clone, Default)]
pub struct LayoverRules {
    /// Map from (airport, policy) to minimum layover in minutes.
    rules: HashMap<(AirportCode, BaggagePolicy), i64>,
}

impl LayoverRules {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum layover for an airport and policy.
    ///
    /// Replaces any previous rule for the same pair.
    pub fn insert(&mut self, airport: AirportCode, policy: BaggagePolicy, minutes: i64) {
        self.rules.insert((airport, policy), minutes);
    }

    /// Get the minimum layover (minutes) for an airport and policy, if a rule exists.
    pub fn get(&self, airport: &AirportCode, policy: BaggagePolicy) -> Option<i64> {
        self.rules.get(&(airport.clone(), policy)).copied()
    }

    /// Get the minimum layover, or `fallback` if no rule exists.
    pub fn value_or_default(
        &self,
        airport: &AirportCode,
        policy: BaggagePolicy,
        fallback: i64,
    ) -> i64 {
        self.get(airport, policy).unwrap_or(fallback)
    }

    /// Get the minimum layover as a Duration, if a rule exists and fits.
    pub fn duration(&self, airport: &AirportCode, policy: BaggagePolicy) -> Option<Duration> {
        self.get(airport, policy).and_then(Duration::try_minutes)
    }

    /// Check if an airport has a rule for the given policy.
    pub fn contains(&self, airport: &AirportCode, policy: BaggagePolicy) -> bool {
        self.rules.contains_key(&(airport.clone(), policy))
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Create a closure suitable for `Itinerary::is_connection_valid_with`.
    ///
    /// Airports without a rule fall back to the threshold in `defaults`.
    ///
    /// # Example
    ///
    /// ```
    /// use flight_itinerary::config::ConnectionConfig;
    /// use flight_itinerary::domain::{BaggagePolicy, Itinerary, Leg};
    /// use flight_itinerary::rules::LayoverRulesBuilder;
    ///
    /// let rules = LayoverRulesBuilder::new()
    ///     .add("ORD", BaggagePolicy::ThroughCheck, 90)
    ///     .build();
    /// let defaults = ConnectionConfig::default();
    ///
    /// let itinerary: Itinerary = vec![
    ///     Leg::new("CMH", "ORD", 440, 515).unwrap(),
    ///     Leg::new("ORD", "SFO", 600, 775).unwrap(),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// // 85 minutes is not enough at ORD under the stricter rule
    /// let valid = itinerary
    ///     .is_connection_valid_with(BaggagePolicy::ThroughCheck, rules.as_lookup(&defaults))
    ///     .unwrap();
    /// assert!(!valid);
    /// ```
    pub fn as_lookup<'a>(
        &'a self,
        defaults: &'a ConnectionConfig,
    ) -> impl Fn(&AirportCode, BaggagePolicy) -> i64 + 'a {
        move |airport: &AirportCode, policy: BaggagePolicy| {
            self.value_or_default(airport, policy, defaults.threshold(policy))
        }
    }
}

/// Builder for creating layover rules.
///
/// Provides a fluent API for adding rules.
#[derive(Debug, Default)]
pub struct LayoverRulesBuilder {
    inner: LayoverRules,
}

impl LayoverRulesBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule. Blank airports and negative minutes are skipped.
    pub fn add(mut self, airport: &str, policy: BaggagePolicy, minutes: i64) -> Self {
        if let (Ok(code), true) = (AirportCode::parse(airport), minutes >= 0) {
            self.inner.insert(code, policy, minutes);
        }
        self
    }

    /// Build the layover rules.
    pub fn build(self) -> LayoverRules {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    #[test]
    fn empty_rules() {
        let rules = LayoverRules::new();
        assert!(rules.is_empty());
        assert_eq!(rules.len(), 0);
        assert!(rules.get(&code("ORD"), BaggagePolicy::ThroughCheck).is_none());
    }

    #[test]
    fn insert_and_lookup() {
        let mut rules = LayoverRules::new();
        rules.insert(code("ORD"), BaggagePolicy::ThroughCheck, 50);

        assert!(!rules.is_empty());
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.get(&code("ORD"), BaggagePolicy::ThroughCheck), Some(50));
        assert_eq!(
            rules.duration(&code("ORD"), BaggagePolicy::ThroughCheck),
            Some(Duration::minutes(50))
        );

        // Rules are per policy
        assert!(rules.get(&code("ORD"), BaggagePolicy::RecheckRequired).is_none());
        assert!(rules.contains(&code("ORD"), BaggagePolicy::ThroughCheck));
        assert!(!rules.contains(&code("ORD"), BaggagePolicy::RecheckRequired));
    }

    #[test]
    fn duration_out_of_range() {
        let rules = LayoverRulesBuilder::new()
            .add("ORD", BaggagePolicy::RecheckRequired, i64::MAX)
            .build();

        assert_eq!(rules.get(&code("ORD"), BaggagePolicy::RecheckRequired), Some(i64::MAX));
        assert_eq!(rules.duration(&code("ORD"), BaggagePolicy::RecheckRequired), None);
    }

    #[test]
    fn insert_replaces() {
        let mut rules = LayoverRules::new();
        rules.insert(code("ORD"), BaggagePolicy::ThroughCheck, 50);
        rules.insert(code("ORD"), BaggagePolicy::ThroughCheck, 70);

        assert_eq!(rules.len(), 1);
        assert_eq!(rules.get(&code("ORD"), BaggagePolicy::ThroughCheck), Some(70));
    }

    #[test]
    fn value_or_default() {
        let mut rules = LayoverRules::new();
        rules.insert(code("JFK"), BaggagePolicy::RecheckRequired, 180);

        assert_eq!(
            rules.value_or_default(&code("JFK"), BaggagePolicy::RecheckRequired, 120),
            180
        );
        assert_eq!(
            rules.value_or_default(&code("JFK"), BaggagePolicy::ThroughCheck, 60),
            60
        );
        assert_eq!(
            rules.value_or_default(&code("ATL"), BaggagePolicy::RecheckRequired, 120),
            120
        );
    }

    #[test]
    fn builder() {
        let rules = LayoverRulesBuilder::new()
            .add("ord", BaggagePolicy::ThroughCheck, 50)
            .add("JFK", BaggagePolicy::RecheckRequired, 180)
            .build();

        assert_eq!(rules.len(), 2);
        assert_eq!(rules.get(&code("ORD"), BaggagePolicy::ThroughCheck), Some(50));
        assert_eq!(rules.get(&code("JFK"), BaggagePolicy::RecheckRequired), Some(180));
    }

    #[test]
    fn builder_ignores_invalid_rules() {
        let rules = LayoverRulesBuilder::new()
            .add("  ", BaggagePolicy::ThroughCheck, 50) // Blank airport
            .add("ORD", BaggagePolicy::ThroughCheck, -5) // Negative minutes
            .add("ORD", BaggagePolicy::RecheckRequired, 150) // Valid
            .build();

        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn as_lookup_closure() {
        let rules = LayoverRulesBuilder::new()
            .add("ORD", BaggagePolicy::ThroughCheck, 45)
            .build();
        let defaults = ConnectionConfig::new(60, 120);

        let lookup = rules.as_lookup(&defaults);

        assert_eq!(lookup(&code("ORD"), BaggagePolicy::ThroughCheck), 45);
        assert_eq!(lookup(&code("ORD"), BaggagePolicy::RecheckRequired), 120);
        assert_eq!(lookup(&code("SFO"), BaggagePolicy::ThroughCheck), 60);
    }
}
