//! Connection threshold configuration.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{BaggagePolicy, ItineraryError};

/// Environment variable overriding `min_through_mins`.
pub const MIN_THROUGH_ENV: &str = "ITINERARY_MIN_THROUGH_MINS";

/// Environment variable overriding `min_recheck_mins`.
pub const MIN_RECHECK_ENV: &str = "ITINERARY_MIN_RECHECK_MINS";

/// Default minimum layover thresholds, one per baggage policy.
///
/// Deserializing rejects negative thresholds; missing fields take their
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConnectionConfigRecord")]
pub struct ConnectionConfig {
    /// Minimum layover (minutes) when bags are through-checked.
    pub min_through_mins: i64,

    /// Minimum layover (minutes) when bags must be rechecked.
    pub min_recheck_mins: i64,
}

impl ConnectionConfig {
    /// Create a new configuration with the given thresholds.
    pub fn new(min_through_mins: i64, min_recheck_mins: i64) -> Self {
        Self {
            min_through_mins,
            min_recheck_mins,
        }
    }

    /// Create a configuration, rejecting negative thresholds.
    ///
    /// # Errors
    ///
    /// Returns `NegativeThreshold` naming the first negative field.
    pub fn try_new(min_through_mins: i64, min_recheck_mins: i64) -> Result<Self, ItineraryError> {
        for (name, value) in [
            ("min_through_mins", min_through_mins),
            ("min_recheck_mins", min_recheck_mins),
        ] {
            if value < 0 {
                return Err(ItineraryError::NegativeThreshold { name, value });
            }
        }
        Ok(Self::new(min_through_mins, min_recheck_mins))
    }

    /// Load thresholds from the process environment.
    ///
    /// Unset variables keep their default. Unparseable or negative values
    /// are ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load thresholds through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            min_through_mins: read_minutes(&lookup, MIN_THROUGH_ENV, defaults.min_through_mins),
            min_recheck_mins: read_minutes(&lookup, MIN_RECHECK_ENV, defaults.min_recheck_mins),
        }
    }

    /// Returns the threshold (minutes) that applies to `policy`.
    pub fn threshold(&self, policy: BaggagePolicy) -> i64 {
        policy.select(self.min_through_mins, self.min_recheck_mins)
    }

    /// Returns the through-check minimum as a Duration.
    ///
    /// `None` if the minutes exceed what `Duration` can hold.
    pub fn min_through(&self) -> Option<Duration> {
        Duration::try_minutes(self.min_through_mins)
    }

    /// Returns the recheck minimum as a Duration.
    ///
    /// `None` if the minutes exceed what `Duration` can hold.
    pub fn min_recheck(&self) -> Option<Duration> {
        Duration::try_minutes(self.min_recheck_mins)
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            min_through_mins: 60,
            min_recheck_mins: 120, // 2 hours
        }
    }
}

/// Wire shape of the config. Deserializing goes through `try_new`.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct ConnectionConfigRecord {
    min_through_mins: i64,
    min_recheck_mins: i64,
}

impl Default for ConnectionConfigRecord {
    fn default() -> Self {
        let defaults = ConnectionConfig::default();
        Self {
            min_through_mins: defaults.min_through_mins,
            min_recheck_mins: defaults.min_recheck_mins,
        }
    }
}

impl TryFrom<ConnectionConfigRecord> for ConnectionConfig {
    type Error = ItineraryError;

    fn try_from(record: ConnectionConfigRecord) -> Result<Self, Self::Error> {
        ConnectionConfig::try_new(record.min_through_mins, record.min_recheck_mins)
    }
}

fn read_minutes<F>(lookup: &F, key: &str, default: i64) -> i64
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };

    match raw.trim().parse::<i64>() {
        Ok(mins) if mins >= 0 => mins,
        _ => {
            warn!(key, value = %raw, default, "Ignoring invalid threshold");
            default
        }
    }
}
