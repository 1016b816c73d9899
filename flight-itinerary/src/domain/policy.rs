//! Baggage handling policy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown baggage policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown baggage policy: {0}")]
pub struct UnknownBaggagePolicy(String);

/// How checked baggage gets from the first leg onto the second.
///
/// The policy only selects which minimum layover applies to a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BaggagePolicy {
    /// Bags are transferred automatically
    ThroughCheck,
    /// Passenger must reclaim and recheck bags
    RecheckRequired,
}

impl BaggagePolicy {
    /// All policies, in declaration order.
    pub const ALL: [BaggagePolicy; 2] = [
        BaggagePolicy::ThroughCheck,
        BaggagePolicy::RecheckRequired,
    ];

    /// Returns the canonical name (e.g. `THROUGH_CHECK`).
    pub fn as_str(&self) -> &'static str {
        match self {
            BaggagePolicy::ThroughCheck => "THROUGH_CHECK",
            BaggagePolicy::RecheckRequired => "RECHECK_REQUIRED",
        }
    }

    /// Pick the threshold matching this policy.
    pub fn select<T>(&self, through: T, recheck: T) -> T {
        match self {
            BaggagePolicy::ThroughCheck => through,
            BaggagePolicy::RecheckRequired => recheck,
        }
    }
}

impl fmt::Display for BaggagePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BaggagePolicy {
    type Err = UnknownBaggagePolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        BaggagePolicy::ALL
            .into_iter()
            .find(|policy| policy.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownBaggagePolicy(name.to_string()))
    }
}
