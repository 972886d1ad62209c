//! Caller-side selection policies
//!
//! Policies pick from an already ranked list. They never feed back into the
//! resolvers.

use super::{leading_ties, order_by_fairness_gap};
use crate::schedule::TimeResolution;
use crate::venue::LocationScore;
use serde::{Deserialize, Serialize};

/// How to choose among the most supported time slots
///
/// # Example
///
/// ```
/// use rendezvous_domain::ranking::TimePolicy;
///
/// let policy: TimePolicy = "all-tied".parse().unwrap();
/// assert_eq!(policy, TimePolicy::AllTied);
/// assert_eq!(TimePolicy::default(), TimePolicy::Earliest);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TimePolicy {
    /// Single winner: the earliest of the most supported slots
    #[default]
    Earliest,

    /// Every slot tied for the highest support
    AllTied,
}

impl TimePolicy {
    /// Apply the policy to a support-ordered ranking
    pub fn select<'a>(&self, ranking: &'a [TimeResolution]) -> &'a [TimeResolution] {
        match self {
            TimePolicy::Earliest => &ranking[..ranking.len().min(1)],
            TimePolicy::AllTied => leading_ties(ranking),
        }
    }

    /// Get a human-readable description of this policy
    pub fn description(&self) -> &'static str {
        match self {
            TimePolicy::Earliest => "earliest of the most supported slots",
            TimePolicy::AllTied => "all slots tied for most support",
        }
    }
}

impl std::fmt::Display for TimePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimePolicy::Earliest => write!(f, "earliest"),
            TimePolicy::AllTied => write!(f, "all-tied"),
        }
    }
}

impl std::str::FromStr for TimePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "earliest" | "first" => Ok(TimePolicy::Earliest),
            "all-tied" | "all_tied" | "tied" | "all" => Ok(TimePolicy::AllTied),
            _ => Err(format!(
                "Unknown time policy: {}. Valid: earliest, all-tied",
                s
            )),
        }
    }
}

/// How to order venues for presentation
///
/// # Example
///
/// ```
/// use rendezvous_domain::ranking::LocationPolicy;
///
/// let policy: LocationPolicy = "most-equitable".parse().unwrap();
/// assert_eq!(policy, LocationPolicy::MostEquitable);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LocationPolicy {
    /// Keep the resolver's order: lowest average distance first
    #[default]
    BestAverage,

    /// Lowest fairness gap first, so nobody travels much more than the rest
    MostEquitable,
}

impl LocationPolicy {
    /// Apply the policy to a resolver ranking
    pub fn arrange(&self, scores: &[LocationScore]) -> Vec<LocationScore> {
        let mut arranged = scores.to_vec();
        if let LocationPolicy::MostEquitable = self {
            order_by_fairness_gap(&mut arranged);
        }
        arranged
    }

    /// Get a human-readable description of this policy
    pub fn description(&self) -> &'static str {
        match self {
            LocationPolicy::BestAverage => "lowest average distance",
            LocationPolicy::MostEquitable => "most evenly shared travel",
        }
    }
}

impl std::fmt::Display for LocationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationPolicy::BestAverage => write!(f, "best-average"),
            LocationPolicy::MostEquitable => write!(f, "most-equitable"),
        }
    }
}

impl std::str::FromStr for LocationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "best-average" | "best_average" | "average" => Ok(LocationPolicy::BestAverage),
            "most-equitable" | "most_equitable" | "equitable" | "fair" => {
                Ok(LocationPolicy::MostEquitable)
            }
            _ => Err(format!(
                "Unknown location policy: {}. Valid: best-average, most-equitable",
                s
            )),
        }
    }
}
