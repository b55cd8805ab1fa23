//! Plan identifiers

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Identifies an execution strategy.
///
/// Parsing never fails: names other than `plan1`/`plan2` become
/// `Unknown`, which costs `MAX_COST` and executes to nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlanId {
    /// Nested-loop join, users outer
    Plan1,
    /// Filtered join, orders outer with `quantity > 1`
    Plan2,
    /// Any other name
    Unknown(String),
}

impl PlanId {
    /// Plans the selector considers, in estimation order
    pub const KNOWN: [PlanId; 2] = [PlanId::Plan1, PlanId::Plan2];

    /// Returns the plan name
    pub fn as_str(&self) -> &str {
        match self {
            PlanId::Plan1 => "plan1",
            PlanId::Plan2 => "plan2",
            PlanId::Unknown(name) => name,
        }
    }

    /// Returns the strategy label used in explain output
    pub fn strategy(&self) -> &'static str {
        match self {
            PlanId::Plan1 => "JOIN",
            PlanId::Plan2 => "FILTERED_JOIN",
            PlanId::Unknown(_) => "NONE",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, PlanId::Unknown(_))
    }
}

impl FromStr for PlanId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PlanId::from(s))
    }
}

impl From<&str> for PlanId {
    fn from(s: &str) -> Self {
        match s {
            "plan1" => PlanId::Plan1,
            "plan2" => PlanId::Plan2,
            other => PlanId::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for PlanId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
